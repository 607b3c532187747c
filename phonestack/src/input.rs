// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events understood by the [`Document`](crate::Document).

use kurbo::Point;

/// Keys the component and the document react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab; moves focus unless a handler consumes it.
    Tab,
    /// Anything else.
    Other,
}

/// An input event, in world coordinates where it has a position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A completed pointer click.
    Click {
        /// Position of the click.
        point: Point,
    },
    /// A touch lifted off the surface.
    TouchEnd {
        /// Position where the touch ended.
        point: Point,
    },
    /// A key press, routed to the focused element.
    KeyDown {
        /// The key.
        key: Key,
        /// Whether Shift was held.
        shift: bool,
    },
    /// The pointer moved.
    PointerMove {
        /// New pointer position.
        point: Point,
    },
    /// The pointer entered an element; delivered to that element only.
    PointerEnter,
    /// The pointer left an element; delivered to that element only.
    PointerLeave,
}

/// Discriminant of an [`InputEvent`], used to register listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`InputEvent::Click`].
    Click,
    /// [`InputEvent::TouchEnd`].
    TouchEnd,
    /// [`InputEvent::KeyDown`].
    KeyDown,
    /// [`InputEvent::PointerMove`].
    PointerMove,
    /// [`InputEvent::PointerEnter`].
    PointerEnter,
    /// [`InputEvent::PointerLeave`].
    PointerLeave,
}

impl InputEvent {
    /// The event's kind.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::TouchEnd { .. } => EventKind::TouchEnd,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerEnter => EventKind::PointerEnter,
            Self::PointerLeave => EventKind::PointerLeave,
        }
    }

    /// World position for positional events.
    pub fn point(&self) -> Option<Point> {
        match *self {
            Self::Click { point } | Self::TouchEnd { point } | Self::PointerMove { point } => {
                Some(point)
            }
            Self::KeyDown { .. } | Self::PointerEnter | Self::PointerLeave => None,
        }
    }

    /// The key for keyboard events.
    pub fn key(&self) -> Option<Key> {
        match *self {
            Self::KeyDown { key, .. } => Some(key),
            _ => None,
        }
    }
}
