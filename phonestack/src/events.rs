// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle notifications and the subscriber list.

use alloc::rc::Rc;
use alloc::vec::Vec;

use phonestack_scene::ElementId;

use crate::phone::PhoneId;

/// Identity of a component instance: its root element.
///
/// Element ids are generational, so a `StackId` is never reused by a later
/// component even when the root's slot is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StackId(pub(crate) ElementId);

impl StackId {
    /// The component's root element.
    pub fn root(self) -> ElementId {
        self.0
    }
}

/// Kinds of notification a subscriber can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// See [`Notification::Activated`].
    Activated,
    /// See [`Notification::Deactivated`].
    Deactivated,
}

/// Emitted after a transition has been reflected onto markup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// An item became the active selection.
    Activated {
        /// The newly active item.
        item: PhoneId,
        /// The component that changed.
        source: StackId,
    },
    /// The selection became empty.
    Deactivated {
        /// The component that changed.
        source: StackId,
    },
}

impl Notification {
    /// This notification's kind.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Activated { .. } => NotificationKind::Activated,
            Self::Deactivated { .. } => NotificationKind::Deactivated,
        }
    }

    /// The component that emitted it.
    pub fn source(&self) -> StackId {
        match *self {
            Self::Activated { source, .. } | Self::Deactivated { source } => source,
        }
    }
}

/// Handle returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

pub(crate) type Callback = Rc<dyn Fn(&Notification)>;

/// Subscribers in registration order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next: u64,
    entries: Vec<(Subscription, NotificationKind, Callback)>,
}

impl core::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Subscribers {
    pub(crate) fn add(&mut self, kind: NotificationKind, callback: Callback) -> Subscription {
        let sub = Subscription(self.next);
        self.next += 1;
        self.entries.push((sub, kind, callback));
        sub
    }

    pub(crate) fn remove(&mut self, sub: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(s, _, _)| *s != sub);
        self.entries.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Callbacks for `kind`, cloned out so they can run without any borrow held.
    pub(crate) fn interested(&self, kind: NotificationKind) -> Vec<Callback> {
        self.entries
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, cb)| cb.clone())
            .collect()
    }
}
