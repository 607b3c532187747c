// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless document host: a scene, element listeners, focus, hover, and input dispatch.
//!
//! ## Dispatch
//!
//! Positional events are hit-tested against the scene (visible, pickable
//! elements only) and routed capture → target → bubble along the target's
//! ancestry. Keyboard events route to the focused element, or to the document
//! root when nothing is focused.
//!
//! At each step every matching listener on that element runs in registration
//! order. Capture listeners run during capture, bubble listeners during
//! bubble, and both kinds on the target. The strongest [`Outcome`] returned on
//! a step decides whether propagation continues.
//!
//! ## Default actions
//!
//! - A click moves focus to the nearest focusable ancestor-or-self of its
//!   target (or clears focus) before dispatch.
//! - An unconsumed `Tab` key moves focus through [`Scene::focus_order`].
//! - [`Document::tap`] delivers a touch end and then, unless it was consumed,
//!   the compatibility click a browser would synthesize.

use alloc::rc::Rc;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use phonestack_responder::adapters::scene::hits_for_point;
use phonestack_responder::dispatcher::{self, DispatchResult};
use phonestack_responder::focus::FocusState;
use phonestack_responder::hover::{HoverEvent, HoverState, path_from_dispatch};
use phonestack_responder::router::Router;
use phonestack_responder::types::{Dispatch, NoParent, Outcome, Phase};
use phonestack_scene::{ElementFlags, ElementId, LocalElement, QueryFilter, Scene};

use crate::input::{EventKind, InputEvent, Key};

/// Handle of a registered listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Where in propagation a listener runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListenPhase {
    /// On the way down, and on the target.
    Capture,
    /// On the target, and on the way up.
    Bubble,
}

/// Context handed to a listener.
#[derive(Debug)]
pub struct EventCx<'a> {
    /// The document's scene, for reading and writing markup.
    pub scene: &'a mut Scene,
    /// The event being delivered.
    pub event: &'a InputEvent,
    /// Element the event was aimed at.
    pub target: ElementId,
    /// Element whose listener is running.
    pub current: ElementId,
    /// Propagation phase of this step.
    pub phase: Phase,
}

type Handler = dyn Fn(&mut EventCx<'_>) -> Outcome;

struct Listener {
    id: ListenerId,
    element: ElementId,
    kind: EventKind,
    phase: ListenPhase,
    handler: Rc<Handler>,
}

/// What a [`Document::tap`] produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TapResult {
    /// Result of the touch end.
    pub touch: DispatchResult,
    /// Result of the compatibility click, if one was delivered.
    pub click: Option<DispatchResult>,
}

/// A scene plus the event plumbing around it.
pub struct Document {
    scene: Scene,
    root: ElementId,
    listeners: Vec<Listener>,
    next_listener: u64,
    focus: FocusState<ElementId>,
    hover: HoverState<ElementId>,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Document")
            .field("scene", &self.scene)
            .field("root", &self.root)
            .field("listeners", &self.listeners.len())
            .field("focused", &self.focus.focused())
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Create a document whose root element covers `viewport`.
    pub fn new(viewport: Rect) -> Self {
        let mut scene = Scene::new();
        let root = scene.insert(
            None,
            LocalElement {
                local_bounds: viewport,
                ..Default::default()
            },
        );
        Self {
            scene,
            root,
            listeners: Vec::new(),
            next_listener: 0,
            focus: FocusState::new(),
            hover: HoverState::new(),
        }
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The scene, mutably.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Register a listener for `kind` events on `element`.
    pub fn add_listener(
        &mut self,
        element: ElementId,
        kind: EventKind,
        phase: ListenPhase,
        handler: impl Fn(&mut EventCx<'_>) -> Outcome + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener {
            id,
            element,
            kind,
            phase,
            handler: Rc::new(handler),
        });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The focused element.
    pub fn focused(&self) -> Option<ElementId> {
        self.focus.focused().filter(|id| self.scene.is_alive(*id))
    }

    /// Move focus. Elements that cannot take focus clear it instead.
    pub fn focus(&mut self, element: Option<ElementId>) {
        let element = element.filter(|id| self.is_focusable(*id));
        self.focus.set(element);
    }

    /// Dispatch an event and report how propagation ended.
    pub fn dispatch(&mut self, event: InputEvent) -> DispatchResult {
        match event {
            InputEvent::Click { point } | InputEvent::TouchEnd { point } => {
                self.focus_at(point);
                self.route_point(&event, point)
            }
            InputEvent::PointerMove { point } => {
                let seq = self.hit_sequence(point);
                let result = self.run(&event, &seq);
                let path = path_from_dispatch(&seq);
                let transitions = self.hover.update_path(&path);
                self.deliver_hover(&transitions);
                result
            }
            InputEvent::KeyDown { key, shift } => {
                let target = self.focused().unwrap_or(self.root);
                let router = Router::with_parent(&self.scene);
                let seq = router.dispatch_for(target);
                let result = self.run(&event, &seq);
                if key == Key::Tab && !result.default_prevented {
                    self.advance_focus(shift);
                }
                result
            }
            InputEvent::PointerEnter | InputEvent::PointerLeave => DispatchResult::default(),
        }
    }

    /// Click at `point`.
    pub fn click(&mut self, point: Point) -> DispatchResult {
        self.dispatch(InputEvent::Click { point })
    }

    /// Move the pointer to `point`.
    pub fn pointer_move(&mut self, point: Point) -> DispatchResult {
        self.dispatch(InputEvent::PointerMove { point })
    }

    /// Press `key` without modifiers.
    pub fn key(&mut self, key: Key) -> DispatchResult {
        self.dispatch(InputEvent::KeyDown { key, shift: false })
    }

    /// A single finger tap: a touch end, then a compatibility click unless the
    /// touch was consumed.
    pub fn tap(&mut self, point: Point) -> TapResult {
        let touch = self.dispatch(InputEvent::TouchEnd { point });
        let click = (!touch.default_prevented).then(|| self.click(point));
        TapResult { touch, click }
    }

    /// The pointer left the document; leave every hovered element.
    pub fn pointer_exit(&mut self) {
        let transitions = self.hover.clear();
        self.deliver_hover(&transitions);
    }

    /// Pointer and touch presses focus the nearest focusable element under them.
    fn focus_at(&mut self, point: Point) {
        let target = self.scene.hit_test_point(point, QueryFilter::POINTER);
        let focus = target.and_then(|hit| self.focusable_ancestor(hit.element));
        self.focus.set(focus);
    }

    fn route_point(&mut self, event: &InputEvent, point: Point) -> DispatchResult {
        let seq = self.hit_sequence(point);
        self.run(event, &seq)
    }

    /// Route to the topmost hit, or to the root when nothing was hit.
    fn hit_sequence(&self, point: Point) -> Vec<Dispatch<ElementId>> {
        let hits = hits_for_point(&self.scene, point, QueryFilter::POINTER);
        if hits.is_empty() {
            return Router::with_parent(&self.scene).dispatch_for(self.root);
        }
        Router::<ElementId, NoParent>::new().handle_with_hits(&hits)
    }

    fn run(&mut self, event: &InputEvent, seq: &[Dispatch<ElementId>]) -> DispatchResult {
        let kind = event.kind();
        let result = dispatcher::run(seq, |d| {
            let handlers: Vec<Rc<Handler>> = self
                .listeners
                .iter()
                .filter(|l| l.element == d.node && l.kind == kind && runs_in(l.phase, d.phase))
                .map(|l| l.handler.clone())
                .collect();
            let mut cx = EventCx {
                scene: &mut self.scene,
                event,
                target: d.target,
                current: d.node,
                phase: d.phase,
            };
            handlers
                .iter()
                .fold(Outcome::Continue, |acc, h| acc.max((**h)(&mut cx)))
        });
        tracing::trace!(?kind, steps = seq.len(), ?result, "dispatched");
        result
    }

    fn deliver_hover(&mut self, transitions: &[HoverEvent<ElementId>]) {
        for t in transitions {
            let (event, element) = match *t {
                HoverEvent::Enter(e) => (InputEvent::PointerEnter, e),
                HoverEvent::Leave(e) => (InputEvent::PointerLeave, e),
            };
            if !self.scene.is_alive(element) {
                continue;
            }
            let step = Dispatch {
                phase: Phase::Target,
                node: element,
                target: element,
                meta: None,
            };
            self.run(&event, &[step]);
        }
    }

    fn advance_focus(&mut self, backwards: bool) {
        let order = self.scene.focus_order();
        let next = if backwards {
            self.focus.previous_in(&order)
        } else {
            self.focus.next_in(&order)
        };
        self.focus.set(next);
    }

    fn is_focusable(&self, id: ElementId) -> bool {
        self.scene
            .flags(id)
            .is_some_and(|f| f.contains(ElementFlags::FOCUSABLE))
            && self.scene.is_rendered(id)
    }

    fn focusable_ancestor(&self, id: ElementId) -> Option<ElementId> {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if self.is_focusable(c) {
                return Some(c);
            }
            cur = self.scene.parent(c);
        }
        None
    }
}

fn runs_in(listen: ListenPhase, phase: Phase) -> bool {
    match phase {
        Phase::Target => true,
        Phase::Capture => listen == ListenPhase::Capture,
        Phase::Bubble => listen == ListenPhase::Bubble,
    }
}
