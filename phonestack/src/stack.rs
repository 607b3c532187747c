// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The phone stack component.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use phonestack_responder::types::Outcome;
use phonestack_scene::{ElementId, Scene};

use crate::config::{Config, OverlayLayout};
use crate::controller::{Controller, Transition, reflect};
use crate::document::{Document, ListenPhase, ListenerId};
use crate::error::InitError;
use crate::events::{Notification, NotificationKind, StackId, Subscribers, Subscription};
use crate::input::{EventKind, Key};
use crate::markup::{
    CARD_CLASS, DEBUG_CLASS, PHONE_ATTR, hover_marker, is_active_marker, is_hover_marker,
};
use crate::overlay::{Overlay, OverlayManager};
use crate::phone::PhoneId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lifecycle {
    Live,
    Inert(InitError),
    Destroyed,
}

#[derive(Debug)]
struct Inner {
    id: StackId,
    config: Config,
    controller: Controller,
    overlays: OverlayManager,
    items: Vec<PhoneId>,
    listeners: Vec<ListenerId>,
    subscribers: Subscribers,
    lifecycle: Lifecycle,
}

impl Inner {
    fn root(&self) -> ElementId {
        self.id.root()
    }

    fn live(&self) -> bool {
        self.lifecycle == Lifecycle::Live
    }
}

/// A stack of overlapping cards with at most one brought to the front.
///
/// The component lives in a [`Document`]: construction appends one overlay per
/// card to the container and registers the listeners that turn clicks, taps,
/// and Enter/Space on a focused overlay into [`activate`](Self::activate).
/// Every selection change updates the container's `phone-N-active` class and
/// the overlays' `aria-pressed`/`aria-expanded` before subscribers hear about
/// it.
///
/// `PhoneStack` is a cheap handle; clones refer to the same component.
///
/// ```
/// use kurbo::Rect;
/// use phonestack::{Config, Document, LocalElement, PhoneId, PhoneStack};
///
/// let mut doc = Document::new(Rect::new(0.0, 0.0, 800.0, 600.0));
/// let root = doc.root();
/// let container = doc.scene_mut().insert(
///     Some(root),
///     LocalElement { local_bounds: Rect::new(0.0, 0.0, 400.0, 600.0), ..Default::default() },
/// );
/// for token in ["1", "2", "3"] {
///     let card = doc.scene_mut().insert(Some(container), LocalElement::default());
///     doc.scene_mut().add_class(card, "phone");
///     doc.scene_mut().set_attribute(card, "data-phone", token);
/// }
///
/// let stack = PhoneStack::new(&mut doc, container, Config::default());
/// stack.activate(&mut doc, PhoneId::Two);
/// assert_eq!(stack.active(), Some(PhoneId::Two));
/// assert!(doc.scene().has_class(container, "phone-2-active"));
/// ```
#[derive(Clone, Debug)]
pub struct PhoneStack {
    inner: Rc<RefCell<Inner>>,
}

impl PhoneStack {
    /// Build the component on `root`.
    ///
    /// On failure a warning is logged and the returned instance is inert:
    /// it has no overlays or listeners and every operation is a no-op.
    pub fn new(doc: &mut Document, root: ElementId, config: Config) -> Self {
        match Self::try_new(doc, root, config.clone()) {
            Ok(stack) => stack,
            Err(error) => {
                tracing::warn!(?root, %error, "phone stack left inert");
                Self::from_inner(Inner {
                    id: StackId(root),
                    overlays: OverlayManager::empty(root, config.layout),
                    config,
                    controller: Controller::default(),
                    items: Vec::new(),
                    listeners: Vec::new(),
                    subscribers: Subscribers::default(),
                    lifecycle: Lifecycle::Inert(error),
                })
            }
        }
    }

    /// Build the component on `root`, reporting why it could not be built.
    pub fn try_new(doc: &mut Document, root: ElementId, config: Config) -> Result<Self, InitError> {
        let scene = doc.scene_mut();
        if !scene.is_alive(root) {
            return Err(InitError::StaleRoot);
        }
        let items = find_cards(scene, root);
        if items.is_empty() {
            return Err(InitError::NoCards);
        }

        let overlays = OverlayManager::create(scene, root, &items, config.layout);
        if config.debug {
            overlays.set_debug(scene, true);
        }
        reflect(scene, root, &overlays, None);

        let stack = Self::from_inner(Inner {
            id: StackId(root),
            config,
            controller: Controller::default(),
            overlays,
            items,
            listeners: Vec::new(),
            subscribers: Subscribers::default(),
            lifecycle: Lifecycle::Live,
        });
        let listeners = stack.bind(doc);
        let mut inner = stack.inner.borrow_mut();
        inner.listeners = listeners;
        tracing::debug!(?root, items = ?inner.items, "phone stack ready");
        drop(inner);
        Ok(stack)
    }

    fn from_inner(inner: Inner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Register every document listener the component needs.
    fn bind(&self, doc: &mut Document) -> Vec<ListenerId> {
        let (root, overlays) = {
            let inner = self.inner.borrow();
            (inner.root(), inner.overlays.overlays().to_vec())
        };
        let mut ids = Vec::new();

        for Overlay { item, element } in overlays {
            for kind in [EventKind::Click, EventKind::TouchEnd] {
                let cell = self.inner.clone();
                ids.push(doc.add_listener(element, kind, ListenPhase::Bubble, move |cx| {
                    transition(&cell, cx.scene, |i| i.controller.activate(item));
                    Outcome::StopAndConsume
                }));
            }

            let cell = self.inner.clone();
            ids.push(doc.add_listener(element, EventKind::KeyDown, ListenPhase::Bubble, move |cx| {
                match cx.event.key() {
                    Some(Key::Enter | Key::Space) => {
                        transition(&cell, cx.scene, |i| i.controller.activate(item));
                        Outcome::StopAndConsume
                    }
                    _ => Outcome::Continue,
                }
            }));

            let cell = self.inner.clone();
            ids.push(doc.add_listener(
                element,
                EventKind::PointerEnter,
                ListenPhase::Bubble,
                move |cx| {
                    let inner = cell.borrow();
                    if inner.live() && inner.config.hover_feedback {
                        cx.scene.add_class(inner.root(), &hover_marker(item));
                    }
                    Outcome::Continue
                },
            ));

            let cell = self.inner.clone();
            ids.push(doc.add_listener(
                element,
                EventKind::PointerLeave,
                ListenPhase::Bubble,
                move |cx| {
                    let inner = cell.borrow();
                    cx.scene.remove_class(inner.root(), &hover_marker(item));
                    Outcome::Continue
                },
            ));
        }

        // Outside clicks bubble to the document root; clicks on overlays are consumed first.
        let cell = self.inner.clone();
        ids.push(doc.add_listener(doc.root(), EventKind::Click, ListenPhase::Bubble, move |cx| {
            if !cx.scene.contains(root, cx.target) {
                transition(&cell, cx.scene, |i| {
                    if i.config.outside_click_dismiss {
                        i.controller.dismiss()
                    } else {
                        i.controller.hold()
                    }
                });
            }
            Outcome::Continue
        }));

        ids
    }

    /// Activate `item`, or deactivate it if it is already active.
    ///
    /// Items with no card in the container are ignored.
    pub fn activate(&self, doc: &mut Document, item: PhoneId) {
        transition(&self.inner, doc.scene_mut(), |i| {
            if i.items.contains(&item) {
                i.controller.activate(item)
            } else {
                i.controller.hold()
            }
        });
    }

    /// Clear the selection.
    pub fn deactivate(&self, doc: &mut Document) {
        transition(&self.inner, doc.scene_mut(), |i| i.controller.dismiss());
    }

    /// Activate the item after the active one, wrapping; from idle, the first item.
    pub fn cycle_to_next(&self, doc: &mut Document) {
        transition(&self.inner, doc.scene_mut(), |i| i.controller.cycle_next(&i.items));
    }

    /// The active item.
    pub fn active(&self) -> Option<PhoneId> {
        self.inner.borrow().controller.active()
    }

    /// Returns true if `item` is the active item.
    pub fn is_active(&self, item: PhoneId) -> bool {
        self.active() == Some(item)
    }

    /// Flip debug visualization.
    pub fn toggle_debug_mode(&self, doc: &mut Document) {
        let on = !self.inner.borrow().config.debug;
        self.set_debug(doc, on);
    }

    /// Turn debug visualization on or off.
    pub fn set_debug(&self, doc: &mut Document, on: bool) {
        let mut inner = self.inner.borrow_mut();
        if !inner.live() {
            return;
        }
        inner.config.debug = on;
        inner.overlays.set_debug(doc.scene_mut(), on);
        tracing::debug!(root = ?inner.root(), on, "debug overlays");
    }

    /// Replace the overlays' left offsets and move them.
    pub fn update_overlay_positions(&self, doc: &mut Document, offsets: [f64; PhoneId::COUNT]) {
        self.relayout(doc, |l| l.offsets = offsets);
    }

    /// Replace the overlays' widths and resize them.
    pub fn set_overlay_widths(&self, doc: &mut Document, widths: [f64; PhoneId::COUNT]) {
        self.relayout(doc, |l| l.widths = widths);
    }

    fn relayout(&self, doc: &mut Document, edit: impl FnOnce(&mut OverlayLayout)) {
        let mut inner = self.inner.borrow_mut();
        if !inner.live() {
            return;
        }
        let mut layout = *inner.overlays.layout();
        edit(&mut layout);
        inner.config.layout = layout;
        inner.overlays.set_layout(doc.scene_mut(), layout);
    }

    /// Enable or disable deactivation on outside clicks.
    pub fn set_outside_click_dismiss(&self, on: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.live() {
            inner.config.outside_click_dismiss = on;
        }
    }

    /// Enable or disable hover classes. Disabling clears any present.
    pub fn set_hover_feedback(&self, doc: &mut Document, on: bool) {
        let mut inner = self.inner.borrow_mut();
        if !inner.live() {
            return;
        }
        inner.config.hover_feedback = on;
        if !on {
            doc.scene_mut().remove_classes_where(inner.root(), is_hover_marker);
        }
    }

    /// Current configuration.
    pub fn config(&self) -> Config {
        self.inner.borrow().config.clone()
    }

    /// This component's identity.
    pub fn id(&self) -> StackId {
        self.inner.borrow().id
    }

    /// The container element.
    pub fn root(&self) -> ElementId {
        self.inner.borrow().root()
    }

    /// Items found at construction, in order.
    pub fn items(&self) -> Vec<PhoneId> {
        self.inner.borrow().items.clone()
    }

    /// The overlays, in item order.
    pub fn overlays(&self) -> Vec<Overlay> {
        self.inner.borrow().overlays.overlays().to_vec()
    }

    /// Overlay element for `item`.
    pub fn overlay_for(&self, item: PhoneId) -> Option<ElementId> {
        self.inner.borrow().overlays.element_for(item)
    }

    /// Item whose overlay is `element`.
    pub fn item_for(&self, element: ElementId) -> Option<PhoneId> {
        self.inner.borrow().overlays.item_for(element)
    }

    /// Returns true if construction failed.
    pub fn is_inert(&self) -> bool {
        matches!(self.inner.borrow().lifecycle, Lifecycle::Inert(_))
    }

    /// Returns true once [`destroy`](Self::destroy) has run.
    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().lifecycle == Lifecycle::Destroyed
    }

    /// Why construction failed, for an inert instance.
    pub fn init_error(&self) -> Option<InitError> {
        match self.inner.borrow().lifecycle {
            Lifecycle::Inert(e) => Some(e),
            _ => None,
        }
    }

    /// Call `callback` for every notification of `kind`, after any earlier subscribers.
    pub fn subscribe(
        &self,
        kind: NotificationKind,
        callback: impl Fn(&Notification) + 'static,
    ) -> Subscription {
        self.inner
            .borrow_mut()
            .subscribers
            .add(kind, Rc::new(callback))
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner.borrow_mut().subscribers.remove(subscription)
    }

    /// Tear the component down.
    ///
    /// Detaches every listener, removes every overlay, clears the container's
    /// marker classes, drops subscribers, and resets to idle without notifying.
    /// Later calls are no-ops.
    pub fn destroy(&self, doc: &mut Document) {
        let mut inner = self.inner.borrow_mut();
        if !inner.live() {
            return;
        }
        for id in core::mem::take(&mut inner.listeners) {
            doc.remove_listener(id);
        }
        let root = inner.root();
        let scene = doc.scene_mut();
        inner.overlays.remove_all(scene);
        scene.remove_classes_where(root, |c| {
            is_active_marker(c) || is_hover_marker(c) || c == DEBUG_CLASS
        });
        inner.subscribers.clear();
        inner.controller.dismiss();
        inner.lifecycle = Lifecycle::Destroyed;
        tracing::debug!(?root, "phone stack destroyed");
    }
}

/// Items with a card under `root`, deduplicated and in order.
fn find_cards(scene: &Scene, root: ElementId) -> Vec<PhoneId> {
    let mut items: Vec<PhoneId> = scene
        .query_class(root, CARD_CLASS)
        .into_iter()
        .filter_map(|card| scene.attribute(card, PHONE_ATTR)?.parse().ok())
        .collect();
    items.sort_unstable();
    items.dedup();
    items
}

/// Run one controller step and, if the selection changed, reflect it and notify.
///
/// The borrow is released before subscribers run.
fn transition(
    cell: &RefCell<Inner>,
    scene: &mut Scene,
    step: impl FnOnce(&mut Inner) -> Transition,
) {
    let (note, callbacks) = {
        let mut inner = cell.borrow_mut();
        if !inner.live() {
            return;
        }
        let t = step(&mut *inner);
        if !t.changed() {
            return;
        }
        reflect(scene, inner.root(), &inner.overlays, t.to);
        tracing::debug!(root = ?inner.root(), from = ?t.from, to = ?t.to, "selection changed");
        let source = inner.id;
        let note = match t.to {
            Some(item) => Notification::Activated { item, source },
            None => Notification::Deactivated { source },
        };
        (note, inner.subscribers.interested(note.kind()))
    };
    for callback in callbacks {
        callback(&note);
    }
}
