// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, updates, markup, queries.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect};

use crate::types::{ElementFlags, ElementId, ElementStyle, LocalElement};
use crate::util::transform_rect_bbox;

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Headless element tree.
pub struct Scene {
    elements: Vec<Option<Element>>, // slots
    generations: Vec<u32>,          // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    roots: Vec<ElementId>, // document order of top-level elements
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("elements_total", &self.elements.len())
            .field("elements_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

/// Result of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The matched element.
    pub element: ElementId,
    /// Path from root to element (inclusive).
    pub path: Vec<ElementId>,
    /// Z-index of the matched element.
    pub z_index: i32,
}

/// Filters applied during hit testing.
///
/// Used by [`Scene::hit_test_point`] and [`Scene::hits_at_point`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, skip elements that are hidden themselves or through an ancestor.
    pub visible_only: bool,
    /// If true, only consider elements marked [`ElementFlags::PICKABLE`].
    pub pickable_only: bool,
}

impl QueryFilter {
    /// Visible and pickable elements only; what pointer input should see.
    pub const POINTER: Self = Self {
        visible_only: true,
        pickable_only: true,
    };
}

#[derive(Clone, Debug)]
struct Element {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    local: LocalElement,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    style: ElementStyle,
}

impl Element {
    fn new(generation: u32, local: LocalElement) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
            classes: Vec::new(),
            attributes: Vec::new(),
            style: ElementStyle::default(),
        }
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.iter().filter(|e| e.is_some()).count()
    }

    /// Returns true if the scene holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a new element as the last child of `parent` (or as a new root if `None`).
    ///
    /// A stale `parent` makes the element a root.
    pub fn insert(&mut self, parent: Option<ElementId>, local: LocalElement) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.elements[idx] = Some(Element::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.elements.push(Some(Element::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.elements.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        match parent.filter(|p| self.is_alive(*p)) {
            Some(p) => {
                if let Some(parent) = self.element_mut(p) {
                    parent.children.push(id);
                }
                if let Some(child) = self.element_mut(id) {
                    child.parent = Some(p);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Remove an element (and its subtree) from the scene.
    ///
    /// Returns false if `id` was already stale.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let Some(parent) = self.element(id).map(|e| e.parent) else {
            return false;
        };
        match parent {
            Some(p) => {
                if let Some(p) = self.element_mut(p) {
                    p.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        self.free_subtree(id);
        true
    }

    fn free_subtree(&mut self, id: ElementId) {
        let children = self
            .element(id)
            .map(|e| e.children.clone())
            .unwrap_or_default();
        for child in children {
            self.free_subtree(child);
        }
        self.elements[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// Parent of a live element, or `None` for roots and stale ids.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id)?.parent
    }

    /// Children of a live element in document order; empty for stale ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Top-level elements in document order.
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Local geometry of a live element.
    pub fn local(&self, id: ElementId) -> Option<&LocalElement> {
        self.element(id).map(|e| &e.local)
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(e) = self.element_mut(id) {
            e.local.local_bounds = bounds;
        }
    }

    /// Update local transform.
    pub fn set_local_transform(&mut self, id: ElementId, tf: Affine) {
        if let Some(e) = self.element_mut(id) {
            e.local.local_transform = tf;
        }
    }

    /// Update z index.
    pub fn set_z_index(&mut self, id: ElementId, z: i32) {
        if let Some(e) = self.element_mut(id) {
            e.local.z_index = z;
        }
    }

    /// Returns the z-index of an element if the identifier is live.
    pub fn z_index(&self, id: ElementId) -> Option<i32> {
        self.element(id).map(|e| e.local.z_index)
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(e) = self.element_mut(id) {
            e.local.flags = flags;
        }
    }

    /// Flags of a live element.
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        self.element(id).map(|e| e.local.flags)
    }

    /// Add a class. Returns true if the class was not already present.
    pub fn add_class(&mut self, id: ElementId, class: &str) -> bool {
        let Some(e) = self.element_mut(id) else {
            return false;
        };
        if e.classes.iter().any(|c| c == class) {
            return false;
        }
        e.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, id: ElementId, class: &str) -> bool {
        let Some(e) = self.element_mut(id) else {
            return false;
        };
        let before = e.classes.len();
        e.classes.retain(|c| c != class);
        e.classes.len() != before
    }

    /// Remove every class for which `pred` returns true. Returns how many were removed.
    pub fn remove_classes_where(
        &mut self,
        id: ElementId,
        mut pred: impl FnMut(&str) -> bool,
    ) -> usize {
        let Some(e) = self.element_mut(id) else {
            return 0;
        };
        let before = e.classes.len();
        e.classes.retain(|c| !pred(c));
        before - e.classes.len()
    }

    /// Returns true if the element carries `class`.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    /// Classes of an element in the order they were added.
    pub fn classes(&self, id: ElementId) -> impl Iterator<Item = &str> + '_ {
        self.element(id)
            .into_iter()
            .flat_map(|e| e.classes.iter().map(String::as_str))
    }

    /// Set (or replace) an attribute.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        let Some(e) = self.element_mut(id) else {
            return;
        };
        match e.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => e.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Value of an attribute, if set.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Option<String> {
        let e = self.element_mut(id)?;
        let pos = e.attributes.iter().position(|(n, _)| n == name)?;
        Some(e.attributes.remove(pos).1)
    }

    /// Replace the paint style of an element.
    pub fn set_style(&mut self, id: ElementId, style: ElementStyle) {
        if let Some(e) = self.element_mut(id) {
            e.style = style;
        }
    }

    /// Paint style of a live element.
    pub fn style(&self, id: ElementId) -> Option<&ElementStyle> {
        self.element(id).map(|e| &e.style)
    }

    /// Returns true if `node` is `ancestor` or lies in its subtree.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.is_alive(ancestor) {
            return false;
        }
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    /// Descendants of `root` in document order (pre-order), excluding `root`.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.collect_descendants(root, &mut out);
        out
    }

    fn collect_descendants(&self, id: ElementId, out: &mut Vec<ElementId>) {
        for &child in self.children(id) {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    /// Every element in the scene in document order.
    pub fn document_order(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        for &root in &self.roots {
            out.push(root);
            self.collect_descendants(root, &mut out);
        }
        out
    }

    /// Descendants of `root` carrying `class`, in document order.
    pub fn query_class(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    /// Elements that can take keyboard focus, in document order.
    ///
    /// An element qualifies when it is [`ElementFlags::FOCUSABLE`] and it and all
    /// its ancestors are visible.
    pub fn focus_order(&self) -> Vec<ElementId> {
        self.document_order()
            .into_iter()
            .filter(|id| {
                self.flags(*id)
                    .is_some_and(|f| f.contains(ElementFlags::FOCUSABLE))
                    && self.is_rendered(*id)
            })
            .collect()
    }

    /// Returns true if the element and every ancestor are visible.
    pub fn is_rendered(&self, id: ElementId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            match self.flags(c) {
                Some(f) if f.contains(ElementFlags::VISIBLE) => cur = self.parent(c),
                _ => return false,
            }
        }
        true
    }

    /// Path from the top-level ancestor down to `id` (inclusive); empty for stale ids.
    pub fn path_to_root(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut cur = self.is_alive(id).then_some(id);
        while let Some(c) = cur {
            out.push(c);
            cur = self.parent(c);
        }
        out.reverse();
        out
    }

    /// Composed transform from local space of `id` to world space.
    pub fn world_transform(&self, id: ElementId) -> Option<Affine> {
        let path = self.path_to_root(id);
        if path.is_empty() {
            return None;
        }
        Some(path.iter().fold(Affine::IDENTITY, |acc, e| {
            acc * self.element(*e).map_or(Affine::IDENTITY, |e| e.local.local_transform)
        }))
    }

    /// Conservative world-space bounding box of an element.
    pub fn world_bounds(&self, id: ElementId) -> Option<Rect> {
        let tf = self.world_transform(id)?;
        let local = self.local(id)?;
        Some(transform_rect_bbox(tf, local.local_bounds))
    }

    /// All elements under a world-space point, in paint order (bottom-most first).
    ///
    /// Paint order sorts by z-index, then by document order.
    pub fn hits_at_point(&self, pt: Point, filter: QueryFilter) -> Vec<Hit> {
        let mut found: Vec<(usize, Hit)> = Vec::new();
        let mut order = 0_usize;
        let mut path = Vec::new();
        for &root in &self.roots {
            self.hit_recursive(
                root,
                pt,
                Affine::IDENTITY,
                filter,
                &mut path,
                &mut order,
                &mut found,
            );
        }
        // Stable sort keeps document order among equal z.
        found.sort_by_key(|(doc, hit)| (hit.z_index, *doc));
        found.into_iter().map(|(_, hit)| hit).collect()
    }

    /// Hit test a world-space point. Returns the topmost element.
    ///
    /// The highest z-index wins; among equal z-indices the element later in
    /// document order wins, matching paint order.
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<Hit> {
        self.hits_at_point(pt, filter).pop()
    }

    fn hit_recursive(
        &self,
        id: ElementId,
        pt: Point,
        parent_tf: Affine,
        filter: QueryFilter,
        path: &mut Vec<ElementId>,
        order: &mut usize,
        found: &mut Vec<(usize, Hit)>,
    ) {
        let Some(element) = self.element(id) else {
            return;
        };
        if filter.visible_only && !element.local.flags.contains(ElementFlags::VISIBLE) {
            return;
        }
        let doc = *order;
        *order += 1;
        let world_tf = parent_tf * element.local.local_transform;
        path.push(id);
        let pickable =
            !filter.pickable_only || element.local.flags.contains(ElementFlags::PICKABLE);
        if pickable && world_tf.determinant() != 0.0 {
            let local_pt = world_tf.inverse() * pt;
            if element.local.local_bounds.contains(local_pt) {
                found.push((
                    doc,
                    Hit {
                        element: id,
                        path: path.clone(),
                        z_index: element.local.z_index,
                    },
                ));
            }
        }
        for &child in &element.children {
            self.hit_recursive(child, pt, world_tf, filter, path, order, found);
        }
        path.pop();
    }

    // --- internals ---

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements
            .get(id.idx())?
            .as_ref()
            .filter(|e| e.generation == id.1)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements
            .get_mut(id.idx())?
            .as_mut()
            .filter(|e| e.generation == id.1)
    }
}
