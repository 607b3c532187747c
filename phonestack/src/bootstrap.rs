// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instantiate a component on every `.phone-stack` container in a document.

use alloc::vec::Vec;

use crate::config::Config;
use crate::document::Document;
use crate::events::StackId;
use crate::markup::STACK_CLASS;
use crate::stack::PhoneStack;

/// The components created by [`bootstrap`], in document order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    stacks: Vec<PhoneStack>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The component with identity `id`.
    pub fn get(&self, id: StackId) -> Option<&PhoneStack> {
        self.stacks.iter().find(|s| s.id() == id)
    }

    /// Every registered component.
    pub fn iter(&self) -> impl Iterator<Item = &PhoneStack> + '_ {
        self.stacks.iter()
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Register a component. Returns false if one with the same identity is already present.
    pub fn insert(&mut self, stack: PhoneStack) -> bool {
        if self.get(stack.id()).is_some() {
            return false;
        }
        self.stacks.push(stack);
        true
    }

    /// Destroy every component and empty the registry.
    pub fn destroy_all(&mut self, doc: &mut Document) {
        for stack in self.stacks.drain(..) {
            stack.destroy(doc);
        }
    }
}

/// Build a component on every element with class `phone-stack`.
///
/// Containers that cannot host a component log a warning and are left out.
pub fn bootstrap(doc: &mut Document, config: &Config) -> Registry {
    let containers: Vec<_> = doc
        .scene()
        .document_order()
        .into_iter()
        .filter(|id| doc.scene().has_class(*id, STACK_CLASS))
        .collect();
    let mut registry = Registry::new();
    for root in containers {
        let stack = PhoneStack::new(doc, root, config.clone());
        if !stack.is_inert() {
            registry.insert(stack);
        }
    }
    tracing::debug!(count = registry.len(), "bootstrapped phone stacks");
    registry
}
