// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Components (projects, modules, directories, files) and their containment
//! hierarchy.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Numeric identifier of a component.
pub type ComponentId = i64;

/// Anything that can be searched by key and name.
///
/// The component finder works over this trait so hosts can page through
/// their own component representations.
pub trait Searchable {
    fn key(&self) -> &str;
    fn name(&self) -> &str;
}

/// A node in a project's containment hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Component {
    pub id: ComponentId,
    /// Unique key, e.g. `org.struts:struts-core:Action.java`.
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Parent component; `None` for a project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ComponentId>,
}

impl Component {
    /// Creates a root component (a project).
    pub fn root(id: ComponentId, key: impl Into<String>, name: impl Into<String>) -> Self {
        Component {
            id,
            key: key.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Creates a component under `parent_id`.
    pub fn child(
        id: ComponentId,
        key: impl Into<String>,
        name: impl Into<String>,
        parent_id: ComponentId,
    ) -> Self {
        Component {
            id,
            key: key.into(),
            name: name.into(),
            parent_id: Some(parent_id),
        }
    }
}

impl Searchable for Component {
    fn key(&self) -> &str {
        &self.key
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Immutable index over a set of components and their parent links.
///
/// Cloning is cheap; clones share the same index.
#[derive(Debug, Clone, Default)]
pub struct ComponentTree {
    inner: Arc<TreeIndex>,
}

#[derive(Debug, Default)]
struct TreeIndex {
    /// Components in the order they were supplied.
    components: Vec<Component>,
    by_id: HashMap<ComponentId, usize>,
    by_key: HashMap<String, usize>,
}

impl ComponentTree {
    /// Builds the index. Later duplicates of an id or key replace earlier ones.
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        let mut index = TreeIndex::default();
        for component in components {
            let slot = match index.by_id.get(&component.id) {
                Some(&slot) => {
                    index.by_key.remove(&index.components[slot].key);
                    index.components[slot] = component;
                    slot
                }
                None => {
                    index.components.push(component);
                    index.components.len() - 1
                }
            };
            let component = &index.components[slot];
            index.by_id.insert(component.id, slot);
            index.by_key.insert(component.key.clone(), slot);
        }
        ComponentTree {
            inner: Arc::new(index),
        }
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.inner
            .by_id
            .get(&id)
            .map(|&slot| &self.inner.components[slot])
    }

    pub fn get_by_key(&self, key: &str) -> Option<&Component> {
        self.inner
            .by_key
            .get(key)
            .map(|&slot| &self.inner.components[slot])
    }

    /// All components, in the order they were supplied.
    pub fn components(&self) -> &[Component] {
        &self.inner.components
    }

    pub fn len(&self) -> usize {
        self.inner.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.components.is_empty()
    }

    /// Walks from `id` up to its root: the component itself first, then each
    /// parent. Stops at a missing parent or when a parent link loops back.
    pub fn ancestors_and_self(&self, id: ComponentId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
            seen: HashSet::new(),
        }
    }

    /// True if `id` is `ancestor_id` or lies beneath it.
    pub fn is_within(&self, id: ComponentId, ancestor_id: ComponentId) -> bool {
        self.ancestors_and_self(id).any(|c| c.id == ancestor_id)
    }

    /// The topmost known ancestor of `id` (the component itself for a root).
    pub fn root_of(&self, id: ComponentId) -> Option<&Component> {
        self.ancestors_and_self(id).last()
    }
}

/// Iterator returned by [`ComponentTree::ancestors_and_self`].
pub struct Ancestors<'a> {
    tree: &'a ComponentTree,
    next: Option<ComponentId>,
    seen: HashSet<ComponentId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        if !self.seen.insert(id) {
            return None;
        }
        let component = self.tree.get(id)?;
        self.next = component.parent_id;
        Some(component)
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
