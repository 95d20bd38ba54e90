//! Lazily-expandable symbol forests backing the call and type hierarchy
//! views.

use crate::ports::proto::{CqLocation, HierarchyKind};

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Server-issued symbol reference, unique within one forest.
    pub id: String,
    pub name: String,
    pub location: Option<CqLocation>,
    /// Child count announced by the server; `children` may still be empty
    /// until an expansion request fills it in.
    pub num_children: usize,
    pub children: Vec<TreeNode>,
    pub depth: u32,
}

impl TreeNode {
    pub fn has_children(&self) -> bool {
        self.num_children > 0
    }

    fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    fn assign_depth(&mut self, depth: u32) {
        self.depth = depth;
        for child in &mut self.children {
            child.assign_depth(depth.saturating_add(1));
        }
    }
}

/// One hierarchy view's state: Closed (empty roots) -> Loading (request in
/// flight, previous forest still showing) -> Populated -> Closed. The
/// generation counter discards responses superseded by a newer open or a
/// close; in-flight requests are never cancelled, their results are simply
/// dropped on arrival.
pub struct HierarchyProvider {
    kind: HierarchyKind,
    roots: Vec<TreeNode>,
    generation: u32,
}

impl HierarchyProvider {
    pub fn new(kind: HierarchyKind) -> Self {
        Self {
            kind,
            roots: Vec::new(),
            generation: 0,
        }
    }

    pub fn kind(&self) -> HierarchyKind {
        self.kind
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn is_open(&self) -> bool {
        !self.roots.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// Generation tagging the currently displayed forest.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Marks the start of a new root query and returns the generation that
    /// tags it. Any response carrying an older generation is stale.
    pub fn begin_open(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Installs a root forest. A stale generation or an empty server result
    /// is a no-op (previous content stays visible, no change signal).
    pub fn apply_roots(&mut self, generation: u32, forest: Option<Vec<TreeNode>>) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(mut forest) = forest else {
            return false;
        };

        for root in &mut forest {
            root.assign_depth(0);
        }
        self.roots = forest;
        true
    }

    /// Installs the lazily fetched children of `node_id` at the parent's
    /// depth plus one. Fails quietly when the forest has been replaced or
    /// the node is gone.
    pub fn apply_children(
        &mut self,
        generation: u32,
        node_id: &str,
        mut children: Vec<TreeNode>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(node) = self.roots.iter_mut().find_map(|root| root.find_mut(node_id)) else {
            return false;
        };

        let child_depth = node.depth.saturating_add(1);
        for child in &mut children {
            child.assign_depth(child_depth);
        }
        node.num_children = children.len();
        node.children = children;
        true
    }

    /// Clears the forest. The caller always fires exactly one change signal
    /// afterwards, regardless of prior state.
    pub fn close(&mut self) {
        self.roots.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/hierarchy.rs"]
mod tests;
