// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::types::{ElementFlags, ElementId, LocalElement};

/// Ancestor chain from root to element, inclusive.
///
/// Most UI trees are shallow; eight inline slots cover typical menu depths
/// without touching the heap.
pub type AncestorPath = SmallVec<[ElementId; 8]>;

/// Element tree used by the interaction behaviors.
///
/// The tree models the structural relationships the behaviors depend on —
/// parent links, containment, and common ancestors — plus per-element bounds
/// for pointer liveness queries. It performs no layout and applies no
/// transforms: hosts supply world-space boxes directly.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use trellis_tree::{LocalElement, Tree};
///
/// let mut tree = Tree::new();
/// let menu = tree.insert(
///     None,
///     LocalElement {
///         bounds: Rect::new(0.0, 0.0, 100.0, 60.0),
///         ..LocalElement::default()
///     },
/// );
/// let item = tree.insert(Some(menu), LocalElement::default());
///
/// assert!(tree.contains(menu, item));
/// assert_eq!(tree.common_ancestor(&[item]), Some(item));
/// ```
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("elements_total", &total)
            .field("elements_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    local: LocalElement,
}

impl Node {
    fn new(generation: u32, local: LocalElement) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new element as a child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<ElementId>, local: LocalElement) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = ElementId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove an element (and its subtree) from the tree.
    ///
    /// The id becomes stale immediately; further queries against it return
    /// `None` or `false`.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent` (or detach it into a root if `None`).
    pub fn reparent(&mut self, id: ElementId, new_parent: Option<ElementId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Update element bounds.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.bounds = bounds;
        }
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// An `ElementId` is considered live if its slot exists and its generation
    /// matches the current generation stored in that slot.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Returns the parent of an element if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .and_then(|node| node.parent)
    }

    /// Get the children of an element, or an empty slice if the id is stale.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        if !self.is_alive(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// Returns the flags of an element if the identifier is live.
    pub fn flags(&self, id: ElementId) -> Option<ElementFlags> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .map(|node| node.local.flags)
    }

    /// Returns the world-space bounds of an element if the identifier is live.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .map(|node| node.local.bounds)
    }

    /// Containment test: does `ancestor` contain `node`?
    ///
    /// Containment is ancestor-or-self: every live element contains itself.
    /// Returns `false` when either id is stale.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.is_alive(ancestor) || !self.is_alive(node) {
            return false;
        }
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent_of(id);
        }
        false
    }

    /// Ancestor chain for a live element, from its root down to the element
    /// itself (inclusive). Empty for stale ids.
    pub fn path_from_root(&self, id: ElementId) -> AncestorPath {
        let mut out = AncestorPath::new();
        if !self.is_alive(id) {
            return out;
        }
        let mut cur = Some(id);
        while let Some(c) = cur {
            out.push(c);
            cur = self.parent_of(c);
        }
        out.reverse();
        out
    }

    /// Nearest common ancestor of a set of elements.
    ///
    /// Because containment is ancestor-or-self, the common ancestor of a
    /// single element is that element, and the common ancestor of siblings is
    /// their parent. Returns `None` for an empty set, for sets containing
    /// stale ids, and for elements in disjoint root trees.
    pub fn common_ancestor(&self, ids: &[ElementId]) -> Option<ElementId> {
        let (&first, rest) = ids.split_first()?;
        let mut prefix = self.path_from_root(first);
        if prefix.is_empty() {
            return None;
        }
        for &id in rest {
            if !self.is_alive(id) {
                return None;
            }
            let path = self.path_from_root(id);
            let common = prefix
                .iter()
                .zip(path.iter())
                .take_while(|(a, b)| a == b)
                .count();
            prefix.truncate(common);
            if prefix.is_empty() {
                return None;
            }
        }
        prefix.last().copied()
    }

    /// Deepest live element whose bounds contain a world-space point.
    ///
    /// Ties at equal depth are broken toward the newer id, matching the
    /// generational ordering used throughout the tree. Returns `None` when no
    /// element contains the point.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        let mut best: Option<(ElementId, usize)> = None;
        for (i, slot) in self.nodes.iter().enumerate() {
            let Some(node) = slot.as_ref() else {
                continue;
            };
            if !node.local.bounds.contains(point) {
                continue;
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            let id = ElementId::new(i as u32, node.generation);
            let depth = self.path_from_root(id).len();
            let better = match best {
                None => true,
                Some((best_id, best_depth)) => {
                    depth > best_depth || (depth == best_depth && id_is_newer(id, best_id))
                }
            };
            if better {
                best = Some((id, depth));
            }
        }
        best.map(|(id, _)| id)
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: ElementId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling ElementId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling ElementId")
    }

    fn node_opt_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

#[inline]
fn id_is_newer(a: ElementId, b: ElementId) -> bool {
    (a.1 > b.1) || (a.1 == b.1 && a.0 > b.0)
}
