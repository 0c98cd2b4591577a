// crates/scene_graph/src/lib.rs

//! Attached-3D model for actors: named nodes with world transforms.
//!
//! The graph is an arena with generational ids, so a handle held across a
//! detach resolves to `None` instead of aliasing whatever reused the slot.

use std::fmt;

mod transform;

pub use transform::WorldTransform;

/// Handle into the graph's slot arena: which slot, and which occupancy of
/// that slot. A handle saved across a detach resolves to `None` once the
/// slot's generation moves on, never to the slot's next occupant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(slot {}, gen {})", self.index, self.generation)
    }
}

pub struct SceneNode {
    pub name: String,
    pub world: WorldTransform,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

pub struct SceneGraph {
    // Slot is None while the index sits on the free list.
    slots: Vec<Option<SceneNode>>,
    generations: Vec<u32>,
    free_indices: Vec<u32>,
    root: NodeId,
}

impl SceneGraph {
    pub fn new(root_name: &str) -> Self {
        let mut graph = Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_indices: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        graph.root = graph.insert(SceneNode {
            name: root_name.to_string(),
            world: WorldTransform::default(),
            parent: None,
            children: Vec::new(),
        });
        graph
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Attaches a named child under `parent`. Returns `None` if `parent` is
    /// stale or was detached.
    pub fn attach(&mut self, parent: NodeId, name: &str, world: WorldTransform) -> Option<NodeId> {
        // Validate the parent before allocating the child slot.
        self.node(parent)?;

        let child = self.insert(SceneNode {
            name: name.to_string(),
            world,
            parent: Some(parent),
            children: Vec::new(),
        });

        if let Some(node) = self.node_slot_mut(parent) {
            node.children.push(child);
        }
        Some(child)
    }

    /// Detaches `node` and its subtree. The root cannot be detached.
    /// Returns false for stale ids.
    pub fn detach(&mut self, node: NodeId) -> bool {
        if node == self.root || self.node(node).is_none() {
            return false;
        }

        // Unlink from the parent's child list first.
        let parent = self.slots[node.index()].as_ref().and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(parent_node) = self.node_slot_mut(parent) {
                parent_node.children.retain(|&c| c != node);
            }
        }

        // Free the subtree depth-first, bumping each slot's generation so
        // outstanding ids go stale.
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(freed) = self.slots[id.index()].take() {
                pending.extend(freed.children);
                self.generations[id.index()] = self.generations[id.index()].wrapping_add(1);
                self.free_indices.push(id.index() as u32);
            }
        }
        true
    }

    /// Resolves a node id, returning `None` for stale or detached ids.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        if id.index() >= self.slots.len() {
            return None;
        }
        // Generation check: the slot may have been reused since.
        if self.generations[id.index()] != id.generation {
            return None;
        }
        self.slots[id.index()].as_ref()
    }

    pub fn set_world(&mut self, id: NodeId, world: WorldTransform) -> bool {
        match self.node_slot_mut(id) {
            Some(node) => {
                node.world = world;
                true
            }
            None => false,
        }
    }

    /// Exact-name lookup, depth-first from the root. Returns the first match;
    /// the engine may hold several nodes with the same name, and callers get
    /// the one closest to the root in traversal order.
    pub fn object_by_name(&self, name: &str) -> Option<NodeId> {
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            let node = self.node(id)?;
            if node.name == name {
                return Some(id);
            }
            // Reverse so the first child is visited first.
            pending.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn insert(&mut self, node: SceneNode) -> NodeId {
        let index = if let Some(idx) = self.free_indices.pop() {
            idx
        } else {
            self.generations.push(0);
            (self.generations.len() - 1) as u32
        };

        let generation = self.generations[index as usize];
        if (index as usize) < self.slots.len() {
            self.slots[index as usize] = Some(node);
        } else {
            self.slots.push(Some(node));
        }
        NodeId { index, generation }
    }

    fn node_slot_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        if id.index() >= self.slots.len() || self.generations[id.index()] != id.generation {
            return None;
        }
        self.slots[id.index()].as_mut()
    }
}
