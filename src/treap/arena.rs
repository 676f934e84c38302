use crate::treap::node::Node;
use std::mem;
use std::ops::{Index, IndexMut};

/// A struct representing a handle to a slot in a `NodeArena`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeIndex(usize);

enum Slot {
    Occupied(Node),
    Vacant(Option<NodeIndex>),
}

/// A slab allocator for treap nodes.
///
/// All nodes of a tree live in a single `Vec` and address each other through
/// `NodeIndex` handles. Freed slots are chained into a free list and reused by
/// later allocations, so handles stay dense under churn. The number of
/// occupied slots is the size of the tree.
pub struct NodeArena {
    slots: Vec<Slot>,
    head: Option<NodeIndex>,
    len: usize,
}

impl NodeArena {
    fn is_valid_index(&self, index: NodeIndex) -> bool {
        index.0 < self.slots.len()
    }

    /// Constructs a new, empty `NodeArena`.
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Allocates a node in the arena and returns the handle to its slot. The
    /// handle can later be used to retrieve references to the node and to
    /// deallocate it.
    pub fn allocate(&mut self, node: Node) -> NodeIndex {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIndex(self.slots.len() - 1)
            }
            Some(index) => {
                let vacant_slot = mem::replace(&mut self.slots[index.0], Slot::Occupied(node));
                match vacant_slot {
                    Slot::Vacant(next_index) => {
                        self.head = next_index;
                        index
                    }
                    Slot::Occupied(_) => panic!("Expected a vacant slot."),
                }
            }
        }
    }

    /// Deallocates a node in the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the handle corresponds to an invalid or vacant slot.
    pub fn free(&mut self, index: NodeIndex) -> Node {
        if !self.is_valid_index(index) {
            panic!("Error: attempting to free invalid slot.");
        }
        let old_slot = mem::replace(&mut self.slots[index.0], Slot::Vacant(self.head.take()));
        match old_slot {
            Slot::Vacant(_) => panic!("Error: attempting to free vacant slot."),
            Slot::Occupied(node) => {
                self.len -= 1;
                self.head = Some(index);
                node
            }
        }
    }

    /// Returns an immutable reference to a node in the arena. Returns `None`
    /// if the handle does not correspond to an occupied slot.
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if !self.is_valid_index(index) {
            return None;
        }
        match self.slots[index.0] {
            Slot::Occupied(ref node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to a node in the arena. Returns `None` if
    /// the handle does not correspond to an occupied slot.
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if !self.is_valid_index(index) {
            return None;
        }
        match self.slots[index.0] {
            Slot::Occupied(ref mut node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns the number of occupied slots in the arena.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}
