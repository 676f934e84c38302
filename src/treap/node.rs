use crate::treap::arena::NodeIndex;

/// A struct representing an internal node of a treap.
///
/// Links to the parent and to both children are arena handles rather than
/// owning pointers, so the parent back-pointer does not form an ownership
/// cycle with the child links.
pub struct Node {
    pub value: i64,
    pub priority: u32,
    pub parent: Option<NodeIndex>,
    pub left: Option<NodeIndex>,
    pub right: Option<NodeIndex>,
}

impl Node {
    pub fn new(value: i64, priority: u32) -> Self {
        Node {
            value,
            priority,
            parent: None,
            left: None,
            right: None,
        }
    }
}
