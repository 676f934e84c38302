use crate::treap::arena::{NodeArena, NodeIndex};
use crate::treap::node::Node;
use std::cmp::Ordering;

pub type Tree = Option<NodeIndex>;

/// Exchanges a child with its parent while preserving the in-order key
/// sequence.
///
/// The child takes the parent's position below the grandparent, the parent
/// becomes the child's inner child, and the subtree between the two nodes is
/// transplanted to the parent. Only the depths change; no key moves across a
/// subtree boundary. The caller must re-home the root handle if the rotation
/// made `child` parentless.
pub fn rotate(arena: &mut NodeArena, child: NodeIndex, parent: NodeIndex) {
    let grandparent = arena[parent].parent;
    if let Some(grandparent) = grandparent {
        if arena[grandparent].right == Some(parent) {
            arena[grandparent].right = Some(child);
        } else {
            arena[grandparent].left = Some(child);
        }
    }
    arena[child].parent = grandparent;
    arena[parent].parent = Some(child);

    if arena[parent].left == Some(child) {
        let middle = arena[child].right;
        arena[parent].left = middle;
        if let Some(middle) = middle {
            arena[middle].parent = Some(parent);
        }
        arena[child].right = Some(parent);
    } else {
        let middle = arena[child].left;
        arena[parent].right = middle;
        if let Some(middle) = middle {
            arena[middle].parent = Some(parent);
        }
        arena[child].left = Some(parent);
    }
}

/// Rotates a node upwards while its priority is strictly smaller than its
/// parent's, re-homing the root handle once the node reaches the top. Equal
/// priorities already satisfy the heap ordering and stop the climb.
pub fn bubble_up(arena: &mut NodeArena, tree: &mut Tree, index: NodeIndex) {
    loop {
        let parent = match arena[index].parent {
            Some(parent) => parent,
            None => {
                *tree = Some(index);
                return;
            }
        };
        if arena[parent].priority <= arena[index].priority {
            return;
        }
        rotate(arena, index, parent);
    }
}

/// Attaches a new leaf at the position BST ordering dictates, then restores
/// the heap invariant by bubbling the leaf up. Strictly greater keys descend
/// right; everything else, equal keys included, descends left.
pub fn insert(arena: &mut NodeArena, tree: &mut Tree, value: i64, priority: u32) {
    let mut current = match *tree {
        Some(root) => root,
        None => {
            *tree = Some(arena.allocate(Node::new(value, priority)));
            return;
        }
    };

    loop {
        if value > arena[current].value {
            match arena[current].right {
                Some(right) => current = right,
                None => {
                    let leaf = arena.allocate(Node::new(value, priority));
                    arena[leaf].parent = Some(current);
                    arena[current].right = Some(leaf);
                    bubble_up(arena, tree, leaf);
                    return;
                }
            }
        } else {
            match arena[current].left {
                Some(left) => current = left,
                None => {
                    let leaf = arena.allocate(Node::new(value, priority));
                    arena[leaf].parent = Some(current);
                    arena[current].left = Some(leaf);
                    bubble_up(arena, tree, leaf);
                    return;
                }
            }
        }
    }
}

/// Returns the first node on the search path whose value equals `value`, or
/// `None` if no such node exists.
pub fn find(arena: &NodeArena, tree: Tree, value: i64) -> Option<NodeIndex> {
    let mut current = tree;
    while let Some(index) = current {
        current = match value.cmp(&arena[index].value) {
            Ordering::Equal => return Some(index),
            Ordering::Less => arena[index].left,
            Ordering::Greater => arena[index].right,
        };
    }
    None
}

/// Returns the leftmost node of the subtree rooted at `index`.
pub fn min(arena: &NodeArena, mut index: NodeIndex) -> NodeIndex {
    while let Some(left) = arena[index].left {
        index = left;
    }
    index
}

/// Returns the rightmost node of the subtree rooted at `index`.
pub fn max(arena: &NodeArena, mut index: NodeIndex) -> NodeIndex {
    while let Some(right) = arena[index].right {
        index = right;
    }
    index
}

/// Returns the in-order successor: the right subtree's minimum, or otherwise
/// the nearest ancestor of which the node is a left descendant.
pub fn next(arena: &NodeArena, mut index: NodeIndex) -> Option<NodeIndex> {
    if let Some(right) = arena[index].right {
        return Some(min(arena, right));
    }
    let mut parent = arena[index].parent;
    while let Some(above) = parent {
        if arena[above].right != Some(index) {
            break;
        }
        index = above;
        parent = arena[above].parent;
    }
    parent
}

/// Returns the in-order predecessor: the left subtree's maximum, or otherwise
/// the nearest ancestor of which the node is a right descendant.
pub fn prev(arena: &NodeArena, mut index: NodeIndex) -> Option<NodeIndex> {
    if let Some(left) = arena[index].left {
        return Some(max(arena, left));
    }
    let mut parent = arena[index].parent;
    while let Some(above) = parent {
        if arena[above].left != Some(index) {
            break;
        }
        index = above;
        parent = arena[above].parent;
    }
    parent
}

/// Appends the subtree's values to `values` in ascending order using a
/// recursive left, self, right walk.
pub fn in_order(arena: &NodeArena, tree: Tree, values: &mut Vec<i64>) {
    if let Some(index) = tree {
        in_order(arena, arena[index].left, values);
        values.push(arena[index].value);
        in_order(arena, arena[index].right, values);
    }
}

/// Splices a node with at most one child out of the tree and frees its slot.
/// The single child, if any, is relinked to the node's former parent;
/// splicing the root promotes the child to the new root.
///
/// # Panics
///
/// Panics if the node still has two children. `remove` reduces every removal
/// to the at-most-one-child case first, so this indicates a defect in the
/// removal algorithm rather than a recoverable condition.
fn splice(arena: &mut NodeArena, tree: &mut Tree, index: NodeIndex) {
    let child = match (arena[index].left, arena[index].right) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(_), Some(_)) => panic!("Error: attempting to splice a node with two children."),
    };
    let parent = arena[index].parent;
    if let Some(child) = child {
        arena[child].parent = parent;
    }
    match parent {
        Some(parent) => {
            if arena[parent].left == Some(index) {
                arena[parent].left = child;
            } else {
                arena[parent].right = child;
            }
        }
        None => *tree = child,
    }
    arena.free(index);
}

/// Removes one node matching `value`. Returns `true` if a matching node
/// existed.
pub fn remove(arena: &mut NodeArena, tree: &mut Tree, value: i64) -> bool {
    let index = match find(arena, *tree, value) {
        Some(index) => index,
        None => return false,
    };
    match (arena[index].left, arena[index].right) {
        (Some(left), Some(_)) => {
            // The in-order predecessor is the left subtree's maximum and has
            // no right child, so it can be spliced directly. Only its value
            // moves up; the slot keeps its own priority, which leaves the
            // heap ordering untouched on both sides.
            let predecessor = max(arena, left);
            arena[index].value = arena[predecessor].value;
            splice(arena, tree, predecessor);
        }
        _ => splice(arena, tree, index),
    }
    true
}
