use crate::treap::arena::{NodeArena, NodeIndex};
use crate::treap::tree;
use rand::Rng;
use rand::XorShiftRng;

/// An ordered multiset of integers implemented using a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a
/// heap property. Each node has a value and a priority. The value of any node
/// is greater than all values in its left subtree and less than all values in
/// its right subtree, while its priority is smaller than the priorities of all
/// nodes in its subtrees. By randomly generating priorities, the expected
/// height of the tree is proportional to the logarithm of the number of
/// values.
///
/// Equal values are kept as separate nodes; insertion routes an equal value
/// into the left subtree, and the relative order among equal values is
/// unspecified.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::TreapSet;
///
/// let mut set = TreapSet::new();
/// set.insert(3);
/// set.insert(1);
/// set.insert(2);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.min(), Some(1));
/// assert_eq!(set.traverse_in_order(), vec![1, 2, 3]);
///
/// assert!(set.remove(2));
/// assert!(!set.remove(2));
/// ```
pub struct TreapSet {
    arena: NodeArena,
    root: tree::Tree,
    rng: XorShiftRng,
}

impl TreapSet {
    /// Constructs a new, empty `TreapSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        TreapSet {
            arena: NodeArena::new(),
            root: None,
            rng: XorShiftRng::new_unseeded(),
        }
    }

    /// Constructs a new, empty `TreapSet` that draws priorities from `rng`.
    /// Seeding the generator makes the tree shape reproducible across runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::XorShiftRng;
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::with_rng(XorShiftRng::from_seed([1, 2, 3, 4]));
    /// set.insert(1);
    /// assert!(set.contains(1));
    /// ```
    pub fn with_rng(rng: XorShiftRng) -> Self {
        TreapSet {
            arena: NodeArena::new(),
            root: None,
            rng,
        }
    }

    /// Inserts a value into the set with a freshly drawn priority. Values
    /// already present are not replaced; the new value is stored alongside
    /// them.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(1);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, value: i64) {
        let TreapSet {
            ref mut arena,
            ref mut root,
            ref mut rng,
        } = self;
        tree::insert(arena, root, value, rng.next_u32());
    }

    /// Removes one occurrence of a value from the set. Returns `true` if a
    /// matching value existed and was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(set.remove(1));
    /// assert!(!set.remove(1));
    /// ```
    pub fn remove(&mut self, value: i64) -> bool {
        tree::remove(&mut self.arena, &mut self.root, value)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(0));
    /// assert!(set.contains(1));
    /// ```
    pub fn contains(&self, value: i64) -> bool {
        tree::find(&self.arena, self.root, value).is_some()
    }

    /// Returns the number of values in the set, counting each occurrence of
    /// equal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.arena = NodeArena::new();
        self.root = None;
    }

    /// Returns the minimum value of the set. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(1));
    /// ```
    pub fn min(&self) -> Option<i64> {
        self.root
            .map(|root| self.arena[tree::min(&self.arena, root)].value)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(3));
    /// ```
    pub fn max(&self) -> Option<i64> {
        self.root
            .map(|root| self.arena[tree::max(&self.arena, root)].value)
    }

    /// Returns the values of the set in ascending order using a recursive
    /// in-order walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.traverse_in_order(), vec![1, 3]);
    /// ```
    pub fn traverse_in_order(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len());
        tree::in_order(&self.arena, self.root, &mut values);
        values
    }

    /// Returns the values of the set in ascending order by starting at the
    /// leftmost node and repeatedly following the in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.traverse_forward(), vec![1, 3]);
    /// ```
    pub fn traverse_forward(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len());
        let mut current = self.root.map(|root| tree::min(&self.arena, root));
        while let Some(index) = current {
            values.push(self.arena[index].value);
            current = tree::next(&self.arena, index);
        }
        values
    }

    /// Returns the values of the set in ascending order by walking from the
    /// rightmost node through the in-order predecessors and reversing the
    /// collected sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.traverse_reverse(), vec![1, 3]);
    /// ```
    pub fn traverse_reverse(&self) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.len());
        let mut current = self.root.map(|root| tree::max(&self.arena, root));
        while let Some(index) = current {
            values.push(self.arena[index].value);
            current = tree::prev(&self.arena, index);
        }
        values.reverse();
        values
    }

    /// Returns an iterator over the set. The iterator yields values in
    /// ascending order by following the in-order successor chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(1));
    /// assert_eq!(iterator.next(), Some(3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapSetIter<'_> {
        TreapSetIter {
            arena: &self.arena,
            current: self.root.map(|root| tree::min(&self.arena, root)),
        }
    }
}

impl IntoIterator for TreapSet {
    type IntoIter = ::std::vec::IntoIter<i64>;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse_in_order().into_iter()
    }
}

impl<'a> IntoIterator for &'a TreapSet {
    type IntoIter = TreapSetIter<'a>;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `TreapSet`.
///
/// This iterator walks the in-order successor chain and yields values in
/// ascending order.
pub struct TreapSetIter<'a> {
    arena: &'a NodeArena,
    current: Option<NodeIndex>,
}

impl<'a> Iterator for TreapSetIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|index| {
            let value = self.arena[index].value;
            self.current = tree::next(self.arena, index);
            value
        })
    }
}

impl Default for TreapSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TreapSet;

    #[test]
    fn test_len_empty() {
        let set = TreapSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set = TreapSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set = TreapSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = TreapSet::new();
        set.insert(1);
        assert!(set.contains(1));
    }

    #[test]
    fn test_insert_duplicates() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(1);
        set.insert(1);
        assert_eq!(set.len(), 3);
        assert_eq!(set.traverse_in_order(), vec![1, 1, 1]);
    }

    #[test]
    fn test_remove() {
        let mut set = TreapSet::new();
        set.insert(1);
        assert!(set.remove(1));
        assert!(!set.contains(1));
    }

    #[test]
    fn test_remove_missing() {
        let mut set = TreapSet::new();
        set.insert(1);
        assert!(!set.remove(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_duplicates_one_at_a_time() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(1);
        assert!(set.remove(1));
        assert_eq!(set.len(), 1);
        assert!(set.contains(1));
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(1));
        assert_eq!(set.max(), Some(5));
    }

    #[test]
    fn test_clear() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.traverse_in_order(), Vec::<i64>::new());
    }

    #[test]
    fn test_traversals_agree() {
        let mut set = TreapSet::new();
        for value in &[5, 3, 8, 1, 4] {
            set.insert(*value);
        }

        assert_eq!(set.traverse_in_order(), vec![1, 3, 4, 5, 8]);
        assert_eq!(set.traverse_forward(), vec![1, 3, 4, 5, 8]);
        assert_eq!(set.traverse_reverse(), vec![1, 3, 4, 5, 8]);

        assert!(set.remove(3));
        assert_eq!(set.traverse_in_order(), vec![1, 4, 5, 8]);
        assert_eq!(set.traverse_forward(), vec![1, 4, 5, 8]);
        assert_eq!(set.traverse_reverse(), vec![1, 4, 5, 8]);

        assert!(!set.remove(3));
        assert_eq!(set.traverse_in_order(), vec![1, 4, 5, 8]);
    }

    #[test]
    fn test_traversals_empty() {
        let set = TreapSet::new();
        assert_eq!(set.traverse_in_order(), Vec::<i64>::new());
        assert_eq!(set.traverse_forward(), Vec::<i64>::new());
        assert_eq!(set.traverse_reverse(), Vec::<i64>::new());
    }

    #[test]
    fn test_into_iter() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<i64>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<i64>>(), vec![1, 3, 5]);
    }
}
