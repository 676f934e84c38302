use rand::{Rng, SeedableRng, XorShiftRng};
use treap_collections::treap::TreapSet;

const COUNT: usize = 30000;
const DEL_NUM: usize = 5000;

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|window| window[0] <= window[1])
}

#[test]
fn test_random_inserts_sorted() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = TreapSet::new();
    let mut expected = Vec::new();
    for _ in 0..10000 {
        // A narrow value range forces plenty of duplicates.
        let value = i64::from(rng.next_u32() % 2000);
        set.insert(value);
        expected.push(value);
    }
    expected.sort();

    assert_eq!(set.len(), expected.len());
    assert_eq!(set.traverse_in_order(), expected);
    assert_eq!(set.traverse_forward(), expected);
    assert_eq!(set.traverse_reverse(), expected);
}

#[test]
fn test_membership_round_trip() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 2, 2, 2]);
    let mut set = TreapSet::new();
    let mut expected = Vec::new();
    for _ in 0..2000 {
        let value = i64::from(rng.next_u32() % 500);
        set.insert(value);
        expected.push(value);
        assert!(set.contains(value));
    }

    for _ in 0..2000 {
        let value = i64::from(rng.next_u32() % 500);
        let position = expected.iter().position(|&existing| existing == value);
        assert_eq!(set.contains(value), position.is_some());
        assert_eq!(set.remove(value), position.is_some());
        if let Some(position) = position {
            expected.swap_remove(position);
        }
        assert_eq!(set.len(), expected.len());
        assert!(is_sorted(&set.traverse_in_order()));
    }
}

#[test]
fn test_stride_removals_keep_reverse_traversal_sorted() {
    let mut set = TreapSet::new();
    for value in 0..COUNT {
        set.insert(value as i64);
    }

    let traverse = set.traverse_in_order();
    assert!(is_sorted(&traverse));
    let traverse = set.traverse_forward();
    assert!(is_sorted(&traverse));
    let traverse = set.traverse_reverse();
    assert!(is_sorted(&traverse));

    // Repeated two-child removals are the hard case for successor and
    // predecessor link maintenance, so the reverse traversal is re-checked
    // after every removal.
    let stride = COUNT / DEL_NUM;
    let mut index = 0;
    for _ in 0..DEL_NUM {
        assert!(is_sorted(&set.traverse_reverse()));
        assert!(set.remove(index as i64), "could not remove key {}", index);
        index += stride;
        if index >= COUNT {
            break;
        }
    }

    assert_eq!(set.len(), COUNT - DEL_NUM);
    let forward = set.traverse_forward();
    assert_eq!(forward, set.traverse_in_order());
    assert_eq!(forward, set.traverse_reverse());
}

#[test]
fn test_seeded_sets_agree() {
    let mut first = TreapSet::with_rng(SeedableRng::from_seed([7, 7, 7, 7]));
    let mut second = TreapSet::with_rng(SeedableRng::from_seed([7, 7, 7, 7]));
    for value in &[9, 4, 6, 2, 8, 4] {
        first.insert(*value);
        second.insert(*value);
    }

    assert_eq!(first.traverse_in_order(), second.traverse_in_order());
    assert!(first.remove(4));
    assert!(second.remove(4));
    assert_eq!(first.traverse_forward(), second.traverse_forward());
}
