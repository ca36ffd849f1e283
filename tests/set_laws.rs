use proptest::collection::vec;
use proptest::prelude::*;
use unordered_set::hash::HashSet;
use unordered_set::traits::Set;

fn items() -> impl Strategy<Value = Vec<u16>> {
    vec(0_u16..64, 0..48)
}

fn set_of(items: Vec<u16>) -> HashSet<u16> {
    items.into_iter().collect()
}

/// Checks that the predicates a [`Set`] derives agree with a manual enumeration of its elements.
fn check_predicates<S: Set<u16>>(a: &S, b: &S) {
    let manual_subset = a.iter().all(|item| b.contains(item));
    assert_eq!(a.is_subset(b), manual_subset);
    assert_eq!(a.is_subset(b), b.is_superset(a));

    let manual_disjoint = a.iter().all(|item| !b.contains(item));
    assert_eq!(a.is_disjoint(b), manual_disjoint);
    assert_eq!(a.is_disjoint(b), b.is_disjoint(a));

    assert_eq!(a.set_eq(b), a.is_subset(b) && b.is_subset(a));
}

proptest! {
    #[test]
    fn test_union_commutes(a in items(), b in items()) {
        let (a, b) = (set_of(a), set_of(b));
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn test_intersection_commutes(a in items(), b in items()) {
        let (a, b) = (set_of(a), set_of(b));
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn test_symmetric_difference_commutes(a in items(), b in items()) {
        let (a, b) = (set_of(a), set_of(b));
        let sym = a.symmetric_difference(&b);
        prop_assert_eq!(&sym, &b.symmetric_difference(&a));
        prop_assert_eq!(sym, a.difference(&b).union(&b.difference(&a)));
    }

    #[test]
    fn test_difference_with_self_is_empty(a in items()) {
        let a = set_of(a);
        prop_assert!(a.difference(&a).is_empty());
    }

    #[test]
    fn test_algebra_membership(a in items(), b in items(), probe in 0_u16..64) {
        let (a, b) = (set_of(a), set_of(b));
        let (in_a, in_b) = (a.contains(&probe), b.contains(&probe));

        prop_assert_eq!(a.union(&b).contains(&probe), in_a || in_b);
        prop_assert_eq!(a.intersection(&b).contains(&probe), in_a && in_b);
        prop_assert_eq!(a.difference(&b).contains(&probe), in_a && !in_b);
        prop_assert_eq!(a.symmetric_difference(&b).contains(&probe), in_a != in_b);
    }

    #[test]
    fn test_predicates(a in items(), b in items()) {
        let (a, b) = (set_of(a), set_of(b));
        check_predicates(&a, &b);
        check_predicates(&b, &a);
        check_predicates(&a, &a.union(&b));
    }

    #[test]
    fn test_clone_is_independent(a in items(), extra in 64_u16..128) {
        let mut a = set_of(a);
        let mut clone = a.clone();
        prop_assert_eq!(&clone, &a);

        clone.insert(extra);
        prop_assert!(!a.contains(&extra));

        a.clear();
        prop_assert!(!clone.is_empty());
    }

    #[test]
    fn test_add_is_idempotent(a in items(), item in any::<u16>()) {
        let mut once = set_of(a);
        once.add([item]);
        let mut twice = once.clone();
        twice.add([item]);
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_to_vec_round_trip(a in items()) {
        let set: HashSet<u16> = a.iter().copied().collect();
        let round_trip: HashSet<u16> = set.to_vec().into_iter().collect();
        prop_assert_eq!(&round_trip, &set);

        let mut distinct = a;
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(set.to_sorted_vec(), distinct);
    }

    #[test]
    fn test_delete_removes_everything(a in items(), b in items()) {
        let mut set: HashSet<u16> = a.iter().copied().collect();
        set.delete(&b);
        for item in &a {
            prop_assert_eq!(set.contains(item), !b.contains(item));
        }
    }

    #[test]
    fn test_unite_matches_union(a in items(), b in items()) {
        let (mut a, b) = (set_of(a), set_of(b));
        let union = a.union(&b);
        let before = b.clone();
        a.unite(&b);
        prop_assert_eq!(a, union);
        prop_assert_eq!(b, before);
    }

    #[test]
    fn test_indexed_offsets(a in items(), offset in 0_usize..10) {
        let set = set_of(a);
        let indexed = set.indexed_from(offset).collect::<Vec<_>>();
        let plain = set.iter().collect::<Vec<_>>();

        prop_assert_eq!(indexed.len(), set.len());
        for (position, (index, item)) in indexed.into_iter().enumerate() {
            prop_assert_eq!(index, position + offset);
            prop_assert_eq!(item, plain[position]);
        }
    }
}

#[test]
fn test_subset_scenario() {
    let tens: HashSet<u16> = (1..10).map(|i| i * 10).collect();
    let evens: HashSet<u16> = (1..5).map(|i| i * 20).collect();

    assert!(evens.is_subset(&tens));
    assert!(tens.is_superset(&evens));
    assert!(!tens.is_subset(&evens));
    assert!(!evens.is_superset(&tens));
    check_predicates(&tens, &evens);
}
