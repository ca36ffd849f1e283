#![cfg(test)]

use super::*;
use crate::hash_set;
use crate::traits::Set;
use crate::util::hash::{BadHasherBuilder, ManualHash};

#[test]
fn test_new() {
    let empty = HashSet::<i32>::new();
    assert_eq!(empty.to_string(), "{}");
    assert_eq!(empty.len(), 0);

    let single = hash_set![5];
    assert_eq!(single.to_string(), "{5}");

    let set = hash_set![50, 35, 78];
    assert_eq!(set.to_string(), "{35 50 78}");

    let set = hash_set![19, 21, 1, 2, 4, 8];
    assert_eq!(set.len(), 6);
    assert_eq!(set.to_string(), "{1 2 4 8 19 21}");

    let set = hash_set![3, 3, 1, 3];
    assert_eq!(set.len(), 2, "Duplicate items should collapse into one.");
}

#[test]
fn test_string_items_are_quoted() {
    let set = hash_set!["one", "two"];
    assert_eq!(set.to_string(), r#"{"one" "two"}"#);

    let set = hash_set!["a string"];
    assert_eq!(set.to_string(), r#"{"a string"}"#);

    let owned = ["A", "B", "C", "De", "Fgh"].map(String::from);
    let set = HashSet::from(owned);
    assert_eq!(set.len(), 5);
    assert_eq!(set.to_string(), r#"{"A" "B" "C" "De" "Fgh"}"#);

    let set = hash_set!["tab\there", "quote\"d"];
    assert_eq!(
        set.to_string(),
        r#"{"quote\"d" "tab\there"}"#,
        "Strings should use the standard escaped form."
    );
}

#[test]
fn test_display_limit() {
    let mut set = HashSet::new();
    for i in 0..111 {
        set.insert(i);
    }
    assert_eq!(set.to_string(), "{…111 elements…}");
    assert_eq!(set.display().to_string(), "{…111 elements…}");

    let set: HashSet<u32> = (0..DEFAULT_DISPLAY_LIMIT as u32).collect();
    assert!(
        set.to_string().starts_with("{0 1 2 "),
        "A set at exactly the limit should still be enumerated."
    );

    let set = hash_set![1, 2, 3];
    assert_eq!(set.display().limit(2).to_string(), "{…3 elements…}");
    assert_eq!(set.display().sorted().limit(3).to_string(), "{1 2 3}");
    assert_eq!(HashSet::<u8>::new().display().limit(0).to_string(), "{}");
}

#[test]
fn test_unsorted_display_is_stable() {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    set.add([ManualHash::new(3, 'c'), ManualHash::new(1, 'a'), ManualHash::new(2, 'b')]);

    let rendered = set.iter().map(|i| i.clone().value()).collect::<String>();
    assert_eq!(rendered, "abc", "Items should be in bucket order.");

    let set = hash_set![7, 3, 5];
    let first = set.display().to_string();
    assert_eq!(first, set.display().to_string(), "Rendering without mutation should be repeatable.");
    assert_eq!(first.len(), "{7 3 5}".len());
}

#[test]
fn test_to_vec() {
    let set = hash_set![19, 21, 1, 2, 4, 8];
    let mut vec = set.to_vec();
    vec.sort();
    assert_eq!(vec, [1, 2, 4, 8, 19, 21]);

    let set = hash_set![19, 21, 1, 7, 2, 4, 8, 0];
    assert_eq!(set.to_sorted_vec(), [0, 1, 2, 4, 7, 8, 19, 21]);
}

#[test]
fn test_add() {
    let mut set = hash_set![19, 21, 1, 2, 4, 8];
    set.add([5, 7, 1, 19]);
    assert_eq!(set.len(), 8);
    assert_eq!(set.to_string(), "{1 2 4 5 7 8 19 21}");

    assert!(set.insert(100));
    assert!(!set.insert(100), "Inserting a present item should report no change.");
    assert_eq!(set.len(), 9);
}

#[test]
fn test_delete() {
    let mut set = hash_set![19, 21, 1, 2, 5, 4, 8, 9, 11, 13, 7];
    set.delete(&[5, 7, 1, 19, 1000]);
    assert_eq!(set.len(), 7);
    assert_eq!(set.to_string(), "{2 4 8 9 11 13 21}");

    assert_eq!(set.remove(&2), Some(2));
    assert_eq!(set.remove(&2), None);

    let mut words: HashSet<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    words.delete(["a", "z"]);
    assert_eq!(words.to_string(), r#"{"b" "c"}"#, "Items should be deletable by borrowed form.");
}

#[test]
fn test_clear() {
    let mut set = hash_set![19, 21, 1, 2, 5, 4, 8, 9, 11, 13, 7];
    set.clear();
    assert_eq!(set.len(), 0);
    assert_eq!(set.to_string(), "{}");

    set.add([1, 2, 3]);
    assert_eq!(set.to_string(), "{1 2 3}");
}

#[test]
fn test_contains() {
    let set = hash_set![19, 21, 1, 2, 5, 4, 8, 9, 11, 13, 7];
    assert!(set.contains(&11));
    assert!(!set.contains(&23));
    assert!(!HashSet::<i32>::new().contains(&0));
}

#[test]
fn test_difference() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = hash_set![2, 4, 6, 8];

    let d = s.difference(&u);
    assert_eq!(d.len(), 6);
    assert_eq!(d.to_string(), "{0 1 3 5 7 9}");

    let d = u.difference(&s);
    assert_eq!(d.to_string(), "{}");
    assert_eq!(s.len(), 10, "Set algebra shouldn't modify the receiver.");

    assert_eq!(&s - &u, s.difference(&u));
}

#[test]
fn test_symmetric_difference() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = hash_set![2, 4, 6, 8];
    assert_eq!(s.symmetric_difference(&u).to_string(), "{0 1 3 5 7 9}");
    assert_eq!(u.symmetric_difference(&s).to_string(), "{0 1 3 5 7 9}");

    let v = hash_set![8, 9, 10];
    assert_eq!((&u ^ &v).to_string(), "{2 4 6 9 10}");
}

#[test]
fn test_intersection() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = hash_set![2, 4, 6, 8];
    assert_eq!(s.intersection(&u).to_string(), "{2 4 6 8}");
    assert_eq!(u.intersection(&s).to_string(), "{2 4 6 8}");

    let v = hash_set![1, 3, 5];
    assert!(u.intersection(&v).is_empty());
    assert!(v.intersection(&u).is_empty());
    assert_eq!(&s & &v, v);
}

#[test]
fn test_union() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = hash_set![2, 4, 6, 8, 10, 12];

    let x = s.union(&u);
    assert_eq!(x.len(), 12);
    assert_eq!(x.to_string(), "{0 1 2 3 4 5 6 7 8 9 10 12}");
    assert_eq!(&u | &s, x);
}

#[test]
fn test_unite() {
    let mut s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = hash_set![2, 4, 6, 8, 10, 12];
    s.unite(&u);
    assert_eq!(s.len(), 12);
    assert_eq!(s.to_string(), "{0 1 2 3 4 5 6 7 8 9 10 12}");
    assert_eq!(u.len(), 6, "Uniting shouldn't modify the other set.");
}

#[test]
fn test_assign_operators() {
    let mut set = hash_set![1, 2, 3, 4];
    set |= hash_set![4, 5];
    assert_eq!(set.to_string(), "{1 2 3 4 5}");

    set &= hash_set![2, 3, 4, 5, 6];
    assert_eq!(set.to_string(), "{2 3 4 5}");

    set ^= hash_set![5, 6];
    assert_eq!(set.to_string(), "{2 3 4 6}");

    set -= hash_set![2, 6, 7];
    assert_eq!(set.to_string(), "{3 4}");
}

#[test]
fn test_clone() {
    let mut s = hash_set![0, 1, 2, 3, 4, 6, 7, 8, 9];
    let mut u = s.clone();
    assert_eq!(s, u);

    u.add([5]);
    assert!(!s.contains(&5), "Modifying a clone shouldn't modify the original.");

    s.add([5]);
    assert_eq!(s.len(), u.len());
    assert_eq!(s.to_string(), u.to_string());
}

#[test]
fn test_equal() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let mut u = s.clone();
    assert!(s.set_eq(&u));

    u.add([-3]);
    assert!(!s.set_eq(&u));
    assert_ne!(s, u);

    let reordered: HashSet<i32> = (0..10).rev().collect();
    assert_eq!(s, reordered, "Equality shouldn't depend on insertion order.");
}

#[test]
fn test_is_disjoint() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = s.clone();
    assert!(!s.is_disjoint(&u));

    let w = hash_set![10, 11, 12];
    assert!(u.is_disjoint(&w));
    assert!(w.is_disjoint(&u));

    let empty = HashSet::<i32>::new();
    assert!(empty.is_disjoint(&empty), "Only the empty set is disjoint from itself.");
    assert!(!s.is_disjoint(&s));
}

#[test]
fn test_is_subset() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = s.clone();
    assert!(s.is_subset(&u));

    let w = hash_set![10, 11, 12];
    assert!(!w.is_subset(&s));

    let x = hash_set![4, 6, 2];
    assert!(x.is_subset(&s));

    let empty = HashSet::<i32>::new();
    assert!(empty.is_subset(&s));
    assert!(empty.is_subset(&empty));
}

#[test]
fn test_is_superset() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let u = s.clone();
    assert!(s.is_superset(&u));

    let w = hash_set![10, 11, 12];
    assert!(!w.is_superset(&s));

    let x = hash_set![4, 6, 2];
    assert!(!x.is_superset(&s));
    assert!(s.is_superset(&x));
}

#[test]
fn test_iteration() {
    let s = hash_set![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert!(s.contains(&7));

    let mut seen = s.iter().copied().collect::<Vec<_>>();
    seen.sort();
    assert_eq!(seen, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let iter = s.iter();
    assert_eq!(iter.len(), 10);
    assert_eq!(
        iter.clone().sum::<i32>(),
        iter.sum::<i32>(),
        "A cloned iterator should restart from the same position."
    );

    let mut owned = s.clone().into_iter().collect::<Vec<_>>();
    owned.sort();
    assert_eq!(owned, seen);
}

#[test]
fn test_indexed() {
    let s: HashSet<usize> = hash_set![10, 20, 30, 40, 50, 60, 70, 80, 90];
    assert_eq!(s.iter().sum::<usize>(), 450);

    let sum = s.indexed().map(|(i, v)| i + v).sum::<usize>();
    assert_eq!(sum, 486);

    let sum = s.indexed_from(1).map(|(i, v)| i + v).sum::<usize>();
    assert_eq!(sum, 495);

    let mut indexed = s.indexed_from(5);
    assert_eq!(indexed.next().map(|(i, _)| i), Some(5));
    assert_eq!(indexed.len(), 8);
    assert_eq!(s.len(), 9, "Stopping early shouldn't affect the set.");
}

#[test]
fn test_indexed_wraps() {
    let s = hash_set!['a', 'b'];
    let indices = s.indexed_from(usize::MAX).map(|(i, _)| i).collect::<Vec<_>>();
    assert_eq!(indices, [usize::MAX, 0], "Indices should wrap instead of overflowing.");
}

#[test]
fn test_retain_and_assign() {
    let mut s = hash_set![1, 2, 3, 4, 5, 6];
    s.retain(|i| i % 2 == 0);
    assert_eq!(s, hash_set![2, 4, 6]);

    s &= hash_set![4, 6, 8];
    assert_eq!(s, hash_set![4, 6]);
}

#[test]
fn test_lazy_algebra() {
    let s = hash_set![1, 2, 3, 4];
    let u = hash_set![3, 4, 5];

    let mut union = s.iter_union(&u).copied().collect::<Vec<_>>();
    union.sort();
    assert_eq!(union, [1, 2, 3, 4, 5]);

    let mut sym = s.iter_symmetric_difference(&u).copied().collect::<Vec<_>>();
    sym.sort();
    assert_eq!(sym, [1, 2, 5]);

    assert_eq!(s.iter_intersection(&u).count(), 2);
    assert_eq!(s.iter_difference(&u).count(), 2);
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(0, "one"));
    set.insert(ManualHash::new(2, "two"));
    set.insert(ManualHash::new(0, "three"));
    set.insert(ManualHash::new(2, "four"));
    set.insert(ManualHash::new(1, "five"));

    set.remove(&ManualHash::new(0, "zero"));
    set.remove(&ManualHash::new(2, "two"));

    let mut remaining = set.into_iter().map(|i| i.value()).collect::<Vec<_>>();
    remaining.sort();
    assert_eq!(
        remaining,
        ["five", "four", "one", "three"],
        "HashSet should handle hash collisions so that no elements are lost during removal."
    );
}

#[test]
fn test_reserve() {
    let mut set = HashSet::<u8>::with_cap(10);
    let cap = set.cap();
    set.add(0..10);
    assert_eq!(set.cap(), cap, "A set created with capacity shouldn't grow within it.");

    assert_eq!(set.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(set.try_reserve(usize::MAX / 5), Err(CapacityOverflow));
    assert_eq!(set.cap(), cap);
}

#[test]
fn test_debug() {
    let mut set = HashSet::<u8, _>::with_hasher(BadHasherBuilder);
    assert_eq!(
        format!("{set:?}"),
        "HashSet { contents: {}, len: 0, cap: 0, hasher: BadHasherBuilder }"
    );

    set.insert(1);
    assert!(format!("{set:?}").starts_with("HashSet { contents: {1}, len: 1"));
}
