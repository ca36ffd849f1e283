use std::iter::{Chain, FusedIterator};

/// The behavior shared by all sets: membership, iteration, the relational predicates and lazy
/// iterators over the results of set algebra between two sets of the same type.
///
/// Implementors only provide [`len`](Set::len), [`contains`](Set::contains) and
/// [`iter`](Set::iter). Everything else is derived from those, so an implementation's answers
/// agree with each other by construction, e.g. `a.is_superset(b)` is always `b.is_subset(a)`.
pub trait Set<T>: Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns true if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `item` is an element of the set.
    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    fn iter_difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn iter_symmetric_difference<'a>(
        &'a self,
        other: &'a Self,
    ) -> SymmetricDifference<'a, Self, T> {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    fn iter_intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. (`self ∪
    /// other`)
    fn iter_union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        Union {
            inner: self.iter().chain(other.iter_difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`) The empty set is
    /// a subset of every set.
    fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no elements in common. (`self ∩ other = ∅`) A set
    /// is only disjoint from itself if it is empty.
    fn is_disjoint(&self, other: &Self) -> bool {
        // Probe the larger set with the smaller one.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.iter().any(|item| large.contains(item))
    }

    /// Returns true if both sets contain exactly the same elements. This is a structural
    /// comparison, not identity.
    fn set_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

/// A lazy iterator over `self \ other`. See [`Set::iter_difference`].
pub struct Difference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Difference<'a, S, T> where S::Iter<'a>: FusedIterator {}

/// A lazy iterator over `self △ other`. See [`Set::iter_symmetric_difference`].
pub struct SymmetricDifference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for SymmetricDifference<'a, S, T>
where S::Iter<'a>: FusedIterator {}

/// A lazy iterator over `self ∩ other`. See [`Set::iter_intersection`].
pub struct Intersection<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Intersection<'a, S, T> where S::Iter<'a>: FusedIterator {}

/// A lazy iterator over `self ∪ other`. See [`Set::iter_union`].
pub struct Union<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Union<'a, S, T> where S::Iter<'a>: FusedIterator {}
