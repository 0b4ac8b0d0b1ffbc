/*!
Utilities to assist with comparing based on various characteristics. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`Ord`].

Any closure or function with the shape `Fn(&T, &T) -> Ordering` is already a [`Comparator`], so
the types in this module are only needed for the common orderings that are awkward to spell out
inline.
*/

use std::cmp::Ordering;

use crate::ordering::compare_ignoring_case;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` > `b`
    1. Returns [`Ordering::Equal`] if `a` == `b`
    1. Returns [`Ordering::Less`] if `a` < `b`

    Callers in this crate never pass an absent value to a comparator. Null handling is resolved
    before delegating.
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A comparator that follows the natural ordering of values i.e. their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/**
A comparator that orders strings without regard to letter case.

See [`compare_ignoring_case`] for the exact folding rules.
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CaseInsensitiveOrder;

impl Comparator<str> for CaseInsensitiveOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_ignoring_case(a, b)
    }
}

impl Comparator<String> for CaseInsensitiveOrder {
    fn compare(&self, a: &String, b: &String) -> Ordering {
        compare_ignoring_case(a, b)
    }
}

/**
A comparator that imposes the reverse ordering of the wrapped comparator.

The operands are swapped before delegating instead of reversing the returned [`Ordering`].
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reversed<C>(
    /// The comparator whose ordering is reversed.
    pub C,
);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
