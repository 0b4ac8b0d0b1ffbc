/*!
A fluent, short-circuiting accumulator of ordering decisions.

A [`ComparisonChain`] compares two records key by key in a caller chosen priority order, the same
way tuples are compared lexicographically. The first key that differentiates the records decides
the outcome. Every step after that is a no-op, so a chain can always be written out in full without
paying for comparisons that can no longer change the result.

```
use std::cmp::Ordering;

use comparisons::chain;

let result = chain()
    .ascending(10, 10)
    .ascending(1, 2)
    .ascending(99, 1)
    .ordering();

assert_eq!(result, Ordering::Less);
```

# Descending steps

Every `descending*` step swaps `left` and `right` before delegating to the matching ascending
comparison. It does not negate the ascending result. For keys with a null policy this matters: a
descending nulls-first step puts present values before absent ones, because the absent value is now
on the other side of the comparison.
*/

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::config::{EQUAL_RESULT, GREATER_RESULT, LESS_RESULT};
use crate::ordering::{
    compare_ignoring_case_nulls_first, compare_ignoring_case_nulls_last, compare_nulls_first,
    compare_nulls_first_by, compare_nulls_last, compare_nulls_last_by, ScalarOrd,
};

/// Returns a comparison chain in its initial active state.
pub const fn chain() -> ComparisonChain {
    ComparisonChain::ACTIVE
}

/**
Returns a comparison chain in its initial active state.

This is an alias of [`chain`] for call sites that read better with the longer name.
*/
pub const fn comparison_chain() -> ComparisonChain {
    ComparisonChain::ACTIVE
}

/**
The accumulated outcome of zero or more pairwise key comparisons.

A chain is a plain [`Copy`] value. Steps never mutate a chain in place, they return the next state.
This makes the active state safe to share and reuse as the start of any number of independent
comparisons.

# Invariants

- Once a chain is decided, every further step returns it unchanged and does not evaluate its
  arguments' comparison.
- [`ComparisonChain::result`] is always one of [`LESS_RESULT`], [`EQUAL_RESULT`] or
  [`GREATER_RESULT`]. Only the sign is meaningful.
*/
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ComparisonChain {
    /// No differentiating key has been seen yet.
    #[default]
    Active,

    /// A previous step determined that the left record sorts first.
    DecidedLess,

    /// A previous step determined that the left record sorts last.
    DecidedGreater,
}

/// Public methods
impl ComparisonChain {
    /// The initial state of every chain.
    pub const ACTIVE: ComparisonChain = ComparisonChain::Active;

    /// Construct a new chain in the active state.
    pub const fn start() -> Self {
        Self::ACTIVE
    }

    /// Returns true if a step has already fixed the outcome of this chain.
    pub fn is_decided(&self) -> bool {
        !matches!(self, ComparisonChain::Active)
    }

    /**
    Apply an already computed comparison outcome.

    An active chain stays active on [`Ordering::Equal`] and is decided otherwise. A decided chain
    ignores `outcome`.
    */
    pub fn accept(self, outcome: Ordering) -> Self {
        match self {
            ComparisonChain::Active => match outcome {
                Ordering::Equal => self,
                Ordering::Less => {
                    log::trace!("Comparison chain decided: left sorts first");
                    ComparisonChain::DecidedLess
                }
                Ordering::Greater => {
                    log::trace!("Comparison chain decided: left sorts last");
                    ComparisonChain::DecidedGreater
                }
            },
            decided => decided,
        }
    }

    /**
    Apply an already computed comparison outcome expressed as a signed integer.

    Only the sign of `outcome` is considered, as with the classic `compare` convention.
    */
    pub fn accept_raw(self, outcome: i32) -> Self {
        self.accept(outcome.cmp(&0))
    }

    /**
    Apply the outcome of `comparison` if the chain is still active.

    `comparison` is not invoked once the chain is decided. Panics raised by `comparison` propagate
    to the caller unchanged.
    */
    pub fn compare_with<F>(self, comparison: F) -> Self
    where
        F: FnOnce() -> Ordering,
    {
        if self.is_decided() {
            return self;
        }

        self.accept(comparison())
    }

    /**
    Apply the outcome of a fallible `comparison` if the chain is still active.

    `comparison` is not invoked once the chain is decided. An error returned by `comparison` is
    passed through as is.
    */
    pub fn try_compare_with<F, E>(self, comparison: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<Ordering, E>,
    {
        if self.is_decided() {
            return Ok(self);
        }

        Ok(self.accept(comparison()?))
    }

    /// Compare two scalar values in their natural order.
    pub fn ascending<T: ScalarOrd>(self, left: T, right: T) -> Self {
        self.compare_with(|| left.scalar_cmp(&right))
    }

    /// Compare two scalar values in reverse order.
    pub fn descending<T: ScalarOrd>(self, left: T, right: T) -> Self {
        self.compare_with(|| right.scalar_cmp(&left))
    }

    /// Compare two optional values in natural order where `None` sorts first.
    pub fn ascending_nulls_first<T: Ord + ?Sized>(
        self,
        left: Option<&T>,
        right: Option<&T>,
    ) -> Self {
        self.compare_with(|| compare_nulls_first(left, right))
    }

    /// Compare two optional values in natural order where `None` sorts last.
    pub fn ascending_nulls_last<T: Ord + ?Sized>(
        self,
        left: Option<&T>,
        right: Option<&T>,
    ) -> Self {
        self.compare_with(|| compare_nulls_last(left, right))
    }

    /**
    Compare two optional values with `comparator` where `None` sorts first.

    The comparator never receives an absent value.
    */
    pub fn ascending_nulls_first_by<T, C>(
        self,
        left: Option<&T>,
        right: Option<&T>,
        comparator: &C,
    ) -> Self
    where
        T: ?Sized,
        C: Comparator<T> + ?Sized,
    {
        self.compare_with(|| compare_nulls_first_by(left, right, comparator))
    }

    /**
    Compare two optional values with `comparator` where `None` sorts last.

    The comparator never receives an absent value.
    */
    pub fn ascending_nulls_last_by<T, C>(
        self,
        left: Option<&T>,
        right: Option<&T>,
        comparator: &C,
    ) -> Self
    where
        T: ?Sized,
        C: Comparator<T> + ?Sized,
    {
        self.compare_with(|| compare_nulls_last_by(left, right, comparator))
    }

    /// Compare two optional strings case-insensitively where `None` sorts first.
    pub fn ascending_ignoring_case_nulls_first(
        self,
        left: Option<&str>,
        right: Option<&str>,
    ) -> Self {
        self.compare_with(|| compare_ignoring_case_nulls_first(left, right))
    }

    /// Compare two optional strings case-insensitively where `None` sorts last.
    pub fn ascending_ignoring_case_nulls_last(
        self,
        left: Option<&str>,
        right: Option<&str>,
    ) -> Self {
        self.compare_with(|| compare_ignoring_case_nulls_last(left, right))
    }

    /**
    Compare two optional values in reverse natural order, applying the nulls-first policy to the
    swapped pair.

    A present `left` therefore sorts before an absent `right`.
    */
    pub fn descending_nulls_first<T: Ord + ?Sized>(
        self,
        left: Option<&T>,
        right: Option<&T>,
    ) -> Self {
        self.compare_with(|| compare_nulls_first(right, left))
    }

    /**
    Compare two optional values in reverse natural order, applying the nulls-last policy to the
    swapped pair.

    An absent `left` therefore sorts before a present `right`.
    */
    pub fn descending_nulls_last<T: Ord + ?Sized>(
        self,
        left: Option<&T>,
        right: Option<&T>,
    ) -> Self {
        self.compare_with(|| compare_nulls_last(right, left))
    }

    /// Compare two optional values in reverse `comparator` order, nulls-first on the swapped pair.
    pub fn descending_nulls_first_by<T, C>(
        self,
        left: Option<&T>,
        right: Option<&T>,
        comparator: &C,
    ) -> Self
    where
        T: ?Sized,
        C: Comparator<T> + ?Sized,
    {
        self.compare_with(|| compare_nulls_first_by(right, left, comparator))
    }

    /// Compare two optional values in reverse `comparator` order, nulls-last on the swapped pair.
    pub fn descending_nulls_last_by<T, C>(
        self,
        left: Option<&T>,
        right: Option<&T>,
        comparator: &C,
    ) -> Self
    where
        T: ?Sized,
        C: Comparator<T> + ?Sized,
    {
        self.compare_with(|| compare_nulls_last_by(right, left, comparator))
    }

    /// Compare two optional strings in reverse case-insensitive order, nulls-first on the swapped
    /// pair.
    pub fn descending_ignoring_case_nulls_first(
        self,
        left: Option<&str>,
        right: Option<&str>,
    ) -> Self {
        self.compare_with(|| compare_ignoring_case_nulls_first(right, left))
    }

    /// Compare two optional strings in reverse case-insensitive order, nulls-last on the swapped
    /// pair.
    pub fn descending_ignoring_case_nulls_last(
        self,
        left: Option<&str>,
        right: Option<&str>,
    ) -> Self {
        self.compare_with(|| compare_ignoring_case_nulls_last(right, left))
    }

    /**
    Returns the result of this comparison chain.

    This is `0` while the chain is active, negative if the left record sorts first and positive if
    it sorts last. Callers must not depend on the magnitude.
    */
    pub fn result(&self) -> i32 {
        match self {
            ComparisonChain::Active => EQUAL_RESULT,
            ComparisonChain::DecidedLess => LESS_RESULT,
            ComparisonChain::DecidedGreater => GREATER_RESULT,
        }
    }

    /// Returns the negated result of this comparison chain.
    pub fn result_inverted(&self) -> i32 {
        -self.result()
    }

    /// Returns the result of this comparison chain as an [`Ordering`].
    pub fn ordering(&self) -> Ordering {
        match self {
            ComparisonChain::Active => Ordering::Equal,
            ComparisonChain::DecidedLess => Ordering::Less,
            ComparisonChain::DecidedGreater => Ordering::Greater,
        }
    }

    /// Returns the reversed result of this comparison chain as an [`Ordering`].
    pub fn ordering_inverted(&self) -> Ordering {
        self.ordering().reverse()
    }
}

impl From<ComparisonChain> for Ordering {
    fn from(chain: ComparisonChain) -> Self {
        chain.ordering()
    }
}
