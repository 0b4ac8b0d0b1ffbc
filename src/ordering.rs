/*!
Null-safe ordering primitives.

Absent values are modelled with [`Option::None`]. Two policies are supported:

- **Nulls first**: `None` is equal to `None` and less than any present value.
- **Nulls last**: `None` is equal to `None` and greater than any present value.

Present values are passed by reference. If both sides refer to the exact same value in memory the
result is [`Ordering::Equal`] without consulting [`Ord`] or the supplied [`Comparator`]. Identity
always wins, even for types whose ordering disagrees with their notion of identity.
*/

use std::cmp::Ordering;
use std::ptr;

use crate::comparator::{Comparator, NaturalOrder};

/// Where absent values are placed relative to present values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum NullPolicy {
    First,
    Last,
}

/**
A three-way comparison over primitive scalar values.

Integers, [`bool`] (`false < true`) and [`char`] use their natural ordering. Floating point values
use a total ordering in which `-0.0` sorts before `0.0` and every NaN is treated as a single value
that is equal to itself and greater than positive infinity.
*/
pub trait ScalarOrd: Copy {
    /// Compare `self` with `other`.
    fn scalar_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_scalar_ord_for_ord {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl ScalarOrd for $scalar {
                #[inline]
                fn scalar_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_ord_for_float {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl ScalarOrd for $scalar {
                fn scalar_cmp(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        // `total_cmp` already orders -0.0 before 0.0
                        (false, false) => self.total_cmp(other),
                    }
                }
            }
        )*
    };
}

impl_scalar_ord_for_ord!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
impl_scalar_ord_for_float!(f32, f64);

/// Compare two values by natural ordering where `None` sorts before any present value.
pub fn compare_nulls_first<T: Ord + ?Sized>(left: Option<&T>, right: Option<&T>) -> Ordering {
    compare_nullable(left, right, &NaturalOrder, NullPolicy::First)
}

/// Compare two values by natural ordering where `None` sorts after any present value.
pub fn compare_nulls_last<T: Ord + ?Sized>(left: Option<&T>, right: Option<&T>) -> Ordering {
    compare_nullable(left, right, &NaturalOrder, NullPolicy::Last)
}

/**
Compare two values with an explicit comparator where `None` sorts before any present value.

The comparator never receives an absent value.
*/
pub fn compare_nulls_first_by<T, C>(
    left: Option<&T>,
    right: Option<&T>,
    comparator: &C,
) -> Ordering
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    compare_nullable(left, right, comparator, NullPolicy::First)
}

/**
Compare two values with an explicit comparator where `None` sorts after any present value.

The comparator never receives an absent value.
*/
pub fn compare_nulls_last_by<T, C>(
    left: Option<&T>,
    right: Option<&T>,
    comparator: &C,
) -> Ordering
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    compare_nullable(left, right, comparator, NullPolicy::Last)
}

/// Compare two strings case-insensitively where `None` sorts before any present string.
pub fn compare_ignoring_case_nulls_first(left: Option<&str>, right: Option<&str>) -> Ordering {
    compare_nullable(left, right, &compare_ignoring_case, NullPolicy::First)
}

/// Compare two strings case-insensitively where `None` sorts after any present string.
pub fn compare_ignoring_case_nulls_last(left: Option<&str>, right: Option<&str>) -> Ordering {
    compare_nullable(left, right, &compare_ignoring_case, NullPolicy::Last)
}

/**
Compare two strings without regard to letter case.

Characters are compared position by position. Two characters at the same position are considered
equal if they are identical, if their upper case forms are identical, or if the lower case forms of
their upper case forms are identical. The first position that differs decides the ordering by the
folded lower case characters. If one string is a case-insensitive prefix of the other, the shorter
string sorts first.

Only single character case mappings are applied. Characters whose case mapping expands to several
characters (e.g. `ß`) are compared as they are.
*/
pub fn compare_ignoring_case(left: &str, right: &str) -> Ordering {
    let mut left_chars = left.chars();
    let mut right_chars = right.chars();

    loop {
        match (left_chars.next(), right_chars.next()) {
            (Some(left_char), Some(right_char)) => {
                if left_char == right_char {
                    continue;
                }

                let left_upper = to_single_upper(left_char);
                let right_upper = to_single_upper(right_char);
                if left_upper == right_upper {
                    continue;
                }

                let left_lower = to_single_lower(left_upper);
                let right_lower = to_single_lower(right_upper);
                if left_lower != right_lower {
                    return left_lower.cmp(&right_lower);
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Resolve identity and absent values before delegating to `comparator`.
fn compare_nullable<T, C>(
    left: Option<&T>,
    right: Option<&T>,
    comparator: &C,
    policy: NullPolicy,
) -> Ordering
where
    T: ?Sized,
    C: Comparator<T> + ?Sized,
{
    let absent_vs_present = match policy {
        NullPolicy::First => Ordering::Less,
        NullPolicy::Last => Ordering::Greater,
    };

    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => absent_vs_present,
        (Some(_), None) => absent_vs_present.reverse(),
        (Some(left), Some(right)) if ptr::eq(left, right) => Ordering::Equal,
        (Some(left), Some(right)) => comparator.compare(left, right),
    }
}

/// Upper case `c` if it maps to exactly one character.
fn to_single_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Lower case `c` if it maps to exactly one character.
fn to_single_lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn by_length(a: &str, b: &str) -> Ordering {
        a.len().cmp(&b.len())
    }

    #[test]
    fn nulls_first_places_absent_values_before_present_values() {
        assert_eq!(compare_nulls_first::<str>(None, None), Ordering::Equal);
        assert_eq!(compare_nulls_first(None, Some("flag")), Ordering::Less);
        assert_eq!(compare_nulls_first(Some("flag"), None), Ordering::Greater);
        assert_eq!(compare_nulls_first(Some("flag"), Some("flash")), Ordering::Less);
        assert_eq!(compare_nulls_first(Some("flash"), Some("flag")), Ordering::Greater);
    }

    #[test]
    fn nulls_last_places_absent_values_after_present_values() {
        assert_eq!(compare_nulls_last::<str>(None, None), Ordering::Equal);
        assert_eq!(compare_nulls_last(None, Some("flag")), Ordering::Greater);
        assert_eq!(compare_nulls_last(Some("flag"), None), Ordering::Less);
        assert_eq!(compare_nulls_last(Some("flag"), Some("flash")), Ordering::Less);
    }

    #[test]
    fn equal_values_at_different_addresses_compare_equal() {
        let first = String::from("flag");
        let second = String::from("flag");

        assert_eq!(
            compare_nulls_first(Some(first.as_str()), Some(second.as_str())),
            Ordering::Equal
        );
        assert_eq!(
            compare_nulls_last(Some(&first), Some(&second)),
            Ordering::Equal
        );
    }

    #[test]
    fn explicit_comparator_is_used_for_present_values() {
        assert_eq!(
            compare_nulls_first_by(Some("flag"), Some("flat"), &by_length),
            Ordering::Equal
        );
        assert_eq!(
            compare_nulls_first_by(Some("flash"), Some("flagged"), &by_length),
            Ordering::Less
        );
        assert_eq!(
            compare_nulls_last_by(None, Some("flag"), &by_length),
            Ordering::Greater
        );
        assert_eq!(
            compare_nulls_last_by(Some("flagged"), Some("flash"), &by_length),
            Ordering::Greater
        );
    }

    #[test]
    fn comparator_is_never_called_with_absent_values() {
        let calls = Cell::new(0_usize);
        let counting = |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        };

        compare_nulls_first_by(None, Some(&1), &counting);
        compare_nulls_first_by(Some(&1), None, &counting);
        compare_nulls_last_by::<i32, _>(None, None, &counting);
        assert_eq!(calls.get(), 0);

        compare_nulls_last_by(Some(&1), Some(&2), &counting);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn identical_references_skip_the_comparator() {
        let calls = Cell::new(0_usize);
        let counting = |a: &str, b: &str| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        };
        let value = String::from("flag");

        assert_eq!(
            compare_nulls_first_by(Some(value.as_str()), Some(value.as_str()), &counting),
            Ordering::Equal
        );
        assert_eq!(calls.get(), 0);

        // Same start address but a different length is a different value
        assert_eq!(
            compare_nulls_first_by(Some(&value[..2]), Some(value.as_str()), &counting),
            Ordering::Less
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn identity_wins_over_an_inconsistent_comparator() {
        let always_less = |_: &u8, _: &u8| Ordering::Less;
        let value = 7_u8;

        assert_eq!(
            compare_nulls_last_by(Some(&value), Some(&value), &always_less),
            Ordering::Equal
        );
    }

    #[test]
    fn ignoring_case_folds_letters() {
        assert_eq!(compare_ignoring_case("flag", "FLAG"), Ordering::Equal);
        assert_eq!(compare_ignoring_case("FLAG", "flash"), Ordering::Less);
        assert_eq!(compare_ignoring_case("flash", "FLAG"), Ordering::Greater);
        assert_eq!(compare_ignoring_case("Straße", "STRAßE"), Ordering::Equal);
        assert_eq!(compare_ignoring_case("ÉCOLE", "école"), Ordering::Equal);
    }

    #[test]
    fn ignoring_case_orders_prefixes_first() {
        assert_eq!(compare_ignoring_case("", ""), Ordering::Equal);
        assert_eq!(compare_ignoring_case("", "a"), Ordering::Less);
        assert_eq!(compare_ignoring_case("FLAG", "flags"), Ordering::Less);
        assert_eq!(compare_ignoring_case("flags", "FLAG"), Ordering::Greater);
    }

    #[test]
    fn ignoring_case_applies_null_policies() {
        assert_eq!(compare_ignoring_case_nulls_first(None, None), Ordering::Equal);
        assert_eq!(compare_ignoring_case_nulls_first(None, Some("flag")), Ordering::Less);
        assert_eq!(compare_ignoring_case_nulls_last(None, Some("flag")), Ordering::Greater);
        assert_eq!(compare_ignoring_case_nulls_last(Some("flag"), None), Ordering::Less);
        assert_eq!(
            compare_ignoring_case_nulls_last(Some("flag"), Some("FLAG")),
            Ordering::Equal
        );
    }

    #[test]
    fn integer_bool_and_char_scalars_use_natural_order() {
        assert_eq!(false.scalar_cmp(&true), Ordering::Less);
        assert_eq!(true.scalar_cmp(&true), Ordering::Equal);
        assert_eq!('A'.scalar_cmp(&'F'), Ordering::Less);
        assert_eq!((-10_i8).scalar_cmp(&60), Ordering::Less);
        assert_eq!(60_i16.scalar_cmp(&10), Ordering::Greater);
        assert_eq!(i64::MIN.scalar_cmp(&i64::MAX), Ordering::Less);
        assert_eq!(u64::MAX.scalar_cmp(&0), Ordering::Greater);
    }

    #[test]
    fn float_scalars_use_a_total_order() {
        assert_eq!(10.0_f32.scalar_cmp(&60.0), Ordering::Less);
        assert_eq!((-0.0_f64).scalar_cmp(&0.0), Ordering::Less);
        assert_eq!(0.0_f64.scalar_cmp(&-0.0), Ordering::Greater);
        assert_eq!(f64::NAN.scalar_cmp(&f64::INFINITY), Ordering::Greater);
        assert_eq!(f64::NEG_INFINITY.scalar_cmp(&f64::NAN), Ordering::Less);
        assert_eq!(f32::NAN.scalar_cmp(&-f32::NAN), Ordering::Equal);
    }
}
