/*!
Small helpers for ordering values and validating inputs.

The centerpiece is the [`ComparisonChain`], a fluent way of comparing two records key by key that
stops evaluating as soon as one key differentiates them. It is typically used to implement [`Ord`]
or to build a comparator for [`slice::sort_by`].

```
use std::cmp::Ordering;

use comparisons::chain;

struct Release {
    name: Option<String>,
    major: u32,
    minor: u32,
}

let mut releases = vec![
    Release { name: Some("beta".to_owned()), major: 1, minor: 2 },
    Release { name: None, major: 2, minor: 0 },
    Release { name: Some("Alpha".to_owned()), major: 1, minor: 2 },
];

releases.sort_by(|a, b| {
    chain()
        .descending(a.major, b.major)
        .descending(a.minor, b.minor)
        .ascending_ignoring_case_nulls_last(a.name.as_deref(), b.name.as_deref())
        .ordering()
});

let names: Vec<Option<&str>> = releases.iter().map(|r| r.name.as_deref()).collect();
assert_eq!(names, vec![None, Some("Alpha"), Some("beta")]);
assert_eq!(chain().ascending(1.5, 0.5).ordering(), Ordering::Greater);
```

Supporting modules provide the null-safe [`ordering`] primitives the chain is built on, a
[`Comparator`] abstraction and a handful of precondition [`checks`].
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod chain;
pub use chain::{chain, comparison_chain, ComparisonChain};

pub mod checks;
pub use checks::{
    require_not_null, require_not_null_with, require_positive, require_positive_with,
};

pub mod comparator;
pub use comparator::{CaseInsensitiveOrder, Comparator, NaturalOrder, Reversed};

pub mod config;

mod errors;
pub use errors::{CheckError, CheckResult};

pub mod ordering;
pub use ordering::ScalarOrd;
