//! Three ways to sum the integers `1..=n`.
//!
//! All of them treat `n <= 0` as the empty sum and assume the result fits in
//! an `i64`. The recursive one also refuses inputs deeper than
//! [`MAX_RECURSIVE_N`].

use anyhow::{ensure, Result};
use strum::{EnumIter, IntoStaticStr};

/// Deepest input the recursive sum accepts. One stack frame per term, so this
/// stays well inside a 2 MiB thread stack.
pub const MAX_RECURSIVE_N: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SumMethod {
    Iterative,
    ClosedForm,
    Recursive,
}

impl SumMethod {
    pub fn sum_to_n(self, n: i64) -> Result<i64> {
        match self {
            Self::Iterative => Ok(sum_to_n_iterative(n)),
            Self::ClosedForm => Ok(sum_to_n_closed_form(n)),
            Self::Recursive => sum_to_n_recursive(n),
        }
    }

    /// Reject an input this method cannot sum, before doing any work.
    pub fn check(self, n: i64) -> Result<()> {
        if self == Self::Recursive {
            ensure!(
                n <= MAX_RECURSIVE_N,
                "recursive sum supports n up to {MAX_RECURSIVE_N}, got {n}"
            );
        }
        Ok(())
    }
}

/// Add the terms one by one.
pub fn sum_to_n_iterative(n: i64) -> i64 {
    let mut total = 0;
    for i in 1..=n {
        total += i;
    }
    total
}

/// Gauss: `n(n + 1) / 2`.
pub fn sum_to_n_closed_form(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    // one of n, n + 1 is even
    if n % 2 == 0 {
        (n / 2) * (n + 1)
    } else {
        n * ((n + 1) / 2)
    }
}

/// `n + sum(n - 1)`. Errors above [`MAX_RECURSIVE_N`].
pub fn sum_to_n_recursive(n: i64) -> Result<i64> {
    SumMethod::Recursive.check(n)?;
    Ok(recurse(n))
}

fn recurse(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    n + recurse(n - 1)
}
