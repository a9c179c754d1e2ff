//! Built-in sample suite.
//!
//! Four tagged units covering each verdict a well-formed unit can reach,
//! plus one untagged helper that discovery must skip:
//!
//! | unit              | expects                    | raises          | verdict        |
//! |-------------------|----------------------------|-----------------|----------------|
//! | `divideByZero`    | `ArithmeticFault`          | ArithmeticFault | passed         |
//! | `indexOutOfRange` | `ArithmeticFault`          | BoundsFault     | wrong failure  |
//! | `doesNothing`     | `ArithmeticFault`          | nothing         | no failure     |
//! | `multiFault`      | `BoundsFault`, `NullFault` | NullFault       | passed         |

use std::hint::black_box;

use raises_fault::{missing_value, ARITHMETIC, BOUNDS, NULL};

use crate::test::{Candidate, Target, UnitResult};

/// Build the sample target.
pub fn sample_target() -> Target {
    Target::new("sample")
        .with(Candidate::new("divideByZero", divide_by_zero).expect_fault(ARITHMETIC))
        .with(Candidate::new("indexOutOfRange", index_out_of_range).expect_fault(ARITHMETIC))
        .with(Candidate::new("doesNothing", does_nothing).expect_fault(ARITHMETIC))
        .with(
            Candidate::new("multiFault", multi_fault)
                .expect_fault(BOUNDS)
                .expect_fault(NULL),
        )
        .with(Candidate::new("helper", does_nothing))
}

fn divide_by_zero() -> UnitResult {
    let zero = black_box(0_i32);
    let _quotient = black_box(1 / zero);
    Ok(())
}

fn index_out_of_range() -> UnitResult {
    let values: Vec<i32> = black_box(Vec::new());
    let _value = black_box(values[1]);
    Ok(())
}

fn does_nothing() -> UnitResult {
    Ok(())
}

/// Splices a missing list past the end of an empty one. The missing list is
/// noticed before the bad position.
fn multi_fault() -> UnitResult {
    let mut list: Vec<String> = Vec::new();
    let additions: Option<Vec<String>> = black_box(None);
    let additions = additions.ok_or_else(|| missing_value("list to splice"))?;
    let _replaced: Vec<String> = list.splice(5..5, additions).collect();
    Ok(())
}
