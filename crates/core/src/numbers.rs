//! Transformations over sequences of numbers
//!
//! Every function borrows its input and builds a new value from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An addition written out as `"{sum}={a1}+{a2}+..."`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathSummary {
    pub sum: f64,
    pub addends: Vec<f64>,
}

impl fmt::Display for MathSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.addends.is_empty() {
            return write!(f, "0=0");
        }

        let terms = self
            .addends
            .iter()
            .map(|&n| unsigned_zero(n).to_string())
            .collect::<Vec<_>>()
            .join("+");

        write!(f, "{}={}", unsigned_zero(self.sum), terms)
    }
}

// `-0.0` renders as "-0"; written-out sums show it as "0"
fn unsigned_zero(n: f64) -> f64 {
    if n == 0.0 {
        0.0
    } else {
        n
    }
}

// Starts from +0.0 so an empty total never renders as "-0"
fn total(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Return just the first and last number
///
/// An empty slice yields an empty vector; a single element is repeated.
pub fn book_end_list(numbers: &[f64]) -> Vec<f64> {
    match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

/// Multiply every number by three
pub fn triple_numbers(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().map(|n| n * 3.0).collect()
}

/// Build the structured form of an addition
pub fn summarize_addends(addends: &[f64]) -> MathSummary {
    MathSummary {
        sum: total(addends),
        addends: addends.to_vec(),
    }
}

/// Write out an addition with its total first
///
/// `[1, 2, 3]` becomes `"6=1+2+3"` and `[]` becomes `"0=0"`.
pub fn make_math(addends: &[f64]) -> String {
    summarize_addends(addends).to_string()
}

/// Insert a running total after the first negative number
///
/// The inserted value is the sum of everything before that negative. When
/// there is no negative number the sum of all values is appended instead,
/// so an empty slice yields `[0]`.
pub fn inject_positive(values: &[f64]) -> Vec<f64> {
    let mut injected = Vec::with_capacity(values.len() + 1);

    match values.iter().position(|&v| v < 0.0) {
        Some(index) => {
            log::trace!("first negative at index {index}");
            let (head, tail) = values.split_at(index + 1);
            let sum_before_negative = total(&head[..index]);
            injected.extend_from_slice(head);
            injected.push(sum_before_negative);
            injected.extend_from_slice(tail);
        }
        None => {
            log::trace!("no negative value, appending total");
            injected.extend_from_slice(values);
            injected.push(total(values));
        }
    }

    injected
}
