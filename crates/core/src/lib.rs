//! Core library for arraykit
//!
//! This crate is a **Functional Core**: a set of independent, pure functions
//! that transform sequences of numbers or strings.
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O, no shared state, inputs are only borrowed
//! - **Total**: Every function accepts every input, including empty slices
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! Malformed numeric strings are not errors for the array functions; they
//! degrade to `0` through [`parse::parse_or_zero`]. Callers that need to know
//! why a string was rejected can use [`parse::parse_number`] directly.
//!
//! # Module Organization
//!
//! - [`numbers`]: Endpoints, scaling, written-out sums, and total injection
//! - [`strings`]: Numeric parsing of string lists, filtering, and counting
//! - [`parse`]: Strict numeric parsing with an explicit fallback
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Fallback substitutions are reported at `debug`, branch decisions at `trace`.
//!
//! # Example Usage
//!
//! ```rust
//! use arraykit_core::{inject_positive, make_math, shout_if_exclaiming};
//!
//! assert_eq!(inject_positive(&[1.0, 9.0, -5.0, 7.0]), vec![1.0, 9.0, -5.0, 10.0, 7.0]);
//! assert_eq!(make_math(&[1.0, 2.0, 3.0]), "6=1+2+3");
//! assert_eq!(shout_if_exclaiming(&["hi!", "what?", "ok"]), vec!["HI!", "ok"]);
//! ```

pub mod numbers;
pub mod parse;
pub mod strings;

pub use numbers::{
    book_end_list, inject_positive, make_math, summarize_addends, triple_numbers, MathSummary,
};
pub use parse::{parse_number, parse_or_zero, ParseNumberError};
pub use strings::{
    all_rgb, count_short_words, remove_dollars, shout_if_exclaiming, strings_to_integers,
};
