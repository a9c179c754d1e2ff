//! Fault kinds and captured failures for the `raises` test runner.
//!
//! This crate provides:
//! - `FaultKind`: identities for failure categories, arranged in a tree
//! - `Fault`: a raised failure carrying a kind and a message
//! - Classification of standard-library panic messages into kinds

mod fault;
mod kind;

pub use fault::{
    classify_panic_message, division_by_zero, illegal_argument, illegal_state,
    index_out_of_bounds, integer_overflow, missing_value, unsupported, Fault,
};
pub use kind::{
    FaultKind, ARITHMETIC, BOUNDS, BUILTIN_KINDS, FAULT, ILLEGAL_ARGUMENT, ILLEGAL_STATE, NULL,
    OVERFLOW, PANIC, PARSE, RUNTIME, UNSUPPORTED,
};
