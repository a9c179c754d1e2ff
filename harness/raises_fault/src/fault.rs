//! Captured failures.
//!
//! A [`Fault`] is what a test body raises: a [`FaultKind`] plus a message,
//! optionally with the source location where it surfaced. Bodies raise a
//! fault by returning it as an `Err`, by calling [`Fault::raise`], or by
//! panicking; panics from the standard library are mapped onto kinds by
//! [`classify_panic_message`].
//!
//! Factory functions (e.g. `division_by_zero()`) build faults of the
//! built-in kinds with consistent messages.

use thiserror::Error;

use crate::kind::{
    FaultKind, ARITHMETIC, BOUNDS, ILLEGAL_ARGUMENT, ILLEGAL_STATE, NULL, OVERFLOW, PANIC, PARSE,
    UNSUPPORTED,
};

/// A failure raised by a test body.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
    location: Option<String>,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Fault {
            kind,
            message: message.into(),
            location: None,
        }
    }

    /// Build a fault from a panic message, choosing the kind from its text.
    pub fn from_panic_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = classify_panic_message(&message);
        Fault {
            kind,
            message,
            location: None,
        }
    }

    /// Attach the source location (`file:line:column`) the fault surfaced at.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Raise this fault by unwinding.
    ///
    /// The test invoker recognizes the payload and recovers the fault with
    /// its kind and message intact, located at the caller of `raise` unless
    /// a location was already set. This behaves like returning `Err(self)`
    /// from the body but works from nested calls that cannot return a
    /// `Result`.
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

/// Panic message fragments and the kind each one maps to.
///
/// Checked in order; the first fragment found in the message wins, so the
/// parse entries sit ahead of the generic `Result::unwrap()` entry.
static PANIC_PATTERNS: &[(&str, &FaultKind)] = &[
    ("attempt to divide by zero", &ARITHMETIC),
    ("attempt to calculate the remainder with a divisor of zero", &ARITHMETIC),
    ("with overflow", &OVERFLOW),
    ("index out of bounds", &BOUNDS),
    ("out of range for slice", &BOUNDS),
    ("out of range for str", &BOUNDS),
    ("is out of bounds of", &BOUNDS),
    ("insertion index", &BOUNDS),
    ("removal index", &BOUNDS),
    ("swap_remove index", &BOUNDS),
    ("called `Option::unwrap()` on a `None` value", &NULL),
    ("ParseIntError", &PARSE),
    ("ParseFloatError", &PARSE),
    ("ParseBoolError", &PARSE),
    ("called `Result::unwrap()` on an `Err` value", &ILLEGAL_STATE),
    ("not yet implemented", &UNSUPPORTED),
    ("not implemented", &UNSUPPORTED),
];

/// Map a panic message onto the most specific built-in kind.
///
/// Messages matching no known fragment are [`PANIC`]. `Option::expect` and
/// `Result::expect` panic with the caller's own message, so those cannot be
/// classified and usually land on [`PANIC`].
pub fn classify_panic_message(message: &str) -> FaultKind {
    PANIC_PATTERNS
        .iter()
        .find(|(fragment, _)| message.contains(fragment))
        .map_or(PANIC, |(_, kind)| **kind)
}

// Factory functions

/// Division or remainder by zero.
#[cold]
pub fn division_by_zero() -> Fault {
    Fault::new(ARITHMETIC, "division by zero")
}

/// Integer overflow in `operation`.
#[cold]
pub fn integer_overflow(operation: &str) -> Fault {
    Fault::new(OVERFLOW, format!("integer overflow in {operation}"))
}

/// Index past the end of a collection of length `len`.
#[cold]
pub fn index_out_of_bounds(index: usize, len: usize) -> Fault {
    Fault::new(
        BOUNDS,
        format!("index {index} out of bounds for length {len}"),
    )
}

/// A required value named `what` was absent.
#[cold]
pub fn missing_value(what: &str) -> Fault {
    Fault::new(NULL, format!("{what} is missing"))
}

#[cold]
pub fn illegal_argument(message: impl Into<String>) -> Fault {
    Fault::new(ILLEGAL_ARGUMENT, message)
}

#[cold]
pub fn illegal_state(message: impl Into<String>) -> Fault {
    Fault::new(ILLEGAL_STATE, message)
}

/// `feature` is not implemented.
#[cold]
pub fn unsupported(feature: &str) -> Fault {
    Fault::new(UNSUPPORTED, format!("{feature} is not supported"))
}
