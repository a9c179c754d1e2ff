//! Fault kinds.
//!
//! A `FaultKind` names a category of failure. Kinds form a tree rooted at
//! [`FAULT`]: every kind except the root refines exactly one parent, and a
//! fault is an instance of its own kind and of every ancestor.
//!
//! ```text
//! Fault
//! └── RuntimeFault
//!     ├── ArithmeticFault
//!     │   └── OverflowFault
//!     ├── BoundsFault
//!     ├── NullFault
//!     ├── IllegalArgumentFault
//!     │   └── ParseFault
//!     ├── IllegalStateFault
//!     ├── UnsupportedFault
//!     └── PanicFault
//! ```
//!
//! Callers add their own kinds as `static`s refining any node of the tree.

use std::fmt;

use crate::Fault;

/// Identity of a failure category.
///
/// Two kinds are the same kind when their names and lineage agree. Define
/// kinds as `static` items so refinements can point at their parent:
///
/// ```
/// use raises_fault::{Fault, FaultKind, ILLEGAL_ARGUMENT};
///
/// static NEGATIVE_AMOUNT: FaultKind =
///     FaultKind::refine("NegativeAmountFault", &ILLEGAL_ARGUMENT);
///
/// let fault = Fault::new(NEGATIVE_AMOUNT, "amount was -3");
/// assert!(ILLEGAL_ARGUMENT.is_instance(&fault));
/// assert!(!NEGATIVE_AMOUNT.is_instance(&Fault::new(ILLEGAL_ARGUMENT, "bad")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaultKind {
    name: &'static str,
    parent: Option<&'static FaultKind>,
}

impl FaultKind {
    /// Create a kind with no parent.
    ///
    /// Only [`FAULT`] should normally be a root; a separate root makes a
    /// tree that no built-in kind belongs to.
    pub const fn root(name: &'static str) -> Self {
        FaultKind { name, parent: None }
    }

    /// Create a kind refining `parent`.
    pub const fn refine(name: &'static str, parent: &'static FaultKind) -> Self {
        FaultKind {
            name,
            parent: Some(parent),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&'static FaultKind> {
        self.parent
    }

    /// Iterate over this kind followed by each ancestor up to the root.
    pub fn lineage(&self) -> impl Iterator<Item = &FaultKind> + '_ {
        std::iter::successors(Some(self), |kind| kind.parent)
    }

    /// Returns true if `self` equals `other` or is one of its descendants.
    pub fn is_refinement_of(&self, other: &FaultKind) -> bool {
        self.lineage().any(|kind| kind == other)
    }

    /// Returns true if `fault` belongs to this kind or to a refinement of it.
    pub fn is_instance(&self, fault: &Fault) -> bool {
        fault.kind().is_refinement_of(self)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Root of the kind tree; every fault is an instance of it.
pub static FAULT: FaultKind = FaultKind::root("Fault");

/// Failures raised while running ordinary code.
pub static RUNTIME: FaultKind = FaultKind::refine("RuntimeFault", &FAULT);

/// Division or remainder by zero.
pub static ARITHMETIC: FaultKind = FaultKind::refine("ArithmeticFault", &RUNTIME);

/// Integer arithmetic that overflowed its type.
pub static OVERFLOW: FaultKind = FaultKind::refine("OverflowFault", &ARITHMETIC);

/// Indexing or slicing past the end of a collection.
pub static BOUNDS: FaultKind = FaultKind::refine("BoundsFault", &RUNTIME);

/// A value that was required but absent.
pub static NULL: FaultKind = FaultKind::refine("NullFault", &RUNTIME);

pub static ILLEGAL_ARGUMENT: FaultKind = FaultKind::refine("IllegalArgumentFault", &RUNTIME);

/// Text that could not be parsed into the requested type.
pub static PARSE: FaultKind = FaultKind::refine("ParseFault", &ILLEGAL_ARGUMENT);

pub static ILLEGAL_STATE: FaultKind = FaultKind::refine("IllegalStateFault", &RUNTIME);

/// Code paths that are not implemented yet.
pub static UNSUPPORTED: FaultKind = FaultKind::refine("UnsupportedFault", &RUNTIME);

/// A panic whose message matches no more specific kind.
pub static PANIC: FaultKind = FaultKind::refine("PanicFault", &RUNTIME);

/// Every built-in kind, root first.
pub static BUILTIN_KINDS: [&FaultKind; 11] = [
    &FAULT,
    &RUNTIME,
    &ARITHMETIC,
    &OVERFLOW,
    &BOUNDS,
    &NULL,
    &ILLEGAL_ARGUMENT,
    &PARSE,
    &ILLEGAL_STATE,
    &UNSUPPORTED,
    &PANIC,
];
