//! CLI command implementations.


pub use test::{list_units, run_units, write_listing};
