//! Story definitions for the datetint demo harness.

pub mod stories;
