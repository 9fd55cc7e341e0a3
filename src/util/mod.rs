//! Helper functions shared by the filter implementations.

/// Some basic math functions used elsewhere in the project
pub mod math;
