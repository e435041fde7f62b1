//! Play-level scalar facts: scrimmage line, first-down marker, clock, description.

pub(crate) mod description;
pub(crate) mod resolver;
