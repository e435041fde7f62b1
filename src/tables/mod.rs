//! Grouping and coloring policy.

pub(crate) mod lookup;
