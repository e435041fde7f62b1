//! Scene ordering and sequence-level metadata.

pub(crate) mod sequence;
