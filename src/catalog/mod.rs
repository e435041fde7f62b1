//! Entity identity resolution.

pub(crate) mod entities;
