//! Frame synthesis: one drawable scene per time sample.

pub(crate) mod scene;
pub(crate) mod synthesizer;
