//! Output writers: raw scene sequences as JSON, and Plotly figures.

pub(crate) mod json;
pub(crate) mod plotly;
