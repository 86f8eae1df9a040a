//! Terminal output: capability detection, theme, text and NDJSON rendering

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
