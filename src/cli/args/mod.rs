//! Shared CLI argument types

pub mod global;

pub use global::GlobalOptions;
