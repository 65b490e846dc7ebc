//! Trait definitions for Caption Studio.
//!
//! The [`GenerationDriver`] trait separates the generation client from the
//! provider that actually talks to a model API.

mod driver;

pub use driver::GenerationDriver;
