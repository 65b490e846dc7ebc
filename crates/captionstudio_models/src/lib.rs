//! LLM provider drivers for Caption Studio.

mod catalog;
#[cfg(feature = "gemini")]
mod gemini;

pub use catalog::{DEFAULT_ENHANCED_MODEL, DEFAULT_STANDARD_MODEL, ModelCatalog};
#[cfg(feature = "gemini")]
pub use gemini::*;
