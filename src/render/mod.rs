//! Title card rendering.
pub mod card;

pub use card::CardRenderer;
