pub mod commands;
pub mod entity;

pub use commands::{CreateThought, ValidationError};
pub use entity::{NewThought, Thought};
