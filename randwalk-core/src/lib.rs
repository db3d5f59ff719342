//! Core model for the random walk: entities, the bounded field they live on,
//! and the sequential scheduler that mutates them once per tick.

use thiserror::Error;

pub mod entity;
pub mod field;
pub mod scheduler;

pub use entity::{sample_step, Entity, STEP_CHOICES};
pub use field::{Bounds, Field};
pub use scheduler::{Scheduler, System};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}
