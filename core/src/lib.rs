//! Core library for the task manager backend
//!
//! This crate contains the task domain model and storage access.

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
