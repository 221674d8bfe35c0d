//! Trait abstractions for dependency injection and testability.
//!
//! - [`PresentationAdapter`] - consumer of tracker notifications

pub mod presentation;

pub use presentation::PresentationAdapter;
