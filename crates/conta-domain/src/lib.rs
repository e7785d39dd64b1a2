//! Domain types shared between the conta core and its mobile shells
//!
//! This crate provides the canonical models for production-line counting:
//! - Reference: a product variant built on a production line
//! - Material: a bill-of-materials component of a reference
//! - Note: a free-text to-do item on the home screen
//!
//! Types here are pure data: serde-serializable, no I/O, no storage.

pub mod material;
pub mod note;
pub mod reference;

pub use material::*;
pub use note::*;
pub use reference::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
