//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `policy`: Lead qualification rules

pub mod entities;
pub mod policy;
pub mod ports;
