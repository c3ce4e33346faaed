//! # Config Crate
//!
//! Centralized configuration for the adapter generator.
//! All magic numbers and tunable parameters are defined here so the mesh
//! builders, composers and boundary crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, FRUSTUM_TOP_TAPER};
//! use config::settings::GenerationSettings;
//!
//! let settings = GenerationSettings::default();
//! assert_eq!(settings.segments, DEFAULT_SEGMENTS);
//! assert!(FRUSTUM_TOP_TAPER > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Tunable settings are only constructed through checked builders

pub mod constants;
pub mod settings;
