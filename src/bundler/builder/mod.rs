//! Staging orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that runs the
//! pipeline stages for one build target.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`]
//! 2. Builds asset bundles through the configured tool
//! 3. Compiles hot-update assemblies through the configured tool
//! 4. Mirrors bundles into streaming assets
//! 5. Collects AOT and hot-update assemblies as `.bytes` files
//! 6. Writes the `Versions.txt` checksum manifest
//!
//! # Module Organization
//!
//! - [`checksum`] - MD5 checksum calculation for staged files
//! - [`orchestrator`] - Main [`Bundler`] struct and stage sequencing
//! - [`tool_detection`] - Host tool availability checking
//!
//! [`Settings`]: crate::bundler::Settings

mod checksum;
mod orchestrator;
pub mod tool_detection;

pub use checksum::{calculate_md5, md5_hex};
pub use orchestrator::Bundler;
