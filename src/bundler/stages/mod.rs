//! Pipeline stages.
//!
//! - [`asset_bundles`] - build plan validation and the bundle build call
//! - [`tools`] - external bundle/compile tools
//! - [`relocator`] - streaming assets mirror
//! - [`collector`] - AOT and hot-update assembly copies
//! - [`manifest`] - `Versions.txt` generation and parsing
//! - [`verify`] - manifest verification

pub mod asset_bundles;
pub mod collector;
pub mod manifest;
pub mod relocator;
pub mod tools;
pub mod verify;
