//! # sentinel-core
//!
//! Core types, command battery, and error types for NetSentinel.
//!
//! This crate provides the foundational types shared across all NetSentinel crates:
//! - Entity structs for inventory devices and persisted inspection records
//! - Per-run outcome types (`CollectionOutcome`, `AnalysisResult`)
//! - Status enums for device rows and the analysis report row
//! - The ordered diagnostic command battery
//! - Reserved names and non-semantic placeholder constants
//! - Cross-cutting error types
//! - CLI response types

pub mod battery;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod outcome;
pub mod responses;
