//! Typed value canonicalization for Crossfile source records.
//!
//! This crate provides:
//! - The [`Primitives`] trait: the host-supplied parsing contract
//! - [`PropertyType`]: nine field-type behaviors sharing a
//!   clean → normalize → fingerprint pipeline
//! - [`IndexCategory`] tags naming downstream inverted-index buckets
//! - A static registry resolving configured type names to variants
//!
//! Core invariants:
//! - `clean` never fails; malformed input degrades to best-effort text
//! - `normalize` always returns a set and is idempotent
//! - `fingerprint` is empty unless a variant defines a blocking key
//! - All operations are stateless and independently thread-safe
//!
#![deny(missing_docs)]

/// Per-field configuration recognized by the pipeline.
pub mod config;
/// Error types for type name resolution.
pub mod errors;
/// Host-supplied primitive parser contract.
pub mod primitives;
/// Property type variants and the canonicalization pipeline.
pub mod property;
/// Registered type name lookup.
pub mod registry;

pub use config::FieldConfig;
pub use errors::ResolveError;
pub use primitives::Primitives;
pub use property::{IndexCategory, PropertyType};
pub use registry::resolve_type;

/// Source record JSON payload type.
///
/// This is a type alias for `serde_json::Value` representing the record a
/// raw value was taken from. It is passed through `clean` for context and
/// is never mutated by this crate.
pub type RecordJson = serde_json::Value;
