//! Operating system version gating
//!
//! This module answers one question: does the running Windows release fall
//! within a supported range of catalog releases?
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Checker   │◀────│   Catalog   │
//! │ (host query)│     │(cache, cmp) │     │ (releases)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ▲
//!                            │
//!                     ┌─────────────┐
//!                     │ Preferences │
//!                     │ (cosmetic)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Curated release table and lookup
//! - [`checker`]: Cached current version and inclusive range checks
//! - [`source`]: Trait and implementations for querying the host version
//! - [`preferences`]: Cosmetic version override
//! - [`error`]: Error types for queries, parsing, lookups and config
//! - [`types`]: The `OsVersion` triple

pub mod catalog;
pub mod checker;
pub mod error;
pub mod preferences;
pub mod source;
pub mod types;
