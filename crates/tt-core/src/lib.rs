//! # tt-core
//!
//! Core types, ID helpers, and error types for techtrack.
//!
//! This crate provides the foundational types shared across all techtrack crates:
//! - Entity structs (technologies, study plans, validation reports, export documents)
//! - Status and difficulty enums
//! - Technology identifiers and ID generation
//! - Search filtering and the bulk-edit selection set
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod ids;
pub mod responses;
pub mod selection;
