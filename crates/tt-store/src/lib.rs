//! # tt-store
//!
//! Data-integrity core for techtrack: import validation and normalization,
//! the import/export pipeline, bulk status updates, durable key/value slots,
//! the working-collection service, and study plans.
//!
//! Everything here operates on in-memory values. The only I/O is through
//! [`slot::KeyValueSlot`] and [`export::write_export`].

pub mod bulk;
pub mod error;
pub mod export;
pub mod import;
pub mod payload;
pub mod plans;
pub mod seed;
pub mod service;
pub mod slot;
pub mod updates;
pub mod validation;

pub use error::StoreError;
pub use import::LoadOutcome;
pub use service::{AppendOutcome, NewTechnology, SlotKeys, TechnologyService};
pub use slot::{FileSlots, KeyValueSlot, MemorySlots};
