//! # tt-catalog
//!
//! Outbound HTTP access to the demo catalog API (`dummyjson.com` by default):
//! product search and listing projected into technologies, per-product
//! resource links, and roadmap import with ordered shape adapters.
//! [`debounce::LatestRequest`] wraps search in a debounced, cancelable
//! single-slot register for interactive use.

pub mod client;
pub mod debounce;
pub mod projection;
pub mod roadmap;

mod error;
mod http;

pub use client::{CatalogClient, CatalogSearch};
pub use debounce::{LatestRequest, RequestState, SearchOutcome};
pub use error::CatalogError;
pub use projection::CatalogTechnology;
pub use roadmap::RoadmapEntry;
