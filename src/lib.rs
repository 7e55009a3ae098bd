//! Core version discovery layer for upstream release monitoring
//!
//! Given a project's upstream URL and an extraction pattern, this crate
//! fetches the remote content, pulls every candidate version string out of
//! it and returns the candidates deduplicated and, on request, ordered
//! oldest to newest. Scheduling of checks, persistence and notification are
//! the calling layer's business.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Backend   │────▶│  Extractor  │────▶│   Fetcher   │
//! │  (sources)  │     │  (regex)    │     │ (http/ftp)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Ordering   │
//! │ (vers. cmp) │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`backend`]: the trait concrete upstream source integrations implement
//! - [`config`]: fetcher configuration (client identity, operator contact)
//! - [`error`]: the error type callers match on
//! - [`extractor`]: regex-based version extraction
//! - [`fetcher`]: scheme-dispatched content retrieval (HTTP and FTP)
//! - [`ordering`]: total-order sorting of version strings
//! - [`types`]: caller-supplied project identity

pub mod backend;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod ordering;
pub mod types;
