//! # iconik Integration Library
//!
//! A production-ready client for the iconik media-asset-management API
//! with:
//! - One accessor per resource group (assets, collections, files,
//!   metadata, search, jobs, transcode, ACLs, auth, users, settings,
//!   notifications, stats, automations, users-notifications)
//! - Typed request/response payloads with create/patch dump policies
//! - A result envelope pairing every decoded response with the raw one
//! - Retry with exponential backoff on transient failures
//! - Automatic pagination with a date-continuation fallback past the
//!   search backend's result window
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_iconik::IconikClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IconikClient::builder()
//!         .app_id("8b4e1c2a-0f3d-4a5b-9c6d-7e8f9a0b1c2d")
//!         .auth_token("tok_xxxxxxxxxxxx")
//!         .build()?;
//!
//!     // Fetch an asset; the envelope keeps the raw response around.
//!     let response = client.assets().get("asset-id").await?;
//!     if let Some(asset) = response.data {
//!         println!("{}", asset.title);
//!     } else {
//!         eprintln!("server said {}", response.raw.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication headers
pub mod auth;

// Request bodies and dump policies
pub mod body;

// Result envelope
pub mod envelope;

// HTTP transport
pub mod transport;

// Client facade
pub mod client;

// Pagination engine
pub mod pagination;

// API services
pub mod services;

// Observability
pub mod observability;

// Fixtures for testing
pub mod mocks;

// Re-exports for convenience
pub use body::{Body, DumpPolicy, Field};
pub use client::{IconikClient, IconikClientBuilder};
pub use config::{IconikConfig, IconikConfigBuilder, RetryConfig};
pub use envelope::{ApiResponse, RawResponse};
pub use errors::{IconikError, IconikErrorKind, IconikResult};
pub use pagination::{PageItem, PageQuery, PaginatedResponse, PaginationConfig, Paginator};
pub use types::*;
