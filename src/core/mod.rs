//! Core components of the `ga4-report` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`GaClient`] and its builder.
//! - [`Credentials`] and access-token acquisition.
//! - The primary [`GaError`] type.

/// The main client (`GaClient`), builder, and credential sources.
pub mod client;
/// The primary error type (`GaError`) for the crate.
pub mod error;

/// Polars conversion for report tables.
#[cfg(feature = "dataframe")]
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::GaClient`
pub use client::{Credentials, GaClient, GaClientBuilder};
pub use error::GaError;
