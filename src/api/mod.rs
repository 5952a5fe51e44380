//! API Access
//!
//! HTTP wrapper over the quote API endpoints.

pub mod client;

pub use client::{
    authenticate, fetch_protected_quote, fetch_public_quote, get_api_base, ApiError,
};
