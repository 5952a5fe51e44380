//! UI Components
//!
//! Leptos components making up the single Quoteboard view.

pub mod nav;
pub mod auth_panel;
pub mod quote_card;
pub mod protected_quote;

pub use nav::Nav;
pub use auth_panel::AuthPanel;
pub use quote_card::QuoteCard;
pub use protected_quote::ProtectedQuoteCard;
