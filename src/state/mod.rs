//! State Management
//!
//! The session state machine and its persistence adapter.

pub mod session;
pub mod storage;

pub use session::{init, update, AuthEndpoint, Command, Credentials, Msg, SessionState};
