//! Session State Machine
//!
//! The single source of truth for the UI and the pure `update` function that
//! advances it. Side effects are never performed here; `update` only returns
//! a [`Command`] for the runner in `crate::app` to execute.

use serde::{Deserialize, Serialize};

use crate::api::client::ApiError;

/// The one session aggregate. All fields are plain strings; empty means
/// "unset". `token` presence alone decides authenticated status.
///
/// The serialized snapshot uses camelCase field names (`protectedQuote`,
/// `errorMsg`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub username: String,
    pub password: String,
    pub token: String,
    pub quote: String,
    pub protected_quote: String,
    pub error_msg: String,
}

impl SessionState {
    /// Whether the session is authenticated. The token is the sole signal.
    pub fn logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    /// Current credentials, as the auth endpoints expect them.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Request body for both auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Which auth endpoint a submit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEndpoint {
    Register,
    Login,
}

impl AuthEndpoint {
    /// Path below the API base.
    pub fn path(self) -> &'static str {
        match self {
            AuthEndpoint::Register => "users",
            AuthEndpoint::Login => "sessions/create",
        }
    }
}

/// Everything that can happen: user interactions and network completions.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    RequestPublicQuote,
    PublicQuoteFetched(String),
    PublicQuoteFailed,
    SetUsername(String),
    SetPassword(String),
    SubmitRegister,
    SubmitLogin,
    AuthFailed(ApiError),
    AuthSucceeded(String),
    RequestProtectedQuote,
    ProtectedQuoteFetched(String),
    ProtectedQuoteFailed,
    LogOut,
}

/// Zero-or-one deferred effect returned alongside the new state.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    FetchPublicQuote,
    Authenticate {
        credentials: Credentials,
        endpoint: AuthEndpoint,
    },
    FetchProtectedQuote {
        token: String,
    },
    /// Write this snapshot to persistent storage.
    Persist(SessionState),
    /// Delete the persisted snapshot.
    ClearSnapshot,
}

/// Compute the initial state from a restored snapshot, if any. Without a
/// snapshot the app starts empty and immediately fetches a public quote.
pub fn init(restored: Option<SessionState>) -> (SessionState, Command) {
    match restored {
        Some(state) => (state, Command::None),
        None => (SessionState::default(), Command::FetchPublicQuote),
    }
}

/// Advance the session state. Pure and total: every message is handled, at
/// most one command comes back.
///
/// Quote-fetch failures are swallowed on purpose while auth failures surface
/// in `error_msg`; the runner logs the former to the console.
pub fn update(msg: Msg, state: &SessionState) -> (SessionState, Command) {
    let mut next = state.clone();
    let command = match msg {
        Msg::RequestPublicQuote => Command::FetchPublicQuote,
        Msg::PublicQuoteFetched(text) => {
            next.quote = text;
            Command::None
        }
        Msg::PublicQuoteFailed => Command::None,
        Msg::SetUsername(username) => {
            next.username = username;
            Command::None
        }
        Msg::SetPassword(password) => {
            next.password = password;
            Command::None
        }
        Msg::SubmitRegister => Command::Authenticate {
            credentials: next.credentials(),
            endpoint: AuthEndpoint::Register,
        },
        Msg::SubmitLogin => Command::Authenticate {
            credentials: next.credentials(),
            endpoint: AuthEndpoint::Login,
        },
        Msg::AuthFailed(err) => {
            next.error_msg = err.to_string();
            Command::None
        }
        Msg::AuthSucceeded(token) => {
            next.token = token;
            next.password = String::new();
            next.error_msg = String::new();
            Command::Persist(next.clone())
        }
        Msg::RequestProtectedQuote => Command::FetchProtectedQuote {
            token: next.token.clone(),
        },
        Msg::ProtectedQuoteFetched(text) => {
            next.protected_quote = text;
            Command::Persist(next.clone())
        }
        Msg::ProtectedQuoteFailed => Command::None,
        Msg::LogOut => {
            // Everything session-scoped resets; the public quote is not.
            next = SessionState {
                quote: next.quote,
                ..SessionState::default()
            };
            Command::ClearSnapshot
        }
    };
    (next, command)
}
