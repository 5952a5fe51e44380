//! App Root Component
//!
//! Root view plus the runner loop: the store owns the one `SessionState`
//! value, pushes every message through the pure `update` function, and
//! executes whatever command comes back (HTTP call, storage write). Network
//! completions re-enter the loop as ordinary messages.

use leptos::*;

use crate::api;
use crate::components::{AuthPanel, Nav, ProtectedQuoteCard, QuoteCard};
use crate::state::session::{init, update, Command, Msg, SessionState};
use crate::state::storage;

/// Handle to the session state, shared with every component via context.
#[derive(Clone, Copy)]
pub struct Store {
    pub state: RwSignal<SessionState>,
}

impl Store {
    /// Apply a message and execute the resulting command.
    pub fn dispatch(self, msg: Msg) {
        let (next, command) = update(msg, &self.state.get_untracked());
        self.state.set(next);
        self.run(command);
    }

    fn run(self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchPublicQuote => spawn_local(async move {
                match api::fetch_public_quote().await {
                    Ok(text) => self.dispatch(Msg::PublicQuoteFetched(text)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch quote: {}", e).into(),
                        );
                        self.dispatch(Msg::PublicQuoteFailed);
                    }
                }
            }),
            Command::Authenticate {
                credentials,
                endpoint,
            } => spawn_local(async move {
                match api::authenticate(&credentials, endpoint).await {
                    Ok(token) => self.dispatch(Msg::AuthSucceeded(token)),
                    Err(e) => self.dispatch(Msg::AuthFailed(e)),
                }
            }),
            Command::FetchProtectedQuote { token } => spawn_local(async move {
                match api::fetch_protected_quote(&token).await {
                    Ok(text) => self.dispatch(Msg::ProtectedQuoteFetched(text)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch protected quote: {}", e).into(),
                        );
                        self.dispatch(Msg::ProtectedQuoteFailed);
                    }
                }
            }),
            Command::Persist(snapshot) => storage::save(&snapshot),
            Command::ClearSnapshot => storage::remove(),
        }
    }
}

/// Build the store from any persisted snapshot and provide it to the tree.
fn provide_store() {
    let (initial, command) = init(storage::load());
    let store = Store {
        state: create_rw_signal(initial),
    };
    provide_context(store);
    store.run(command);
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_store();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 max-w-2xl space-y-8">
                <AuthPanel />
                <QuoteCard />
                <ProtectedQuoteCard />
            </main>

            <Footer />
        </div>
    }
}

/// Footer showing which API the client talks to
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto max-w-2xl flex items-center justify-between text-sm text-gray-400">
                <span>"Quoteboard"</span>
                <span>{format!("API: {}", api::get_api_base())}</span>
            </div>
        </footer>
    }
}
