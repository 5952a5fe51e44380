//! Protected Quote Component
//!
//! Members-only quote section. Logged out it shows a prompt; logged in it
//! offers the fetch action, with the quote text kept in the tree but hidden
//! until one has been fetched.

use leptos::*;

use crate::app::Store;
use crate::state::session::Msg;

/// Protected quote section
#[component]
pub fn ProtectedQuoteCard() -> impl IntoView {
    let store = use_context::<Store>().expect("Store not found");
    let state = store.state;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Protected Quote"</h2>
                {move || {
                    if state.get().logged_in() {
                        view! {
                            <button
                                on:click=move |_| store.dispatch(Msg::RequestProtectedQuote)
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       font-medium transition-colors"
                            >
                                "Fetch Protected Quote"
                            </button>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>

            {move || {
                let s = state.get();
                if s.logged_in() {
                    let hidden = if s.protected_quote.is_empty() { " hidden" } else { "" };
                    view! {
                        <blockquote class=format!(
                            "text-gray-300 italic border-l-4 border-primary-500 pl-4{}",
                            hidden
                        )>
                            {s.protected_quote}
                        </blockquote>
                    }.into_view()
                } else {
                    view! {
                        <p class="text-gray-400 text-sm">
                            "Log in to fetch quotes reserved for members."
                        </p>
                    }.into_view()
                }
            }}
        </section>
    }
}
