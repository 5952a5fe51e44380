//! Quote Card Component
//!
//! Public quote display with a fetch button. Available logged in or out.

use leptos::*;

use crate::app::Store;
use crate::state::session::Msg;

/// Public quote section
#[component]
pub fn QuoteCard() -> impl IntoView {
    let store = use_context::<Store>().expect("Store not found");
    let state = store.state;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Random Quote"</h2>
                <button
                    on:click=move |_| store.dispatch(Msg::RequestPublicQuote)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "New Quote"
                </button>
            </div>

            {move || {
                let quote = state.get().quote;
                if quote.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No quote fetched yet."</p>
                    }.into_view()
                } else {
                    view! {
                        <blockquote class="text-gray-300 italic border-l-4 border-gray-600 pl-4">
                            {quote}
                        </blockquote>
                    }.into_view()
                }
            }}
        </section>
    }
}
