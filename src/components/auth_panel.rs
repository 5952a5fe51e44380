//! Auth Panel Component
//!
//! Credentials form while logged out, greeting with log-out while logged in.
//! The error alert only ever shows authentication failures.

use leptos::*;

use crate::app::Store;
use crate::state::session::Msg;

/// Auth section: form or greeting, depending on session state
#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_context::<Store>().expect("Store not found");
    let state = store.state;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            {move || {
                if state.get().logged_in() {
                    view! { <Greeting /> }.into_view()
                } else {
                    view! { <CredentialsForm /> }.into_view()
                }
            }}
        </section>
    }
}

/// Greeting shown to an authenticated user
#[component]
fn Greeting() -> impl IntoView {
    let store = use_context::<Store>().expect("Store not found");
    let state = store.state;

    view! {
        <div class="flex items-center justify-between">
            <div>
                <h2 class="text-xl font-semibold">
                    {move || format!("Hello, {}!", state.get().username)}
                </h2>
                <p class="text-sm text-gray-400 mt-1">"You have super-secret access to protected quotes."</p>
            </div>
            <button
                on:click=move |_| store.dispatch(Msg::LogOut)
                class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
            >
                "Log Out"
            </button>
        </div>
    }
}

/// Username/password form with login and register actions
#[component]
fn CredentialsForm() -> impl IntoView {
    let store = use_context::<Store>().expect("Store not found");
    let state = store.state;

    view! {
        <div class="space-y-4">
            <div>
                <h2 class="text-xl font-semibold">"Log In or Register"</h2>
                <p class="text-sm text-gray-400 mt-1">
                    "An account unlocks the protected quote feed."
                </p>
            </div>

            <ErrorAlert />

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                <input
                    type="text"
                    prop:value=move || state.get().username
                    on:input=move |ev| store.dispatch(Msg::SetUsername(event_target_value(&ev)))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                <input
                    type="password"
                    prop:value=move || state.get().password
                    on:input=move |ev| store.dispatch(Msg::SetPassword(event_target_value(&ev)))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="flex space-x-2">
                <button
                    on:click=move |_| store.dispatch(Msg::SubmitLogin)
                    class="flex-1 bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Log In"
                </button>
                <button
                    on:click=move |_| store.dispatch(Msg::SubmitRegister)
                    class="flex-1 bg-gray-600 hover:bg-gray-500 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Register"
                </button>
            </div>
        </div>
    }
}

/// Alert panel, visible only while an auth error is set
#[component]
fn ErrorAlert() -> impl IntoView {
    let store = use_context::<Store>().expect("Store not found");
    let state = store.state;

    view! {
        {move || {
            let msg = state.get().error_msg;
            if msg.is_empty() {
                view! {}.into_view()
            } else {
                view! {
                    <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg">
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                }.into_view()
            }
        }}
    }
}
