//! Navigation Component
//!
//! Header bar with logo and brand.

use leptos::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 max-w-2xl">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"💬"</span>
                        <span class="text-xl font-bold text-white">"Quoteboard"</span>
                    </div>

                    <span class="text-sm text-gray-400">"Quotes, public and protected"</span>
                </div>
            </div>
        </nav>
    }
}
