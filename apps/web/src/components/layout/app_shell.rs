//! Shared layout wrapper with the header and content container. The header
//! shows who is signed in and owns the logout control; routes only supply the
//! page body.

use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let is_authenticated = auth.is_authenticated;
    let user = Memo::new(move |_| auth.session.with(|session| session.user.clone()));

    let on_logout = move |_| {
        let next = auth.logout();
        navigate(next.path(), Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="bg-white border-b border-gray-200 dark:bg-gray-800 dark:border-gray-700">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/dashboard" {..} class="flex items-center space-x-3">
                        <span class="text-xl font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Roster"
                        </span>
                    </A>
                    <Show when=move || is_authenticated.get()>
                        <div class="flex items-center gap-4">
                            {move || {
                                user.get()
                                    .map(|user| {
                                        view! {
                                            <div class="flex items-center gap-2">
                                                <span class="flex h-8 w-8 items-center justify-center rounded-full bg-blue-600 text-sm font-semibold text-white">
                                                    {user.initial().to_string()}
                                                </span>
                                                <span class="hidden sm:inline text-sm font-medium text-gray-900 dark:text-white">
                                                    {user.display_name().to_string()}
                                                </span>
                                            </div>
                                        }
                                    })
                            }}
                            <button
                                type="button"
                                class="py-2 px-3 text-sm font-medium text-gray-900 rounded-lg hover:bg-gray-100 dark:text-white dark:hover:bg-gray-700"
                                on:click=on_logout.clone()
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
