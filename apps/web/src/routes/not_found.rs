//! Fallback for paths outside the console. Signed-in visitors get the header so
//! they can still log out; everyone is pointed back at the directory.

use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use roster::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let (target, label) = if auth.is_authenticated.get_untracked() {
        (Route::DASHBOARD, "Back to users")
    } else {
        (Route::LOGIN, "Go to login")
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-md py-16 text-center space-y-4">
                <p class="text-sm font-semibold text-blue-600 dark:text-blue-400">"404"</p>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "There is nothing at this address"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Roster has no page at "
                    <code class="rounded bg-gray-100 px-1 dark:bg-gray-800">
                        {move || location.pathname.get()}
                    </code>
                    ". The user directory lives at "
                    <code class="rounded bg-gray-100 px-1 dark:bg-gray-800">{Route::DASHBOARD}</code>
                    "."
                </p>
                <A
                    href=target
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                >
                    {label}
                </A>
            </div>
        </AppShell>
    }
}
