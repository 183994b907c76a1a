use leptos::prelude::*;

/// Centered card used by the login and registration pages.
#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center bg-gray-50 px-4 dark:bg-gray-900">
            <div class="w-full max-w-md rounded-lg border border-gray-200 bg-white p-8 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                <div class="mb-6 space-y-1 text-center">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
