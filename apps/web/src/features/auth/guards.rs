use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use roster::{routes::guard, Route};

/// Redirects away from `route` when the visitor may not see it.
#[component]
pub fn RequireAuth(route: Route, children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(redirect) = guard(route, auth.is_authenticated.get()) {
            // UX-only guard; the API still authorizes every request.
            navigate(
                redirect.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { {children()} }
}
