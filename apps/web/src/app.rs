//! Root component: the session context wraps the router so every route, the
//! guard included, reads the same store.

use crate::app_lib::build_info;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    tracing::info!(build = %build_info::build_label(), "starting roster console");

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
