//! Application routes and the navigation guard. The guard is a UX convenience;
//! the remote service still enforces authorization on every request.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub const LOGIN: &'static str = "/login";
    pub const REGISTER: &'static str = "/register";
    pub const DASHBOARD: &'static str = "/dashboard";

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => Self::LOGIN,
            Route::Register => Self::REGISTER,
            Route::Dashboard => Self::DASHBOARD,
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            Self::LOGIN => Some(Route::Login),
            Self::REGISTER => Some(Route::Register),
            Self::DASHBOARD | "" => Some(Route::Dashboard),
            _ => None,
        }
    }

    #[must_use]
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Where to send a visitor instead of `target`, or `None` to let them through.
#[must_use]
pub fn guard(target: Route, is_authenticated: bool) -> Option<Route> {
    (target.requires_auth() && !is_authenticated).then_some(Route::Login)
}
