//! Auth feature module: the session context and the route guard. It keeps
//! authentication logic out of the views and must avoid logging credentials.
//!
//! Flow Overview: login and registration validate locally, then call the
//! session store, which persists the session and tells the view to navigate to
//! the dashboard. Logout clears storage and returns to the login page.

mod guards;
pub(crate) mod state;

pub(crate) use guards::RequireAuth;
