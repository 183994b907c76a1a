//! Auth session state and context for the frontend. The provider builds the
//! single `SessionStore` for the running app, hydrated synchronously from
//! local storage, and mirrors every store change into signals that guards and
//! routes read. Tokens stay in storage and in the store; nothing here logs
//! them.

use crate::app_lib::{config::AppConfig, storage::BrowserStorage};
use leptos::prelude::*;
use roster::session::AUTH_REQUIRED_MESSAGE;
use roster::{
    HttpClient, LoginCredentials, Outcome, RegisterData, Route, Session, SessionStore, Snapshot,
    User,
};
use std::rc::Rc;

pub type BrowserSessionStore = SessionStore<BrowserStorage, HttpClient<BrowserStorage>>;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    store: StoredValue<Option<Rc<BrowserSessionStore>>, LocalStorage>,
    pub session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
    /// True while a login or registration request is outstanding.
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Builds a context around `store`, or a context that can only report
    /// `setup_error` when the store could not be created.
    fn new(store: Option<Rc<BrowserSessionStore>>, setup_error: Option<String>) -> Self {
        let snapshot = store
            .as_ref()
            .map(|store| store.snapshot())
            .unwrap_or_default();
        let session = RwSignal::new(snapshot.session);
        let loading = RwSignal::new(snapshot.loading);
        let error = RwSignal::new(setup_error.or(snapshot.last_error));
        let is_authenticated = Signal::derive(move || session.with(|s| s.is_authenticated));

        if let Some(store) = &store {
            store.subscribe(move |snapshot: &Snapshot| {
                session.set(snapshot.session.clone());
                loading.set(snapshot.loading);
                error.set(snapshot.last_error.clone());
            });
        }

        Self {
            store: StoredValue::new_local(store),
            session,
            is_authenticated,
            loading,
            error,
        }
    }

    fn unavailable(&self) -> Outcome {
        let message = self
            .error
            .get_untracked()
            .unwrap_or_else(|| "Sign-in is unavailable.".to_string());
        Outcome::Failed(message)
    }

    pub async fn login(self, credentials: LoginCredentials) -> Outcome {
        match self.store.get_value() {
            Some(store) => store.login(&credentials).await,
            None => self.unavailable(),
        }
    }

    pub async fn register(self, data: RegisterData) -> Outcome {
        match self.store.get_value() {
            Some(store) => store.register(&data).await,
            None => self.unavailable(),
        }
    }

    /// Clears the session and returns where to navigate next.
    pub fn logout(self) -> Route {
        match self.store.get_value() {
            Some(store) => store.logout(),
            None => {
                self.session.set(Session::default());
                Route::Login
            }
        }
    }

    /// Fetches the user list with the current credential.
    pub async fn fetch_users(self) -> Result<Vec<User>, String> {
        match self.store.get_value() {
            Some(store) => store.fetch_users().await,
            None => Err(AUTH_REQUIRED_MESSAGE.to_string()),
        }
    }
}

fn build_store(config: &AppConfig) -> roster::Result<BrowserSessionStore> {
    let client_config = config.client_config()?;
    let key = client_config.storage_key().to_string();
    let storage = BrowserStorage::local();
    let client = HttpClient::new(client_config, storage.clone())?;
    Ok(SessionStore::initialize(storage, client, &key))
}

/// Creates the app's session store and provides it as context.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = AppConfig::load();
    let auth = match build_store(&config) {
        Ok(store) => AuthContext::new(Some(Rc::new(store)), None),
        Err(err) => {
            tracing::error!(error = %err, "session store unavailable");
            AuthContext::new(None, Some(err.to_string()))
        }
    };
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(None, None))
}
