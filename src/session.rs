//! Session store: the single writer of authentication state. It hydrates from
//! storage once, replaces the session wholesale on login or registration, and
//! writes every change through to storage before exposing it.
//!
//! Views observe the store through `subscribe`, which delivers a `Snapshot`
//! after every change. The store is single-threaded; no `RefCell` borrow is
//! held across an `.await`.

use crate::{
    api::UserService,
    routes::Route,
    storage::{self, KeyValueStore},
    types::{ApiResponse, LoginCredentials, RegisterData, Session, User},
};
use std::cell::RefCell;
use tracing::{info, warn};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
pub const SAVE_FAILED_MESSAGE: &str = "Unable to save session.";
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

/// Result of a login or registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The attempt succeeded; the caller should navigate to this route.
    Navigate(Route),
    /// The attempt failed with a message fit for display.
    Failed(String),
}

/// Observable state of the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub session: Session,
    /// True exactly while a login or registration request is outstanding.
    pub loading: bool,
    pub last_error: Option<String>,
}

type Listener = Box<dyn Fn(&Snapshot)>;

pub struct SessionStore<S, A> {
    storage: S,
    service: A,
    key: String,
    state: RefCell<Snapshot>,
    listeners: RefCell<Vec<Listener>>,
}

impl<S: KeyValueStore, A: UserService> SessionStore<S, A> {
    /// Hydrates the store from `storage[key]`. Missing, unreadable or corrupt
    /// data yields the empty session; this never fails.
    pub fn initialize(storage: S, service: A, key: &str) -> Self {
        let session = storage::load_session(&storage, key);
        if session.is_authenticated {
            info!("restored persisted session");
        }

        Self {
            storage,
            service,
            key: key.to_string(),
            state: RefCell::new(Snapshot {
                session,
                ..Snapshot::default()
            }),
            listeners: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.state.borrow().session.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().session.is_authenticated
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.borrow().session.token.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    /// The service used for authentication, shared with views that list users.
    pub fn service(&self) -> &A {
        &self.service
    }

    /// Registers a callback run after every state change. Listeners must not
    /// call `subscribe` themselves.
    pub fn subscribe(&self, listener: impl Fn(&Snapshot) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Outcome {
        self.begin_attempt();
        let response = self.service.login(credentials).await;
        self.finish_attempt(response, LOGIN_FAILED_MESSAGE)
    }

    pub async fn register(&self, data: &RegisterData) -> Outcome {
        self.begin_attempt();
        let response = self.service.register(data).await;
        self.finish_attempt(response, REGISTRATION_FAILED_MESSAGE)
    }

    /// Loads the user list for the dashboard. Nothing is sent without a
    /// session; a response without `users` counts as a failure.
    ///
    /// # Errors
    /// Returns the message to display when signed out or when the service
    /// reports a failure.
    pub async fn fetch_users(&self) -> Result<Vec<User>, String> {
        if !self.is_authenticated() {
            return Err(AUTH_REQUIRED_MESSAGE.to_string());
        }
        match self.service.fetch_users().await {
            ApiResponse {
                success: true,
                users: Some(users),
                ..
            } => Ok(users),
            other => {
                let message = other.message_or(FETCH_FAILED_MESSAGE);
                warn!(%message, "user list request failed");
                Err(message)
            }
        }
    }

    /// Clears the session in memory and in storage. Always succeeds; storage
    /// errors are logged.
    pub fn logout(&self) -> Route {
        if let Err(err) = self.storage.remove(&self.key) {
            warn!(error = %err, "failed to remove persisted session");
        }
        self.update(|state| {
            state.session = Session::default();
            state.last_error = None;
        });
        info!("signed out");
        Route::Login
    }

    fn begin_attempt(&self) {
        self.update(|state| {
            state.loading = true;
            state.last_error = None;
        });
    }

    fn finish_attempt(&self, response: ApiResponse, fallback: &str) -> Outcome {
        let session = match response {
            ApiResponse {
                success: true,
                user: Some(user),
                token: Some(token),
                ..
            } if !token.is_empty() => Session::authenticated(user, token),
            other => return self.fail(other.message_or(fallback)),
        };

        if let Err(err) = storage::write_session(&self.storage, &self.key, &session) {
            warn!(error = %err, "failed to persist session");
            return self.fail(SAVE_FAILED_MESSAGE.to_string());
        }

        info!("session established");
        self.update(|state| {
            state.session = session;
            state.loading = false;
        });
        Outcome::Navigate(Route::Dashboard)
    }

    fn fail(&self, message: String) -> Outcome {
        self.update(|state| {
            state.loading = false;
            state.last_error = Some(message.clone());
        });
        Outcome::Failed(message)
    }

    fn update(&self, mutate: impl FnOnce(&mut Snapshot)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{Error, Result},
        storage::MemoryStore,
        types::User,
    };
    use std::{cell::Cell, collections::VecDeque, rc::Rc};

    const KEY: &str = "authState";

    #[derive(Default)]
    struct FakeService {
        responses: RefCell<VecDeque<ApiResponse>>,
        calls: Cell<usize>,
    }

    impl FakeService {
        fn replying(response: ApiResponse) -> Self {
            let service = Self::default();
            service.responses.borrow_mut().push_back(response);
            service
        }

        fn next(&self) -> ApiResponse {
            self.calls.set(self.calls.get() + 1);
            self.responses.borrow_mut().pop_front().unwrap_or_default()
        }
    }

    impl UserService for FakeService {
        async fn fetch_users(&self) -> ApiResponse {
            self.next()
        }

        async fn login(&self, _credentials: &LoginCredentials) -> ApiResponse {
            self.next()
        }

        async fn register(&self, _data: &RegisterData) -> ApiResponse {
            self.next()
        }
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(Error::Storage("read only".to_string()))
        }
    }

    fn ada() -> User {
        User {
            id: "1".to_string(),
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            ..User::default()
        }
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        }
    }

    fn signed_in() -> MemoryStore {
        let session = Session::authenticated(ada(), "t".to_string());
        let raw = serde_json::to_string(&session).unwrap();
        MemoryStore::with_entry(KEY, &raw)
    }

    fn granted() -> ApiResponse {
        ApiResponse {
            success: true,
            user: Some(ada()),
            token: Some("t".to_string()),
            ..ApiResponse::default()
        }
    }

    #[test]
    fn initialize_adopts_persisted_session() {
        let session = Session::authenticated(ada(), "t".to_string());
        let raw = serde_json::to_string(&session).unwrap();
        let store = SessionStore::initialize(
            MemoryStore::with_entry(KEY, &raw),
            FakeService::default(),
            KEY,
        );
        assert_eq!(store.session(), session);
        assert!(store.is_authenticated());
        assert!(!store.is_loading());
    }

    #[test]
    fn initialize_falls_back_on_corrupt_data() {
        let store = SessionStore::initialize(
            MemoryStore::with_entry(KEY, "{\"user\":"),
            FakeService::default(),
            KEY,
        );
        assert_eq!(store.session(), Session::default());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn login_success_persists_and_navigates() {
        let storage = MemoryStore::new();
        let store =
            SessionStore::initialize(storage.clone(), FakeService::replying(granted()), KEY);

        let outcome = store.login(&credentials()).await;

        assert_eq!(outcome, Outcome::Navigate(Route::Dashboard));
        let expected = Session::authenticated(ada(), "t".to_string());
        assert_eq!(store.session(), expected);
        assert_eq!(store.token().as_deref(), Some("t"));
        assert_eq!(storage::read_session(&storage, KEY).unwrap(), Some(expected));
        assert_eq!(store.last_error(), None);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn login_failure_surfaces_message() {
        let storage = MemoryStore::new();
        let store = SessionStore::initialize(
            storage.clone(),
            FakeService::replying(ApiResponse::failure("bad creds")),
            KEY,
        );

        let outcome = store.login(&credentials()).await;

        assert_eq!(outcome, Outcome::Failed("bad creds".to_string()));
        assert_eq!(store.last_error().as_deref(), Some("bad creds"));
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn success_without_token_is_a_failure() {
        let response = ApiResponse {
            success: true,
            user: Some(ada()),
            ..ApiResponse::default()
        };
        let store =
            SessionStore::initialize(MemoryStore::new(), FakeService::replying(response), KEY);

        let outcome = store.register(&RegisterData {
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            date_of_birth: "1990-01-01".to_string(),
        })
        .await;

        assert_eq!(outcome, Outcome::Failed(REGISTRATION_FAILED_MESSAGE.to_string()));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn loading_is_set_only_while_request_is_outstanding() {
        let store = SessionStore::initialize(
            MemoryStore::new(),
            FakeService::replying(ApiResponse::failure("bad creds")),
            KEY,
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| {
            sink.borrow_mut()
                .push((snapshot.loading, snapshot.last_error.clone()));
        });

        store.login(&credentials()).await;
        store.service().responses.borrow_mut().push_back(granted());
        store.login(&credentials()).await;

        assert_eq!(
            *seen.borrow(),
            vec![
                (true, None),
                (false, Some("bad creds".to_string())),
                (true, None),
                (false, None),
            ]
        );
        assert_eq!(store.service().calls.get(), 2);
    }

    #[tokio::test]
    async fn storage_write_failure_keeps_session_empty() {
        let store = SessionStore::initialize(ReadOnlyStore, FakeService::replying(granted()), KEY);

        let outcome = store.login(&credentials()).await;

        assert_eq!(outcome, Outcome::Failed(SAVE_FAILED_MESSAGE.to_string()));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_memory_and_storage() {
        let storage = MemoryStore::new();
        let store =
            SessionStore::initialize(storage.clone(), FakeService::replying(granted()), KEY);
        store.login(&credentials()).await;
        assert!(!storage.is_empty());

        assert_eq!(store.logout(), Route::Login);
        assert_eq!(store.session(), Session::default());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn fetch_users_without_session_sends_nothing() {
        let store = SessionStore::initialize(MemoryStore::new(), FakeService::default(), KEY);

        let result = store.fetch_users().await;

        assert_eq!(result, Err(AUTH_REQUIRED_MESSAGE.to_string()));
        assert_eq!(store.service().calls.get(), 0);
    }

    #[tokio::test]
    async fn fetch_users_with_session_returns_list() {
        let listing = ApiResponse {
            success: true,
            users: Some(vec![ada()]),
            ..ApiResponse::default()
        };
        let store = SessionStore::initialize(signed_in(), FakeService::replying(listing), KEY);

        let result = store.fetch_users().await;

        assert_eq!(result, Ok(vec![ada()]));
        assert_eq!(store.service().calls.get(), 1);
    }

    #[tokio::test]
    async fn fetch_users_requires_a_user_list() {
        let bare = ApiResponse {
            success: true,
            ..ApiResponse::default()
        };
        let store = SessionStore::initialize(signed_in(), FakeService::replying(bare), KEY);
        assert_eq!(store.fetch_users().await, Err(FETCH_FAILED_MESSAGE.to_string()));

        store
            .service()
            .responses
            .borrow_mut()
            .push_back(ApiResponse::failure("Token expired"));
        assert_eq!(store.fetch_users().await, Err("Token expired".to_string()));
        assert_eq!(store.service().calls.get(), 2);
    }

    #[test]
    fn logout_without_session_still_succeeds() {
        let store = SessionStore::initialize(ReadOnlyStore, FakeService::default(), KEY);
        assert_eq!(store.logout(), Route::Login);
        assert!(!store.is_authenticated());
    }
}
