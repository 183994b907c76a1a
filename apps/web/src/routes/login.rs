use crate::components::{Alert, AlertKind, AuthCard, Button, TextField};
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};
use roster::validation::{FieldErrors, LoginForm};
use roster::{LoginCredentials, Outcome};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let login_action = Action::new_local(move |credentials: &LoginCredentials| {
        let credentials = credentials.clone();
        async move { auth.login(credentials).await }
    });

    Effect::new(move |_| {
        if let Some(Outcome::Navigate(route)) = login_action.value().get() {
            navigate(route.path(), Default::default());
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        match form.validate() {
            Ok(credentials) => {
                errors.set(FieldErrors::default());
                login_action.dispatch(credentials);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let busy = Signal::derive(move || auth.loading.get());

    view! {
        <AuthCard title="Sign in" subtitle="Access the user directory">
            <form novalidate on:submit=on_submit>
                {move || {
                    auth.error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mb-5">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="name@example.com"
                    autocomplete="email"
                    value=email
                    error=Signal::derive(move || errors.with(|e| e.email.clone()))
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                    error=Signal::derive(move || errors.with(|e| e.password.clone()))
                />
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </Button>
                <p class="mt-5 text-center text-sm text-gray-500 dark:text-gray-400">
                    "Don't have an account? "
                    <A
                        href=roster::Route::REGISTER
                        {..}
                        class="font-medium text-blue-600 hover:underline dark:text-blue-400"
                    >
                        "Register"
                    </A>
                </p>
            </form>
        </AuthCard>
    }
}
