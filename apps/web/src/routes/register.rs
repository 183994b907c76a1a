//! Account registration. The form validates locally before anything is sent;
//! a successful registration signs the new user in and opens the dashboard.

use crate::components::{Alert, AlertKind, AuthCard, Button, TextField};
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};
use roster::validation::{FieldErrors, RegisterForm};
use roster::{Outcome, RegisterData};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let register_action = Action::new_local(move |data: &RegisterData| {
        let data = data.clone();
        async move { auth.register(data).await }
    });

    Effect::new(move |_| {
        if let Some(Outcome::Navigate(route)) = register_action.value().get() {
            navigate(route.path(), Default::default());
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            date_of_birth: date_of_birth.get_untracked(),
        };
        match form.validate() {
            Ok(data) => {
                errors.set(FieldErrors::default());
                register_action.dispatch(data);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let busy = Signal::derive(move || auth.loading.get());

    view! {
        <AuthCard title="Create an account" subtitle="Register to manage the user directory">
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
                    id="name"
                    label="Full name"
                    placeholder="Ada Lovelace"
                    autocomplete="name"
                    value=name
                    error=Signal::derive(move || errors.with(|e| e.name.clone()))
                />
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
                    id="date-of-birth"
                    label="Date of birth"
                    input_type="date"
                    autocomplete="bday"
                    value=date_of_birth
                    error=Signal::derive(move || errors.with(|e| e.date_of_birth.clone()))
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value=password
                    error=Signal::derive(move || errors.with(|e| e.password.clone()))
                />
                <Button button_type="submit" disabled=busy>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </Button>
                <p class="mt-5 text-center text-sm text-gray-500 dark:text-gray-400">
                    "Already have an account? "
                    <A
                        href=roster::Route::LOGIN
                        {..}
                        class="font-medium text-blue-600 hover:underline dark:text-blue-400"
                    >
                        "Login"
                    </A>
                </p>
            </form>
        </AuthCard>
    }
}
