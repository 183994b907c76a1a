//! User directory dashboard. The list is fetched once on mount with the
//! persisted credential, then searched and paginated locally by
//! `roster::directory::Listing`.

use crate::app_lib::{build_info, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner};
use crate::features::auth::{state::use_auth, RequireAuth};
use leptos::prelude::*;
use roster::directory::{format_created, Listing, Row};
use roster::session::AUTH_REQUIRED_MESSAGE;
use roster::{Route, User};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let listing = RwSignal::new(Listing::default());

    let users = LocalResource::new(move || async move { auth.fetch_users().await });

    Effect::new(move |_| {
        if let Some(Ok(list)) = users.get() {
            tracing::debug!(count = list.len(), "user list loaded");
            listing.update(|listing| listing.set_users(list));
        }
    });

    view! {
        <RequireAuth route=Route::Dashboard>
            <AppShell>
                <div class="space-y-6">
                    <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                        <div class="space-y-1">
                            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                "Users"
                            </h1>
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Everyone registered with the service."
                            </p>
                        </div>
                        <input
                            type="search"
                            class="bg-white border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full sm:w-72 p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                            placeholder="Search by name, email or role"
                            aria-label="Search users"
                            prop:value=move || listing.with(|listing| listing.search().to_string())
                            on:input=move |event| {
                                let term = event_target_value(&event);
                                listing.update(|listing| listing.set_search(&term));
                            }
                        />
                    </div>

                    {move || match users.get() {
                        None => view! {
                            <div class="flex justify-center py-12">
                                <Spinner label="Loading users" />
                            </div>
                        }.into_any(),
                        Some(Err(message)) => {
                            let kind = if message == AUTH_REQUIRED_MESSAGE {
                                AlertKind::Warning
                            } else {
                                AlertKind::Error
                            };
                            view! { <Alert kind=kind message=message /> }.into_any()
                        }
                        Some(Ok(_)) => view! { <UserTable listing=listing /> }.into_any(),
                    }}

                    <footer class="pt-4 text-xs text-gray-400 dark:text-gray-500">
                        "Roster " {build_info::build_label()}
                    </footer>
                </div>
            </AppShell>
        </RequireAuth>
    }
}

#[component]
fn UserTable(listing: RwSignal<Listing>) -> impl IntoView {
    let is_empty = move || listing.with(|listing| listing.filtered_len() == 0);

    view! {
        <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class=Theme::TABLE_HEAD>"#"</th>
                        <th scope="col" class=Theme::TABLE_HEAD><span class="sr-only">"Avatar"</span></th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Name"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Email"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Created"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Role"</th>
                        <th scope="col" class=Theme::TABLE_HEAD>"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    <For
                        each=move || listing.with(Listing::rows)
                        key=|row| (row.number, row.user.id.clone())
                        children=|row| view! { <UserRow row=row /> }
                    />
                    <Show when=is_empty>
                        <tr>
                            <td colspan="7" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                "No users found matching your search criteria."
                            </td>
                        </tr>
                    </Show>
                </tbody>
            </table>
        </div>
        <Show when=move || !is_empty()>
            <PaginationBar listing=listing />
        </Show>
    }
}

#[component]
fn UserRow(row: Row) -> impl IntoView {
    let Row { number, user } = row;
    let status = user.status_or_default();
    let created = format_created(user.created_at.as_deref());

    view! {
        <tr class=Theme::ROW>
            <td class=Theme::CELL>{number}</td>
            <td class="px-6 py-4">
                <Avatar user=user.clone() />
            </td>
            <td class=Theme::CELL_STRONG>{user.display_name().to_string()}</td>
            <td class=Theme::CELL>{user.email.clone()}</td>
            <td class=Theme::CELL>{created}</td>
            <td class=Theme::CELL>{user.role_label().to_string()}</td>
            <td class=Theme::CELL>
                <span class="inline-flex items-center gap-2">
                    <span class=Theme::status_dot(status)></span>
                    {status.label()}
                </span>
            </td>
        </tr>
    }
}

#[component]
fn Avatar(user: User) -> impl IntoView {
    match user.avatar.as_deref().filter(|src| !src.trim().is_empty()) {
        Some(src) => view! {
            <img class=Theme::AVATAR src=src.to_string() alt=user.display_name().to_string() />
        }
        .into_any(),
        None => view! {
            <span class=Theme::AVATAR aria-hidden="true">{user.initial().to_string()}</span>
        }
        .into_any(),
    }
}

#[component]
fn PaginationBar(listing: RwSignal<Listing>) -> impl IntoView {
    let pagination = Memo::new(move |_| listing.with(Listing::pagination));

    view! {
        <nav
            class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between"
            aria-label="Pagination"
        >
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {move || pagination.get().summary().unwrap_or_default()}
            </p>
            <div class="flex items-center gap-1">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || !pagination.get().has_previous())
                    on_click=Callback::new(move |()| listing.update(Listing::previous_page))
                >
                    "Previous"
                </Button>
                {move || {
                    let current = pagination.get().page();
                    (1..=pagination.get().total_pages())
                        .map(|page| {
                            let variant = if page == current {
                                ButtonVariant::Current
                            } else {
                                ButtonVariant::Secondary
                            };
                            view! {
                                <Button
                                    variant=variant
                                    on_click=Callback::new(move |()| {
                                        listing.update(|listing| listing.go_to_page(page));
                                    })
                                >
                                    {page}
                                </Button>
                            }
                        })
                        .collect_view()
                }}
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || !pagination.get().has_next())
                    on_click=Callback::new(move |()| listing.update(Listing::next_page))
                >
                    "Next"
                </Button>
            </div>
        </nav>
    }
}
