//! Client-side listing of users for the dashboard: case-insensitive search,
//! fixed-size pagination and display formatting. Everything here works on an
//! in-memory list that was fetched once.

use crate::types::User;
use chrono::{DateTime, NaiveDate};
use std::ops::Range;

/// Rows per dashboard page.
pub const PAGE_SIZE: usize = 5;

/// `term` must already be lowercased. The empty term matches everything.
fn matches(user: &User, term: &str) -> bool {
    [user.display_name(), user.email.as_str(), user.role.as_deref().unwrap_or_default()]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Records whose name/username, email or role contains `term`, ignoring case.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let term = term.to_lowercase();
    users.iter().filter(|user| matches(user, &term)).collect()
}

/// Page cursor over `total_items`, always within `[1, max(total_pages, 1)]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pagination {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Updates the item count and pulls the page back in range if it shrank.
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.last_page());
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.last_page());
    }

    pub fn next(&mut self) {
        self.go_to(self.page.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Index range of the current page within the filtered items.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// `Showing X to Y of Z entries`, or `None` when there is nothing to show.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.total_items == 0 {
            return None;
        }
        let range = self.range();
        Some(format!(
            "Showing {} to {} of {} entries",
            range.start + 1,
            range.end,
            self.total_items
        ))
    }
}

/// A row on the current page, numbered from 1 across the filtered list.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub number: usize,
    pub user: User,
}

/// Fetched users plus the current search term and page.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    users: Vec<User>,
    term: String,
    filtered: Vec<usize>,
    pagination: Pagination,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Listing {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        let mut listing = Self {
            users,
            term: String::new(),
            filtered: Vec::new(),
            pagination: Pagination::new(PAGE_SIZE),
        };
        listing.refilter();
        listing
    }

    fn refilter(&mut self) {
        let term = self.term.to_lowercase();
        self.filtered = self
            .users
            .iter()
            .enumerate()
            .filter(|(_, user)| matches(user, &term))
            .map(|(index, _)| index)
            .collect();
        self.pagination.set_total(self.filtered.len());
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.refilter();
    }

    /// Replaces the search term and returns to the first page.
    pub fn set_search(&mut self, term: &str) {
        if self.term == term {
            return;
        }
        term.clone_into(&mut self.term);
        self.pagination.reset();
        self.refilter();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn next_page(&mut self) {
        self.pagination.next();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Rows of the current page, cloned for rendering.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let range = self.pagination.range();
        self.filtered
            .get(range.clone())
            .unwrap_or_default()
            .iter()
            .zip(range.start + 1..)
            .filter_map(|(&index, number)| {
                self.users.get(index).map(|user| Row {
                    number,
                    user: user.clone(),
                })
            })
            .collect()
    }
}

/// Creation date as `MM/DD/YYYY`; `N/A` when absent, the raw text when it is
/// not a recognizable date.
#[must_use]
pub fn format_created(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "N/A".to_string();
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%m/%d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%m/%d/%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, email: &str, role: Option<&str>) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.map(str::to_string),
            ..User::default()
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user("1", "Michael Holz", "michael@example.com", Some("Admin")),
            user("2", "Paula Wilson", "paula@example.com", Some("Publisher")),
            user("3", "Antonio Moreno", "antonio@example.com", Some("Publisher")),
            User {
                id: "4".to_string(),
                username: Some("mary_s".to_string()),
                email: "mary@corp.io".to_string(),
                ..User::default()
            },
        ]
    }

    #[test]
    fn empty_term_matches_everything() {
        let users = sample();
        assert_eq!(filter_users(&users, "").len(), users.len());
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let users = sample();
        let ids = |term: &str| -> Vec<String> {
            filter_users(&users, term)
                .into_iter()
                .map(|user| user.id.clone())
                .collect()
        };

        assert_eq!(ids("PUBLISHER"), vec!["2", "3"]);
        assert_eq!(ids("holz"), vec!["1"]);
        assert_eq!(ids("corp.IO"), vec!["4"]);
        assert_eq!(ids("MARY_S"), vec!["4"]);
        assert!(ids("nobody").is_empty());
    }

    #[test]
    fn total_pages_is_ceiling_of_items_over_page_size() {
        let mut pagination = Pagination::new(PAGE_SIZE);
        for (items, pages) in [(0, 0), (1, 1), (5, 1), (6, 2), (10, 2), (11, 3)] {
            pagination.set_total(items);
            assert_eq!(pagination.total_pages(), pages, "items = {items}");
        }
    }

    #[test]
    fn navigation_clamps_to_first_and_last_page() {
        let mut pagination = Pagination::new(PAGE_SIZE);
        pagination.set_total(12);

        for _ in 0..10 {
            pagination.next();
        }
        assert_eq!(pagination.page(), 3);
        assert!(!pagination.has_next());

        for _ in 0..10 {
            pagination.previous();
        }
        assert_eq!(pagination.page(), 1);
        assert!(!pagination.has_previous());

        pagination.go_to(99);
        assert_eq!(pagination.page(), 3);
        pagination.go_to(0);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn empty_list_stays_on_page_one() {
        let mut pagination = Pagination::new(PAGE_SIZE);
        pagination.next();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.range(), 0..0);
        assert_eq!(pagination.summary(), None);
    }

    #[test]
    fn last_page_range_and_summary() {
        let mut pagination = Pagination::new(PAGE_SIZE);
        pagination.set_total(12);
        pagination.go_to(3);
        assert_eq!(pagination.range(), 10..12);
        assert_eq!(
            pagination.summary().as_deref(),
            Some("Showing 11 to 12 of 12 entries")
        );
    }

    #[test]
    fn listing_rows_are_numbered_across_pages() {
        let users: Vec<User> = (1..=7)
            .map(|n| user(&n.to_string(), &format!("User {n}"), "u@example.com", None))
            .collect();
        let mut listing = Listing::new(users);

        assert_eq!(listing.rows().len(), 5);
        listing.next_page();
        let rows = listing.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 6);
        assert_eq!(rows[0].user.id, "6");
    }

    #[test]
    fn changing_search_returns_to_first_page() {
        let users: Vec<User> = (1..=12)
            .map(|n| user(&n.to_string(), &format!("User {n}"), "u@example.com", None))
            .collect();
        let mut listing = Listing::new(users);
        listing.go_to_page(3);
        assert_eq!(listing.pagination().page(), 3);

        listing.set_search("user 1");
        assert_eq!(listing.pagination().page(), 1);
        // "User 1", "User 10", "User 11", "User 12"
        assert_eq!(listing.filtered_len(), 4);
        assert_eq!(listing.rows().len(), 4);
    }

    #[test]
    fn shrinking_the_list_clamps_the_page() {
        let users: Vec<User> = (1..=12)
            .map(|n| user(&n.to_string(), &format!("User {n}"), "u@example.com", None))
            .collect();
        let mut listing = Listing::new(users.clone());
        listing.go_to_page(3);

        listing.set_users(users.into_iter().take(3).collect());
        assert_eq!(listing.pagination().page(), 1);
        assert_eq!(listing.rows().len(), 3);
    }

    #[test]
    fn format_created_handles_known_shapes() {
        assert_eq!(format_created(None), "N/A");
        assert_eq!(format_created(Some("  ")), "N/A");
        assert_eq!(
            format_created(Some("2014-05-08T10:20:30.000Z")),
            "05/08/2014"
        );
        assert_eq!(format_created(Some("2013-04-10")), "04/10/2013");
        assert_eq!(format_created(Some("last tuesday")), "last tuesday");
    }
}
