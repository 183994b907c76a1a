//! Shared Tailwind class constants for the dashboard table so rows, headers and
//! badges stay visually consistent.

use roster::UserStatus;

pub struct Theme;

impl Theme {
    pub const TABLE_HEAD: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    pub const ROW: &'static str = "hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors";

    pub const CELL: &'static str = "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";

    pub const CELL_STRONG: &'static str = "px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white";

    /// Round avatar frame shared by images and the initial fallback.
    pub const AVATAR: &'static str = "flex h-9 w-9 shrink-0 items-center justify-center overflow-hidden rounded-full bg-blue-100 text-sm font-semibold text-blue-700 dark:bg-blue-900/50 dark:text-blue-200";

    /// Colored dot shown next to a status label.
    pub fn status_dot(status: UserStatus) -> &'static str {
        match status {
            UserStatus::Active => "h-2.5 w-2.5 rounded-full bg-emerald-500",
            UserStatus::Inactive => "h-2.5 w-2.5 rounded-full bg-gray-400",
            UserStatus::Suspended => "h-2.5 w-2.5 rounded-full bg-red-500",
            UserStatus::Unknown => "h-2.5 w-2.5 rounded-full bg-amber-400",
        }
    }
}
