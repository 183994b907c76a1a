//! Build metadata shown in the dashboard footer.

pub fn git_commit_hash() -> &'static str {
    match option_env!("ROSTER_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// `v<version> (<sha>)`, e.g. `v0.1.0 (3f2a9c1)`.
pub fn build_label() -> String {
    format!("v{} ({})", env!("CARGO_PKG_VERSION"), git_commit_hash())
}
