//! Static route table for the navigation shell.
//!
//! Paths map to page routes; anything unregistered resolves to
//! [`Route::NotFound`] through the catch-all entry. There are no redirects
//! or guards.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Pattern of the catch-all route
pub const CATCH_ALL: &str = "*";

/// Pages reachable from the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Task,
    Work,
    Setting,
    SvgEditor,
    Relax,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Task,
        Route::Work,
        Route::Setting,
        Route::SvgEditor,
        Route::Relax,
        Route::NotFound,
    ];

    /// Canonical path of the route (the catch-all pattern for NotFound)
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Task => "/task",
            Self::Work => "/work",
            Self::Setting => "/setting",
            Self::SvgEditor => "/svg-editor",
            Self::Relax => "/relax",
            Self::NotFound => CATCH_ALL,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Task => "Task",
            Self::Work => "Work",
            Self::Setting => "Setting",
            Self::SvgEditor => "SVG editor",
            Self::Relax => "Relax",
            Self::NotFound => "Not found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

static ROUTE_TABLE: Lazy<HashMap<&'static str, Route>> = Lazy::new(|| {
    Route::ALL
        .iter()
        .filter(|route| **route != Route::NotFound)
        .map(|route| (route.path(), *route))
        .collect()
});

/// Entries rendered in the sidebar body, in display order
pub const SIDEBAR_MENU: [Route; 5] = [Route::Home, Route::Task, Route::Work, Route::SvgEditor, Route::Relax];

/// Entries rendered in the sidebar footer
pub const SIDEBAR_FOOTER: [Route; 1] = [Route::Setting];

/// Normalize a user-supplied path
///
/// Relative paths ("relax") gain a leading slash, query strings and fragments
/// are dropped, and trailing slashes are removed everywhere except the root.
#[must_use]
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let without_suffix = trimmed.split(['?', '#']).next().unwrap_or_default();

    let mut normalized = if without_suffix.starts_with('/') {
        without_suffix.to_string()
    } else {
        format!("/{without_suffix}")
    };

    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Resolve a path against the route table
#[must_use]
pub fn resolve(path: &str) -> Route {
    let normalized = normalize(path);
    ROUTE_TABLE.get(normalized.as_str()).copied().unwrap_or(Route::NotFound)
}

/// Registered paths, excluding the catch-all
pub fn registered_paths() -> impl Iterator<Item = &'static str> {
    Route::ALL
        .iter()
        .filter(|route| **route != Route::NotFound)
        .map(|route| route.path())
}
