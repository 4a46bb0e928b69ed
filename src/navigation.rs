// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation port for post-auth routing.
//!
//! The session controller never talks to a real routing stack; it drives
//! this trait, and the embedding shell decides what navigation means.

use parking_lot::RwLock;

/// Routing operations the session controller needs.
///
/// Query values are attached verbatim; callers percent-encode them first.
pub trait Navigator: Send + Sync {
    /// Push a new entry for `path`.
    fn go_to(&self, path: &str, query: &[(String, String)]);

    /// Replace the current entry with `path`.
    fn replace(&self, path: &str, query: &[(String, String)]);

    /// The currently active full path, including its query string.
    fn current_full_path(&self) -> String;
}

/// In-memory history stack, used by the smoke binary and tests.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    stack: RwLock<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every entry ever visited, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.stack.read().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn go_to(&self, path: &str, query: &[(String, String)]) {
        self.stack.write().push(full_path(path, query));
    }

    fn replace(&self, path: &str, query: &[(String, String)]) {
        let mut stack = self.stack.write();
        stack.pop();
        stack.push(full_path(path, query));
    }

    fn current_full_path(&self) -> String {
        self.stack.read().last().cloned().unwrap_or_else(|| "/".to_string())
    }
}

fn full_path(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let joined = query
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{joined}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let nav = HistoryNavigator::new();
        assert_eq!(nav.current_full_path(), "/");
    }

    #[test]
    fn test_go_to_pushes_entries() {
        let nav = HistoryNavigator::new();
        nav.go_to("/analytics", &[]);
        nav.go_to("/system/students", &[("page".to_string(), "2".to_string())]);

        assert_eq!(nav.current_full_path(), "/system/students?page=2");
        assert_eq!(nav.entries().len(), 2);
    }

    #[test]
    fn test_replace_swaps_current_entry() {
        let nav = HistoryNavigator::new();
        nav.go_to("/analytics", &[]);
        nav.replace("/auth/login", &[]);

        assert_eq!(nav.current_full_path(), "/auth/login");
        assert_eq!(nav.entries().len(), 1);
    }
}
