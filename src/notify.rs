// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User-feedback port. Fire-and-forget; nothing reads a result back.

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, title: &str, description: &str);
}

/// Notifier that writes through the log; stands in for a toast layer.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&self, title: &str, description: &str) {
        tracing::info!(title = %title, description = %description, "notification");
    }
}
