// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Campus-Console smoke client
//!
//! Logs into the console backend with credentials from the environment,
//! reports the granted session and visible menu, and logs back out. Wires
//! the same composition the UI shell uses.

use campus_console::{
    config::Config,
    models::{Credentials, LoginLogQuery, Role, SessionDefaults},
    navigation::{HistoryNavigator, Navigator},
    notify::LogNotifier,
    routes,
    services::{ApiClient, AuthApi, SessionController, SystemApi},
    state::SessionContext,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(api = %config.api_base_url, "Starting Campus-Console smoke client");

    // One session context per process, shared by reference everywhere
    let session = Arc::new(SessionContext::new());
    let api = ApiClient::new(config.api_base_url.clone(), session.clone());

    let navigator = Arc::new(HistoryNavigator::new());
    let controller = SessionController::new(
        Arc::new(AuthApi::new(api.clone())),
        navigator.clone(),
        Arc::new(LogNotifier),
        session.clone(),
        SessionDefaults {
            avatar: config.default_avatar.clone(),
            home_path: config.default_home_path.clone(),
        },
    );

    let credentials = credentials_from_env()?;
    let outcome = controller.login(credentials, None).await?;

    let Some(user_info) = outcome.user_info else {
        tracing::warn!("Backend accepted the login but issued no session");
        return Ok(());
    };

    tracing::info!(
        user_id = %user_info.user_id,
        real_name = %user_info.real_name,
        roles = ?user_info.roles,
        landed_on = %navigator.current_full_path(),
        "Session established"
    );

    for entry in routes::menu(&session.access.access_codes()) {
        let children: Vec<&str> = entry.children.iter().map(|c| c.title).collect();
        tracing::info!(section = %entry.route.title, entries = ?children, "Visible menu");
    }

    // Admins can read the audit trail; show the most recent page
    if session.access.access_codes().iter().any(|c| c == "ADMIN") {
        let system = SystemApi::new(api.clone());
        let query = LoginLogQuery {
            page: Some(1),
            size: Some(10),
            ..Default::default()
        };
        match system.login_logs(&query).await {
            Ok(page) => tracing::info!(
                total = page.total,
                shown = page.records.len(),
                "Recent login activity"
            ),
            Err(error) => tracing::warn!(error = %error, "Could not fetch login logs"),
        }
    }

    controller.logout(false).await;
    tracing::info!(landed_on = %navigator.current_full_path(), "Logged out");

    Ok(())
}

/// Read login credentials from the environment. Anything unset stays
/// blank and gets the controller's defaults.
fn credentials_from_env() -> anyhow::Result<Credentials> {
    let role = match std::env::var("CONSOLE_ROLE") {
        Ok(value) => Some(
            value
                .parse::<Role>()
                .map_err(|e| anyhow::anyhow!("CONSOLE_ROLE: {e}"))?,
        ),
        Err(_) => None,
    };

    Ok(Credentials {
        username: std::env::var("CONSOLE_USERNAME").ok(),
        password: std::env::var("CONSOLE_PASSWORD").ok(),
        role,
    })
}

/// Initialize logging with env-filter overrides.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("campus_console=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
