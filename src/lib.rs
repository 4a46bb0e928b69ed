// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Campus-Console: session client for the role-segmented admin console
//!
//! This crate drives the client side of the console's login → session →
//! logout lifecycle (token normalization, profile adaptation, session
//! stores, post-auth navigation) and wraps the backend's resource
//! endpoints in typed, declarative clients.

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod routes;
pub mod services;
pub mod state;
pub mod token;

pub use error::{AppError, Result};
pub use state::SessionContext;
