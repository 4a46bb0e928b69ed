// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Declarative route table for the console shell.
//!
//! Plain data: paths, menu metadata, and per-route authority lists. The
//! only logic here derives the visible menu for a set of access codes.

/// Route users are sent to for (re-)authentication.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// One console route with its menu metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDef {
    pub name: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub icon: Option<&'static str>,
    /// Menu position; lower sorts first
    pub order: i32,
    pub hide_in_menu: bool,
    /// Access codes allowed to see this route; empty means everyone
    pub authority: &'static [&'static str],
    pub children: &'static [RouteDef],
}

impl RouteDef {
    /// Whether a session holding `access_codes` may see this route.
    pub fn is_authorized(&self, access_codes: &[String]) -> bool {
        self.authority.is_empty()
            || self
                .authority
                .iter()
                .any(|required| access_codes.iter().any(|code| code == required))
    }
}

/// Top-level console routes.
pub const CONSOLE_ROUTES: &[RouteDef] = &[
    RouteDef {
        name: "Dashboard",
        path: "/dashboard",
        title: "Dashboard",
        icon: None,
        order: 999,
        hide_in_menu: true,
        authority: &[],
        children: &[RouteDef {
            name: "Analytics",
            path: "/analytics",
            title: "Analytics",
            icon: None,
            order: 0,
            hide_in_menu: true,
            authority: &[],
            children: &[],
        }],
    },
    RouteDef {
        name: "System",
        path: "/system",
        title: "System Management",
        icon: Some("carbon:user-multiple"),
        order: 10,
        hide_in_menu: false,
        authority: &["ADMIN", "TEACHER"],
        children: &[
            RouteDef {
                name: "SystemStudent",
                path: "/system/students",
                title: "Students",
                icon: None,
                order: 0,
                hide_in_menu: false,
                authority: &["ADMIN", "TEACHER"],
                children: &[],
            },
            RouteDef {
                name: "SystemTeacher",
                path: "/system/teachers",
                title: "Teachers",
                icon: None,
                order: 1,
                hide_in_menu: false,
                authority: &["ADMIN"],
                children: &[],
            },
            RouteDef {
                name: "SystemAdmin",
                path: "/system/admins",
                title: "Administrators",
                icon: None,
                order: 2,
                hide_in_menu: false,
                authority: &["ADMIN"],
                children: &[],
            },
            RouteDef {
                name: "SystemLoginLog",
                path: "/system/login-logs",
                title: "Login Logs",
                icon: None,
                order: 3,
                hide_in_menu: false,
                authority: &["ADMIN"],
                children: &[],
            },
        ],
    },
];

/// A menu section: one visible top-level route and its visible children.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub route: &'static RouteDef,
    pub children: Vec<&'static RouteDef>,
}

/// Derive the menu visible to a session holding `access_codes`,
/// authority-filtered and sorted by order.
pub fn menu(access_codes: &[String]) -> Vec<MenuEntry> {
    let mut entries: Vec<MenuEntry> = CONSOLE_ROUTES
        .iter()
        .filter(|route| !route.hide_in_menu && route.is_authorized(access_codes))
        .map(|route| MenuEntry {
            route,
            children: route
                .children
                .iter()
                .filter(|child| !child.hide_in_menu && child.is_authorized(access_codes))
                .collect(),
        })
        .collect();

    entries.sort_by_key(|entry| entry.route.order);
    entries
}
