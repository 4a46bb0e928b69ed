// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logout tests: local teardown always wins, redirect parameter shape.

use std::sync::atomic::Ordering;

mod common;

#[tokio::test]
async fn test_logout_survives_backend_failure() {
    let h = common::harness();
    h.controller
        .login(common::student_credentials(), None)
        .await
        .expect("login should succeed");

    h.backend.sign_out_fails.store(true, Ordering::SeqCst);
    *h.navigator.current.lock() = "/system/students?page=2".to_string();

    h.controller.logout(true).await;

    assert_eq!(h.backend.sign_out_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.session.access.access_token(), "");
    assert!(h.session.access.access_codes().is_empty());
    assert!(h.session.user.user_info().is_none());

    // Prior full path rides along URL-encoded
    assert_eq!(
        h.events().last().unwrap(),
        "replace:/auth/login?redirect=%2Fsystem%2Fstudents%3Fpage%3D2[identity=false]"
    );
}

#[tokio::test]
async fn test_logout_without_redirect_carries_no_query() {
    let h = common::harness();
    h.controller
        .login(common::student_credentials(), None)
        .await
        .expect("login should succeed");

    h.controller.logout(false).await;

    assert_eq!(
        h.events().last().unwrap(),
        "replace:/auth/login[identity=false]"
    );
}

#[tokio::test]
async fn test_logout_without_session_skips_backend_call() {
    let h = common::harness();

    h.controller.logout(true).await;

    assert_eq!(h.backend.sign_out_calls.load(Ordering::SeqCst), 0);
    assert!(h
        .events()
        .last()
        .unwrap()
        .starts_with("replace:/auth/login?redirect="));
}

#[tokio::test]
async fn test_logout_clears_expired_flag() {
    let h = common::harness();
    h.session.access.set_access_token("stale".to_string());
    h.session.access.set_login_expired(true);

    h.controller.logout(false).await;

    assert!(!h.session.access.login_expired());
    assert_eq!(h.session.access.access_token(), "");
}
