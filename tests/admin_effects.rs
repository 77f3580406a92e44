//! Run-once and latest-wins behaviour, driven through the admin slice.

mod common;

use std::time::Duration;

use bujo::api::ApiError;
use bujo::features::admin::AdminIntent;
use bujo::model::Role;
use bujo::notify::{Level, Notification};
use bujo::store::{AppIntent, AppState};
use common::{drain, names, user, Harness};

fn received_users(intents: &[AppIntent]) -> Vec<Vec<String>> {
    intents
        .iter()
        .filter_map(|intent| match intent {
            AppIntent::Admin(AdminIntent::UserRolesReceived { user_roles }) => {
                Some(user_roles.iter().map(|u| u.name.clone()).collect())
            }
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn get_users_by_role_stores_fetched_users() {
    let h = Harness::start();
    h.api
        .respond("fetch_users_by_role", vec![user(1, "alice"), user(2, "bob")]);

    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    h.runtime.settled().await;

    assert_eq!(h.state().admin.user_roles, vec![user(1, "alice"), user(2, "bob")]);
    assert_eq!(h.api.calls_to("fetch_users_by_role")[0].args, "Admin");
    assert!(h.notifications.entries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn only_latest_get_users_by_role_reaches_reducer() {
    let h = Harness::start();
    let mut observer = h.runtime.store().observe();
    // The first call would resolve before the second one.
    h.api.respond_after(
        "fetch_users_by_role",
        Duration::from_millis(50),
        vec![user(1, "first")],
    );
    h.api.respond_after(
        "fetch_users_by_role",
        Duration::from_millis(100),
        vec![user(2, "second")],
    );

    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    tokio::time::sleep(Duration::from_millis(10)).await;
    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    h.runtime.settled().await;

    assert_eq!(h.api.calls_to("fetch_users_by_role").len(), 2);
    let intents = drain(&mut observer);
    assert_eq!(received_users(&intents), vec![vec!["second".to_string()]]);
    assert_eq!(h.state().admin.user_roles, vec![user(2, "second")]);
}

#[tokio::test(start_paused = true)]
async fn superseded_failure_is_not_reported() {
    let h = Harness::start();
    h.api.fail_after(
        "fetch_users_by_role",
        Duration::from_millis(20),
        ApiError::transport("/api/users?role=ADMIN", "network down"),
    );
    h.api
        .respond_after("fetch_users_by_role", Duration::from_millis(40), vec![user(3, "carol")]);

    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    tokio::time::sleep(Duration::from_millis(5)).await;
    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Vip });
    h.runtime.settled().await;

    assert!(h.notifications.entries().is_empty());
    assert_eq!(h.state().admin.user_roles, vec![user(3, "carol")]);
}

#[tokio::test(start_paused = true)]
async fn result_arriving_while_newer_request_is_queued_is_dropped() {
    let h = Harness::start();
    let mut observer = h.runtime.store().observe();
    h.api.respond_after(
        "fetch_users_by_role",
        Duration::from_millis(50),
        vec![user(1, "first")],
    );
    h.api.respond_after(
        "fetch_users_by_role",
        Duration::from_millis(50),
        vec![user(2, "second")],
    );

    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    // Wakes in the same instant the first call resolves.
    tokio::time::sleep(Duration::from_millis(50)).await;
    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    h.runtime.settled().await;

    let intents = drain(&mut observer);
    assert_eq!(received_users(&intents), vec![vec!["second".to_string()]]);
    assert_eq!(h.state().admin.user_roles, vec![user(2, "second")]);
}

#[tokio::test(start_paused = true)]
async fn failure_arriving_while_newer_request_is_queued_is_dropped() {
    let h = Harness::start();
    h.api.fail_after(
        "fetch_users_by_role",
        Duration::from_millis(50),
        ApiError::transport("/api/users?role=ADMIN", "first failed"),
    );
    h.api.respond_after(
        "fetch_users_by_role",
        Duration::from_millis(50),
        vec![user(2, "second")],
    );

    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    tokio::time::sleep(Duration::from_millis(50)).await;
    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    h.runtime.settled().await;

    assert!(h.notifications.entries().is_empty());
    assert_eq!(h.state().admin.user_roles, vec![user(2, "second")]);
}

#[tokio::test(start_paused = true)]
async fn request_superseded_before_it_starts_never_calls() {
    let h = Harness::start();
    h.api.respond("fetch_users_by_role", vec![user(2, "only")]);

    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Vip });
    h.runtime.settled().await;

    let calls = h.api.calls_to("fetch_users_by_role");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, "Vip");
    assert_eq!(h.state().admin.user_roles, vec![user(2, "only")]);
}

#[tokio::test(start_paused = true)]
async fn latest_request_failure_is_reported() {
    let h = Harness::start();
    h.api.fail(
        "fetch_users_by_role",
        ApiError::Status {
            path: "/api/users?role=ADMIN".into(),
            status: 403,
            message: "Forbidden".into(),
        },
    );

    h.runtime
        .dispatch(AdminIntent::GetUsersByRole { role: Role::Admin });
    h.runtime.settled().await;

    let errors = h.notifications.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].text.starts_with("getUsersByRole Error Received:"));
    assert!(errors[0].text.contains("Forbidden"));
    assert_eq!(h.state(), AppState::default());
}

#[tokio::test(start_paused = true)]
async fn set_role_runs_every_time() {
    let h = Harness::start();

    h.runtime.dispatch(AdminIntent::SetRole {
        username: "alice".into(),
        role: Role::Admin,
    });
    h.runtime.dispatch(AdminIntent::SetRole {
        username: "alice".into(),
        role: Role::Admin,
    });
    h.runtime.settled().await;

    assert_eq!(h.api.calls_to("set_role").len(), 2);
    let entries = h.notifications.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|n| n.level == Level::Success));
    assert_eq!(
        entries[0],
        Notification::success("set alice as ADMIN successfully")
    );
}

#[tokio::test(start_paused = true)]
async fn set_role_failure_notifies_without_touching_state() {
    let h = Harness::start();
    let mut observer = h.runtime.store().observe();
    h.api.fail(
        "set_role",
        ApiError::transport("/api/users/alice/setRole", "network down"),
    );

    h.runtime.dispatch(AdminIntent::SetRole {
        username: "alice".into(),
        role: Role::Admin,
    });
    h.runtime.settled().await;

    let entries = h.notifications.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, Level::Error);
    assert!(entries[0].text.contains("network down"));
    assert!(entries[0].text.starts_with("setRole Error Received:"));
    assert_eq!(h.state(), AppState::default());
    assert_eq!(names(&drain(&mut observer)), vec!["admin/setRole"]);
}

#[tokio::test(start_paused = true)]
async fn slow_set_role_is_not_cancelled_by_a_second_one() {
    let h = Harness::start();
    h.api.respond_after("set_role", Duration::from_millis(100), ());
    h.api.respond_after("set_role", Duration::from_millis(10), ());

    h.runtime.dispatch(AdminIntent::SetRole {
        username: "alice".into(),
        role: Role::Admin,
    });
    tokio::time::sleep(Duration::from_millis(5)).await;
    h.runtime.dispatch(AdminIntent::SetRole {
        username: "bob".into(),
        role: Role::Vip,
    });
    h.runtime.settled().await;

    let texts: Vec<String> = h
        .notifications
        .entries()
        .into_iter()
        .map(|n| n.text)
        .collect();
    assert_eq!(
        texts,
        vec![
            "set bob as VIP successfully".to_string(),
            "set alice as ADMIN successfully".to_string(),
        ]
    );
}
