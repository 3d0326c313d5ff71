//! End-to-end confirm flow against a mock HTTP server.

use std::time::Duration;

use fincontrol_business::{
    ActionKind, ActionOutcome, BusinessConfig, ConfirmActionCommand, ConfirmDialog,
    PendingAction, Role, Severity, UserActionCompute, UserItem, UserStatus,
    confirm_staged_action,
};
use fincontrol_states::StateCtx;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn test_ctx(base_url: &str) -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(base_url));
    ctx.add_state(ConfirmDialog::default());
    ctx.add_state(UserActionCompute::default());
    ctx
}

fn user(id: i64, role: Role, status: UserStatus) -> UserItem {
    UserItem {
        user_id: id,
        name: format!("user{id}"),
        email: format!("user{id}@example.com"),
        role,
        status,
    }
}

/// Pump sync until the action outcome settles or the deadline passes.
async fn settled_outcome(ctx: &mut StateCtx) -> ActionOutcome {
    for _ in 0..200 {
        ctx.sync();
        let outcome = ctx.state_ref::<UserActionCompute>().outcome.clone();
        match outcome {
            ActionOutcome::Idle | ActionOutcome::InFlight(_) => {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            settled => return settled,
        }
    }
    panic!("action never settled");
}

#[tokio::test]
async fn delete_success_reports_service_message() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "User removed"
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = test_ctx(&server.uri());
    ctx.state_mut::<ConfirmDialog>()
        .stage(PendingAction::Delete { user_id: 7 });
    confirm_staged_action(&mut ctx);

    let outcome = settled_outcome(&mut ctx).await;
    assert_eq!(
        outcome,
        ActionOutcome::Succeeded {
            kind: ActionKind::Delete,
            message: "User removed".to_string(),
            severity: Severity::Success,
        }
    );
}

#[tokio::test]
async fn change_role_sends_inverted_role_id() {
    init_logger();
    let server = MockServer::start().await;
    // Admin (id 1) flips to manager (id 2).
    Mock::given(method("PUT"))
        .and(path("/api/users/role"))
        .and(body_json(serde_json::json!({ "userId": 3, "roleId": 2 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = test_ctx(&server.uri());
    ctx.state_mut::<ConfirmDialog>().stage(PendingAction::ChangeRole {
        user: user(3, Role::Admin, UserStatus::Active),
    });
    confirm_staged_action(&mut ctx);

    let outcome = settled_outcome(&mut ctx).await;
    assert_eq!(
        outcome,
        ActionOutcome::Succeeded {
            kind: ActionKind::ChangeRole,
            message: "Role changed successfully.".to_string(),
            severity: Severity::Success,
        }
    );
}

#[tokio::test]
async fn deactivating_sends_inactive_and_warns() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/status"))
        .and(body_json(serde_json::json!({
            "userId": 3,
            "status": "INACTIVE"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = test_ctx(&server.uri());
    ctx.state_mut::<ConfirmDialog>().stage(PendingAction::ToggleStatus {
        user: user(3, Role::Manager, UserStatus::Active),
    });
    confirm_staged_action(&mut ctx);

    let outcome = settled_outcome(&mut ctx).await;
    assert_eq!(
        outcome,
        ActionOutcome::Succeeded {
            kind: ActionKind::ToggleStatus,
            message: "User deactivated successfully.".to_string(),
            severity: Severity::Warning,
        }
    );
}

#[tokio::test]
async fn activating_sends_active_and_succeeds() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/status"))
        .and(body_json(serde_json::json!({
            "userId": 9,
            "status": "ACTIVE"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = test_ctx(&server.uri());
    ctx.state_mut::<ConfirmDialog>().stage(PendingAction::ToggleStatus {
        user: user(9, Role::Manager, UserStatus::Inactive),
    });
    confirm_staged_action(&mut ctx);

    let outcome = settled_outcome(&mut ctx).await;
    assert_eq!(
        outcome,
        ActionOutcome::Succeeded {
            kind: ActionKind::ToggleStatus,
            message: "User activated successfully.".to_string(),
            severity: Severity::Success,
        }
    );
}

#[tokio::test]
async fn failure_keeps_staged_data_and_allows_retry() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/7"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let mut ctx = test_ctx(&server.uri());
    ctx.state_mut::<ConfirmDialog>()
        .stage(PendingAction::Delete { user_id: 7 });
    confirm_staged_action(&mut ctx);

    let outcome = settled_outcome(&mut ctx).await;
    assert_eq!(
        outcome,
        ActionOutcome::Failed {
            kind: ActionKind::Delete,
            message: "API returned status: 500".to_string(),
        }
    );

    // Staged data survives a failure; a retry reattempts the same payload.
    assert_eq!(
        ctx.state_ref::<ConfirmDialog>().pending(),
        Some(&PendingAction::Delete { user_id: 7 })
    );
    ctx.state_mut::<UserActionCompute>().reset();
    confirm_staged_action(&mut ctx);
    let retry = settled_outcome(&mut ctx).await;
    assert!(matches!(retry, ActionOutcome::Failed { .. }));
}

#[tokio::test]
async fn confirm_without_staged_action_is_a_no_op() {
    init_logger();
    let server = MockServer::start().await;

    let mut ctx = test_ctx(&server.uri());
    confirm_staged_action(&mut ctx);

    // Give any stray task time to run; nothing may settle.
    for _ in 0..10 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        ctx.sync();
    }
    assert_eq!(
        ctx.state_ref::<UserActionCompute>().outcome,
        ActionOutcome::Idle
    );
    // No request reached the server.
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn double_confirm_submits_exactly_once() {
    init_logger();
    let server = MockServer::start().await;
    // Slow response keeps the first call in flight while the second lands.
    Mock::given(method("DELETE"))
        .and(path("/api/users/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_json(serde_json::json!({ "message": "User removed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = test_ctx(&server.uri());
    ctx.state_mut::<ConfirmDialog>()
        .stage(PendingAction::Delete { user_id: 7 });

    // A double-clicked Confirm button: two calls in the same frame, no
    // sync in between. The first marks the action in flight synchronously,
    // so the second must bail out before dispatching.
    confirm_staged_action(&mut ctx);
    assert!(ctx.state_ref::<UserActionCompute>().is_in_flight());
    confirm_staged_action(&mut ctx);

    let outcome = settled_outcome(&mut ctx).await;
    assert!(matches!(outcome, ActionOutcome::Succeeded { .. }));
    assert_eq!(
        server.received_requests().await.unwrap_or_default().len(),
        1,
        "only one DELETE may reach the server"
    );
}

#[tokio::test]
async fn out_of_band_dispatch_without_mark_is_skipped() {
    init_logger();
    let server = MockServer::start().await;

    let mut ctx = test_ctx(&server.uri());
    ctx.state_mut::<ConfirmDialog>()
        .stage(PendingAction::Delete { user_id: 7 });
    // Dispatching the command directly bypasses the in-flight marking;
    // the command refuses to run without it.
    ctx.dispatch::<ConfirmActionCommand>();

    for _ in 0..10 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        ctx.sync();
    }
    assert_eq!(
        ctx.state_ref::<UserActionCompute>().outcome,
        ActionOutcome::Idle
    );
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
