//! Endpoint functions against a mock HTTP server.

use fincontrol_business::users::api;
use fincontrol_business::users::{
    CreateUserRequest, ForgotPasswordRequest, RegisterRequest, UpdateRoleRequest,
};
use fincontrol_business::{Role, UserStatus};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn list_all_users_decodes_roster() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "userId": 1,
                "name": "admin",
                "email": "admin@example.com",
                "role": "ROLE_ADMIN",
                "status": "ACTIVE"
            },
            {
                "userId": 2,
                "name": "bob",
                "email": "bob@example.com",
                "role": "ROLE_MANAGER",
                "status": "INACTIVE"
            }
        ])))
        .mount(&server)
        .await;

    let users = api::list_all_users(&server.uri()).await.expect("roster");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "admin");
    assert_eq!(users[0].role, Role::Admin);
    assert_eq!(users[1].status, UserStatus::Inactive);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api::list_all_users(&server.uri())
        .await
        .expect_err("should fail");
    assert_eq!(err.to_string(), "API returned status: 503");
}

#[tokio::test]
async fn delete_user_returns_service_message() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "User removed"
            })),
        )
        .mount(&server)
        .await;

    let response = api::delete_user(&server.uri(), 42).await.expect("delete");
    assert_eq!(response.message, "User removed");
}

#[tokio::test]
async fn update_role_sends_camel_case_payload() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/role"))
        .and(body_json(serde_json::json!({ "userId": 3, "roleId": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    api::update_role(
        &server.uri(),
        &UpdateRoleRequest {
            user_id: 3,
            role_id: Role::Manager.toggled().role_id(),
        },
    )
    .await
    .expect("update role");
}

#[tokio::test]
async fn create_user_posts_manager_role() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "secret",
            "roleId": 2
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    api::create_user(
        &server.uri(),
        &CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            role_id: Role::Manager.role_id(),
        },
    )
    .await
    .expect("create user");
}

#[tokio::test]
async fn forgot_password_posts_email() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/forgot"))
        .and(body_json(serde_json::json!({
            "email": "alice@example.com"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    api::forgot_password(
        &server.uri(),
        &ForgotPasswordRequest {
            email: "alice@example.com".to_string(),
        },
    )
    .await
    .expect("forgot password");
}

#[tokio::test]
async fn create_register_posts_parsed_amounts() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/registers"))
        .and(body_json(serde_json::json!({
            "userId": 5,
            "cell": "11999990000",
            "salary": 3500.0,
            "others": 0.0,
            "photo": ""
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    api::create_register(
        &server.uri(),
        &RegisterRequest {
            user_id: 5,
            cell: "11999990000".to_string(),
            salary: 3500.0,
            others: 0.0,
            photo: String::new(),
        },
    )
    .await
    .expect("create register");
}
