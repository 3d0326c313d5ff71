//! Endpoint functions for the remote user service.
//!
//! Each function takes the base API URL (see [`BusinessConfig::api_url`])
//! and returns the decoded response body. Non-2xx statuses surface as
//! [`ApiError::Status`] so callers can report them uniformly.
//!
//! [`BusinessConfig::api_url`]: crate::BusinessConfig::api_url

use log::debug;

use crate::http::Client;
use crate::users::{
    CreateUserRequest, ForgotPasswordRequest, MessageResponse, RegisterRequest,
    UpdateRoleRequest, UpdateStatusRequest, UserItem,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Http(#[from] crate::http::HttpError),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// `GET /users` - full roster.
pub async fn list_all_users(api_url: &str) -> ApiResult<Vec<UserItem>> {
    let url = format!("{api_url}/users");
    debug!("GET {url}");
    let response = Client::get(url).send().await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(response.json()?)
}

/// `DELETE /users/{id}` - remove a user. The service replies with a
/// human-readable message which callers show verbatim.
pub async fn delete_user(api_url: &str, user_id: i64) -> ApiResult<MessageResponse> {
    let url = format!("{api_url}/users/{user_id}");
    debug!("DELETE {url}");
    let response = Client::delete(url).send().await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(response.json()?)
}

/// `PUT /users/role` - assign a new role.
pub async fn update_role(api_url: &str, request: &UpdateRoleRequest) -> ApiResult<()> {
    let url = format!("{api_url}/users/role");
    debug!("PUT {url} user_id={}", request.user_id);
    let response = Client::put(url).json(request)?.send().await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(())
}

/// `PUT /users/status` - activate or deactivate.
pub async fn update_status(api_url: &str, request: &UpdateStatusRequest) -> ApiResult<()> {
    let url = format!("{api_url}/users/status");
    debug!("PUT {url} user_id={}", request.user_id);
    let response = Client::put(url).json(request)?.send().await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(())
}

/// `POST /users` - create an account.
pub async fn create_user(api_url: &str, request: &CreateUserRequest) -> ApiResult<()> {
    let url = format!("{api_url}/users");
    debug!("POST {url}");
    let response = Client::post(url).json(request)?.send().await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(())
}

/// `POST /users/forgot` - trigger a password recovery e-mail.
pub async fn forgot_password(api_url: &str, request: &ForgotPasswordRequest) -> ApiResult<()> {
    let url = format!("{api_url}/users/forgot");
    debug!("POST {url}");
    let response = Client::post(url).json(request)?.send().await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(())
}

/// `POST /registers` - submit the profile completion form.
pub async fn create_register(api_url: &str, request: &RegisterRequest) -> ApiResult<()> {
    let url = format!("{api_url}/registers");
    debug!("POST {url}");
    let response = Client::post(url).json(request)?.send().await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }
    Ok(())
}
