use contracts::system::auth::{LoginRequest, LoginResponse, RefreshResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Exchange credentials for a token pair.
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let response = Request::post(&api_url("/api/auth/login"))
        .json(&LoginRequest { email, password })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the user behind an access token; the call doubles as token
/// validation on session restore.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Token rejected: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let response = Request::post(&api_url("/api/auth/refresh"))
        .json(&serde_json::json!({ "refreshToken": refresh_token }))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = Request::post(&api_url("/api/auth/logout"))
        .json(&serde_json::json!({ "refreshToken": refresh_token }))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}
