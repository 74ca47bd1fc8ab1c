use contracts::shared::Paged;
use contracts::system::users::{AdminUser, UpdateUserDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_users(query: &[(String, String)]) -> Result<Paged<AdminUser>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/system/users"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch users: {}", response.status()));
    }

    response
        .json::<Paged<AdminUser>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_user(dto: UpdateUserDto) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::put(&api_url(&format!("/api/system/users/{}", dto.id)))
        .header("Authorization", &auth)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update user: {}", response.status()));
    }

    Ok(())
}
