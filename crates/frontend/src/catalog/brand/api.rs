use contracts::catalog::brand::{Brand, BrandId, CreateBrandDto, UpdateBrandDto};
use contracts::shared::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

/// Fetch one page of brands. `query` comes straight from the list query
/// controller.
pub async fn fetch_brands(query: &[(String, String)]) -> Result<Paged<Brand>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/catalog/brands"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch brands: {}", response.status()));
    }

    response
        .json::<Paged<Brand>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_brand(dto: CreateBrandDto) -> Result<BrandId, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/catalog/brands"))
        .header("Authorization", &auth)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create brand: {}", response.status()));
    }

    let created: Brand = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(created.id)
}

pub async fn update_brand(dto: UpdateBrandDto) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::put(&api_url(&format!("/api/catalog/brands/{}", dto.id)))
        .header("Authorization", &auth)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update brand: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_brand(id: BrandId) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/catalog/brands/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete brand: {}", response.status()));
    }

    Ok(())
}
