use contracts::assets::image::{ImageAsset, ImageId};
use contracts::shared::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_images(query: &[(String, String)]) -> Result<Paged<ImageAsset>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/assets/images"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch images: {}", response.status()));
    }

    response
        .json::<Paged<ImageAsset>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_image(id: ImageId) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/assets/images/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete image: {}", response.status()));
    }

    Ok(())
}
