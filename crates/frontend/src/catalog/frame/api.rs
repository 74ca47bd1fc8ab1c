use contracts::catalog::frame::{Frame, FrameId};
use contracts::shared::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_frames(query: &[(String, String)]) -> Result<Paged<Frame>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/catalog/frames"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch frames: {}", response.status()));
    }

    response
        .json::<Paged<Frame>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_frame(id: FrameId) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/catalog/frames/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete frame: {}", response.status()));
    }

    Ok(())
}
