use contracts::catalog::tag::{Tag, TagId};
use contracts::shared::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_tags(query: &[(String, String)]) -> Result<Paged<Tag>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/catalog/tags"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch tags: {}", response.status()));
    }

    response
        .json::<Paged<Tag>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_tag(id: TagId) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/catalog/tags/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete tag: {}", response.status()));
    }

    Ok(())
}
