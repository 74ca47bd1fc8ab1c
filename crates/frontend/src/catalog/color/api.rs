use contracts::catalog::color::Color;
use contracts::shared::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_colors(query: &[(String, String)]) -> Result<Paged<Color>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/catalog/colors"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch colors: {}", response.status()));
    }

    response
        .json::<Paged<Color>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
