use contracts::catalog::category::Category;
use contracts::shared::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_categories(query: &[(String, String)]) -> Result<Paged<Category>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/catalog/categories"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json::<Paged<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
