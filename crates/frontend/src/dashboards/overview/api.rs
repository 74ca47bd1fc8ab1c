use contracts::dashboards::overview::DashboardReport;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

/// One request covers the whole overview screen: headline summary,
/// revenue-by-month report and the top sellers.
pub async fn fetch_overview() -> Result<DashboardReport, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/dashboard/overview"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch dashboard: {}", response.status()));
    }

    response
        .json::<DashboardReport>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
