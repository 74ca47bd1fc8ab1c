use contracts::sales::order::{OrderDetail, OrderId, OrderSummary};
use contracts::shared::Paged;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

pub async fn fetch_orders(query: &[(String, String)]) -> Result<Paged<OrderSummary>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url("/api/sales/orders"))
        .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json::<Paged<OrderSummary>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_order(id: OrderId) -> Result<OrderDetail, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url(&format!("/api/sales/orders/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch order: {}", response.status()));
    }

    response
        .json::<OrderDetail>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
