use serde::{Deserialize, Serialize};

use crate::catalog::frame::FrameId;

/// Headline numbers for the dashboard stat cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "revenueCentsToday")]
    pub revenue_cents_today: i64,
    #[serde(rename = "revenueCentsMonth")]
    pub revenue_cents_month: i64,
    #[serde(rename = "ordersToday")]
    pub orders_today: u32,
    #[serde(rename = "ordersMonth")]
    pub orders_month: u32,
    #[serde(rename = "pendingRefunds")]
    pub pending_refunds: u32,
    #[serde(rename = "lowStockFrames")]
    pub low_stock_frames: u32,
    pub currency: String,
}

/// One month of the revenue report. `month` is "YYYY-MM".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    #[serde(rename = "revenueCents")]
    pub revenue_cents: i64,
    #[serde(rename = "orderCount")]
    pub order_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopFrame {
    #[serde(rename = "frameId")]
    pub frame_id: FrameId,
    pub name: String,
    pub sku: String,
    #[serde(rename = "unitsSold")]
    pub units_sold: u32,
    #[serde(rename = "revenueCents")]
    pub revenue_cents: i64,
}

/// Everything the overview dashboard fetches in one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub summary: SalesSummary,
    #[serde(rename = "revenueByMonth")]
    pub revenue_by_month: Vec<RevenuePoint>,
    #[serde(rename = "topFrames")]
    pub top_frames: Vec<TopFrame>,
}
