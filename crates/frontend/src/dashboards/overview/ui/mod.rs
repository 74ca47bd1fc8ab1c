use contracts::dashboards::overview::{DashboardReport, RevenuePoint};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::overview::api;
use crate::shared::components::StatCard;
use crate::shared::format::{format_money, format_thousands};
use crate::shared::icons::icon;

/// Bar length in percent of the tallest month. The report is reshaped
/// client-side; the API only returns raw cent totals.
pub fn bar_width_pct(value: i64, max: i64) -> u32 {
    if max <= 0 || value <= 0 {
        return 0;
    }
    ((value * 100) / max).clamp(0, 100) as u32
}

/// "2026-08" -> "Aug 2026". Unparseable input is shown as-is.
pub fn month_label(month: &str) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    if let Some((year, m)) = month.split_once('-') {
        if let Ok(idx) = m.parse::<usize>() {
            if (1..=12).contains(&idx) {
                return format!("{} {}", NAMES[idx - 1], year);
            }
        }
    }
    month.to_string()
}

fn max_revenue(points: &[RevenuePoint]) -> i64 {
    points.iter().map(|p| p.revenue_cents).max().unwrap_or(0)
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (report, set_report) = signal(Option::<DashboardReport>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        spawn_local(async move {
            match api::fetch_overview().await {
                Ok(data) => {
                    set_report.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    load();

    let summary = move |f: fn(&DashboardReport) -> String| {
        Signal::derive(move || report.get().map(|r| f(&r)))
    };

    view! {
        <div class="content">
            <div class="header">
                <div class="header-actions">
                    <button class="btn btn-secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Revenue today"
                    icon_name="orders"
                    value=summary(|r| format_money(r.summary.revenue_cents_today, &r.summary.currency))
                />
                <StatCard
                    label="Revenue this month"
                    icon_name="orders"
                    value=summary(|r| format_money(r.summary.revenue_cents_month, &r.summary.currency))
                />
                <StatCard
                    label="Orders today"
                    icon_name="orders"
                    value=summary(|r| format_thousands(i64::from(r.summary.orders_today)))
                    hint=Signal::derive(move || {
                        report.get().map(|r| format!("{} this month", r.summary.orders_month))
                    })
                />
                <StatCard
                    label="Pending refunds"
                    icon_name="refunds"
                    value=summary(|r| format_thousands(i64::from(r.summary.pending_refunds)))
                />
                <StatCard
                    label="Low stock frames"
                    icon_name="frames"
                    value=summary(|r| format_thousands(i64::from(r.summary.low_stock_frames)))
                />
            </div>

            <div class="dashboard-panels">
                <div class="panel">
                    <h3>"Revenue by month"</h3>
                    {move || report.get().map(|r| {
                        let max = max_revenue(&r.revenue_by_month);
                        let currency = r.summary.currency.clone();
                        r.revenue_by_month.iter().map(|point| {
                            let pct = bar_width_pct(point.revenue_cents, max);
                            view! {
                                <div class="bar-row">
                                    <span class="bar-label">{month_label(&point.month)}</span>
                                    <div class="bar-track">
                                        <div class="bar-fill" style=format!("width: {}%;", pct)></div>
                                    </div>
                                    <span class="bar-value">
                                        {format!(
                                            "{} ({})",
                                            format_money(point.revenue_cents, &currency),
                                            point.order_count
                                        )}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    })}
                </div>

                <div class="panel">
                    <h3>"Top frames this month"</h3>
                    <table>
                        <thead>
                            <tr>
                                <th>"SKU"</th>
                                <th>"Frame"</th>
                                <th>"Units"</th>
                                <th>"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || report.get().map(|r| {
                                let currency = r.summary.currency.clone();
                                r.top_frames.iter().map(|frame| {
                                    view! {
                                        <tr>
                                            <td class="mono">{frame.sku.clone()}</td>
                                            <td>{frame.name.clone()}</td>
                                            <td class="num">{frame.units_sold}</td>
                                            <td class="num">{format_money(frame.revenue_cents, &currency)}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_pct() {
        assert_eq!(bar_width_pct(0, 100), 0);
        assert_eq!(bar_width_pct(50, 100), 50);
        assert_eq!(bar_width_pct(100, 100), 100);
        assert_eq!(bar_width_pct(100, 0), 0);
        assert_eq!(bar_width_pct(-5, 100), 0);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2026-08"), "Aug 2026");
        assert_eq!(month_label("2025-01"), "Jan 2025");
        assert_eq!(month_label("2025-13"), "2025-13");
        assert_eq!(month_label("garbage"), "garbage");
    }

    #[test]
    fn test_max_revenue() {
        let points = vec![
            RevenuePoint {
                month: "2026-06".into(),
                revenue_cents: 120,
                order_count: 2,
            },
            RevenuePoint {
                month: "2026-07".into(),
                revenue_cents: 340,
                order_count: 5,
            },
        ];
        assert_eq!(max_revenue(&points), 340);
        assert_eq!(max_revenue(&[]), 0);
    }
}
