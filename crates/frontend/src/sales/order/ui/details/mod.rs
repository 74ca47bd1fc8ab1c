use contracts::sales::order::{OrderDetail, OrderId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::sales::order::api;
use crate::sales::order::ui::list::order_status_badge;
use crate::shared::date_utils::{format_datetime, format_datetime_opt};
use crate::shared::format::format_money;

/// Read-only order view: header, lines, shipping address and attached
/// refunds. Order state transitions happen in the backend office tools,
/// not here.
#[component]
pub fn OrderDetails(id: OrderId, on_close: Callback<()>) -> impl IntoView {
    let (order, set_order) = signal(Option::<OrderDetail>::None);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api::fetch_order(id).await {
            Ok(detail) => set_order.set(Some(detail)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="details-form">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match order.get() {
                None => view! { <div class="loading-placeholder">"Loading order..."</div> }.into_any(),
                Some(detail) => {
                    let currency = detail.summary.currency.clone();
                    let refund_currency = currency.clone();
                    view! {
                        <div>
                            <div class="details-header">
                                <h2>{format!("Order {}", detail.summary.number)}</h2>
                                {order_status_badge(detail.summary.status)}
                            </div>

                            <div class="details-meta">
                                <div>
                                    <span class="meta-label">"Customer"</span>
                                    <span>{detail.summary.customer_name.clone()}</span>
                                    <span class="meta-dim">{detail.summary.customer_email.clone()}</span>
                                </div>
                                <div>
                                    <span class="meta-label">"Placed"</span>
                                    <span>{format_datetime(&detail.summary.placed_at)}</span>
                                </div>
                                <div>
                                    <span class="meta-label">"Shipping address"</span>
                                    <span>{detail.shipping_address.clone()}</span>
                                </div>
                            </div>

                            <h3>"Lines"</h3>
                            <table>
                                <thead>
                                    <tr>
                                        <th>"SKU"</th>
                                        <th>"Frame"</th>
                                        <th>"Qty"</th>
                                        <th>"Unit price"</th>
                                        <th>"Total"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {detail.lines.iter().map(|line| {
                                        view! {
                                            <tr>
                                                <td class="mono">{line.sku.clone()}</td>
                                                <td>{line.name.clone()}</td>
                                                <td class="num">{line.quantity}</td>
                                                <td class="num">{format_money(line.unit_price_cents, &currency)}</td>
                                                <td class="num">{format_money(line.total_cents, &currency)}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                                <tfoot>
                                    <tr>
                                        <td colspan="4">"Order total"</td>
                                        <td class="num">
                                            {format_money(detail.summary.total_cents, &currency)}
                                        </td>
                                    </tr>
                                </tfoot>
                            </table>

                            {(!detail.refunds.is_empty()).then(|| view! {
                                <div>
                                    <h3>"Refunds"</h3>
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>"Amount"</th>
                                                <th>"Reason"</th>
                                                <th>"Status"</th>
                                                <th>"Requested"</th>
                                                <th>"Resolved"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {detail.refunds.iter().map(|refund| {
                                                view! {
                                                    <tr>
                                                        <td class="num">{format_money(refund.amount_cents, &refund_currency)}</td>
                                                        <td>{refund.reason.clone()}</td>
                                                        <td>{refund.status.label()}</td>
                                                        <td>{format_datetime(&refund.requested_at)}</td>
                                                        <td>{format_datetime_opt(&refund.resolved_at)}</td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            })}

                            <div class="form-actions">
                                <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                                    {"Close"}
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
