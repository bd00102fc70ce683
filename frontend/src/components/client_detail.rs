// Client Detail Modal - renders a prepared ClientDetailView

use clientdesk_shared::{BadgeStyle, ClientDetailView, InvoiceRow, PaymentRow, TableBody};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClientDetailModalProps {
    pub view: ClientDetailView,
    pub on_close: Callback<()>,
}

#[function_component(ClientDetailModal)]
pub fn client_detail_modal(props: &ClientDetailModalProps) -> Html {
    let onclose = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let view = &props.view;

    html! {
        <div id="clientModal" class="fixed inset-0 z-50 flex items-center justify-center" style="background-color: rgba(0, 0, 0, 0.6);">
            <div class="rounded-lg w-full max-w-5xl max-h-screen overflow-y-auto" style="background-color: var(--bg-primary); border: 1px solid var(--border-primary);">
                // Header
                <div class="flex items-center justify-between p-4 border-b" style="border-color: var(--border-primary);">
                    <div>
                        <h2 id="clientName" class="text-xl font-semibold" style="color: var(--fg-primary);">{&view.name}</h2>
                        <div id="clientCompany" class="text-sm" style="color: var(--fg-muted);">{&view.company}</div>
                    </div>
                    <button onclick={onclose} class="p-2 rounded-lg hover:bg-gray-700" style="color: var(--fg-muted);" title="Close">
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </button>
                </div>

                <div class="p-6 space-y-6">
                    // Contact + Totals
                    <div class="grid grid-cols-2 gap-6">
                        <div class="rounded-lg p-4 space-y-2" style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
                            <DetailField id="clientEmail" label="Email" value={view.email.clone()} />
                            <DetailField id="clientPhone" label="Phone" value={view.phone.clone()} />
                            <DetailField id="clientTax" label="Tax ID" value={view.tax_id.clone()} />
                            <DetailField id="clientAddress" label="Address" value={view.address.clone()} />
                        </div>
                        <div class="grid grid-cols-2 gap-3">
                            <SummaryCard id="totalInvoiced" title="Total Invoiced" value={view.total_invoiced.clone()} color="var(--accent-primary)" />
                            <SummaryCard id="totalPaid" title="Total Paid" value={view.total_paid.clone()} color="var(--color-success)" />
                            <SummaryCard id="outstanding" title="Outstanding" value={view.outstanding.clone()} color="var(--color-warning)" />
                            <SummaryCard id="invoiceCount" title="Invoices" value={view.invoice_count.clone()} color="var(--fg-primary)" />
                        </div>
                    </div>

                    // Invoices
                    <div>
                        <h3 class="text-lg font-medium mb-3" style="color: var(--fg-primary);">{"Invoices"}</h3>
                        <table class="w-full">
                            <thead>
                                <tr style="background-color: var(--bg-tertiary);">
                                    <Th label="Invoice #" />
                                    <Th label="Due Date" />
                                    <Th label="Description" />
                                    <Th label="Amount" right={true} />
                                    <Th label="Paid" right={true} />
                                    <Th label="Remaining" right={true} />
                                    <Th label="Status" />
                                </tr>
                            </thead>
                            <tbody id="invoiceTableBody">
                                { table_body(&view.invoices, invoice_row) }
                            </tbody>
                        </table>
                    </div>

                    // Payments
                    <div>
                        <h3 class="text-lg font-medium mb-3" style="color: var(--fg-primary);">{"Payments"}</h3>
                        <table class="w-full">
                            <thead>
                                <tr style="background-color: var(--bg-tertiary);">
                                    <Th label="Date" />
                                    <Th label="Invoice #" />
                                    <Th label="Method" />
                                    <Th label="Amount" right={true} />
                                    <Th label="Installment" />
                                    <Th label="Status" />
                                </tr>
                            </thead>
                            <tbody id="paymentTableBody">
                                { table_body(&view.payments, payment_row) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn table_body<R>(body: &TableBody<R>, render: fn(&R) -> Html) -> Html {
    match body {
        TableBody::Rows(rows) => rows.iter().map(render).collect::<Html>(),
        TableBody::Placeholder { message, colspan } => html! {
            <tr>
                <td colspan={colspan.to_string()} class="text-center py-3" style="color: var(--fg-muted);">
                    {message}
                </td>
            </tr>
        },
    }
}

fn invoice_row(row: &InvoiceRow) -> Html {
    html! {
        <tr class="hover:bg-gray-700/30" style="border-bottom: 1px solid var(--border-primary);">
            <td class="py-2 px-3">
                <span class="font-mono font-medium" style="color: var(--accent-primary);">{&row.invoice_no}</span>
            </td>
            <td class="py-2 px-3 text-sm" style="color: var(--fg-secondary);">{&row.due_date}</td>
            <td class="py-2 px-3 text-sm" style="color: var(--fg-secondary);">{&row.description}</td>
            <td class="py-2 px-3 text-right font-mono" style="color: var(--fg-primary);">
                {&row.amount}
                if let Some(percent) = row.progress_percent {
                    <div class="h-1 mt-1 rounded" style="background-color: var(--bg-tertiary);">
                        <div
                            class="h-1 rounded"
                            role="progressbar"
                            aria-valuenow={percent.to_string()}
                            style={format!("width: {}%; background-color: var(--color-success);", percent)}
                        ></div>
                    </div>
                }
            </td>
            <td class="py-2 px-3 text-right font-mono" style="color: var(--fg-secondary);">{&row.paid}</td>
            <td class="py-2 px-3 text-right font-mono" style="color: var(--fg-secondary);">{&row.remaining}</td>
            <td class="py-2 px-3"><StatusBadge label={row.status.clone()} badge={row.badge} /></td>
        </tr>
    }
}

fn payment_row(row: &PaymentRow) -> Html {
    html! {
        <tr class="hover:bg-gray-700/30" style="border-bottom: 1px solid var(--border-primary);">
            <td class="py-2 px-3 text-sm" style="color: var(--fg-secondary);">{&row.date}</td>
            <td class="py-2 px-3">
                <span class="font-mono" style="color: var(--accent-primary);">{&row.invoice_no}</span>
            </td>
            <td class="py-2 px-3 text-sm" style="color: var(--fg-secondary);">{&row.method}</td>
            <td class="py-2 px-3 text-right font-mono" style="color: var(--fg-primary);">{&row.amount}</td>
            <td class="py-2 px-3 text-sm" style="color: var(--fg-secondary);">{&row.installment}</td>
            <td class="py-2 px-3"><StatusBadge label={row.status.clone()} badge={row.badge} /></td>
        </tr>
    }
}

// ===== Small building blocks =====

#[derive(Properties, PartialEq)]
struct ThProps {
    label: &'static str,
    #[prop_or_default]
    right: bool,
}

#[function_component(Th)]
fn th(props: &ThProps) -> Html {
    let align = if props.right { "text-right" } else { "text-left" };
    html! {
        <th class={format!("{} py-2 px-3 text-sm font-medium", align)} style="color: var(--fg-muted);">
            {props.label}
        </th>
    }
}

#[derive(Properties, PartialEq)]
struct StatusBadgeProps {
    label: String,
    badge: BadgeStyle,
}

#[function_component(StatusBadge)]
fn status_badge(props: &StatusBadgeProps) -> Html {
    let color = props.badge.color();
    html! {
        <span
            class={format!("{} px-2 py-0.5 text-xs rounded", props.badge.css_class())}
            style={format!("background-color: {}20; color: {}", color, color)}
        >
            {&props.label}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct DetailFieldProps {
    id: &'static str,
    label: &'static str,
    value: String,
}

#[function_component(DetailField)]
fn detail_field(props: &DetailFieldProps) -> Html {
    html! {
        <div class="flex justify-between">
            <span style="color: var(--fg-muted);">{props.label}</span>
            <span id={props.id} style="color: var(--fg-secondary);">{&props.value}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SummaryCardProps {
    id: &'static str,
    title: &'static str,
    value: String,
    color: &'static str,
}

#[function_component(SummaryCard)]
fn summary_card(props: &SummaryCardProps) -> Html {
    html! {
        <div
            class="rounded-lg p-4"
            style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);"
        >
            <div class="text-sm mb-1" style="color: var(--fg-muted);">{props.title}</div>
            <div id={props.id} class="text-xl font-bold font-mono" style={format!("color: {}", props.color)}>
                {&props.value}
            </div>
        </div>
    }
}
