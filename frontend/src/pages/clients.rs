// Clients Page - searchable client table with a detail modal per row

use std::rc::Rc;

use clientdesk_shared::{
    ClientDetail, ClientRow, LoadError, LoadSequence, LoadTicket, PanelConfig,
    PanelState, RowFilter,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::client_detail::ClientDetailModal;
use crate::services::clients;

// ===== Panel reducer =====

pub enum PanelAction {
    Begin(LoadTicket),
    Finish(LoadTicket, Result<ClientDetail, LoadError>),
    Close,
    DismissStatus,
}

#[derive(PartialEq)]
pub struct PanelStore(PanelState);

impl Reducible for PanelStore {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            PanelAction::Begin(ticket) => state.begin(ticket),
            PanelAction::Finish(ticket, result) => {
                // Outcome is logged by the panel state.
                state.finish(ticket, result);
            }
            PanelAction::Close => state.close(),
            PanelAction::DismissStatus => state.dismiss_status(),
        }
        Rc::new(PanelStore(state))
    }
}

// ===== Page =====

#[derive(Properties, PartialEq)]
pub struct ClientsPageProps {
    pub config: Rc<PanelConfig>,
    pub rows: Rc<Vec<ClientRow>>,
}

#[function_component(ClientsPage)]
pub fn clients_page(props: &ClientsPageProps) -> Html {
    let search_query = use_state(String::new);
    let panel = {
        let config = (*props.config).clone();
        use_reducer(move || PanelStore(PanelState::new(config)))
    };
    let sequence = use_mut_ref(LoadSequence::new);
    let filter = {
        let rows = props.rows.clone();
        use_memo(rows, |rows| RowFilter::new(rows))
    };

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };

    let on_clear = {
        let search_query = search_query.clone();
        Callback::from(move |_: MouseEvent| search_query.set(String::new()))
    };

    let on_view = {
        let panel = panel.clone();
        let sequence = sequence.clone();
        let config = props.config.clone();
        Callback::from(move |row: ClientRow| {
            if row.id.is_empty() {
                return;
            }
            let ticket = sequence.borrow_mut().issue();
            let url = config.detail_url(&row.id, row.details_url.as_deref());
            panel.dispatch(PanelAction::Begin(ticket));

            let panel = panel.clone();
            spawn_local(async move {
                let result = clients::fetch_client_detail(&url).await;
                panel.dispatch(PanelAction::Finish(ticket, result));
            });
        })
    };

    let on_close = {
        let panel = panel.clone();
        Callback::from(move |_: ()| panel.dispatch(PanelAction::Close))
    };

    let on_dismiss = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| panel.dispatch(PanelAction::DismissStatus))
    };

    let outcome = filter.apply(&search_query);
    let state = &panel.0;
    let config = &props.config;

    html! {
        <div class="p-6 space-y-4" style="background-color: var(--bg-primary); min-height: 100vh;">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold" style="color: var(--fg-primary);">{"Clients"}</h1>

                // Search
                <div class="flex items-center space-x-2">
                    <input
                        id="clientSearch"
                        type="text"
                        placeholder="Search clients..."
                        value={(*search_query).clone()}
                        oninput={on_search}
                        class="w-72 px-4 py-2 rounded-lg text-sm"
                        style="background-color: var(--bg-input); border: 1px solid var(--border-primary); color: var(--fg-primary);"
                    />
                    <button
                        id="clearSearch"
                        onclick={on_clear}
                        class="px-3 py-2 rounded-lg text-sm"
                        style="background-color: var(--button-secondary-bg); color: var(--fg-secondary);"
                    >
                        {"Clear"}
                    </button>
                </div>
            </div>

            // Loading / error line
            if let Some(message) = state.status().message() {
                <div
                    class="flex items-center justify-between px-4 py-3 rounded-lg"
                    style={if state.status().is_failed() {
                        "background-color: var(--bg-secondary); border: 1px solid var(--color-error); color: var(--color-error);"
                    } else {
                        "background-color: var(--bg-secondary); border: 1px solid var(--border-primary); color: var(--fg-muted);"
                    }}
                >
                    <span>{message}</span>
                    if state.status().is_failed() {
                        <button onclick={on_dismiss} class="text-sm" title="Dismiss">{"×"}</button>
                    }
                </div>
            }

            <div class="rounded-lg overflow-hidden" style="background-color: var(--bg-secondary); border: 1px solid var(--border-primary);">
                <table id="clientsTable" class="w-full">
                    <thead>
                        <tr style="background-color: var(--bg-tertiary);">
                            { for ["Name", "Company", "Email", "Phone", "Tax ID", "Address", ""].iter().map(|label| html! {
                                <th class="text-left py-3 px-4 text-sm font-medium" style="color: var(--fg-muted);">{*label}</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().enumerate().filter(|(i, _)| outcome.is_visible(*i)).map(|(_, row)| {
                            let on_view = on_view.clone();
                            let r = row.clone();
                            html! {
                                <ClientTableRow
                                    row={row.clone()}
                                    placeholder={config.placeholder.clone()}
                                    on_view={Callback::from(move |_: ()| on_view.emit(r.clone()))}
                                />
                            }
                        })}
                        if outcome.show_no_results {
                            <tr id="noResultRow">
                                <td colspan={config.table_columns.to_string()} class="text-center py-3" style="color: var(--fg-muted);">
                                    {&config.no_results_message}
                                </td>
                            </tr>
                        }
                    </tbody>
                </table>
            </div>

            if let Some(view) = state.view().filter(|_| state.is_visible()) {
                <ClientDetailModal view={view.clone()} {on_close} />
            }
        </div>
    }
}

// ===== Client Table Row Component =====

#[derive(Properties, PartialEq)]
struct ClientTableRowProps {
    row: ClientRow,
    placeholder: String,
    on_view: Callback<()>,
}

#[function_component(ClientTableRow)]
fn client_table_row(props: &ClientTableRowProps) -> Html {
    let onclick = {
        let on_view = props.on_view.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(()))
    };
    let cell = |value: &Option<String>| -> String {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(props.placeholder.as_str())
            .to_string()
    };
    let row = &props.row;

    html! {
        <tr class="hover:bg-gray-700/30" style="border-bottom: 1px solid var(--border-primary);">
            <td class="py-3 px-4 font-medium" style="color: var(--fg-primary);">{cell(&row.name)}</td>
            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{cell(&row.company)}</td>
            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{cell(&row.email)}</td>
            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{cell(&row.phone)}</td>
            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{cell(&row.tax_id)}</td>
            <td class="py-3 px-4 text-sm" style="color: var(--fg-secondary);">{cell(&row.address)}</td>
            <td class="py-3 px-4 text-right">
                <button
                    {onclick}
                    class="btn-view p-1 rounded hover:bg-gray-700"
                    style="color: var(--fg-muted);"
                    title="View"
                    data-id={row.id.to_string()}
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"/>
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"/>
                    </svg>
                </button>
            </td>
        </tr>
    }
}
