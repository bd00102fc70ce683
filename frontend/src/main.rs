use std::rc::Rc;

use clientdesk_shared::{ClientRow, PanelConfig};
use tracing::{error, info, warn};
use web_sys::{Document, Element};
use yew::prelude::*;

mod components;
mod logging;
mod pages;
mod services;

use pages::clients::ClientsPage;

const MOUNT_ID: &str = "clients-app";
const ROWS_ID: &str = "client-rows";

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<PanelConfig>,
    rows: Rc<Vec<ClientRow>>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ClientsPage config={props.config.clone()} rows={props.rows.clone()} />
    }
}

/// Panel settings come from `data-*` attributes on the mount element,
/// e.g. `data-detail-url="/clients/{id}/details"`.
fn load_config(mount: Option<&Element>) -> PanelConfig {
    match mount {
        Some(el) => PanelConfig::from_lookup(|key| el.get_attribute(&format!("data-{}", key))),
        None => PanelConfig::default(),
    }
}

/// Rows are embedded by the server as `<script id="client-rows" type="application/json">`.
fn load_rows(document: &Document) -> Vec<ClientRow> {
    let Some(text) = document
        .get_element_by_id(ROWS_ID)
        .and_then(|el| el.text_content())
    else {
        warn!(id = ROWS_ID, "client row data not found; client table is empty");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<ClientRow>>(&text) {
        Ok(rows) => rows,
        Err(e) => {
            error!(id = ROWS_ID, error = %e, "invalid client row data");
            Vec::new()
        }
    }
}

fn main() {
    logging::init();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("no document available");

    let mount = document.get_element_by_id(MOUNT_ID);
    let props = AppProps {
        config: Rc::new(load_config(mount.as_ref())),
        rows: Rc::new(load_rows(&document)),
    };
    info!(rows = props.rows.len(), "client panel loaded");

    match mount {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => {
            warn!(id = MOUNT_ID, "mount element not found; mounting on <body>");
            yew::Renderer::<App>::with_props(props).render()
        }
    };
}
