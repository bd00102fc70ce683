//! State of the client detail modal across overlapping loads.
//!
//! Each view action takes a [`LoadTicket`] before it fires its request. Only
//! the result carrying the newest ticket may touch the panel; older results
//! are dropped whether they succeeded or failed.

use tracing::{debug, warn};

use crate::config::PanelConfig;
use crate::error::LoadError;
use crate::models::ClientDetail;
use crate::view::ClientDetailView;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Allocates strictly increasing tickets.
#[derive(Debug, Default)]
pub struct LoadSequence {
    next: u64,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> LoadTicket {
        self.next += 1;
        LoadTicket(self.next)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Idle,
    Loading(String),
    Failed(String),
}

impl PanelStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            PanelStatus::Idle => None,
            PanelStatus::Loading(msg) | PanelStatus::Failed(msg) => Some(msg),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelStatus::Loading(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PanelStatus::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Failed,
    /// A newer load was started before this one finished.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    config: PanelConfig,
    latest: Option<LoadTicket>,
    status: PanelStatus,
    view: Option<ClientDetailView>,
    visible: bool,
}

impl PanelState {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            latest: None,
            status: PanelStatus::Idle,
            view: None,
            visible: false,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn status(&self) -> &PanelStatus {
        &self.status
    }

    pub fn view(&self) -> Option<&ClientDetailView> {
        self.view.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn latest(&self) -> Option<LoadTicket> {
        self.latest
    }

    /// Marks a load as in flight. Fields and modal visibility are left alone.
    pub fn begin(&mut self, ticket: LoadTicket) {
        if self.latest.is_some_and(|latest| ticket < latest) {
            debug!(ticket = ticket.value(), "ignoring begin for superseded load");
            return;
        }
        self.latest = Some(ticket);
        self.status = PanelStatus::Loading(self.config.loading_message.clone());
    }

    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        result: Result<ClientDetail, LoadError>,
    ) -> LoadOutcome {
        if self.latest != Some(ticket) {
            debug!(
                ticket = ticket.value(),
                latest = self.latest.map(|t| t.value()),
                "discarding stale client detail response"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(detail) => {
                self.view = Some(ClientDetailView::build(&detail, &self.config));
                self.status = PanelStatus::Idle;
                self.visible = true;
                LoadOutcome::Rendered
            }
            Err(e) => {
                warn!(code = %e.code(), error = %e, "error loading client details");
                self.status = PanelStatus::Failed(self.config.error_message.clone());
                LoadOutcome::Failed
            }
        }
    }

    /// Hides the modal and drops the record it showed.
    pub fn close(&mut self) {
        self.visible = false;
        self.view = None;
    }

    pub fn dismiss_status(&mut self) {
        self.status = PanelStatus::Idle;
    }
}
