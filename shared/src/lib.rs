//! Client detail panel and client table logic, independent of the DOM.

pub mod badge;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod panel;
pub mod view;

pub use badge::BadgeStyle;
pub use config::PanelConfig;
pub use error::LoadError;
pub use filter::{FilterOutcome, RowFilter};
pub use format::CurrencyFormat;
pub use models::{ClientDetail, ClientId, ClientRow, InvoiceLine, PaymentLine};
pub use panel::{LoadOutcome, LoadSequence, LoadTicket, PanelState, PanelStatus};
pub use view::{ClientDetailView, InvoiceRow, PaymentRow, TableBody};

#[cfg(test)]
mod tests;
