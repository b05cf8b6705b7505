//! Form controllers
//!
//! The two page controllers plus the small pieces they share: the option
//! populator and the stale-response ticket guard.

pub mod options;
pub mod spend_form;
pub mod tickets;
pub mod wonder_formset;

pub use spend_form::SpendFormController;
pub use tickets::{RequestTickets, Ticket};
pub use wonder_formset::WonderFormController;
