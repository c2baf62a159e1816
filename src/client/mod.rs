//! Client layer driven by the browser UI: the event service client and
//! the calendar session that orchestrates mutations.

pub mod service;
pub mod session;

pub use service::{EventService, HttpEventService};
pub use session::{CalendarSession, DropPayload, EventForm, ModalState, SessionError};
