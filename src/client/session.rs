//! Calendar session: snapshot, modal state, and mutation flows.
//!
//! Every mutation follows the same shape: run the conflict check against
//! the loaded snapshot, persist through the service, reload the snapshot
//! on success. A [`SessionError::Conflict`] is a business rejection
//! raised before the service is contacted; the UI surfaces it as a
//! notice (and reverts the visual move for a drag). All failures are
//! terminal for the triggering action; nothing retries.

use serde::Deserialize;
use thiserror::Error;

use super::service::EventService;
use crate::api::public::events::{
    CustomUnit, DEFAULT_CATEGORY_COLOR, Event, EventAttrs, EventPatch, Recurrence,
};
use crate::schedule::{EventTiming, Slot, StartMoment, TimedEntry, has_conflict};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Time conflict with another event")]
    Conflict,
    #[error("Title, date, and time are required")]
    IncompleteForm,
    #[error("No open form to submit")]
    NoOpenForm,
    #[error("Event not found: {0}")]
    UnknownEvent(String),
    #[error("Drop payload carries no usable start time")]
    UnusableDrop,
    #[error("Service error: {0}")]
    Service(#[from] anyhow::Error),
}

/// The form the modal binds its inputs to.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub recurrence: Recurrence,
    pub custom_frequency: Option<u32>,
    pub custom_unit: CustomUnit,
    pub category_color: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            time: String::new(),
            description: String::new(),
            recurrence: Recurrence::None,
            custom_frequency: None,
            custom_unit: CustomUnit::Days,
            category_color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

impl From<&Event> for EventForm {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            description: event.description.clone(),
            recurrence: event.recurrence,
            custom_frequency: event.custom_frequency,
            custom_unit: event.custom_unit,
            category_color: event.category_color.clone(),
        }
    }
}

impl EventForm {
    fn attrs(&self) -> EventAttrs {
        EventAttrs {
            title: self.title.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            description: self.description.clone(),
            recurrence: self.recurrence,
            custom_frequency: self.custom_frequency,
            custom_unit: self.custom_unit,
            category_color: self.category_color.clone(),
        }
    }

    fn patch(&self) -> EventPatch {
        EventPatch {
            title: Some(self.title.clone()),
            date: Some(self.date.clone()),
            time: Some(self.time.clone()),
            description: Some(self.description.clone()),
            recurrence: Some(self.recurrence),
            custom_frequency: self.custom_frequency,
            custom_unit: Some(self.custom_unit),
            category_color: Some(self.category_color.clone()),
        }
    }
}

/// Modal state machine. The form only exists while the modal is open.
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Adding {
        form: EventForm,
    },
    Editing {
        id: String,
        form: EventForm,
    },
}

/// Drag/drop callback payload from the calendar widget. The timing may
/// arrive in any of the widget's shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPayload {
    pub id: String,
    #[serde(default)]
    pub start_str: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub start: Option<StartMoment>,
}

impl DropPayload {
    pub fn timing(&self) -> EventTiming {
        EventTiming::from_parts(
            self.start_str.as_deref(),
            self.date.as_deref(),
            self.time.as_deref(),
            self.start.clone(),
        )
    }
}

pub struct CalendarSession<S> {
    service: S,
    events: Vec<Event>,
    occupancy: Vec<TimedEntry>,
    modal: ModalState,
}

impl<S: EventService> CalendarSession<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            events: Vec::new(),
            occupancy: Vec::new(),
            modal: ModalState::Closed,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// The open form, for the UI to bind inputs to. `None` while closed.
    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        match &mut self.modal {
            ModalState::Closed => None,
            ModalState::Adding { form } | ModalState::Editing { form, .. } => Some(form),
        }
    }

    /// Reload the full event list and rebuild the occupancy snapshot.
    /// The snapshot can be stale relative to concurrent edits from other
    /// clients until the next refresh.
    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        self.events = self.service.list_events().await?;
        self.occupancy = occupancy(&self.events);
        Ok(())
    }

    /// Open the add modal, prefilling the date from the clicked day.
    pub fn open_add(&mut self, prefill_date: Option<&str>) {
        let mut form = EventForm::default();
        if let Some(date) = prefill_date {
            form.date = date.to_string();
        }
        self.modal = ModalState::Adding { form };
    }

    /// Open the edit modal populated from the snapshot.
    pub fn open_edit(&mut self, id: &str) -> Result<(), SessionError> {
        let event = self
            .events
            .iter()
            .find(|ev| ev.id == id)
            .ok_or_else(|| SessionError::UnknownEvent(id.to_string()))?;
        self.modal = ModalState::Editing {
            id: id.to_string(),
            form: EventForm::from(event),
        };
        Ok(())
    }

    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Submit the open form: create when adding, update when editing.
    /// Rejected on conflict before the service is contacted.
    pub async fn submit(&mut self) -> Result<(), SessionError> {
        let (candidate_id, form) = match &self.modal {
            ModalState::Closed => return Err(SessionError::NoOpenForm),
            ModalState::Adding { form } => (None, form.clone()),
            ModalState::Editing { id, form } => (Some(id.clone()), form.clone()),
        };

        if form.title.is_empty() || form.date.is_empty() || form.time.is_empty() {
            return Err(SessionError::IncompleteForm);
        }

        let target = Slot::new(&form.date, &form.time);
        if has_conflict(candidate_id.as_deref(), &target, &self.occupancy) {
            return Err(SessionError::Conflict);
        }

        match candidate_id {
            None => {
                self.service.create_event(&form.attrs()).await?;
            }
            Some(id) => {
                self.service.update_event(&id, &form.patch()).await?;
            }
        }

        self.refresh().await?;
        self.close();
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), SessionError> {
        self.service.delete_event(id).await?;
        self.refresh().await?;
        self.close();
        Ok(())
    }

    /// Move an event to the slot it was dropped on. On any error the
    /// caller reverts the visual move. All non-timing fields are kept
    /// intact across the move.
    pub async fn drag_reschedule(&mut self, drop: &DropPayload) -> Result<(), SessionError> {
        let slot = drop
            .timing()
            .normalize()
            .ok_or(SessionError::UnusableDrop)?;

        if has_conflict(Some(drop.id.as_str()), &slot, &self.occupancy) {
            return Err(SessionError::Conflict);
        }

        let event = self
            .events
            .iter()
            .find(|ev| ev.id == drop.id)
            .ok_or_else(|| SessionError::UnknownEvent(drop.id.clone()))?;

        let patch = EventPatch {
            title: Some(event.title.clone()),
            date: Some(slot.date.clone()),
            time: Some(slot.time.clone()),
            description: Some(event.description.clone()),
            recurrence: Some(event.recurrence),
            custom_frequency: event.custom_frequency,
            custom_unit: Some(event.custom_unit),
            category_color: Some(event.category_color.clone()),
        };

        self.service.update_event(&drop.id, &patch).await?;
        self.refresh().await?;
        Ok(())
    }
}

/// Reduce the loaded events to the (id, slot) list the conflict check
/// reads. Store records carry separate date and time fields.
fn occupancy(events: &[Event]) -> Vec<TimedEntry> {
    events
        .iter()
        .map(|ev| TimedEntry {
            id: ev.id.clone(),
            slot: EventTiming::Fields {
                date: ev.date.clone(),
                time: ev.time.clone(),
            }
            .normalize(),
        })
        .collect()
}
