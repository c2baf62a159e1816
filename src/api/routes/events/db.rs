//! Database queries for the events API
use anyhow::{Error, Result, anyhow};
use rusqlite::OptionalExtension;
use tokio_rusqlite::{Connection, params};

use super::public::{CustomUnit, Event, EventAttrs, EventPatch, Recurrence};

fn event_from_row(row: &rusqlite::Row) -> rusqlite::Result<Event> {
    let recurrence: String = row.get(5)?;
    let custom_unit: String = row.get(7)?;
    Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        description: row.get(4)?,
        recurrence: Recurrence::parse(&recurrence).unwrap_or_default(),
        custom_frequency: row.get(6)?,
        custom_unit: CustomUnit::parse(&custom_unit).unwrap_or_default(),
        category_color: row.get(8)?,
    })
}

const EVENT_COLUMNS: &str = r"
    id,
    title,
    date,
    time,
    description,
    recurrence,
    custom_frequency,
    custom_unit,
    category_color
";

/// Get all events from the database
pub async fn find_all_events(db: &Connection) -> Result<Vec<Event>, Error> {
    let events = db
        .call(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM event ORDER BY date, time",
                EVENT_COLUMNS
            ))?;
            let rows = stmt
                .query_map([], event_from_row)?
                .filter_map(Result::ok)
                .collect::<Vec<Event>>();
            Ok(rows)
        })
        .await?;
    Ok(events)
}

/// Get a single event by ID from the database
pub async fn find_event_by_id(db: &Connection, id: String) -> Result<Option<Event>, Error> {
    let event = db
        .call(move |conn| {
            let result = conn
                .query_row(
                    &format!("SELECT {} FROM event WHERE id = ?1", EVENT_COLUMNS),
                    [id],
                    event_from_row,
                )
                .optional()?;
            Ok(result)
        })
        .await?;
    Ok(event)
}

/// Insert a new event under the given store-assigned ID
pub async fn insert_event(db: &Connection, id: String, attrs: EventAttrs) -> Result<Event, Error> {
    let event = Event {
        id,
        title: attrs.title,
        date: attrs.date,
        time: attrs.time,
        description: attrs.description,
        recurrence: attrs.recurrence,
        custom_frequency: attrs.custom_frequency,
        custom_unit: attrs.custom_unit,
        category_color: attrs.category_color,
    };
    let row = event.clone();
    db.call(move |conn| {
        conn.execute(
            r"
            INSERT INTO event (
                id, title, date, time, description,
                recurrence, custom_frequency, custom_unit, category_color
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ",
            params![
                row.id,
                row.title,
                row.date,
                row.time,
                row.description,
                row.recurrence.as_str(),
                row.custom_frequency,
                row.custom_unit.as_str(),
                row.category_color,
            ],
        )?;
        Ok(())
    })
    .await?;
    Ok(event)
}

/// Apply the provided fields to an event and return the updated record
pub async fn update_event(db: &Connection, id: String, patch: EventPatch) -> Result<Event, Error> {
    let row_id = id.clone();
    let affected = db
        .call(move |conn| {
            let count = conn.execute(
                r"
                UPDATE event SET
                    title = COALESCE(?2, title),
                    date = COALESCE(?3, date),
                    time = COALESCE(?4, time),
                    description = COALESCE(?5, description),
                    recurrence = COALESCE(?6, recurrence),
                    custom_frequency = COALESCE(?7, custom_frequency),
                    custom_unit = COALESCE(?8, custom_unit),
                    category_color = COALESCE(?9, category_color)
                WHERE id = ?1
                ",
                params![
                    row_id,
                    patch.title,
                    patch.date,
                    patch.time,
                    patch.description,
                    patch.recurrence.map(|r| r.as_str()),
                    patch.custom_frequency,
                    patch.custom_unit.map(|u| u.as_str()),
                    patch.category_color,
                ],
            )?;
            Ok(count)
        })
        .await?;

    if affected == 0 {
        return Err(anyhow!("No event with id {}", id));
    }

    find_event_by_id(db, id.clone())
        .await?
        .ok_or_else(|| anyhow!("No event with id {}", id))
}

/// Delete an event by ID
pub async fn delete_event(db: &Connection, id: String) -> Result<(), Error> {
    let row_id = id.clone();
    let affected = db
        .call(move |conn| {
            let count = conn.execute("DELETE FROM event WHERE id = ?1", [row_id])?;
            Ok(count)
        })
        .await?;

    if affected == 0 {
        return Err(anyhow!("No event with id {}", id));
    }
    Ok(())
}
