//! Notes attached to log rows, plus free-standing general notes.
//!
//! Each log table has its own note table with a parent id column; general
//! notes have none. All six share the [`Note`] row shape and support the full
//! create/read/update/delete cycle, unlike the logs themselves.

use crate::client::GenericClient;
use crate::error::{DataError, DataResult};
use crate::model::Note;
use crate::repo::{
    get_statement, insert_statement, list_statement, soft_delete_statement, update_statement,
};
use crate::row::RowExt;
use crate::table::Table;
use mes_query::{Changes, Filter, Page, Statement};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Which note table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    StateLog,
    ProductionLog,
    CountLog,
    MeasurementLog,
    KpiLog,
    General,
}

impl NoteKind {
    pub const ALL: [NoteKind; 6] = [
        NoteKind::StateLog,
        NoteKind::ProductionLog,
        NoteKind::CountLog,
        NoteKind::MeasurementLog,
        NoteKind::KpiLog,
        NoteKind::General,
    ];

    pub fn table(self) -> Table {
        let name = match self {
            NoteKind::StateLog => "state_log_note",
            NoteKind::ProductionLog => "production_log_note",
            NoteKind::CountLog => "count_log_note",
            NoteKind::MeasurementLog => "measurement_log_note",
            NoteKind::KpiLog => "kpi_log_note",
            NoteKind::General => "general_note",
        };
        Table {
            name,
            key: &["note_id"],
            order_by: Some("created_at DESC"),
            label: "Note",
        }
    }

    /// Column referencing the parent log row; `None` for general notes.
    pub fn parent_column(self) -> Option<&'static str> {
        match self {
            NoteKind::StateLog => Some("state_log_id"),
            NoteKind::ProductionLog => Some("production_log_id"),
            NoteKind::CountLog => Some("count_log_id"),
            NoteKind::MeasurementLog => Some("measurement_log_id"),
            NoteKind::KpiLog => Some("kpi_log_id"),
            NoteKind::General => None,
        }
    }

    fn require_parent(self) -> DataResult<&'static str> {
        self.parent_column()
            .ok_or_else(|| DataError::validation("general notes are not attached to a log"))
    }
}

impl Note {
    /// Decode a row of `kind`'s table.
    pub fn from_row_for(kind: NoteKind, row: &Row) -> DataResult<Self> {
        let parent_id = match kind.parent_column() {
            Some(column) => Some(row.try_get_column(column)?),
            None => None,
        };
        Ok(Self {
            note_id: row.try_get_column("note_id")?,
            parent_id,
            note: row.try_get_column("note")?,
            created_by: row.try_get_column("created_by")?,
            created_at: row.try_get_column("created_at")?,
            updated_by: row.try_get_column("updated_by")?,
            updated_at: row.try_get_column("updated_at")?,
            removed: row.try_get_column("removed")?,
        })
    }
}

/// Create payload. `parent_id` must be set for log notes and absent for
/// general notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    #[serde(default)]
    pub parent_id: Option<i32>,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotePatch {
    pub note: Option<String>,
}

pub fn list_for_log_statement(kind: NoteKind, log_id: i32) -> DataResult<Statement> {
    let parent = kind.require_parent()?;
    list_statement(&kind.table(), Filter::new().eq(parent, log_id), Page::all())
}

pub fn list_general_statement(page: Page) -> DataResult<Statement> {
    list_statement(&NoteKind::General.table(), Filter::new(), page)
}

pub fn create_statement(kind: NoteKind, input: NewNote) -> DataResult<Statement> {
    let mut changes = Changes::new();
    match (kind.parent_column(), input.parent_id) {
        (Some(column), Some(id)) => {
            changes.insert(column, id);
        }
        (None, None) => {}
        (Some(column), None) => {
            return Err(DataError::validation(format!("{column} is required")));
        }
        (None, Some(_)) => {
            return Err(DataError::validation(
                "general notes are not attached to a log",
            ));
        }
    }
    changes.insert("note", input.note);
    insert_statement(&kind.table(), &changes)
}

/// Only the note text can change, and it must be non-empty.
pub fn update_statement_for(kind: NoteKind, note_id: i32, patch: NotePatch) -> DataResult<Statement> {
    let text = patch
        .note
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DataError::validation("Note text is required"))?;
    update_statement(&kind.table(), &note_id, &Changes::new().set("note", text))
}

/// Visible notes on one log row, newest first.
pub async fn list_for_log(
    client: &impl GenericClient,
    kind: NoteKind,
    log_id: i32,
) -> DataResult<Vec<Note>> {
    let stmt = list_for_log_statement(kind, log_id)?;
    decode_all(kind, client.query(stmt.sql(), &stmt.params_ref()).await?)
}

/// Visible general notes, newest first.
pub async fn list_general(client: &impl GenericClient, page: Page) -> DataResult<Vec<Note>> {
    let stmt = list_general_statement(page)?;
    decode_all(
        NoteKind::General,
        client.query(stmt.sql(), &stmt.params_ref()).await?,
    )
}

pub async fn get(client: &impl GenericClient, kind: NoteKind, note_id: i32) -> DataResult<Option<Note>> {
    let stmt = get_statement(&kind.table(), &note_id)?;
    client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .map(|row| Note::from_row_for(kind, &row))
        .transpose()
}

pub async fn create(client: &impl GenericClient, kind: NoteKind, input: NewNote) -> DataResult<Note> {
    let stmt = create_statement(kind, input)?;
    let row = client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .ok_or_else(|| DataError::not_found("Note insert returned no row"))?;
    Note::from_row_for(kind, &row)
}

pub async fn update(
    client: &impl GenericClient,
    kind: NoteKind,
    note_id: i32,
    patch: NotePatch,
) -> DataResult<Note> {
    let stmt = update_statement_for(kind, note_id, patch)?;
    let row = client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .ok_or_else(|| DataError::not_found(kind.table().not_found_message()))?;
    Note::from_row_for(kind, &row)
}

/// Soft-delete a note and return it.
pub async fn delete(client: &impl GenericClient, kind: NoteKind, note_id: i32) -> DataResult<Note> {
    let stmt = soft_delete_statement(&kind.table(), &note_id)?;
    let row = client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .ok_or_else(|| DataError::not_found(kind.table().not_deleted_message()))?;
    Note::from_row_for(kind, &row)
}

fn decode_all(kind: NoteKind, rows: Vec<Row>) -> DataResult<Vec<Note>> {
    rows.iter().map(|row| Note::from_row_for(kind, row)).collect()
}
