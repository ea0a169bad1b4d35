//! Task store - SQLite persistence for the task list

mod error;
mod model;
mod schema;

pub use error::{Result, StoreError};
pub use model::{stamp_description, strip_timestamp, Task, STAMP_FORMAT};
pub use schema::{create_table_sql, ColumnType, TASKS_TABLE, TASK_COLUMNS};

use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// How long a statement waits on another process's file lock before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TaskStore {
    conn: Connection,
    path: PathBuf,
}

impl TaskStore {
    /// Opens (or creates) the database at `path` and ensures the tasks table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let open_err = |source: rusqlite::Error| StoreError::Open {
            path: path.clone(),
            source,
        };
        let conn = Connection::open(&path).map_err(open_err)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(open_err)?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(open_err)?;
        info!(path = %path.display(), "Database connection successful");

        conn.execute(&create_table_sql(), [])
            .map_err(StoreError::Schema)?;
        info!("Database initialized");

        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts a task and returns its id.
    pub fn create(&self, description: &str, completed: bool) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO tasks (description, completed, created_at) VALUES (?1, ?2, ?3)",
                params![description, completed, now()],
            )
            .map_err(|e| logged(StoreError::Save(e)))?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "Created task");
        Ok(id)
    }

    /// Sets the completion flag. Unknown ids are not an error.
    pub fn update(&self, id: i64, completed: bool) -> Result<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE tasks SET completed = ?1, updated_at = ?2 WHERE id = ?3",
                params![completed, now(), id],
            )
            .map_err(|e| logged(StoreError::Update(e)))?;
        debug!(id, completed, changed, "Updated task");
        Ok(())
    }

    /// Replaces the description. Unknown ids are not an error.
    pub fn update_description(&self, id: i64, description: &str) -> Result<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE tasks SET description = ?1, updated_at = ?2 WHERE id = ?3",
                params![description, now(), id],
            )
            .map_err(|e| logged(StoreError::Update(e)))?;
        debug!(id, changed, "Updated task description");
        Ok(())
    }

    /// Removes the row permanently. Unknown ids are not an error.
    pub fn delete(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .map_err(|e| logged(StoreError::Delete(e)))?;
        debug!(id, changed, "Deleted task");
        Ok(())
    }

    /// Every task in insertion order. Query failures are logged and yield an
    /// empty list.
    pub fn all(&self) -> Vec<Task> {
        match self.query_all() {
            Ok(tasks) => tasks,
            Err(e) => {
                error!("Failed to list tasks: {}", e);
                Vec::new()
            }
        }
    }

    fn query_all(&self) -> rusqlite::Result<Vec<Task>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            schema::column_list(),
            TASKS_TABLE
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for row in rows {
            match row {
                Ok(task) => tasks.push(task),
                Err(e) => warn!("Skipping unreadable task row: {}", e),
            }
        }
        Ok(tasks)
    }

    pub fn close(self) -> Result<()> {
        info!("Closing database");
        self.conn
            .close()
            .map_err(|(_, e)| logged(StoreError::Close(e)))
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        completed: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
        deleted_at: row.get(5)?,
    })
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn logged(err: StoreError) -> StoreError {
    error!("{}", err);
    err
}
