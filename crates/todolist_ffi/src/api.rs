//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the single-screen UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are envelopes with stable meaning.

use std::path::PathBuf;
use std::sync::OnceLock;
use todolist_core::db::open_db;
use todolist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SqliteKvStore, TodoService, TodoStore,
};

/// Storage key of the single persisted list; matches the slot written by
/// earlier versions of the app.
const TASKS_SLOT_KEY: &str = "@tasks_key";
const TODO_DB_FILE_NAME: &str = "todolist.sqlite3";
static TODO_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One list row as rendered by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemView {
    /// Stable item id.
    pub id: i64,
    /// Display text.
    pub name: String,
    /// Completion flag; drives the strikethrough style.
    pub done: bool,
}

/// Response envelope for the list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    /// Items in list order (empty on failure).
    pub items: Vec<TodoItemView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether the operation ran without a storage failure.
    pub ok: bool,
    /// Id of the item the operation created or touched, when any.
    pub id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, id: Option<i64>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Returns the persisted todo list in order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - On storage failure returns an empty list with a diagnostic message.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    match with_todo_service(|service| {
        Ok(service
            .todos()
            .iter()
            .map(|todo| TodoItemView {
                id: todo.id,
                name: todo.name.clone(),
                done: todo.done,
            })
            .collect::<Vec<_>>())
    }) {
        Ok(items) => {
            let message = if items.is_empty() {
                "No tasks.".to_string()
            } else {
                format!("{} task(s).", items.len())
            };
            TodoListResponse { items, message }
        }
        Err(err) => TodoListResponse {
            items: Vec::new(),
            message: format!("todo_list failed: {err}"),
        },
    }
}

/// Appends a task from the entry field.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Empty or whitespace-only input is a no-op reported with `ok = true`
///   and no id, mirroring the screen-level guard.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(name: String) -> TodoActionResponse {
    match with_todo_service(|service| Ok(service.append(&name))) {
        Ok(Some(id)) => TodoActionResponse::success("Task saved.", Some(id)),
        Ok(None) => TodoActionResponse::success("Empty task ignored.", None),
        Err(err) => TodoActionResponse::failure(format!("todo_add failed: {err}")),
    }
}

/// Toggles the completion flag of one task.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown ids report failure without mutating anything.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: i64) -> TodoActionResponse {
    match with_todo_service(|service| Ok(service.toggle(id))) {
        Ok(true) => TodoActionResponse::success("Task toggled.", Some(id)),
        Ok(false) => TodoActionResponse::failure(format!("no task with id {id}")),
        Err(err) => TodoActionResponse::failure(format!("todo_toggle failed: {err}")),
    }
}

fn resolve_todo_db_path() -> PathBuf {
    TODO_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TODOLIST_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(TODO_DB_FILE_NAME)
        })
        .clone()
}

fn with_todo_service<T>(
    f: impl FnOnce(&mut TodoService<SqliteKvStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_todo_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("todo DB open failed: {err}"))?;
    let kv = SqliteKvStore::try_new(&conn).map_err(|err| format!("todo KV init failed: {err}"))?;
    let mut service = TodoService::new(TodoStore::new(kv, TASKS_SLOT_KEY, Vec::new()));
    service.load().map_err(|err| err.to_string())?;
    f(&mut service)
}
