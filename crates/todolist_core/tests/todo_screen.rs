use todolist_core::db::open_db_in_memory;
use todolist_core::{LoadOutcome, SqliteKvStore, Todo, TodoScreen, TodoService, TodoStore};

const TASKS_KEY: &str = "@tasks_key";

fn screen_over(conn: &rusqlite::Connection) -> TodoScreen<SqliteKvStore<'_>> {
    let kv = SqliteKvStore::try_new(conn).unwrap();
    let store = TodoStore::new(kv, TASKS_KEY, Vec::new());
    TodoScreen::new(TodoService::new(store))
}

#[test]
fn append_preserves_order_and_assigns_fresh_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen_over(&conn);
    screen.load().unwrap();

    screen.set_input("buy milk");
    let first = screen.submit().unwrap();
    screen.set_input("walk the dog");
    let second = screen.submit().unwrap();

    let rows = screen.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "buy milk");
    assert_eq!(rows[1].name, "walk the dog");
    assert!(rows.iter().all(|row| !row.done));
    assert_ne!(first, second);
    assert!(second > first);
}

#[test]
fn empty_and_whitespace_submissions_are_noops() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen_over(&conn);
    screen.load().unwrap();

    screen.set_input("");
    assert_eq!(screen.submit(), None);

    screen.set_input("   \t  ");
    assert_eq!(screen.submit(), None);
    // Failed submit keeps the entry text for the user to fix.
    assert_eq!(screen.input(), "   \t  ");

    assert!(screen.rows().is_empty());
}

#[test]
fn successful_submit_clears_the_entry_text() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen_over(&conn);
    screen.load().unwrap();

    screen.set_input("  water plants  ");
    let id = screen.submit();
    assert!(id.is_some());
    assert_eq!(screen.input(), "");
    assert_eq!(screen.rows()[0].name, "water plants");
}

#[test]
fn toggle_flips_exactly_one_row() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen_over(&conn);
    screen.load().unwrap();

    screen.set_input("a");
    let a = screen.submit().unwrap();
    screen.set_input("b");
    let b = screen.submit().unwrap();

    assert!(screen.toggle(a));

    let rows = screen.rows();
    assert!(rows.iter().find(|row| row.id == a).unwrap().done);
    assert!(!rows.iter().find(|row| row.id == b).unwrap().done);
}

#[test]
fn toggle_twice_restores_the_original_list() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen_over(&conn);
    screen.load().unwrap();

    screen.set_input("buy milk");
    let id = screen.submit().unwrap();
    let before = screen.rows();

    assert!(screen.toggle(id));
    assert!(screen.toggle(id));

    assert_eq!(screen.rows(), before);
}

#[test]
fn toggle_of_unknown_id_mutates_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut screen = screen_over(&conn);
    screen.load().unwrap();

    screen.set_input("keep me");
    screen.submit().unwrap();
    let before = screen.rows();

    assert!(!screen.toggle(-1));
    assert_eq!(screen.rows(), before);
}

#[test]
fn toggled_state_survives_remount() {
    let conn = open_db_in_memory().unwrap();

    let id = {
        let mut screen = screen_over(&conn);
        screen.load().unwrap();
        screen.set_input("persisted");
        let id = screen.submit().unwrap();
        assert!(screen.toggle(id));
        id
    };

    // A second mount sees the toggled item from durable storage.
    let mut screen = screen_over(&conn);
    assert_eq!(screen.load().unwrap(), LoadOutcome::Loaded);
    let rows = screen.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert!(rows[0].done);
}

#[test]
fn service_append_returns_item_visible_in_list() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::try_new(&conn).unwrap();
    let mut service = TodoService::new(TodoStore::new(kv, TASKS_KEY, Vec::new()));
    service.load().unwrap();

    let id = service.append("from service").unwrap();
    let expected = Todo::new(id, "from service").unwrap();
    assert_eq!(service.todos(), std::slice::from_ref(&expected));
}
