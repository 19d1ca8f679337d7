use todolist_core::{next_todo_id, Todo, TodoValidationError};

#[test]
fn new_sets_defaults() {
    let todo = Todo::new(42, "buy milk").unwrap();

    assert_eq!(todo.id, 42);
    assert_eq!(todo.name, "buy milk");
    assert!(!todo.done);
}

#[test]
fn new_trims_surrounding_whitespace() {
    let todo = Todo::new(1, "\t walk the dog \n").unwrap();
    assert_eq!(todo.name, "walk the dog");
}

#[test]
fn new_rejects_empty_and_whitespace_only_names() {
    assert_eq!(Todo::new(1, "").unwrap_err(), TodoValidationError::EmptyName);
    assert_eq!(
        Todo::new(1, "   ").unwrap_err(),
        TodoValidationError::EmptyName
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut todo = Todo::new(1_700_000_000_000, "ship release").unwrap();
    todo.done = true;

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], 1_700_000_000_000_i64);
    assert_eq!(json["name"], "ship release");
    assert_eq!(json["done"], true);

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn deserialize_rejects_empty_name() {
    let value = serde_json::json!({ "id": 1, "name": "  ", "done": false });
    let err = serde_json::from_value::<Todo>(value).unwrap_err();
    assert!(
        err.to_string().contains("non-empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_accepts_original_app_document() {
    // Document shape written by the original mobile app; compatibility with
    // already-persisted slots must not regress.
    let raw = r#"[{"id":1,"name":"buy milk","done":false}]"#;
    let todos: Vec<Todo> = serde_json::from_str(raw).unwrap();

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[0].name, "buy milk");
    assert!(!todos[0].done);
}

#[test]
fn next_id_is_strictly_greater_than_every_existing_id() {
    let existing = vec![
        Todo::new(10, "a").unwrap(),
        Todo::new(30, "b").unwrap(),
        Todo::new(20, "c").unwrap(),
    ];

    let id = next_todo_id(&existing);
    assert!(existing.iter().all(|todo| id > todo.id));
}

#[test]
fn next_id_outruns_the_clock_when_list_holds_future_ids() {
    let future_id = i64::MAX - 10;
    let existing = vec![Todo::new(future_id, "from the future").unwrap()];

    assert_eq!(next_todo_id(&existing), future_id + 1);
}

#[test]
fn two_immediate_appends_never_collide() {
    let mut todos = Vec::new();
    let first = next_todo_id(&todos);
    todos.push(Todo::new(first, "first").unwrap());
    let second = next_todo_id(&todos);

    assert!(second > first);
}
