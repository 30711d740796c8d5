use std::io;

use rowcast::{
    cursor::{Cursor, MemCursor},
    error::{DbResult, Error},
    handler::{ColumnListHandler, ColumnRef, ResultSetHandler, ScalarHandler},
    ty::{Column, PrimitiveType},
    value::Value,
};

mod test_utils;

use test_utils::{sample_cursor, RecordingCursor};

#[test]
fn test_first_column_by_default() -> DbResult<()> {
    test_utils::setup_tracing(None);

    let mut cursor = sample_cursor(&[(1, "a")]);
    let value = ScalarHandler::<Value>::new().handle(&mut cursor)?;
    assert_eq!(value, Some(Value::Int(1)));

    let mut cursor = sample_cursor(&[(1, "a")]);
    let id = ScalarHandler::<i32>::new().handle(&mut cursor)?;
    assert_eq!(id, Some(1));

    Ok(())
}

#[test]
fn test_named_column() -> DbResult<()> {
    let mut cursor = sample_cursor(&[(1, "a")]);
    let name = ScalarHandler::<String>::with_name("name").handle(&mut cursor)?;
    assert_eq!(name.as_deref(), Some("a"));

    // Names are resolved by the cursor, case-insensitively.
    let mut cursor = sample_cursor(&[(1, "a")]);
    let name = ScalarHandler::<String>::with_name("NaMe").handle(&mut cursor)?;
    assert_eq!(name.as_deref(), Some("a"));

    Ok(())
}

#[test]
fn test_indexed_column() -> DbResult<()> {
    let mut cursor = sample_cursor(&[(7, "seven"), (8, "eight")]);
    let name = ScalarHandler::<String>::with_index(2).handle(&mut cursor)?;
    assert_eq!(name.as_deref(), Some("seven"));
    Ok(())
}

#[test]
fn test_empty_cursor_is_absent() -> DbResult<()> {
    let handlers = [
        ScalarHandler::<Value>::new(),
        ScalarHandler::with_index(2),
        ScalarHandler::with_index(42),
        ScalarHandler::with_name("name"),
        ScalarHandler::with_name("missing"),
    ];

    for handler in &handlers {
        let mut cursor = sample_cursor(&[]);
        assert_eq!(handler.handle(&mut cursor)?, None, "for `{handler:?}`");
    }

    Ok(())
}

#[test]
fn test_advances_once() -> DbResult<()> {
    let handlers = [
        ScalarHandler::<Value>::new(),
        ScalarHandler::with_name("name"),
    ];

    for handler in &handlers {
        let mut cursor = RecordingCursor::new(sample_cursor(&[(1, "a"), (2, "b"), (3, "c")]));
        handler.handle(&mut cursor)?;
        assert_eq!(cursor.advances(), 1);
    }

    let mut cursor = RecordingCursor::new(sample_cursor(&[(1, "a")]));
    ScalarHandler::<Value>::with_name("name").handle(&mut cursor)?;
    assert_eq!(cursor.calls, ["advance", "get_by_name(name)"]);

    let mut cursor = RecordingCursor::new(sample_cursor(&[(1, "a")]));
    ScalarHandler::<Value>::with_index(2).handle(&mut cursor)?;
    assert_eq!(cursor.calls, ["advance", "get(2)"]);

    let mut cursor = RecordingCursor::new(sample_cursor(&[]));
    ScalarHandler::<Value>::new().handle(&mut cursor)?;
    assert_eq!(cursor.calls, ["advance"]);

    Ok(())
}

#[test]
fn test_remaining_rows_left_to_caller() -> DbResult<()> {
    let mut cursor = sample_cursor(&[(1, "a"), (2, "b"), (3, "c")]);
    let handler = ScalarHandler::<i32>::new();
    assert_eq!(handler.handle(&mut cursor)?, Some(1));
    assert!(!cursor.is_closed());

    let rest = ColumnListHandler::<String>::with_name("name").handle(&mut cursor)?;
    assert_eq!(rest, ["b", "c"]);

    cursor.close();
    Ok(())
}

#[test]
fn test_errors_are_propagated() {
    let mut cursor = sample_cursor(&[(1, "a")]);
    let err = ScalarHandler::<Value>::with_name("age")
        .handle(&mut cursor)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownColumn(name) if name == "age"));

    let mut cursor = sample_cursor(&[(1, "a")]);
    let err = ScalarHandler::<f32>::new().handle(&mut cursor).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "float",
            ..
        }
    ));
    assert_eq!(err.to_string(), "type mismatch: expected `float`, but found `int`");
}

#[test]
fn test_nullable_scalar() -> DbResult<()> {
    let columns = vec![Column::new("total", PrimitiveType::BigInt)];

    let mut cursor = MemCursor::new(columns.clone(), vec![vec![Value::Null]])?;
    let total = ScalarHandler::<Option<i64>>::new().handle(&mut cursor)?;
    assert_eq!(total, Some(None));

    let mut cursor = MemCursor::new(columns.clone(), vec![vec![Value::BigInt(-3)]])?;
    let total = ScalarHandler::<Option<i64>>::new().handle(&mut cursor)?;
    assert_eq!(total, Some(Some(-3)));

    let mut cursor = MemCursor::new(columns, vec![vec![Value::Null]])?;
    let err = ScalarHandler::<i64>::new().handle(&mut cursor).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));

    Ok(())
}

#[test]
fn test_shared_between_threads() {
    let handler = ScalarHandler::<String>::from_ref(ColumnRef::from("name"));

    std::thread::scope(|s| {
        for i in 0..4 {
            let handler = &handler;
            s.spawn(move || {
                let name = format!("row-{i}");
                let mut cursor = sample_cursor(&[(i, name.as_str())]);
                assert_eq!(handler.handle(&mut cursor).unwrap(), Some(name));
            });
        }
    });
}

/// A cursor whose connection is gone.
struct DisconnectedCursor;

impl Cursor for DisconnectedCursor {
    fn advance(&mut self) -> DbResult<bool> {
        Err(disconnected())
    }

    fn get(&mut self, _index: usize) -> DbResult<Value> {
        Err(disconnected())
    }

    fn get_by_name(&mut self, _name: &str) -> DbResult<Value> {
        Err(disconnected())
    }

    fn column_index(&mut self, _name: &str) -> DbResult<usize> {
        Err(disconnected())
    }
}

fn disconnected() -> Error {
    let err = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer");
    Error::Driver(Box::new(err))
}

#[test]
fn test_driver_errors_are_propagated() {
    let err = ScalarHandler::<Value>::new()
        .handle(&mut DisconnectedCursor)
        .unwrap_err();
    let source = match err {
        Error::Driver(source) => source,
        other => panic!("unexpected error: {other:?}"),
    };
    let source = source.downcast::<io::Error>().unwrap();
    assert_eq!(source.kind(), io::ErrorKind::ConnectionReset);

    let err = ColumnListHandler::<i32>::new()
        .handle(&mut DisconnectedCursor)
        .unwrap_err();
    assert_eq!(err.to_string(), "driver error: connection reset by peer");
}
