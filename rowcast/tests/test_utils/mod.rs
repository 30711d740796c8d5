use rowcast::{
    cursor::{Cursor, MemCursor},
    error::DbResult,
    ty::{Column, PrimitiveType},
    value::Value,
};

/// Sets up tracing subscriber.
#[allow(dead_code)]
pub fn setup_tracing(level: Option<&str>) {
    use tracing_subscriber::{
        fmt::{format::FmtSpan, layer},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    };

    let filter_layer = level
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::try_from_default_env().unwrap_or("warn".into()));
    let fmt_layer = layer()
        .with_test_writer()
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Several tests in the same binary may try to install it.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

/// The `(id int, name text)` test result, with the given rows.
#[allow(dead_code)]
pub fn sample_cursor(rows: &[(i32, &str)]) -> MemCursor {
    MemCursor::new(
        vec![
            Column::new("id", PrimitiveType::Int),
            Column::new("name", PrimitiveType::Text),
        ],
        rows.iter()
            .map(|&(id, name)| vec![Value::Int(id), Value::Text(name.into())])
            .collect(),
    )
    .unwrap()
}

/// A cursor wrapper recording every call made to it.
#[allow(dead_code)]
pub struct RecordingCursor<C> {
    inner: C,
    pub calls: Vec<String>,
}

#[allow(dead_code)]
impl<C: Cursor> RecordingCursor<C> {
    pub fn new(inner: C) -> Self {
        RecordingCursor {
            inner,
            calls: Vec::new(),
        }
    }

    /// Number of `advance` calls so far.
    pub fn advances(&self) -> usize {
        self.calls.iter().filter(|call| *call == "advance").count()
    }
}

impl<C: Cursor> Cursor for RecordingCursor<C> {
    fn advance(&mut self) -> DbResult<bool> {
        self.calls.push("advance".into());
        self.inner.advance()
    }

    fn get(&mut self, index: usize) -> DbResult<Value> {
        self.calls.push(format!("get({index})"));
        self.inner.get(index)
    }

    fn get_by_name(&mut self, name: &str) -> DbResult<Value> {
        self.calls.push(format!("get_by_name({name})"));
        self.inner.get_by_name(name)
    }

    fn column_index(&mut self, name: &str) -> DbResult<usize> {
        self.calls.push(format!("column_index({name})"));
        self.inner.column_index(name)
    }

    fn get_float(&mut self, index: usize) -> DbResult<f32> {
        self.calls.push(format!("get_float({index})"));
        self.inner.get_float(index)
    }

    fn get_double(&mut self, index: usize) -> DbResult<f64> {
        self.calls.push(format!("get_double({index})"));
        self.inner.get_double(index)
    }

    fn get_int(&mut self, index: usize) -> DbResult<i32> {
        self.calls.push(format!("get_int({index})"));
        self.inner.get_int(index)
    }
}
