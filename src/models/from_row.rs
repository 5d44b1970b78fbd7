use rusqlite::types::Type;
use rusqlite::Row;

pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
struct UnknownVariant {
    kind: &'static str,
    value: String,
}

/// Read a text column and map it onto one of our enums.
pub fn enum_column<T>(
    row: &Row,
    column: &str,
    kind: &'static str,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let raw: String = row.get(column)?;
    parse(&raw).ok_or_else(|| {
        let index = row.as_ref().column_index(column).unwrap_or_default();
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(UnknownVariant { kind, value: raw }),
        )
    })
}
