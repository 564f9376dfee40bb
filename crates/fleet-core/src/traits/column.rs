//! Mapping from typed column keys to SQL identifiers.

/// A column key that can be rendered into SQL.
///
/// Implementations return fixed identifiers, never caller input, so the
/// result may be pushed into a query string verbatim.
pub trait SqlColumn: Copy + Send + Sync + 'static {
    /// Unquoted SQL column name.
    fn as_sql(&self) -> &'static str;
}
