//! SQL rendering of list queries.
//!
//! Column names are written from [`SqlColumn::as_sql`], which only yields
//! identifiers from the allow-listed column enums. Every value is a bound
//! parameter.

use sqlx::{Postgres, QueryBuilder};

use fleet_core::query::ListQuery;
use fleet_core::traits::SqlColumn;
use fleet_core::types::{FilterCondition, FilterValue, SortField};

/// `SELECT COUNT(*)` over the filtered rows of `table`.
pub fn count_query<C: SqlColumn>(
    table: &'static str,
    filters: &[FilterCondition<C>],
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {table}"));
    push_where(&mut builder, filters);
    builder
}

/// One ordered page of `table`.
pub fn select_query<C: SqlColumn>(
    table: &'static str,
    query: &ListQuery<C>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT * FROM {table}"));
    push_where(&mut builder, &query.filters);
    push_order(&mut builder, &query.order);
    builder
        .push(" LIMIT ")
        .push_bind(query.limit)
        .push(" OFFSET ")
        .push_bind(query.offset);
    builder
}

/// Escape `%`, `_` and `\` and wrap the text for a substring `ILIKE`.
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn push_where<C: SqlColumn>(builder: &mut QueryBuilder<'static, Postgres>, filters: &[FilterCondition<C>]) {
    for (i, filter) in filters.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });

        match filter {
            FilterCondition::Eq { column, value } => {
                builder.push(column.as_sql()).push(" = ");
                match value {
                    FilterValue::Integer(v) => builder.push_bind(*v),
                    FilterValue::Boolean(v) => builder.push_bind(*v),
                    FilterValue::Text(v) => builder.push_bind(v.clone()),
                };
            }
            FilterCondition::Contains { columns, needle } => {
                if columns.is_empty() {
                    builder.push("FALSE");
                    continue;
                }
                let pattern = like_pattern(needle);
                builder.push("(");
                for (j, column) in columns.iter().enumerate() {
                    if j > 0 {
                        builder.push(" OR ");
                    }
                    builder
                        .push(column.as_sql())
                        .push(" ILIKE ")
                        .push_bind(pattern.clone())
                        .push(" ESCAPE '\\'");
                }
                builder.push(")");
            }
        }
    }
}

fn push_order<C: SqlColumn>(builder: &mut QueryBuilder<'static, Postgres>, order: &[SortField<C>]) {
    for (i, term) in order.iter().enumerate() {
        builder.push(if i == 0 { " ORDER BY " } else { ", " });
        builder
            .push(term.column.as_sql())
            .push(" ")
            .push(term.direction.as_sql());
    }
}
