//! Encode direction: range values to SQL fragments
//!
//! A range value is sent to the server as a constructor-call expression
//! (`int4range(1, 5, '[)')`) or as `'empty'::int4range`. The fragment is
//! emitted verbatim as pre-escaped SQL, so bound rendering goes through
//! [`ToSqlLiteral`] which owns all quoting decisions.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::RangeHausError;
use crate::value::RangeValue;

/// Render one bound value as a self-contained SQL literal
pub trait ToSqlLiteral {
    fn to_sql_literal(&self) -> String;
}

impl ToSqlLiteral for i32 {
    fn to_sql_literal(&self) -> String {
        self.to_string()
    }
}

impl ToSqlLiteral for i64 {
    fn to_sql_literal(&self) -> String {
        self.to_string()
    }
}

impl ToSqlLiteral for f64 {
    fn to_sql_literal(&self) -> String {
        self.to_string()
    }
}

impl ToSqlLiteral for String {
    fn to_sql_literal(&self) -> String {
        self.as_str().to_sql_literal()
    }
}

impl ToSqlLiteral for &str {
    fn to_sql_literal(&self) -> String {
        // Standard SQL string quoting: double any embedded single quote
        format!("'{}'", self.replace('\'', "''"))
    }
}

impl ToSqlLiteral for NaiveDate {
    fn to_sql_literal(&self) -> String {
        format!("'{}'", self.format("%Y-%m-%d"))
    }
}

impl ToSqlLiteral for NaiveDateTime {
    fn to_sql_literal(&self) -> String {
        format!("'{}'", self.format("%Y-%m-%d %H:%M:%S%.f"))
    }
}

/// Render `range` as the SQL fragment for the range type `type_name`.
///
/// Infinite bounds render as `NULL`; the empty range uses cast syntax
/// instead of a constructor call.
pub fn format_range_literal<R>(type_name: &str, range: &R) -> String
where
    R: RangeValue,
    R::Bound: ToSqlLiteral,
{
    if range.is_empty() {
        return format!("'empty'::{type_name}");
    }

    let lower = match range.lower() {
        Some(bound) => bound.to_sql_literal(),
        None => "NULL".to_string(),
    };
    let upper = match range.upper() {
        Some(bound) => bound.to_sql_literal(),
        None => "NULL".to_string(),
    };
    let lower_flag = if range.lower_inc() { '[' } else { '(' };
    let upper_flag = if range.upper_inc() { ']' } else { ')' };

    format!("{type_name}({lower}, {upper}, '{lower_flag}{upper_flag}')")
}

type RangeAdapter = Arc<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

/// Process-wide registry of encode adapters, keyed by value type.
///
/// The registry replaces import-time global adapter registration with an
/// explicit handle: build it once during setup, drop it to tear down.
pub struct AdapterRegistry {
    adapters: HashMap<TypeId, (String, RangeAdapter)>,
}

impl AdapterRegistry {
    /// Create a registry with no adapters installed
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Register `R` as the value type for the range type `type_name`.
    ///
    /// Re-registering a value type overwrites the previous entry.
    pub fn register<R>(&mut self, type_name: impl Into<String>)
    where
        R: RangeValue + 'static,
        R::Bound: ToSqlLiteral,
    {
        let type_name = type_name.into();
        let render_name = type_name.clone();
        let adapter: RangeAdapter = Arc::new(move |value| {
            value
                .downcast_ref::<R>()
                .map(|range| format_range_literal(&render_name, range))
        });

        self.adapters.insert(TypeId::of::<R>(), (type_name, adapter));
    }

    /// Adapt `value` into its SQL fragment.
    ///
    /// Fails without producing any SQL when `value` is not a registered
    /// range value type.
    pub fn adapt(&self, value: &dyn Any) -> Result<String, RangeHausError> {
        let (_, adapter) = self
            .adapters
            .get(&value.type_id())
            .ok_or_else(|| RangeHausError::Adaptation(
                "value type is not registered as a range".to_string(),
            ))?;

        adapter(value).ok_or_else(|| {
            RangeHausError::Adaptation("registered adapter rejected the value".to_string())
        })
    }

    /// The range type name registered for the value type `R`, if any
    pub fn type_name_of<R: 'static>(&self) -> Option<&str> {
        self.adapters
            .get(&TypeId::of::<R>())
            .map(|(name, _)| name.as_str())
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
