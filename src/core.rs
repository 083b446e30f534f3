//! Core RangeHaus functionality
//!
//! This module contains the main RangeHaus struct and its implementation,
//! coordinating the process-wide encode adapters and the shared decoder
//! registry that connections fall back to.

use std::any::Any;
use std::sync::{Arc, PoisonError, RwLock};

use crate::adapt::{AdapterRegistry, ToSqlLiteral};
use crate::builtin;
use crate::cast::BoundCast;
use crate::catalog::{resolve_range_oids, RangeTypeDescriptor};
use crate::connection::RangeConnection;
use crate::errors::RangeHausError;
use crate::registry::DecoderRegistry;
use crate::value::RangeFromBounds;

/// Main RangeHaus coordinator owning process-scope range type state.
///
/// Construction installs the built-in encode adapters; dropping the value
/// tears everything down, which keeps tests independent of each other.
pub struct RangeHaus {
    adapters: AdapterRegistry,
    shared_decoders: Arc<RwLock<DecoderRegistry>>,
}

impl RangeHaus {
    /// Create a coordinator with the built-in range types installed
    pub fn new() -> Self {
        let mut adapters = AdapterRegistry::new();
        builtin::register_default_adapters(&mut adapters);

        Self {
            adapters,
            shared_decoders: Arc::new(RwLock::new(DecoderRegistry::new())),
        }
    }

    /// Open a range-aware connection.
    ///
    /// The server version is checked and the built-in decode pipelines are
    /// bound at connection scope before the connection is handed back.
    pub async fn connect(&self, url: &str) -> Result<RangeConnection, RangeHausError> {
        RangeConnection::connect(url, Arc::clone(&self.shared_decoders)).await
    }

    /// Register a custom range type.
    ///
    /// Resolves the type's oids from the catalog, binds the decode pipeline
    /// for `R` at connection scope and installs the matching encode adapter
    /// process-wide. Registration is idempotent per type.
    pub async fn register_range_type<R>(
        &mut self,
        type_name: &str,
        conn: &mut RangeConnection,
    ) -> Result<RangeTypeDescriptor, RangeHausError>
    where
        R: RangeFromBounds + Send + Sync + 'static,
        R::Bound: BoundCast + ToSqlLiteral,
    {
        let descriptor = resolve_range_oids(conn.pg(), type_name).await?;

        conn.decoders_mut().bind::<R>(&descriptor);
        self.adapters.register::<R>(type_name);

        Ok(descriptor)
    }

    /// Bind a decode pipeline at process scope, visible to every connection
    /// created from this coordinator
    pub fn bind_shared<R>(&self, descriptor: &RangeTypeDescriptor)
    where
        R: RangeFromBounds + Send + Sync + 'static,
        R::Bound: BoundCast,
    {
        self.shared_decoders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .bind::<R>(descriptor);
    }

    /// Adapt a range value into the SQL fragment for its registered type.
    ///
    /// Fails with [`RangeHausError::Adaptation`] for values that are not
    /// registered range value types; no partial SQL is produced.
    pub fn adapt(&self, value: &dyn Any) -> Result<String, RangeHausError> {
        self.adapters.adapt(value)
    }

    /// The process-wide encode adapter registry
    pub fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    pub fn adapters_mut(&mut self) -> &mut AdapterRegistry {
        &mut self.adapters
    }
}

impl Default for RangeHaus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{DateRange, Int4Range};

    #[test]
    fn test_new_installs_builtin_adapters() {
        let haus = RangeHaus::new();

        let range = Int4Range::new(Some(1), Some(5), true, false);
        assert_eq!(haus.adapt(&range).unwrap(), "int4range(1, 5, '[)')");

        let empty = DateRange::empty();
        assert_eq!(haus.adapt(&empty).unwrap(), "'empty'::daterange");
    }

    #[test]
    fn test_adapt_rejects_non_range_value() {
        let haus = RangeHaus::new();

        assert!(matches!(
            haus.adapt(&42i32),
            Err(RangeHausError::Adaptation(_))
        ));
    }

    #[test]
    fn test_bind_shared_is_visible_through_the_shared_registry() {
        let haus = RangeHaus::new();
        let descriptor = RangeTypeDescriptor::new("my_schema.score_range", 70000, 23, 70001);

        haus.bind_shared::<Int4Range>(&descriptor);

        let decoders = haus.shared_decoders.read().unwrap();
        let range = decoders
            .decode_as::<Int4Range>(70000, Some("[0,100]"))
            .unwrap()
            .unwrap();
        assert_eq!(range, Int4Range::new(Some(0), Some(100), true, true));
    }
}
