//! Catalog resolution for range types
//!
//! This module resolves a named range type's oid triple from the PostgreSQL
//! catalog. The connection is only ever touched through [`CatalogAccess`],
//! which captures exactly what resolution needs: run the catalog query,
//! read the transaction status, and roll back.

use async_trait::async_trait;
use sqlx::postgres::types::Oid as PgOid;
use sqlx::PgConnection;

use crate::errors::RangeHausError;

/// Numeric identifier the PostgreSQL catalog uses for a type
pub type Oid = u32;

/// Catalog metadata for one range type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTypeDescriptor {
    /// Possibly schema-qualified range type name
    pub type_name: String,
    pub range_oid: Oid,
    pub subtype_oid: Oid,
    pub array_oid: Oid,
}

impl RangeTypeDescriptor {
    pub fn new(type_name: impl Into<String>, range_oid: Oid, subtype_oid: Oid, array_oid: Oid) -> Self {
        Self {
            type_name: type_name.into(),
            range_oid,
            subtype_oid,
            array_oid,
        }
    }
}

/// Connection transaction status as seen before and after the catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Idle,
    InTransaction,
}

/// Catalog query joining range, type and namespace metadata
const RANGE_OID_QUERY: &str = "\
    SELECT r.rngtypid, r.rngsubtype, t.typarray \
    FROM pg_range r \
        JOIN pg_type t ON t.oid = r.rngtypid \
        JOIN pg_namespace ns ON ns.oid = t.typnamespace \
    WHERE t.typname = $1 AND ns.nspname = $2";

/// The slice of connection behavior catalog resolution depends on
#[async_trait]
pub trait CatalogAccess {
    /// Run the catalog query for `type_name` in `schema`, fetching at most
    /// one oid triple
    async fn fetch_range_oids(
        &mut self,
        type_name: &str,
        schema: &str,
    ) -> Result<Option<(Oid, Oid, Oid)>, RangeHausError>;

    fn transaction_status(&self) -> TransactionStatus;

    /// Whether statements commit implicitly on this connection
    fn autocommit(&self) -> bool;

    async fn rollback(&mut self) -> Result<(), RangeHausError>;
}

#[async_trait]
impl CatalogAccess for PgConnection {
    async fn fetch_range_oids(
        &mut self,
        type_name: &str,
        schema: &str,
    ) -> Result<Option<(Oid, Oid, Oid)>, RangeHausError> {
        let row: Option<(PgOid, PgOid, PgOid)> = sqlx::query_as(RANGE_OID_QUERY)
            .bind(type_name)
            .bind(schema)
            .fetch_optional(&mut *self)
            .await?;

        Ok(row.map(|(range, subtype, array)| (range.0, subtype.0, array.0)))
    }

    // sqlx runs plain statements in implicit single-statement transactions,
    // so a bare PgConnection behaves like an autocommit connection here.
    fn transaction_status(&self) -> TransactionStatus {
        TransactionStatus::Idle
    }

    fn autocommit(&self) -> bool {
        true
    }

    async fn rollback(&mut self) -> Result<(), RangeHausError> {
        sqlx::query("ROLLBACK").execute(&mut *self).await?;
        Ok(())
    }
}

/// Resolve a range type's oid triple from the catalog.
///
/// `qualified_name` splits on its last `.` into schema and type name,
/// defaulting to the `public` schema. The connection's transaction status is
/// restored on every exit path: a failed query rolls back before the original
/// error is re-raised, and a successful query that left the connection inside
/// an implicit transaction is rolled back before the result is inspected.
pub async fn resolve_range_oids<C>(
    conn: &mut C,
    qualified_name: &str,
) -> Result<RangeTypeDescriptor, RangeHausError>
where
    C: CatalogAccess + Send,
{
    let (schema, type_name) = match qualified_name.rsplit_once('.') {
        Some((schema, name)) => (schema, name),
        None => ("public", qualified_name),
    };

    let status_before = conn.transaction_status();

    let row = match conn.fetch_range_oids(type_name, schema).await {
        Ok(row) => row,
        Err(err) => {
            if !conn.autocommit() {
                conn.rollback().await?;
            }
            return Err(err);
        }
    };

    // Restore the pre-call status if the read opened a transaction
    if status_before != TransactionStatus::InTransaction && !conn.autocommit() {
        conn.rollback().await?;
    }

    let (range_oid, subtype_oid, array_oid) =
        row.ok_or_else(|| RangeHausError::TypeNotFound(type_name.to_string()))?;

    crate::debug_log!(
        "resolved range type {} to oids ({}, {}, {})",
        qualified_name,
        range_oid,
        subtype_oid,
        array_oid
    );

    Ok(RangeTypeDescriptor::new(
        qualified_name,
        range_oid,
        subtype_oid,
        array_oid,
    ))
}
