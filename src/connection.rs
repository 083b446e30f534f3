//! Range-aware connection wrapper
//!
//! [`RangeConnection`] wraps a [`sqlx::PgConnection`] together with the
//! connection-scope decoder registry. Decode lookups fall back from the
//! connection scope to the shared process scope.

use std::sync::{Arc, PoisonError, RwLock};

use sqlx::{Connection, PgConnection};

use crate::builtin;
use crate::catalog::Oid;
use crate::errors::RangeHausError;
use crate::registry::DecoderRegistry;

/// Range types were introduced with PostgreSQL 9.2
const MIN_SERVER_VERSION: i32 = 90200;

/// A PostgreSQL connection with range decoding attached
pub struct RangeConnection {
    conn: PgConnection,
    decoders: DecoderRegistry,
    shared: Arc<RwLock<DecoderRegistry>>,
}

impl RangeConnection {
    /// Open a connection, verify the server supports range types and bind
    /// the built-in decode pipelines at connection scope.
    ///
    /// The version check runs before any registration; servers older than
    /// 9.2 fail with [`RangeHausError::UnsupportedServerVersion`].
    pub(crate) async fn connect(
        url: &str,
        shared: Arc<RwLock<DecoderRegistry>>,
    ) -> Result<Self, RangeHausError> {
        let mut conn = PgConnection::connect(url).await?;

        let version = server_version_num(&mut conn).await?;
        if version < MIN_SERVER_VERSION {
            return Err(RangeHausError::UnsupportedServerVersion(version));
        }

        let mut decoders = DecoderRegistry::new();
        builtin::bind_defaults(&mut decoders);

        crate::debug_log!("range decoding ready, server version {}", version);

        Ok(Self {
            conn,
            decoders,
            shared,
        })
    }

    /// Direct access to the underlying driver connection
    pub fn pg(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    /// The connection-scope decoder registry
    pub fn decoders(&self) -> &DecoderRegistry {
        &self.decoders
    }

    pub fn decoders_mut(&mut self) -> &mut DecoderRegistry {
        &mut self.decoders
    }

    /// Decode a range column fetched as text.
    ///
    /// `text` is the raw column value; a SQL NULL decodes to `None`.
    pub fn decode_range<R: 'static>(
        &self,
        oid: Oid,
        text: Option<&str>,
    ) -> Result<Option<R>, RangeHausError> {
        if self.decoders.contains(oid) {
            return self.decoders.decode_as(oid, text);
        }

        self.read_shared().decode_as(oid, text)
    }

    /// Decode an array-of-range column fetched as text
    pub fn decode_range_array<R: 'static>(
        &self,
        oid: Oid,
        text: Option<&str>,
    ) -> Result<Option<Vec<Option<R>>>, RangeHausError> {
        if self.decoders.contains(oid) {
            return self.decoders.decode_array_as(oid, text);
        }

        self.read_shared().decode_array_as(oid, text)
    }

    fn read_shared(&self) -> std::sync::RwLockReadGuard<'_, DecoderRegistry> {
        // The lock is only ever held for map access
        self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Close the underlying connection cleanly
    pub async fn close(self) -> Result<(), RangeHausError> {
        self.conn.close().await?;
        Ok(())
    }
}

async fn server_version_num(conn: &mut PgConnection) -> Result<i32, RangeHausError> {
    let raw: String = sqlx::query_scalar("SHOW server_version_num")
        .fetch_one(&mut *conn)
        .await?;

    Ok(raw.trim().parse().unwrap_or(0))
}
