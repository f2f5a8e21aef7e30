use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

use centime_core::market_data::{NewQuote, Quote, QuoteRepositoryTrait};
use centime_core::Result;

use super::model::QuoteDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::quotes;
use crate::utils::{parse_decimal_tolerant, DATE_FORMAT};

/// Rows per batched REPLACE INTO, kept well under SQLite's parameter limit
/// (3 bind parameters per row).
const UPSERT_CHUNK_ROWS: usize = 250;

/// Diesel-backed quote repository. Ownership is not checked here; the
/// calling service resolves the instrument first.
pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        QuoteRepository { pool, writer }
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    async fn upsert_batch(&self, instrument_id: &str, new_quotes: Vec<NewQuote>) -> Result<usize> {
        let instrument_id = instrument_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let rows: Vec<QuoteDB> = new_quotes
                    .into_iter()
                    .map(|q| QuoteDB {
                        instrument_id: instrument_id.clone(),
                        date: q.date.format(DATE_FORMAT).to_string(),
                        close: q.close.to_string(),
                    })
                    .collect();
                let mut affected = 0;
                for chunk in rows.chunks(UPSERT_CHUNK_ROWS) {
                    affected += diesel::replace_into(quotes::table)
                        .values(chunk)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected)
            })
            .await
    }

    fn list_range(
        &self,
        instrument_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        // ISO dates compare lexicographically, so TEXT BETWEEN is correct.
        let rows = quotes::table
            .filter(quotes::instrument_id.eq(instrument_id))
            .filter(quotes::date.ge(from.format(DATE_FORMAT).to_string()))
            .filter(quotes::date.le(to.format(DATE_FORMAT).to_string()))
            .order(quotes::date.asc())
            .load::<QuoteDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Quote::from).collect())
    }

    fn latest_close(&self, instrument_id: &str) -> Result<Option<Decimal>> {
        let mut conn = get_connection(&self.pool)?;
        let close = quotes::table
            .filter(quotes::instrument_id.eq(instrument_id))
            .order(quotes::date.desc())
            .select(quotes::close)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(close.map(|c| parse_decimal_tolerant(&c, "close")))
    }
}
