use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::errors::{DatabaseError, Error};
use centime_core::instruments::{
    Instrument, InstrumentRepositoryTrait, InstrumentUpdate, NewInstrument,
};
use centime_core::Result;

use super::model::InstrumentDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::instruments;

fn instrument_not_found(instrument_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Instrument {} not found",
        instrument_id
    )))
}

/// Diesel-backed instrument repository.
pub struct InstrumentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InstrumentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        InstrumentRepository { pool, writer }
    }
}

#[async_trait]
impl InstrumentRepositoryTrait for InstrumentRepository {
    async fn create(&self, owner: &str, new_instrument: NewInstrument) -> Result<Instrument> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Instrument> {
                let now = Utc::now().naive_utc();
                let row = InstrumentDB {
                    id: Uuid::new_v4().to_string(),
                    owner,
                    symbol: new_instrument.symbol.trim().to_uppercase(),
                    name: new_instrument.name,
                    currency: new_instrument.currency,
                    annual_fee_percent: new_instrument.annual_fee_percent.to_string(),
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(instruments::table)
                    .values(&row)
                    .returning(InstrumentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Instrument::from(inserted))
            })
            .await
    }

    async fn update(&self, owner: &str, update: InstrumentUpdate) -> Result<Instrument> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Instrument> {
                let updated = diesel::update(
                    instruments::table
                        .filter(instruments::id.eq(&update.id))
                        .filter(instruments::owner.eq(&owner)),
                )
                .set((
                    instruments::symbol.eq(update.symbol.trim().to_uppercase()),
                    instruments::name.eq(&update.name),
                    instruments::annual_fee_percent.eq(update.annual_fee_percent.to_string()),
                    instruments::updated_at.eq(Utc::now().naive_utc()),
                ))
                .returning(InstrumentDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Instrument::from(updated))
            })
            .await
    }

    async fn delete(&self, owner: &str, instrument_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let instrument_id = instrument_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Transactions and quotes go with the instrument via
                // ON DELETE CASCADE.
                let deleted = diesel::delete(
                    instruments::table
                        .filter(instruments::id.eq(&instrument_id))
                        .filter(instruments::owner.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(instrument_not_found(&instrument_id));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, owner: &str, instrument_id: &str) -> Result<Instrument> {
        let mut conn = get_connection(&self.pool)?;
        let row = instruments::table
            .filter(instruments::id.eq(instrument_id))
            .filter(instruments::owner.eq(owner))
            .first::<InstrumentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| instrument_not_found(instrument_id))?;
        Ok(Instrument::from(row))
    }

    fn list(&self, owner: &str) -> Result<Vec<Instrument>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = instruments::table
            .filter(instruments::owner.eq(owner))
            .order(instruments::symbol.asc())
            .load::<InstrumentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Instrument::from).collect())
    }
}
