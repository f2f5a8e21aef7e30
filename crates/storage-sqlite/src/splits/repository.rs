use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use centime_core::errors::{DatabaseError, Error};
use centime_core::splits::{
    Interaction, InteractionRepositoryTrait, NewInteraction, NewSplitSheet, SplitSheet,
    SplitSheetRepositoryTrait,
};
use centime_core::Result;

use super::model::{InteractionDB, SplitSheetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{interactions, split_sheets};
use crate::utils::DATE_FORMAT;

fn sheet_not_found(sheet_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Sheet {} not found",
        sheet_id
    )))
}

fn interaction_not_found(interaction_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "Interaction {} not found",
        interaction_id
    )))
}

/// Diesel-backed sheet repository.
pub struct SplitSheetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SplitSheetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SplitSheetRepository { pool, writer }
    }
}

#[async_trait]
impl SplitSheetRepositoryTrait for SplitSheetRepository {
    async fn create(&self, owner: &str, new_sheet: NewSplitSheet) -> Result<SplitSheet> {
        let owner = owner.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SplitSheet> {
                let participants_json = serde_json::to_string(&new_sheet.participants)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                let now = Utc::now().naive_utc();
                let row = SplitSheetDB {
                    id: Uuid::new_v4().to_string(),
                    owner,
                    name: new_sheet.name,
                    participants: participants_json,
                    created_at: now,
                    updated_at: now,
                };
                let inserted = diesel::insert_into(split_sheets::table)
                    .values(&row)
                    .returning(SplitSheetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SplitSheet::from(inserted))
            })
            .await
    }

    async fn delete(&self, owner: &str, sheet_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let sheet_id = sheet_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Interactions go with the sheet via ON DELETE CASCADE.
                let deleted = diesel::delete(
                    split_sheets::table
                        .filter(split_sheets::id.eq(&sheet_id))
                        .filter(split_sheets::owner.eq(&owner)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(sheet_not_found(&sheet_id));
                }
                Ok(deleted)
            })
            .await
    }

    fn get_by_id(&self, owner: &str, sheet_id: &str) -> Result<SplitSheet> {
        let mut conn = get_connection(&self.pool)?;
        let row = split_sheets::table
            .filter(split_sheets::id.eq(sheet_id))
            .filter(split_sheets::owner.eq(owner))
            .first::<SplitSheetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| sheet_not_found(sheet_id))?;
        Ok(SplitSheet::from(row))
    }

    fn list(&self, owner: &str) -> Result<Vec<SplitSheet>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = split_sheets::table
            .filter(split_sheets::owner.eq(owner))
            .order(split_sheets::created_at.asc())
            .load::<SplitSheetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(SplitSheet::from).collect())
    }
}

/// Diesel-backed interaction repository.
///
/// Every operation checks, inside the same transaction, that the target
/// sheet belongs to `owner`.
pub struct InteractionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InteractionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        InteractionRepository { pool, writer }
    }
}

/// Returns the sheet id owning `interaction_id`, provided that sheet
/// belongs to `owner_name`.
fn owned_interaction_sheet(
    conn: &mut SqliteConnection,
    owner_name: &str,
    interaction_id: &str,
) -> Result<String> {
    let sheet_id = interactions::table
        .inner_join(split_sheets::table)
        .filter(interactions::id.eq(interaction_id))
        .filter(split_sheets::owner.eq(owner_name))
        .select(interactions::sheet_id)
        .first::<String>(conn)
        .optional()
        .map_err(StorageError::from)?;
    sheet_id.ok_or_else(|| interaction_not_found(interaction_id))
}

fn sheet_is_owned(conn: &mut SqliteConnection, owner_name: &str, sheet: &str) -> Result<()> {
    let found = split_sheets::table
        .filter(split_sheets::id.eq(sheet))
        .filter(split_sheets::owner.eq(owner_name))
        .select(split_sheets::id)
        .first::<String>(conn)
        .optional()
        .map_err(StorageError::from)?;
    match found {
        Some(_) => Ok(()),
        None => Err(sheet_not_found(sheet)),
    }
}

#[async_trait]
impl InteractionRepositoryTrait for InteractionRepository {
    async fn create(
        &self,
        owner: &str,
        sheet_id: &str,
        new_interaction: NewInteraction,
    ) -> Result<Interaction> {
        let owner = owner.to_string();
        let sheet_id = sheet_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Interaction> {
                sheet_is_owned(conn, &owner, &sheet_id)?;
                let shares_json = serde_json::to_string(&new_interaction.shares)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                let row = InteractionDB {
                    id: Uuid::new_v4().to_string(),
                    sheet_id,
                    label: new_interaction.label,
                    payer: new_interaction.payer,
                    amount_cents: new_interaction.amount_cents,
                    date: new_interaction.date.format(DATE_FORMAT).to_string(),
                    is_refunded: false,
                    shares: shares_json,
                    created_at: Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(interactions::table)
                    .values(&row)
                    .returning(InteractionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Interaction::from(inserted))
            })
            .await
    }

    async fn set_refunded(
        &self,
        owner: &str,
        interaction_id: &str,
        is_refunded: bool,
    ) -> Result<Interaction> {
        let owner = owner.to_string();
        let interaction_id = interaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Interaction> {
                owned_interaction_sheet(conn, &owner, &interaction_id)?;
                let updated = diesel::update(
                    interactions::table.filter(interactions::id.eq(&interaction_id)),
                )
                .set(interactions::is_refunded.eq(is_refunded))
                .returning(InteractionDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Interaction::from(updated))
            })
            .await
    }

    async fn delete(&self, owner: &str, interaction_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let interaction_id = interaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                owned_interaction_sheet(conn, &owner, &interaction_id)?;
                let deleted = diesel::delete(
                    interactions::table.filter(interactions::id.eq(&interaction_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(deleted)
            })
            .await
    }

    fn list_by_sheet(&self, owner: &str, sheet_id: &str) -> Result<Vec<Interaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = interactions::table
            .inner_join(split_sheets::table)
            .filter(interactions::sheet_id.eq(sheet_id))
            .filter(split_sheets::owner.eq(owner))
            .order((interactions::date.asc(), interactions::created_at.asc()))
            .select(InteractionDB::as_select())
            .load::<InteractionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Interaction::from).collect())
    }
}
