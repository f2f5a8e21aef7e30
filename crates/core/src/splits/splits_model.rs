//! Shared-expense sheet domain models.
//!
//! Amounts are integer minor units (cents); display formatting divides
//! by 100.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A shared-expense sheet: a set of participants splitting costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSheet {
    pub id: String,
    pub owner: String,
    pub name: String,
    pub participants: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSplitSheet {
    pub name: String,
    pub participants: Vec<String>,
}

impl NewSplitSheet {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.participants.len() < 2 {
            return Err(ValidationError::InvalidInput(
                "A sheet needs at least two participants".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// One payee's share of an interaction, excluding the payer's own share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionShare {
    pub participant: String,
    pub owed_cents: i64,
}

/// A shared expense: one payer, N weighted payees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub sheet_id: String,
    pub label: String,
    pub payer: String,
    /// Total amount the payer laid out, in cents.
    pub amount_cents: i64,
    pub date: NaiveDate,
    pub is_refunded: bool,
    pub shares: Vec<InteractionShare>,
    pub created_at: NaiveDateTime,
}

/// Input model for adding an interaction to a sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInteraction {
    pub label: String,
    pub payer: String,
    pub amount_cents: i64,
    pub date: NaiveDate,
    pub shares: Vec<InteractionShare>,
}

impl NewInteraction {
    pub fn validate(&self, participants: &[String]) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::MissingField("label".to_string()).into());
        }
        if self.amount_cents <= 0 {
            return Err(ValidationError::InvalidInput(
                "Interaction amount must be positive".to_string(),
            )
            .into());
        }
        if !participants.contains(&self.payer) {
            return Err(ValidationError::InvalidInput(format!(
                "Payer {} is not a participant of this sheet",
                self.payer
            ))
            .into());
        }
        for share in &self.shares {
            if share.owed_cents < 0 {
                return Err(ValidationError::InvalidInput(
                    "Share amounts cannot be negative".to_string(),
                )
                .into());
            }
            if !participants.contains(&share.participant) {
                return Err(ValidationError::InvalidInput(format!(
                    "Payee {} is not a participant of this sheet",
                    share.participant
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Net debt between two participants: `debtor` owes `creditor` `amount_cents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub debtor: String,
    pub creditor: String,
    pub amount_cents: i64,
}

/// Netting result plus the simple total reductions, recomputed on every
/// stats request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetStats {
    pub debts: Vec<Debt>,
    pub total_cents: i64,
    pub total_this_month_cents: i64,
}
