//! Split sheet repository and service traits.

use async_trait::async_trait;

use super::splits_model::{
    Interaction, NewInteraction, NewSplitSheet, SheetStats, SplitSheet,
};
use crate::errors::Result;

/// Trait defining the contract for sheet persistence.
#[async_trait]
pub trait SplitSheetRepositoryTrait: Send + Sync {
    async fn create(&self, owner: &str, new_sheet: NewSplitSheet) -> Result<SplitSheet>;

    async fn delete(&self, owner: &str, sheet_id: &str) -> Result<usize>;

    fn get_by_id(&self, owner: &str, sheet_id: &str) -> Result<SplitSheet>;

    fn list(&self, owner: &str) -> Result<Vec<SplitSheet>>;
}

/// Trait defining the contract for interaction persistence.
///
/// All operations verify the sheet belongs to `owner` before touching rows.
#[async_trait]
pub trait InteractionRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        owner: &str,
        sheet_id: &str,
        new_interaction: NewInteraction,
    ) -> Result<Interaction>;

    /// Flips the refunded flag of one interaction.
    async fn set_refunded(
        &self,
        owner: &str,
        interaction_id: &str,
        is_refunded: bool,
    ) -> Result<Interaction>;

    async fn delete(&self, owner: &str, interaction_id: &str) -> Result<usize>;

    fn list_by_sheet(&self, owner: &str, sheet_id: &str) -> Result<Vec<Interaction>>;
}

/// Trait defining the contract for sheet service operations.
#[async_trait]
pub trait SplitServiceTrait: Send + Sync {
    async fn create_sheet(&self, owner: &str, new_sheet: NewSplitSheet) -> Result<SplitSheet>;

    async fn delete_sheet(&self, owner: &str, sheet_id: &str) -> Result<()>;

    fn get_sheet(&self, owner: &str, sheet_id: &str) -> Result<SplitSheet>;

    fn list_sheets(&self, owner: &str) -> Result<Vec<SplitSheet>>;

    async fn add_interaction(
        &self,
        owner: &str,
        sheet_id: &str,
        new_interaction: NewInteraction,
    ) -> Result<Interaction>;

    async fn set_interaction_refunded(
        &self,
        owner: &str,
        interaction_id: &str,
        is_refunded: bool,
    ) -> Result<Interaction>;

    async fn delete_interaction(&self, owner: &str, interaction_id: &str) -> Result<()>;

    fn list_interactions(&self, owner: &str, sheet_id: &str) -> Result<Vec<Interaction>>;

    /// Net debts and totals, recomputed from the sheet's interactions.
    fn get_sheet_stats(&self, owner: &str, sheet_id: &str) -> Result<SheetStats>;
}
