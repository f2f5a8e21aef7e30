use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::netting::compute_net_debts;
use super::splits_model::{Interaction, NewInteraction, NewSplitSheet, SheetStats, SplitSheet};
use super::splits_traits::{
    InteractionRepositoryTrait, SplitServiceTrait, SplitSheetRepositoryTrait,
};
use crate::errors::Result;
use crate::utils::money::format_cents;

/// Service for managing shared-expense sheets and their interactions.
pub struct SplitService {
    sheet_repository: Arc<dyn SplitSheetRepositoryTrait>,
    interaction_repository: Arc<dyn InteractionRepositoryTrait>,
}

impl SplitService {
    pub fn new(
        sheet_repository: Arc<dyn SplitSheetRepositoryTrait>,
        interaction_repository: Arc<dyn InteractionRepositoryTrait>,
    ) -> Self {
        Self {
            sheet_repository,
            interaction_repository,
        }
    }
}

#[async_trait::async_trait]
impl SplitServiceTrait for SplitService {
    async fn create_sheet(&self, owner: &str, new_sheet: NewSplitSheet) -> Result<SplitSheet> {
        new_sheet.validate()?;
        self.sheet_repository.create(owner, new_sheet).await
    }

    async fn delete_sheet(&self, owner: &str, sheet_id: &str) -> Result<()> {
        self.sheet_repository.delete(owner, sheet_id).await?;
        Ok(())
    }

    fn get_sheet(&self, owner: &str, sheet_id: &str) -> Result<SplitSheet> {
        self.sheet_repository.get_by_id(owner, sheet_id)
    }

    fn list_sheets(&self, owner: &str) -> Result<Vec<SplitSheet>> {
        self.sheet_repository.list(owner)
    }

    async fn add_interaction(
        &self,
        owner: &str,
        sheet_id: &str,
        new_interaction: NewInteraction,
    ) -> Result<Interaction> {
        let sheet = self.sheet_repository.get_by_id(owner, sheet_id)?;
        new_interaction.validate(&sheet.participants)?;
        self.interaction_repository
            .create(owner, sheet_id, new_interaction)
            .await
    }

    async fn set_interaction_refunded(
        &self,
        owner: &str,
        interaction_id: &str,
        is_refunded: bool,
    ) -> Result<Interaction> {
        self.interaction_repository
            .set_refunded(owner, interaction_id, is_refunded)
            .await
    }

    async fn delete_interaction(&self, owner: &str, interaction_id: &str) -> Result<()> {
        self.interaction_repository
            .delete(owner, interaction_id)
            .await?;
        Ok(())
    }

    fn list_interactions(&self, owner: &str, sheet_id: &str) -> Result<Vec<Interaction>> {
        // Existence check doubles as the ownership check.
        self.sheet_repository.get_by_id(owner, sheet_id)?;
        self.interaction_repository.list_by_sheet(owner, sheet_id)
    }

    fn get_sheet_stats(&self, owner: &str, sheet_id: &str) -> Result<SheetStats> {
        self.sheet_repository.get_by_id(owner, sheet_id)?;
        let interactions = self.interaction_repository.list_by_sheet(owner, sheet_id)?;
        let stats = compute_net_debts(&interactions, Utc::now());
        debug!(
            "Netted {} interactions for sheet {}: total {}",
            interactions.len(),
            sheet_id,
            format_cents(stats.total_cents)
        );
        Ok(stats)
    }
}
