use std::sync::Arc;

use super::instruments_model::{Instrument, InstrumentUpdate, NewInstrument};
use super::instruments_traits::{InstrumentRepositoryTrait, InstrumentServiceTrait};
use crate::errors::Result;

/// Service for managing tracked instruments.
pub struct InstrumentService {
    repository: Arc<dyn InstrumentRepositoryTrait>,
}

impl InstrumentService {
    pub fn new(repository: Arc<dyn InstrumentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InstrumentServiceTrait for InstrumentService {
    async fn create_instrument(
        &self,
        owner: &str,
        new_instrument: NewInstrument,
    ) -> Result<Instrument> {
        new_instrument.validate()?;
        self.repository.create(owner, new_instrument).await
    }

    async fn update_instrument(
        &self,
        owner: &str,
        update: InstrumentUpdate,
    ) -> Result<Instrument> {
        update.validate()?;
        self.repository.update(owner, update).await
    }

    async fn delete_instrument(&self, owner: &str, instrument_id: &str) -> Result<()> {
        self.repository.delete(owner, instrument_id).await?;
        Ok(())
    }

    fn get_instrument(&self, owner: &str, instrument_id: &str) -> Result<Instrument> {
        self.repository.get_by_id(owner, instrument_id)
    }

    fn list_instruments(&self, owner: &str) -> Result<Vec<Instrument>> {
        self.repository.list(owner)
    }
}
