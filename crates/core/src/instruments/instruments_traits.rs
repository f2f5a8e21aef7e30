//! Instrument repository and service traits.

use async_trait::async_trait;

use super::instruments_model::{Instrument, InstrumentUpdate, NewInstrument};
use crate::errors::Result;

/// Trait defining the contract for Instrument repository operations.
#[async_trait]
pub trait InstrumentRepositoryTrait: Send + Sync {
    /// Creates a new instrument for `owner`.
    async fn create(&self, owner: &str, new_instrument: NewInstrument) -> Result<Instrument>;

    /// Updates an existing instrument.
    async fn update(&self, owner: &str, update: InstrumentUpdate) -> Result<Instrument>;

    /// Deletes an instrument and its transactions and quotes.
    async fn delete(&self, owner: &str, instrument_id: &str) -> Result<usize>;

    /// Retrieves an instrument by its ID, scoped to `owner`.
    fn get_by_id(&self, owner: &str, instrument_id: &str) -> Result<Instrument>;

    /// Lists the instruments of `owner`, ordered by symbol.
    fn list(&self, owner: &str) -> Result<Vec<Instrument>>;
}

/// Trait defining the contract for Instrument service operations.
#[async_trait]
pub trait InstrumentServiceTrait: Send + Sync {
    async fn create_instrument(
        &self,
        owner: &str,
        new_instrument: NewInstrument,
    ) -> Result<Instrument>;

    async fn update_instrument(&self, owner: &str, update: InstrumentUpdate)
        -> Result<Instrument>;

    async fn delete_instrument(&self, owner: &str, instrument_id: &str) -> Result<()>;

    fn get_instrument(&self, owner: &str, instrument_id: &str) -> Result<Instrument>;

    fn list_instruments(&self, owner: &str) -> Result<Vec<Instrument>>;
}
