//! Instruments module - domain models, services, and traits.

mod instruments_model;
mod instruments_service;
mod instruments_traits;

// Re-export the public interface
pub use instruments_model::{Instrument, InstrumentUpdate, NewInstrument};
pub use instruments_service::InstrumentService;
pub use instruments_traits::{InstrumentRepositoryTrait, InstrumentServiceTrait};
