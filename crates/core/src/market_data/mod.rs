//! Market data module - quote models and store traits.

mod market_data_model;
mod market_data_traits;

pub use market_data_model::{NewQuote, Quote};
pub use market_data_traits::QuoteRepositoryTrait;
