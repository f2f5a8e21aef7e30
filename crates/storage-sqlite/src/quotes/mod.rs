//! SQLite storage implementation for daily quotes.

mod model;
mod repository;

pub use model::QuoteDB;
pub use repository::QuoteRepository;
