//! SQLite storage implementation for shared-expense sheets.

mod model;
mod repository;

pub use model::{InteractionDB, SplitSheetDB};
pub use repository::{InteractionRepository, SplitSheetRepository};
