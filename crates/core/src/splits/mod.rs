//! Splits module - shared-expense sheets, interactions, and debt netting.

pub mod netting;
mod splits_model;
mod splits_service;
mod splits_traits;

// Re-export the public interface
pub use netting::compute_net_debts;
pub use splits_model::{
    Debt, Interaction, InteractionShare, NewInteraction, NewSplitSheet, SheetStats, SplitSheet,
};
pub use splits_service::SplitService;
pub use splits_traits::{
    InteractionRepositoryTrait, SplitServiceTrait, SplitSheetRepositoryTrait,
};

#[cfg(test)]
mod netting_tests;
