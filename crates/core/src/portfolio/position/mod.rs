//! Cost-basis / P&L engine and its state model.

pub mod position_calculator;
mod position_model;

pub use position_calculator::{compute_position, start_of_day};
pub use position_model::PositionState;

#[cfg(test)]
mod position_calculator_tests;
