//! egui rendering. Reads [`crate::state::AppState`]; control changes go
//! back through its methods.

pub mod panels;
pub mod plot;
pub mod table;
