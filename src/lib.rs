//! Fuel-economy dashboard: CSV loading, filtering, aggregation and the
//! egui front end that renders the results.

pub mod app;
pub mod charts;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod state;
pub mod ui;
