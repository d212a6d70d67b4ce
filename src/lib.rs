//! Galaxy mass-metallicity scatter plots.
//!
//! Reads `data/galaxy_snapshot.csv`, draws gas metallicity against stellar
//! mass on a log axis (optionally coloured by star formation rate) and saves
//! `output/mass_metallicity_relation.png` at 300 DPI.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod figure;
pub mod pipeline;
pub mod render;
pub mod state;
pub mod ui;
