//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  data/galaxy_snapshot.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse header + rows → GalaxyTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ GalaxyTable  │  column arrays, optional SFR
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  rows usable on a log-mass axis → indices
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
