//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!   launches.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse CSV → LaunchDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ LaunchDataset │  Vec<LaunchRecord>, sites, payload bounds
//!   └───────────────┘
//!        │   + ControlState (site, payload range)
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  pie breakdown + scatter points, or Empty
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
