//! Launch records dashboard.
//!
//! ```text
//!  spacex_launch_dash.csv
//!        │
//!        ▼
//!   data::loader ──► LaunchDataset ──► data::filter ──► ChartSet
//!                          ▲                 ▲             │
//!                          │            ControlState       ▼
//!                       state::AppState ◄──────────── ui (egui)
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
