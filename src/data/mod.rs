//! Data layer: raw sources, preparation, filtering, aggregation.
//!
//! Architecture:
//! ```text
//!   day.csv / hour.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  header check + rename → RawTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ prepare   │  decode codes, parse dates, derive categories
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ DataContext  │  prepared daily + hourly tables (read-only)
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌──────────┐      ┌───────────┐
//!   │  filter   │ ──▶ │ aggregate  │ → DashboardSummary
//!   └──────────┘      └───────────┘
//! ```

pub mod aggregate;
pub mod context;
pub mod filter;
pub mod loader;
pub mod model;
pub mod prepare;
pub mod schema;
pub mod summary;

#[cfg(test)]
pub(crate) mod fixtures;
