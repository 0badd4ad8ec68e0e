/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  data/raw/EPA_fuel_economy_summary.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file once → Arc<Dataset>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │   Dataset     │  Vec<Record>, FilterDomain
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  make + year predicates → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  rounded mean fuel cost
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
