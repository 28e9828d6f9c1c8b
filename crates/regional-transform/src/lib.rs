//! Transform steps for the regional sales pipeline.
//!
//! Every step is a plain function that takes ownership of a `DataFrame` and
//! returns its replacement, so steps compose with [`compose`] into a
//! [`CompositeTransformer`].
//!
//! # Canonical Step Order
//!
//! 1. **ensure_schema** - required columns present
//! 2. **drop_missing_critical** - drop rows with null date, amount or region
//! 3. **deduplicate** - drop exact duplicate rows
//! 4. **normalize_dtypes** - coerce date, amount and region
//! 5. **ensure_numeric_amount**
//! 6. **ensure_non_negative_amount**
//! 7. **enrich_time_features** - year, month, quarter; sort by date and region
//! 8. **ensure_sorted_by_date**
//! 9. **aggregate_by_period** - monthly totals per region
//! 10. **ensure_not_empty**

mod aggregate;
mod cleaning;
mod composer;
mod enrich;
mod error;
mod normalize;
mod schema;
mod validate;

pub use aggregate::aggregate_by_period;
pub use cleaning::{deduplicate, drop_missing_critical};
pub use composer::{CompositeTransformer, Step, canonical_steps, compose};
pub use enrich::enrich_time_features;
pub use error::{Result, TransformError};
pub use normalize::normalize_dtypes;
pub use schema::{ensure_schema, require_columns};
pub use validate::{
    ensure_non_negative_amount, ensure_not_empty, ensure_numeric_amount, ensure_sorted_by_date,
};
