//! CLI library components for the regional sales ETL.

pub mod logging;
pub mod sources;
