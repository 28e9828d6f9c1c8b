//! Ordered step composition.
//!
//! A [`Step`] is a named function from table to table. [`compose`] chains
//! steps into a [`CompositeTransformer`] which applies them strictly in
//! order and stops at the first error, returning it unchanged.

use std::fmt;

use polars::prelude::DataFrame;
use regional_model::Transformer;
use tracing::debug;

use crate::aggregate::aggregate_by_period;
use crate::cleaning::{deduplicate, drop_missing_critical};
use crate::enrich::enrich_time_features;
use crate::error::{Result, TransformError};
use crate::normalize::normalize_dtypes;
use crate::schema::ensure_schema;
use crate::validate::{
    ensure_non_negative_amount, ensure_not_empty, ensure_numeric_amount, ensure_sorted_by_date,
};

type StepFn = dyn Fn(DataFrame) -> Result<DataFrame> + Send + Sync;

/// A named table-to-table function.
pub struct Step {
    name: String,
    func: Box<StepFn>,
}

impl Step {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(DataFrame) -> Result<DataFrame> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, data: DataFrame) -> Result<DataFrame> {
        (self.func)(data)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish()
    }
}

/// Applies its steps in order; the output of one is the input of the next.
#[derive(Debug, Default)]
pub struct CompositeTransformer {
    steps: Vec<Step>,
}

impl CompositeTransformer {
    /// Create an empty transformer (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a step to the end.
    pub fn add_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }
}

impl Transformer for CompositeTransformer {
    type Error = TransformError;

    fn transform(&self, data: DataFrame) -> Result<DataFrame> {
        self.steps.iter().try_fold(data, |df, step| {
            let out = step.apply(df)?;
            debug!(step = step.name(), rows = out.height(), "applied transform step");
            Ok(out)
        })
    }
}

/// Chains `steps` into one transformer.
pub fn compose(steps: Vec<Step>) -> CompositeTransformer {
    CompositeTransformer { steps }
}

/// The fixed step order used by the regional sales pipeline.
///
/// Schema is checked before coercion, duplicates are removed before
/// aggregation and the sort check runs after the enrichment sort.
pub fn canonical_steps() -> Vec<Step> {
    vec![
        Step::new("ensure_schema", ensure_schema),
        Step::new("drop_missing_critical", drop_missing_critical),
        Step::new("deduplicate", deduplicate),
        Step::new("normalize_dtypes", normalize_dtypes),
        Step::new("ensure_numeric_amount", ensure_numeric_amount),
        Step::new("ensure_non_negative_amount", ensure_non_negative_amount),
        Step::new("enrich_time_features", enrich_time_features),
        Step::new("ensure_sorted_by_date", ensure_sorted_by_date),
        Step::new("aggregate_by_period", aggregate_by_period),
        Step::new("ensure_not_empty", ensure_not_empty),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn single_column(values: Vec<i64>) -> DataFrame {
        DataFrame::new(vec![Series::new("n".into(), values).into_column()]).unwrap()
    }

    #[test]
    fn empty_composition_is_identity() {
        let df = single_column(vec![1, 2]);
        let out = compose(Vec::new()).transform(df.clone()).unwrap();
        assert!(out.equals(&df));
    }

    #[test]
    fn steps_run_in_order() {
        let transformer = CompositeTransformer::new()
            .add_step(Step::new("head", |df: DataFrame| Ok(df.head(Some(2)))))
            .add_step(Step::new("tail", |df: DataFrame| Ok(df.tail(Some(1)))));
        let out = transformer.transform(single_column(vec![1, 2, 3])).unwrap();
        let values: Vec<Option<i64>> = out.column("n").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(values, [Some(2)]);
    }

    #[test]
    fn first_failure_stops_the_chain() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&later_calls);
        let transformer = compose(vec![
            Step::new("fail", |_df: DataFrame| {
                Err(TransformError::DataValidation("boom".to_string()))
            }),
            Step::new("count", move |df: DataFrame| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(df)
            }),
        ]);

        let err = transformer.transform(single_column(vec![1])).unwrap_err();
        assert!(matches!(err, TransformError::DataValidation(ref m) if m == "boom"));
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn canonical_step_order() {
        let names = compose(canonical_steps()).step_names().join("\n");
        insta::assert_snapshot!(names, @r"
        ensure_schema
        drop_missing_critical
        deduplicate
        normalize_dtypes
        ensure_numeric_amount
        ensure_non_negative_amount
        enrich_time_features
        ensure_sorted_by_date
        aggregate_by_period
        ensure_not_empty
        ");
    }
}
