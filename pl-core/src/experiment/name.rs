use super::*;
use crate::prelude::*;

/// Compute the full cluster object name for an experiment.
pub fn to_full_name(exp_name: &str) -> String {
    format!("{EXPERIMENT_PREFIX}{exp_name}")
}

/// Recover the bare experiment name from a full cluster object name; fails
/// if the name does not carry the experiment prefix.
pub fn from_full_name(full_name: &str) -> anyhow::Result<&str> {
    full_name
        .strip_prefix(EXPERIMENT_PREFIX)
        .ok_or_else(|| ExperimentError::not_prefixed(full_name))
}
