use std::future::Future;
use std::time::Duration;

use super::*;
use crate::macros::*;
use crate::prelude::*;

// Attach an explicit deadline to a single cluster API call; expiry surfaces
// as a typed error instead of hanging the invocation (there are no retries).
pub async fn bounded<F, T, E>(limit: Duration, what: &str, fut: F) -> anyhow::Result<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res.map_err(Into::into),
        Err(_) => Err(KubernetesError::deadline_exceeded(what)),
    }
}

pub fn label_selector_string(labels: &BTreeMap<String, String>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

// The selectors we generate only ever carry matchLabels; matchExpressions on
// a foreign object with our label prefix are not translated.
pub fn selector_string(sel: &metav1::LabelSelector) -> String {
    match &sel.match_labels {
        Some(labels) => label_selector_string(labels),
        None => String::new(),
    }
}
