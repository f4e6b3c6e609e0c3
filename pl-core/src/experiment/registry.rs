use chrono::{
    DateTime,
    TimeDelta,
    Utc,
};
use clockabilly::prelude::*;
use kube::api::{
    Api,
    ListParams,
};

use super::*;
use crate::k8s::{
    bounded,
    selector_string,
};
use crate::macros::*;
use crate::prelude::*;

/// Reconstruct the status of every experiment in the managed namespace by
/// joining each managed StatefulSet with its live pods. Rows come back
/// sorted by (namespace, full object name); any listing failure fails the
/// whole call, so callers never see a partial view.
pub async fn list_experiments(client: kube::Client) -> anyhow::Result<Vec<ExperimentStatusRow>> {
    let sts_api: Api<appsv1::StatefulSet> = Api::namespaced(client.clone(), EXPERIMENT_NAMESPACE);
    let all_sts = bounded(READ_DEADLINE, "list statefulsets", sts_api.list(&Default::default())).await?;

    let now = UtcClock.now();
    let mut rows = vec![];
    for sts in all_sts.items.iter().filter(|sts| has_experiment_label(sts.labels())) {
        rows.push(build_status_row(client.clone(), sts, now).await?);
    }

    sort_status_rows(&mut rows);
    Ok(rows)
}

/// The same join keyed by bare experiment name, for existence checks. Errors
/// propagate so callers can tell "not found" apart from "could not list".
pub async fn experiment_index(client: kube::Client) -> anyhow::Result<BTreeMap<String, ExperimentStatusRow>> {
    let rows = list_experiments(client).await?;
    Ok(rows.into_iter().map(|row| (row.exp_name.clone(), row)).collect())
}

fn has_experiment_label(labels: &BTreeMap<String, String>) -> bool {
    [APP_KUBERNETES_IO_NAME_KEY, APP_KUBERNETES_IO_COMPONENT_KEY]
        .iter()
        .any(|key| labels.get(*key).is_some_and(|v| v.starts_with(EXPERIMENT_PREFIX)))
}

pub(super) fn sort_status_rows(rows: &mut [ExperimentStatusRow]) {
    rows.sort_by(|a, b| (&a.namespace, &a.name).cmp(&(&b.namespace, &b.name)));
}

async fn build_status_row(
    client: kube::Client,
    sts: &appsv1::StatefulSet,
    now: DateTime<Utc>,
) -> anyhow::Result<ExperimentStatusRow> {
    let name = sts.name_any();
    let namespace = sts.namespace().unwrap_or_else(|| EXPERIMENT_NAMESPACE.into());
    let exp_name = from_full_name(&name)?.to_string();

    let spec = sts.spec.as_ref();
    let scale = spec.and_then(|s| s.replicas).unwrap_or(0);
    let pod_selector = spec.map(|s| selector_string(&s.selector)).unwrap_or_default();

    let pod_api: Api<corev1::Pod> = Api::namespaced(client, &namespace);
    let params = ListParams::default().labels(&pod_selector);
    let pods = bounded(READ_DEADLINE, "list pods", pod_api.list(&params)).await?;
    let running = pods.items.iter().filter(|p| is_running(p)).count();

    let ready = sts.status.as_ref().and_then(|s| s.ready_replicas).unwrap_or(0);
    let age = sts.creation_timestamp().map_or_else(TimeDelta::zero, |ts| now - ts.0);

    Ok(ExperimentStatusRow { name, namespace, exp_name, scale, running, ready, age })
}

fn is_running(pod: &corev1::Pod) -> bool {
    pod.status.as_ref().and_then(|s| s.phase.as_deref()) == Some("Running")
}
