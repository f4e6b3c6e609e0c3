use chrono::{
    DateTime,
    Utc,
};
use pl_core::experiment::{
    build_headless_service,
    build_peer_set,
    experiment_labels,
    to_full_name,
};
use pl_core::prelude::*;
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

pub fn test_start_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1736942400, 0).unwrap()
}

#[fixture]
pub fn test_config() -> ExperimentConfig {
    ExperimentConfig {
        name: TEST_EXP_NAME.into(),
        peers: 3,
        msg_rate: 5,
        msg_size: 1440,
        connect_to: 2,
        cpu_per_peer: 0.05,
        ram_mb_per_peer: 16,
        uplink_mbps: 16,
        downlink_mbps: 16,
    }
}

// The peer set as the apiserver would return it: stamped with a creation
// timestamp and a status block.
#[fixture]
pub fn test_peer_set(test_config: ExperimentConfig) -> appsv1::StatefulSet {
    let full_name = to_full_name(&test_config.name);
    let labels = experiment_labels(&full_name, test_start_time());
    let mut sts = build_peer_set(&test_config, &labels);
    sts.metadata.creation_timestamp = Some(metav1::Time(test_start_time()));
    sts.status = Some(appsv1::StatefulSetStatus {
        replicas: test_config.peers,
        ready_replicas: Some(2),
        ..Default::default()
    });
    sts
}

#[fixture]
pub fn test_service(test_config: ExperimentConfig) -> corev1::Service {
    let full_name = to_full_name(&test_config.name);
    let labels = experiment_labels(&full_name, test_start_time());
    build_headless_service(&full_name, &labels)
}

#[fixture]
pub fn test_pod(#[default("Running")] phase: &str) -> corev1::Pod {
    corev1::Pod {
        metadata: metav1::ObjectMeta {
            name: Some(format!("{TEST_EXP_FULL_NAME}-0")),
            namespace: Some(EXPERIMENT_NAMESPACE.into()),
            ..Default::default()
        },
        status: Some(corev1::PodStatus {
            phase: Some(phase.into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn list_body<T: serde::Serialize>(kind: &str, api_version: &str, items: Vec<T>) -> serde_json::Value {
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {"resourceVersion": "1"},
        "items": items,
    })
}
