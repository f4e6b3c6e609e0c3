use chrono::{
    DateTime,
    Utc,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use super::*;
use crate::macros::*;
use crate::prelude::*;

pub fn experiment_labels(full_name: &str, start_time: DateTime<Utc>) -> BTreeMap<String, String> {
    BTreeMap::from([
        (APP_LABEL_KEY.into(), WORKLOAD_CONTAINER_NAME.into()),
        (APP_KUBERNETES_IO_NAME_KEY.into(), full_name.into()),
        (APP_KUBERNETES_IO_COMPONENT_KEY.into(), full_name.into()),
        (START_DATE_LABEL_KEY.into(), start_time.format(START_DATE_FORMAT).to_string()),
    ])
}

// Headless service for peer discovery; the workload resolves its peers
// through the per-pod DNS records this creates.
pub fn build_headless_service(full_name: &str, labels: &BTreeMap<String, String>) -> corev1::Service {
    corev1::Service {
        metadata: metav1::ObjectMeta {
            name: Some(full_name.into()),
            namespace: Some(EXPERIMENT_NAMESPACE.into()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(corev1::ServiceSpec {
            cluster_ip: Some("None".into()),
            selector: Some(labels.clone()),
            ports: Some(vec![corev1::ServicePort {
                name: Some(WORKLOAD_CONTAINER_NAME.into()),
                port: WORKLOAD_PORT,
                target_port: Some(IntOrString::Int(WORKLOAD_PORT)),
                protocol: Some("TCP".into()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn build_peer_set(config: &ExperimentConfig, labels: &BTreeMap<String, String>) -> appsv1::StatefulSet {
    let full_name = to_full_name(&config.name);
    appsv1::StatefulSet {
        metadata: metav1::ObjectMeta {
            name: Some(full_name.clone()),
            namespace: Some(EXPERIMENT_NAMESPACE.into()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(appsv1::StatefulSetSpec {
            service_name: Some(full_name),
            replicas: Some(config.peers),
            pod_management_policy: Some("Parallel".into()),
            selector: metav1::LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: corev1::PodTemplateSpec {
                metadata: Some(metav1::ObjectMeta {
                    labels: Some(labels.clone()),
                    annotations: klabel!(
                        EGRESS_BANDWIDTH_ANNOTATION_KEY => format!("{}M", config.uplink_mbps),
                        INGRESS_BANDWIDTH_ANNOTATION_KEY => format!("{}M", config.downlink_mbps),
                    ),
                    ..Default::default()
                }),
                spec: Some(corev1::PodSpec {
                    volumes: Some(vec![corev1::Volume {
                        name: SIDECAR_CONFIG_VOLUME.into(),
                        config_map: Some(corev1::ConfigMapVolumeSource {
                            name: SIDECAR_CONFIG_MAP_NAME.into(),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }]),
                    init_containers: Some(vec![build_sidecar_container()]),
                    containers: vec![build_workload_container(config)],
                    restart_policy: Some("Always".into()),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn build_workload_container(config: &ExperimentConfig) -> corev1::Container {
    // requests equal to limits, so the peers get no burst headroom that
    // would skew measurements between runs
    let quantities = BTreeMap::from([
        ("cpu".to_string(), Quantity(format!("{}", config.cpu_per_peer))),
        ("memory".to_string(), Quantity(format!("{}Mi", config.ram_mb_per_peer))),
    ]);

    corev1::Container {
        name: WORKLOAD_CONTAINER_NAME.into(),
        image: Some(WORKLOAD_IMAGE.into()),
        image_pull_policy: Some("IfNotPresent".into()),
        ports: Some(vec![corev1::ContainerPort {
            container_port: WORKLOAD_PORT,
            protocol: Some("TCP".into()),
            ..Default::default()
        }]),
        env: Some(vec![
            int_env_var(PEERS_ENV_VAR, config.peers),
            int_env_var(MSG_RATE_ENV_VAR, config.msg_rate),
            int_env_var(MSG_SIZE_ENV_VAR, config.msg_size),
            int_env_var(CONNECT_TO_ENV_VAR, config.connect_to),
        ]),
        resources: Some(corev1::ResourceRequirements {
            requests: Some(quantities.clone()),
            limits: Some(quantities),
            ..Default::default()
        }),
        ..Default::default()
    }
}

// The sidecar runs as a native-sidecar init container (restartPolicy:
// Always) so it is up before the workload starts and lives as long as the
// pod does.
fn build_sidecar_container() -> corev1::Container {
    corev1::Container {
        name: SIDECAR_CONTAINER_NAME.into(),
        image: Some(SIDECAR_IMAGE.into()),
        image_pull_policy: Some("IfNotPresent".into()),
        restart_policy: Some("Always".into()),
        args: Some(vec![format!("--config.file={SIDECAR_CONFIG_MOUNT_PATH}")]),
        ports: Some(vec![corev1::ContainerPort {
            name: Some(SIDECAR_PORT_NAME.into()),
            container_port: SIDECAR_PORT,
            protocol: Some("TCP".into()),
            ..Default::default()
        }]),
        resources: Some(corev1::ResourceRequirements {
            requests: Some(BTreeMap::from([
                ("cpu".to_string(), Quantity("0.05".into())),
                ("memory".to_string(), Quantity("32Mi".into())),
            ])),
            limits: Some(BTreeMap::from([
                ("cpu".to_string(), Quantity("0.1".into())),
                ("memory".to_string(), Quantity("64Mi".into())),
            ])),
            ..Default::default()
        }),
        volume_mounts: Some(vec![corev1::VolumeMount {
            name: SIDECAR_CONFIG_VOLUME.into(),
            mount_path: SIDECAR_CONFIG_MOUNT_PATH.into(),
            sub_path: Some(SIDECAR_CONFIG_SUBPATH.into()),
            ..Default::default()
        }]),
        ..Default::default()
    }
}

fn int_env_var(name: &str, value: i32) -> corev1::EnvVar {
    corev1::EnvVar {
        name: name.into(),
        value: Some(value.to_string()),
        ..Default::default()
    }
}
