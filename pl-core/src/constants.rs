use std::time::Duration;

// Well-known labels and annotations
pub const APP_LABEL_KEY: &str = "app";
pub const APP_KUBERNETES_IO_NAME_KEY: &str = "app.kubernetes.io/name";
pub const APP_KUBERNETES_IO_COMPONENT_KEY: &str = "app.kubernetes.io/component";
pub const START_DATE_LABEL_KEY: &str = "app.kubernetes.io/startdate";
pub const INGRESS_BANDWIDTH_ANNOTATION_KEY: &str = "kubernetes.io/ingress-bandwidth";
pub const EGRESS_BANDWIDTH_ANNOTATION_KEY: &str = "kubernetes.io/egress-bandwidth";

// Experiment identity; the full object name for an experiment is always
// EXPERIMENT_PREFIX + the lower-cased user-supplied name
pub const EXPERIMENT_PREFIX: &str = "peerlab-exp-";
pub const EXPERIMENT_NAMESPACE: &str = "peerlab";
pub const START_DATE_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

// Peer-to-peer workload container
pub const WORKLOAD_CONTAINER_NAME: &str = "peernet";
pub const WORKLOAD_IMAGE: &str = "peerlab/peernet:v0.4.1";
pub const WORKLOAD_PORT: i32 = 5000;

// Latency-exporter sidecar
pub const SIDECAR_CONTAINER_NAME: &str = "rtt-exporter";
pub const SIDECAR_IMAGE: &str = "prom/blackbox-exporter:v0.27.0";
pub const SIDECAR_PORT: i32 = 9115;
pub const SIDECAR_PORT_NAME: &str = "sidecar-port";
pub const SIDECAR_CONFIG_MAP_NAME: &str = "peerlab-blackbox-config";
pub const SIDECAR_CONFIG_VOLUME: &str = "config-volume";
pub const SIDECAR_CONFIG_MOUNT_PATH: &str = "/etc/blackbox/config.yml";
pub const SIDECAR_CONFIG_SUBPATH: &str = "config.yml";

// Env vars understood by the workload image
pub const PEERS_ENV_VAR: &str = "PEERS";
pub const MSG_RATE_ENV_VAR: &str = "MSGRATE";
pub const MSG_SIZE_ENV_VAR: &str = "MSGSIZE";
pub const CONNECT_TO_ENV_VAR: &str = "CONNECTTO";

// Deadlines attached to every cluster API call
pub const READ_DEADLINE: Duration = Duration::from_secs(30);
pub const WRITE_DEADLINE: Duration = Duration::from_secs(60);
