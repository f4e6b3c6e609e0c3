/// User-declared parameters for a new experiment, built once per `create`
/// invocation from parsed CLI flags and consumed to construct the cluster
/// objects; never persisted locally.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentConfig {
    pub name: String,
    pub peers: i32,
    pub msg_rate: i32,
    pub msg_size: i32,
    pub connect_to: i32,
    pub cpu_per_peer: f64,
    pub ram_mb_per_peer: i32,
    pub uplink_mbps: i32,
    pub downlink_mbps: i32,
}
