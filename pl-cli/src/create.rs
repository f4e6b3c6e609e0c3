use pl_core::experiment;
use pl_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        short = 'n',
        long = "experiment-name",
        visible_alias = "name",
        long_help = "user-friendly name for the experiment (e.g. blue)"
    )]
    pub experiment_name: String,

    #[arg(
        short = 'p',
        long = "num-peers",
        visible_alias = "peers",
        default_value_t = 2,
        long_help = "number of peers in the network"
    )]
    pub num_peers: i32,

    #[arg(long = "msg-rate", default_value_t = 4, long_help = "delay between messages in milliseconds")]
    pub msg_rate: i32,

    #[arg(long = "msg-size", default_value_t = 1440, long_help = "size of each message in bytes")]
    pub msg_size: i32,

    #[arg(
        long = "num-conn",
        default_value_t = 2,
        long_help = "number of random connections each peer will make"
    )]
    pub num_conn: i32,

    #[arg(
        long,
        default_value_t = 0.05,
        long_help = "CPU limit per peer in cores (1.0 => one full core; 0.5 => half a core)"
    )]
    pub cpu: f64,

    #[arg(long, default_value_t = 16, long_help = "RAM limit per peer in MB")]
    pub ram: i32,

    #[arg(long = "downlink-bw", default_value_t = 16, long_help = "downlink data-rate limit per peer in Mbit")]
    pub downlink_bw: i32,

    #[arg(long = "uplink-bw", default_value_t = 16, long_help = "uplink data-rate limit per peer in Mbit")]
    pub uplink_bw: i32,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    let config = ExperimentConfig {
        // lower-cased so experiment identity is case-insensitive
        name: args.experiment_name.to_lowercase(),
        peers: args.num_peers,
        msg_rate: args.msg_rate,
        msg_size: args.msg_size,
        connect_to: args.num_conn,
        cpu_per_peer: args.cpu,
        ram_mb_per_peer: args.ram,
        uplink_mbps: args.uplink_bw,
        downlink_mbps: args.downlink_bw,
    };

    experiment::create_experiment(client, &config).await
}
