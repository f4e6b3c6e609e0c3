use pl_core::experiment;
use pl_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        short = 'n',
        long = "experiment-name",
        visible_alias = "name",
        long_help = "name of the experiment to scale"
    )]
    pub experiment_name: String,

    #[arg(
        short = 'p',
        long = "num-peers",
        visible_alias = "peers",
        long_help = "desired number of peers in the network"
    )]
    pub num_peers: i32,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    experiment::scale_experiment(client, &args.experiment_name.to_lowercase(), args.num_peers).await
}
