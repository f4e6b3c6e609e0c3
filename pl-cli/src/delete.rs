use pl_core::experiment;
use pl_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        short = 'n',
        long = "experiment-name",
        visible_alias = "name",
        long_help = "name of the experiment to delete"
    )]
    pub experiment_name: String,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    experiment::delete_experiment(client, &args.experiment_name.to_lowercase()).await
}
