mod completions;
mod create;
mod delete;
mod get;
mod scale;

use clap::{
    crate_version,
    CommandFactory,
    Parser,
    Subcommand,
};
use pl_core::logging;
use pl_core::prelude::*;

#[derive(Parser)]
#[command(
    about = "command-line launcher for multi-peer networking experiments on Kubernetes",
    version,
    propagate_version = true
)]
struct PlCommandRoot {
    #[command(subcommand)]
    subcommand: PlSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum PlSubcommand {
    #[command(about = "generate shell completions for plctl")]
    Completions(completions::Args),

    #[command(
        about = "create an experiment",
        visible_aliases = &["r", "start", "run"],
    )]
    Create(create::Args),

    #[command(
        about = "delete an experiment",
        visible_aliases = &["d", "del", "remove"],
    )]
    Delete(delete::Args),

    #[command(
        about = "list experiments",
        visible_aliases = &["l", "list", "show"],
    )]
    Get(get::Args),

    #[command(
        about = "scale the number of peers in an experiment",
        visible_aliases = &["update", "s"],
    )]
    Scale(scale::Args),

    #[command(about = "plctl version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = PlCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    // completions and version don't need a kube client (and shouldn't fail
    // without a kubeconfig), so it's only constructed for the subcommands
    // that talk to the cluster
    match &args.subcommand {
        PlSubcommand::Completions(args) => completions::cmd(args, PlCommandRoot::command()),
        PlSubcommand::Create(args) => {
            let client = kube::Client::try_default().await?;
            create::cmd(args, client).await
        },
        PlSubcommand::Delete(args) => {
            let client = kube::Client::try_default().await?;
            delete::cmd(args, client).await
        },
        PlSubcommand::Get(args) => {
            let client = kube::Client::try_default().await?;
            get::cmd(args, client).await
        },
        PlSubcommand::Scale(args) => {
            let client = kube::Client::try_default().await?;
            scale::cmd(args, client).await
        },
        PlSubcommand::Version => {
            println!("plctl {}", crate_version!());
            Ok(())
        },
    }
}
