use pl_core::experiment::{
    self,
    format_age,
};
use pl_core::prelude::*;

const HEADERS: [&str; 6] = ["EXPERIMENT", "FULLNAME", "SCALE", "RUNNING", "READY", "AGE"];
const COLUMN_GAP: usize = 2;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        short = 'o',
        long,
        visible_alias = "user",
        long_help = "list only the experiments belonging to the given user"
    )]
    pub owner: Option<String>,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    if args.owner.is_some() {
        println!("feature not implemented yet (coming soon)");
        return Ok(());
    }

    let rows = experiment::list_experiments(client).await?;
    print!("{}", render_table(&rows));
    Ok(())
}

fn render_table(rows: &[ExperimentStatusRow]) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|r| {
            [
                r.exp_name.clone(),
                r.name.clone(),
                r.scale.to_string(),
                r.running.to_string(),
                r.ready.to_string(),
                format_age(r.age),
            ]
        })
        .collect();

    let widths: Vec<usize> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| cells.iter().map(|row| row[i].len()).fold(h.len(), usize::max) + COLUMN_GAP)
        .collect();

    let render_line = |row: &[String; 6]| {
        let mut line = String::new();
        for (cell, &width) in row.iter().zip(&widths) {
            line += &format!("{cell:<width$}");
        }
        line.trim_end().to_string() + "\n"
    };

    let header_row = HEADERS.map(String::from);
    let mut out = render_line(&header_row);
    for row in &cells {
        out += &render_line(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use rstest::*;

    use super::*;

    fn status_row(exp_name: &str, scale: i32) -> ExperimentStatusRow {
        ExperimentStatusRow {
            name: format!("{EXPERIMENT_PREFIX}{exp_name}"),
            namespace: EXPERIMENT_NAMESPACE.into(),
            exp_name: exp_name.into(),
            scale,
            running: 2,
            ready: 2,
            age: TimeDelta::seconds(200),
        }
    }

    #[rstest]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[]), "EXPERIMENT  FULLNAME  SCALE  RUNNING  READY  AGE\n");
    }

    #[rstest]
    fn test_render_table() {
        let rows = vec![status_row("blue", 3), status_row("tangerine", 12)];
        let expected = concat!(
            "EXPERIMENT  FULLNAME               SCALE  RUNNING  READY  AGE\n",
            "blue        peerlab-exp-blue       3      2        2      3m20s\n",
            "tangerine   peerlab-exp-tangerine  12     2        2      3m20s\n",
        );
        assert_eq!(render_table(&rows), expected);
    }
}
