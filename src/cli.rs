use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "syracuse",
    version,
    about = "Collatz (Syracuse) trajectories, flight statistics and charts",
    long_about = "Without a subcommand, charts the trajectory of 15 and prints its \
                  flight time, altitude flight time and max altitude."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    /// Chart options for the default demo run.
    #[command(flatten)]
    pub chart: ChartArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Accepted only by commands that draw a chart.
#[derive(Args, Debug, Default, Clone)]
pub struct ChartArgs {
    #[arg(long, help = "Write the chart but do not open a viewer")]
    pub no_show: bool,
    #[arg(long, help = "Skip chart rendering entirely")]
    pub no_plot: bool,
    #[arg(long, help = "Chart file path (default: <output_dir>/syracuse_n<N>.svg)")]
    pub output: Option<PathBuf>,
}

impl ChartArgs {
    pub fn is_set(&self) -> bool {
        self.no_show || self.no_plot || self.output.is_some()
    }

    /// Combines flags given before the subcommand with the subcommand's own.
    pub fn merged(&self, inner: &ChartArgs) -> ChartArgs {
        ChartArgs {
            no_show: self.no_show || inner.no_show,
            no_plot: self.no_plot || inner.no_plot,
            output: inner.output.clone().or_else(|| self.output.clone()),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chart a trajectory and print its three flight statistics.
    Flight {
        start: u64,
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Print the trajectory, one value per line.
    Sequence { start: u64 },
    /// Print labeled flight statistics without charting.
    Stats { start: u64 },
}

#[cfg(test)]
mod tests {
    use super::{ChartArgs, Cli, Commands};
    use std::path::PathBuf;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_demo() {
        let cli = Cli::try_parse_from(["syracuse"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json && !cli.chart.is_set());
    }

    #[test]
    fn flight_takes_its_own_chart_flags() {
        let cli =
            Cli::try_parse_from(["syracuse", "flight", "27", "--json", "--no-plot"]).unwrap();
        assert!(cli.json);
        assert!(!cli.chart.is_set());
        match cli.command {
            Some(Commands::Flight { start, chart }) => {
                assert_eq!(start, 27);
                assert!(chart.no_plot);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn chart_flags_are_not_accepted_by_non_chart_commands() {
        assert!(Cli::try_parse_from(["syracuse", "stats", "27", "--no-plot"]).is_err());
        assert!(Cli::try_parse_from(["syracuse", "sequence", "6", "--output", "a.svg"]).is_err());
    }

    #[test]
    fn subcommand_output_wins_when_merging() {
        let outer = ChartArgs {
            no_show: true,
            output: Some(PathBuf::from("outer.svg")),
            ..ChartArgs::default()
        };
        let inner = ChartArgs {
            output: Some(PathBuf::from("inner.svg")),
            ..ChartArgs::default()
        };
        let merged = outer.merged(&inner);
        assert!(merged.no_show && !merged.no_plot);
        assert_eq!(merged.output, Some(PathBuf::from("inner.svg")));
        assert_eq!(
            outer.merged(&ChartArgs::default()).output,
            Some(PathBuf::from("outer.svg"))
        );
    }

    #[test]
    fn negative_start_is_a_parse_error() {
        assert!(Cli::try_parse_from(["syracuse", "sequence", "-3"]).is_err());
    }
}
