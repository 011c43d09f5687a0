use crate::cli::{ChartArgs, Cli, Commands};
use crate::domain::models::{Config, FlightReport, DEMO_START};
use crate::services::chart::{chart_title, ChartRenderer, NoChart, SvgChart};
use crate::services::output::{print_one, print_out};
use crate::services::sequence::generate;

pub fn handle_commands(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        None => run_flight(cli.json, &cli.chart, config, DEMO_START),
        Some(Commands::Flight { start, chart }) => {
            run_flight(cli.json, &cli.chart.merged(chart), config, *start)
        }
        Some(_) if cli.chart.is_set() => {
            anyhow::bail!("--no-show, --no-plot and --output only apply to charting commands")
        }
        Some(Commands::Sequence { start }) => {
            let trajectory = generate(*start, config.max_steps)?;
            print_out(cli.json, trajectory.values(), |v| v.to_string())
        }
        Some(Commands::Stats { start }) => {
            let trajectory = generate(*start, config.max_steps)?;
            let report = FlightReport::from_trajectory(&trajectory);
            print_one(cli.json, report, |r| {
                vec![
                    format!("start\t{}", r.start),
                    format!("flight_time\t{}", r.flight_time),
                    format!("altitude_flight_time\t{}", r.altitude_flight_time),
                    format!("max_altitude\t{}", r.max_altitude),
                ]
            })
        }
    }
}

fn run_flight(json: bool, args: &ChartArgs, config: &Config, start: u64) -> anyhow::Result<()> {
    let renderer = renderer_for(args, config);
    let report = fly(start, config.max_steps, renderer.as_ref())?;
    print_one(json, report, |r| {
        vec![
            r.flight_time.to_string(),
            r.altitude_flight_time.to_string(),
            r.max_altitude.to_string(),
        ]
    })
}

fn renderer_for(args: &ChartArgs, config: &Config) -> Box<dyn ChartRenderer> {
    if args.no_plot {
        return Box::new(NoChart);
    }
    let mut chart = config.chart.clone();
    if args.no_show {
        chart.show = false;
    }
    Box::new(SvgChart {
        config: chart,
        output: args.output.clone(),
    })
}

/// Generates the trajectory for `start`, charts it, and computes its statistics.
///
/// A chart failure is logged and leaves `chart` empty; the statistics are still returned.
pub fn fly(
    start: u64,
    max_steps: usize,
    renderer: &dyn ChartRenderer,
) -> anyhow::Result<FlightReport> {
    let trajectory = generate(start, max_steps)?;
    let title = chart_title(trajectory.start());
    let chart = match renderer.render(&trajectory, &title) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(start, error = %e, "chart rendering failed");
            None
        }
    };
    Ok(FlightReport {
        chart,
        ..FlightReport::from_trajectory(&trajectory)
    })
}
