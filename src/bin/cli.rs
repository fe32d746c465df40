//! Launch Dash CLI
//!
//! Offline access to the same charts and filters the dashboard serves:
//! - Dataset summary
//! - Pie and scatter chart data
//! - Filtered launch listing
//! - Default config generation

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use launch_dash::api::dto::{ChartResponse, FilterQuery};
use launch_dash::api::routes::launches::summarize;
use launch_dash::charts::{pie_chart, scatter_chart, ChartSpec};
use launch_dash::dataset::{load_csv, LaunchTable, SiteSelector};
use launch_dash::filter::FilterCriteria;

#[derive(Parser)]
#[command(name = "launch-dash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query SpaceX launch records from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// CSV file with the launch records
    #[arg(short, long, default_value = "data/spacex_launch_dash.csv", global = true)]
    pub data: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

/// Site and payload filter flags
#[derive(clap::Args)]
pub struct FilterArgs {
    /// Launch site, or ALL
    #[arg(short, long)]
    site: Option<String>,
    /// Lower payload bound (kg)
    #[arg(long)]
    min: Option<f64>,
    /// Upper payload bound (kg)
    #[arg(long)]
    max: Option<f64>,
}

impl FilterArgs {
    fn criteria(self, table: &LaunchTable) -> anyhow::Result<FilterCriteria> {
        let query = FilterQuery {
            site: self.site,
            min: self.min,
            max: self.max,
        };
        Ok(query.criteria(table)?)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record count, payload bounds and per-site success counts
    Summary,

    /// Success pie chart (payload range is ignored)
    Pie {
        /// Launch site, or ALL
        #[arg(short, long, default_value = "ALL")]
        site: String,
    },

    /// Payload vs. launch success scatter chart
    Scatter {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List launch records passing the filters
    Launches {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = launch_dash::config::generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let table = load_csv(&cli.data)?;

    match cli.command {
        Commands::Summary => {
            let summary = summarize(&table);

            if cli.format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("Records: {}", summary.records);
            if let Some(bounds) = summary.payload_bounds {
                println!("Payload: {}", bounds);
            }
            println!();
            println!(
                "{:<16} {:>8} {:>10} {:>8}",
                "Site", "Launches", "Successes", "Rate"
            );
            println!("{}", "-".repeat(45));
            for site in &summary.sites {
                println!(
                    "{:<16} {:>8} {:>10} {:>7.1}%",
                    site.site,
                    site.launches,
                    site.successes,
                    site.success_rate * 100.0
                );
            }
        }

        Commands::Pie { site } => {
            let chart = pie_chart(&table, &SiteSelector::parse(&site));

            if cli.format == Format::Json {
                print_chart_json(chart.into())?;
                return Ok(());
            }

            println!("{}", chart.title);
            println!();
            if chart.slices.is_empty() {
                println!("No data");
            }
            for (idx, slice) in chart.slices.iter().enumerate() {
                println!(
                    "{:<16} {:>6} {:>7.1}%",
                    slice.label,
                    slice.value,
                    chart.share(idx) * 100.0
                );
            }
        }

        Commands::Scatter { filter } => {
            let criteria = filter.criteria(&table)?;
            let chart = scatter_chart(&table, &criteria);

            if cli.format == Format::Json {
                print_chart_json(chart.into())?;
                return Ok(());
            }

            println!("{}", chart.title);
            println!("{} points, payload {}", chart.points.len(), criteria.payload);
            println!();
            println!("{:<12} {:>6} {:>6}", "Booster", "Points", "Success");
            println!("{}", "-".repeat(26));
            for series in chart.series() {
                let successes = series.y.iter().filter(|&&y| y == 1).count();
                println!(
                    "{:<12} {:>6} {:>6}",
                    series.category,
                    series.x.len(),
                    successes
                );
            }
        }

        Commands::Launches { filter } => {
            let criteria = filter.criteria(&table)?;
            let records = criteria.apply(&table);

            if cli.format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&records)?);
                return Ok(());
            }

            if records.is_empty() {
                println!("No launches match {} at {}", criteria.payload, criteria.site.label());
                return Ok(());
            }

            println!(
                "{:<7} {:<14} {:>10} {:<6} {:<8}",
                "Flight", "Site", "Payload", "Class", "Booster"
            );
            println!("{}", "-".repeat(50));
            for record in &records {
                let flight = record
                    .flight_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<7} {:<14} {:>10.1} {:<6} {:<8}",
                    flight,
                    record.launch_site,
                    record.payload_mass_kg,
                    record.class,
                    record.booster_version_category
                );
            }
            println!();
            println!("{} launches", records.len());
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_chart_json(chart: ChartSpec) -> anyhow::Result<()> {
    let body = ChartResponse::from(chart);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
