use clap::Parser;

#[derive(Parser)]
#[command(
    name = "zapmetrics",
    version,
    about = "Aggregate ZAP scan results into monitoring and dashboard metrics"
)]
pub struct Cli {
    /// Directory containing per-context scan results
    #[arg(short, long)]
    pub results_dir: String,

    /// Directory to write metrics files to
    #[arg(short, long, default_value = "metrics")]
    pub output_dir: String,

    /// Output format: all, json, prometheus, grafana
    #[arg(short, long, default_value = "all")]
    pub format: String,

    /// Risk level at which findings are treated as errors: high, medium, low, info
    #[arg(long, default_value = "medium")]
    pub alert_threshold: String,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
