use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod actions;
mod logging;
mod scenario;
mod util;

use actions::optimize::Goal;

#[derive(Parser, Debug)]
#[command(name = "nestegg")]
#[command(version, about = "Household projections: loan amortization, super, and sale drawdowns")]
struct Cli {
    /// Scenario file (JSON); built-in defaults are used when omitted
    #[arg(short, long, global = true)]
    scenario: Option<PathBuf>,

    /// Override a scenario field, e.g. --set principal=750000
    #[arg(long = "set", value_name = "FIELD=VALUE", global = true)]
    set: Vec<String>,

    /// Emit the full result as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Log level when RUST_LOG is unset (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the fixed-window amortization schedule
    Amortize {
        /// Print only the first N schedule rows
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Project superannuation balances and the retirement drawdown
    Super,
    /// Assess a property sale and walk the proceeds drawdown
    Sale {
        /// Print only the first N schedule rows
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Solve a goal over the amortization schedule
    Optimize {
        #[command(subcommand)]
        goal: Goal,
    },
    /// Write a starter scenario file
    Init {
        /// Destination path
        #[arg(default_value = "scenario.json")]
        path: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let mut scenario = scenario::load(cli.scenario.as_deref())?;

    match cli.command {
        Command::Amortize { rows } => {
            scenario::apply_amortization_overrides(&mut scenario, &cli.set)?;
            actions::amortize::run(&scenario, rows, cli.json)
        }
        Command::Super => {
            scenario::apply_super_overrides(&mut scenario, &cli.set)?;
            actions::superannuation::run(&scenario, cli.json)
        }
        Command::Sale { rows } => {
            scenario::apply_sale_overrides(&mut scenario, &cli.set)?;
            actions::sale::run(&scenario, rows, cli.json)
        }
        Command::Optimize { goal } => {
            scenario::apply_amortization_overrides(&mut scenario, &cli.set)?;
            actions::optimize::run(&scenario, goal, cli.json)
        }
        Command::Init { path } => actions::init::run(&path, &scenario),
    }
}
