mod render;

use std::{path::PathBuf, thread, time::Duration};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sort_visualiser_core::{
    input, AlgorithmKind, AppConfig, Comparison, Dimensionality, Run, Step,
};
use tracing_subscriber::EnvFilter;

fn main() -> sort_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Run { algorithm, session } => {
            if let Some(algorithm) = algorithm {
                config.run.algorithm = algorithm.parse()?;
            }
            session.apply(&mut config);
            config.validate()?;
            run_single(&config, session.format)
        }
        Commands::Compare {
            algorithms,
            session,
        } => {
            if !algorithms.is_empty() {
                config.playback.compare_algorithms = algorithms
                    .iter()
                    .map(|id| id.parse())
                    .collect::<sort_visualiser_core::Result<_>>()?;
            }
            session.apply(&mut config);
            config.validate()?;
            run_comparison(&config, session.format)
        }
        Commands::List => {
            for kind in AlgorithmKind::ALL {
                println!("{kind}");
            }
            Ok(())
        }
    }
}

fn run_single(config: &AppConfig, format: OutputFormat) -> sort_visualiser_core::Result<()> {
    let settings = &config.run;
    tracing::info!(
        algorithm = %settings.algorithm,
        size = settings.size,
        throttle = settings.throttle,
        "starting run"
    );

    let mut run = Run::from_config(settings)?;
    let max = settings.size as u32;
    let interval = Duration::from_millis(config.playback.interval_ms);

    loop {
        let step = run.advance();
        emit(format, &run, &step, max)?;
        if step.is_completed() {
            break;
        }
        thread::sleep(interval);
    }

    if let Some(completion) = run.completion() {
        tracing::info!(
            algorithm = %run.algorithm(),
            total_iterations = completion.total_iterations,
            snapshots = run.iteration(),
            "run finished"
        );
    }
    Ok(())
}

fn run_comparison(config: &AppConfig, format: OutputFormat) -> sort_visualiser_core::Result<()> {
    let settings = &config.run;
    let kinds = &config.playback.compare_algorithms;
    tracing::info!(algorithms = kinds.len(), size = settings.size, "starting comparison");

    let values = input::permutation(settings.size, settings.seed);
    let mut comparison =
        Comparison::new(kinds, &values, settings.throttle, settings.dimensions)?;
    let max = settings.size as u32;
    let interval = Duration::from_millis(config.playback.interval_ms);

    while !comparison.is_finished() {
        let steps = comparison.tick();
        if format == OutputFormat::Text {
            print!("{CLEAR}");
        }
        for (run, step) in comparison.runs().iter().zip(&steps) {
            emit_lane(format, run, step, max)?;
        }
        thread::sleep(interval);
    }

    if format == OutputFormat::Text {
        println!("\nAll algorithms finished!");
        for (kind, completion) in comparison.summary() {
            println!("{kind}: {}", completion.message);
        }
    }
    Ok(())
}

const CLEAR: &str = "\x1b[2J\x1b[H";

fn emit(
    format: OutputFormat,
    run: &Run<u32>,
    step: &Step<u32>,
    max: u32,
) -> sort_visualiser_core::Result<()> {
    if format == OutputFormat::Text {
        print!("{CLEAR}");
    }
    emit_lane(format, run, step, max)
}

fn emit_lane(
    format: OutputFormat,
    run: &Run<u32>,
    step: &Step<u32>,
    max: u32,
) -> sort_visualiser_core::Result<()> {
    let algorithm = run.algorithm().id();
    match format {
        OutputFormat::Json => {
            let line = serde_json::json!({ "algorithm": algorithm, "step": step });
            println!("{}", serde_json::to_string(&line)?);
        }
        OutputFormat::Text => {
            let (status, values) = match step {
                Step::Snapshot(snapshot) => {
                    (format!("iteration {}", snapshot.iteration), &snapshot.values[..])
                }
                Step::Completed(completion) => (completion.message.clone(), run.current()),
            };
            println!("{}", render::title(algorithm, &status));
            println!("{}", render::bars(values, max, run.dimensions()));
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Step-by-step sorting visualiser", long_about = None)]
struct Cli {
    /// Optional JSON configuration file. Flags override its values.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate a single algorithm.
    Run {
        /// Algorithm identifier, see `list`.
        #[arg(short, long)]
        algorithm: Option<String>,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Animate several algorithms over the same input side by side.
    Compare {
        /// Comma separated algorithm identifiers.
        #[arg(short, long, value_delimiter = ',')]
        algorithms: Vec<String>,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Print the supported algorithm identifiers.
    List,
}

#[derive(Args, Debug)]
struct SessionArgs {
    /// Number of elements to sort.
    #[arg(short = 'n', long)]
    size: Option<usize>,
    /// Surface every Nth elementary step.
    #[arg(short, long)]
    throttle: Option<usize>,
    /// Draw raised bars instead of flat ones.
    #[arg(long)]
    three_d: bool,
    /// Seed for the input shuffle.
    #[arg(long)]
    seed: Option<u64>,
    /// Delay between frames in milliseconds.
    #[arg(short, long)]
    interval_ms: Option<u64>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl SessionArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(size) = self.size {
            config.run.size = size;
        }
        if let Some(throttle) = self.throttle {
            config.run.throttle = throttle;
        }
        if self.three_d {
            config.run.dimensions = Dimensionality::ThreeD;
        }
        if self.seed.is_some() {
            config.run.seed = self.seed;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.playback.interval_ms = interval_ms;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "sort-visualiser",
            "run",
            "--algorithm",
            "shellsort",
            "-n",
            "32",
            "--throttle",
            "3",
            "--three-d",
        ]);
        let Commands::Run { algorithm, session } = cli.command else {
            panic!("expected run command");
        };

        let mut config = AppConfig::default();
        session.apply(&mut config);

        assert_eq!(algorithm.as_deref(), Some("shellsort"));
        assert_eq!(config.run.size, 32);
        assert_eq!(config.run.throttle, 3);
        assert_eq!(config.run.dimensions, Dimensionality::ThreeD);
        assert_eq!(session.format, OutputFormat::Text);
    }

    #[test]
    fn compare_accepts_comma_separated_algorithms() {
        let cli = Cli::parse_from([
            "sort-visualiser",
            "compare",
            "--algorithms",
            "quicksort,selectionsort",
            "--format",
            "json",
        ]);
        let Commands::Compare { algorithms, session } = cli.command else {
            panic!("expected compare command");
        };

        assert_eq!(algorithms, vec!["quicksort", "selectionsort"]);
        assert_eq!(session.format, OutputFormat::Json);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
