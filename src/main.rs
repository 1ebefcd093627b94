use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keytrail::config::Config;
use keytrail::document::Value;
use keytrail::file::loader::{load_object, InputFormat};
use keytrail::file::writer::{render, OutputFormat};
use keytrail::query::{KeyPath, SearchOrder, Searcher, Walker};

/// Exit status when the input document could not be loaded or parsed.
const EXIT_BAD_INPUT: u8 = 2;

/// keytrail - find values in nested JSON/YAML by key path or key name
#[derive(Parser)]
#[command(name = "keytrail")]
#[command(version)]
#[command(about = "Find values in nested JSON/YAML by key path or key name", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk an explicit key path and return the value under the last key
    Walk {
        /// Keys to descend, in order (comma-separated or repeated)
        #[arg(short, long = "keys", alias = "search-keys", value_delimiter = ',')]
        keys: Vec<String>,

        /// Dotted key path such as `a.b.c`, instead of --keys
        #[arg(short, long, conflicts_with = "keys")]
        path: Option<String>,

        #[command(flatten)]
        query: QueryArgs,
    },
    /// Search the whole document for a key without knowing its path
    Search {
        /// Key to search for
        #[arg(short, long = "key", alias = "search-key")]
        key: String,

        /// Order matches by their string form before selecting
        #[arg(long)]
        sorted: bool,

        #[command(flatten)]
        query: QueryArgs,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Write the configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// File name, `-` for stdin, or an inline JSON/YAML document
    #[arg(short, long)]
    object: String,

    /// Value to return if nothing is found
    #[arg(short, long)]
    default_value: Option<String>,

    /// Which matches to return: first, last or all
    #[arg(short, long)]
    return_value: Option<String>,

    /// Input format: auto, json or yaml
    #[arg(short, long, default_value = "auto")]
    format: InputFormat,

    /// Output format: json, yaml or raw
    #[arg(long)]
    output: Option<OutputFormat>,

    /// Nesting depth at which traversal stops
    #[arg(long)]
    max_depth: Option<usize>,
}

/// Settings for one query after CLI flags are layered over the config file.
struct Resolved {
    default_value: String,
    return_value: String,
    max_depth: usize,
    output: OutputFormat,
    indent_size: usize,
}

impl Resolved {
    fn new(args: &QueryArgs, config: &Config) -> Result<Self> {
        let output = match args.output {
            Some(output) => output,
            None => config
                .output_format
                .parse()
                .context("Invalid output_format in config file")?,
        };

        Ok(Self {
            default_value: args
                .default_value
                .clone()
                .unwrap_or_else(|| config.default_value.clone()),
            return_value: args
                .return_value
                .clone()
                .unwrap_or_else(|| config.return_value.clone()),
            max_depth: args.max_depth.unwrap_or(config.max_depth),
            output,
            indent_size: config.indent_size,
        })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load();

    match cli.command {
        Command::Walk { keys, path, query } => {
            let path = match path {
                Some(dotted) => KeyPath::from_dotted(&dotted),
                None => KeyPath::new(keys),
            };
            let settings = Resolved::new(&query, &config)?;
            let Some(document) = load_document(&query) else {
                return Ok(ExitCode::from(EXIT_BAD_INPUT));
            };
            let walker = Walker::new().with_max_depth(settings.max_depth);
            let result = walker.walk(
                &document,
                path.keys(),
                &settings.default_value,
                &settings.return_value,
            );
            print_result(&result, &settings)?;
        }
        Command::Search { key, sorted, query } => {
            let settings = Resolved::new(&query, &config)?;
            let Some(document) = load_document(&query) else {
                return Ok(ExitCode::from(EXIT_BAD_INPUT));
            };
            let order = if sorted || config.sort_search_results {
                SearchOrder::Lexicographic
            } else {
                SearchOrder::Encounter
            };
            let searcher = Searcher::new()
                .with_max_depth(settings.max_depth)
                .with_order(order);
            let result = searcher.search(
                &document,
                &key,
                &settings.default_value,
                &settings.return_value,
            );
            print_result(&result, &settings)?;
        }
        Command::Config { save } => {
            if save {
                let path = config.save()?;
                eprintln!("Saved configuration to {}", path.display());
            }
            print!("{}", config.to_toml()?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads the queried document, reporting parse failures separately from
/// query misses.
fn load_document(query: &QueryArgs) -> Option<Value> {
    match load_object(&query.object, query.format) {
        Ok(document) => Some(document),
        Err(e) => {
            eprintln!("Error: input could not be parsed: {e:#}");
            None
        }
    }
}

fn print_result(result: &Value, settings: &Resolved) -> Result<()> {
    let text = render(result, settings.output, settings.indent_size)?;
    println!("{}", text);
    Ok(())
}
