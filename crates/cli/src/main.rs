mod config;
mod formatter;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::AlphabetSource;
use formatter::{ColorMode, Direction, OutputFormat};
use shorturl::{BigInt, Charset, Converter};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shorturl")]
#[command(about = "Convert integers between decimal and any digit alphabet", long_about = None)]
#[command(version)]
struct Cli {
    /// Explicit digit symbols, lowest value first (e.g. "0123456789ABCDEF")
    #[arg(long, global = true, env = "SHORTURL_ALPHABET", conflicts_with_all = ["charset", "radix"])]
    alphabet: Option<String>,

    /// Predefined charset name (see the `charsets` subcommand)
    #[arg(long, global = true, env = "SHORTURL_CHARSET", conflicts_with = "radix")]
    charset: Option<String>,

    /// Radix for the built-in 0-9A-Za-z alphabet (2 to 62)
    #[arg(long, global = true, env = "SHORTURL_RADIX")]
    radix: Option<usize>,

    /// Output format: json, compact, or pretty (default)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Color output: auto (default), always, or never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "SHORTURL_CONFIG")]
    config: Option<PathBuf>,

    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode decimal integers into the selected alphabet
    Encode {
        /// Decimal values, negative values allowed
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<BigInt>,
    },

    /// Decode values written in the selected alphabet
    Decode {
        /// Base values, optionally prefixed with '-'
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Walk the sequence cursor
    Sequence {
        /// Cursor start value (defaults to the config value, then 0)
        #[arg(long, allow_hyphen_values = true)]
        start: Option<BigInt>,

        /// Number of values to produce
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Step backwards instead of forwards
        #[arg(long)]
        reverse: bool,

        /// Print the start value before stepping
        #[arg(long)]
        include_start: bool,
    },

    /// List predefined charsets
    Charsets,

    /// Measure encode and decode speed over a range of values
    Bench {
        /// Number of values to convert
        #[arg(long, default_value_t = 1_000_000)]
        iterations: u64,

        /// First value of the range
        #[arg(long, default_value_t = BigInt::from(i32::MAX), allow_hyphen_values = true)]
        start: BigInt,
    },

    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the default config file location
    Path,
    /// Print the effective configuration file contents
    Show,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr, keeping stdout clean for data
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load_config(cli.config.as_deref())?;

    let format = cli
        .format
        .as_deref()
        .or(config.format.as_deref())
        .map(OutputFormat::from_str)
        .unwrap_or(OutputFormat::Pretty);
    let colorize = ColorMode::from_str(&cli.color).should_colorize();

    let cli_source = AlphabetSource {
        alphabet: cli.alphabet.clone(),
        charset: cli.charset.clone(),
        radix: cli.radix,
    };
    let source = if cli_source.is_empty() {
        config.alphabet_source()
    } else {
        cli_source
    };

    match cli.command {
        Commands::Encode { values } => {
            let converter = build_converter(&source)?;
            for value in values {
                let encoded = converter.encode(value);
                println!(
                    "{}",
                    formatter::format_value(&encoded, Direction::Encode, format, colorize)
                );
            }
        }

        Commands::Decode { values } => {
            let converter = build_converter(&source)?;
            for value in values {
                let decoded = converter
                    .decode(&value)
                    .with_context(|| format!("Failed to decode {:?}", value))?;
                println!(
                    "{}",
                    formatter::format_value(&decoded, Direction::Decode, format, colorize)
                );
            }
        }

        Commands::Sequence {
            start,
            count,
            reverse,
            include_start,
        } => {
            let start = match start {
                Some(start) => start,
                None => config.start()?.unwrap_or_default(),
            };
            let converter = build_converter(&source)?.starting_at(start);
            run_sequence(&converter, count, reverse, include_start, format, colorize);
        }

        Commands::Charsets => {
            for charset in Charset::ALL {
                println!("{}", formatter::format_charset(charset, format, colorize));
            }
        }

        Commands::Bench { iterations, start } => {
            let converter = build_converter(&source)?;
            let report = run_bench(&converter, start, iterations)?;
            println!("{}", formatter::format_bench(&report, format, colorize));
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config::config_file_path()?.display());
            }
            ConfigCommands::Show => {
                let text =
                    toml::to_string_pretty(&config).context("Failed to serialize config")?;
                print!("{}", text);
            }
        },
    }

    Ok(())
}

fn build_converter(source: &AlphabetSource) -> Result<Converter> {
    let alphabet = source.resolve()?;
    debug!(alphabet = %formatter::describe_alphabet(&alphabet), "Using alphabet");
    Ok(Converter::from_alphabet(alphabet))
}

fn run_sequence(
    converter: &Converter,
    count: usize,
    reverse: bool,
    include_start: bool,
    format: OutputFormat,
    colorize: bool,
) {
    let print = |value: shorturl::Value| {
        println!(
            "{}",
            formatter::format_value(&value, Direction::Encode, format, colorize)
        );
    };

    if include_start {
        print(converter.current());
    }

    for _ in 0..count {
        let value = if reverse {
            converter.previous()
        } else {
            converter.next()
        };
        print(value);
    }
}

/// Encode `iterations` consecutive values, then decode them back
fn run_bench(
    converter: &Converter,
    start: BigInt,
    iterations: u64,
) -> Result<formatter::BenchReport> {
    info!(iterations, %start, radix = converter.radix(), "Starting benchmark");

    let mut encoded = Vec::with_capacity(usize::try_from(iterations).unwrap_or(0));
    let mut current = start.clone();
    let started = Instant::now();
    for _ in 0..iterations {
        encoded.push(converter.to_base(current.clone()));
        current += 1u32;
    }
    let encode_total = started.elapsed();
    info!(?encode_total, "Encoded range");

    let mut expected = start;
    let started = Instant::now();
    for base in &encoded {
        let decimal = converter.to_decimal(base)?;
        if decimal != expected {
            bail!(
                "Round trip mismatch: {:?} decoded to {}, expected {}",
                base,
                decimal,
                expected
            );
        }
        expected += 1u32;
    }
    let decode_total = started.elapsed();
    info!(?decode_total, "Decoded range");

    Ok(formatter::BenchReport {
        radix: converter.radix(),
        iterations,
        encode_total,
        decode_total,
    })
}
