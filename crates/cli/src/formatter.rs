use colored::*;
use serde::Serialize;
use shorturl::{Alphabet, Charset, Value};
use std::time::Duration;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Compact,
    Pretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            "pretty" => Self::Pretty,
            _ => Self::Pretty, // default
        }
    }
}

/// Color mode options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            "auto" => Self::Auto,
            _ => Self::Auto,
        }
    }

    pub fn should_colorize(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Check if stdout is a TTY and colors are supported
                atty::is(atty::Stream::Stdout)
                    && supports_color::on(supports_color::Stream::Stdout).is_some()
            }
        }
    }
}

/// Which side of a converted value the user asked for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Format one converted value
///
/// Compact output prints only the side that was computed, so it can be piped
/// back into the opposite subcommand.
pub fn format_value(
    value: &Value,
    direction: Direction,
    format: OutputFormat,
    colorize: bool,
) -> String {
    let decimal = value
        .decimal()
        .map(ToString::to_string)
        .unwrap_or_default();
    let base = value.base().unwrap_or_default();

    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string()),
        OutputFormat::Compact => match direction {
            Direction::Encode => base.to_string(),
            Direction::Decode => decimal,
        },
        OutputFormat::Pretty => {
            if colorize {
                format!("{} {} {}", decimal.cyan(), "=".bright_black(), base.green().bold())
            } else {
                format!("{} = {}", decimal, base)
            }
        }
    }
}

#[derive(Serialize)]
struct CharsetRow<'a> {
    name: &'a str,
    radix: usize,
    symbols: &'a str,
}

/// Format one line of the charset listing
pub fn format_charset(charset: Charset, format: OutputFormat, colorize: bool) -> String {
    let radix = charset.symbols().chars().count();

    match format {
        OutputFormat::Json => serde_json::to_string(&CharsetRow {
            name: charset.name(),
            radix,
            symbols: charset.symbols(),
        })
        .unwrap_or_else(|_| "{}".to_string()),
        OutputFormat::Compact => charset.name().to_string(),
        OutputFormat::Pretty => {
            let name = format!("{:<28}", charset.name());
            let radix = format!("{:>3}", radix);
            if colorize {
                format!("{} {} {}", name.bold(), radix.cyan(), charset.symbols())
            } else {
                format!("{} {} {}", name, radix, charset.symbols())
            }
        }
    }
}

/// Timings gathered by the bench subcommand
#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub radix: usize,
    pub iterations: u64,
    #[serde(with = "duration_nanos")]
    pub encode_total: Duration,
    #[serde(with = "duration_nanos")]
    pub decode_total: Duration,
}

impl BenchReport {
    pub fn per_operation(total: Duration, iterations: u64) -> Duration {
        if iterations == 0 {
            return Duration::ZERO;
        }
        let nanos = total.as_nanos() / u128::from(iterations);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

mod duration_nanos {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u128(d.as_nanos())
    }
}

pub fn format_bench(report: &BenchReport, format: OutputFormat, colorize: bool) -> String {
    if format == OutputFormat::Json {
        return serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string());
    }

    let encode_each = BenchReport::per_operation(report.encode_total, report.iterations);
    let decode_each = BenchReport::per_operation(report.decode_total, report.iterations);

    if format == OutputFormat::Compact {
        return format!(
            "{} {} {:?} {:?}",
            report.radix, report.iterations, encode_each, decode_each
        );
    }

    let heading = format!(
        "Base {} over {} values",
        report.radix, report.iterations
    );
    let heading = if colorize {
        heading.bold().to_string()
    } else {
        heading
    };

    format!(
        "{}\n  encode: {:?} total, {:?} per operation\n  decode: {:?} total, {:?} per operation",
        heading, report.encode_total, encode_each, report.decode_total, decode_each
    )
}

/// Describe an alphabet for log lines
pub fn describe_alphabet(alphabet: &Alphabet) -> String {
    const PREVIEW: usize = 16;
    let preview: String = alphabet.symbols().iter().take(PREVIEW).collect();
    if alphabet.radix() > PREVIEW {
        format!("base {} ({}...)", alphabet.radix(), preview)
    } else {
        format!("base {} ({})", alphabet.radix(), preview)
    }
}
