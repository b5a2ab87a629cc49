mod config;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use typed_args_core::{
    ARRAY_SEPARATOR, ArgsParser, ParseMode, ParsedOptions, ParserConfig, RANGE_SEPARATOR,
};

use crate::config::SchemaConfig;

/// Output format for parse results.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Snapshot,
}

#[derive(Debug, Parser)]
#[command(name = "typed-args")]
#[command(about = "Parse argument vectors against a typed option schema")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse the arguments after `--` with a schema file.
    Parse(ParseArgs),
    /// Print the help page described by a schema file.
    Help(HelpArgs),
    /// Validate a schema file.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Schema file (YAML or JSON).
    #[arg(long)]
    schema: PathBuf,
    /// Skip failing options instead of aborting.
    #[arg(long)]
    lenient: bool,
    /// Marker character (defaults to the schema file's, then '-').
    #[arg(long)]
    marker: Option<char>,
    /// Index of the first argument to parse.
    #[arg(long, default_value_t = 0)]
    start: usize,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Arguments to parse.
    #[arg(last = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct HelpArgs {
    /// Schema file (YAML or JSON).
    #[arg(long)]
    schema: PathBuf,
    /// Program name for the header (defaults to the schema file's).
    #[arg(long)]
    program: Option<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Schema file (YAML or JSON).
    #[arg(long)]
    schema: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Help(args) => run_help(args),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "typed_args=debug,typed_args_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_schema(path: &Path) -> Result<SchemaConfig, String> {
    SchemaConfig::load(path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let config = load_schema(&args.schema)?;
    let schema = config.schema().map_err(|err| err.to_string())?;
    let parser = ArgsParser::with_config(
        &schema,
        ParserConfig {
            marker: args.marker.unwrap_or(config.marker),
            start: args.start,
        },
    );

    let mode = if args.lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };
    debug!(?mode, count = args.args.len(), "parsing arguments");

    let options = parser
        .parse_with_mode(&args.args, mode)
        .map_err(|err| err.to_string())?;
    print!("{}", format_options(&options, args.format)?);
    Ok(())
}

fn run_help(args: HelpArgs) -> Result<(), String> {
    let config = load_schema(&args.schema)?;
    config
        .help_page(args.program.as_deref())
        .write_to(std::io::stdout().lock())
        .map_err(|err| format!("Failed to write help: {err}"))
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let config = load_schema(&args.schema)?;
    println!(
        "Validated '{}': {} option(s).",
        args.schema.display(),
        config.options.len()
    );
    Ok(())
}

fn format_options(options: &ParsedOptions, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(options)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(options).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        CliOutputFormat::Snapshot => Ok(snapshot_lines(options)),
    }
}

/// Renders the text snapshot one `name=value` line per option, with the
/// control separators replaced by `|` and `..`.
fn snapshot_lines(options: &ParsedOptions) -> String {
    let mut out = String::new();
    for (name, value) in options.snapshot_as_text() {
        let value = value
            .replace(ARRAY_SEPARATOR, "|")
            .replace(RANGE_SEPARATOR, "..");
        out.push_str(&format!("{name}={value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use typed_args_core::{OptionSchema, ParameterType};

    #[test]
    fn test_snapshot_lines_use_readable_separators() {
        let schema = OptionSchema::from_options([
            ("arr", ParameterType::StringArray),
            ("eff", ParameterType::Range),
            ("doit", ParameterType::Flag),
        ])
        .unwrap();
        let options = ArgsParser::new(&schema)
            .parse(&["-arr", "a", "b", "-eff", "1", "2.5", "-doit"])
            .unwrap();

        assert_eq!(snapshot_lines(&options), "arr=a|b\ndoit=\neff=1..2.5\n");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_subcommand_takes_schema_arguments() {
        let cli = Cli::try_parse_from([
            "typed-args",
            "help",
            "--schema",
            "demo.yaml",
            "--program",
            "demo",
        ])
        .unwrap();

        match cli.command {
            Command::Help(args) => {
                assert_eq!(args.schema, PathBuf::from("demo.yaml"));
                assert_eq!(args.program.as_deref(), Some("demo"));
            }
            other => panic!("expected help command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_collects_arguments_after_separator() {
        let cli = Cli::try_parse_from([
            "typed-args",
            "parse",
            "--schema",
            "demo.yaml",
            "--lenient",
            "--",
            "-age",
            "-4",
        ])
        .unwrap();

        match cli.command {
            Command::Parse(args) => {
                assert!(args.lenient);
                assert_eq!(args.args, vec!["-age".to_string(), "-4".to_string()]);
            }
            other => panic!("expected parse command, got {other:?}"),
        }
    }
}
