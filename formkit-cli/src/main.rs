mod error;
mod paths;
mod session;

use std::fs;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use formkit_lib::form::FormState;
use formkit_lib::rule::{ConfigMode, RuleRegistry};
use formkit_lib::{ErrorMapping, FormConfig, Record, validate};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::error::CliError;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Declarative form validation from the command line.
#[derive(Parser)]
#[command(name = "formkit", version, about = "Declarative form validation")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Log to stderr instead of the log file
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct ConfigArgs {
    /// Form config JSON (defaults to form.json in the user config directory)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Ignore unknown rule kinds and thresholdless length rules
    #[arg(long)]
    lenient: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a form config and report its rules
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Validate a record JSON file against the form's rules
    Validate {
        #[command(flatten)]
        config: ConfigArgs,
        /// Record JSON file (a flat object of field values)
        #[arg(long, short)]
        record: PathBuf,
    },

    /// Apply change events and actions read line by line from stdin
    Session {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Commands::Check { config } => {
            let form = load_config(&config)?;
            match cli.output {
                OutputFormat::Text => {
                    for field in form.rules.fields() {
                        let kinds: Vec<&str> = field.rules().iter().map(|r| r.kind()).collect();
                        println!("{}: {}", field.name(), kinds.join(", "));
                    }
                    println!(
                        "{} fields, {} rules, validate on change: {}",
                        form.rules.len(),
                        form.rules.rule_count(),
                        form.validate_on_change
                    );
                }
                OutputFormat::Json => {
                    let fields: serde_json::Map<String, serde_json::Value> = form
                        .rules
                        .fields()
                        .map(|field| {
                            let kinds: Vec<&str> = field.rules().iter().map(|r| r.kind()).collect();
                            (field.name().to_string(), serde_json::json!(kinds))
                        })
                        .collect();
                    let summary = serde_json::json!({
                        "fields": fields,
                        "rules": form.rules.rule_count(),
                        "validate_on_change": form.validate_on_change,
                    });
                    println!("{}", summary);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { config, record } => {
            let form = load_config(&config)?;
            let record = read_record(&record)?;
            let errors = validate(&record, &form.rules);
            print_errors(&errors, cli.output)?;
            Ok(if errors.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Session { config } => {
            let mut form = FormState::from_config(load_config(&config)?);
            let applied = session::run(
                &mut form,
                io::stdin().lock(),
                io::stdout().lock(),
                io::stderr(),
            )?;
            log::info!("Session ended after {} lines", applied);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(args: &ConfigArgs) -> Result<FormConfig, CliError> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => paths::default_form_config().ok_or(CliError::NoConfig)?,
    };
    let mode = if args.lenient {
        ConfigMode::Lenient
    } else {
        ConfigMode::Strict
    };
    log::info!("Using form config {} ({:?})", path.display(), mode);
    Ok(FormConfig::load(&path, &RuleRegistry::builtin(), mode)?)
}

fn read_record(path: &Path) -> Result<Record, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadRecord {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn print_errors(errors: &ErrorMapping, output: OutputFormat) -> Result<(), CliError> {
    match output {
        OutputFormat::Text if errors.is_empty() => println!("valid"),
        OutputFormat::Text => println!("{}", errors),
        OutputFormat::Json => println!("{}", serde_json::to_string(errors)?),
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    if verbose {
        let _ = TermLogger::init(
            LevelFilter::Debug,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
        return;
    }

    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
    }
}
