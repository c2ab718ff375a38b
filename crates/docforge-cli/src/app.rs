//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use docforge_ast::DocumentFormat;
use docforge_core::{parse_metadata, ConversionResult, Settings, TemplateRegistry};

use crate::convert::{convert, ConversionRequest};

/// Environment variable holding an env-filter directive
pub const LOG_ENV: &str = "DOCFORGE_LOG";

/// Settings files looked up in the working directory, in order
pub const SETTINGS_CANDIDATES: [&str; 2] = ["docforge.toml", ".docforge.toml"];

/// Output format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Word document
    Docx,
    /// Excel spreadsheet
    Xlsx,
    /// PowerPoint presentation
    Pptx,
    /// PDF via an external converter
    Pdf,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Docx => DocumentFormat::Docx,
            OutputFormat::Xlsx => DocumentFormat::Xlsx,
            OutputFormat::Pptx => DocumentFormat::Pptx,
            OutputFormat::Pdf => DocumentFormat::Pdf,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "docforge")]
#[command(author, version, about = "Convert text and markdown to Word, Excel, PowerPoint and PDF", long_about = None)]
struct Cli {
    /// Output format
    #[arg(value_enum)]
    format: OutputFormat,

    /// Input file (text/markdown)
    input_file: PathBuf,

    /// Output file path (default: input path with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Document title
    #[arg(short, long)]
    title: Option<String>,

    /// Template style
    #[arg(long, value_parser = PossibleValuesParser::new(TemplateRegistry::names()))]
    template: Option<String>,

    /// JSON metadata string (author, subject)
    #[arg(long)]
    metadata: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Run the CLI application
///
/// Parses arguments, loads settings, runs one conversion and prints its
/// result line. A settings error is printed as a failed result. The
/// returned exit code follows the result's success flag.
pub fn run_cli() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match load_settings(cli.config.as_deref()) {
        Ok(settings) => run(&cli, &settings),
        Err(e) => settings_failure(&cli, &e),
    };

    println!("{}", result);
    Ok(ExitCode::from(result.exit_code()))
}

/// Install the stderr log subscriber
///
/// `log` records from the library crates are bridged into `tracing`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // A second initialisation (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Destination path: `--output`, or the input path with the format's extension
fn output_path(cli: &Cli) -> PathBuf {
    let format = DocumentFormat::from(cli.format);
    cli.output
        .clone()
        .unwrap_or_else(|| cli.input_file.with_extension(format.extension()))
}

/// Report a settings error on the same single result line as conversions
fn settings_failure(cli: &Cli, err: &anyhow::Error) -> ConversionResult {
    ConversionResult::failure(output_path(cli), format!("{:#}", err))
}

/// Execute one conversion
fn run(cli: &Cli, settings: &Settings) -> ConversionResult {
    let format = DocumentFormat::from(cli.format);
    let input = &cli.input_file;
    let output = output_path(cli);

    if !input.exists() {
        return ConversionResult::failure(
            output,
            format!("Input file not found: {}", input.display()),
        );
    }

    let content = match fs::read_to_string(input) {
        Ok(content) => content,
        Err(e) => {
            return ConversionResult::failure(
                output,
                format!("Failed to read input file {}: {}", input.display(), e),
            )
        }
    };

    let metadata = match cli.metadata.as_deref().map(parse_metadata).transpose() {
        Ok(metadata) => metadata,
        Err(e) => {
            log::debug!("{}", e);
            return ConversionResult::failure(output, "Invalid metadata JSON");
        }
    };

    let template = cli
        .template
        .as_deref()
        .unwrap_or(settings.defaults.template.as_str());

    let request = ConversionRequest {
        content,
        title: cli
            .title
            .clone()
            .unwrap_or_else(|| settings.defaults.title.clone()),
        style: TemplateRegistry::resolve(template),
        metadata,
        output,
        pdf: settings.pdf.clone(),
    };

    convert(format, &request)
}

/// Load settings from a config file or use defaults
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    load_settings_in(config_path, Path::new("."))
}

/// Load settings, looking for candidate files in `dir` when no path is given
fn load_settings_in(config_path: Option<&Path>, dir: &Path) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            read_settings(path)
        }
        None => {
            for candidate in SETTINGS_CANDIDATES {
                let path = dir.join(candidate);
                if path.exists() {
                    log::debug!("Using settings from {}", path.display());
                    return read_settings(&path);
                }
            }
            Ok(Settings::default())
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    Settings::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::try_parse_from(["docforge", "docx", "notes.md"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Docx);
        assert_eq!(cli.input_file, PathBuf::from("notes.md"));
        assert!(cli.output.is_none());
        assert!(cli.title.is_none());
        assert!(cli.template.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_all_options() {
        let cli = Cli::try_parse_from([
            "docforge",
            "pptx",
            "deck.md",
            "-o",
            "out.pptx",
            "-t",
            "Quarterly",
            "--template",
            "executive",
            "--metadata",
            r#"{"author":"Ann"}"#,
            "-c",
            "custom.toml",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Pptx);
        assert_eq!(cli.output, Some(PathBuf::from("out.pptx")));
        assert_eq!(cli.title.as_deref(), Some("Quarterly"));
        assert_eq!(cli.template.as_deref(), Some("executive"));
        assert_eq!(cli.metadata.as_deref(), Some(r#"{"author":"Ann"}"#));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_template() {
        assert!(Cli::try_parse_from(["docforge", "docx", "a.md", "--template", "fancy"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["docforge", "odt", "a.md"]).is_err());
    }

    #[test]
    fn test_format_mapping() {
        assert_eq!(DocumentFormat::from(OutputFormat::Xlsx), DocumentFormat::Xlsx);
        assert_eq!(DocumentFormat::from(OutputFormat::Pdf).extension(), "pdf");
    }

    #[test]
    fn test_load_settings_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_in(None, dir.path()).unwrap();
        assert_eq!(settings.defaults.title, "Document");
        assert_eq!(settings.defaults.template, "professional");
        assert_eq!(settings.pdf.timeout_secs, 30);
    }

    #[test]
    fn test_load_settings_discovers_candidate() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".docforge.toml"),
            "[defaults]\ntemplate = \"casual\"\n",
        )
        .unwrap();

        let settings = load_settings_in(None, dir.path()).unwrap();
        assert_eq!(settings.defaults.template, "casual");
        assert_eq!(settings.defaults.title, "Document");
    }

    #[test]
    fn test_load_settings_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_settings_in(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_settings_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docforge.toml");
        fs::write(&path, "[pdf]\ntimeout_secs = \"soon\"\n").unwrap();

        let err = load_settings_in(None, dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_settings_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docforge.toml");
        fs::write(&path, "[pdf]\ntimeout_secs = 0\n").unwrap();

        let err = load_settings_in(Some(&path), dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("pdf.timeout_secs"));
    }

    #[test]
    fn test_settings_failure_is_one_result_line() {
        let cli = Cli::try_parse_from(["docforge", "xlsx", "data.csv"]).unwrap();
        let err = anyhow::anyhow!("Invalid settings: bad value")
            .context("Failed to parse config: docforge.toml");

        let result = settings_failure(&cli, &err);
        assert!(!result.success);
        assert_eq!(result.exit_code(), 1);
        assert_eq!(result.output_path, PathBuf::from("data.xlsx"));
        assert_eq!(
            result.to_string(),
            "❌ Failed to parse config: docforge.toml: Invalid settings: bad value"
        );
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.md");
        let args: Vec<OsString> = vec!["docforge".into(), "docx".into(), input.into_os_string()];
        let cli = Cli::try_parse_from(args).unwrap();

        let result = run(&cli, &Settings::default());
        assert!(!result.success);
        assert_eq!(result.output_path, dir.path().join("absent.docx"));
        assert!(result.message.starts_with("Input file not found:"));
    }

    #[test]
    fn test_run_invalid_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.md");
        fs::write(&input, "text").unwrap();
        let args: Vec<OsString> = vec![
            "docforge".into(),
            "docx".into(),
            input.into_os_string(),
            "--metadata".into(),
            "[1, 2]".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let result = run(&cli, &Settings::default());
        assert!(!result.success);
        assert_eq!(result.message, "Invalid metadata JSON");
        assert!(!dir.path().join("in.docx").exists());
    }
}
