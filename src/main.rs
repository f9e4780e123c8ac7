use component_ws::adapters::outbound::console::StderrProgressReporter;
use component_ws::adapters::outbound::filesystem::FileSystemReader;
use component_ws::application::dto::{OutputFormat, ShowComponentRequest};
use component_ws::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use component_ws::application::use_cases::ShowComponentUseCase;
use component_ws::cli::Args;
use component_ws::config::{self, ConfigFile};
use component_ws::ports::outbound::ProgressReporter;
use component_ws::shared::error::ExitCode;
use component_ws::shared::logging::{init_logging, LoggingConfig};
use component_ws::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

/// Effective settings after merging CLI arguments over the config file
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    output: Option<PathBuf>,
    verbose: bool,
}

impl Settings {
    /// CLI flags win over config values, config values over defaults
    fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        Self {
            format: args
                .format
                .or_else(|| config.and_then(ConfigFile::output_format))
                .unwrap_or_default(),
            output: args
                .output
                .clone()
                .or_else(|| config.and_then(|c| c.output.clone())),
            verbose: args.verbose || config.and_then(|c| c.verbose).unwrap_or(false),
        }
    }
}

fn main() {
    let args = Args::parse_args();
    let reporter = StderrProgressReporter::with_quiet(args.quiet);

    if let Err(e) = run(args, reporter) {
        reporter.report_error(&format!("\n❌ An error occurred:\n\n{}", e));

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            reporter.report_error(&format!("\nCaused by: {}", err));
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args, reporter: StderrProgressReporter) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config.as_ref());

    init_logging(if settings.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    });
    if let Some(config) = &config {
        config.warn_unknown_fields();
    }
    debug!(?settings, "resolved settings");

    // Create use case with injected dependencies
    let use_case = ShowComponentUseCase::new(FileSystemReader::new(), reporter);
    let response = use_case.execute(ShowComponentRequest::new(args.input.clone()))?;

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output.clone()));
    presenter.present(&formatted_output)?;

    if let Some(path) = &settings.output {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise look next to the input document
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(input_directory(&args.input)),
    }
}

fn input_directory(input: &Path) -> &Path {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["component-ws", "-i", "request.json"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(&args(&[]), None);
        assert_eq!(
            settings,
            Settings {
                format: OutputFormat::Json,
                output: None,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_settings_from_config() {
        let config = config("format: markdown\noutput: out.md\nverbose: true\n");
        let settings = Settings::resolve(&args(&[]), Some(&config));

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.output, Some(PathBuf::from("out.md")));
        assert!(settings.verbose);
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = config("format: markdown\noutput: out.md\n");
        let settings = Settings::resolve(&args(&["-f", "json", "-o", "cli.json"]), Some(&config));

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.output, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_input_directory() {
        assert_eq!(input_directory(Path::new("request.json")), Path::new("."));
        assert_eq!(
            input_directory(Path::new("fixtures/request.json")),
            Path::new("fixtures")
        );
    }
}
