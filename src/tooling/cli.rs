//! CLI Tooling
//!
//! Command-line interface for generating comparison pairs, rating them
//! interactively, and reviewing or exporting recorded preferences.

use crate::config::{ConfigLoader, RaterConfig};
use crate::error::{ApiError, StorageError};
use crate::export;
use crate::generator;
use crate::logging::LoggingConfig;
use crate::session::{DocumentNaming, RatingSession, SessionEvent, SessionView};
use crate::store::{PreferenceStore, Record};
use crate::tooling::prompt::{DialoguerPrompter, PromptAction, Prompter};
use crate::views;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefpair CLI - pairwise media preference collection
#[derive(Parser)]
#[command(name = "prefpair")]
#[command(about = "Collect A/B preferences over pairs of media items")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging flags folded over the configured `[logging]` section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the comparison pairs and print them
    Generate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Rate pairs interactively
    Rate {
        /// Directory for the session document (overrides session.results_dir)
        #[arg(long)]
        results_dir: Option<PathBuf>,
        /// Continue an existing session document instead of starting a new one
        #[arg(long)]
        resume: Option<PathBuf>,
    },
    /// Show the preferences recorded in a session document
    Review {
        /// Session document (result_*.json)
        document: PathBuf,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Export a session document as CSV
    Export {
        /// Session document (result_*.json)
        document: PathBuf,
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

/// CLI context holding the workspace and its resolved configuration
pub struct CliContext {
    workspace_root: PathBuf,
    config: RaterConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::resolve(&workspace_root, config_path.as_deref())?;
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create a context from an already resolved configuration
    pub fn with_config(workspace_root: PathBuf, config: RaterConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &RaterConfig {
        &self.config
    }

    /// Execute a CLI command, prompting on the terminal when needed
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        self.execute_with_prompter(command, &mut DialoguerPrompter)
    }

    /// Execute a CLI command with a caller-provided prompter
    pub fn execute_with_prompter(
        &self,
        command: &Commands,
        prompter: &mut dyn Prompter,
    ) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Generate { format } => self.handle_generate(format),
            Commands::Rate {
                results_dir,
                resume,
            } => self.handle_rate(results_dir.as_deref(), resume.as_deref(), prompter),
            Commands::Review { document, format } => self.handle_review(document, format),
            Commands::Export { document, output } => {
                self.handle_export(document, output.as_deref())
            }
            Commands::Config => toml::to_string_pretty(&self.config).map_err(|e| {
                ApiError::ConfigError(format!("Failed to serialize configuration: {}", e))
            }),
        }
    }

    fn handle_generate(&self, format: &str) -> Result<String, ApiError> {
        let tasks = generator::generate(&self.config.pair_config(&self.workspace_root))?;
        match format {
            "text" => Ok(views::format_tasks_text(&tasks)),
            "json" => serde_json::to_string_pretty(&tasks)
                .map_err(|e| ApiError::StorageError(StorageError::Serialization(e))),
            other => Err(invalid_format(other, "text", "json")),
        }
    }

    fn handle_rate(
        &self,
        results_dir: Option<&Path>,
        resume: Option<&Path>,
        prompter: &mut dyn Prompter,
    ) -> Result<String, ApiError> {
        let tasks = generator::generate(&self.config.pair_config(&self.workspace_root))?;
        let dir = match results_dir {
            Some(dir) => self.workspace_root.join(dir),
            None => self
                .config
                .session
                .resolve_results_dir(&self.workspace_root),
        };
        let naming = DocumentNaming::new(dir, self.config.session.file_prefix.clone());

        let mut session = match resume {
            Some(document) => {
                let store = PreferenceStore::open(self.workspace_root.join(document))?;
                RatingSession::resume(tasks, store, naming)
            }
            None => RatingSession::start(tasks, naming)?,
        };

        if let Some(err) = session.store().load_error() {
            prompter.show(&format!(
                "Warning: {}. Starting with empty preferences.",
                err
            ));
        }

        let mut view = session.view();
        loop {
            let action = match &view {
                SessionView::Pair(pair) => {
                    prompter.show(&views::format_pair_view(pair));
                    prompter.pair_action(pair)?
                }
                SessionView::Complete(done) => {
                    prompter.show(&views::format_completion_view(done));
                    prompter.completion_action(done)?
                }
            };

            match action {
                PromptAction::Quit => break,
                PromptAction::Export => {
                    let path = session.store().location().with_extension("csv");
                    write_csv_file(session.store().all(), &path)?;
                    prompter.show(&format!("Exported results to {}", path.display()));
                    view = session.view();
                }
                PromptAction::Event(event) => match session.handle(event) {
                    Ok(next) => view = next,
                    Err(ApiError::StorageError(e)) => {
                        let failed = match event {
                            SessionEvent::NewRound => "Failed to create a new session document",
                            _ => "Failed to save preference",
                        };
                        prompter.show(&format!("{}: {}", failed, e));
                        view = session.view();
                    }
                    Err(e) => return Err(e),
                },
            }
        }

        Ok(format!(
            "Rated {} of {} pairs. Results in {}",
            session.store().len(),
            session.tasks().len(),
            session.store().location().display()
        ))
    }

    fn handle_review(&self, document: &Path, format: &str) -> Result<String, ApiError> {
        let store = self.open_document(document)?;
        match format {
            "table" if store.is_empty() => Ok("No preferences recorded yet.".to_string()),
            "table" => Ok(views::format_records_table(store.all())),
            "json" => serde_json::to_string_pretty(store.all())
                .map_err(|e| ApiError::StorageError(StorageError::Serialization(e))),
            other => Err(invalid_format(other, "table", "json")),
        }
    }

    fn handle_export(&self, document: &Path, output: Option<&Path>) -> Result<String, ApiError> {
        let store = self.open_document(document)?;
        match output {
            Some(path) => {
                let path = self.workspace_root.join(path);
                write_csv_file(store.all(), &path)?;
                Ok(format!(
                    "Exported {} records to {}",
                    store.len(),
                    path.display()
                ))
            }
            None => Ok(export::to_csv_string(store.all())?),
        }
    }

    /// Open an existing session document; a malformed one is an error here.
    fn open_document(&self, document: &Path) -> Result<PreferenceStore, ApiError> {
        let path = self.workspace_root.join(document);
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Preference document not found: {}",
                path.display()
            )));
        }
        let mut store = PreferenceStore::open(path)?;
        match store.take_load_error() {
            Some(err) => Err(ApiError::LoadError(err)),
            None => Ok(store),
        }
    }
}

fn write_csv_file(records: &[Record], path: &Path) -> Result<(), ApiError> {
    let file = std::fs::File::create(path).map_err(|source| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    export::write_csv(records, std::io::BufWriter::new(file))?;
    Ok(())
}

fn invalid_format(format: &str, first: &str, second: &str) -> ApiError {
    ApiError::ConfigError(format!(
        "Invalid format: {} (must be '{}' or '{}')",
        format, first, second
    ))
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Rate { .. } => "rate",
        Commands::Review { .. } => "review",
        Commands::Export { .. } => "export",
        Commands::Config => "config",
    }
}
