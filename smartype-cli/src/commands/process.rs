//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use smartype_core::{parse_passes, transform_with, Options, Pass};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{Document, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Rewrite input files in place
    #[arg(long, conflicts_with = "output")]
    pub in_place: bool,

    /// Fragment separator, as a character or a code point like U+E000
    #[arg(long, value_name = "SEP", env = "SMARTYPE_SEPARATOR")]
    pub separator: Option<String>,

    /// Run only the named passes (repeatable; default: all)
    #[arg(long = "pass", value_name = "NAME")]
    pub passes: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of worker threads (default: one per core)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    /// Rewrite options
    pub options: Options,
    /// Passes to run
    pub passes: Vec<Pass>,
    /// Output format
    pub format: OutputFormat,
    /// Indent JSON output
    pub pretty_json: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let settings = self.resolve_settings()?;
        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Processing {} file(s) with passes: {:?}",
            files.len(),
            settings.passes
        );

        let documents = self.process_files(&files, &settings)?;

        if self.in_place {
            Self::write_in_place(&documents)
        } else {
            self.write_output(&documents, &settings)
        }
    }

    /// Merge the config file (if any) with command-line flags
    pub fn resolve_settings(&self) -> Result<ResolvedSettings> {
        if self.in_place && self.output.is_some() {
            return Err(
                CliError::ConflictingOptions("--in-place cannot be used with --output".into())
                    .into(),
            );
        }

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let options = match &self.separator {
            Some(separator) => Options::builder()
                .separator_str(separator)
                .and_then(|builder| builder.build())
                .map_err(CliError::from)?,
            None => config.options()?,
        };

        let passes = if self.passes.is_empty() {
            config.passes()?
        } else {
            parse_passes(self.passes.as_slice()).map_err(CliError::from)?
        };

        Ok(ResolvedSettings {
            options,
            passes,
            format: self.format.unwrap_or(config.output.format),
            pretty_json: config.output.pretty_json,
        })
    }

    /// Rewrite every file on the worker pool, keeping input order
    fn process_files(
        &self,
        files: &[PathBuf],
        settings: &ResolvedSettings,
    ) -> Result<Vec<Document>> {
        let mut progress = ProgressReporter::new(self.quiet || files.len() <= 1);
        progress.init_files(files.len() as u64);

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .context("Failed to build worker thread pool")?;

        let documents = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let document = Self::process_file(path, settings)?;
                    progress.file_completed(&path.display().to_string());
                    Ok(document)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        progress.finish();
        Ok(documents)
    }

    fn process_file(path: &Path, settings: &ResolvedSettings) -> Result<Document> {
        let original = FileReader::read_text(path)?;
        let text = transform_with(&original, &settings.options, &settings.passes);
        let document = Document::new(path.to_path_buf(), &original, text);
        log::debug!(
            "{}: {}",
            path.display(),
            if document.changed { "rewritten" } else { "unchanged" }
        );
        Ok(document)
    }

    fn write_in_place(documents: &[Document]) -> Result<()> {
        let mut rewritten = 0;
        for document in documents.iter().filter(|document| document.changed) {
            FileReader::write_text(&document.path, &document.text)?;
            rewritten += 1;
        }
        log::info!("Rewrote {} of {} file(s)", rewritten, documents.len());
        Ok(())
    }

    fn write_output(&self, documents: &[Document], settings: &ResolvedSettings) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let mut formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
        };

        for document in documents {
            formatter.format_document(document)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
