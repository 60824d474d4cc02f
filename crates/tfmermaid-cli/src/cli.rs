//! Command-line interface for the tfmermaid utility
//!
//! Provides a CLI to turn Terraform state and plan JSON into Mermaid.js diagrams.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use tfmermaid::core::logging::init_logging;
use tfmermaid::plugins::MermaidGenerator;
use tfmermaid::{DiagramError, DiagramKind, OutputFormat, Resource, ResourceDatabase};

/// tfmermaid - Generate Mermaid.js diagrams from Terraform state
#[derive(Parser)]
#[command(name = "tfmermaid")]
#[command(about = "Generate Mermaid diagrams from Terraform state and plan JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate diagram files from a state or plan JSON file
    Generate {
        /// Path to terraform.tfstate or `terraform show -json` output
        state_file: PathBuf,

        /// Output file base name (default: <type>.mmd in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Diagram type to generate
        #[arg(short = 't', long = "type", value_enum, default_value_t = KindChoice::Architecture)]
        kind: KindChoice,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatChoice::Mermaid)]
        format: FormatChoice,
    },

    /// List the resources parsed from a state or plan JSON file
    Resources {
        /// Path to terraform.tfstate or `terraform show -json` output
        state_file: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show supported diagram types
    Kinds {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Diagram selection, including `all`
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum KindChoice {
    #[default]
    Architecture,
    Network,
    Dataflow,
    All,
}

impl KindChoice {
    /// The diagram kinds this selection expands to
    pub fn kinds(&self) -> Vec<DiagramKind> {
        match self {
            KindChoice::Architecture => vec![DiagramKind::Architecture],
            KindChoice::Network => vec![DiagramKind::Network],
            KindChoice::Dataflow => vec![DiagramKind::DataFlow],
            KindChoice::All => DiagramKind::ALL.to_vec(),
        }
    }
}

/// Output format selection
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum FormatChoice {
    /// Raw Mermaid text
    #[default]
    Mermaid,
    /// Mermaid fenced in a markdown code block
    Markdown,
}

impl From<FormatChoice> for OutputFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Mermaid => OutputFormat::Mermaid,
            FormatChoice::Markdown => OutputFormat::Markdown,
        }
    }
}

/// One row of the `resources` listing
#[derive(Debug, Serialize)]
struct ResourceSummary<'a> {
    address: &'a str,
    #[serde(rename = "type")]
    resource_type: &'a str,
    name: &'a str,
    provider: &'a str,
    category: &'static str,
    icon: &'static str,
    color: &'static str,
    dependencies: &'a [String],
}

impl<'a> From<&'a Resource> for ResourceSummary<'a> {
    fn from(resource: &'a Resource) -> Self {
        Self {
            address: &resource.address,
            resource_type: &resource.resource_type,
            name: &resource.name,
            provider: &resource.provider,
            category: resource.category().name(),
            icon: resource.icon(),
            color: resource.color(),
            dependencies: &resource.dependencies,
        }
    }
}

/// Where a diagram of `kind` is written
///
/// Without a base path this is `<kind>.mmd`; with `dir/base.ext` it is
/// `dir/base-<kind>.ext`. Markdown output always uses the `.md` extension.
pub fn output_path(output: Option<&Path>, kind: DiagramKind, format: OutputFormat) -> PathBuf {
    let path = match output {
        Some(base) => {
            let stem = base.file_stem().unwrap_or_default().to_string_lossy();
            let file_name = match base.extension() {
                Some(ext) => format!("{}-{}.{}", stem, kind, ext.to_string_lossy()),
                None => format!("{}-{}", stem, kind),
            };
            base.with_file_name(file_name)
        }
        None => PathBuf::from(format!("{}.mmd", kind)),
    };

    match format {
        OutputFormat::Markdown => path.with_extension(OutputFormat::Markdown.extension()),
        OutputFormat::Mermaid => path,
    }
}

/// Main CLI application
#[derive(Default)]
pub struct TfMermaidApp;

impl TfMermaidApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("TFMERMAID_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("TFMERMAID_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("tfmermaid v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                state_file,
                output,
                kind,
                format,
            } => self
                .generate_command(&state_file, output.as_deref(), kind, format.into(), cli.verbose)
                .map(|_| ()),
            Commands::Resources { state_file, json } => {
                self.resources_command(&state_file, json, cli.verbose)
            }
            Commands::Kinds { json } => self.kinds_command(json),
        }
    }

    /// Parse the input file, reporting a missing path as an input error
    pub fn load(&self, state_file: &Path) -> Result<ResourceDatabase> {
        if !state_file.exists() {
            return Err(DiagramError::state_file_not_found(state_file).into());
        }
        tfmermaid::parse_state_file(state_file)
            .with_context(|| format!("Failed to parse '{}'", state_file.display()))
    }

    /// Handle the generate command, returning the files written
    pub fn generate_command(
        &self,
        state_file: &Path,
        output: Option<&Path>,
        kind: KindChoice,
        format: OutputFormat,
        verbose: bool,
    ) -> Result<Vec<PathBuf>> {
        println!("Parsing Terraform state: {}", state_file.display());
        let database = self.load(state_file)?;
        println!("Found {} resources", database.len());

        if database.is_empty() {
            warn!(path = %state_file.display(), "No resources found in state file");
            println!("⚠️  WARNING: No resources found in state file!");
            println!("This could mean:");
            println!("  1. Terraform plan had no resources to create");
            println!("  2. State file format is not recognized");
            println!("  3. Resources are in an unexpected location in the JSON");
            println!();
            println!("Generating minimal placeholder diagrams...");
            println!();
        }

        let generator = MermaidGenerator::new(&database);
        let diagrams = generator.generate_many(&kind.kinds(), format)?;

        let mut written = Vec::with_capacity(diagrams.len());
        for (diagram_kind, content) in diagrams {
            let path = output_path(output, diagram_kind, format);
            self.write_output(&path, &content)?;
            if verbose {
                eprintln!("Wrote {} bytes", content.len());
            }
            println!("Generated {} diagram: {}", diagram_kind, path.display());
            written.push(path);
        }

        Ok(written)
    }

    /// Handle the resources command
    fn resources_command(&self, state_file: &Path, json: bool, verbose: bool) -> Result<()> {
        let database = self.load(state_file)?;

        if verbose {
            eprintln!("Parsed {} resources", database.len());
        }

        if json {
            let summaries: Vec<ResourceSummary> = database.resources().map(Into::into).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        } else {
            for line in Self::resource_lines(&database) {
                println!("{}", line);
            }
            println!();
            println!("Total: {} resources", database.len());
        }

        Ok(())
    }

    /// Human-readable listing, one line per resource
    fn resource_lines(database: &ResourceDatabase) -> Vec<String> {
        database
            .resources()
            .map(|resource| {
                let resolved = database.resolved_dependencies(resource).count();
                format!(
                    "{:<10} {} {} ({} deps)",
                    resource.category().name(),
                    resource.icon(),
                    resource.address,
                    resolved
                )
            })
            .collect()
    }

    /// Handle the kinds command
    fn kinds_command(&self, json: bool) -> Result<()> {
        if json {
            let kinds: Vec<serde_json::Value> = DiagramKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind,
                        "description": kind.description(),
                        "data_driven": kind.is_data_driven(),
                    })
                })
                .collect();
            let listing = serde_json::json!({
                "supported_kinds": kinds,
                "total": DiagramKind::ALL.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("Supported diagram types:");
            for kind in DiagramKind::ALL {
                println!("  {:<13} - {}", kind.name(), kind.description());
            }
            println!("  {:<13} - Every type above", "all");
        }

        Ok(())
    }

    /// Write diagram text to a file
    pub fn write_output(&self, path: &Path, content: &str) -> Result<()> {
        debug!(path = %path.display(), bytes = content.len(), "Writing diagram");
        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write output file '{}': {}", path.display(), e))
    }
}
