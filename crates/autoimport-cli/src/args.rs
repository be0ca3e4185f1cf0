use clap::Parser;
use std::path::PathBuf;

/// Default file filter applied while walking directories.
pub const DEFAULT_INCLUDE: &str = "**/*.{js,jsx,ts,tsx,mjs,mts,vue}";

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "autoimport.json";

/// CLI arguments for the autoimport binary.
#[derive(Parser, Debug)]
#[command(
    name = "autoimport",
    version,
    about = "Inject import declarations for free identifiers"
)]
pub struct CliArgs {
    /// Files or directories to transform.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Path to the config file (defaults to ./autoimport.json when present).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Glob selecting files while walking directories.
    #[arg(long, default_value = DEFAULT_INCLUDE)]
    pub include: String,

    /// Rewrite files in place instead of printing them.
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Generate source maps even if the config turns them off.
    #[arg(long = "source-map")]
    pub source_map: bool,

    /// Append the source map to the output as a data URL comment.
    #[arg(long = "inline-source-map")]
    pub inline_source_map: bool,

    /// Only list the files that would change.
    #[arg(long = "dry-run", conflicts_with = "write")]
    pub dry_run: bool,
}

impl CliArgs {
    pub fn wants_source_map(&self) -> bool {
        self.source_map || self.inline_source_map
    }
}
