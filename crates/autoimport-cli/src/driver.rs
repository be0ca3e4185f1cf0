//! File discovery and per-file transformation.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autoimport_core::{
    ResolutionCache, TransformConfig, TransformOptions, TransformResult, load_config,
    transform_with_cache,
};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::args::{CliArgs, DEFAULT_CONFIG_FILE};

/// Outcome of one CLI run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub changed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Load the config named by `--config`, or `autoimport.json` in `cwd` if it
/// exists, and compile it into transform options.
pub fn resolve_options(args: &CliArgs, cwd: &Path) -> Result<TransformOptions> {
    let config = match &args.config {
        Some(path) => load_config(&cwd.join(path))?,
        None => {
            let default_path = cwd.join(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_config(&default_path)?
            } else {
                TransformConfig::default()
            }
        }
    };

    let mut options = config
        .into_options()
        .context("failed to compile autoimport config")?;
    if args.wants_source_map() {
        options.source_map = true;
    }
    Ok(options)
}

pub fn build_include(pattern: &str) -> Result<GlobSet> {
    let glob = Glob::new(pattern).with_context(|| format!("invalid --include glob: {pattern}"))?;
    let mut builder = GlobSetBuilder::new();
    builder.add(glob);
    builder
        .build()
        .with_context(|| format!("invalid --include glob: {pattern}"))
}

/// Expand `paths` into the files to transform.
///
/// Files named directly are always included. Directories are walked in
/// file-name order and filtered by `include`, matched against the path
/// relative to the walked directory.
pub fn collect_files(paths: &[PathBuf], include: &GlobSet) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(path).unwrap_or(entry.path());
            if include.is_match(relative) {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

/// Transform every selected file, sharing one resolution cache.
///
/// Rewritten code goes to `stdout` unless `--write` or `--dry-run` is set.
/// Per-file failures are collected in the summary instead of stopping the
/// run.
pub async fn run(args: &CliArgs, cwd: &Path, stdout: &mut dyn Write) -> Result<RunSummary> {
    let options = resolve_options(args, cwd)?;
    let include = build_include(&args.include)?;
    let paths: Vec<PathBuf> = args.paths.iter().map(|path| cwd.join(path)).collect();
    let files = collect_files(&paths, &include)?;

    let mut cache = ResolutionCache::new();
    let mut summary = RunSummary::default();

    for file in files {
        summary.scanned += 1;
        match transform_file(&file, args, &options, &mut cache, stdout).await {
            Ok(true) => summary.changed.push(file),
            Ok(false) => debug!(file = %file.display(), "unchanged"),
            Err(err) => {
                warn!(file = %file.display(), error = %err, "transform failed");
                summary.failed.push((file, format!("{err:#}")));
            }
        }
    }

    Ok(summary)
}

async fn transform_file(
    file: &Path,
    args: &CliArgs,
    options: &TransformOptions,
    cache: &mut ResolutionCache,
    stdout: &mut dyn Write,
) -> Result<bool> {
    let code = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let id = file.to_string_lossy();

    let Some(result) = transform_with_cache(&code, &id, options, cache).await? else {
        return Ok(false);
    };

    if args.dry_run {
        writeln!(stdout, "{}", file.display())?;
        return Ok(true);
    }

    let output = render_output(&result, args.inline_source_map);
    if args.write {
        std::fs::write(file, &output)
            .with_context(|| format!("failed to write {}", file.display()))?;
        if let Some(map) = result.map.as_ref().filter(|_| !args.inline_source_map) {
            let map_path = map_path_for(file);
            std::fs::write(&map_path, map.to_json())
                .with_context(|| format!("failed to write {}", map_path.display()))?;
        }
    } else {
        stdout.write_all(output.as_bytes())?;
    }
    Ok(true)
}

fn render_output(result: &TransformResult, inline_map: bool) -> String {
    match result.map.as_ref().filter(|_| inline_map) {
        Some(map) => {
            let mut output = result.code.clone();
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(&map.to_inline_comment());
            output.push('\n');
            output
        }
        None => result.code.clone(),
    }
}

/// `src/a.ts` -> `src/a.ts.map`
pub fn map_path_for(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".map");
    PathBuf::from(name)
}
