//! CLI command implementations

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use includeme_core::{Mode, token_at};
use includeme_insert::{Buffer, include_symbol};
use includeme_tables::derive::{derive_cpp_table, to_json};
use includeme_tables::{IncludemeConfig, Registry, ResolveError, TableSource};

fn registry(config: Option<PathBuf>) -> anyhow::Result<Registry> {
    let cwd = std::env::current_dir()?;
    let config = IncludemeConfig::discover(config.as_deref(), &cwd)?;
    Ok(Registry::new(config))
}

/// Map a failed resolution to the CLI outcome. Not-found prints its message
/// and exits with a failing code; any other resolution error is a real error.
fn resolve_failure(err: ResolveError) -> anyhow::Result<ExitCode> {
    if err.is_not_found() {
        eprintln!("{}", err);
        return Ok(ExitCode::FAILURE);
    }
    Err(err.into())
}

pub fn resolve(config: Option<PathBuf>, token: &str, mode: &str, json: bool) -> anyhow::Result<ExitCode> {
    let registry = registry(config)?;

    let resolved = match registry.resolve(token, &Mode::from(mode)) {
        Ok(resolved) => resolved,
        Err(e) => return resolve_failure(e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}: {}", resolved.canonical_name, resolved.headers.join(" "));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse `LINE:COLUMN` (1-based) and pick the token there.
fn token_under_cursor(text: &str, at: &str) -> anyhow::Result<String> {
    let (line, column) = at
        .split_once(':')
        .with_context(|| format!("expected LINE:COLUMN, got {}", at))?;
    let line: usize = line.parse().with_context(|| format!("bad line number: {}", line))?;
    let column: usize = column
        .parse()
        .with_context(|| format!("bad column number: {}", column))?;

    let Some(source_line) = line.checked_sub(1).and_then(|i| text.lines().nth(i)) else {
        bail!("line {} is out of range", line);
    };
    match token_at(source_line, column.saturating_sub(1)) {
        Some(token) => Ok(token.to_string()),
        None => bail!("no symbol at {}", at),
    }
}

fn mode_for(registry: &Registry, mode: Option<String>, file: &Path) -> anyhow::Result<Mode> {
    if let Some(mode) = mode {
        return Ok(Mode::from(mode));
    }
    match registry.config().mode_for_path(file) {
        Some(mode) => Ok(mode),
        None => bail!("cannot tell the mode of {}, pass --mode", file.display()),
    }
}

pub fn insert(
    config: Option<PathBuf>,
    file: PathBuf,
    token: Option<String>,
    at: Option<String>,
    mode: Option<String>,
    dry_run: bool,
) -> anyhow::Result<ExitCode> {
    let registry = registry(config)?;
    let mode = mode_for(&registry, mode, &file)?;

    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let token = match (token, at) {
        (Some(token), _) => token,
        (None, Some(at)) => token_under_cursor(&text, &at)?,
        (None, None) => bail!("give a symbol or --at LINE:COLUMN"),
    };

    let resolved = match registry.resolve(&token, &mode) {
        Ok(resolved) => resolved,
        Err(e) => return resolve_failure(e),
    };

    let mut buffer = Buffer::from_text(&text);
    let report = include_symbol(&mut buffer, &resolved, &token);
    tracing::info!("{}: {}", file.display(), report);

    if dry_run {
        print!("{}", buffer);
    } else if !report.is_nothing_to_do() {
        std::fs::write(&file, buffer.to_text())
            .with_context(|| format!("failed to write {}", file.display()))?;
    }

    eprintln!("{}", report);
    Ok(ExitCode::SUCCESS)
}

pub fn modes(config: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    let registry = registry(config)?;
    let config = registry.config();

    for mode in config.modes() {
        let tables: Vec<String> = config
            .tables_for(&mode)
            .unwrap_or_default()
            .iter()
            .map(TableSource::to_string)
            .collect();
        println!("{}: {}", mode, tables.join(", "));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn stats(config: Option<PathBuf>, mode: Option<String>) -> anyhow::Result<ExitCode> {
    let registry = registry(config)?;
    let modes: Vec<Mode> = match mode {
        Some(mode) => vec![Mode::from(mode)],
        None => registry.config().modes().collect(),
    };

    for mode in modes {
        let index = registry.index(&mode)?;
        println!("{}: {} entries, height {}", mode, index.len(), index.height());
    }
    Ok(ExitCode::SUCCESS)
}

pub fn derive(c: PathBuf, cpp: PathBuf, output: Option<PathBuf>) -> anyhow::Result<ExitCode> {
    tracing::info!("Deriving C++ table from {} and {}", c.display(), cpp.display());

    let c_entries = TableSource::File(c).load()?;
    let cpp_entries = TableSource::File(cpp).load()?;
    let json = to_json(&derive_cpp_table(&c_entries, cpp_entries))?;

    match output {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", json),
    }
    Ok(ExitCode::SUCCESS)
}
