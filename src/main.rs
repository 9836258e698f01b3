//! toml2docs — generate markdown tables from annotated TOML files.
//!
//! Supports four modes:
//!
//! - **single file**: `toml2docs -i config.toml [-o docs/config.md]`
//! - **template**: `toml2docs -t README.tpl.md -o README.md`
//! - **batch**: `toml2docs -o docs/config config/*.toml`
//! - **stdin**: `toml2docs < config.toml`

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use toml2docs::{ArrayTablePolicy, Options};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "toml2docs",
    about = "Generate markdown documentation tables from annotated TOML files"
)]
struct Cli {
    /// TOML files to document in batch mode (glob patterns and directories supported)
    files: Vec<String>,

    /// The input TOML file
    #[arg(short = 'i', long)]
    input_file: Option<PathBuf>,

    /// Template file with {{ toml2docs "path" }} directives
    #[arg(short = 't', long)]
    template_file: Option<PathBuf>,

    /// Output file, or output directory in batch mode. Defaults to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only comments starting with this prefix are used as descriptions
    #[arg(short = 'p', long, default_value = "#")]
    comment_prefix: String,

    /// Which repeated [[array.table]] blocks get a heading row
    #[arg(long, value_enum, default_value_t = ArrayTablePolicy::First)]
    array_tables: ArrayTablePolicy,

    /// Print the parsed node stream instead of the table
    #[arg(short = 'd', long)]
    debug: bool,

    /// Log extraction details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = Options::default()
        .with_comment_prefix(cli.comment_prefix.as_str())
        .with_array_tables(cli.array_tables);

    if cli.input_file.is_some() && cli.template_file.is_some() {
        bail!("only one of --input-file or --template-file may be given");
    }

    if !cli.files.is_empty() {
        if cli.input_file.is_some() || cli.template_file.is_some() {
            bail!("positional files cannot be combined with --input-file or --template-file");
        }
        return batch_mode(&cli, &options);
    }

    let docs = match (&cli.template_file, &cli.input_file) {
        (Some(template), _) => toml2docs::generate_markdown_from_template(template, &options)
            .with_context(|| format!("failed to expand template {}", template.display()))?,
        (None, Some(input_file)) => {
            let input = fs::read_to_string(input_file)
                .with_context(|| format!("failed to read {}", input_file.display()))?;
            document(&input, &options, cli.debug)
                .with_context(|| format!("failed to document {}", input_file.display()))?
        }
        (None, None) => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            document(&input, &options, cli.debug).context("failed to document stdin")?
        }
    };

    write_output(cli.output.as_deref(), &docs)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// The table for `input`, or its node dump with `--debug`.
fn document(input: &str, options: &Options, debug: bool) -> toml2docs::Result<String> {
    if debug {
        toml2docs::dump_nodes(input)
    } else {
        toml2docs::generate_markdown(input, options)
    }
}

fn write_output(output: Option<&Path>, docs: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, docs).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote documentation");
        }
        None => print!("{}", docs),
    }
    Ok(())
}

/// batch mode: document every matched file into the output directory.
fn batch_mode(cli: &Cli, options: &Options) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let docs = match document(&content, options, cli.debug) {
            Ok(docs) => docs,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let out_path = output_dir.join(format!("{}.md", derive_output_name(path)));
        fs::write(&out_path, &docs)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(source = %path.display(), output = %out_path.display(), "wrote documentation");
    }

    Ok(())
}

/// Input files for batch mode, sorted and deduplicated.
///
/// Each argument is a file, a directory (its `.toml` files, not recursive) or
/// a glob pattern.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            toml_files_in(path)?
        } else {
            glob_files(pattern)?
        };
        if found.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(found);
    }
    Ok(files.into_iter().collect())
}

fn toml_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    Ok(entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
        .collect())
}

fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
    Ok(paths.flatten().filter(|p| p.is_file()).collect())
}

/// Output file name (without extension) for a source path.
/// "config/server.toml" → "server"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
