//! SVG preprocessing commands.
//!
//! Every pass runs over one file or every `.svg` below a directory and writes
//! changed files back in place.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use repmap_core::StateInfo;
use repmap_svg::{restroke, strip_credit, tag_states, trim_to_state};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::SvgCommands;

/// Execute an svg subcommand.
pub fn execute(command: SvgCommands) -> Result<()> {
    match command {
        SvgCommands::Tag { path, dry_run } => for_each_svg(&path, dry_run, |file, markup| {
            let (out, report) = tag_states(markup)?;
            println!("{}: tagged {} element(s)", file.display(), report.tagged);
            for id in &report.suffixed {
                println!("   • suffixed id: {}", id);
            }
            for id in &report.mismatched {
                println!("   • not a district id: {}", id);
            }
            for id in &report.unrecognized {
                println!("   • unknown state code: {}", id);
            }
            Ok(Some(out))
        }),

        SvgCommands::Trim { path, dry_run } => for_each_svg(&path, dry_run, |file, markup| {
            let Some(state) = state_for_file(file) else {
                warn!(file = %file.display(), "No state matches the file name, skipping");
                return Ok(None);
            };
            let (out, removed) = trim_to_state(markup, state.abbr)?;
            println!(
                "{}: removed {} path(s) outside {}",
                file.display(),
                removed,
                state.abbr
            );
            Ok(Some(out))
        }),

        SvgCommands::Stroke {
            path,
            stroke,
            width,
            dry_run,
        } => for_each_svg(&path, dry_run, |file, markup| {
            let (out, changed) = restroke(markup, &stroke, &width)?;
            println!("{}: restroked {} element(s)", file.display(), changed);
            Ok(Some(out))
        }),

        SvgCommands::StripCredit { path, dry_run } => {
            for_each_svg(&path, dry_run, |_, markup| Ok(Some(strip_credit(markup)?)))
        }
    }
}

/// `new-york.svg` → New York.
fn state_for_file(file: &Path) -> Option<&'static StateInfo> {
    file.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(StateInfo::by_key)
}

/// Run `pass` over every map file. `pass` returns the new markup, or `None`
/// to leave the file alone.
fn for_each_svg<F>(path: &Path, dry_run: bool, mut pass: F) -> Result<()>
where
    F: FnMut(&Path, &str) -> Result<Option<String>>,
{
    let files = svg_files(path);
    if files.is_empty() {
        bail!("No .svg files found at {}", path.display());
    }

    let mut changed = 0;
    for file in &files {
        let markup = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let out = pass(file, &markup)
            .with_context(|| format!("Failed to process {}", file.display()))?;
        match out {
            Some(out) if out != markup => {
                changed += 1;
                if !dry_run {
                    fs::write(file, out)
                        .with_context(|| format!("Failed to write {}", file.display()))?;
                }
            }
            _ => debug!(file = %file.display(), "unchanged"),
        }
    }

    let verb = if dry_run { "would change" } else { "changed" };
    println!("\n✅ {} of {} file(s) {}", changed, files.len(), verb);
    Ok(())
}

/// All `.svg` files at or below `path`, sorted.
fn svg_files(path: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Check if entry is hidden. The root itself is never hidden.
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}
