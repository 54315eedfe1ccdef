//! File condensing: merge a week's notes into one delimited file.

use crate::Result;
use crate::week;
use anyhow::{Context, bail};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Separator between per-day sections in the combined file.
pub const SECTION_DELIMITER: &str = "\n---\n";

/// Merge `files`, in the order given, into `output_dir/output_name`.
///
/// Each non-blank file contributes a `## <stem>` section; blank or
/// whitespace-only files contribute nothing. `.md` is appended when
/// `output_name` carries no extension; a name that already has one keeps it
/// as-is. With `delete_originals` set, every input file (blank ones
/// included) is removed, but only after the combined file has been written.
pub fn condense(
    output_name: &str,
    files: &[PathBuf],
    delete_originals: bool,
    output_dir: &Path,
    delimiter: &str,
) -> Result<PathBuf> {
    let mut sections: Vec<String> = Vec::new();

    for file in files {
        let text =
            fs::read_to_string(file).with_context(|| format!("read note {}", file.display()))?;

        if text.trim().is_empty() {
            continue;
        }

        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        sections.push(format!("## {}\n{}", stem, text));
    }

    let mut output_path = output_dir.join(output_name);
    if output_path.extension().is_none() {
        output_path.set_extension("md");
    }

    fs::write(&output_path, sections.join(delimiter))
        .with_context(|| format!("write combined file {}", output_path.display()))?;

    if delete_originals {
        // Deletions are independent: attempt all of them and report each
        // failure before failing the call. The combined file already exists
        // at this point, so any survivor needs manual cleanup.
        let mut failed = 0usize;
        for file in files {
            if let Err(err) = fs::remove_file(file) {
                eprintln!(
                    "WARN: could not delete original {}: {}",
                    file.display(),
                    err
                );
                failed += 1;
            }
        }
        if failed > 0 {
            bail!(
                "{} written but {} original(s) could not be deleted",
                output_path.display(),
                failed
            );
        }
    }

    Ok(output_path)
}

/// Combine every completed week of notes in `target_dir` into one
/// `Week-of-<monday>.md` file per week under `output_dir`.
///
/// A week's failure propagates immediately; weeks already combined in this
/// run stay combined.
pub fn condense_all_weeks(
    target_dir: &Path,
    output_dir: &Path,
    delete_originals: bool,
    today: NaiveDate,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let grouped = week::group_by_week(target_dir, today)?;

    for (start, files) in grouped {
        let output_name = format!("Week-of-{}.md", start);
        let written = condense(
            &output_name,
            &files,
            delete_originals,
            output_dir,
            SECTION_DELIMITER,
        )
        .with_context(|| format!("condense week of {}", start))?;
        println!("Wrote {}", written.display());
    }

    Ok(())
}
