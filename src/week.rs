//! Week grouping: bucket date-named note files by the Monday of their week.

use crate::Result;
use anyhow::Context;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Whether the week starting at `start` may be combined as of `today`.
///
/// The week still in progress stays untouched, except on Sundays: a week
/// ending today is effectively complete, so Sunday finalizes it too.
pub fn eligible_to_combine(start: NaiveDate, today: NaiveDate) -> bool {
    if today.weekday() == Weekday::Sun {
        return true;
    }
    week_start(today) != start
}

/// Scan `dir` for `<YYYY-MM-DD>.md` files and bucket them by week key
/// (the Monday starting that week).
///
/// Buckets are sorted ascending by the file's own date, and the week still
/// in progress as of `today` is dropped. Names that do not parse as a date
/// are skipped; a notes directory holds plenty of non-daily files.
pub fn group_by_week(dir: &Path, today: NaiveDate) -> Result<BTreeMap<NaiveDate, Vec<PathBuf>>> {
    let mut dated: Vec<(PathBuf, NaiveDate)> = Vec::new();

    for entry in fs::read_dir(dir).with_context(|| format!("read directory {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        // Classify rather than catch: a stem that is not an ISO date is not
        // an error, it just is not a daily note.
        let date = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

        if let Some(date) = date {
            dated.push((path, date));
        }
    }

    let mut groups: BTreeMap<NaiveDate, Vec<(PathBuf, NaiveDate)>> = BTreeMap::new();
    for (path, date) in dated {
        groups.entry(week_start(date)).or_default().push((path, date));
    }

    let mut out: BTreeMap<NaiveDate, Vec<PathBuf>> = BTreeMap::new();
    for (start, mut files) in groups {
        if !eligible_to_combine(start, today) {
            continue;
        }
        files.sort_by_key(|(_, date)| *date);
        out.insert(start, files.into_iter().map(|(path, _)| path).collect());
    }

    Ok(out)
}
