pub mod limit;

/// Today's date in the local time zone; deadlines are calendar dates.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Tell the user which appended entries were dropped and why.
pub fn append_notices(outcome: &tt_store::AppendOutcome, flags: &crate::cli::GlobalFlags) {
    if outcome.skipped > 0 {
        crate::ui::notice(
            flags,
            &format!("{} entries are already tracked", outcome.skipped),
        );
    }
    for rejected in &outcome.rejected {
        crate::ui::notice(
            flags,
            &format!("skipped '{}': {}", rejected.preview, rejected.errors.join("; ")),
        );
    }
}

/// Quiet raw-output flags for handler tests.
#[cfg(test)]
pub fn test_flags() -> crate::cli::GlobalFlags {
    crate::cli::GlobalFlags {
        format: crate::cli::OutputFormat::Raw,
        limit: None,
        quiet: true,
        verbose: false,
        data_dir: None,
    }
}
