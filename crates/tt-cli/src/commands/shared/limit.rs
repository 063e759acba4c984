/// Compute effective row limit with precedence: `--limit` -> configured
/// default. Zero means no limit.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> Option<usize> {
    let limit = flag.unwrap_or(configured);
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Keep at most `limit` items.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}
