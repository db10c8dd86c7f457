//! Expired-invoice list loading.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Delimiter used by the expired-invoice export. Exact: comma followed
/// by a single space.
const EXPIRED_DELIMITER: &str = ", ";

/// Read the expired-invoice id list from a delimiter-separated text file.
pub fn load_expired_ids(path: &Path) -> Result<BTreeSet<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read expired ids: {}", path.display()))?;
    let ids = split_expired_ids(&raw);
    debug!(
        source_file = %path.display(),
        id_count = ids.len(),
        "expired ids loaded"
    );
    Ok(ids)
}

/// Split a comma-space separated id list into a membership set.
///
/// Surrounding whitespace (including a trailing newline) is trimmed from
/// the whole input before splitting; the delimiter itself is never
/// loosened and individual tokens are kept verbatim.
pub fn split_expired_ids(raw: &str) -> BTreeSet<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BTreeSet::new();
    }
    trimmed
        .split(EXPIRED_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}
