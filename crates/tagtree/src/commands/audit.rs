//! Void flag audit command.

use anyhow::Result;
use tagtree_elements::{audit_void_flags, missing_void_tags, ELEMENTS};

/// Run the audit command.
pub fn run() -> Result<()> {
    let mismatches = audit_void_flags(ELEMENTS);
    let missing = missing_void_tags(ELEMENTS);

    for mismatch in &mismatches {
        tracing::error!("{}", mismatch);
    }
    for tag in &missing {
        tracing::warn!("Standard void element <{}> has no catalogue entry", tag);
    }

    if !mismatches.is_empty() {
        anyhow::bail!("{} void flag mismatches", mismatches.len());
    }

    tracing::info!(
        "All {} catalogue entries agree with the HTML void element list",
        ELEMENTS.len()
    );
    Ok(())
}
