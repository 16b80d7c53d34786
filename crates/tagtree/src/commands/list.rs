//! Catalogue listing command.

use tagtree_elements::{TagSpec, ELEMENTS};

use crate::config::ConfigFile;

/// Select the entries to list.
fn select(config: &ConfigFile, void_only: bool, obsolete_only: bool) -> Vec<&'static TagSpec> {
    ELEMENTS
        .iter()
        .filter(|spec| config.catalogue.include_obsolete || obsolete_only || !spec.obsolete)
        .filter(|spec| !void_only || spec.void)
        .filter(|spec| !obsolete_only || spec.obsolete)
        .collect()
}

/// Format one row of the listing.
fn format_row(spec: &TagSpec) -> String {
    let mut flags = Vec::new();
    if spec.void {
        flags.push("void");
    }
    if spec.obsolete {
        flags.push("obsolete");
    }

    format!(
        "{:<24} {:<14} {}",
        spec.name,
        format!("<{}>", spec.tag),
        flags.join(", ")
    )
    .trim_end()
    .to_string()
}

/// Run the list command.
pub fn run(config: &ConfigFile, void_only: bool, obsolete_only: bool) {
    let specs = select(config, void_only, obsolete_only);

    for spec in &specs {
        println!("{}", format_row(spec));
    }

    tracing::debug!("Listed {} of {} elements", specs.len(), ELEMENTS.len());
}
