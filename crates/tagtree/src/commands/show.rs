//! Single element detail command.

use anyhow::Result;
use tagtree_elements::{ElementRegistry, TagSpec};

use crate::config::ConfigFile;

fn describe(spec: &TagSpec) -> String {
    format!(
        "{name}\n  tag:       <{tag}>\n  void:      {void}\n  obsolete:  {obsolete}\n  reference: {url}",
        name = spec.name,
        tag = spec.tag,
        void = spec.void,
        obsolete = spec.obsolete,
        url = spec.reference_url(),
    )
}

/// Run the show command.
pub fn run(config: &ConfigFile, name: &str) -> Result<()> {
    let registry = ElementRegistry::html_filtered(config.catalogue.include_obsolete);

    let Some(spec) = registry.resolve(name) else {
        anyhow::bail!("Unknown element: {}. Run 'tagtree list' to see the catalogue.", name);
    };

    println!("{}", describe(spec));
    Ok(())
}
