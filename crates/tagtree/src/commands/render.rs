//! Blueprint rendering command.

use std::path::Path;

use anyhow::{Context, Result};
use tagtree_elements::{Blueprint, ElementRegistry};
use tagtree_render::{RenderOptions, Renderer, VoidStyle};

use crate::config::ConfigFile;

/// Command line flags that override the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub pretty: bool,
    pub xhtml: bool,
    pub fragment: bool,
}

impl Overrides {
    fn apply(self, mut options: RenderOptions) -> RenderOptions {
        if self.pretty {
            options.pretty = true;
        }
        if self.xhtml {
            options.void_style = VoidStyle::Xhtml;
        }
        if self.fragment {
            options.doctype = false;
        }
        options
    }
}

/// Parse, build and render a blueprint.
fn render_source(
    source: &str,
    path: &Path,
    config: &ConfigFile,
    overrides: Overrides,
) -> Result<String> {
    let blueprint = Blueprint::parse_for_path(source, path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let registry = ElementRegistry::html_filtered(config.catalogue.include_obsolete);
    let node = blueprint
        .build(&registry)
        .with_context(|| format!("Failed to build tree from {}", path.display()))?;

    let renderer = Renderer::new(overrides.apply(config.render.clone()));
    let html = renderer.render_document(&node)?;

    Ok(html)
}

/// Run the render command.
pub async fn run(
    config: &ConfigFile,
    input: &Path,
    output: Option<&Path>,
    overrides: Overrides,
) -> Result<()> {
    let source = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let html = render_source(&source, input, config, overrides)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, format!("{html}\n"))
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} ({} bytes)", path.display(), html.len());
        }
        None => println!("{html}"),
    }

    Ok(())
}
