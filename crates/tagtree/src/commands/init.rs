//! Write a starter config and blueprint.

use std::path::Path;

use anyhow::{Context, Result};

const DEFAULT_CONFIG: &str = r#"# tagtree configuration

[render]
# Put each node on its own indented line
pretty = false
indent = 2

# "html" renders <br>, "xhtml" renders <br />
void_style = "html"

# Prefix rendered documents with <!DOCTYPE html>
doctype = true

[catalogue]
# Offer legacy elements such as menuitem, shadow and noframes
include_obsolete = true
"#;

const DEFAULT_BLUEPRINT: &str = r#"element: Html
children:
  - element: Head
    children:
      - element: Meta
        attributes:
          charset: utf-8
      - element: Title
        text: My page
  - element: Body
    children:
      - element: Header1
        text: Hello
      - element: Paragraph
        classes: lead
        children:
          - "Built with "
          - element: Anchor
            attributes:
              href: https://developer.mozilla.org/en-US/docs/Web/HTML/Element
            text: tagtree
"#;

/// Write `contents` to `path` unless it exists and `overwrite` is off.
async fn write_file(path: &Path, contents: &str, overwrite: bool) -> Result<bool> {
    let exists = tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to check {}", path.display()))?;
    if exists && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(false);
    }

    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(true)
}

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing tagtree...");

    write_file(config_path, DEFAULT_CONFIG, yes).await?;

    let blueprint_path = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("page.yaml");
    write_file(&blueprint_path, DEFAULT_BLUEPRINT, yes).await?;

    tracing::info!(
        "Run 'tagtree render {}' to render the starter page.",
        blueprint_path.display()
    );

    Ok(())
}
