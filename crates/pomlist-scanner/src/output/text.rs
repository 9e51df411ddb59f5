//! Line-oriented report formatter

use crate::types::{ArtifactId, OutputStyle};

/// Render identifiers one per line followed by the `<n> artifacts found` summary.
///
/// `OutputStyle::Json` is rendered like `Plain`; use [`super::json::to_json`] for JSON.
#[must_use]
pub fn render(artifacts: &[ArtifactId], style: OutputStyle) -> String {
    let mut output = String::new();

    for id in artifacts {
        match style {
            OutputStyle::Wiki => {
                output.push_str(&format!("* {{{{{id}}}}}\n"));
            }
            OutputStyle::Plain | OutputStyle::Json => {
                output.push_str(id.as_str());
                output.push('\n');
            }
        }
    }
    output.push_str(&format!("{} artifacts found\n", artifacts.len()));

    output
}
