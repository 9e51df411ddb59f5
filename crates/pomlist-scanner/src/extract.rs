//! Project descriptor extractor
//!
//! Decides whether a directory is a Maven project root and, if so, reads the
//! `artifactId` out of its `pom.xml`.

use crate::error::{DescriptorError, ScanError, ScanResult};
use crate::types::{ArtifactId, ExclusionMode, DESCRIPTOR_FILE, POM_NAMESPACE};
use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::Path;

/// Look for a project in `directory`, given the names of the files it directly contains.
///
/// Returns `Ok(None)` when the directory is not a project root: no `pom.xml`,
/// or the path is excluded by `mode`.
///
/// # Errors
/// Returns [`ScanError::Descriptor`] when the descriptor cannot be read, is not
/// well-formed XML, or has no `artifactId`.
pub fn find_project(
    directory: &Path,
    filenames: &[String],
    mode: ExclusionMode,
) -> ScanResult<Option<ArtifactId>> {
    if !filenames.iter().any(|name| name == DESCRIPTOR_FILE) {
        return Ok(None);
    }
    if mode.excludes(directory) {
        return Ok(None);
    }

    let path = directory.join(DESCRIPTOR_FILE);
    read_artifact_id(&path)
        .map(Some)
        .map_err(|source| ScanError::Descriptor { path, source })
}

/// Read a descriptor from disk and extract its artifact identifier
pub fn read_artifact_id(path: &Path) -> Result<ArtifactId, DescriptorError> {
    // The file handle is closed once the content is in memory
    let bytes = fs::read(path)?;
    let content = decode_descriptor(&bytes)?;
    parse_artifact_id(&content)
}

/// Decode raw descriptor bytes to text.
///
/// A byte order mark wins, then the `encoding` of the XML declaration, then UTF-8.
pub fn decode_descriptor(bytes: &[u8]) -> Result<String, DescriptorError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => {
            let encoding = match declared_encoding(bytes) {
                Some(label) => Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| DescriptorError::UnknownEncoding(label.to_string()))?,
                None => UTF_8,
            };
            (encoding, bytes)
        }
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(std::borrow::Cow::into_owned)
        .ok_or(DescriptorError::Decode {
            encoding: encoding.name(),
        })
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let head = bytes.strip_prefix(b"<?xml")?;
    let end = head.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&head[..end]).ok()?;

    let after = &decl[decl.find("encoding")? + "encoding".len()..];
    let value = after.trim_start().strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &value[1..];
    value.find(quote).map(|end| &value[..end])
}

/// Extract the artifact identifier from descriptor XML.
///
/// Only an `artifactId` that is a direct child of the root element and lives in
/// the POM 4.0.0 namespace counts; the first one in document order wins. The
/// `artifactId` of a `<parent>` block is never picked up.
pub fn parse_artifact_id(content: &str) -> Result<ArtifactId, DescriptorError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options)?;
    let element = first_pom_child(doc.root_element(), "artifactId")
        .ok_or(DescriptorError::MissingArtifactId)?;
    Ok(ArtifactId::new(&text_content(element)))
}

fn first_pom_child<'a, 'input>(parent: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    parent.children().find(|child| {
        child.is_element()
            && child.tag_name().name() == name
            && child.tag_name().namespace() == Some(POM_NAMESPACE)
    })
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}
