//! Parsing of `--source NAME=PATH` arguments.

use regional_model::SourceDescriptor;

/// Parses `NAME=PATH` into a source descriptor.
///
/// Used as a clap value parser, so errors are plain strings.
pub fn parse_source_spec(spec: &str) -> Result<SourceDescriptor, String> {
    let Some((name, path)) = spec.split_once('=') else {
        return Err(format!("expected NAME=PATH, got '{spec}'"));
    };
    let name = name.trim();
    let path = path.trim();
    if name.is_empty() {
        return Err(format!("source name is empty in '{spec}'"));
    }
    if path.is_empty() {
        return Err(format!("source path is empty in '{spec}'"));
    }
    Ok(SourceDescriptor::new(name, path))
}
