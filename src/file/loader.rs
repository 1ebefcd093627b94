//! Document loading.
//!
//! This module resolves the `--object` argument into a parsed
//! [`Value`]: it can name a file, be `-` for stdin, or hold the document
//! text inline. Gzipped files and gzipped stdin are decompressed first.

use crate::document::node::Value;
use crate::document::parser::{parse_json, parse_yaml};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// How document text should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Pick from the file extension; for stdin and inline text try JSON,
    /// then YAML
    #[default]
    Auto,
    Json,
    Yaml,
}

impl FromStr for InputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            other => anyhow::bail!("Unknown input format '{}', expected auto, json or yaml", other),
        }
    }
}

/// Loads a document from a file path, stdin (`-`), or inline text.
///
/// An argument naming an existing file is always read as a file; anything
/// else is parsed as the document itself.
///
/// # Examples
///
/// ```
/// use keytrail::file::loader::{load_object, InputFormat};
///
/// let value = load_object(r#"{"a": {"b": 1}}"#, InputFormat::Auto).unwrap();
/// assert!(!value.is_empty());
/// ```
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read, decompressed, or
/// decoded in the requested format.
pub fn load_object(input: &str, format: InputFormat) -> Result<Value> {
    if input == "-" {
        return load_from_stdin(format);
    }

    let path = Path::new(input);
    if path.is_file() {
        return load_file(path, format);
    }

    parse_content(input, format).context("Failed to parse inline document")
}

/// Loads and parses a document file.
///
/// Files ending in `.gz` are decompressed. Under [`InputFormat::Auto`],
/// `.yaml` and `.yml` files (optionally gzipped) are read as YAML and
/// everything else as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents do not parse.
pub fn load_file<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = match format {
        InputFormat::Auto if is_yaml_path(path_ref) => InputFormat::Yaml,
        InputFormat::Auto => InputFormat::Json,
        explicit => explicit,
    };

    parse_content(&content, format)
        .with_context(|| format!("Failed to parse {}", path_ref.display()))
}

/// Reads a document from stdin, decompressing it if it starts with the gzip
/// magic bytes.
pub fn load_from_stdin(format: InputFormat) -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_content(&content, format).context("Failed to parse document from stdin")
}

/// Decodes document text in the given format.
///
/// `Auto` tries JSON first and falls back to YAML.
pub fn parse_content(content: &str, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => parse_json(content),
        InputFormat::Yaml => parse_yaml(content),
        InputFormat::Auto => parse_json(content).or_else(|json_err| {
            parse_yaml(content).map_err(|_| {
                json_err.context("Input is neither valid JSON nor valid YAML")
            })
        }),
    }
}

/// Checks for a `.yaml` or `.yml` extension, ignoring a trailing `.gz`.
fn is_yaml_path<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy();

    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    base.ends_with(".yaml") || base.ends_with(".yml")
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path).context("Failed to open gzipped file")?;
    decompress_gzip_bytes(&bytes)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not valid gzip format
/// - The decompressed content is not valid UTF-8
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input - data may be corrupted")?;
    Ok(content)
}
