use thiserror::Error;

/// Errors surfaced while loading a lockfile document.
///
/// Parse failures are fatal by design: a lockfile this tool cannot read is a
/// lockfile it must not rewrite. Resolution-key parsing, by contrast, is
/// best-effort and lives in [`crate::parse`] without an error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
  /// The document structure was rejected outright.
  #[error("malformed lockfile: {0}")]
  Malformed(String),

  /// The grammar stopped making progress before the end of the file,
  /// typically on a column-0 line that is neither a key nor a comment.
  #[error("unrecognized content at line {line}: {snippet:?}")]
  TrailingContent { line: usize, snippet: String },
}
