//! The lockfile document model.
//!
//! A lockfile is read as a verbatim header (yarn's generated-file banner)
//! followed by ordered top-level entries. Each entry keeps its full raw text,
//! so serializing a document re-emits every surviving byte exactly as loaded;
//! record internals are never interpreted. The only mutation supported is
//! removing whole entries.

use std::fmt;

use nom::{
  IResult, Parser,
  branch::alt,
  bytes::complete::{is_not, tag, take_until},
  character::complete::{char, line_ending, space0, space1},
  combinator::{consumed, eof, opt, recognize},
  multi::{many0, many0_count},
  sequence::{delimited, terminated},
};

use crate::error::ParseError;
use crate::parse::package_names_from_key;

/// Top-level keys carrying this prefix (`__metadata`) are bookkeeping
/// sections, never resolution entries.
pub const RESERVED_PREFIX: &str = "__";

/// One top-level lockfile entry: a resolution key plus its record block.
///
/// `raw` holds the entry exactly as it appeared in the file — key line,
/// indented record lines, and any trailing blank lines — so an untouched
/// entry round-trips byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  key: String,
  raw: String,
}

impl Entry {
  /// The resolution key, without surrounding quotes or the trailing colon.
  pub fn key(&self) -> &str {
    &self.key
  }

  /// The entry's full text as it appeared in the file.
  pub fn raw(&self) -> &str {
    &self.raw
  }

  /// Reserved sections (`__metadata`) are never treated as packages.
  pub fn is_reserved(&self) -> bool {
    self.key.starts_with(RESERVED_PREFIX)
  }

  /// The unique package names this entry pins, sorted ascending.
  pub fn package_names(&self) -> Vec<String> {
    package_names_from_key(&self.key)
  }
}

/// A parsed lockfile: header banner plus ordered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
  header: String,
  entries: Vec<Entry>,
}

impl Lockfile {
  /// Parse a whole lockfile document.
  ///
  /// The grammar must consume the entire input; anything left over means a
  /// line that is neither a key, a record line, a comment, nor blank, and
  /// that is fatal — a document we cannot fully read is one we must not
  /// rewrite.
  pub fn parse(input: &str) -> Result<Self, ParseError> {
    match parse_lockfile(input) {
      Ok(("", lockfile)) => Ok(lockfile),
      Ok((rest, _)) => Err(ParseError::TrailingContent {
        line: line_of(input, rest),
        snippet: first_line(rest).to_string(),
      }),
      Err(err) => Err(ParseError::Malformed(err.to_string())),
    }
  }

  /// The leading comment banner and blank lines, verbatim.
  pub fn header(&self) -> &str {
    &self.header
  }

  pub fn entries(&self) -> &[Entry] {
    &self.entries
  }

  /// Remove every entry pinning one of `exclude`.
  ///
  /// Matching is exact and case-sensitive against the full package name
  /// (`@babel/core`, not `babel`), and an entry is dropped when any of its
  /// names matches — multi-specifier keys are removed whole, never per
  /// specifier. Reserved sections are skipped without being parsed. Returns
  /// the number of entries removed.
  pub fn remove_packages<S: AsRef<str>>(&mut self, exclude: &[S]) -> usize {
    let before = self.entries.len();
    self.entries.retain(|entry| {
      entry.is_reserved()
        || !entry
          .package_names()
          .iter()
          .any(|name| exclude.iter().any(|excluded| excluded.as_ref() == name))
    });
    before - self.entries.len()
  }
}

impl fmt::Display for Lockfile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.header)?;
    for entry in &self.entries {
      f.write_str(&entry.raw)?;
    }
    Ok(())
  }
}

/// A comment line, e.g. yarn's generated-file banner.
fn comment_line(input: &str) -> IResult<&str, &str> {
  recognize((char('#'), opt(is_not("\r\n")), alt((line_ending, eof)))).parse(input)
}

/// A line holding nothing but whitespace.
fn blank_line(input: &str) -> IResult<&str, &str> {
  recognize((space0, line_ending)).parse(input)
}

/// An indented line belonging to the current entry's record block.
fn body_line(input: &str) -> IResult<&str, &str> {
  recognize((space1, opt(is_not("\r\n")), alt((line_ending, eof)))).parse(input)
}

/// A double-quoted key, e.g. `"string-width@npm:^5.0.1":`
fn quoted_key(input: &str) -> IResult<&str, &str> {
  delimited(char('"'), take_until("\":"), tag("\":")).parse(input)
}

/// A bare key, e.g. `__metadata:`
fn bare_key(input: &str) -> IResult<&str, &str> {
  terminated(is_not("\"\r\n:"), char(':')).parse(input)
}

/// A column-0 key line, quoted or bare, ending the line after the colon.
fn key_line(input: &str) -> IResult<&str, &str> {
  terminated(
    alt((quoted_key, bare_key)),
    (space0, alt((line_ending, eof))),
  )
  .parse(input)
}

/// Parse one entry: a key line plus its indented block and any trailing
/// blank lines, captured verbatim.
fn parse_entry(input: &str) -> IResult<&str, Entry> {
  let (rest, (raw, key)) = consumed(terminated(
    key_line,
    many0_count(alt((body_line, blank_line))),
  ))
  .parse(input)?;

  Ok((
    rest,
    Entry {
      key: key.to_string(),
      raw: raw.to_string(),
    },
  ))
}

/// Entrypoint for parsing a lockfile document.
fn parse_lockfile(input: &str) -> IResult<&str, Lockfile> {
  let (rest, header) = recognize(many0_count(alt((comment_line, blank_line)))).parse(input)?;
  let (rest, entries) = many0(parse_entry).parse(rest)?;

  Ok((
    rest,
    Lockfile {
      header: header.to_string(),
      entries,
    },
  ))
}

/// 1-based line number where `rest` begins inside `input`.
fn line_of(input: &str, rest: &str) -> usize {
  let consumed_len = input.len() - rest.len();
  input[..consumed_len].lines().count() + 1
}

fn first_line(rest: &str) -> &str {
  rest.lines().next().unwrap_or("")
}
