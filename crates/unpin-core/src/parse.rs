//! Resolution-key parsing.
//!
//! Top-level keys in a Berry lockfile are one or more comma-separated
//! specifiers, e.g.
//!
//! ```text
//! string-width@npm:^5.0.1, string-width@npm:^5.1.2
//! ```
//!
//! Multiple specifiers only exist to cover multiple semver ranges resolving
//! to one concrete install, so every specifier in a key names the same
//! package. Parsing here is best-effort string splitting: a malformed
//! specifier yields smaller tokens rather than an error, since the filter
//! must never refuse a key yarn itself wrote.

use crate::ident::{Descriptor, Ident};

/// Split a `name@registry` token at the registry separator.
///
/// The separator is the first `@` found past position 0, so the leading `@`
/// of a scoped package name (`@babel/core@npm`) stays part of the name
/// instead of being mistaken for the separator. Truncating a scoped name
/// here is the one silent failure mode of the whole tool, which is why this
/// rule gets its own function and tests.
pub fn split_registry(name_registry: &str) -> (&str, Option<&str>) {
  let separator = name_registry
    .char_indices()
    .skip(1)
    .find(|&(_, c)| c == '@')
    .map(|(i, _)| i);

  match separator {
    Some(i) => (&name_registry[..i], Some(&name_registry[i + 1..])),
    None => (name_registry, None),
  }
}

/// Parse one specifier (`@babel/core@npm:^7.0.0`) into a [`Descriptor`].
///
/// Everything before the first `:` is the name-registry token (trimmed, so
/// the space after the comma in a multi-specifier key is harmless); the
/// remainder is the range. A specifier without a `:` gets an empty range.
pub fn parse_specifier(specifier: &str) -> Descriptor {
  let (name_registry, range) = match specifier.split_once(':') {
    Some((token, range)) => (token.trim(), range.trim()),
    None => (specifier.trim(), ""),
  };

  let (name, _registry) = split_registry(name_registry);
  Descriptor::new(Ident::parse(name), range.to_string())
}

/// Extract the unique package names referenced by a resolution key.
///
/// For `string-width@npm:^5.0.1, string-width@npm:^5.1.2` this returns
/// `["string-width"]`. Output is sorted ascending and deduplicated.
pub fn package_names_from_key(key: &str) -> Vec<String> {
  let mut names: Vec<String> = key
    .split(',')
    .map(|specifier| parse_specifier(specifier).ident().to_string())
    .collect();
  names.sort();
  names.dedup();
  names
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn split_registry_plain_name() {
    assert_eq!(
      split_registry("string-width@npm"),
      ("string-width", Some("npm"))
    );
  }

  #[test]
  fn split_registry_scoped_name() {
    assert_eq!(
      split_registry("@babel/core@npm"),
      ("@babel/core", Some("npm"))
    );
  }

  #[test]
  fn split_registry_without_registry() {
    assert_eq!(split_registry("string-width"), ("string-width", None));
    assert_eq!(split_registry("@babel/core"), ("@babel/core", None));
  }

  #[test]
  fn split_registry_degenerate_tokens() {
    assert_eq!(split_registry(""), ("", None));
    assert_eq!(split_registry("@"), ("@", None));
    assert_eq!(split_registry("a@"), ("a", Some("")));
  }

  #[test]
  fn parse_specifier_captures_range() {
    let descriptor = parse_specifier("@babel/core@npm:^7.0.0");
    assert_eq!(descriptor.ident().to_string(), "@babel/core");
    assert_eq!(descriptor.range(), "^7.0.0");
  }

  #[test]
  fn parse_specifier_trims_comma_split_whitespace() {
    let descriptor = parse_specifier(" string-width@npm:^5.1.2");
    assert_eq!(descriptor.ident().to_string(), "string-width");
  }

  #[test]
  fn parse_specifier_without_colon_has_empty_range() {
    let descriptor = parse_specifier("string-width@npm");
    assert_eq!(descriptor.ident().to_string(), "string-width");
    assert_eq!(descriptor.range(), "");
  }

  #[test]
  fn single_specifier_yields_one_name() {
    assert_eq!(
      package_names_from_key("debug@npm:1.0.0"),
      vec!["debug".to_string()]
    );
  }

  #[test]
  fn repeated_specifiers_are_deduplicated() {
    assert_eq!(
      package_names_from_key("string-width@npm:^5.0.1, string-width@npm:^5.1.2"),
      vec!["string-width".to_string()]
    );
  }

  #[test]
  fn scoped_names_are_never_truncated() {
    assert_eq!(
      package_names_from_key("@scope/name@npm:^1.0.0"),
      vec!["@scope/name".to_string()]
    );
  }

  #[test]
  fn names_come_back_sorted() {
    assert_eq!(
      package_names_from_key("zebra@npm:^1.0.0, apple@npm:^2.0.0, apple@npm:^2.1.0"),
      vec!["apple".to_string(), "zebra".to_string()]
    );
  }

  #[test]
  fn workspace_protocol_specifier() {
    assert_eq!(
      package_names_from_key("my-app@workspace:."),
      vec!["my-app".to_string()]
    );
  }
}
