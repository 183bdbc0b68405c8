// Types mirror yarn's own vocabulary:
// https://github.com/yarnpkg/berry/blob/master/packages/yarnpkg-core/sources/types.ts#L19

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct IdentName(String);

impl IdentName {
  pub fn new(name: String) -> Self {
    Self(name)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct IdentScope(String);

impl IdentScope {
  pub fn new(scope: String) -> Self {
    Self(scope)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// Scope + name of a package.
///
/// Stringifying an `Ident` yields the full package name again, which is the
/// form exclusion lists are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
  /// The scope of the package, e.g. for `@scope/package`, this is `@scope`
  scope: Option<IdentScope>,
  /// The name of the package, e.g. for `@scope/package`, this is `package`
  name: IdentName,
}

impl Ident {
  pub fn new(scope: Option<String>, name: String) -> Self {
    Self {
      scope: scope.map(IdentScope::new),
      name: IdentName::new(name),
    }
  }

  /// Parse a full package name, splitting a scoped name into scope + name.
  ///
  /// `@babel/core` becomes scope `@babel`, name `core`; `debug` has no scope.
  /// A leading `@` without a `/` is not a valid scope, so the whole string is
  /// kept as the name.
  pub fn parse(full_name: &str) -> Self {
    full_name.strip_prefix('@').map_or_else(
      || Self::new(None, full_name.to_string()),
      |stripped| match stripped.split_once('/') {
        Some((scope, name)) if !scope.is_empty() && !name.is_empty() => {
          Self::new(Some(format!("@{scope}")), name.to_string())
        }
        _ => Self::new(None, full_name.to_string()),
      },
    )
  }

  pub fn scope(&self) -> Option<&str> {
    self.scope.as_ref().map(IdentScope::as_str)
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }
}

impl fmt::Display for Ident {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.scope() {
      Some(scope) => write!(f, "{scope}/{}", self.name()),
      None => f.write_str(self.name()),
    }
  }
}

/// The range of the Descriptor, e.g. `^1.2.3`, `~1.2.3`, `1.2.x`, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct IdentRange(String);

impl IdentRange {
  pub fn new(range: String) -> Self {
    Self(range)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// Descriptors are just like idents, except that they also carry the version
/// range a specifier asked for. The lockfile filter only ever looks at the
/// ident; the range is kept so a descriptor stays a faithful record of the
/// specifier it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
  ident: Ident,
  range: IdentRange,
}

impl Descriptor {
  pub fn new(ident: Ident, range: String) -> Self {
    Self {
      ident,
      range: IdentRange::new(range),
    }
  }

  pub fn ident(&self) -> &Ident {
    &self.ident
  }

  pub fn range(&self) -> &str {
    self.range.as_str()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn parses_plain_name() {
    let ident = Ident::parse("string-width");
    assert_eq!(ident.scope(), None);
    assert_eq!(ident.name(), "string-width");
    assert_eq!(ident.to_string(), "string-width");
  }

  #[test]
  fn parses_scoped_name() {
    let ident = Ident::parse("@babel/core");
    assert_eq!(ident.scope(), Some("@babel"));
    assert_eq!(ident.name(), "core");
    assert_eq!(ident.to_string(), "@babel/core");
  }

  #[test]
  fn leading_at_without_slash_is_a_plain_name() {
    let ident = Ident::parse("@oddball");
    assert_eq!(ident.scope(), None);
    assert_eq!(ident.name(), "@oddball");
    assert_eq!(ident.to_string(), "@oddball");
  }

  #[test]
  fn empty_scope_or_name_is_kept_whole() {
    assert_eq!(Ident::parse("@/thing").to_string(), "@/thing");
    assert_eq!(Ident::parse("@scope/").to_string(), "@scope/");
  }
}
