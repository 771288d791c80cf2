use std::fmt::Display;

use serde::Serialize;

/// Blocking constructs a module can contain, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CodePattern {
  /// A call to `import()` somewhere in the module, at any depth.
  DynamicImport,
  /// `await`, `for await` or `await using` evaluated while the module itself runs.
  TopLevelAwait,
}

impl Display for CodePattern {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CodePattern::DynamicImport => write!(f, "dynamic-import"),
      CodePattern::TopLevelAwait => write!(f, "top-level-await"),
    }
  }
}

#[test]
fn top_level_await_outranks_dynamic_import() {
  assert!(CodePattern::TopLevelAwait > CodePattern::DynamicImport);
  assert_eq!(
    [Some(CodePattern::DynamicImport), None, Some(CodePattern::TopLevelAwait)].into_iter().max(),
    Some(Some(CodePattern::TopLevelAwait))
  );
}
