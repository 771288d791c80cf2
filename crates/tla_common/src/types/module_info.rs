use tla_utils::indexmap::FxIndexSet;

use crate::{CodePattern, ModuleId, ModuleIdx};

/// What the rewriter knows about one chunk of the bundle.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  /// Relative static imports, in declaration order. May name modules that are not in the bundle.
  pub imported: FxIndexSet<ModuleId>,
  /// Modules of this bundle that statically import this one.
  pub imported_by: FxIndexSet<ModuleIdx>,
  pub local_pattern: Option<CodePattern>,
  pub transform_needed: bool,
  pub with_top_level_await: bool,
}

impl ModuleInfo {
  pub fn new(idx: ModuleIdx, id: ModuleId) -> Self {
    Self {
      idx,
      id,
      imported: FxIndexSet::default(),
      imported_by: FxIndexSet::default(),
      local_pattern: None,
      transform_needed: false,
      with_top_level_await: false,
    }
  }

  /// Record the module's own classification. Flags derived from it only ever turn on.
  pub fn set_local_pattern(&mut self, pattern: Option<CodePattern>) {
    self.local_pattern = pattern;
    self.transform_needed |= pattern.is_some();
    self.with_top_level_await |= pattern == Some(CodePattern::TopLevelAwait);
  }

  /// Mark the module as waiting on a top-level await, returning whether anything changed.
  pub fn mark_with_top_level_await(&mut self) -> bool {
    if self.with_top_level_await {
      return false;
    }
    self.with_top_level_await = true;
    self.transform_needed = true;
    true
  }
}

#[test]
fn flags_follow_local_pattern() {
  let mut info = ModuleInfo::new(ModuleIdx::from_usize(0), ModuleId::from("a.js"));
  info.set_local_pattern(Some(CodePattern::DynamicImport));
  assert!(info.transform_needed);
  assert!(!info.with_top_level_await);

  assert!(info.mark_with_top_level_await());
  assert!(!info.mark_with_top_level_await());
  assert!(info.transform_needed && info.with_top_level_await);
}
