use arcstr::ArcStr;

use crate::ModuleId;

/// An emitted chunk handed to the rewriter.
#[derive(Debug, Clone)]
pub struct SourceChunk {
  pub name: ModuleId,
  pub code: ArcStr,
}

impl SourceChunk {
  pub fn new(name: impl Into<ModuleId>, code: impl Into<ArcStr>) -> Self {
    Self { name: name.into(), code: code.into() }
  }
}
