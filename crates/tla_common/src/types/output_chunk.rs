use crate::ModuleId;

#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub name: ModuleId,
  pub code: String,
  /// `false` when the chunk needed no rewriting and `code` is the original source.
  pub transformed: bool,
}
