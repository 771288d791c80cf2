use tla_common::{BundleInfo, OutputChunk};

#[derive(Debug)]
pub struct TransformOutput {
  /// Every input chunk, in input order.
  pub chunks: Vec<OutputChunk>,
  pub bundle_info: BundleInfo,
  pub warnings: Vec<anyhow::Error>,
}
