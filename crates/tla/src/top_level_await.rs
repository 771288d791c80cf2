use std::sync::Arc;

use tla_common::{SourceChunk, TlaOptions};
use tla_error::BuildResult;

use crate::{
  stages::{generate::GenerateStage, link::LinkStage, scan::ScanStage},
  types::{SharedOptions, transform_output::TransformOutput},
  utils::normalize_options::normalize_options,
};

/// Rewrites the chunks of one build so that none of them relies on top-level `await`.
pub struct TopLevelAwait {
  pub(crate) options: SharedOptions,
}

impl TopLevelAwait {
  pub fn new(options: TlaOptions) -> Self {
    Self { options: Arc::new(normalize_options(options)) }
  }

  pub fn transform(&self, chunks: Vec<SourceChunk>) -> BuildResult<TransformOutput> {
    let scan_stage_output = ScanStage::new(chunks).scan()?;

    let mut link_stage_output = LinkStage::new(scan_stage_output).link();

    let chunks = GenerateStage::new(&mut link_stage_output, &self.options).generate()?;

    Ok(TransformOutput {
      chunks,
      bundle_info: link_stage_output.bundle_info,
      warnings: link_stage_output.warnings,
    })
  }
}
