mod tla_options;
mod types;

pub use crate::{
  tla_options::{
    PromiseImportNameFn, TlaOptions, normalized_tla_options::NormalizedTlaOptions,
  },
  types::{
    bundle_info::BundleInfo,
    code_pattern::CodePattern,
    module_id::ModuleId,
    module_info::ModuleInfo,
    output_chunk::OutputChunk,
    raw_idx::ModuleIdx,
    source_chunk::SourceChunk,
  },
};
