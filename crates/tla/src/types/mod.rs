pub mod transform_output;

use std::sync::Arc;

use oxc_index::IndexVec;
use tla_common::{ModuleIdx, NormalizedTlaOptions};
use tla_ecmascript::EcmaAst;

/// Parsed chunks, aligned with the records of `BundleInfo`.
pub type IndexEcmaAst = IndexVec<ModuleIdx, EcmaAst>;

pub type SharedOptions = Arc<NormalizedTlaOptions>;
