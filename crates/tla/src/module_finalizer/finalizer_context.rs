use tla_common::{BundleInfo, ModuleId, ModuleInfo};

use crate::types::SharedOptions;

pub struct TlaFinalizerContext<'me> {
  pub id: &'me ModuleId,
  /// `None` when the module is missing from the record map, which reads as "imported by nobody".
  pub module: Option<&'me ModuleInfo>,
  pub bundle_info: &'me BundleInfo,
  pub options: &'me SharedOptions,
}

impl TlaFinalizerContext<'_> {
  pub fn is_imported(&self) -> bool {
    self.module.is_some_and(|module| !module.imported_by.is_empty())
  }

  /// Whether the module behind a resolved specifier has a completion promise to wait for.
  pub fn is_transform_needed(&self, id: &str) -> bool {
    self.bundle_info.get(id).is_some_and(|module| module.transform_needed)
  }
}
