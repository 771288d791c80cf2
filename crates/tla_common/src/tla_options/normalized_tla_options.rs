use std::{fmt::Debug, sync::Arc};

use crate::PromiseImportNameFn;

pub struct NormalizedTlaOptions {
  pub promise_export_name: String,
  pub promise_import_name: Arc<PromiseImportNameFn>,
  pub minify: bool,
}

impl NormalizedTlaOptions {
  pub fn promise_import_name(&self, index: usize) -> String {
    (self.promise_import_name)(index)
  }
}

impl Default for NormalizedTlaOptions {
  fn default() -> Self {
    Self {
      promise_export_name: "__tla".to_string(),
      promise_import_name: Arc::new(|index: usize| format!("__tla_{index}")),
      minify: false,
    }
  }
}

impl Debug for NormalizedTlaOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NormalizedTlaOptions")
      .field("promise_export_name", &self.promise_export_name)
      .field("minify", &self.minify)
      .finish_non_exhaustive()
  }
}

#[test]
fn default_names() {
  let options = NormalizedTlaOptions::default();
  assert_eq!(options.promise_export_name, "__tla");
  assert_eq!(options.promise_import_name(0), "__tla_0");
  assert_eq!(options.promise_import_name(12), "__tla_12");
}
