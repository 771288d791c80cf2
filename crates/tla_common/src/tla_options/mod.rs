pub mod normalized_tla_options;

use std::{fmt::Debug, sync::Arc};

/// Names the local binding of the `index`-th imported completion promise.
pub type PromiseImportNameFn = dyn Fn(usize) -> String + Send + Sync;

#[derive(Default, Clone)]
pub struct TlaOptions {
  /// Export name of each module's completion promise. Defaults to `__tla`.
  pub promise_export_name: Option<String>,
  /// Defaults to `|i| format!("__tla_{i}")`.
  pub promise_import_name: Option<Arc<PromiseImportNameFn>>,
  /// Print rewritten chunks without insignificant whitespace.
  pub minify: Option<bool>,
}

impl Debug for TlaOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TlaOptions")
      .field("promise_export_name", &self.promise_export_name)
      .field("promise_import_name", &self.promise_import_name.as_ref().map(|_| "Fn(usize) -> String"))
      .field("minify", &self.minify)
      .finish()
  }
}
