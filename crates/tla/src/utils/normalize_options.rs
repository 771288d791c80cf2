use tla_common::{NormalizedTlaOptions, TlaOptions};

pub fn normalize_options(raw_options: TlaOptions) -> NormalizedTlaOptions {
  let defaults = NormalizedTlaOptions::default();

  NormalizedTlaOptions {
    promise_export_name: raw_options.promise_export_name.unwrap_or(defaults.promise_export_name),
    promise_import_name: raw_options.promise_import_name.unwrap_or(defaults.promise_import_name),
    minify: raw_options.minify.unwrap_or(defaults.minify),
  }
}

#[test]
fn fills_in_defaults() {
  use std::sync::Arc;

  let options = normalize_options(TlaOptions::default());
  assert_eq!(options.promise_export_name, "__tla");
  assert_eq!(options.promise_import_name(3), "__tla_3");
  assert!(!options.minify);

  let options = normalize_options(TlaOptions {
    promise_export_name: Some("ready".to_string()),
    promise_import_name: Some(Arc::new(|index: usize| format!("ready_{index}"))),
    minify: Some(true),
  });
  assert_eq!(options.promise_export_name, "ready");
  assert_eq!(options.promise_import_name(0), "ready_0");
  assert!(options.minify);
}
