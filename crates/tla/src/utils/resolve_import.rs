use std::path::Path;

use tla_common::ModuleId;
use tla_utils::path_ext::PathExt;

/// Map `specifier`, as written in `importer`, to the canonical name of the chunk it refers to.
///
/// Only `./` and `../` specifiers can point into the bundle. Anything else is left to the runtime.
pub fn resolve_import(importer: &str, specifier: &str) -> Option<ModuleId> {
  if !(specifier.starts_with("./") || specifier.starts_with("../")) {
    return None;
  }
  let resolved = Path::new(importer).join_from_dir(specifier);
  Some(ModuleId::from(resolved.expect_to_slash()))
}

#[test]
fn relative_specifiers() {
  assert_eq!(resolve_import("a.js", "./b.js").as_deref(), Some("b.js"));
  assert_eq!(resolve_import("chunks/a.js", "./b.js").as_deref(), Some("chunks/b.js"));
  assert_eq!(resolve_import("chunks/a.js", "../b.js").as_deref(), Some("b.js"));
  assert_eq!(resolve_import("chunks/nested/a.js", "./../c/./d.js").as_deref(), Some("chunks/c/d.js"));
}

#[test]
fn bare_and_absolute_specifiers_are_external() {
  assert_eq!(resolve_import("a.js", "react"), None);
  assert_eq!(resolve_import("a.js", "/assets/b.js"), None);
  assert_eq!(resolve_import("a.js", "https://esm.sh/b.js"), None);
  assert_eq!(resolve_import("a.js", "node:fs"), None);
}
