use std::fmt::Display;

/// The module does not have the flat `import`/`export`/statement layout a bundler emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedShape {
  pub module: String,
  pub context: &'static str,
  pub node_kind: String,
}

impl UnsupportedShape {
  pub fn new(module: impl Into<String>, context: &'static str, node_kind: impl Into<String>) -> Self {
    Self { module: module.into(), context, node_kind: node_kind.into() }
  }
}

impl Display for UnsupportedShape {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "Unexpected {} \"{}\" in output chunk {:?}. Only flat import declarations, named exports and plain statements are supported.",
      self.context, self.node_kind, self.module
    )
  }
}

impl std::error::Error for UnsupportedShape {}

#[test]
fn message_names_node_and_module() {
  let error = UnsupportedShape::new("chunks/a.js", "top-level statement", "ExportAllDeclaration");
  let message = error.to_string();
  assert!(message.starts_with("Unexpected top-level statement \"ExportAllDeclaration\""));
  assert!(message.contains("\"chunks/a.js\""));
}
