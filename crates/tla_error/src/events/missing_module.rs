use std::fmt::Display;

/// A static import points at a module that is not part of the bundle being rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingModule {
  pub importer: String,
  pub imported: String,
}

impl MissingModule {
  pub fn new(importer: impl Into<String>, imported: impl Into<String>) -> Self {
    Self { importer: importer.into(), imported: imported.into() }
  }
}

impl Display for MissingModule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Non-existing module {:?} imported by {:?}, ignoring.", self.imported, self.importer)
  }
}

impl std::error::Error for MissingModule {}

#[test]
fn message() {
  let warning = MissingModule::new("a.js", "assets/style.js");
  assert_eq!(warning.to_string(), "Non-existing module \"assets/style.js\" imported by \"a.js\", ignoring.");
}
