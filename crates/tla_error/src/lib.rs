mod events;

use std::ops::{Deref, DerefMut};

pub use crate::events::{missing_module::MissingModule, unsupported_shape::UnsupportedShape};

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn into_vec(self) -> Vec<anyhow::Error> {
    self.0
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<UnsupportedShape> for BuildError {
  fn from(error: UnsupportedShape) -> Self {
    Self(vec![error.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn build_error_collects_sources() {
  let mut errors = BuildError::from(anyhow::anyhow!("first"));
  errors.push(UnsupportedShape::new("a.js", "top-level statement", "ExportAllDeclaration").into());

  assert_eq!(errors.len(), 2);
  assert!(errors[1].downcast_ref::<UnsupportedShape>().is_some());
}
