use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_slash(&self) -> String;

  /// Join `relative` onto the directory of `self` and collapse `.`/`..` segments lexically.
  fn join_from_dir(&self, relative: &str) -> PathBuf;
}

impl PathExt for Path {
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn join_from_dir(&self, relative: &str) -> PathBuf {
    let dir = self.parent().unwrap_or_else(|| Path::new(""));
    dir.join(relative).normalize()
  }
}

#[test]
fn test_join_from_dir() {
  assert_eq!(Path::new("a.js").join_from_dir("./b.js").expect_to_slash(), "b.js");
  assert_eq!(Path::new("chunks/a.js").join_from_dir("./b.js").expect_to_slash(), "chunks/b.js");
  assert_eq!(Path::new("chunks/a.js").join_from_dir("../b.js").expect_to_slash(), "b.js");
  assert_eq!(
    Path::new("chunks/nested/a.js").join_from_dir("./../c/./d.js").expect_to_slash(),
    "chunks/c/d.js"
  );
}
