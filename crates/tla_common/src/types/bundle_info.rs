use std::ops::{Index, IndexMut};

use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use serde::{Serialize, ser::SerializeMap};
use tla_utils::indexmap::FxIndexSet;

use crate::{CodePattern, ModuleId, ModuleIdx, ModuleInfo};

/// Module records of a whole build, addressable by index and by canonical name.
#[derive(Debug, Default, Clone)]
pub struct BundleInfo {
  modules: IndexVec<ModuleIdx, ModuleInfo>,
  ids: FxHashMap<ModuleId, ModuleIdx>,
}

impl BundleInfo {
  /// Create one empty record per name, keeping the given order. Repeated names share a record.
  pub fn with_modules(ids: impl IntoIterator<Item = ModuleId>) -> Self {
    let mut info = Self::default();
    for id in ids {
      info.insert(id);
    }
    info
  }

  pub fn insert(&mut self, id: ModuleId) -> ModuleIdx {
    if let Some(idx) = self.ids.get(&id) {
      return *idx;
    }
    let idx = self.modules.push(ModuleInfo::new(ModuleIdx::from_usize(self.modules.len()), id.clone()));
    self.ids.insert(id, idx);
    idx
  }

  pub fn idx_of(&self, id: &str) -> Option<ModuleIdx> {
    self.ids.get(id).copied()
  }

  pub fn get(&self, id: &str) -> Option<&ModuleInfo> {
    self.idx_of(id).map(|idx| &self.modules[idx])
  }

  pub fn contains(&self, id: &str) -> bool {
    self.ids.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &ModuleInfo> {
    self.modules.iter()
  }

  pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ModuleInfo> {
    self.modules.iter_mut()
  }

  /// Names of the modules that statically import `info`.
  pub fn importers_of<'a>(&'a self, info: &'a ModuleInfo) -> impl Iterator<Item = &'a ModuleId> {
    info.imported_by.iter().map(|idx| &self.modules[*idx].id)
  }

  /// Names of the modules that need rewriting, in input order.
  pub fn transform_needed_ids(&self) -> impl Iterator<Item = &ModuleId> {
    self.modules.iter().filter(|info| info.transform_needed).map(|info| &info.id)
  }
}

impl Index<ModuleIdx> for BundleInfo {
  type Output = ModuleInfo;

  fn index(&self, idx: ModuleIdx) -> &Self::Output {
    &self.modules[idx]
  }
}

impl IndexMut<ModuleIdx> for BundleInfo {
  fn index_mut(&mut self, idx: ModuleIdx) -> &mut Self::Output {
    &mut self.modules[idx]
  }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModuleRecord<'a> {
  imported: &'a FxIndexSet<ModuleId>,
  imported_by: Vec<&'a ModuleId>,
  local_pattern: Option<CodePattern>,
  transform_needed: bool,
  with_top_level_await: bool,
}

impl Serialize for BundleInfo {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.modules.len()))?;
    for info in self.modules.iter() {
      let record = ModuleRecord {
        imported: &info.imported,
        imported_by: self.importers_of(info).collect(),
        local_pattern: info.local_pattern,
        transform_needed: info.transform_needed,
        with_top_level_await: info.with_top_level_await,
      };
      map.serialize_entry(&info.id, &record)?;
    }
    map.end()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lookup_by_name_and_index() {
    let mut info = BundleInfo::with_modules(["a.js".into(), "b.js".into(), "a.js".into()]);
    assert_eq!(info.len(), 2);

    let a = info.idx_of("a.js").unwrap();
    let b = info.idx_of("b.js").unwrap();
    info[b].imported_by.insert(a);
    info[a].imported.insert("b.js".into());

    let importers = info.importers_of(&info[b]).map(ModuleId::as_str).collect::<Vec<_>>();
    assert_eq!(importers, ["a.js"]);
    assert!(info.get("c.js").is_none());
  }

  #[test]
  fn serializes_records_by_name() {
    let mut info = BundleInfo::with_modules(["a.js".into(), "b.js".into()]);
    let a = info.idx_of("a.js").unwrap();
    let b = info.idx_of("b.js").unwrap();
    info[a].imported.insert("b.js".into());
    info[b].imported_by.insert(a);
    info[b].set_local_pattern(Some(CodePattern::TopLevelAwait));

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["a.js"]["imported"], serde_json::json!(["b.js"]));
    assert_eq!(json["b.js"]["importedBy"], serde_json::json!(["a.js"]));
    assert_eq!(json["b.js"]["localPattern"], serde_json::json!("TopLevelAwait"));
    assert_eq!(json["b.js"]["withTopLevelAwait"], serde_json::json!(true));
    assert_eq!(json["a.js"]["transformNeeded"], serde_json::json!(false));
  }
}
