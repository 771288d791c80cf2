use std::collections::VecDeque;

use tla_common::BundleInfo;

use super::scan::ScanStageOutput;
use crate::types::IndexEcmaAst;

#[derive(Debug)]
pub struct LinkStageOutput {
  pub bundle_info: BundleInfo,
  pub ast_table: IndexEcmaAst,
  pub warnings: Vec<anyhow::Error>,
}

#[derive(Debug)]
pub struct LinkStage {
  pub bundle_info: BundleInfo,
  pub ast_table: IndexEcmaAst,
  pub warnings: Vec<anyhow::Error>,
}

impl LinkStage {
  pub fn new(scan_stage_output: ScanStageOutput) -> Self {
    Self {
      bundle_info: scan_stage_output.bundle_info,
      ast_table: scan_stage_output.ast_table,
      warnings: scan_stage_output.warnings,
    }
  }

  pub fn link(mut self) -> LinkStageOutput {
    propagate_top_level_await(&mut self.bundle_info);
    tracing::debug!(
      transform_needed = self.bundle_info.transform_needed_ids().count(),
      "linked bundle"
    );
    LinkStageOutput { bundle_info: self.bundle_info, ast_table: self.ast_table, warnings: self.warnings }
  }
}

/// Every module that statically imports a module with top-level await has to wait for it too.
///
/// Only the await flag travels along `imported_by`; a dynamic import stays with the module that
/// contains it. Flags only ever turn on, so running this again changes nothing.
pub fn propagate_top_level_await(bundle_info: &mut BundleInfo) {
  let mut queue =
    bundle_info.iter().filter(|module| module.with_top_level_await).map(|module| module.idx).collect::<VecDeque<_>>();

  while let Some(idx) = queue.pop_front() {
    let importers = bundle_info[idx].imported_by.clone();
    for importer in importers {
      if bundle_info[importer].mark_with_top_level_await() {
        tracing::trace!(
          module = bundle_info[importer].id.as_str(),
          via = bundle_info[idx].id.as_str(),
          "waits on top-level await"
        );
        queue.push_back(importer);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use tla_common::{BundleInfo, CodePattern};

  use super::propagate_top_level_await;

  const EDGES: &[(&str, &[&str])] = &[
    ("a", &["b", "c", "d"]),
    ("b", &["c", "d"]),
    ("c", &[]),
    ("d", &["b", "f"]),
    ("e", &["a", "c"]),
    ("f", &["g"]),
    ("g", &["h"]),
    ("h", &["i"]),
    ("i", &[]),
  ];

  fn bundle(extra_edges: &[(&str, &str)], patterns: &[(&str, CodePattern)]) -> BundleInfo {
    let mut info = BundleInfo::with_modules(EDGES.iter().map(|(id, _)| (*id).into()));
    let edges = EDGES
      .iter()
      .flat_map(|(from, to)| to.iter().map(move |to| (*from, *to)))
      .chain(extra_edges.iter().copied());
    for (from, to) in edges {
      let from_idx = info.idx_of(from).unwrap();
      let to_idx = info.idx_of(to).unwrap();
      info[from_idx].imported.insert(to.into());
      info[to_idx].imported_by.insert(from_idx);
    }
    for (id, pattern) in patterns {
      let idx = info.idx_of(id).unwrap();
      info[idx].set_local_pattern(Some(*pattern));
    }
    info
  }

  fn transform_needed(info: &BundleInfo) -> Vec<&str> {
    info.transform_needed_ids().map(|id| id.as_str()).collect()
  }

  #[test]
  fn diamond_propagation() {
    let mut info = bundle(&[], &[("f", CodePattern::TopLevelAwait), ("h", CodePattern::TopLevelAwait)]);
    propagate_top_level_await(&mut info);
    assert_eq!(transform_needed(&info), ["a", "b", "d", "e", "f", "g", "h"]);
  }

  #[test]
  fn dynamic_import_stays_local() {
    let mut info = bundle(
      &[("c", "i")],
      &[
        ("f", CodePattern::TopLevelAwait),
        ("h", CodePattern::TopLevelAwait),
        ("i", CodePattern::DynamicImport),
      ],
    );
    propagate_top_level_await(&mut info);
    assert_eq!(transform_needed(&info), ["a", "b", "d", "e", "f", "g", "h", "i"]);
    assert!(!info.get("c").unwrap().transform_needed);
  }

  #[test]
  fn propagation_is_idempotent() {
    let mut info = bundle(&[], &[("h", CodePattern::TopLevelAwait)]);
    propagate_top_level_await(&mut info);
    let first = serde_json::to_value(&info).unwrap();
    propagate_top_level_await(&mut info);
    assert_eq!(serde_json::to_value(&info).unwrap(), first);
  }
}
