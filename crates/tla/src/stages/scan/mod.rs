mod pattern_finder;

use oxc::ast::ast::{Program, Statement};
use oxc_index::IndexVec;
use rustc_hash::FxHashSet;
use tla_common::{BundleInfo, CodePattern, ModuleId, ModuleIdx, SourceChunk};
use tla_error::{BuildResult, MissingModule};
use tla_utils::{
  indexmap::FxIndexSet,
  rayon::{IndexedParallelIterator, IntoParallelIterator, IntoParallelRefIterator, ParallelIterator},
};

pub use self::pattern_finder::find_highest_pattern;
use crate::{
  types::IndexEcmaAst,
  utils::{parse_to_ecma_ast::parse_to_ecma_ast, resolve_import::resolve_import},
};

#[derive(Debug)]
pub struct ScanStageOutput {
  pub bundle_info: BundleInfo,
  pub ast_table: IndexEcmaAst,
  pub warnings: Vec<anyhow::Error>,
}

pub struct ScanStage {
  chunks: Vec<SourceChunk>,
}

/// What one module says about itself, before any other module is looked at.
struct ScannedModule {
  imported: FxIndexSet<ModuleId>,
  local_pattern: Option<CodePattern>,
}

impl ScanStage {
  pub fn new(chunks: Vec<SourceChunk>) -> Self {
    Self { chunks }
  }

  /// Parse every chunk, classify it and record the static import edges in both directions.
  pub fn scan(self) -> BuildResult<ScanStageOutput> {
    let mut seen = FxHashSet::default();
    let duplicates = self
      .chunks
      .iter()
      .filter(|chunk| !seen.insert(chunk.name.clone()))
      .map(|chunk| anyhow::anyhow!("Chunk {:?} is provided more than once", chunk.name.as_str()))
      .collect::<Vec<_>>();
    if !duplicates.is_empty() {
      Err(duplicates)?;
    }

    let ids = self.chunks.iter().map(|chunk| chunk.name.clone()).collect::<Vec<_>>();
    let mut bundle_info = BundleInfo::with_modules(ids.iter().cloned());

    let parsed = self
      .chunks
      .into_par_iter()
      .map(|chunk| parse_to_ecma_ast(&chunk.name, chunk.code))
      .collect::<Vec<_>>();
    let mut errors = vec![];
    let mut asts = Vec::with_capacity(parsed.len());
    for result in parsed {
      match result {
        Ok(ast) => asts.push(ast),
        Err(e) => errors.extend(e.into_vec()),
      }
    }
    if !errors.is_empty() {
      Err(errors)?;
    }
    let ast_table: IndexEcmaAst = IndexVec::from_vec(asts);

    let scanned = ast_table
      .raw
      .par_iter()
      .zip(ids.par_iter())
      .map(|(ast, id)| scan_module(id, ast.program()))
      .collect::<Vec<_>>();

    // Reverse edges point into other records, so they are merged by a single writer.
    let mut warnings = vec![];
    for (index, scanned) in scanned.into_iter().enumerate() {
      let importer_idx = ModuleIdx::from_usize(index);
      for imported in &scanned.imported {
        if let Some(imported_idx) = bundle_info.idx_of(imported) {
          bundle_info[imported_idx].imported_by.insert(importer_idx);
        } else {
          let warning = MissingModule::new(ids[index].as_str(), imported.as_str());
          tracing::warn!("{warning}");
          warnings.push(warning.into());
        }
      }

      let module = &mut bundle_info[importer_idx];
      tracing::debug!(module = module.id.as_str(), pattern = ?scanned.local_pattern, "classified module");
      module.imported = scanned.imported;
      module.set_local_pattern(scanned.local_pattern);
    }

    tracing::debug!(modules = bundle_info.len(), "scanned bundle");
    Ok(ScanStageOutput { bundle_info, ast_table, warnings })
  }
}

fn scan_module(id: &ModuleId, program: &Program<'_>) -> ScannedModule {
  let imported = program
    .body
    .iter()
    .filter_map(|stmt| match stmt {
      Statement::ImportDeclaration(decl) => resolve_import(id, &decl.source.value),
      _ => None,
    })
    .collect();
  ScannedModule { imported, local_pattern: find_highest_pattern(program) }
}

#[cfg(test)]
mod tests {
  use tla_common::{CodePattern, SourceChunk};
  use tla_error::MissingModule;

  use super::ScanStage;

  fn scan(chunks: &[(&str, &str)]) -> super::ScanStageOutput {
    let chunks = chunks.iter().map(|(name, code)| SourceChunk::new(*name, *code)).collect();
    ScanStage::new(chunks).scan().unwrap()
  }

  #[test]
  fn edges_are_symmetric() {
    let output = scan(&[
      ("a.js", "import './b.js'; import { c } from './lib/c.js'; import 'react';"),
      ("b.js", "import { c } from './lib/c.js'; export const b = 1;"),
      ("lib/c.js", "import '../a.js'; export const c = await 1;"),
    ]);
    let info = &output.bundle_info;

    for module in info.iter() {
      for imported in &module.imported {
        let imported = info.get(imported).unwrap();
        assert!(imported.imported_by.contains(&module.idx));
      }
      for importer in info.importers_of(module) {
        assert!(info.get(importer).unwrap().imported.contains(module.id.as_str()));
      }
    }

    let c = info.get("lib/c.js").unwrap();
    assert_eq!(info.importers_of(c).map(|id| id.as_str()).collect::<Vec<_>>(), ["a.js", "b.js"]);
    assert_eq!(c.local_pattern, Some(CodePattern::TopLevelAwait));
    assert!(info.get("a.js").unwrap().imported.iter().all(|id| id.as_str() != "react"));
    assert!(output.warnings.is_empty());
  }

  #[test]
  fn missing_modules_are_reported_and_skipped() {
    let output = scan(&[("a.js", "import './style.js'; import './b.js';"), ("b.js", "console.log(1);")]);

    assert_eq!(output.warnings.len(), 1);
    let warning = output.warnings[0].downcast_ref::<MissingModule>().unwrap();
    assert_eq!(warning, &MissingModule::new("a.js", "style.js"));
    assert_eq!(output.bundle_info.len(), 2);
    assert!(output.bundle_info.get("style.js").is_none());
  }

  #[test]
  fn rejects_duplicate_names_and_bad_syntax() {
    let chunks = vec![SourceChunk::new("a.js", "1"), SourceChunk::new("a.js", "2")];
    let errors = ScanStage::new(chunks).scan().unwrap_err();
    assert!(errors[0].to_string().contains("provided more than once"));

    let chunks = vec![SourceChunk::new("a.js", "let = ;"), SourceChunk::new("b.js", "const = ;")];
    let errors = ScanStage::new(chunks).scan().unwrap_err();
    assert_eq!(errors.len(), 2);
  }
}
