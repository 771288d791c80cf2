use tla_common::{ModuleIdx, OutputChunk};
use tla_ecmascript::{EcmaCompiler, PrintOptions};
use tla_ecmascript_utils::AstSnippet;
use tla_error::BuildResult;
use tla_utils::rayon::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};

use super::link::LinkStageOutput;
use crate::{
  module_finalizer::{TlaFinalizer, TlaFinalizerContext},
  types::SharedOptions,
};

pub struct GenerateStage<'a> {
  link_output: &'a mut LinkStageOutput,
  options: &'a SharedOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(link_output: &'a mut LinkStageOutput, options: &'a SharedOptions) -> Self {
    Self { link_output, options }
  }

  /// Rewrite and print every module that needs it. The others keep their source text as is.
  pub fn generate(&mut self) -> BuildResult<Vec<OutputChunk>> {
    let LinkStageOutput { bundle_info, ast_table, .. } = &mut *self.link_output;
    let bundle_info = &*bundle_info;
    let options = self.options;

    let results = ast_table
      .raw
      .par_iter_mut()
      .enumerate()
      .map(|(index, ast)| -> anyhow::Result<OutputChunk> {
        let module = &bundle_info[ModuleIdx::from_usize(index)];
        if !module.transform_needed {
          return Ok(OutputChunk { name: module.id.clone(), code: ast.source().to_string(), transformed: false });
        }

        ast.program.with_mut(|fields| {
          let mut finalizer = TlaFinalizer {
            ctx: TlaFinalizerContext { id: &module.id, module: Some(module), bundle_info, options },
            snippet: AstSnippet::new(fields.allocator),
            source: fields.source.as_str(),
          };
          finalizer.finalize(fields.program)
        })?;

        let code = EcmaCompiler::print_with(ast, PrintOptions { minify: options.minify });
        Ok(OutputChunk { name: module.id.clone(), code, transformed: true })
      })
      .collect::<Vec<_>>();

    let mut chunks = Vec::with_capacity(results.len());
    let mut errors = vec![];
    for result in results {
      match result {
        Ok(chunk) => chunks.push(chunk),
        Err(e) => errors.push(e),
      }
    }
    if !errors.is_empty() {
      Err(errors)?;
    }

    tracing::debug!(
      transformed = chunks.iter().filter(|chunk| chunk.transformed).count(),
      total = chunks.len(),
      "generated chunks"
    );
    Ok(chunks)
  }
}
