mod exports;
mod finalizer_context;
mod impl_visit_mut;
mod imports;
mod statements;

use oxc::{
  allocator::TakeIn,
  ast::ast,
  ast_visit::VisitMut,
};
use rustc_hash::FxHashSet;
use tla_ecmascript_utils::AstSnippet;
use tla_utils::indexmap::FxIndexSet;

pub use finalizer_context::TlaFinalizerContext;

use self::exports::ExportMap;

/// Rewrites one module so that its top-level code runs inside an async closure and everything it
/// exports, including a completion promise, is bound before that closure settles.
pub struct TlaFinalizer<'me, 'ast> {
  pub ctx: TlaFinalizerContext<'me>,
  pub snippet: AstSnippet<'ast>,
  /// Seeds the names given to anonymous default exports.
  pub source: &'me str,
}

impl<'ast> TlaFinalizer<'_, 'ast> {
  pub fn finalize(&mut self, program: &mut ast::Program<'ast>) -> anyhow::Result<()> {
    let body = program.body.take_in(self.snippet.alloc());
    let (imports, export_map, statements) = self.partition_module_items(body)?;

    let import_bindings = imports
      .iter()
      .flat_map(|decl| decl.specifiers.iter().flatten())
      .map(|specifier| specifier.local().name)
      .collect::<FxHashSet<_>>();
    let exported_names = export_map.values().copied().collect::<FxIndexSet<_>>();

    let mut statements = self.rewrite_statements(statements, &exported_names)?;
    statements.iter_mut().for_each(|stmt| self.visit_statement(stmt));

    let (import_stmts, promise_imports) = self.thread_import_promises(imports);

    let closure = self.snippet.arrow_fn_expr(true, &[], statements);
    let promise_expr = if promise_imports.is_empty() {
      self.snippet.iife_expr(closure)
    } else {
      let guarded = promise_imports.iter().map(|name| self.snippet.try_return_iife(name));
      self.snippet.promise_all_then_expr(self.snippet.array_expr(guarded), closure)
    };

    let mut body = self.snippet.builder.vec_from_iter(import_stmts);
    let hoisted = exported_names.iter().filter(|name| !import_bindings.contains(*name));
    if let Some(decl) = self.snippet.let_decl_stmt(hoisted.map(|name| name.as_str())) {
      body.push(decl);
    }

    if !exported_names.is_empty() || self.ctx.is_imported() {
      let promise_name = self.ctx.options.promise_export_name.as_str();
      body.push(self.snippet.let_init_stmt(promise_name, promise_expr));
      body.push(self.snippet.export_named_stmt(export_entries(&export_map, promise_name)));
    } else {
      body.push(self.snippet.expr_stmt(promise_expr));
    }

    tracing::debug!(
      module = self.ctx.id.as_str(),
      exports = export_map.len(),
      promise_imports = promise_imports.len(),
      "rewrote module"
    );
    program.body = body;
    Ok(())
  }
}

/// `(exported, local)` pairs of the final export clause, with the completion promise last.
fn export_entries<'n>(export_map: &'n ExportMap<'_>, promise_name: &'n str) -> Vec<(&'n str, &'n str)> {
  let mut entries = export_map
    .iter()
    .filter(|(exported, _)| exported.as_str() != promise_name)
    .map(|(exported, local)| (exported.as_str(), local.as_str()))
    .collect::<Vec<_>>();
  entries.push((promise_name, promise_name));
  entries
}

type ImportDecls<'ast> = Vec<oxc::allocator::Box<'ast, ast::ImportDeclaration<'ast>>>;

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use oxc::span::SourceType;
  use tla_common::{BundleInfo, ModuleId, NormalizedTlaOptions};
  use tla_ecmascript::EcmaCompiler;
  use tla_ecmascript_utils::AstSnippet;

  use super::{TlaFinalizer, TlaFinalizerContext};
  use crate::{types::SharedOptions, utils::parse_to_ecma_ast::parse_to_ecma_ast};

  fn normalize(code: &str) -> String {
    EcmaCompiler::print(&EcmaCompiler::parse(code, SourceType::mjs()).unwrap())
  }

  #[test]
  fn module_missing_from_records() {
    let id = ModuleId::from("css-module.js");
    let bundle_info = BundleInfo::default();
    let options: SharedOptions = Arc::new(NormalizedTlaOptions::default());
    let mut ast =
      parse_to_ecma_ast(&id, "await globalThis.someFunc(import('./css-module.js'));".into()).unwrap();

    ast
      .program
      .with_mut(|fields| {
        let mut finalizer = TlaFinalizer {
          ctx: TlaFinalizerContext { id: &id, module: None, bundle_info: &bundle_info, options: &options },
          snippet: AstSnippet::new(fields.allocator),
          source: fields.source.as_str(),
        };
        finalizer.finalize(fields.program)
      })
      .unwrap();

    assert_eq!(
      EcmaCompiler::print(&ast),
      normalize(
        "
        (async () => {
          await globalThis.someFunc(import('./css-module.js').then(async m => { await m.__tla; return m; }));
        })();
        "
      )
    );
  }
}
