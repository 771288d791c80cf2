use oxc::ast::ast::{ImportDeclarationSpecifier, Statement};

use super::{ImportDecls, TlaFinalizer};
use crate::utils::resolve_import::resolve_import;

impl<'ast> TlaFinalizer<'_, 'ast> {
  /// Import the completion promise of every imported module that gets rewritten too.
  ///
  /// Returns the import statements to keep and the local names bound to those promises, in
  /// declaration order.
  pub(super) fn thread_import_promises(&self, imports: ImportDecls<'ast>) -> (Vec<Statement<'ast>>, Vec<String>) {
    let options = self.ctx.options;
    let mut stmts = Vec::with_capacity(imports.len());
    let mut promise_imports = vec![];

    for mut decl in imports {
      let needs_promise = resolve_import(self.ctx.id, &decl.source.value)
        .is_some_and(|imported| self.ctx.is_transform_needed(&imported));
      if !needs_promise {
        stmts.push(Statement::ImportDeclaration(decl));
        continue;
      }

      let local = options.promise_import_name(promise_imports.len());
      let specifier = self.snippet.import_specifier(&options.promise_export_name, &local);
      let is_namespace_import = decl
        .specifiers
        .iter()
        .flatten()
        .any(|specifier| matches!(specifier, ImportDeclarationSpecifier::ImportNamespaceSpecifier(_)));
      // `import * as ns` can't be combined with a named specifier.
      let separate_decl = if is_namespace_import {
        Some(self.snippet.import_named_stmt(&decl.source.value, self.snippet.builder.vec1(specifier)))
      } else {
        decl.specifiers.get_or_insert_with(|| self.snippet.builder.vec()).push(specifier);
        None
      };

      stmts.push(Statement::ImportDeclaration(decl));
      stmts.extend(separate_decl);
      promise_imports.push(local);
    }

    (stmts, promise_imports)
  }
}
