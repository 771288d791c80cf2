use oxc::{
  allocator::TakeIn,
  ast::ast::{Expression, ImportExpression},
  ast_visit::{VisitMut, walk_mut},
};
use tla_ecmascript_utils::ExpressionExt;

use super::TlaFinalizer;
use crate::utils::resolve_import::resolve_import;

impl<'ast> VisitMut<'ast> for TlaFinalizer<'_, 'ast> {
  fn visit_expression(&mut self, expr: &mut Expression<'ast>) {
    walk_mut::walk_expression(self, expr);

    let Expression::ImportExpression(import_expr) = expr else {
      return;
    };
    if !self.needs_continuation(import_expr) {
      return;
    }

    let import_expr = expr.take_in(self.snippet.alloc());
    *expr = self.snippet.dynamic_import_continuation(import_expr, &self.ctx.options.promise_export_name);
  }
}

impl<'ast> TlaFinalizer<'_, 'ast> {
  /// A dynamically imported module has to settle before its namespace is handed out, unless it is
  /// known to be part of the bundle and left untouched.
  fn needs_continuation(&self, import_expr: &ImportExpression<'ast>) -> bool {
    let Some(source) = import_expr.source.as_string_literal() else {
      return true;
    };
    match resolve_import(self.ctx.id, &source.value) {
      Some(imported) => self.ctx.bundle_info.get(&imported).is_none_or(|module| module.transform_needed),
      None => true,
    }
  }
}
