use oxc::{
  allocator,
  ast::ast::{ClassType, Expression, FunctionType, Statement},
  span::{Atom, SPAN},
};
use tla_ecmascript_utils::BindingPatternExt;
use tla_utils::indexmap::FxIndexSet;

use super::TlaFinalizer;

impl<'ast> TlaFinalizer<'_, 'ast> {
  /// Exported bindings are declared once at module top level, so inside the closure their
  /// declarations turn into assignments.
  pub(super) fn rewrite_statements(
    &self,
    statements: Vec<Statement<'ast>>,
    exported_names: &FxIndexSet<Atom<'ast>>,
  ) -> anyhow::Result<allocator::Vec<'ast, Statement<'ast>>> {
    let mut rewritten = self.snippet.builder.vec_with_capacity(statements.len());

    for stmt in statements {
      match stmt {
        Statement::VariableDeclaration(decl) => {
          let declared_names =
            decl.declarations.iter().flat_map(|declarator| declarator.id.binding_names()).collect::<Vec<_>>();
          if !declared_names.iter().any(|name| exported_names.contains(name)) {
            rewritten.push(Statement::VariableDeclaration(decl));
            continue;
          }

          let unexported = declared_names.iter().filter(|name| !exported_names.contains(*name));
          if let Some(local_decl) = self.snippet.let_decl_stmt(unexported.map(|name| name.as_str())) {
            rewritten.push(local_decl);
          }

          for declarator in decl.unbox().declarations {
            let Some(init) = declarator.init else {
              continue;
            };
            let target = declarator
              .id
              .into_assignment_target(self.snippet.builder)
              .map_err(|node_kind| self.unsupported("destructuring pattern", node_kind))?;
            rewritten.push(self.snippet.assignment_stmt(target, init));
          }
        }
        Statement::FunctionDeclaration(mut func)
          if func.id.as_ref().is_some_and(|id| exported_names.contains(&id.name)) =>
        {
          let name = func.id.as_ref().map_or("", |id| id.name.as_str());
          let target = self.snippet.simple_id_assignment_target(name, SPAN);
          func.r#type = FunctionType::FunctionExpression;
          rewritten.push(self.snippet.assignment_stmt(target, Expression::FunctionExpression(func)));
        }
        Statement::ClassDeclaration(mut class)
          if class.id.as_ref().is_some_and(|id| exported_names.contains(&id.name)) =>
        {
          let name = class.id.as_ref().map_or("", |id| id.name.as_str());
          let target = self.snippet.simple_id_assignment_target(name, SPAN);
          class.r#type = ClassType::ClassExpression;
          rewritten.push(self.snippet.assignment_stmt(target, Expression::ClassExpression(class)));
        }
        other => rewritten.push(other),
      }
    }

    Ok(rewritten)
  }
}
