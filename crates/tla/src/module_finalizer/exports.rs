use oxc::{
  allocator,
  ast::{
    ast::{ClassType, Declaration, ExportDefaultDeclarationKind, Expression, FunctionType, Statement},
    match_expression,
  },
  span::Atom,
};
use tla_ecmascript_utils::{BindingPatternExt, StatementExt};
use tla_error::UnsupportedShape;
use tla_utils::{indexmap::FxIndexMap, xxhash::RandomIdentifierGenerator};

use super::{ImportDecls, TlaFinalizer};

/// Exported name to the local binding it reads, in the order the exports appear.
pub type ExportMap<'ast> = FxIndexMap<Atom<'ast>, Atom<'ast>>;

impl<'ast> TlaFinalizer<'_, 'ast> {
  /// Split the module body into its import declarations, what it exports, and the statements that
  /// are left to run. Export syntax is stripped off and recorded in the export map.
  pub(super) fn partition_module_items(
    &self,
    body: allocator::Vec<'ast, Statement<'ast>>,
  ) -> anyhow::Result<(ImportDecls<'ast>, ExportMap<'ast>, Vec<Statement<'ast>>)> {
    let mut imports = vec![];
    let mut export_map = ExportMap::default();
    let mut statements = Vec::with_capacity(body.len());
    let mut id_generator = None;

    for stmt in body {
      if matches!(
        stmt,
        Statement::ExportAllDeclaration(_)
          | Statement::TSExportAssignment(_)
          | Statement::TSNamespaceExportDeclaration(_)
      ) {
        return Err(self.unsupported("top-level statement", stmt.node_kind()));
      }

      match stmt {
        Statement::ImportDeclaration(decl) => imports.push(decl),
        Statement::ExportNamedDeclaration(decl) => {
          if decl.source.is_some() {
            return Err(self.unsupported("re-export", "ExportNamedDeclaration"));
          }
          let decl = decl.unbox();
          for specifier in &decl.specifiers {
            export_map.insert(specifier.exported.name(), specifier.local.name());
          }
          let Some(declaration) = decl.declaration else {
            continue;
          };
          match &declaration {
            Declaration::VariableDeclaration(var_decl) => {
              for declarator in &var_decl.declarations {
                for name in declarator.id.binding_names() {
                  export_map.insert(name, name);
                }
              }
            }
            Declaration::FunctionDeclaration(func) => {
              let name = func.id.as_ref().map(|id| id.name);
              let name = name.ok_or_else(|| self.unsupported("export declaration", "FunctionDeclaration"))?;
              export_map.insert(name, name);
            }
            Declaration::ClassDeclaration(class) => {
              let name = class.id.as_ref().map(|id| id.name);
              let name = name.ok_or_else(|| self.unsupported("export declaration", "ClassDeclaration"))?;
              export_map.insert(name, name);
            }
            _ => return Err(self.unsupported("export declaration", "TSDeclaration")),
          }
          statements.push(Statement::from(declaration));
        }
        Statement::ExportDefaultDeclaration(decl) => {
          let default = Atom::from("default");
          match decl.unbox().declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(mut func) => {
              if let Some(name) = func.id.as_ref().map(|id| id.name) {
                export_map.insert(default, name);
                statements.push(Statement::FunctionDeclaration(func));
              } else {
                func.r#type = FunctionType::FunctionExpression;
                let name = self.synthetic_name(&mut id_generator);
                export_map.insert(default, name);
                statements.push(self.snippet.let_init_stmt(&name, Expression::FunctionExpression(func)));
              }
            }
            ExportDefaultDeclarationKind::ClassDeclaration(mut class) => {
              if let Some(name) = class.id.as_ref().map(|id| id.name) {
                export_map.insert(default, name);
                statements.push(Statement::ClassDeclaration(class));
              } else {
                class.r#type = ClassType::ClassExpression;
                let name = self.synthetic_name(&mut id_generator);
                export_map.insert(default, name);
                statements.push(self.snippet.let_init_stmt(&name, Expression::ClassExpression(class)));
              }
            }
            ExportDefaultDeclarationKind::TSInterfaceDeclaration(_) => {
              return Err(self.unsupported("default export", "TSInterfaceDeclaration"));
            }
            kind @ match_expression!(ExportDefaultDeclarationKind) => {
              let name = self.synthetic_name(&mut id_generator);
              export_map.insert(default, name);
              statements.push(self.snippet.let_init_stmt(&name, kind.into_expression()));
            }
          }
        }
        other => statements.push(other),
      }
    }

    Ok((imports, export_map, statements))
  }

  fn synthetic_name(&self, generator: &mut Option<RandomIdentifierGenerator>) -> Atom<'ast> {
    let generator = generator.get_or_insert_with(|| RandomIdentifierGenerator::new(self.source));
    self.snippet.atom(&generator.generate())
  }

  pub(super) fn unsupported(&self, context: &'static str, node_kind: &str) -> anyhow::Error {
    UnsupportedShape::new(self.ctx.id.as_str(), context, node_kind).into()
  }
}
