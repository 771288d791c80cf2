use oxc::ast::ast;

pub trait StatementExt<'ast> {
  /// ESTree-style node name, used when reporting statements we can't rewrite.
  fn node_kind(&self) -> &'static str;
}

impl<'ast> StatementExt<'ast> for ast::Statement<'ast> {
  fn node_kind(&self) -> &'static str {
    match self {
      ast::Statement::ImportDeclaration(_) => "ImportDeclaration",
      ast::Statement::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
      ast::Statement::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
      ast::Statement::ExportAllDeclaration(_) => "ExportAllDeclaration",
      ast::Statement::TSExportAssignment(_) => "TSExportAssignment",
      ast::Statement::TSNamespaceExportDeclaration(_) => "TSNamespaceExportDeclaration",
      ast::Statement::VariableDeclaration(_) => "VariableDeclaration",
      ast::Statement::FunctionDeclaration(_) => "FunctionDeclaration",
      ast::Statement::ClassDeclaration(_) => "ClassDeclaration",
      ast::Statement::ExpressionStatement(_) => "ExpressionStatement",
      _ => "Statement",
    }
  }
}

#[test]
fn names_module_declarations() {
  use oxc::{allocator::Allocator, parser::Parser, span::SourceType};

  let alloc = Allocator::default();
  let ret = Parser::new(&alloc, "import a from './a'; export * from './b'; a();", SourceType::mjs()).parse();
  let kinds = ret.program.body.iter().map(StatementExt::node_kind).collect::<Vec<_>>();
  assert_eq!(kinds, ["ImportDeclaration", "ExportAllDeclaration", "ExpressionStatement"]);
}
