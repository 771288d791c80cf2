use oxc::{
  allocator::{self, Allocator},
  ast::{
    AstBuilder, NONE,
    ast::{
      self, Argument, ArrayExpressionElement, AssignmentOperator, AssignmentTarget, Expression,
      FormalParameterKind, ImportOrExportKind, Statement, VariableDeclarationKind,
    },
  },
  span::{Atom, SPAN, Span},
};
use tla_utils::ecmascript::is_validate_identifier_name;

type PassedStr<'a> = &'a str;

// `AstBuilder` is more suitable name, but it's already used in oxc.
pub struct AstSnippet<'ast> {
  pub builder: AstBuilder<'ast>,
}

impl<'ast> AstSnippet<'ast> {
  pub fn new(alloc: &'ast Allocator) -> Self {
    Self { builder: AstBuilder::new(alloc) }
  }

  #[inline]
  pub fn alloc(&self) -> &'ast Allocator {
    self.builder.allocator
  }

  pub fn atom(&self, value: &str) -> Atom<'ast> {
    self.builder.atom(value)
  }

  #[inline]
  pub fn id(&self, name: PassedStr, span: Span) -> ast::BindingIdentifier<'ast> {
    self.builder.binding_identifier(span, self.atom(name))
  }

  #[inline]
  pub fn id_name(&self, name: PassedStr, span: Span) -> ast::IdentifierName<'ast> {
    self.builder.identifier_name(span, self.atom(name))
  }

  #[inline]
  pub fn id_ref_expr(&self, name: PassedStr, span: Span) -> Expression<'ast> {
    self.builder.expression_identifier(span, self.atom(name))
  }

  pub fn simple_id_assignment_target(&self, name: PassedStr, span: Span) -> AssignmentTarget<'ast> {
    AssignmentTarget::from(
      self.builder.simple_assignment_target_assignment_target_identifier(span, self.atom(name)),
    )
  }

  /// `object.property`
  pub fn member_expr(&self, object: Expression<'ast>, property: PassedStr) -> Expression<'ast> {
    Expression::from(self.builder.member_expression_static(
      SPAN,
      object,
      self.id_name(property, SPAN),
      false,
    ))
  }

  /// `callee(...arguments)`
  pub fn call_expr_with_args(
    &self,
    callee: Expression<'ast>,
    arguments: impl IntoIterator<Item = Expression<'ast>>,
  ) -> Expression<'ast> {
    self.builder.expression_call(
      SPAN,
      callee,
      NONE,
      self.builder.vec_from_iter(arguments.into_iter().map(Argument::from)),
      false,
    )
  }

  /// `[...elements]`
  pub fn array_expr(&self, elements: impl IntoIterator<Item = Expression<'ast>>) -> Expression<'ast> {
    self
      .builder
      .expression_array(SPAN, self.builder.vec_from_iter(elements.into_iter().map(ArrayExpressionElement::from)))
  }

  /// `(callee)()`
  pub fn iife_expr(&self, callee: Expression<'ast>) -> Expression<'ast> {
    self.call_expr_with_args(self.builder.expression_parenthesized(SPAN, callee), [])
  }

  /// `async (a, b) => { ...statements }`
  pub fn arrow_fn_expr(
    &self,
    is_async: bool,
    params: &[PassedStr],
    statements: allocator::Vec<'ast, Statement<'ast>>,
  ) -> Expression<'ast> {
    let items = self.builder.vec_from_iter(params.iter().map(|name| {
      self
        .builder
        .plain_formal_parameter(SPAN, self.builder.binding_pattern_binding_identifier(SPAN, self.atom(name)))
    }));
    self.builder.expression_arrow_function(
      SPAN,
      false,
      is_async,
      NONE,
      self.builder.formal_parameters(SPAN, FormalParameterKind::ArrowFormalParameters, items, NONE),
      NONE,
      self.builder.function_body(SPAN, self.builder.vec(), statements),
    )
  }

  #[inline]
  pub fn expr_stmt(&self, expr: Expression<'ast>) -> Statement<'ast> {
    self.builder.statement_expression(SPAN, expr)
  }

  #[inline]
  pub fn return_stmt(&self, argument: Expression<'ast>) -> Statement<'ast> {
    self.builder.statement_return(SPAN, Some(argument))
  }

  /// `target = value;`
  ///
  /// Object patterns are wrapped in parentheses so the statement is not parsed as a block.
  pub fn assignment_stmt(&self, target: AssignmentTarget<'ast>, value: Expression<'ast>) -> Statement<'ast> {
    let needs_parens = matches!(target, AssignmentTarget::ObjectAssignmentTarget(_));
    let assignment = self.builder.expression_assignment(SPAN, AssignmentOperator::Assign, target, value);
    let expr =
      if needs_parens { self.builder.expression_parenthesized(SPAN, assignment) } else { assignment };
    self.expr_stmt(expr)
  }

  /// `let a, b, c;`, or `None` when there is nothing to declare.
  pub fn let_decl_stmt<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> Option<Statement<'ast>> {
    let declarations = self.builder.vec_from_iter(names.into_iter().map(|name| {
      self.builder.variable_declarator(
        SPAN,
        VariableDeclarationKind::Let,
        self.builder.binding_pattern_binding_identifier(SPAN, self.atom(name)),
        NONE,
        None,
        false,
      )
    }));
    if declarations.is_empty() {
      return None;
    }
    Some(Statement::from(self.builder.declaration_variable(
      SPAN,
      VariableDeclarationKind::Let,
      declarations,
      false,
    )))
  }

  /// `let name = init;`
  pub fn let_init_stmt(&self, name: PassedStr, init: Expression<'ast>) -> Statement<'ast> {
    let declarator = self.builder.variable_declarator(
      SPAN,
      VariableDeclarationKind::Let,
      self.builder.binding_pattern_binding_identifier(SPAN, self.atom(name)),
      NONE,
      Some(init),
      false,
    );
    Statement::from(self.builder.declaration_variable(
      SPAN,
      VariableDeclarationKind::Let,
      self.builder.vec1(declarator),
      false,
    ))
  }

  /// `(() => { try { return name; } catch {} })()`
  ///
  /// Reading an imported binding may throw while the exporter is still in its TDZ, which happens
  /// for circular imports.
  pub fn try_return_iife(&self, name: PassedStr) -> Expression<'ast> {
    let try_stmt = self.builder.statement_try(
      SPAN,
      self.builder.block_statement(SPAN, self.builder.vec1(self.return_stmt(self.id_ref_expr(name, SPAN)))),
      Some(self.builder.catch_clause(SPAN, None, self.builder.block_statement(SPAN, self.builder.vec()))),
      NONE,
    );
    self.iife_expr(self.arrow_fn_expr(false, &[], self.builder.vec1(try_stmt)))
  }

  /// `Promise.all(array).then(closure)`
  pub fn promise_all_then_expr(&self, array: Expression<'ast>, closure: Expression<'ast>) -> Expression<'ast> {
    let all = self.call_expr_with_args(self.member_expr(self.id_ref_expr("Promise", SPAN), "all"), [array]);
    self.call_expr_with_args(self.member_expr(all, "then"), [closure])
  }

  /// `import_expr.then(async (m) => { await m.<promise>; return m; })`
  pub fn dynamic_import_continuation(
    &self,
    import_expr: Expression<'ast>,
    promise_export_name: PassedStr,
  ) -> Expression<'ast> {
    let await_promise = self.expr_stmt(
      self.builder.expression_await(SPAN, self.member_expr(self.id_ref_expr("m", SPAN), promise_export_name)),
    );
    let body = self.builder.vec_from_array([await_promise, self.return_stmt(self.id_ref_expr("m", SPAN))]);
    let callback = self.arrow_fn_expr(true, &["m"], body);
    self.call_expr_with_args(self.member_expr(import_expr, "then"), [callback])
  }

  /// An identifier when `name` is a valid one, otherwise a string literal.
  pub fn module_export_name(&self, name: PassedStr) -> ast::ModuleExportName<'ast> {
    if is_validate_identifier_name(name) {
      self.builder.module_export_name_identifier_name(SPAN, self.atom(name))
    } else {
      self.builder.module_export_name_string_literal(SPAN, self.atom(name), None)
    }
  }

  /// `imported as local` inside `import { ... } from "..."`
  pub fn import_specifier(&self, imported: PassedStr, local: PassedStr) -> ast::ImportDeclarationSpecifier<'ast> {
    self.builder.import_declaration_specifier_import_specifier(
      SPAN,
      self.module_export_name(imported),
      self.id(local, SPAN),
      ImportOrExportKind::Value,
    )
  }

  /// `import { ...specifiers } from "source";`
  pub fn import_named_stmt(
    &self,
    source: PassedStr,
    specifiers: allocator::Vec<'ast, ast::ImportDeclarationSpecifier<'ast>>,
  ) -> Statement<'ast> {
    Statement::ImportDeclaration(self.builder.alloc_import_declaration(
      SPAN,
      Some(specifiers),
      self.builder.string_literal(SPAN, self.atom(source), None),
      None,
      NONE,
      ImportOrExportKind::Value,
    ))
  }

  /// `export { local as exported, ... };`
  pub fn export_named_stmt<'n>(
    &self,
    pairs: impl IntoIterator<Item = (&'n str, &'n str)>,
  ) -> Statement<'ast> {
    let specifiers = self.builder.vec_from_iter(pairs.into_iter().map(|(exported, local)| {
      self.builder.export_specifier(
        SPAN,
        self.builder.module_export_name_identifier_reference(SPAN, self.atom(local)),
        self.module_export_name(exported),
        ImportOrExportKind::Value,
      )
    }));
    Statement::ExportNamedDeclaration(self.builder.plain_export_named_declaration(SPAN, specifiers, None))
  }
}

#[cfg(test)]
mod tests {
  use oxc::{allocator::Allocator, codegen::Codegen, span::SourceType};

  use super::AstSnippet;

  fn print<'a>(alloc: &'a Allocator, stmts: impl IntoIterator<Item = oxc::ast::ast::Statement<'a>>) -> String {
    let snippet = AstSnippet::new(alloc);
    let program = snippet.builder.program(
      oxc::span::SPAN,
      SourceType::mjs(),
      "",
      snippet.builder.vec(),
      None,
      snippet.builder.vec(),
      snippet.builder.vec_from_iter(stmts),
    );
    Codegen::new().build(&program).code
  }

  #[test]
  fn try_return_iife_reads_binding_lazily() {
    let alloc = Allocator::default();
    let snippet = AstSnippet::new(&alloc);
    let code = print(&alloc, [snippet.expr_stmt(snippet.try_return_iife("__tla_0"))]);
    assert!(code.contains("try {"));
    assert!(code.contains("return __tla_0;"));
    assert!(code.contains("catch {}"));
  }

  #[test]
  fn export_names_fall_back_to_string_literals() {
    let alloc = Allocator::default();
    let snippet = AstSnippet::new(&alloc);
    let code = print(&alloc, [snippet.export_named_stmt([("x", "x"), ("a-b", "y")])]);
    assert!(code.starts_with("export { x, y as "));
    assert!(code.contains("a-b"));
  }

  #[test]
  fn let_decl_without_names_is_skipped() {
    let alloc = Allocator::default();
    let snippet = AstSnippet::new(&alloc);
    assert!(snippet.let_decl_stmt([]).is_none());
    let code = print(&alloc, snippet.let_decl_stmt(["x", "y"]));
    assert_eq!(code, "let x, y;\n");
  }
}
