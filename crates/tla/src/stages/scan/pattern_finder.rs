use std::ops::ControlFlow;

use oxc::{
  ast::ast::{self, VariableDeclarationKind},
  ast_visit::{Visit, walk},
  syntax::scope::ScopeFlags,
};
use tla_common::CodePattern;

/// Looks for `await` evaluated while the module body itself runs.
///
/// Function, arrow and class bodies run later, so they are skipped. Class decorators and the
/// `extends` clause are evaluated with the module and are still scanned.
struct TopLevelAwaitFinder {
  found: ControlFlow<()>,
}

impl<'ast> Visit<'ast> for TopLevelAwaitFinder {
  fn visit_statement(&mut self, stmt: &ast::Statement<'ast>) {
    if self.found.is_continue() {
      walk::walk_statement(self, stmt);
    }
  }

  fn visit_expression(&mut self, expr: &ast::Expression<'ast>) {
    if self.found.is_continue() {
      walk::walk_expression(self, expr);
    }
  }

  fn visit_await_expression(&mut self, _it: &ast::AwaitExpression<'ast>) {
    self.found = ControlFlow::Break(());
  }

  fn visit_for_of_statement(&mut self, it: &ast::ForOfStatement<'ast>) {
    if it.r#await {
      self.found = ControlFlow::Break(());
      return;
    }
    walk::walk_for_of_statement(self, it);
  }

  fn visit_variable_declaration(&mut self, it: &ast::VariableDeclaration<'ast>) {
    if it.kind == VariableDeclarationKind::AwaitUsing {
      self.found = ControlFlow::Break(());
      return;
    }
    walk::walk_variable_declaration(self, it);
  }

  fn visit_function(&mut self, _it: &ast::Function<'ast>, _flags: ScopeFlags) {}

  fn visit_arrow_function_expression(&mut self, _it: &ast::ArrowFunctionExpression<'ast>) {}

  fn visit_class(&mut self, it: &ast::Class<'ast>) {
    self.visit_decorators(&it.decorators);
    if let Some(super_class) = &it.super_class {
      self.visit_expression(super_class);
    }
  }
}

/// Looks for `import()` at any depth.
struct DynamicImportFinder {
  found: ControlFlow<()>,
}

impl<'ast> Visit<'ast> for DynamicImportFinder {
  fn visit_statement(&mut self, stmt: &ast::Statement<'ast>) {
    if self.found.is_continue() {
      walk::walk_statement(self, stmt);
    }
  }

  fn visit_expression(&mut self, expr: &ast::Expression<'ast>) {
    if self.found.is_continue() {
      walk::walk_expression(self, expr);
    }
  }

  fn visit_import_expression(&mut self, _it: &ast::ImportExpression<'ast>) {
    self.found = ControlFlow::Break(());
  }
}

/// The most severe blocking construct the module contains, if any.
pub fn find_highest_pattern(program: &ast::Program<'_>) -> Option<CodePattern> {
  let mut tla_finder = TopLevelAwaitFinder { found: ControlFlow::Continue(()) };
  tla_finder.visit_program(program);
  if tla_finder.found.is_break() {
    return Some(CodePattern::TopLevelAwait);
  }

  let mut import_finder = DynamicImportFinder { found: ControlFlow::Continue(()) };
  import_finder.visit_program(program);
  import_finder.found.is_break().then_some(CodePattern::DynamicImport)
}

#[cfg(test)]
mod tests {
  use oxc::{allocator::Allocator, parser::Parser, span::SourceType};
  use tla_common::CodePattern;

  use super::find_highest_pattern;

  fn find(source: &str) -> Option<CodePattern> {
    let alloc = Allocator::default();
    let ret = Parser::new(&alloc, source, SourceType::mjs()).parse();
    assert!(ret.errors.is_empty(), "{:?}", ret.errors);
    find_highest_pattern(&ret.program)
  }

  #[test]
  fn await_in_complex_expression() {
    assert_eq!(
      find("const x = 1 + (await globalThis.somePromise).value * f(await g());"),
      Some(CodePattern::TopLevelAwait)
    );
  }

  #[test]
  fn for_await_loop() {
    assert_eq!(find("for await (const x of globalThis.stream) {}"), Some(CodePattern::TopLevelAwait));
  }

  #[test]
  fn await_in_block_inside_loop() {
    let source = "for (let i = 0; i < 10; i++) { if (i) { try { await i; } catch {} } }";
    assert_eq!(find(source), Some(CodePattern::TopLevelAwait));
  }

  #[test]
  fn await_using_declaration() {
    assert_eq!(find("await using res = globalThis.resource;"), Some(CodePattern::TopLevelAwait));
  }

  #[test]
  fn await_in_class_heritage() {
    assert_eq!(find("class A extends (await base()) {}"), Some(CodePattern::TopLevelAwait));
  }

  #[test]
  fn deferred_awaits_are_ignored() {
    assert_eq!(find("const f = async () => { await x; };"), None);
    assert_eq!(find("async function f() { await x; }"), None);
    assert_eq!(find("const f = async function () { await x; };"), None);
    assert_eq!(find("class A { async m() { await x; } static async s() { await y; } }"), None);
    assert_eq!(find("const o = { async m() { await x; } };"), None);
    assert_eq!(find("for (const x of list) { console.log(x); }"), None);
    assert_eq!(find("console.log(1);"), None);
  }

  #[test]
  fn dynamic_import_at_any_depth() {
    assert_eq!(find("function load() { return import('./a.js'); }"), Some(CodePattern::DynamicImport));
    assert_eq!(find("const m = import('./a.js');"), Some(CodePattern::DynamicImport));
  }

  #[test]
  fn top_level_await_wins_over_dynamic_import() {
    assert_eq!(find("const m = await import('./a.js');"), Some(CodePattern::TopLevelAwait));
    assert_eq!(
      find("const load = async () => await import('./a.js');"),
      Some(CodePattern::DynamicImport)
    );
  }
}
