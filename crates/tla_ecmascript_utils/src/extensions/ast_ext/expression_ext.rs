use oxc::ast::ast;

pub trait ExpressionExt<'ast> {
  fn as_string_literal(&self) -> Option<&ast::StringLiteral<'ast>>;
}

impl<'ast> ExpressionExt<'ast> for ast::Expression<'ast> {
  fn as_string_literal(&self) -> Option<&ast::StringLiteral<'ast>> {
    let ast::Expression::StringLiteral(expr) = self else {
      return None;
    };
    Some(expr)
  }
}
