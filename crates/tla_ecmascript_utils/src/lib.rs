mod ast_snippet;
mod extensions;

pub use crate::{
  ast_snippet::AstSnippet,
  extensions::ast_ext::{
    binding_pattern_ext::{BindingNames, BindingPatternExt},
    expression_ext::ExpressionExt,
    statement_ext::StatementExt,
  },
};
