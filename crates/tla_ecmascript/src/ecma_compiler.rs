use arcstr::ArcStr;
use itertools::Itertools;
use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  parser::Parser,
  span::SourceType,
};
use tla_error::BuildResult;

use crate::ecma_ast::{
  EcmaAst,
  program_cell::{ProgramCell, ProgramCellDependent, ProgramCellOwner},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct PrintOptions {
  pub minify: bool,
}

pub struct EcmaCompiler;

impl EcmaCompiler {
  pub fn parse(source: impl Into<ArcStr>, source_type: SourceType) -> BuildResult<EcmaAst> {
    let allocator = Allocator::default();
    let owner = ProgramCellOwner { source: source.into(), allocator };
    let program = ProgramCell::try_new(owner, |owner| {
      let ret = Parser::new(&owner.allocator, &owner.source, source_type).parse();
      if ret.panicked || !ret.errors.is_empty() {
        return Err(anyhow::anyhow!("Failed to parse, got: {}", ret.errors.iter().join("; ")));
      }
      Ok(ProgramCellDependent { program: ret.program })
    })?;

    Ok(EcmaAst { program, source_type })
  }

  pub fn print(ast: &EcmaAst) -> String {
    Self::print_with(ast, PrintOptions::default())
  }

  pub fn print_with(ast: &EcmaAst, options: PrintOptions) -> String {
    Codegen::new()
      .with_options(CodegenOptions { minify: options.minify, ..CodegenOptions::default() })
      .build(ast.program())
      .code
  }
}

#[test]
fn basic_test() {
  let ast = EcmaCompiler::parse("const a = 1;".to_string(), SourceType::mjs()).unwrap();
  let code = EcmaCompiler::print(&ast);
  assert_eq!(code, "const a = 1;\n");
}

#[test]
fn reports_syntax_errors() {
  let error = EcmaCompiler::parse("const = ;", SourceType::mjs()).unwrap_err();
  assert_eq!(error.len(), 1);
  assert!(error[0].to_string().starts_with("Failed to parse"));
}

#[test]
fn minified_print_is_shorter() {
  let ast = EcmaCompiler::parse("const a = 1;\nconst b = a + 2;\n", SourceType::mjs()).unwrap();
  let pretty = EcmaCompiler::print(&ast);
  let minified = EcmaCompiler::print_with(&ast, PrintOptions { minify: true });
  assert!(minified.len() < pretty.len());
  assert!(minified.contains("a=1"));
}
