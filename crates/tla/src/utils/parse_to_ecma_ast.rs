use arcstr::ArcStr;
use itertools::Itertools;
use oxc::{semantic::SemanticBuilder, span::SourceType};
use tla_common::ModuleId;
use tla_ecmascript::{EcmaAst, EcmaCompiler};
use tla_error::BuildResult;

/// Parse an emitted chunk as an ES module and run the semantic syntax checks over it.
pub fn parse_to_ecma_ast(name: &ModuleId, source: ArcStr) -> BuildResult<EcmaAst> {
  let ast = EcmaCompiler::parse(source, SourceType::mjs()).map_err(|errors| {
    errors.into_vec().into_iter().map(|e| e.context(format!("In {:?}", name.as_str()))).collect_vec()
  })?;

  let semantic_ret = SemanticBuilder::new().with_check_syntax_error(true).build(ast.program());
  if !semantic_ret.errors.is_empty() {
    Err(anyhow::anyhow!(
      "Failed to parse {:?}, got: {}",
      name.as_str(),
      semantic_ret.errors.iter().join("; ")
    ))?;
  }

  Ok(ast)
}

#[test]
fn rejects_invalid_chunks() {
  let name = ModuleId::from("a.js");
  assert!(parse_to_ecma_ast(&name, "export const a = 1;".into()).is_ok());

  let errors = parse_to_ecma_ast(&name, "let a; let a;".into()).unwrap_err();
  assert_eq!(errors.len(), 1);
  assert!(errors[0].to_string().contains("\"a.js\""));
}
