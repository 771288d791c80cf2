use oxc::{
  ast::{
    AstBuilder,
    ast::{AssignmentTarget, AssignmentTargetMaybeDefault, BindingPattern},
  },
  span::Atom,
};
use smallvec::SmallVec;

pub type BindingNames<'ast> = SmallVec<[Atom<'ast>; 4]>;

pub trait BindingPatternExt<'ast>: Sized {
  /// Every identifier the pattern binds, in source order.
  fn binding_names(&self) -> BindingNames<'ast>;

  /// Turns a declaration pattern into the equivalent assignment target, so
  /// `const { a, b: [c = 1] } = v` can become `({ a, b: [c = 1] } = v)`.
  ///
  /// Fails with the node kind for a bare `x = 1` pattern, which has no assignment form.
  fn into_assignment_target(self, builder: AstBuilder<'ast>) -> Result<AssignmentTarget<'ast>, &'static str>;
}

impl<'ast> BindingPatternExt<'ast> for BindingPattern<'ast> {
  fn binding_names(&self) -> BindingNames<'ast> {
    let mut names = BindingNames::new();
    collect_names(self, &mut names);
    names
  }

  fn into_assignment_target(self, builder: AstBuilder<'ast>) -> Result<AssignmentTarget<'ast>, &'static str> {
    match self {
      BindingPattern::BindingIdentifier(ident) => Ok(AssignmentTarget::from(
        builder.simple_assignment_target_assignment_target_identifier(ident.span, ident.name),
      )),
      BindingPattern::ObjectPattern(pattern) => {
        let pattern = pattern.unbox();
        let mut properties = builder.vec_with_capacity(pattern.properties.len());
        for property in pattern.properties {
          if property.shorthand {
            let (ident, init) = match property.value {
              BindingPattern::BindingIdentifier(ident) => (ident, None),
              BindingPattern::AssignmentPattern(assign) => {
                let assign = assign.unbox();
                let BindingPattern::BindingIdentifier(ident) = assign.left else {
                  return Err("AssignmentPattern");
                };
                (ident, Some(assign.right))
              }
              _ => return Err("BindingProperty"),
            };
            properties.push(builder.assignment_target_property_assignment_target_property_identifier(
              property.span,
              builder.identifier_reference(ident.span, ident.name),
              init,
            ));
          } else {
            let binding = into_maybe_default(property.value, builder)?;
            properties.push(builder.assignment_target_property_assignment_target_property_property(
              property.span,
              property.key,
              binding,
              property.computed,
            ));
          }
        }
        let rest = pattern
          .rest
          .map(|rest| {
            let rest = rest.unbox();
            rest
              .argument
              .into_assignment_target(builder)
              .map(|target| builder.alloc_assignment_target_rest(rest.span, target))
          })
          .transpose()?;
        Ok(AssignmentTarget::from(builder.assignment_target_pattern_object_assignment_target(
          pattern.span,
          properties,
          rest,
        )))
      }
      BindingPattern::ArrayPattern(pattern) => {
        let pattern = pattern.unbox();
        let mut elements = builder.vec_with_capacity(pattern.elements.len());
        for element in pattern.elements {
          elements.push(element.map(|element| into_maybe_default(element, builder)).transpose()?);
        }
        let rest = pattern
          .rest
          .map(|rest| {
            let rest = rest.unbox();
            rest
              .argument
              .into_assignment_target(builder)
              .map(|target| builder.alloc_assignment_target_rest(rest.span, target))
          })
          .transpose()?;
        Ok(AssignmentTarget::from(builder.assignment_target_pattern_array_assignment_target(
          pattern.span,
          elements,
          rest,
        )))
      }
      BindingPattern::AssignmentPattern(_) => Err("AssignmentPattern"),
    }
  }
}

fn collect_names<'ast>(pattern: &BindingPattern<'ast>, names: &mut BindingNames<'ast>) {
  match pattern {
    BindingPattern::BindingIdentifier(ident) => names.push(ident.name),
    BindingPattern::AssignmentPattern(assign) => collect_names(&assign.left, names),
    BindingPattern::ObjectPattern(pattern) => {
      pattern.properties.iter().for_each(|property| collect_names(&property.value, names));
      if let Some(rest) = &pattern.rest {
        collect_names(&rest.argument, names);
      }
    }
    BindingPattern::ArrayPattern(pattern) => {
      pattern.elements.iter().flatten().for_each(|element| collect_names(element, names));
      if let Some(rest) = &pattern.rest {
        collect_names(&rest.argument, names);
      }
    }
  }
}

// `x = 1` nested inside a pattern is the only place a default may appear.
fn into_maybe_default<'ast>(
  pattern: BindingPattern<'ast>,
  builder: AstBuilder<'ast>,
) -> Result<AssignmentTargetMaybeDefault<'ast>, &'static str> {
  if let BindingPattern::AssignmentPattern(assign) = pattern {
    let assign = assign.unbox();
    let binding = assign.left.into_assignment_target(builder)?;
    return Ok(builder.assignment_target_maybe_default_assignment_target_with_default(
      assign.span,
      binding,
      assign.right,
    ));
  }
  pattern.into_assignment_target(builder).map(AssignmentTargetMaybeDefault::from)
}

#[cfg(test)]
mod tests {
  use oxc::{
    allocator::Allocator,
    ast::{AstBuilder, ast::Statement},
    codegen::Codegen,
    parser::Parser,
    span::{SPAN, SourceType},
  };

  use super::BindingPatternExt;

  fn declared_pattern<'a>(
    alloc: &'a Allocator,
    source: &'a str,
  ) -> (oxc::ast::ast::BindingPattern<'a>, oxc::ast::ast::Expression<'a>) {
    let mut program = Parser::new(alloc, source, SourceType::mjs()).parse().program;
    let Some(Statement::VariableDeclaration(mut decl)) = program.body.pop() else {
      panic!("expected a variable declaration");
    };
    let declarator = decl.declarations.remove(0);
    let init = declarator.init.unwrap_or_else(|| AstBuilder::new(alloc).void_0(SPAN));
    (declarator.id, init)
  }

  fn assignment_code(source: &str) -> String {
    let alloc = Allocator::default();
    let source = alloc.alloc_str(source);
    let builder = AstBuilder::new(&alloc);
    let (pattern, init) = declared_pattern(&alloc, source);
    let target = pattern.into_assignment_target(builder).unwrap();
    let assignment = builder.expression_assignment(
      SPAN,
      oxc::ast::ast::AssignmentOperator::Assign,
      target,
      init,
    );
    let program = builder.program(
      SPAN,
      SourceType::mjs(),
      "",
      builder.vec(),
      None,
      builder.vec(),
      builder.vec1(builder.statement_expression(SPAN, builder.expression_parenthesized(SPAN, assignment))),
    );
    Codegen::new().build(&program).code
  }

  fn normalize(source: &str) -> String {
    let alloc = Allocator::default();
    let program = Parser::new(&alloc, source, SourceType::mjs()).parse().program;
    Codegen::new().build(&program).code
  }

  #[test]
  fn collects_nested_names() {
    let alloc = Allocator::default();
    let (pattern, _) =
      declared_pattern(&alloc, "const { x, _0: { _1: { y, z } } = {}, ...w } = v;");
    let names = pattern.binding_names();
    assert_eq!(names.iter().map(|name| name.as_str()).collect::<Vec<_>>(), ["x", "y", "z", "w"]);

    let (pattern, _) = declared_pattern(&alloc, "const [x, [[[y, z] = [0, 1], w], ...u] = a, ...v] = b;");
    let names = pattern.binding_names();
    assert_eq!(
      names.iter().map(|name| name.as_str()).collect::<Vec<_>>(),
      ["x", "y", "z", "w", "u", "v"]
    );
  }

  #[test]
  fn object_pattern_becomes_assignment_target() {
    let code = assignment_code("const { x, y = 1, z: [a], ...w } = v;");
    assert_eq!(code, normalize("({ x, y = 1, z: [a], ...w } = v);"));
  }

  #[test]
  fn array_pattern_keeps_holes_and_defaults() {
    let code = assignment_code("const [, x = 1, ...rest] = v;");
    assert_eq!(code, normalize("([, x = 1, ...rest] = v);"));
  }
}
