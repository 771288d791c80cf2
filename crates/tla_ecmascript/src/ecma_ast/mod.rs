pub mod program_cell;

use std::fmt::Debug;

use arcstr::ArcStr;
use oxc::{allocator::Allocator, ast::ast::Program, span::SourceType};

use self::program_cell::ProgramCell;

/// A parsed chunk.
///
/// Use `ast.program.with_mut(|fields| ..)` to get at `&mut Program`.
pub struct EcmaAst {
  pub program: ProgramCell,
  pub source_type: SourceType,
}

impl EcmaAst {
  pub fn source(&self) -> &ArcStr {
    &self.program.borrow_owner().source
  }

  pub fn allocator(&self) -> &Allocator {
    &self.program.borrow_owner().allocator
  }

  pub fn program(&self) -> &Program {
    &self.program.borrow_dependent().program
  }
}

impl Debug for EcmaAst {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EcmaAst")
      .field("source_type", &self.source_type)
      .field("statements", &self.program().body.len())
      .finish_non_exhaustive()
  }
}

// The arena and the program are only reachable through `ProgramCell`, which hands out either shared
// references or a single `&mut` at a time.
unsafe impl Send for EcmaAst {}
unsafe impl Sync for EcmaAst {}
