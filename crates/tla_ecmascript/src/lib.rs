mod ecma_ast;
mod ecma_compiler;

pub use crate::{
  ecma_ast::{EcmaAst, program_cell::WithMutFields},
  ecma_compiler::{EcmaCompiler, PrintOptions},
};
