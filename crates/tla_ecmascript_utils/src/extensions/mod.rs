pub mod ast_ext;
