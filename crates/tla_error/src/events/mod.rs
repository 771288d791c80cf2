pub mod missing_module;
pub mod unsupported_shape;
