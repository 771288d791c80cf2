mod module_finalizer;
mod stages;
mod top_level_await;
mod types;
mod utils;

pub use tla_common::*;
pub use tla_error::{BuildError, BuildResult, MissingModule, UnsupportedShape};

pub use crate::{
  stages::{link::propagate_top_level_await, scan::find_highest_pattern},
  top_level_await::TopLevelAwait,
  types::transform_output::TransformOutput,
};
