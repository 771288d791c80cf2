use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// Directory holding the emitted chunks. Every `.js` and `.mjs` file below it is read.
  #[clap(long, short = 'd')]
  pub dir: PathBuf,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Where to write the rewritten chunks. Defaults to rewriting `--dir` in place.
  #[clap(long, short = 'o')]
  pub out_dir: Option<PathBuf>,

  /// Write the module records as JSON to this file.
  #[clap(long)]
  pub report: Option<PathBuf>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long)]
  pub promise_export_name: Option<String>,

  /// Local names of imported promises become `<PREFIX>0`, `<PREFIX>1`, ...
  #[clap(long)]
  pub promise_import_prefix: Option<String>,

  #[clap(long, short = 'm')]
  pub minify: bool,

  #[clap(long, short = 's')]
  pub silent: bool,
}
