mod args;

use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
  process::ExitCode,
  sync::Arc,
  time::Instant,
};

use anyhow::Context;
use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use tla::{OutputChunk, PromiseImportNameFn, SourceChunk, TlaOptions, TopLevelAwait, TransformOutput};
use tla_utils::path_ext::PathExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

/// Every `.js`/`.mjs` file below `dir`, named by its `/`-separated path relative to `dir`.
async fn read_chunks(dir: &Path) -> anyhow::Result<Vec<SourceChunk>> {
  let mut pending = vec![dir.to_path_buf()];
  let mut paths = vec![];
  while let Some(current) = pending.pop() {
    let mut entries =
      tokio::fs::read_dir(&current).await.with_context(|| format!("Failed to read {}", current.display()))?;
    while let Some(entry) = entries.next_entry().await? {
      let path = entry.path();
      if entry.file_type().await?.is_dir() {
        pending.push(path);
      } else if matches!(path.extension().and_then(OsStr::to_str), Some("js" | "mjs")) {
        paths.push(path);
      }
    }
  }
  paths.sort();

  let mut chunks = Vec::with_capacity(paths.len());
  for path in paths {
    let code =
      tokio::fs::read_to_string(&path).await.with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path.strip_prefix(dir)?.expect_to_slash();
    chunks.push(SourceChunk::new(name, code));
  }
  Ok(chunks)
}

/// Untouched chunks are only copied when writing somewhere other than the input directory.
async fn write_output(
  output: &TransformOutput,
  out_dir: &Path,
  in_place: bool,
  report: Option<&PathBuf>,
) -> anyhow::Result<()> {
  for chunk in output.chunks.iter().filter(|chunk| chunk.transformed || !in_place) {
    let path = out_dir.join(chunk.name.as_str());
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, &chunk.code).await.with_context(|| format!("Failed to write {}", path.display()))?;
  }

  if let Some(report) = report {
    let json = serde_json::to_string_pretty(&output.bundle_info)?;
    tokio::fs::write(report, json).await.with_context(|| format!("Failed to write {}", report.display()))?;
  }
  Ok(())
}

fn print_output_chunks(chunks: &[OutputChunk]) {
  let left = chunks.iter().map(|chunk| chunk.name.len()).max().unwrap_or_default();

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for chunk in chunks {
    let size = format!("{:.2}", chunk.code.len() as f64 / 1024.0);
    let status = if chunk.transformed { Colour::Green.paint("rewritten") } else { dim.paint("unchanged") };

    println!(
      "{}{}{:pad$} {}{}{:>8} kB",
      dim.paint("<DIR>/"),
      color.paint(chunk.name.as_str()),
      "",
      status,
      dim.paint(" │ size: "),
      size,
      pad = left - chunk.name.len()
    );
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_env("TLA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let args = Commands::parse();
  let EnhanceArgs { promise_export_name, promise_import_prefix, minify, silent } = args.enhance;
  let promise_import_name = promise_import_prefix.map(|prefix| -> Arc<PromiseImportNameFn> {
    Arc::new(move |index: usize| format!("{prefix}{index}"))
  });
  let transformer = TopLevelAwait::new(TlaOptions { promise_export_name, promise_import_name, minify: Some(minify) });

  let start = Instant::now();
  let chunks = match read_chunks(&args.input.dir).await {
    Ok(chunks) => chunks,
    Err(error) => {
      println!("{} {:#}", Colour::Red.paint("Error:"), error);
      return ExitCode::FAILURE;
    }
  };
  tracing::debug!(chunks = chunks.len(), dir = %args.input.dir.display(), "read chunks");

  match transformer.transform(chunks) {
    Ok(output) => {
      let out_dir = args.output.out_dir.as_deref().unwrap_or(&args.input.dir);
      let in_place = args.output.out_dir.is_none();
      if let Err(error) = write_output(&output, out_dir, in_place, args.output.report.as_ref()).await {
        println!("{} {:#}", Colour::Red.paint("Error:"), error);
        return ExitCode::FAILURE;
      }

      if !silent {
        for warning in &output.warnings {
          println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }
        print_output_chunks(&output.chunks);
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        println!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
