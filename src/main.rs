use clap::Parser;
use halfmirror::oracle::{FaceCenterOracle, FixedCenter, NoDetection};
use halfmirror::{MirrorCommand, apply_command, parse_command};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "halfmirror")]
#[command(about = "Mirror one half of an image across a vertical axis")]
#[command(long_about = "\
Mirror one half of an image across a vertical axis

The first argument is a mirror command: a side, optionally followed by an
axis position. `left` keeps the left half and reflects it rightward; `right`
keeps the right half. A trailing number places the axis at that percentage
of the width; `auto` places it at a detected face; nothing means the
midpoint.

Example commands:
  left        mirror the left half at the midpoint
  right       mirror the right half at the midpoint
  left40      keep the left 40% and mirror it (l40 is the same)
  rightauto   axis at the detected face center (righta, ra too)

Short forms: l = left, r = right, a = auto. A leading `c` (chat scope) is
accepted for compatibility with messaging hosts and ignored here.

No face detector is built in: `auto` mirrors at the midpoint unless you
supply --face-center with a fraction from an external detector.

Each input is written next to itself as NAME-mirror.EXT (or into --out-dir),
in the input's format.")]
#[command(version)]
struct Cli {
    /// Mirror command, e.g. `left`, `r40`, `rightauto`
    command: String,

    /// Input images (jpeg, png, webp)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write outputs here instead of next to the inputs
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Face-center fraction (0.0-1.0) to use for `auto`, from an external detector
    #[arg(long)]
    face_center: Option<f64>,

    /// Cap the number of worker threads for batch processing
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        if let Err(err) = init_thread_pool(threads) {
            log::warn!("--threads {threads} ignored: {err}");
        }
    }

    // One command for the whole batch; a non-command is reported here — the
    // silent-ignore policy belongs to messaging hosts, not a CLI.
    let command = parse_command(&cli.command)?;

    let oracle: Box<dyn FaceCenterOracle> = match cli.face_center {
        Some(fraction) => Box::new(FixedCenter(fraction)),
        None => Box::new(NoDetection),
    };

    if let Some(dir) = &cli.out_dir {
        std::fs::create_dir_all(dir)?;
    }

    let failures: usize = cli
        .inputs
        .par_iter()
        .map(|input| {
            match mirror_file(input, &command, oracle.as_ref(), cli.out_dir.as_deref()) {
                Ok(output) => {
                    println!("{} -> {}", input.display(), output.display());
                    0
                }
                Err(err) => {
                    eprintln!("{}: {err}", input.display());
                    1
                }
            }
        })
        .sum();

    if failures > 0 {
        return Err(format!("{failures} of {} inputs failed", cli.inputs.len()).into());
    }
    Ok(())
}

/// Decode one input, run the pipeline, and encode the result. Format follows
/// the file extension on both ends.
fn mirror_file(
    input: &Path,
    command: &MirrorCommand,
    oracle: &dyn FaceCenterOracle,
    out_dir: Option<&Path>,
) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    let image = image::open(input)?;
    log::debug!("loaded {} ({}x{})", input.display(), image.width(), image.height());

    let mirrored = apply_command(command, &image, oracle)?;

    let output = output_path(input, out_dir);
    mirrored.save(&output)?;
    Ok(output)
}

/// Cap the global rayon pool. Fails if the pool is already initialized, in
/// which case the requested cap is not in effect and the caller must say so.
fn init_thread_pool(threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
}

fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("png");
    let name = format!("{stem}-mirror.{ext}");
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
