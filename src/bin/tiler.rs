use clap::{Parser, Subcommand, ValueEnum};
use rust_tiler::logging::{self, LogConfig};
use rust_tiler::utils::convert::{load_raster, save_raster};
use rust_tiler::utils::polar::{PolarUnwrap, RemapTable};
use rust_tiler::utils::timing::Stopwatch;
use rust_tiler::{Axis, PointI, Raster, StripSet, config};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "tiler", version, about = "Split, merge and unwrap camera images")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write logs to a dated file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Horizontal => Axis::Horizontal,
            AxisArg::Vertical => Axis::Vertical,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Cut an image into overlapping strips
    Split {
        #[arg(long)]
        image: PathBuf,
        /// Comma-separated cut offsets, e.g. 100,300,500
        #[arg(long)]
        cuts: String,
        #[arg(long, value_enum)]
        axis: Option<AxisArg>,
        #[arg(long)]
        margin: Option<usize>,
        /// Directory receiving strip_00.png, strip_01.png, ...
        #[arg(long)]
        out: PathBuf,
    },
    /// Reassemble strips written by `split`
    Merge {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum)]
        axis: Option<AxisArg>,
        #[arg(long)]
        margin: Option<usize>,
        /// Strip images in split order
        #[arg(required = true)]
        strips: Vec<PathBuf>,
    },
    /// Split then merge an image and compare the result
    Roundtrip {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        cuts: String,
        #[arg(long, value_enum)]
        axis: Option<AxisArg>,
        #[arg(long)]
        margin: Option<usize>,
    },
    /// Unwrap a ring around a centre into a rectangular strip
    Unwrap {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        cx: i32,
        #[arg(long)]
        cy: i32,
        #[arg(long)]
        min_r: i32,
        #[arg(long)]
        max_r: i32,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    if let Some(dir) = cli.log_dir {
        log_config = log_config.with_directory(dir);
    }
    let _log = match logging::init(&log_config) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("Failed to set up logging: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Split {
            image,
            cuts,
            axis,
            margin,
            out,
        } => split_cmd(
            &image,
            &cuts,
            resolve_axis(axis),
            resolve_margin(margin),
            &out,
        ),
        Command::Merge {
            out,
            axis,
            margin,
            strips,
        } => merge_cmd(&strips, resolve_axis(axis), resolve_margin(margin), &out),
        Command::Roundtrip {
            image,
            cuts,
            axis,
            margin,
        } => roundtrip_cmd(&image, &cuts, resolve_axis(axis), resolve_margin(margin)),
        Command::Unwrap {
            image,
            cx,
            cy,
            min_r,
            max_r,
            width,
            height,
            out,
        } => {
            let params = PolarUnwrap {
                width,
                height,
                ..PolarUnwrap::new(PointI::new(cx, cy), min_r, max_r)
            };
            unwrap_cmd(&image, &params, &out)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn resolve_axis(arg: Option<AxisArg>) -> Axis {
    arg.map(Axis::from).unwrap_or_else(config::default_axis)
}

fn resolve_margin(arg: Option<usize>) -> usize {
    arg.unwrap_or_else(config::default_margin)
}

fn parse_cuts(text: &str) -> rust_tiler::Result<Vec<i64>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| {
                rust_tiler::Error::InvalidArgument(format!("'{}' is not a cut offset", s))
            })
        })
        .collect()
}

fn split_cmd(
    image: &Path,
    cuts: &str,
    axis: Axis,
    margin: usize,
    out: &Path,
) -> rust_tiler::Result<()> {
    let raster = load_raster(image)?;
    let cuts = parse_cuts(cuts)?;
    let watch = Stopwatch::start("split");
    let strips = rust_tiler::split(&raster, &cuts, axis, margin)?;
    watch.log_elapsed();

    std::fs::create_dir_all(out)?;
    for (i, strip) in strips.iter().enumerate() {
        let path = out.join(format!("strip_{:02}.png", i));
        save_raster(strip, &path)?;
        println!("  {} ({}x{})", path.display(), strip.width(), strip.height());
    }
    info!(strips = strips.len(), "split {}", image.display());
    println!("Wrote {} strips to {}", strips.len(), out.display());
    Ok(())
}

fn merge_cmd(strips: &[PathBuf], axis: Axis, margin: usize, out: &Path) -> rust_tiler::Result<()> {
    let loaded = strips
        .iter()
        .map(load_raster)
        .collect::<rust_tiler::Result<Vec<Raster<u8>>>>()?;
    let set = StripSet::from_strips(loaded);

    let watch = Stopwatch::start("merge");
    let merged = rust_tiler::merge(&set, axis, margin)?;
    watch.log_elapsed();

    save_raster(&merged, out)?;
    println!(
        "Merged {} strips into {} ({}x{})",
        set.len(),
        out.display(),
        merged.width(),
        merged.height()
    );
    Ok(())
}

fn roundtrip_cmd(image: &Path, cuts: &str, axis: Axis, margin: usize) -> rust_tiler::Result<()> {
    let raster = load_raster(image)?;
    let cuts = parse_cuts(cuts)?;

    let watch = Stopwatch::start("roundtrip");
    let strips = rust_tiler::split(&raster, &cuts, axis, margin)?;
    let merged = rust_tiler::merge(&strips, axis, margin)?;
    let ms = watch.log_elapsed();

    println!(
        "Image: {} ({}x{})",
        image.display(),
        raster.width(),
        raster.height()
    );
    println!("Strips: {}", strips.len());
    for (i, strip) in strips.iter().enumerate() {
        println!("  strip {}: {}x{}", i, strip.width(), strip.height());
    }
    println!("Merged: {}x{}", merged.width(), merged.height());
    println!("Pixels match: {}", merged == raster);
    println!("Time: {:.2}ms", ms);
    Ok(())
}

fn unwrap_cmd(image: &Path, params: &PolarUnwrap, out: &Path) -> rust_tiler::Result<()> {
    let raster = load_raster(image)?;

    let watch = Stopwatch::start("unwrap table");
    let table = RemapTable::polar_unwrap(params, raster.width(), raster.height())?;
    watch.log_elapsed();

    let unwrapped = table.apply(&raster);
    save_raster(&unwrapped, out)?;
    println!(
        "Unwrapped ring into {} ({}x{})",
        out.display(),
        unwrapped.width(),
        unwrapped.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cuts() {
        assert_eq!(parse_cuts("100, 300,500").unwrap(), vec![100, 300, 500]);
        assert_eq!(parse_cuts("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_cuts("-4").unwrap(), vec![-4]);
        assert!(parse_cuts("10,abc").is_err());
    }
}
