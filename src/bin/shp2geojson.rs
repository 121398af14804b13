//! Converts polygon shapefiles to GeoJSON.
//!
//! Usage:
//!     cargo run --bin shp2geojson -- [--pretty] [--strict] <file.shp>
//!     cargo run --bin shp2geojson -- [--pretty] [--strict] <dir_or_file>...
//!
//! A single input file is written to stdout. With several inputs (or a
//! directory) every `.shp` is converted in parallel and written next to the
//! source as `<name>.geojson`.

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use shpjson::{ShpReader, ShpReaderConfiguration};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

struct Options {
    pretty: bool,
    config: ShpReaderConfiguration,
    inputs: Vec<PathBuf>,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        pretty: false,
        config: ShpReaderConfiguration::default(),
        inputs: Vec::new(),
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--pretty" => options.pretty = true,
            "--strict" => options.config.failsafe = false,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => options.inputs.push(PathBuf::from(path)),
        }
    }

    if options.inputs.is_empty() {
        bail!("Usage: shp2geojson [--pretty] [--strict] <path_to_shp_or_directory>...");
    }
    Ok(options)
}

fn collect_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in inputs {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in fs::read_dir(path).with_context(|| format!("reading {}", path.display()))? {
                let p = entry?.path();
                if p.extension().map(|e| e.eq_ignore_ascii_case("shp")).unwrap_or(false) {
                    found.push(p);
                }
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn convert(path: &Path, options: &Options) -> Result<String> {
    let shp = ShpReader::from_file(path)
        .with_context(|| format!("opening {}", path.display()))?
        .with_config(options.config.clone())
        .read()
        .with_context(|| format!("decoding {}", path.display()))?;

    for notification in &shp.notifications {
        log::warn!("{}: {}", path.display(), notification);
    }

    let output = shp
        .to_geojson()
        .with_context(|| format!("converting {}", path.display()))?;
    let json = if options.pretty {
        output.to_json_string_pretty()?
    } else {
        output.to_json_string()?
    };
    Ok(json)
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args()?;
    let single = options.inputs.len() == 1 && !options.inputs[0].is_dir();
    let files = collect_files(&options.inputs)?;

    if single {
        println!("{}", convert(&files[0], &options)?);
        return Ok(());
    }

    let results: Vec<(PathBuf, Result<PathBuf>)> = files
        .par_iter()
        .map(|path| {
            let result = convert(path, &options).and_then(|json| {
                let target = path.with_extension("geojson");
                fs::write(&target, json)
                    .with_context(|| format!("writing {}", target.display()))?;
                Ok(target)
            });
            (path.clone(), result)
        })
        .collect();

    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(target) => eprintln!("{} -> {}", path.display(), target.display()),
            Err(err) => {
                failed += 1;
                eprintln!("{}: {:#}", path.display(), err);
            }
        }
    }

    eprintln!(
        "Results: {} succeeded, {} failed out of {} total",
        results.len() - failed,
        failed,
        results.len()
    );
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
