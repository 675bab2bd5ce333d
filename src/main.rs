//! Command-line driver for the vantage camera controller: replay scripts, schema and defaults export.

use std::path::{Path, PathBuf};

use vantage::options::Options;
use vantage::replay::Replay;
use vantage::VantageError;

const USAGE: &str = "vantage replay <script.toml> [options.toml] [--trace out.json]
       vantage schema <out.json>
       vantage defaults <out.toml>";

fn replay(args: &[String]) -> Result<(), VantageError> {
    let mut positional = Vec::new();
    let mut trace_path: Option<PathBuf> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--trace" {
            let path = iter.next().ok_or_else(|| {
                VantageError::Usage("--trace needs a path".into())
            })?;
            trace_path = Some(PathBuf::from(path));
        } else {
            positional.push(arg.as_str());
        }
    }

    let (script_path, options_path) = match positional.as_slice() {
        [script] => (*script, None),
        [script, options] => (*script, Some(*options)),
        _ => return Err(VantageError::Usage(USAGE.into())),
    };

    let script = Replay::load(Path::new(script_path))?;
    let options = options_path.map_or_else(
        || Ok(Options::default()),
        |path| Options::load(Path::new(path)),
    )?;
    log::info!(
        "replaying {} frames at dt = {}",
        script.frame_count(),
        script.delta_time
    );

    let trace = script.run(&options);
    if let Some(last) = trace.last() {
        log::info!(
            "final position {} offset {} target {} dragging {}",
            last.position,
            last.follow_offset,
            last.target_offset,
            last.dragging
        );
    }
    if let Some(path) = trace_path {
        trace.save_json(&path)?;
        log::info!("trace written to {}", path.display());
    }
    Ok(())
}

fn write_schema(path: &Path) -> Result<(), VantageError> {
    let content = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
    std::fs::write(path, content)?;
    log::info!("options schema written to {}", path.display());
    Ok(())
}

fn run(args: &[String]) -> Result<(), VantageError> {
    match args {
        [cmd, rest @ ..] if cmd == "replay" => replay(rest),
        [cmd, out] if cmd == "schema" => write_schema(Path::new(out)),
        [cmd, out] if cmd == "defaults" => {
            Options::default().save(Path::new(out))?;
            log::info!("default options written to {out}");
            Ok(())
        }
        _ => Err(VantageError::Usage(USAGE.into())),
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
