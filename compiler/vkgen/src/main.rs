//! vkgen CLI
//!
//! Reads `vk.xml` and prints (or writes) the loader's `INIT_PROC` statements.

use std::path::{Path, PathBuf};

use vkgen::{compile_file, init_tracing, load_dispatch_config, CompileConfig, DriverError};
use vkgen_dispatch::{FileEmitter, StringEmitter};
use vkgen_registry::ParseOptions;

struct Options {
    registry: PathBuf,
    config: Option<PathBuf>,
    api: Option<String>,
    output: Option<PathBuf>,
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(options) = parse_args(args.get(1..).unwrap_or(&[])) else {
        print_usage();
        std::process::exit(1);
    };

    if let Err(err) = run(&options) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut registry = None;
    let mut config = None;
    let mut api = None;
    let mut output = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" && i + 1 < args.len() {
            output = Some(PathBuf::from(&args[i + 1]));
            i += 2;
            continue;
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            config = Some(PathBuf::from(path));
        } else if let Some(name) = arg.strip_prefix("--api=") {
            api = Some(name.to_string());
        } else if arg == "-h" || arg == "--help" {
            return None;
        } else if !arg.starts_with('-') && registry.is_none() {
            registry = Some(PathBuf::from(arg));
        } else {
            eprintln!("error: unexpected argument '{arg}'");
            return None;
        }
        i += 1;
    }

    Some(Options {
        registry: registry?,
        config,
        api,
        output,
    })
}

fn run(options: &Options) -> Result<(), DriverError> {
    let mut config = CompileConfig::default();
    if let Some(path) = &options.config {
        config.dispatch = load_dispatch_config(path)?;
    }
    if let Some(api) = &options.api {
        config.parse = ParseOptions::with_api(api.clone());
    }

    let output = compile_file(&options.registry, &config)?;

    match &options.output {
        Some(path) => write_file(path, &output),
        None => {
            let mut emitter = StringEmitter::new();
            output.write_to(&mut emitter);
            print!("{}", emitter.output());
            Ok(())
        }
    }
}

fn write_file(path: &Path, output: &vkgen::CompileOutput) -> Result<(), DriverError> {
    let to_error = |source| DriverError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut emitter = FileEmitter::new(path).map_err(to_error)?;
    output.write_to(&mut emitter);
    emitter.finish().map_err(to_error)?;
    eprintln!(
        "Wrote {} instance and {} device entries -> {}",
        output.instance_procs.len(),
        output.device_procs.len(),
        path.display()
    );
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: vkgen <vk.xml> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config=<file.json>  Override the blacklist/export/optional lists");
    eprintln!("  --api=<name>          Registry API variant (default: vulkan)");
    eprintln!("  -o <path>             Write statements to a file instead of stdout");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for pass-level tracing.");
}
