//! Compilation pipeline: parse → validate configuration → classify → render.

use std::fs;
use std::path::Path;

use vkgen_dispatch::{Classifier, DispatchConfig, InitProc};
use vkgen_registry::{ParseOptions, SchemaError};

use crate::{CompileOutput, DriverError};

/// Configuration for a compilation run.
#[derive(Clone, Debug, Default)]
pub struct CompileConfig {
    pub parse: ParseOptions,
    pub dispatch: DispatchConfig,
}

/// Compile registry text. IO-free.
///
/// Unresolved configuration entries are logged as warnings and returned in
/// [`CompileOutput::warnings`]; they never fail the run.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile(source: &str, config: &CompileConfig) -> Result<CompileOutput, SchemaError> {
    let table = vkgen_registry::parse_registry(source, &config.parse)?;

    let warnings = config.dispatch.validate(&table);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let (instance_procs, device_procs) = {
        let classifier = Classifier::new(&table, &config.dispatch);
        let render = |name: &str| InitProc::new(&classifier, name).map(|init| init.to_string());
        (
            classifier.instance_entries().filter_map(render).collect::<Vec<_>>(),
            classifier.device_entries().filter_map(render).collect::<Vec<_>>(),
        )
    };
    tracing::debug!(
        instance = instance_procs.len(),
        device = device_procs.len(),
        "dispatch entries rendered"
    );

    Ok(CompileOutput {
        table,
        instance_procs,
        device_procs,
        warnings,
    })
}

/// Read and compile a registry file.
pub fn compile_file(path: &Path, config: &CompileConfig) -> Result<CompileOutput, DriverError> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(compile(&source, config)?)
}

/// Load a JSON configuration file. Keys it omits keep their defaults.
pub fn load_dispatch_config(path: &Path) -> Result<DispatchConfig, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    DispatchConfig::from_json(&text).map_err(|source| DriverError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
