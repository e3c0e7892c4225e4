//! Dispatch classification for the Vulkan loader.
//!
//! Given a resolved [`SymbolTable`](vkgen_ir::SymbolTable) and a
//! [`DispatchConfig`], decides for every function:
//!
//! - whether it is supported at all (its extension is not blacklisted),
//! - which dispatch table it belongs to (global, instance or device),
//! - whether it is exported by the loader,
//! - whether failing to resolve it at load time is fatal.
//!
//! and renders one `INIT_PROC` statement per dispatch-table entry.
//!
//! Everything here is a pure function of the table and the configuration;
//! nothing mutates the table.
//!
//! ```text
//! SymbolTable + DispatchConfig → Classifier → InitProc → Emitter
//! ```

mod classify;
mod config;
mod emitter;
mod init_proc;

pub use classify::{
    Classifier, DispatchKind, HandleType, LEGACY_INSTANCE_EXCLUSION, OPTIONAL_CORE_VERSION,
};
pub use config::{ConfigList, ConfigWarning, DispatchConfig};
pub use emitter::{emit_init_procs, Emitter, FileEmitter, StringEmitter};
pub use init_proc::{InitProc, Receiver};

#[cfg(test)]
mod test_fixtures;
