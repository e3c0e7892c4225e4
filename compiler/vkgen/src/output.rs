//! Result of one compilation.

use vkgen_dispatch::{emit_init_procs, ConfigWarning, Emitter};
use vkgen_ir::SymbolTable;

/// Everything a run produced.
///
/// Statements are already rendered; each list is in registry declaration
/// order.
#[derive(Clone, Debug)]
pub struct CompileOutput {
    /// The resolved table, for callers that need more than the statements.
    pub table: SymbolTable,
    /// `INIT_PROC` statements for the instance dispatch table.
    pub instance_procs: Vec<String>,
    /// `INIT_PROC` statements for the device dispatch table.
    pub device_procs: Vec<String>,
    /// Configuration entries that did not resolve against `table`.
    pub warnings: Vec<ConfigWarning>,
}

impl CompileOutput {
    /// Write both statement blocks, instance first.
    pub fn write_to<E: Emitter + ?Sized>(&self, emitter: &mut E) {
        write_block(emitter, "instance", &self.instance_procs);
        emitter.emit_newline();
        write_block(emitter, "device", &self.device_procs);
    }
}

fn write_block<E: Emitter + ?Sized>(emitter: &mut E, table: &str, procs: &[String]) {
    emitter.emit(&format!("// {table} dispatch table"));
    emitter.emit_newline();
    emit_init_procs(emitter, procs);
}
