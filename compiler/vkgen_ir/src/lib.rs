//! Resolved symbol table for the Vulkan registry dispatch compiler.
//!
//! This crate holds the data model shared by the registry parser and the
//! dispatch classifier. It has no knowledge of XML or of dispatch policy.
//!
//! # Pipeline Position
//!
//! ```text
//! vk.xml → vkgen_registry → **SymbolTable** → vkgen_dispatch → INIT_PROC statements
//! ```
//!
//! # Lifecycle
//!
//! A [`SymbolTableBuilder`] is mutated by the parser while it walks the
//! registry, then frozen with [`SymbolTableBuilder::finish`]. The resulting
//! [`SymbolTable`] is immutable and is the only thing downstream crates see.

mod symbol;
mod table;

pub use symbol::{ExtensionSymbol, FunctionSymbol, ParameterDescriptor, Signature};
pub use table::{SymbolTable, SymbolTableBuilder};

/// Extension reserved for the loader itself.
///
/// Functions it owns are implemented by the platform driver interface rather
/// than by applications, so it is flagged as internal.
pub const INTERNAL_EXTENSION: &str = "VK_ANDROID_native_buffer";
