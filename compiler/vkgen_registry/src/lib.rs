//! Vulkan registry parser.
//!
//! Turns the text of a `vk.xml` registry into a resolved
//! [`SymbolTable`](vkgen_ir::SymbolTable). IO-free: the caller reads the file.
//!
//! # Passes
//!
//! The document is walked three times, strictly in this order. Each pass
//! commits all of its writes before the next one starts.
//!
//! 1. **Commands**: declares every function. Aliases copy their target's
//!    signature at this point, so the target must already be declared.
//! 2. **Extensions**: first extension listing a command owns it. Later
//!    claims are ignored. Once a `<require>` block names a core `feature`,
//!    that version applies to it and to the extension's later blocks, and is
//!    recorded under the same first-wins guard.
//! 3. **Features**: every core version listing a command overwrites its
//!    version unconditionally, so the last (highest) version wins.
//!
//! Any malformed entry aborts the whole parse with a [`SchemaError`]; no
//! partially built table is ever returned.

mod error;
mod options;
mod parser;

pub use error::SchemaError;
pub use options::{ParseOptions, DEFAULT_API};
pub use parser::parse_registry;
