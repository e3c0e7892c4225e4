//! Symbol table and its builder.
//!
//! # Design
//!
//! - Functions live in a `Vec` in declaration order; an `FxHashMap` maps
//!   names to positions for O(1) lookup.
//! - Extensions use the same layout.
//! - Only [`SymbolTableBuilder`] can mutate entries. Once frozen, the table is
//!   plain immutable data and can be shared freely.

use rustc_hash::FxHashMap;

use crate::{ExtensionSymbol, FunctionSymbol, Signature};

/// Resolved, immutable view of one registry.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    functions: Vec<FunctionSymbol>,
    functions_by_name: FxHashMap<String, usize>,
    extensions: Vec<ExtensionSymbol>,
    extensions_by_name: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn function(&self, name: &str) -> Option<&FunctionSymbol> {
        self.functions_by_name
            .get(name)
            .map(|&index| &self.functions[index])
    }

    pub fn extension(&self, name: &str) -> Option<&ExtensionSymbol> {
        self.extensions_by_name
            .get(name)
            .map(|&index| &self.extensions[index])
    }

    pub fn contains_function(&self, name: &str) -> bool {
        self.functions_by_name.contains_key(name)
    }

    pub fn contains_extension(&self, name: &str) -> bool {
        self.extensions_by_name.contains_key(name)
    }

    pub fn signature(&self, name: &str) -> Option<Signature<'_>> {
        self.function(name).map(FunctionSymbol::signature)
    }

    /// Functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionSymbol> {
        self.functions.iter()
    }

    /// Function names in declaration order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|function| function.name.as_str())
    }

    /// Extensions in declaration order.
    pub fn extensions(&self) -> impl Iterator<Item = &ExtensionSymbol> {
        self.extensions.iter()
    }

    /// Number of declared functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Mutable staging area used while a registry is being parsed.
///
/// Each method encodes one of the parser's write rules, so the guard
/// semantics live next to the data rather than in the XML walker.
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    table: SymbolTable,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a function declared so far.
    pub fn function(&self, name: &str) -> Option<&FunctionSymbol> {
        self.table.function(name)
    }

    pub fn contains_function(&self, name: &str) -> bool {
        self.table.contains_function(name)
    }

    /// Declare a function.
    ///
    /// Returns `false` and leaves the table untouched when the name is
    /// already taken.
    pub fn declare_function(&mut self, symbol: FunctionSymbol) -> bool {
        if self.table.functions_by_name.contains_key(&symbol.name) {
            return false;
        }
        let index = self.table.functions.len();
        self.table
            .functions_by_name
            .insert(symbol.name.clone(), index);
        self.table.functions.push(symbol);
        true
    }

    /// Declare an extension. Returns `false` for a repeated name.
    pub fn declare_extension(&mut self, symbol: ExtensionSymbol) -> bool {
        if self.table.extensions_by_name.contains_key(&symbol.name) {
            return false;
        }
        let index = self.table.extensions.len();
        self.table
            .extensions_by_name
            .insert(symbol.name.clone(), index);
        self.table.extensions.push(symbol);
        true
    }

    /// Associate `function` with `extension` unless it already has an owner.
    ///
    /// Returns `true` only when this call set the owner. Unknown functions
    /// are never claimed.
    pub fn claim_extension(&mut self, function: &str, extension: &str) -> bool {
        match self.function_mut(function) {
            Some(symbol) if symbol.extension.is_none() => {
                symbol.extension = Some(extension.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Overwrite the core version of `function`.
    ///
    /// Returns `false` if the function was never declared.
    pub fn set_core_version(&mut self, function: &str, version: &str) -> bool {
        match self.function_mut(function) {
            Some(symbol) => {
                symbol.core_version = Some(version.to_owned());
                true
            }
            None => false,
        }
    }

    /// Freeze the builder into an immutable table.
    pub fn finish(self) -> SymbolTable {
        self.table
    }

    fn function_mut(&mut self, name: &str) -> Option<&mut FunctionSymbol> {
        let index = *self.table.functions_by_name.get(name)?;
        self.table.functions.get_mut(index)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
