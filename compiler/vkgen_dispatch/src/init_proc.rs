//! `INIT_PROC` statement rendering.
//!
//! The loader's hand-written code defines two macros and consumes these
//! statements verbatim:
//!
//! ```text
//! INIT_PROC(required, receiver, Name);
//! INIT_PROC_EXT(EXTENSION, required, receiver, Name);
//! ```
//!
//! Field order and spelling are fixed.

use std::fmt;

use crate::Classifier;

/// Prefix stripped from function names.
const COMMAND_PREFIX: &str = "vk";

/// Prefix stripped from extension names.
const EXTENSION_PREFIX: &str = "VK_";

/// Dispatch-table variable the statement resolves through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Receiver {
    Instance,
    Device,
}

impl Receiver {
    pub fn as_str(self) -> &'static str {
        match self {
            Receiver::Instance => "instance",
            Receiver::Device => "dev",
        }
    }
}

/// One initialization statement for a dispatch-table entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitProc<'a> {
    /// Owning extension with its `VK_` prefix removed.
    pub extension: Option<&'a str>,
    pub required: bool,
    pub receiver: Receiver,
    /// Function name with its `vk` prefix removed.
    pub proc_name: &'a str,
}

impl<'a> InitProc<'a> {
    /// Build the statement for `name`.
    ///
    /// Returns `None` unless `name` is an instance or device dispatch entry.
    pub fn new(classifier: &Classifier<'a>, name: &str) -> Option<Self> {
        let instance = classifier.is_instance_dispatch_entry(name);
        if !instance && !classifier.is_device_dispatch_entry(name) {
            return None;
        }
        let function = classifier.function(name)?;
        let receiver = if instance {
            Receiver::Instance
        } else {
            Receiver::Device
        };

        Some(Self {
            extension: function
                .extension
                .as_deref()
                .map(|extension| strip(extension, EXTENSION_PREFIX)),
            required: classifier.is_required(name),
            receiver,
            proc_name: strip(&function.name, COMMAND_PREFIX),
        })
    }
}

impl fmt::Display for InitProc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.extension {
            Some(extension) => write!(f, "INIT_PROC_EXT({extension}, ")?,
            None => f.write_str("INIT_PROC(")?,
        }
        write!(
            f,
            "{}, {}, {});",
            self.required,
            self.receiver.as_str(),
            self.proc_name
        )
    }
}

fn strip<'s>(name: &'s str, prefix: &str) -> &'s str {
    name.strip_prefix(prefix).unwrap_or(name)
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
