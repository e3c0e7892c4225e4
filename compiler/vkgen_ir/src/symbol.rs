//! Function, parameter and extension symbols.

use std::fmt;

use crate::INTERNAL_EXTENSION;

/// One parameter of a function prototype.
///
/// Order inside [`FunctionSymbol::params`] is significant: the first
/// parameter's type decides which dispatch table the function lives in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterDescriptor {
    /// Full type text, qualifiers included (e.g. `const VkInstanceCreateInfo*`).
    pub ty: String,

    /// Parameter name.
    pub name: String,

    /// Text trailing the name, such as an array length (`[4]`).
    pub qualifier: Option<String>,
}

impl ParameterDescriptor {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            qualifier: None,
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(qualifier) = &self.qualifier {
            f.write_str(qualifier)?;
        }
        Ok(())
    }
}

/// Borrowed view of a function's return type and parameter list.
///
/// Two signatures are equal when both the return type and every parameter
/// (type, name, qualifier) match in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature<'a> {
    pub return_type: &'a str,
    pub params: &'a [ParameterDescriptor],
}

/// A function declared in the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSymbol {
    /// Function name, including the `vk` prefix.
    pub name: String,

    /// Return type text.
    pub return_type: String,

    /// Parameters in prototype order.
    pub params: Vec<ParameterDescriptor>,

    /// Target function when this symbol was declared as an alias.
    ///
    /// The signature was copied from the target when the alias was declared.
    pub alias_of: Option<String>,

    /// Extension that first claimed this function.
    ///
    /// Tracked per name: an alias does not inherit its target's extension.
    pub extension: Option<String>,

    /// Latest core version tag that includes this function.
    pub core_version: Option<String>,
}

impl FunctionSymbol {
    /// Create a function from its own prototype.
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        params: Vec<ParameterDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params,
            alias_of: None,
            extension: None,
            core_version: None,
        }
    }

    /// Create an alias carrying a copy of `target`'s signature.
    ///
    /// Extension and core version are left unset; they belong to the alias
    /// name, not to the target.
    pub fn alias(name: impl Into<String>, target: &FunctionSymbol) -> Self {
        Self {
            name: name.into(),
            return_type: target.return_type.clone(),
            params: target.params.clone(),
            alias_of: Some(target.name.clone()),
            extension: None,
            core_version: None,
        }
    }

    pub fn signature(&self) -> Signature<'_> {
        Signature {
            return_type: &self.return_type,
            params: &self.params,
        }
    }

    /// Type of the first parameter, if the function takes any.
    pub fn first_param_type(&self) -> Option<&str> {
        self.params.first().map(|param| param.ty.as_str())
    }

    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

/// An extension declared in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtensionSymbol {
    pub name: String,

    /// Set only for [`INTERNAL_EXTENSION`].
    pub internal: bool,
}

impl ExtensionSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let internal = name == INTERNAL_EXTENSION;
        Self { name, internal }
    }
}
