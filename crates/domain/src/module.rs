//! Module-level entities: functions, structs, enums and constants.
//!
//! Every type serializes all of its fields (absent optionals become `null`)
//! so templates rendered in strict mode can probe them with `{{#if}}`.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// One header/source pair of the generated library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Module {
    /// Module name, used as the file stem of its artifacts.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Public functions, in declaration order.
    #[serde(default)]
    pub functions: Vec<Function>,
    /// Struct types, in declaration order.
    #[serde(default)]
    pub structs: Vec<Struct>,
    /// Enum types, in declaration order.
    #[serde(default)]
    pub enums: Vec<Enum>,
    /// Compile-time constants, in declaration order.
    #[serde(default)]
    pub constants: Vec<Constant>,
}

impl Module {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            functions: Vec::new(),
            structs: Vec::new(),
            enums: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Adds a function.
    #[must_use]
    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    /// Header file name for this module (`{name}.h`).
    #[must_use]
    pub fn header_file(&self) -> String {
        format!("{}.h", self.name)
    }

    /// Checks that the name is a C identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidModuleName` otherwise.
    pub fn validate(&self, index: usize) -> DomainResult<()> {
        if is_c_identifier(&self.name) {
            Ok(())
        } else {
            Err(DomainError::InvalidModuleName {
                index,
                name: self.name.clone(),
            })
        }
    }
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Function {
    /// Function name.
    pub name: String,
    /// Return type as written in C/C++.
    #[serde(default = "default_return_type")]
    pub return_type: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Parameters, in order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Function {
    /// Creates a function with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

fn default_return_type() -> String {
    "void".to_string()
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type as written in C/C++.
    #[serde(rename = "type")]
    pub ty: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Parameter {
    /// Creates a parameter without description.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: String::new(),
        }
    }
}

/// A struct type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Struct {
    /// Type name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Members, in layout order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A struct member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    /// Member name.
    pub name: String,
    /// Member type as written in C/C++.
    #[serde(rename = "type")]
    pub ty: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// An enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Enum {
    /// Type name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Enumerators, in order.
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

/// One enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumValue {
    /// Enumerator name.
    pub name: String,
    /// Explicit numeric value, if any.
    #[serde(default)]
    pub value: Option<i64>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A named compile-time constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Constant {
    /// Constant name.
    pub name: String,
    /// Type as written in C/C++.
    #[serde(rename = "type")]
    pub ty: String,
    /// Literal value.
    pub value: ConstantValue,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Literal value of a constant, kept as the document spelled it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// Anything else, emitted verbatim (e.g. `"0x10"`, `"\"text\""`).
    Text(String),
}

impl std::fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Returns true for `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
