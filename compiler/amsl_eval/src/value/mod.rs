//! Runtime values.

use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Value {
    Int(i64),
    Str(String),
    /// No value: an empty list, a print, a bare declaration.
    #[default]
    Unit,
}

impl Value {
    /// Initial value of a declaration without an initializer.
    pub fn default_for(ty: Option<&str>) -> Value {
        match ty {
            Some("int") => Value::Int(0),
            Some("str" | "string") => Value::Str(String::new()),
            _ => Value::Unit,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Unit => "unit",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }
}

/// The form `print` writes: strings raw, without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Unit => f.write_str("()"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests;
