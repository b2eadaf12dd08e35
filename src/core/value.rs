use std::fmt::{Display, Formatter};

/// Stores one comparable datum that can be assigned to an attribute.
///
/// Equality, ordering and hashing delegate to the wrapped scalar, so two
/// values are interchangeable map keys exactly when their scalars are equal.
/// Values of different kinds never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl Value {
    #[inline]
    pub fn text<S: Into<String>>(label: S) -> Self {
        Value::Text(label.into())
    }

    pub fn less_than(&self, other: &Value) -> bool {
        self < other
    }

    pub fn greater_than(&self, other: &Value) -> bool {
        self > other
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equality_delegates_to_wrapped_scalar() {
        assert_eq!(Value::from("sunny"), Value::text("sunny"));
        assert_ne!(Value::from("sunny"), Value::from("rainy"));
        assert_eq!(Value::from(3), Value::Integer(3));
    }

    #[test]
    fn test_values_of_different_kinds_are_never_equal() {
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(true), Value::from("true"));
    }

    #[test]
    fn test_ordering_helpers() {
        let low = Value::from(2);
        let high = Value::from(10);
        assert!(low.less_than(&high));
        assert!(high.greater_than(&low));
        assert!(!low.less_than(&low));
        assert!(Value::from("apple").less_than(&Value::from("banana")));
    }

    #[test]
    fn test_equal_values_share_a_map_slot() {
        let mut counts: HashMap<Value, usize> = HashMap::new();
        *counts.entry(Value::from("yes")).or_default() += 1;
        *counts.entry(Value::text(String::from("yes"))).or_default() += 1;
        *counts.entry(Value::from("no")).or_default() += 1;
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Value::from("yes")], 2);
    }

    #[test]
    fn test_display_renders_raw_scalar() {
        assert_eq!(Value::from("overcast").to_string(), "overcast");
        assert_eq!(Value::from(-4).to_string(), "-4");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(7).as_text(), None);
    }
}
