/// Whether an option takes a value from the command line.
///
/// `Inferred` reproduces the classic heuristic: the following token is taken as the value
/// unless it looks like another flag (starts with `-`).
/// The explicit variants remove the heuristic for options that need it, such as those accepting negative numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Take the following token as the value, unless it starts with `-`.
    #[default]
    Inferred,
    /// Never take a value.
    Switch,
    /// Always take the following token as the value, whatever it looks like.
    Value,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The value captured for an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The option was present without an argument (a boolean `true`).
    Switch,
    /// The option was present with an argument.
    Text(String),
}

impl Value {
    /// Whether this is a [`Value::Switch`].
    pub fn is_switch(&self) -> bool {
        matches!(self, Value::Switch)
    }

    /// The argument text, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Switch => None,
            Value::Text(text) => Some(text.as_str()),
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

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Switch => write!(f, "true"),
            Value::Text(text) => write!(f, "{text:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn arity_default() {
        assert_eq!(Arity::default(), Arity::Inferred);
    }

    #[rstest]
    #[case(Value::Switch, "true")]
    #[case(Value::from("out.txt"), "\"out.txt\"")]
    #[case(Value::from(""), "\"\"")]
    fn value_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn value_accessors() {
        assert!(Value::Switch.is_switch());
        assert_eq!(Value::Switch.as_text(), None);
        assert!(!Value::from("8080").is_switch());
        assert_eq!(Value::from("8080".to_string()).as_text(), Some("8080"));
    }
}
