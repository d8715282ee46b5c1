use crate::constant::LONG_PREFIX;
use crate::model::Value;

/// The result of a successful parse: a key-value store over the matched options.
///
/// Entries keep the order in which their keys were first matched.
/// Matching the same key again replaces its value in place.
/// Equality does not depend on entry order.
#[derive(Debug, Clone, Default)]
pub struct ParsedArgs {
    entries: Vec<(String, Value)>,
}

impl ParsedArgs {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();

        match self.entries.iter_mut().find(|(k, _)| k == &key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get the value matched for the key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Check if there exists a value for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Check if the key was matched as a switch (without an argument).
    pub fn is_switch(&self, key: &str) -> bool {
        self.get(key).map(Value::is_switch).unwrap_or(false)
    }

    /// Get the argument text matched for the key.
    /// Returns `None` when the key was not matched, or was matched as a switch.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// The number of matched keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys were matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the matched keys and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Re-encode as command line tokens.
    /// A switch becomes `--key`, and a text value becomes `--key value`.
    ///
    /// Parsing these tokens against the same table yields an equal `ParsedArgs`, provided each key is also its option's long name and no text value starts with `-`.
    ///
    /// ### Example
    /// ```
    /// # use optscan_builder as optscan;
    /// use optscan::{OptionSpec, OptionTable};
    ///
    /// let parser = OptionTable::new("program")
    ///     .add(OptionSpec::named("verbose", 'v'))
    ///     .add(OptionSpec::named("output", 'o'))
    ///     .build();
    ///
    /// let parsed = parser.parse_tokens(vec!["-v", "-o", "out.txt"].as_slice()).unwrap();
    /// assert_eq!(parsed.to_tokens(), vec!["--verbose", "--output", "out.txt"]);
    /// ```
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::default();

        for (key, value) in &self.entries {
            tokens.push(format!("{LONG_PREFIX}{key}"));

            if let Value::Text(text) = value {
                tokens.push(text.clone());
            }
        }

        tokens
    }
}

impl PartialEq for ParsedArgs {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for ParsedArgs {}

impl FromIterator<(String, Value)> for ParsedArgs {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut out = Self::default();

        for (key, value) in iter {
            out.insert(key, value);
        }

        out
    }
}

impl IntoIterator for ParsedArgs {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl std::fmt::Display for ParsedArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;

        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{key:?}: {value}")?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(entries: Vec<(&str, Value)>) -> ParsedArgs {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn parsed_args_empty() {
        let args = ParsedArgs::default();

        assert!(args.is_empty());
        assert_eq!(args.len(), 0);
        assert_eq!(args.get("verbose"), None);
        assert!(!args.contains("verbose"));
        assert!(!args.is_switch("verbose"));
        assert_eq!(args.get_text("verbose"), None);
        assert_eq!(args.to_string(), "{}");
    }

    #[test]
    fn parsed_args_last_wins() {
        // Setup
        let mut args = ParsedArgs::default();

        // Execute
        args.insert("output", Value::from("a.txt"));
        args.insert("verbose", Value::Switch);
        args.insert("output", Value::from("b.txt"));

        // Verify
        assert_eq!(args.len(), 2);
        assert_eq!(args.get_text("output"), Some("b.txt"));
        assert_eq!(
            args.iter().map(|(k, _)| k).collect::<Vec<&str>>(),
            vec!["output", "verbose"]
        );
    }

    #[test]
    fn parsed_args_accessors() {
        // Setup
        let args = parsed(vec![("verbose", Value::Switch), ("port", Value::from("8080"))]);

        // Verify
        assert!(args.is_switch("verbose"));
        assert!(!args.is_switch("port"));
        assert_eq!(args.get_text("verbose"), None);
        assert_eq!(args.get_text("port"), Some("8080"));
        assert!(args.contains("port"));
    }

    #[test]
    fn parsed_args_eq_ignores_order() {
        let a = parsed(vec![("verbose", Value::Switch), ("port", Value::from("8080"))]);
        let b = parsed(vec![("port", Value::from("8080")), ("verbose", Value::Switch)]);
        let c = parsed(vec![("port", Value::from("8081")), ("verbose", Value::Switch)]);
        let d = parsed(vec![("port", Value::from("8080"))]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(d, a);
    }

    #[test]
    fn parsed_args_to_tokens() {
        let args = parsed(vec![
            ("verbose", Value::Switch),
            ("output", Value::from("out.txt")),
        ]);

        assert_eq!(args.to_tokens(), vec!["--verbose", "--output", "out.txt"]);
    }

    #[test]
    fn parsed_args_display() {
        let args = parsed(vec![
            ("verbose", Value::Switch),
            ("output", Value::from("out.txt")),
        ]);

        assert_eq!(args.to_string(), "{\"verbose\": true, \"output\": \"out.txt\"}");
    }

    #[test]
    fn parsed_args_into_iter() {
        let args = parsed(vec![("verbose", Value::Switch)]);

        assert_eq!(
            args.into_iter().collect::<Vec<(String, Value)>>(),
            vec![("verbose".to_string(), Value::Switch)]
        );
    }
}
