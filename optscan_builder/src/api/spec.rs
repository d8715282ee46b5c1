use crate::model::Arity;

/// A recognized option of the command line parser.
/// Added to a parser via [`OptionTable::add`](./struct.OptionTable.html#method.add).
///
/// Each option has three names:
/// * `key`: the canonical name, matched by `--key` and `--key=value`.
/// * `short`: the single character alias, matched by `-s`.
/// * `long`: the name displayed in the help message.
///
/// The parsed value is stored under the `key` when matched via either long form, and under the `long` name when matched via the short alias.
/// These coincide whenever `key == long`, which is the typical setup.
///
/// ### Example
/// ```
/// # use optscan_builder as optscan;
/// use optscan::{Arity, OptionSpec};
///
/// OptionSpec::new("port", 'p', "port")
///     .help("Specify port number")
///     .arity(Arity::Value);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    key: String,
    short: char,
    long: String,
    help: String,
    arity: Arity,
}

impl OptionSpec {
    /// Create an option.
    pub fn new(key: impl Into<String>, short: char, long: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            short,
            long: long.into(),
            help: String::default(),
            arity: Arity::default(),
        }
    }

    /// Create an option whose `key` and `long` name are the same.
    ///
    /// ### Example
    /// ```
    /// # use optscan_builder as optscan;
    /// use optscan::OptionSpec;
    ///
    /// assert_eq!(
    ///     OptionSpec::named("verbose", 'v'),
    ///     OptionSpec::new("verbose", 'v', "verbose"),
    /// );
    /// ```
    pub fn named(name: impl Into<String>, short: char) -> Self {
        let name = name.into();
        Self::new(name.clone(), short, name)
    }

    /// Document the help message for this option.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help = description.into();
        self
    }

    /// Declare whether this option takes a value.
    /// Defaults to [`Arity::Inferred`].
    ///
    /// ### Example
    /// ```
    /// # use optscan_builder as optscan;
    /// use optscan::{Arity, OptionSpec, OptionTable, Value};
    ///
    /// let parser = OptionTable::new("program")
    ///     .add(OptionSpec::named("offset", 'o').arity(Arity::Value))
    ///     .build();
    ///
    /// let parsed = parser.parse_tokens(vec!["-o", "-5"].as_slice()).unwrap();
    /// assert_eq!(parsed.get("offset"), Some(&Value::from("-5")));
    /// ```
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// The canonical name of this option.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The single character alias of this option.
    pub fn short(&self) -> char {
        self.short
    }

    /// The display name of this option.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The help message of this option (empty if undocumented).
    pub fn description(&self) -> &str {
        &self.help
    }

    /// Whether this option takes a value.
    pub fn value_arity(&self) -> Arity {
        self.arity
    }
}
