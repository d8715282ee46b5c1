use crate::api::OptionSpec;
use crate::parser::{ConfigError, ConsoleInterface, GeneralParser, Parser, Printer, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The table of options recognized by the command line parser.
///
/// ### Example
/// ```
/// # use optscan_builder as optscan;
/// use optscan::{OptionSpec, OptionTable, Value};
///
/// let parser = OptionTable::new("program")
///     .add(OptionSpec::named("verbose", 'v').help("Enable verbose mode"))
///     .add(OptionSpec::named("port", 'p').help("Specify port number"))
///     .build();
///
/// let parsed = parser.parse_tokens(vec!["-v", "--port=8080"].as_slice()).unwrap();
///
/// assert_eq!(parsed.get("verbose"), Some(&Value::Switch));
/// assert_eq!(parsed.get("port"), Some(&Value::from("8080")));
/// ```
#[derive(Debug, Clone)]
pub struct OptionTable {
    program: String,
    options: Vec<OptionSpec>,
}

impl OptionTable {
    /// Create an empty option table.
    /// The `program` name is displayed in the help message.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            options: Vec::default(),
        }
    }

    /// Add an option to the table.
    ///
    /// The order of options corresponds to their order in the help message.
    /// It does not affect the parser semantics.
    pub fn add(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// The options, in the order they were added.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, ConfigError> {
        let parser = Parser::new(self.options.clone())?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Built parser for '{}' with {} options.",
                self.program,
                self.options.len()
            );
        }

        let printer = Printer::new(self.program, self.options);
        Ok(GeneralParser::new(parser, printer, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option key or short alias).
    ///
    /// ### Example
    /// ```
    /// # use optscan_builder as optscan;
    /// use optscan::{ConfigError, OptionSpec, OptionTable};
    ///
    /// let result = OptionTable::new("program")
    ///     .add(OptionSpec::named("verbose", 'v'))
    ///     .add(OptionSpec::named("version", 'v'))
    ///     .build_parser();
    ///
    /// assert_eq!(result.unwrap_err(), ConfigError::DuplicateShort('v'));
    /// ```
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option key or short alias).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
