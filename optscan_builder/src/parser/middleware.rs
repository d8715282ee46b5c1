use std::env;

use crate::api::ParsedArgs;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

/// The configured command line parser.
/// Built via `OptionTable::build` or `OptionTable::build_parser`.
pub struct GeneralParser {
    parser: Parser,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for GeneralParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("parser", &self.parser)
            .finish()
    }
}

impl GeneralParser {
    pub(crate) fn new(
        parser: Parser,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    /// Scan the input tokens without printing anything or exiting.
    ///
    /// This is the entry point for embedding the parser in a library:
    /// the caller decides what to do with a help request or a [`ParseError`].
    ///
    /// ### Example
    /// ```
    /// # use optscan_builder as optscan;
    /// use optscan::{Action, OptionSpec, OptionTable, ParseError};
    ///
    /// let parser = OptionTable::new("program")
    ///     .add(OptionSpec::named("verbose", 'v'))
    ///     .build();
    ///
    /// assert_eq!(parser.try_parse(vec!["--help"].as_slice()), Ok(Action::PrintHelp));
    /// assert_eq!(
    ///     parser.try_parse(vec!["-x"].as_slice()),
    ///     Err(ParseError::UnknownShortOption("-x".to_string())),
    /// );
    /// ```
    pub fn try_parse(&self, tokens: &[&str]) -> Result<Action, ParseError> {
        self.parser.consume(tokens)
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If the parser encounters a malformed token (ex: an unknown option, or a bare argument), it prints the diagnostic and returns with `Err(1)`.
    ///
    /// If the help sentinel (`--help`) is encountered, the parser prints the help message and returns with `Err(0)`.
    ///
    /// ### Example
    /// ```
    /// # use optscan_builder as optscan;
    /// use optscan::{OptionSpec, OptionTable};
    ///
    /// let parser = OptionTable::new("program")
    ///     .add(OptionSpec::named("output", 'o'))
    ///     .build();
    ///
    /// let parsed = parser.parse_tokens(vec!["-o", "out.txt"].as_slice()).unwrap();
    /// assert_eq!(parsed.get_text("output"), Some("out.txt"));
    ///
    /// assert_eq!(parser.parse_tokens(vec!["out.txt"].as_slice()), Err(1));
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<ParsedArgs, i32> {
        match self.parser.consume(tokens) {
            Ok(Action::Complete(parsed)) => Ok(parsed),
            Ok(Action::PrintHelp) => {
                self.printer.print_help(&*self.user_interface);
                Err(0)
            }
            Err(parse_error) => {
                self.user_interface.print_error(parse_error);
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`] (excluding the program path).
    ///
    /// If the parser encounters a malformed token, it prints the diagnostic and exits with error code `1` (via `std::process::exit`).
    ///
    /// If the help sentinel (`--help`) is encountered, the parser prints the help message and exits with error code `0`.
    pub fn parse(&self) -> ParsedArgs {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(parsed) => parsed,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
