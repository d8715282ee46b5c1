use std::collections::HashMap;
use thiserror::Error;

use crate::api::{OptionSpec, ParsedArgs};
use crate::constant::*;
use crate::model::{Arity, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid option table, detected when building the parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Two options share the same key.
    #[error("Config error: Cannot duplicate the option '{0}'.")]
    DuplicateKey(String),
    /// Two options share the same short alias.
    #[error("Config error: Cannot duplicate the short option '-{0}'.")]
    DuplicateShort(char),
    /// An option key or long name is empty.
    #[error("Config error: Option names cannot be empty.")]
    EmptyName,
    /// An option key or long name cannot be written as `--name` on the command line.
    #[error("Config error: Invalid option name '{0}'.")]
    InvalidName(String),
    /// A short alias cannot be written as `-s` on the command line.
    #[error("Config error: Invalid short option '{0}'.")]
    InvalidShort(char),
}

/// A malformed command line.
///
/// The display of each variant is the diagnostic printed to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// `--name` where `name` is not a key in the table.
    #[error("Unknown option: {0}")]
    UnknownLongOption(String),
    /// `--name=value` where `name` is not a key in the table.
    #[error("Unknown option: {0}")]
    UnknownLongOptionWithValue(String),
    /// `-x` where no option has the short alias `x`.
    #[error("Unknown option: {0}")]
    UnknownShortOption(String),
    /// A token that is not an option.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An [`Arity::Value`] option at the end of the command line.
    #[error("Missing value for option: {0}")]
    MissingValue(String),
    /// `--name=value` where `name` is an [`Arity::Switch`] option.
    #[error("Unexpected value for option: {0}")]
    UnexpectedValue(String),
}

/// The outcome of scanning a command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Every token was matched.
    Complete(ParsedArgs),
    /// The help sentinel `--help` was encountered.
    PrintHelp,
}

/// Options indexed by both key and short alias.
#[derive(Debug)]
pub(crate) struct OptionIndex {
    specs: Vec<OptionSpec>,
    keys: HashMap<String, usize>,
    shorts: HashMap<char, usize>,
}

impl OptionIndex {
    pub(crate) fn new(specs: Vec<OptionSpec>) -> Result<Self, ConfigError> {
        let mut keys = HashMap::default();
        let mut shorts = HashMap::default();

        for (i, spec) in specs.iter().enumerate() {
            validate_name(spec.key())?;
            validate_name(spec.long())?;

            if spec.short().is_whitespace() || spec.short() == SHORT_PREFIX {
                return Err(ConfigError::InvalidShort(spec.short()));
            }

            if keys.insert(spec.key().to_string(), i).is_some() {
                return Err(ConfigError::DuplicateKey(spec.key().to_string()));
            }

            if shorts.insert(spec.short(), i).is_some() {
                return Err(ConfigError::DuplicateShort(spec.short()));
            }
        }

        Ok(Self {
            specs,
            keys,
            shorts,
        })
    }

    pub(crate) fn by_key(&self, key: &str) -> Option<&OptionSpec> {
        self.keys.get(key).map(|i| &self.specs[*i])
    }

    pub(crate) fn by_short(&self, short: char) -> Option<&OptionSpec> {
        self.shorts.get(&short).map(|i| &self.specs[*i])
    }
}

fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }

    if name.starts_with(SHORT_PREFIX)
        || name.contains(INLINE_SEPARATOR)
        || name.chars().any(char::is_whitespace)
    {
        return Err(ConfigError::InvalidName(name.to_string()));
    }

    Ok(())
}

enum Step {
    Advance(usize),
    Help,
}

pub(crate) struct Parser {
    index: OptionIndex,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl Parser {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default()).unwrap()
    }

    pub(crate) fn new(specs: Vec<OptionSpec>) -> Result<Self, ConfigError> {
        Ok(Self {
            index: OptionIndex::new(specs)?,
        })
    }

    /// Scan the tokens left to right, matching each against the option table.
    ///
    /// Stops at the first malformed token, or at the help sentinel, whichever comes first.
    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<Action, ParseError> {
        let mut parsed = ParsedArgs::default();
        let mut cursor = 0;

        while cursor < tokens.len() {
            match self.step(tokens, cursor, &mut parsed) {
                Ok(Step::Advance(n)) => cursor += n,
                Ok(Step::Help) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Help sentinel at token {cursor}.");
                    }

                    return Ok(Action::PrintHelp);
                }
                Err(error) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token {cursor} failed: {error}");
                    }

                    return Err(error);
                }
            }
        }

        Ok(Action::Complete(parsed))
    }

    fn step(
        &self,
        tokens: &[&str],
        cursor: usize,
        parsed: &mut ParsedArgs,
    ) -> Result<Step, ParseError> {
        let token = tokens[cursor];
        let following = tokens.get(cursor + 1).copied();

        if token == HELP_SENTINEL {
            return Ok(Step::Help);
        }

        if let Some(name) = token.strip_prefix(LONG_PREFIX) {
            if let Some((key, value)) = name.split_once(INLINE_SEPARATOR) {
                let spec = self
                    .index
                    .by_key(key)
                    .ok_or_else(|| ParseError::UnknownLongOptionWithValue(key.to_string()))?;

                if spec.value_arity() == Arity::Switch {
                    return Err(ParseError::UnexpectedValue(key.to_string()));
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Long option '{key}' with inline value '{value}'.");
                }

                parsed.insert(key, Value::from(value));
                return Ok(Step::Advance(1));
            }

            let spec = self
                .index
                .by_key(name)
                .ok_or_else(|| ParseError::UnknownLongOption(token.to_string()))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Long option '{name}'.");
            }

            // Long forms store under the key, not the long name.
            return capture(spec, name, token, following, parsed);
        }

        if let Some(alias) = token.strip_prefix(SHORT_PREFIX) {
            let spec = single_char(alias)
                .and_then(|short| self.index.by_short(short))
                .ok_or_else(|| ParseError::UnknownShortOption(token.to_string()))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Short option '{alias}' matched '{}'.", spec.key());
            }

            return capture(spec, spec.long(), token, following, parsed);
        }

        Err(ParseError::InvalidArgument(token.to_string()))
    }
}

fn capture(
    spec: &OptionSpec,
    key: &str,
    token: &str,
    following: Option<&str>,
    parsed: &mut ParsedArgs,
) -> Result<Step, ParseError> {
    let value = match (spec.value_arity(), following) {
        (Arity::Switch, _) => None,
        (Arity::Value, Some(next)) => Some(next),
        (Arity::Value, None) => return Err(ParseError::MissingValue(token.to_string())),
        (Arity::Inferred, Some(next)) if !next.starts_with(SHORT_PREFIX) => Some(next),
        (Arity::Inferred, _) => None,
    };

    match value {
        Some(next) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Consumed '{next}' as the value of '{key}'.");
            }

            parsed.insert(key, Value::from(next));
            Ok(Step::Advance(2))
        }
        None => {
            parsed.insert(key, Value::Switch);
            Ok(Step::Advance(1))
        }
    }
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
