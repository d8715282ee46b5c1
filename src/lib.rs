//! `optscan` is a minimal command line option scanner for Rust.
//!
//! Declare a table of options, each with a key, a short alias, a long name and a help message.
//! `optscan` scans the Cli tokens once, left to right, and produces a key-value mapping where each value is either a switch (the option appeared alone) or the text argument that followed it.
//! There are no positional arguments, no sub-commands, and no type conversion: the result is strings and booleans, for the program to interpret.
//!
//! # Usage
//! More examples are outlined in the `demos/` directory of the source.
//!
//! ```no_run
#![doc = include_str!("../demos/script.rs")]
//! ```
//!
//! ```console
//! $ script --help
//! Usage:
//! script [options]
//! Options:
//!   -h, --help: Display the help menu
//!   -v, --verbose: Enable verbose mode
//!   -o, --output: Specify output file
//!   -p, --port: Specify port number
//!
//! $ script -v -o out.txt --port=8080
//! Parsed arguments: {"verbose": true, "output": "out.txt", "port": "8080"}
//!
//! $ script -x
//! Unknown option: -x
//!
//! $ script out.txt
//! Invalid argument: out.txt
//! ```
//!
//! # Builder Api
//! Configure `optscan` by starting with an [`OptionTable`] and `add`ing an [`OptionSpec`] per option.
//! Then `build` the table into a [`GeneralParser`].
//!
//! The parser offers three entry points, from most to least managed:
//! * [`GeneralParser::parse`]: scans [`std::env::args`], printing help or a diagnostic and exiting the process as needed.
//! * [`GeneralParser::parse_tokens`]: scans the given tokens, printing help or a diagnostic, and returns the exit code instead of exiting.
//! * [`GeneralParser::try_parse`]: scans the given tokens without any output, returning an [`Action`] or a [`ParseError`].
//!
//! # Cli Semantics
//! Each token is matched by the first rule that applies.
//!
//! * `--help` prints the help message and exits with code `0`.
//! Tokens are scanned left to right, so a malformed token before `--help` exits with code `1` instead.
//! * `--key=value` stores the text `value` under `key`.
//! Only the first `=` separates; `--key=a=b` stores `a=b`.
//! * `--key` matches the option by its key, storing under `key`.
//! * `-s` matches the option by its short alias, storing under the option's long name.
//! * Any other token is invalid, and the parser exits with code `1`.
//!
//! Whether `--key` and `-s` take the following token as their value depends on the option's [`Arity`]:
//! * [`Arity::Inferred`] (default): the following token is the value, unless it starts with `-`.
//! * [`Arity::Switch`]: never takes a value.
//! * [`Arity::Value`]: always takes the following token, so values such as `-5` are possible.
//!
//! Repeating an option overwrites its earlier value.
//!
//! ```
//! use optscan::{OptionSpec, OptionTable, Value};
//!
//! let parser = OptionTable::new("program")
//!     .add(OptionSpec::named("verbose", 'v'))
//!     .add(OptionSpec::named("output", 'o'))
//!     .build();
//!
//! let parsed = parser
//!     .parse_tokens(vec!["-o", "a.txt", "-v", "--output=b.txt"].as_slice())
//!     .unwrap();
//!
//! assert_eq!(parsed.get("verbose"), Some(&Value::Switch));
//! assert_eq!(parsed.get("output"), Some(&Value::from("b.txt")));
//! ```
//!
//! ### Keys & Long Names
//! The long forms (`--key`, `--key=value`) match and store by the option's key, while the short form stores by its long name.
//! Give an option the same key and long name (via [`OptionSpec::named`]) to keep these consistent.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while building and scanning.
pub use optscan_builder::*;
