pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_SENTINEL: &str = "--help";
pub(crate) const HELP_DESCRIPTION: &str = "Display the help menu";

pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: char = '-';
pub(crate) const INLINE_SEPARATOR: char = '=';
