use crate::api::OptionSpec;
use crate::constant::*;
use crate::parser::interface::UserInterface;

pub(crate) struct Printer {
    program: String,
    options: Vec<OptionSpec>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", Vec::default())
    }

    pub(crate) fn new(program: impl Into<String>, options: Vec<OptionSpec>) -> Self {
        Self {
            program: program.into(),
            options,
        }
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print("Usage:".to_string());
        user_interface.print(format!("{p} [options]", p = self.program));
        user_interface.print("Options:".to_string());
        user_interface.print(format!(
            "  -{HELP_SHORT}, --{HELP_NAME}: {HELP_DESCRIPTION}"
        ));

        for option in &self.options {
            let flags = format!("-{s}, --{l}", s = option.short(), l = option.long());

            if option.description().is_empty() {
                user_interface.print(format!("  {flags}"));
            } else {
                user_interface.print(format!("  {flags}: {d}", d = option.description()));
            }
        }
    }
}
