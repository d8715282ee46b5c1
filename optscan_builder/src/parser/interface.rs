use crate::parser::base::ParseError;

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

// Diagnostics go to stdout, alongside the help.
impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        println!("{error}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ParseError, UserInterface};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records everything printed.
    /// Clones share the same record, so one may be handed to a parser while the other is inspected.
    #[derive(Clone)]
    pub(crate) struct InMemoryInterface {
        message: Rc<RefCell<Option<Vec<String>>>>,
        error: Rc<RefCell<Option<String>>>,
    }

    impl Default for InMemoryInterface {
        fn default() -> Self {
            Self {
                message: Rc::new(RefCell::new(None)),
                error: Rc::new(RefCell::new(None)),
            }
        }
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            let mut output = self.message.borrow_mut();

            if output.is_some() {
                (*output).as_mut().unwrap().push(message);
            } else {
                (*output).replace(vec![message]);
            }
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;
            let message = message.borrow_mut().take();
            let error = error.borrow_mut().take();

            (message.map(|messages| messages.join("\n")), error)
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }

        pub(crate) fn consume_error(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(message, None);
            error.unwrap()
        }
    }
}
