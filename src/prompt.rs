// Interactive input, split out so command handlers can run without a terminal.

use anyhow::Result;
use dialoguer::{Input, Password};

pub trait Prompter {
    fn text(&self, prompt: &str) -> Result<String>;
    /// Input is not echoed.
    fn secret(&self, prompt: &str) -> Result<String>;
}

/// Terminal prompts backed by `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&self, prompt: &str) -> Result<String> {
        let value: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(value.trim().to_string())
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        Ok(Password::new().with_prompt(prompt).interact()?)
    }
}

/// Use `given` when present, otherwise ask.
pub fn value_or_prompt(given: Option<String>, prompter: &dyn Prompter, prompt: &str) -> Result<String> {
    match given {
        Some(v) => Ok(v),
        None => prompter.text(prompt),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers in order and records every prompt shown.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: RefCell<VecDeque<String>>,
        pub asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
                asked: RefCell::default(),
            }
        }

        fn next(&self, prompt: &str) -> Result<String> {
            self.asked.borrow_mut().push(prompt.to_string());
            self.answers
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("no scripted answer for '{prompt}'"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(&self, prompt: &str) -> Result<String> {
            self.next(prompt)
        }
        fn secret(&self, prompt: &str) -> Result<String> {
            self.next(prompt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedPrompter;
    use super::*;

    #[test]
    fn given_value_skips_prompt() {
        let p = ScriptedPrompter::new(&[]);
        let v = value_or_prompt(Some("ci".into()), &p, "Team city Server").unwrap();
        assert_eq!(v, "ci");
        assert!(p.asked.borrow().is_empty());
    }

    #[test]
    fn missing_value_is_prompted() {
        let p = ScriptedPrompter::new(&["bob"]);
        let v = value_or_prompt(None, &p, "Username").unwrap();
        assert_eq!(v, "bob");
        assert_eq!(p.asked.borrow().as_slice(), ["Username"]);
    }
}
