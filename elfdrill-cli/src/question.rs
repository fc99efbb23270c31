use anyhow::{ensure, Result};
use colored::Colorize;
use elfdrill_core::Binary;
use rand::rngs::StdRng;
use std::io::BufRead;

/// Marker substituted with a generated parameter in dynamic question texts.
pub const REPLACE_SYMBOL: &str = "%&%";

pub type FixedCheck = Box<dyn Fn(&Binary, &str) -> bool>;
pub type DynamicCheck = Box<dyn Fn(&Binary, &str, &[u64]) -> bool>;
pub type Generator = Box<dyn Fn(&Binary, &mut StdRng) -> u64>;

/// One quiz question.
///
/// Fixed questions render their text as-is. Dynamic questions resolve a
/// parameter per `%&%` marker right before being shown; the values are
/// substituted into the text in order and handed to the predicate alongside
/// the user's answer.
pub enum Question {
    Fixed {
        text: String,
        check: FixedCheck,
    },
    Dynamic {
        template: String,
        generators: Vec<Generator>,
        check: DynamicCheck,
    },
}

impl Question {
    pub fn fixed(
        text: impl Into<String>,
        check: impl Fn(&Binary, &str) -> bool + 'static,
    ) -> Self {
        Question::Fixed {
            text: text.into(),
            check: Box::new(check),
        }
    }

    /// Fails when the marker count and generator count disagree, so a
    /// miswired question is caught while the bank is built rather than
    /// mid-round.
    pub fn dynamic(
        template: impl Into<String>,
        generators: Vec<Generator>,
        check: impl Fn(&Binary, &str, &[u64]) -> bool + 'static,
    ) -> Result<Self> {
        let template = template.into();
        let markers = template.matches(REPLACE_SYMBOL).count();
        ensure!(
            markers == generators.len(),
            "dynamic question needs one generator per {} marker, got {} markers and {} generators in {:?}",
            REPLACE_SYMBOL,
            markers,
            generators.len(),
            template.lines().next().unwrap_or(""),
        );
        Ok(Question::Dynamic {
            template,
            generators,
            check: Box::new(check),
        })
    }

    /// Resolves the parameters and renders the text shown to the user.
    pub fn render(&self, binary: &Binary, rng: &mut StdRng) -> (String, Vec<u64>) {
        match self {
            Question::Fixed { text, .. } => (text.clone(), Vec::new()),
            Question::Dynamic {
                template,
                generators,
                ..
            } => {
                let mut text = template.clone();
                let mut params = Vec::with_capacity(generators.len());
                for generator in generators {
                    let value = generator(binary, rng);
                    text = text.replacen(REPLACE_SYMBOL, &value.to_string(), 1);
                    params.push(value);
                }
                (text, params)
            }
        }
    }

    pub fn check(&self, binary: &Binary, answer: &str, params: &[u64]) -> bool {
        match self {
            Question::Fixed { check, .. } => check(binary, answer),
            Question::Dynamic { check, .. } => check(binary, answer, params),
        }
    }

    /// Prompts, reads one answer line from `input`, prints the verdict, and
    /// returns it.
    pub fn ask(
        &self,
        binary: &Binary,
        rng: &mut StdRng,
        input: &mut dyn BufRead,
    ) -> Result<bool> {
        let (text, params) = self.render(binary, rng);
        let answer = crate::output::read_answer(&text, input)?;
        let correct = self.check(binary, answer.trim(), &params);
        if correct {
            println!("{}", "[True]".green());
        } else {
            println!("{}", "[False]".red());
        }
        Ok(correct)
    }
}
