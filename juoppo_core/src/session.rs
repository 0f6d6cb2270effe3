//! Interactive drinking session.
//!
//! The session is a small state machine:
//!
//! ```text
//! Identify -> CollectBeverage -> AskMore -+-> CollectBeverage
//!                                         +-> Report -> Done
//! ```
//!
//! Input and output are generic so the binary can drive it from the
//! terminal and tests can drive it from in-memory buffers.

use crate::input::{parse_decimal, Answer};
use crate::store::ConsumerDirectory;
use crate::{Beverage, Error, Result, Summary};
use std::io::{BufRead, Write};

const PROMPT_NICK_NAME: &str = "Kuka juopottelee? ";
const PROMPT_PRODUCER: &str = "Alkoholijuoman valmistaja: ";
const PROMPT_NAME: &str = "Alkoholijuoman nimi: ";
const PROMPT_VOLUME: &str = "Juoman kokonaismäärä (l): ";
const PROMPT_ABV: &str = "ABV (%): ";
const PROMPT_MORE: &str = "Vieläkö joit? (k/e) ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Identify,
    CollectBeverage,
    AskMore,
    Report,
    Done,
}

/// One run of the prompt loop
pub struct Session<R, W> {
    input: R,
    output: W,
    beverages: Vec<Beverage>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            beverages: Vec::new(),
        }
    }

    /// Run the session to completion and return the logged beverages.
    ///
    /// Fails if the directory lookup fails, if writing fails, or if the input
    /// ends before the user answers `e` to the continue question.
    pub fn run<D: ConsumerDirectory + ?Sized>(
        mut self,
        directory: &mut D,
    ) -> Result<Vec<Beverage>> {
        let mut state = State::Identify;

        while state != State::Done {
            tracing::trace!("Session state: {:?}", state);

            state = match state {
                State::Identify => {
                    let nick_name = self.prompt(PROMPT_NICK_NAME)?;
                    directory.identify(&nick_name)?;
                    State::CollectBeverage
                }
                State::CollectBeverage => {
                    let beverage = self.collect_beverage()?;
                    tracing::debug!(
                        "Logged {} - {}: {} g alcohol",
                        beverage.producer(),
                        beverage.name(),
                        beverage.alcohol_grams()
                    );
                    self.beverages.push(beverage);
                    State::AskMore
                }
                State::AskMore => match self.ask_more()? {
                    Answer::Yes => State::CollectBeverage,
                    Answer::No => State::Report,
                },
                State::Report => {
                    self.report()?;
                    State::Done
                }
                State::Done => State::Done,
            };
        }

        Ok(self.beverages)
    }

    fn collect_beverage(&mut self) -> Result<Beverage> {
        let producer = self.prompt(PROMPT_PRODUCER)?;
        let name = self.prompt(PROMPT_NAME)?;
        let volume = self.prompt_decimal(PROMPT_VOLUME, "tilavuus litroina")?;
        let abv = self.prompt_decimal(PROMPT_ABV, "alkoholitilavuus prosentteina")?;

        Ok(Beverage::new(producer, name, volume, abv))
    }

    fn ask_more(&mut self) -> Result<Answer> {
        loop {
            let raw = self.prompt(PROMPT_MORE)?;
            if let Some(answer) = Answer::parse(&raw) {
                return Ok(answer);
            }
        }
    }

    fn report(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for beverage in &self.beverages {
            writeln!(self.output, "{}", beverage)?;
        }
        write!(self.output, "{}", Summary::from_beverages(&self.beverages))?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt until the answer parses as a number
    fn prompt_decimal(&mut self, prompt: &str, quantity: &str) -> Result<f64> {
        loop {
            let raw = self.prompt(prompt)?;
            match parse_decimal(&raw) {
                Some(value) => return Ok(value),
                None => writeln!(
                    self.output,
                    "\"{}\" ei kyllä ole järkevä {}. Yritähän uudestaan.",
                    raw, quantity
                )?,
            }
        }
    }

    /// Print `prompt` and read one line, without its line terminator
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed(prompt.trim().to_string()));
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
