//! Interactive parameter collection
//!
//! Reads the model order, zero/pole set and frequency range line by line.
//! Inputs are only checked for numeric parseability here; range checks
//! belong to `bode_core`.

use std::io::{self, BufRead, Write};

use bode_core::ModelOrder;
use thiserror::Error;

/// Attempts allowed per prompt before giving up
pub const MAX_ATTEMPTS: usize = 10;

/// Prompt errors
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended")]
    EndOfInput,

    #[error("Too many invalid attempts at prompt \"{prompt}\"")]
    TooManyAttempts { prompt: String },
}

/// Parameters for one case of the session
#[derive(Debug, Clone, PartialEq)]
pub struct CaseInput {
    pub order: ModelOrder,
    pub zeros: Vec<f64>,
    pub poles: Vec<f64>,
    pub start_freq: f64,
    pub stop_freq: f64,
}

/// Line-oriented prompter over any input/output pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the prompts go to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Collect every parameter of one case
    pub fn case_input(&mut self) -> Result<CaseInput, PromptError> {
        let order = self.model_order()?;
        let (zeros, poles) = self.zeros_and_poles(order)?;
        let (start_freq, stop_freq) = self.frequency_range()?;
        Ok(CaseInput {
            order,
            zeros,
            poles,
            start_freq,
            stop_freq,
        })
    }

    /// Ask for the transfer function number (1 or 2)
    pub fn model_order(&mut self) -> Result<ModelOrder, PromptError> {
        self.read_parsed("Enter the transfer function number (1 or 2): ", |line| {
            let selector: u32 = line
                .parse()
                .map_err(|_| "Invalid input. Please enter a number.")?;
            ModelOrder::from_selector(selector).map_err(|_| "Invalid input. Please enter 1 or 2.")
        })
    }

    /// Ask for one zero and one pole per order
    pub fn zeros_and_poles(
        &mut self,
        order: ModelOrder,
    ) -> Result<(Vec<f64>, Vec<f64>), PromptError> {
        let mut zeros = Vec::with_capacity(order.degree());
        for i in 1..=order.degree() {
            zeros.push(self.read_f64(&format!("Enter the zero z{} (0 to 1E8): ", i))?);
        }
        let mut poles = Vec::with_capacity(order.degree());
        for i in 1..=order.degree() {
            poles.push(self.read_f64(&format!("Enter the pole p{} (0 to 1E8): ", i))?);
        }
        Ok((zeros, poles))
    }

    /// Ask for start and stop frequency in Hz
    pub fn frequency_range(&mut self) -> Result<(f64, f64), PromptError> {
        let start = self.read_f64("Input start frequency (minimum 1): ")?;
        let stop = self.read_f64("Input stop frequency (maximum 1E9): ")?;
        Ok((start, stop))
    }

    /// Ask whether to run another case
    ///
    /// Only `y` (any case) continues; end of input stops.
    pub fn continue_session(&mut self) -> Result<bool, PromptError> {
        match self.read_line(
            "Do you want to input another case? Enter 'y' to continue or any other key to exit: ",
        ) {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case("y")),
            Err(PromptError::EndOfInput) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn read_f64(&mut self, prompt: &str) -> Result<f64, PromptError> {
        self.read_parsed(prompt, |line| {
            line.parse::<f64>()
                .map_err(|_| "Invalid input. Please enter a number.")
        })
    }

    fn read_parsed<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, &'static str>,
    {
        for _ in 0..MAX_ATTEMPTS {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
        Err(PromptError::TooManyAttempts {
            prompt: prompt.trim_end().to_string(),
        })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}
