//! Line-oriented console front-end.
//!
//! [`ConsolePlayer`] implements all three engine callbacks over any reader
//! and writer: rolls are printed, and both deciders prompt for a `[y]/n`
//! answer. An empty answer means yes.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::core::{Point, Roll};
use crate::engine::{DecisionError, PointContinuationDecider, RollReporter, RoundStartDecider};

/// Interactive player reading answers from `input` and writing to `output`.
#[derive(Debug)]
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl ConsolePlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, prompt: &str) -> Result<bool, DecisionError> {
        write!(self.output, "{prompt} ([y]/n) ")?;
        self.output.flush()?;

        // Answers need not be UTF-8
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            // End of input
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(is_yes(&line))
    }
}

/// Whether a typed answer means yes: empty, or starting with `y`/`Y`.
#[must_use]
pub fn is_yes(answer: impl AsRef<[u8]>) -> bool {
    match answer.as_ref().first() {
        None | Some(b'\r' | b'\n') => true,
        Some(b) => b.eq_ignore_ascii_case(&b'y'),
    }
}

/// Final line shown when a session or a simulation ends.
#[must_use]
pub fn summary(wins: u64, losses: u64) -> String {
    let net = i128::from(wins) - i128::from(losses);
    let rate = match wins + losses {
        0 => "n/a".to_string(),
        rounds => format!("{:+.2}%", net as f64 / rounds as f64 * 100.0),
    };
    format!("{wins} wins, {losses} losses. Net {net:+} units, return rate {rate}.")
}

impl<R: BufRead, W: Write> RollReporter for ConsolePlayer<R, W> {
    fn report(&mut self, roll: Roll) {
        if let Err(err) = writeln!(self.output, "Roll: {roll}") {
            warn!(%err, "could not write roll");
        }
    }
}

impl<R: BufRead, W: Write> RoundStartDecider for ConsolePlayer<R, W> {
    fn play_again(&mut self, wins: u32, losses: u32) -> Result<bool, DecisionError> {
        self.ask(&format!("{wins} wins, {losses} losses. Play again?"))
    }
}

impl<R: BufRead, W: Write> PointContinuationDecider for ConsolePlayer<R, W> {
    fn continue_play(&mut self, point: Point) -> Result<bool, DecisionError> {
        self.ask(&format!("Point is {point}. Continue play?"))
    }
}
