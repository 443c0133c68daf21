//! Console-driven policy for human players.

use std::io::{self, BufRead, Write};

use crate::core::Decision;
use crate::error::{PigError, Result};

use super::{DecisionContext, DecisionPolicy};

/// Source of response lines.
///
/// `io::Stdin` reads through its shared buffer, so two human seats can
/// both read from it without stealing each other's lines.
pub trait LineSource {
    /// Append one line to `buf`. Returns bytes read; 0 means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Map a typed response to a decision.
///
/// Anything starting with `h` or `H` holds; everything else rolls.
///
/// ```
/// use rust_pig::core::Decision;
/// use rust_pig::policy::parse_response;
///
/// assert_eq!(parse_response("hold\n"), Decision::Hold);
/// assert_eq!(parse_response("H"), Decision::Hold);
/// assert_eq!(parse_response("r\n"), Decision::Roll);
/// assert_eq!(parse_response("whatever"), Decision::Roll);
/// ```
#[must_use]
pub fn parse_response(line: &str) -> Decision {
    let line = line.trim_end_matches(&['\n', '\r'][..]);
    match line.chars().next() {
        Some(c) if c.eq_ignore_ascii_case(&'h') => Decision::Hold,
        _ => Decision::Roll,
    }
}

/// Prompts on `output` and reads one response line from `input` per call.
#[derive(Debug)]
pub struct InteractivePolicy<R, W> {
    input: R,
    output: W,
}

impl InteractivePolicy<io::Stdin, io::Stdout> {
    /// Prompt on stdout, read from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> InteractivePolicy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: LineSource, W: Write> DecisionPolicy for InteractivePolicy<R, W> {
    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision> {
        write!(
            self.output,
            "{}, your current turn score is {}. Roll or hold? (r/h): ",
            ctx.name, ctx.unbanked
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PigError::InputClosed {
                player: ctx.name.to_string(),
            });
        }

        let decision = parse_response(&line);
        log::debug!("{} answered {:?} -> {:?}", ctx.name, line.trim_end(), decision);
        Ok(decision)
    }
}
