//! Where `read` statements take their input from.
//!
//! Input is consumed one whitespace-delimited token at a time, so several
//! values may share a line.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

/// Reads tokens from stdin, a line at a time.
#[derive(Default)]
pub struct StdinInputHandler {
    pending: Mutex<VecDeque<String>>,
}

impl StdinInputHandler {
    pub fn next_token(&self) -> io::Result<Option<String>> {
        let mut pending = self.pending.lock();
        loop {
            if let Some(token) = pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Serves tokens from a fixed script.
#[derive(Default)]
pub struct BufferInputHandler {
    tokens: Mutex<VecDeque<String>>,
}

impl BufferInputHandler {
    pub fn new(input: &str) -> Self {
        BufferInputHandler {
            tokens: Mutex::new(input.split_whitespace().map(str::to_owned).collect()),
        }
    }

    pub fn next_token(&self) -> Option<String> {
        self.tokens.lock().pop_front()
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.lock().len()
    }
}

pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Buffer(BufferInputHandler),
}

impl InputHandlerImpl {
    /// Next token, or `None` at end of input.
    pub fn next_token(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin(h) => h.next_token(),
            Self::Buffer(h) => Ok(h.next_token()),
        }
    }

    /// Unconsumed tokens of a scripted input; zero for stdin.
    pub fn remaining(&self) -> usize {
        match self {
            Self::Stdin(_) => 0,
            Self::Buffer(h) => h.remaining(),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler::default()))
}

pub fn scripted_input(input: &str) -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Buffer(BufferInputHandler::new(input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_splits_on_any_whitespace() {
        let input = scripted_input("1 2.5\n  true\tword\n");
        let mut tokens = Vec::new();
        while let Ok(Some(token)) = input.next_token() {
            tokens.push(token);
        }
        assert_eq!(tokens, vec!["1", "2.5", "true", "word"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn empty_script_is_exhausted() {
        let input = scripted_input("   ");
        assert!(matches!(input.next_token(), Ok(None)));
    }
}
