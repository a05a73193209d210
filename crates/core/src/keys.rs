//! Raw keystroke decoding.
//!
//! This module reads byte windows straight off a raw-mode input stream and
//! classifies them into logical [`Key`] events. Control keys become named
//! variants; anything else is decoded as UTF-8, stripped of embedded ANSI
//! escape sequences, and passed through as literal text.

use std::io::Read;

use crate::error::Result;

/// Bytes read from the input stream per decode cycle.
const READ_WINDOW: usize = 8;

/// A decoded keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Backspace,
    /// Literal input text with ANSI escapes stripped.
    Text(String),
}

/// Iterator over decoded keys from a raw input stream.
///
/// The iterator ends permanently when the stream reaches EOF or when the
/// interrupt byte (ctrl-c) arrives. One reader serves exactly one prompt
/// session; it is not restartable.
pub struct KeyReader<R: Read> {
    input: R,
    done: bool,
}

impl<R: Read> KeyReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, done: false }
    }
}

impl<R: Read> Iterator for KeyReader<R> {
    type Item = Result<Key>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let mut buf = [0u8; READ_WINDOW];
            let byte_count = match self.input.read(&mut buf) {
                Ok(n) => n,
                Err(e) => return Some(Err(e.into())),
            };

            match &buf[..byte_count] {
                [] => self.done = true,
                // ESC [ {A,B,C,D} cursor key sequences
                [0x1b, b'[', b'A'] => return Some(Ok(Key::Up)),
                [0x1b, b'[', b'B'] => return Some(Ok(Key::Down)),
                [0x1b, b'[', b'C'] => return Some(Ok(Key::Right)),
                [0x1b, b'[', b'D'] => return Some(Ok(Key::Left)),
                // ctrl-c ends the whole key sequence, not just this read
                [0x03] => self.done = true,
                [0x0d] => return Some(Ok(Key::Enter)),
                [0x20] => return Some(Ok(Key::Space)),
                [0x7f] => return Some(Ok(Key::Backspace)),
                window => {
                    let text = strip_ansi(&String::from_utf8_lossy(window));
                    if !text.is_empty() {
                        return Some(Ok(Key::Text(text)));
                    }
                    // Unrecognized escape sequences strip to nothing; read again.
                }
            }
        }

        None
    }
}

/// Remove ANSI escape sequences from decoded input text.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            output.push(c);
            continue;
        }
        match chars.next() {
            // CSI: parameter and intermediate bytes run until a final byte
            // in 0x40..=0x7e.
            Some('[') => {
                for follow in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&follow) {
                        break;
                    }
                }
            }
            // Two-character escape: drop both. A trailing lone ESC is dropped.
            Some(_) | None => {}
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    /// Replays one scripted chunk per read call, the way a terminal delivers
    /// one keystroke per read.
    struct ScriptedInput {
        chunks: VecDeque<Vec<u8>>,
    }

    impl ScriptedInput {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|chunk| chunk.to_vec()).collect(),
            }
        }
    }

    impl Read for ScriptedInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
                None => Ok(0),
            }
        }
    }

    fn decode(chunks: &[&[u8]]) -> Vec<Key> {
        KeyReader::new(ScriptedInput::new(chunks))
            .map(|key| key.unwrap())
            .collect()
    }

    #[test]
    fn test_arrow_key_sequences() {
        let keys = decode(&[b"\x1b[A", b"\x1b[B", b"\x1b[C", b"\x1b[D"]);
        assert_eq!(keys, vec![Key::Up, Key::Down, Key::Right, Key::Left]);
    }

    #[test]
    fn test_single_byte_control_keys() {
        let keys = decode(&[b"\r", b" ", b"\x7f"]);
        assert_eq!(keys, vec![Key::Enter, Key::Space, Key::Backspace]);
    }

    #[test]
    fn test_interrupt_ends_the_sequence() {
        let keys = decode(&[b"y", b"\x03", b"\r"]);
        assert_eq!(keys, vec![Key::Text("y".to_string())]);
    }

    #[test]
    fn test_eof_ends_the_sequence() {
        let keys = decode(&[]);
        assert!(keys.is_empty());
    }

    #[test]
    fn test_unrecognized_escape_sequence_is_dropped() {
        let keys = decode(&[b"\x1b[Z", b"\r"]);
        assert_eq!(keys, vec![Key::Enter]);
    }

    #[test]
    fn test_literal_text_passes_through() {
        let keys = decode(&[b"j", b"ab"]);
        assert_eq!(
            keys,
            vec![Key::Text("j".to_string()), Key::Text("ab".to_string())]
        );
    }

    #[test]
    fn test_embedded_ansi_codes_are_stripped() {
        let keys = decode(&[b"\x1b[31mred"]);
        assert_eq!(keys, vec![Key::Text("red".to_string())]);
    }

    #[test]
    fn test_reader_stays_done_after_interrupt() {
        let mut reader = KeyReader::new(ScriptedInput::new(&[b"\x03", b"y"]));
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_strip_ansi_passthrough() {
        assert_eq!(strip_ansi("plain"), "plain");
    }

    #[test]
    fn test_strip_ansi_removes_csi_sequences() {
        assert_eq!(strip_ansi("\x1b[1;31mbold red\x1b[0m"), "bold red");
    }

    #[test]
    fn test_strip_ansi_drops_trailing_escape() {
        assert_eq!(strip_ansi("abc\x1b"), "abc");
        assert_eq!(strip_ansi("a\x1bcb"), "ab");
    }
}
