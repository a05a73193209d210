//! In-place frame repainting over an ANSI terminal.
//!
//! Prompts are redrawn where they stand instead of scrolling: the painter
//! remembers how many rows the previous frame spanned and clears exactly
//! that many before drawing the next one.

use std::io::Write;

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::error::Result;

/// Repaints a multi-line prompt frame in place.
///
/// A fresh painter (row count zero) starts every prompt session. The tracked
/// row count must equal the number of line breaks emitted by the last
/// [`write_frame`](Self::write_frame); otherwise subsequent redraws corrupt
/// the visible prompt.
pub struct FramePainter<W: Write> {
    output: W,
    painted_rows: usize,
}

impl<W: Write> FramePainter<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            painted_rows: 0,
        }
    }

    /// Rows spanned by the most recently painted frame.
    pub fn painted_rows(&self) -> usize {
        self.painted_rows
    }

    /// Move to column 0 and erase to the end of the line.
    fn clear_row(&mut self) -> Result<()> {
        queue!(self.output, MoveToColumn(0), Clear(ClearType::UntilNewLine))?;
        Ok(())
    }

    /// Replace the previously painted frame with `lines`.
    ///
    /// Clears the recorded number of rows bottom-up (erase, move up one row,
    /// repeat), erases the current row, then writes each new line with a
    /// newline between lines but not after the last, and leaves the cursor
    /// at column 0.
    pub fn write_frame(&mut self, lines: &[String]) -> Result<()> {
        while self.painted_rows > 0 {
            self.clear_row()?;
            queue!(self.output, MoveUp(1))?;
            self.painted_rows -= 1;
        }
        self.clear_row()?;

        for (i, line) in lines.iter().enumerate() {
            queue!(self.output, MoveToColumn(0), Print(line))?;
            if i < lines.len() - 1 {
                queue!(self.output, Print("\n"))?;
                self.painted_rows += 1;
            }
        }

        queue!(self.output, MoveToColumn(0))?;
        self.output.flush()?;
        Ok(())
    }

    /// Emit the line break that leaves a `no_clear` final frame on screen.
    pub fn finish_line(&mut self) -> Result<()> {
        queue!(self.output, Print("\r\n"))?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    /// Byte sink the test can inspect while the painter still owns a handle.
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn take_text(&self) -> String {
            String::from_utf8(std::mem::take(&mut *self.0.borrow_mut())).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_first_frame_paints_without_clearing_history() {
        let buf = SharedBuf::default();
        let mut painter = FramePainter::new(buf.clone());

        painter.write_frame(&lines(&["one", "two"])).unwrap();

        assert_eq!(painter.painted_rows(), 1);
        assert_eq!(buf.take_text(), "\x1b[1G\x1b[K\x1b[1Gone\n\x1b[1Gtwo\x1b[1G");
    }

    #[test]
    fn test_repaint_clears_exactly_the_previous_rows() {
        let buf = SharedBuf::default();
        let mut painter = FramePainter::new(buf.clone());

        painter.write_frame(&lines(&["a", "b", "c"])).unwrap();
        assert_eq!(painter.painted_rows(), 2);
        buf.take_text();

        painter.write_frame(&lines(&["x"])).unwrap();
        assert_eq!(painter.painted_rows(), 0);
        assert_eq!(
            buf.take_text(),
            "\x1b[1G\x1b[K\x1b[1A\x1b[1G\x1b[K\x1b[1A\x1b[1G\x1b[K\x1b[1Gx\x1b[1G"
        );
    }

    #[test]
    fn test_empty_frame_erases_the_prompt() {
        let buf = SharedBuf::default();
        let mut painter = FramePainter::new(buf.clone());

        painter.write_frame(&lines(&["only"])).unwrap();
        painter.write_frame(&[]).unwrap();

        assert_eq!(painter.painted_rows(), 0);
        assert!(buf.take_text().ends_with("\x1b[1G\x1b[K\x1b[1G"));
    }

    #[test]
    fn test_row_count_matches_line_breaks_across_renders() {
        let buf = SharedBuf::default();
        let mut painter = FramePainter::new(buf.clone());

        for frame in [
            lines(&["a"]),
            lines(&["a", "b", "c", "d"]),
            lines(&["a", "b"]),
            lines(&[]),
        ] {
            let previous_rows = painter.painted_rows();
            painter.write_frame(&frame).unwrap();

            let text = buf.take_text();
            assert_eq!(text.matches("\x1b[1A").count(), previous_rows);
            assert_eq!(text.matches('\n').count(), painter.painted_rows());
        }
    }

    #[test]
    fn test_finish_line_emits_a_line_break() {
        let buf = SharedBuf::default();
        let mut painter = FramePainter::new(buf.clone());

        painter.finish_line().unwrap();
        assert_eq!(buf.take_text(), "\r\n");
    }
}
