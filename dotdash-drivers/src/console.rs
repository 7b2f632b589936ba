//! Line-oriented serial console
//!
//! Stands in for a terminal on boards without one: writes a prompt, blocks
//! until the user sends a line, and prints the reveal. Input is echoed back
//! so the user sees what they typed on a plain serial terminal.

use dotdash_core::MorseWord;
use embedded_io_async::{Read, Write};

/// Prompt shown after the word has been blinked
pub const PROMPT: &str = "want word?";

/// Line terminator written to the terminal
const NEWLINE: &[u8] = b"\r\n";

/// Console errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError<E> {
    /// Underlying read or write failed
    Io(E),
    /// Input ended before a line terminator
    Eof,
    /// Morse line did not fit the render buffer
    Format,
}

/// Console over a serial receiver and transmitter
pub struct Console<R, W> {
    rx: R,
    tx: W,
    /// Last line ended with `\r`; swallow a following `\n`
    skip_lf: bool,
}

impl<R, W, E> Console<R, W>
where
    R: Read<Error = E>,
    W: Write<Error = E>,
{
    pub fn new(rx: R, tx: W) -> Self {
        Self {
            rx,
            tx,
            skip_lf: false,
        }
    }

    /// Write a prompt without a line terminator
    pub async fn prompt(&mut self, text: &str) -> Result<(), ConsoleError<E>> {
        self.write_bytes(text.as_bytes()).await?;
        self.tx.flush().await.map_err(ConsoleError::Io)
    }

    /// Write a line followed by `\r\n`
    pub async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError<E>> {
        self.write_bytes(line.as_bytes()).await?;
        self.write_bytes(NEWLINE).await?;
        self.tx.flush().await.map_err(ConsoleError::Io)
    }

    /// Block until a full line arrives
    ///
    /// Bytes are stored in `buf` until it is full; the rest of the line is
    /// discarded. Returns the number of bytes stored, without terminator.
    /// `\r`, `\n` and `\r\n` all end a line.
    pub async fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ConsoleError<E>> {
        let mut len = 0;
        let mut byte = [0u8; 1];

        loop {
            let n = self.rx.read(&mut byte).await.map_err(ConsoleError::Io)?;
            if n == 0 {
                return Err(ConsoleError::Eof);
            }

            let b = byte[0];
            if core::mem::take(&mut self.skip_lf) && b == b'\n' {
                continue;
            }

            match b {
                b'\r' | b'\n' => {
                    self.skip_lf = b == b'\r';
                    self.write_bytes(NEWLINE).await?;
                    self.tx.flush().await.map_err(ConsoleError::Io)?;
                    return Ok(len);
                }
                _ => {
                    if len < buf.len() {
                        buf[len] = b;
                        len += 1;
                    }
                    self.write_bytes(&byte).await?;
                }
            }
        }
    }

    /// Block until a line arrives, ignoring its content
    pub async fn wait_for_line(&mut self) -> Result<(), ConsoleError<E>> {
        let mut scratch = [0u8; 32];
        self.read_line(&mut scratch).await.map(|_| ())
    }

    /// Print the word, then its Morse codes separated by spaces
    pub async fn reveal(&mut self, word: &str, morse: &MorseWord) -> Result<(), ConsoleError<E>> {
        let line = morse.to_spaced().map_err(|_| ConsoleError::Format)?;

        self.write_line(word).await?;
        self.write_line(&line).await
    }

    /// Release the receiver and transmitter
    pub fn into_inner(self) -> (R, W) {
        (self.rx, self.tx)
    }

    async fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConsoleError<E>> {
        self.tx.write_all(bytes).await.map_err(ConsoleError::Io)
    }
}
