use crossterm::{cursor, terminal, QueueableCommand};
use std::io::{self, Write};

use crate::TransportError;

/// Writes frames to a display surface and can wipe it between frames.
pub trait Sender {
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError>;

    fn clear(&mut self) -> Result<(), TransportError>;
}

/// Redraws in place on a terminal.
pub struct TerminalSender<W: Write = io::Stdout> {
    out: W,
}

impl TerminalSender<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSender<W> {
    pub fn new(out: W) -> Self {
        TerminalSender { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sender for TerminalSender<W> {
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.out.write_all(data)?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TransportError> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Appends frames to a plain stream; clearing is a no-op.
pub struct StdioSender<W: Write = io::Stdout> {
    out: W,
}

impl StdioSender<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdioSender<W> {
    pub fn new(out: W) -> Self {
        StdioSender { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sender for StdioSender<W> {
    fn send(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.out.write_all(data)?;
        self.out.write_all(b"\n")?; // Add newline for readability
        self.out.flush()?; // Ensure it's written immediately
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn terminal_sender_writes_frame_verbatim() {
        let mut sender = TerminalSender::new(Vec::new());
        sender.send(b" _\n|A|\n").unwrap();
        assert_eq!(sender.into_inner(), b" _\n|A|\n".to_vec());
    }

    #[test]
    fn terminal_clear_emits_clear_sequence() {
        let mut sender = TerminalSender::new(Vec::new());
        sender.clear().unwrap();
        let bytes = String::from_utf8(sender.into_inner()).unwrap();
        assert!(bytes.contains("\x1b[2J"), "{:?}", bytes);
    }

    #[test]
    fn stdio_sender_appends_newline_and_never_clears() {
        let mut sender = StdioSender::new(Vec::new());
        sender.send(b"{}").unwrap();
        sender.clear().unwrap();
        sender.send(b"{}").unwrap();
        assert_eq!(sender.into_inner(), b"{}\n{}\n".to_vec());
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let mut sender = TerminalSender::new(BrokenPipe);
        assert!(matches!(sender.send(b"x"), Err(TransportError::Io(_))));
    }
}
