use std::io;

/// Output buffer that counts written bytes against a ceiling.
///
/// Writes are never refused: `remaining` may go negative, and callers check
/// [`LimitBuffer::exceeded`] once the whole document has been written.
#[derive(Debug)]
pub struct LimitBuffer {
    buf: Vec<u8>,
    remaining: i64,
}

impl LimitBuffer {
    pub fn new(limit: u64) -> Self {
        Self {
            buf: Vec::new(),
            remaining: i64::try_from(limit).unwrap_or(i64::MAX),
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn exceeded(&self) -> bool {
        self.remaining < 0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl io::Write for LimitBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        let written = i64::try_from(data.len()).unwrap_or(i64::MAX);
        self.remaining = self.remaining.saturating_sub(written);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
