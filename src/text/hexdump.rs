// src/text/hexdump.rs

use std::fmt;

/// Bytes per line used by [`hexdump`].
pub const DEFAULT_WIDTH: usize = 16;

/// Classic offset / hex / ASCII dump.
///
/// ```text
/// 00000000  68 65 6c 6c 6f 0a                                 |hello.|
/// ```
///
/// Hex bytes are split into two groups of `width / 2`; short last lines are
/// padded so the ASCII column stays aligned. Non-printable bytes show as `.`.
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
    width: usize,
}

impl<'a> HexDump<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            width: DEFAULT_WIDTH,
        }
    }

    /// Bytes per line; values below 1 are treated as 1.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, offset: usize, chunk: &[u8]) -> fmt::Result {
        write!(f, "{offset:08x} ")?;
        let group = self.width.div_ceil(2);

        for i in 0..self.width {
            if i % group == 0 {
                f.write_str(" ")?;
            }
            match chunk.get(i) {
                Some(byte) => write!(f, "{byte:02x} ")?,
                None => f.write_str("   ")?,
            }
        }

        f.write_str(" |")?;
        for &byte in chunk {
            let shown = if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            };
            write!(f, "{shown}")?;
        }
        f.write_str("|")
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, chunk) in self.bytes.chunks(self.width).enumerate() {
            if line > 0 {
                f.write_str("\n")?;
            }
            self.write_line(f, line * self.width, chunk)?;
        }
        Ok(())
    }
}

/// Dump `bytes` with the default width. Empty input gives an empty string.
pub fn hexdump(bytes: &[u8]) -> String {
    HexDump::new(bytes).to_string()
}
