//! Growable text buffer with indentation and separator rules.

use crate::error::OutputOverflow;
use crate::model::ContainerKind;

/// Accumulates rendered text.
///
/// Items are separated by `,\n`, except the first item of the document and
/// the first item after a container opens. Indentation is one tab per
/// nesting level.
#[derive(Debug)]
pub struct TextEmitter {
    buf: String,
    indent: usize,
    first_item: bool,
    after_open: bool,
    max_len: usize,
}

impl TextEmitter {
    /// Creates an emitter. `initial_capacity` is a hint; `max_len` is enforced.
    pub fn new(initial_capacity: usize, max_len: usize) -> Self {
        let mut buf = String::new();
        // Capacity is only a hint; growth failures surface on write.
        let _ = buf.try_reserve_exact(initial_capacity.min(max_len));
        Self {
            buf,
            indent: 0,
            first_item: true,
            after_open: false,
            max_len,
        }
    }

    /// Current indentation depth.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Grows the buffer for `additional` bytes, doubling capacity when full.
    fn reserve(&mut self, additional: usize) -> Result<(), OutputOverflow> {
        let requested = self.buf.len().saturating_add(additional);
        if requested > self.max_len {
            return Err(OutputOverflow {
                requested,
                max: self.max_len,
            });
        }
        if requested > self.buf.capacity() {
            let target = self
                .buf
                .capacity()
                .saturating_mul(2)
                .max(requested)
                .min(self.max_len);
            self.buf
                .try_reserve_exact(target - self.buf.len())
                .map_err(|_| OutputOverflow {
                    requested: target,
                    max: self.max_len,
                })?;
        }
        Ok(())
    }

    /// Writes text without indentation.
    pub fn write(&mut self, text: &str) -> Result<(), OutputOverflow> {
        self.reserve(text.len())?;
        self.buf.push_str(text);
        Ok(())
    }

    /// Writes text after `indent + extra` tabs.
    pub fn write_indented(&mut self, extra: usize, text: &str) -> Result<(), OutputOverflow> {
        let tabs = self.indent + extra;
        self.reserve(tabs + text.len())?;
        for _ in 0..tabs {
            self.buf.push('\t');
        }
        self.buf.push_str(text);
        Ok(())
    }

    fn separator(&mut self) -> Result<(), OutputOverflow> {
        if !self.first_item && !self.after_open {
            self.write(",\n")?;
        }
        self.first_item = false;
        self.after_open = false;
        Ok(())
    }

    /// Opens the implicit root object.
    pub fn begin_document(&mut self) -> Result<(), OutputOverflow> {
        self.write("{\n")?;
        self.indent = 1;
        Ok(())
    }

    /// Starts an item: separator if needed, then indentation.
    pub fn begin_item(&mut self) -> Result<(), OutputOverflow> {
        self.separator()?;
        self.write_indented(0, "")
    }

    /// Opens a container right after the current item's label.
    pub fn open(&mut self, kind: ContainerKind) -> Result<(), OutputOverflow> {
        let mut text = [0u8; 4];
        self.write(kind.open_char().encode_utf8(&mut text))?;
        self.write("\n")?;
        self.indent += 1;
        self.after_open = true;
        Ok(())
    }

    /// Closes a container. The close brace is placed like an item of the
    /// container, so a non-empty container gets a separator before it.
    pub fn close(&mut self, kind: ContainerKind) -> Result<(), OutputOverflow> {
        self.separator()?;
        self.indent = self.indent.saturating_sub(1);
        let mut text = [0u8; 4];
        self.write_indented(0, kind.close_char().encode_utf8(&mut text))
    }

    /// Closes the root object and returns the text.
    pub fn finish(mut self) -> Result<String, OutputOverflow> {
        self.indent = self.indent.saturating_sub(1);
        self.write("\n")?;
        self.write_indented(0, "}\n")?;
        Ok(self.buf)
    }
}
