//! Receipt layout builder
//!
//! Fluent API for composing the fixed-layout text receipt. Width is in
//! characters; centered lines and rules are padded against it.

/// Receipt text builder
pub struct ReceiptBuilder {
    buf: String,
    width: usize,
}

impl ReceiptBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(2048),
            width,
        }
    }

    /// Write a line of text
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write a centered line
    pub fn center(&mut self, s: &str) -> &mut Self {
        let len = s.chars().count();
        if len < self.width {
            let pad = (self.width - len) / 2;
            for _ in 0..pad {
                self.buf.push(' ');
            }
        }
        self.line(s)
    }

    /// Write a full-width separator rule
    pub fn rule(&mut self) -> &mut Self {
        let rule: String = "=".repeat(self.width);
        self.line(&rule)
    }

    /// Write a section heading followed by a thin rule
    pub fn section(&mut self, title: &str) -> &mut Self {
        self.blank();
        self.line(title);
        let rule: String = "-".repeat(self.width);
        self.line(&rule)
    }

    /// Write a `label: value` line
    pub fn kv(&mut self, label: &str, value: &str) -> &mut Self {
        self.buf.push_str(label);
        self.buf.push_str(": ");
        self.buf.push_str(value);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Finish and return the document text
    pub fn build(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pads_to_width() {
        let mut b = ReceiptBuilder::new(10);
        b.center("abcd");
        assert_eq!(b.build(), "   abcd\n");
    }

    #[test]
    fn test_kv_format() {
        let mut b = ReceiptBuilder::new(20);
        b.kv("Monto", "$200");
        assert_eq!(b.build(), "Monto: $200\n");
    }
}
