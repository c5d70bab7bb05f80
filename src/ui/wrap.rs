//! Word wrapping and indentation
//!
//! Widths are counted in characters.

/// Text with its length in characters
#[derive(Debug, Default, Clone)]
struct Measured {
    text: String,
    width: usize,
}

impl Measured {
    fn push(&mut self, c: char) {
        self.text.push(c);
        self.width += 1;
    }

    fn concat(mut self, other: Measured) -> Measured {
        self.text.push_str(&other.text);
        self.width += other.width;
        self
    }
}

/// Read the first word of `text`
///
/// `min_width` is the space left on the current line and `max_width` the size
/// of a full line. Returns the text to append to the current line, the text to
/// start the next line with, and what is left of `text`.
fn wrap_word(mut text: &str, min_width: usize, max_width: usize) -> (Measured, Measured, &str) {
    let mut space = Measured::default();
    let mut prefix = Measured::default();
    let mut suffix = Measured::default();
    let mut reached_min = false;
    let mut reached_end = false;

    // read the first word, stopping at the end of the current line
    while !reached_min {
        let Some(c) = text.chars().next() else { break };
        if c.is_whitespace() {
            if prefix.width == 0 {
                space.push(c);
                text = &text[c.len_utf8()..];
            } else {
                reached_min = true;
                reached_end = true;
            }
        } else if space.width + prefix.width < min_width {
            prefix.push(c);
            text = &text[c.len_utf8()..];
        } else {
            reached_min = true;
        }
    }

    if reached_end || text.is_empty() {
        return (space.concat(prefix), Measured::default(), text);
    }

    // the word overflows: finish reading it
    while let Some(c) = text.chars().next() {
        if c.is_whitespace() {
            break;
        }
        if prefix.width + suffix.width < max_width {
            suffix.push(c);
            text = &text[c.len_utf8()..];
        } else {
            // too long for any line, split it across both lines
            return (space.concat(prefix), suffix, text);
        }
    }

    (Measured::default(), prefix.concat(suffix), text)
}

/// Break a string into lines of at most `width` characters
///
/// A width of zero is treated as one, so every call makes progress.
pub fn wrap(mut text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut result = Vec::new();
    let mut line = Measured::default();

    while !text.is_empty() {
        let (cont, next, rest) = wrap_word(text, width.saturating_sub(line.width), width);
        text = rest;

        line = line.concat(cont);
        if next.width > 0 {
            result.push(std::mem::take(&mut line).text);
            line = next;
        }
    }

    result.push(line.text);
    result
}

/// Prefix every line with `prefix`
pub fn indent(prefix: &str, lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| format!("{}{}", prefix, line)).collect()
}

/// Prefix the first line with `first` and the others with `prefix`
pub fn indentf(first: &str, prefix: &str, lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{}{}", first, line)
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect()
}

/// Prefix every line with `size` spaces
pub fn indents(size: usize, lines: &[String]) -> Vec<String> {
    indent(&" ".repeat(size), lines)
}

/// Prefix the first line with `first` and the others with `size` spaces
pub fn indentfs(first: &str, size: usize, lines: &[String]) -> Vec<String> {
    indentf(first, &" ".repeat(size), lines)
}
