//! The `pretty_printer` module contains the low-level text buffer the formatter writes tokens to
//! when reconstructing source code from a syntax tree.

/// Object that accumulates the fragments of formatted output and tracks the indentation level.
///
/// Fragments are only ever appended.  Once a conversion finishes, the owner reads the text with
/// [`PrettyPrinter::take_contents`], which also resets the printer for the next conversion.
pub struct PrettyPrinter {
    fragments: Vec<String>,
    pub indent: usize,
    pub tab_width: usize,
}

impl PrettyPrinter {
    /// Initialize a new pretty-printer object
    ///
    /// # Arguments
    ///
    /// * `tab_width` - The number of spaces to use for one level of indentation.
    pub fn new(tab_width: usize) -> PrettyPrinter {
        PrettyPrinter {
            fragments: Vec::new(),
            indent: 0,
            tab_width,
        }
    }

    /// Increase the indentation level by 1.
    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation level by 1.
    ///
    /// The function will not decrease the indent lower than 0.
    pub fn decrease_indent(&mut self) {
        if self.indent == 0 {
            return;
        }
        self.indent -= 1;
    }

    /// Return the length of the current indentation in spaces.
    fn indent_length(&self) -> usize {
        self.indent * self.tab_width
    }

    /// Append `token` to the output.
    ///
    /// # Arguments
    ///
    /// * `token` - The string slice to append.
    pub fn write_token(&mut self, token: &str) {
        if !token.is_empty() {
            self.fragments.push(String::from(token));
        }
    }

    /// Write a line break followed by the indentation for the current level.
    pub fn write_newline(&mut self) {
        let column = self.indent_length();
        self.write_newline_at(column);
    }

    /// Write a line break followed by exactly `column` spaces.  Use this form to align
    /// continuation lines under an earlier position on the previous line.
    ///
    /// # Arguments
    ///
    /// * `column` - The number of spaces that start the new line.
    pub fn write_newline_at(&mut self, column: usize) {
        self.fragments.push(format!("\n{}", " ".repeat(column)));
    }

    /// Return the number of characters written since the last line break.
    pub fn current_column(&self) -> usize {
        let mut count = 0;
        for fragment in self.fragments.iter().rev() {
            match fragment.rfind('\n') {
                Some(index) => {
                    count += fragment[index + 1..].chars().count();
                    break;
                }
                None => count += fragment.chars().count(),
            }
        }
        count
    }

    /// Return true if nothing has been written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Return true if the last `count` fragments contain nothing but whitespace.  A printer
    /// holding fewer than `count` fragments only checks the fragments it has.
    ///
    /// # Arguments
    ///
    /// * `count` - The number of trailing fragments to examine.
    pub fn trailing_fragments_blank(&self, count: usize) -> bool {
        self.fragments
            .iter()
            .rev()
            .take(count)
            .all(|fragment| fragment.trim().is_empty())
    }

    /// Return the text written so far.
    pub fn contents(&self) -> String {
        self.fragments.concat()
    }

    /// Reset the printer output and indentation.
    pub fn reset(&mut self) {
        self.fragments.clear();
        self.indent = 0;
    }

    /// Return the text written so far and reset the printer.
    pub fn take_contents(&mut self) -> String {
        let contents = self.contents();
        self.reset();
        contents
    }
}
