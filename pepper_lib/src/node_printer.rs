//! The `node_printer` module contains the [`NodePrinter`] trait and the [`Formatter`] that node
//! printers write through.
//!
//! A [`Formatter`] exists for the duration of one conversion.  It borrows the shared
//! [`PrettyPrinter`] and keeps the chain of nodes currently being printed so that an expression
//! can inspect its parent when deciding whether it needs parentheses.

use crate::ast::{
    Alias, Arg, Arguments, Comprehension, ExceptHandler, Expr, Keyword, Module, Stmt, WithItem,
};
use crate::error::PepperError;
use crate::options::{FormatOptions, ParenthesizeMode};
use crate::precedence;
use crate::pretty_printer::PrettyPrinter;
use std::mem::discriminant;

/// A borrowed reference to any node that can appear on the traversal stack.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Module(&'a Module),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Arguments(&'a Arguments),
    Arg(&'a Arg),
    Keyword(&'a Keyword),
    Alias(&'a Alias),
    Comprehension(&'a Comprehension),
    ExceptHandler(&'a ExceptHandler),
    WithItem(&'a WithItem),
}

/// Trait implemented by every node type the formatter can print.
pub trait NodePrinter {
    /// Return the reference pushed on the traversal stack while the node prints.
    fn node_ref(&self) -> NodeRef<'_>;

    /// Write the node to the formatter.
    ///
    /// # Arguments
    ///
    /// * `f` - The [`Formatter`] that receives the output.  Children should be printed with
    /// [`Formatter::render`] so that they appear on the traversal stack.
    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError>;
}

/// The per-conversion printing context.
pub struct Formatter<'a> {
    printer: &'a mut PrettyPrinter,
    options: &'a FormatOptions,
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Formatter<'a> {
    /// Create a new formatter with an empty traversal stack.
    ///
    /// # Arguments
    ///
    /// * `printer` - The [`PrettyPrinter`] that collects the output.
    /// * `options` - The [`FormatOptions`] that control layout.
    pub fn new(printer: &'a mut PrettyPrinter, options: &'a FormatOptions) -> Formatter<'a> {
        Formatter {
            printer,
            options,
            stack: Vec::new(),
        }
    }

    pub fn options(&self) -> &FormatOptions {
        self.options
    }

    /// Print `node` with the node pushed on the traversal stack.  The stack is popped whether or
    /// not printing succeeds.
    ///
    /// # Arguments
    ///
    /// * `node` - The node to print.
    pub fn render<N: NodePrinter>(&mut self, node: &'a N) -> Result<(), PepperError> {
        self.stacked(node.node_ref(), |f| node.print_node(f))
    }

    /// Print an expression.  Accepts boxed children through deref coercion.
    pub fn expr(&mut self, expr: &'a Expr) -> Result<(), PepperError> {
        self.render(expr)
    }

    /// Run `body` with `node` on top of the traversal stack.
    fn stacked<F>(&mut self, node: NodeRef<'a>, body: F) -> Result<(), PepperError>
    where
        F: FnOnce(&mut Self) -> Result<(), PepperError>,
    {
        self.stack.push(node);
        let result = body(self);
        self.stack.pop();
        result
    }

    /// Append `token` to the output.
    pub fn write(&mut self, token: &str) {
        self.printer.write_token(token);
    }

    /// Start a new line at the current indentation level.
    pub fn newline(&mut self) {
        self.printer.write_newline();
    }

    /// Start a new line indented by exactly `column` spaces.
    pub fn newline_at(&mut self, column: usize) {
        self.printer.write_newline_at(column);
    }

    pub fn current_column(&self) -> usize {
        self.printer.current_column()
    }

    pub fn indent_level(&self) -> usize {
        self.printer.indent
    }

    /// Increase the indentation level, start a new line and run `body`.  The indentation level
    /// is restored whether or not `body` succeeds.
    ///
    /// # Arguments
    ///
    /// * `body` - The closure that prints the indented content.
    pub fn indented<F>(&mut self, body: F) -> Result<(), PepperError>
    where
        F: FnOnce(&mut Self) -> Result<(), PepperError>,
    {
        self.printer.increase_indent();
        self.printer.write_newline();
        let result = body(self);
        self.printer.decrease_indent();
        result
    }

    /// Write `start`, run `body` and then write `end`.
    ///
    /// # Arguments
    ///
    /// * `start` - The opening delimiter.
    /// * `end` - The closing delimiter.
    /// * `body` - The closure that prints the enclosed content.
    pub fn enclosed<F>(&mut self, start: &str, end: &str, body: F) -> Result<(), PepperError>
    where
        F: FnOnce(&mut Self) -> Result<(), PepperError>,
    {
        self.write(start);
        body(self)?;
        self.write(end);
        Ok(())
    }

    /// Like [`Formatter::enclosed`], but the delimiters are only written when `condition` holds.
    pub fn enclosed_if<F>(
        &mut self,
        condition: bool,
        start: &str,
        end: &str,
        body: F,
    ) -> Result<(), PepperError>
    where
        F: FnOnce(&mut Self) -> Result<(), PepperError>,
    {
        if condition {
            self.enclosed(start, end, body)
        } else {
            body(self)
        }
    }

    /// Return the node being printed.
    pub fn current(&self) -> Option<NodeRef<'a>> {
        self.stack.last().copied()
    }

    /// Return the parent of the node being printed.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        if self.stack.len() < 2 {
            return None;
        }
        self.stack.get(self.stack.len() - 2).copied()
    }

    /// Return true if `expr`, the node currently on top of the stack, must be wrapped in
    /// parentheses.
    ///
    /// # Arguments
    ///
    /// * `expr` - The expression about to print.
    pub fn needs_parens(&self, expr: &Expr) -> bool {
        if let Expr::NamedExpr { .. } = expr {
            return true;
        }

        match self.options.parenthesize {
            ParenthesizeMode::SameKind => match expr {
                Expr::BinOp { .. }
                | Expr::BoolOp { .. }
                | Expr::UnaryOp { .. }
                | Expr::Compare { .. } => match self.parent() {
                    Some(NodeRef::Expr(parent)) => discriminant(parent) == discriminant(expr),
                    _ => false,
                },
                _ => false,
            },
            ParenthesizeMode::Precedence => match self.parent() {
                Some(parent) => precedence::needs_parens(parent, expr),
                None => false,
            },
        }
    }

    /// Make sure a definition starts after a blank line unless it opens the output or a blank
    /// line already precedes it.
    pub fn ensure_blank_line(&mut self) {
        if !self.printer.is_empty() && !self.printer.trailing_fragments_blank(2) {
            self.newline();
        }
    }
}
