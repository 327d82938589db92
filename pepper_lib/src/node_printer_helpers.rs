//! The `node_printer_helpers` module contains common algorithms for printing lists of nodes.

use crate::ast::Stmt;
use crate::error::PepperError;
use crate::node_printer::{Formatter, NodePrinter};

/// The ways a comma separated list can be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    /// All elements on one line, separated by `", "`.
    Inline,

    /// One element per line, each continuation line aligned under the first element.
    Aligned,
}

/// Return the layout for a list of `count` elements when lists of `threshold` or more elements
/// should wrap.
///
/// # Arguments
///
/// * `count` - The number of elements in the list.
/// * `threshold` - The smallest element count that selects [`ListLayout::Aligned`].
pub fn layout_for_count(count: usize, threshold: usize) -> ListLayout {
    if count < threshold {
        ListLayout::Inline
    } else {
        ListLayout::Aligned
    }
}

/// Helper function to print out the elements of a list using a closure to print each element and
/// a closure to write the content between elements.
///
/// # Arguments
///
/// * `f` - The [`Formatter`] receiving the output.
/// * `items` - The elements to print.
/// * `node_printer` - The closure that prints each element.
/// * `inter_node_formatter` - The closure that prints the content between two elements.
pub fn print_list_with_separator_formatter<'a, I, T, F, S>(
    f: &mut Formatter<'a>,
    items: I,
    mut node_printer: F,
    mut inter_node_formatter: S,
) -> Result<(), PepperError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&mut Formatter<'a>, T) -> Result<(), PepperError>,
    S: FnMut(&mut Formatter<'a>),
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            inter_node_formatter(f);
        }
        node_printer(f, item)?;
    }
    Ok(())
}

/// Print each node in `nodes`, writing `separator` between them.
pub fn print_separated<'a, N: NodePrinter>(
    f: &mut Formatter<'a>,
    nodes: &'a [N],
    separator: &str,
) -> Result<(), PepperError> {
    print_list_with_separator_formatter(f, nodes, |f, n| f.render(n), |f| f.write(separator))
}

/// Print each node in `nodes` separated by `", "`.
pub fn print_comma_separated<'a, N: NodePrinter>(
    f: &mut Formatter<'a>,
    nodes: &'a [N],
) -> Result<(), PepperError> {
    print_separated(f, nodes, ", ")
}

/// Print the elements of `items` with `layout`.
///
/// The aligned layout captures the current column before the first element and starts every
/// later element on a new line at that column, after a bare `,`.
///
/// # Arguments
///
/// * `f` - The [`Formatter`] receiving the output.
/// * `items` - The elements to print.
/// * `layout` - The [`ListLayout`] to use.
/// * `node_printer` - The closure that prints each element.
pub fn print_list_with_layout<'a, I, T, F>(
    f: &mut Formatter<'a>,
    items: I,
    layout: ListLayout,
    node_printer: F,
) -> Result<(), PepperError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&mut Formatter<'a>, T) -> Result<(), PepperError>,
{
    match layout {
        ListLayout::Inline => {
            print_list_with_separator_formatter(f, items, node_printer, |f| f.write(", "))
        }
        ListLayout::Aligned => {
            let column = f.current_column();
            print_list_with_separator_formatter(f, items, node_printer, |f| {
                f.write(",");
                f.newline_at(column);
            })
        }
    }
}

/// Print a sequence of statements, one per line at the current indentation level.
pub fn print_statement_list<'a>(
    f: &mut Formatter<'a>,
    statements: &'a [Stmt],
) -> Result<(), PepperError> {
    print_list_with_separator_formatter(f, statements, |f, s| f.render(s), |f| f.newline())
}

/// Print the body of a compound statement on the following lines, one level deeper.
///
/// # Arguments
///
/// * `f` - The [`Formatter`] receiving the output.
/// * `statements` - The body.
/// * `owner` - The name of the construct that owns the body, used in the error for an empty body.
pub fn print_indented_block<'a>(
    f: &mut Formatter<'a>,
    statements: &'a [Stmt],
    owner: &str,
) -> Result<(), PepperError> {
    if statements.is_empty() {
        return Err(PepperError::MalformedTree(format!(
            "{owner} has an empty body"
        )));
    }
    f.indented(|f| print_statement_list(f, statements))
}
