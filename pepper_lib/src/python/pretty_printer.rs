//! The `python::pretty_printer` module provides the code to traverse a Python syntax tree and
//! print out the source code represented in the tree.

use crate::ast::*;
use crate::error::PepperError;
use crate::node_printer::{Formatter, NodePrinter, NodeRef};
use crate::node_printer_helpers::*;
use crate::operators::*;

/// One argument of a call or class definition.  Positional arguments and keywords print through
/// the same list layout.
#[derive(Clone, Copy)]
enum CallArgument<'a> {
    Positional(&'a Expr),
    Keyword(&'a Keyword),
}

/// One entry of a parameter list.
#[derive(Clone, Copy)]
enum Parameter<'a> {
    Plain(&'a Arg, Option<&'a Expr>),
    PositionalOnlyMarker,
    KeywordOnlyMarker,
    VarArg(&'a Arg),
    KwArg(&'a Arg),
}

/// Return true if Python prints `c` as is in the `repr` of a string.
///
/// Separators other than the space, control and format characters, private use characters and
/// noncharacters are not printable.  Unassigned code points are not detected.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(c as u32,
        0x00ad
        | 0x0600..=0x0605
        | 0x061c
        | 0x06dd
        | 0x070f
        | 0x0890..=0x0891
        | 0x08e2
        | 0x180e
        | 0x200b..=0x200f
        | 0x202a..=0x202e
        | 0x2060..=0x2064
        | 0x2066..=0x206f
        | 0xe000..=0xf8ff
        | 0xfdd0..=0xfdef
        | 0xfeff
        | 0xfff9..=0xfffb
        | 0x110bd
        | 0x110cd
        | 0x13430..=0x1343f
        | 0x1bca0..=0x1bca3
        | 0x1d173..=0x1d17a
        | 0xe0001
        | 0xe0020..=0xe007f
        | 0xf0000..=0x10ffff)
        && (c as u32) & 0xfffe != 0xfffe
}

/// Append the `\x`, `\u` or `\U` escape for `c`.
fn push_code_point_escape(literal: &mut String, c: char) {
    let code = c as u32;
    if code <= 0xff {
        literal.push_str(&format!("\\x{code:02x}"));
    } else if code <= 0xffff {
        literal.push_str(&format!("\\u{code:04x}"));
    } else {
        literal.push_str(&format!("\\U{code:08x}"));
    }
}

/// Return `value` as a single-line Python string literal.
///
/// The literal uses single quotes unless the value contains a single quote and no double quote.
pub fn python_string_repr(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut literal = String::with_capacity(value.len() + 2);
    literal.push(quote);
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c == quote => {
                literal.push('\\');
                literal.push(c);
            }
            c if !is_printable(c) => push_code_point_escape(&mut literal, c),
            c => literal.push(c),
        }
    }
    literal.push(quote);
    literal
}

/// Return `value` as a triple double-quoted Python string literal with its line breaks kept.
///
/// A double quote is escaped when it ends the value or precedes another double quote, so no run
/// of quotes can close the literal early.
pub fn python_triple_quoted(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 6);
    literal.push_str("\"\"\"");
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' | '\t' => literal.push(c),
            '\\' => literal.push_str("\\\\"),
            '\r' => literal.push_str("\\r"),
            '"' if matches!(chars.peek(), None | Some('"')) => literal.push_str("\\\""),
            c if !is_printable(c) => push_code_point_escape(&mut literal, c),
            c => literal.push(c),
        }
    }
    literal.push_str("\"\"\"");
    literal
}

fn malformed(kind: &str, problem: &str) -> PepperError {
    PepperError::MalformedTree(format!("{kind}: {problem}"))
}

fn require_non_empty<T>(items: &[T], kind: &str, field: &str) -> Result<(), PepperError> {
    if items.is_empty() {
        return Err(malformed(kind, &format!("empty {field}")));
    }
    Ok(())
}

fn print_decorators<'a>(f: &mut Formatter<'a>, decorators: &'a [Expr]) -> Result<(), PepperError> {
    for decorator in decorators {
        f.write("@");
        f.expr(decorator)?;
        f.newline();
    }
    Ok(())
}

/// Write an `else:` block when `orelse` has statements.
fn print_else_block<'a>(
    f: &mut Formatter<'a>,
    orelse: &'a [Stmt],
    owner: &str,
) -> Result<(), PepperError> {
    if orelse.is_empty() {
        return Ok(());
    }
    f.newline();
    f.write("else:");
    print_indented_block(f, orelse, owner)
}

fn print_function_def<'a>(f: &mut Formatter<'a>, def: &'a FunctionDef) -> Result<(), PepperError> {
    f.ensure_blank_line();
    print_decorators(f, &def.decorator_list)?;
    if def.is_async {
        f.write("async ");
    }
    f.write("def ");
    f.write(&def.name);
    f.enclosed("(", ")", |f| f.render(&def.args))?;
    if let Some(returns) = &def.returns {
        f.write(" -> ");
        f.expr(returns)?;
    }
    f.write(":");
    print_indented_block(f, &def.body, "FunctionDef")?;
    f.newline();
    Ok(())
}

fn print_class_def<'a>(f: &mut Formatter<'a>, def: &'a ClassDef) -> Result<(), PepperError> {
    f.ensure_blank_line();
    print_decorators(f, &def.decorator_list)?;
    f.write("class ");
    f.write(&def.name);
    let arguments = call_arguments(&def.bases, &def.keywords);
    f.enclosed("(", ")", |f| {
        print_list_with_layout(f, arguments, ListLayout::Inline, print_call_argument)
    })?;
    f.write(":");
    print_indented_block(f, &def.body, "ClassDef")?;
    f.newline();
    Ok(())
}

fn print_if<'a>(
    f: &mut Formatter<'a>,
    test: &'a Expr,
    body: &'a [Stmt],
    orelse: &'a [Stmt],
) -> Result<(), PepperError> {
    let (mut test, mut body, mut orelse) = (test, body, orelse);
    f.write("if ");
    loop {
        f.expr(test)?;
        f.write(":");
        print_indented_block(f, body, "If")?;
        match orelse {
            [] => return Ok(()),
            [Stmt::If {
                test: next_test,
                body: next_body,
                orelse: next_orelse,
            }] => {
                f.newline();
                f.write("elif ");
                test = next_test;
                body = next_body.as_slice();
                orelse = next_orelse.as_slice();
            }
            _ => return print_else_block(f, orelse, "If"),
        }
    }
}

fn print_try<'a>(
    f: &mut Formatter<'a>,
    body: &'a [Stmt],
    handlers: &'a [ExceptHandler],
    orelse: &'a [Stmt],
    finalbody: &'a [Stmt],
) -> Result<(), PepperError> {
    if handlers.is_empty() && finalbody.is_empty() {
        return Err(malformed("Try", "no except or finally clause"));
    }

    // A try/finally wrapping a single try/except prints as one statement.
    if let [inner @ Stmt::Try {
        handlers: inner_handlers,
        finalbody: inner_finalbody,
        ..
    }] = body
    {
        if handlers.is_empty()
            && orelse.is_empty()
            && !inner_handlers.is_empty()
            && inner_finalbody.is_empty()
        {
            f.render(inner)?;
            f.newline();
            f.write("finally:");
            return print_indented_block(f, finalbody, "Try");
        }
    }

    f.write("try:");
    print_indented_block(f, body, "Try")?;
    for handler in handlers {
        f.newline();
        f.render(handler)?;
    }
    print_else_block(f, orelse, "Try")?;
    if !finalbody.is_empty() {
        f.newline();
        f.write("finally:");
        print_indented_block(f, finalbody, "Try")?;
    }
    Ok(())
}

fn print_import_from<'a>(
    f: &mut Formatter<'a>,
    module: &Option<String>,
    names: &'a [Alias],
    level: usize,
) -> Result<(), PepperError> {
    if module.is_none() && level == 0 {
        return Err(malformed("ImportFrom", "no module and no relative level"));
    }
    require_non_empty(names, "ImportFrom", "names")?;
    f.write("from ");
    f.write(&".".repeat(level));
    if let Some(module) = module {
        f.write(module);
    }
    f.write(" import ");
    print_comma_separated(f, names)
}

fn print_print<'a>(
    f: &mut Formatter<'a>,
    dest: &'a Option<Expr>,
    values: &'a [Expr],
    nl: bool,
) -> Result<(), PepperError> {
    f.write("print");
    if dest.is_some() || !values.is_empty() {
        f.write(" ");
    }
    if let Some(dest) = dest {
        f.write(">> ");
        f.expr(dest)?;
        if !values.is_empty() {
            f.write(", ");
        }
    }
    print_comma_separated(f, values)?;
    if !nl {
        f.write(",");
    }
    Ok(())
}

impl NodePrinter for Module {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Module(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        print_statement_list(f, &self.body)
    }
}

impl NodePrinter for Stmt {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Stmt(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        match self {
            Stmt::FunctionDef(def) => print_function_def(f, def),
            Stmt::ClassDef(def) => print_class_def(f, def),
            Stmt::Return { value } => {
                f.write("return");
                if let Some(value) = value {
                    f.write(" ");
                    f.expr(value)?;
                }
                Ok(())
            }
            Stmt::Delete { targets } => {
                require_non_empty(targets, "Delete", "targets")?;
                f.write("del ");
                print_comma_separated(f, targets)
            }
            Stmt::Assign { targets, value } => {
                require_non_empty(targets, "Assign", "targets")?;
                print_separated(f, targets, " = ")?;
                f.write(" = ");
                f.expr(value)
            }
            Stmt::AugAssign { target, op, value } => {
                f.expr(target)?;
                f.write(&format!(" {}= ", binary_operator_symbol(*op)));
                f.expr(value)
            }
            Stmt::AnnAssign {
                target,
                annotation,
                value,
                simple,
            } => {
                let parenthesized = !simple && matches!(target, Expr::Name { .. });
                f.enclosed_if(parenthesized, "(", ")", |f| f.expr(target))?;
                f.write(": ");
                f.expr(annotation)?;
                if let Some(value) = value {
                    f.write(" = ");
                    f.expr(value)?;
                }
                Ok(())
            }
            Stmt::For {
                is_async,
                target,
                iter,
                body,
                orelse,
            } => {
                if *is_async {
                    f.write("async ");
                }
                f.write("for ");
                f.expr(target)?;
                f.write(" in ");
                f.expr(iter)?;
                f.write(":");
                print_indented_block(f, body, "For")?;
                print_else_block(f, orelse, "For")
            }
            Stmt::While { test, body, orelse } => {
                f.write("while ");
                f.expr(test)?;
                f.write(":");
                print_indented_block(f, body, "While")?;
                print_else_block(f, orelse, "While")
            }
            Stmt::If { test, body, orelse } => print_if(f, test, body, orelse),
            Stmt::With {
                is_async,
                items,
                body,
            } => {
                require_non_empty(items, "With", "items")?;
                if *is_async {
                    f.write("async ");
                }
                f.write("with ");
                print_comma_separated(f, items)?;
                f.write(":");
                print_indented_block(f, body, "With")
            }
            Stmt::Raise { exc, cause } => {
                f.write("raise");
                match (exc, cause) {
                    (Some(exc), cause) => {
                        f.write(" ");
                        f.expr(exc)?;
                        if let Some(cause) = cause {
                            f.write(" from ");
                            f.expr(cause)?;
                        }
                        Ok(())
                    }
                    (None, Some(_)) => Err(malformed("Raise", "cause without exception")),
                    (None, None) => Ok(()),
                }
            }
            Stmt::Try {
                body,
                handlers,
                orelse,
                finalbody,
            } => print_try(f, body, handlers, orelse, finalbody),
            Stmt::Assert { test, msg } => {
                f.write("assert ");
                f.expr(test)?;
                if let Some(msg) = msg {
                    f.write(", ");
                    f.expr(msg)?;
                }
                Ok(())
            }
            Stmt::Import { names } => {
                require_non_empty(names, "Import", "names")?;
                f.write("import ");
                print_comma_separated(f, names)
            }
            Stmt::ImportFrom {
                module,
                names,
                level,
            } => print_import_from(f, module, names, *level),
            Stmt::Global { names } => {
                require_non_empty(names, "Global", "names")?;
                f.write("global ");
                f.write(&names.join(", "));
                Ok(())
            }
            Stmt::Nonlocal { names } => {
                require_non_empty(names, "Nonlocal", "names")?;
                f.write("nonlocal ");
                f.write(&names.join(", "));
                Ok(())
            }
            Stmt::Expr { value } => f.expr(value),
            Stmt::Pass => {
                f.write("pass");
                Ok(())
            }
            Stmt::Break => {
                f.write("break");
                Ok(())
            }
            Stmt::Continue => {
                f.write("continue");
                Ok(())
            }
            Stmt::Print { dest, values, nl } => print_print(f, dest, values, *nl),
        }
    }
}

fn call_arguments<'a>(args: &'a [Expr], keywords: &'a [Keyword]) -> Vec<CallArgument<'a>> {
    args.iter()
        .map(CallArgument::Positional)
        .chain(keywords.iter().map(CallArgument::Keyword))
        .collect()
}

fn print_call_argument<'a>(
    f: &mut Formatter<'a>,
    argument: CallArgument<'a>,
) -> Result<(), PepperError> {
    match argument {
        CallArgument::Positional(expr) => f.expr(expr),
        CallArgument::Keyword(keyword) => f.render(keyword),
    }
}

fn print_call<'a>(
    f: &mut Formatter<'a>,
    func: &'a Expr,
    args: &'a [Expr],
    keywords: &'a [Keyword],
) -> Result<(), PepperError> {
    f.expr(func)?;
    let arguments = call_arguments(args, keywords);
    let layout = layout_for_count(arguments.len(), f.options().call_wrap_threshold);
    f.enclosed("(", ")", |f| {
        print_list_with_layout(f, arguments, layout, print_call_argument)
    })
}

fn print_dict_item<'a>(f: &mut Formatter<'a>, item: &'a DictItem) -> Result<(), PepperError> {
    match &item.key {
        Some(key) => {
            f.expr(key)?;
            f.write(": ");
        }
        None => f.write("**"),
    }
    f.expr(&item.value)
}

fn print_comprehension<'a>(
    f: &mut Formatter<'a>,
    start: &str,
    end: &str,
    elt: &'a Expr,
    generators: &'a [Comprehension],
) -> Result<(), PepperError> {
    require_non_empty(generators, "comprehension", "generators")?;
    f.enclosed(start, end, |f| {
        f.expr(elt)?;
        for generator in generators {
            f.render(generator)?;
        }
        Ok(())
    })
}

fn print_tuple<'a>(f: &mut Formatter<'a>, tuple: &Expr, elts: &'a [Expr]) -> Result<(), PepperError> {
    let subscript_index = match f.parent() {
        Some(NodeRef::Expr(Expr::Subscript { slice, .. })) => std::ptr::eq(&**slice, tuple),
        _ => false,
    };
    let bare = subscript_index && !elts.is_empty();
    f.enclosed_if(!bare, "(", ")", |f| {
        print_comma_separated(f, elts)?;
        if elts.len() == 1 {
            f.write(",");
        }
        Ok(())
    })
}

fn print_constant(f: &mut Formatter, constant: &Constant) {
    match constant {
        Constant::Str(value) => {
            if value.contains('\n') && value != "\n" {
                f.write(&python_triple_quoted(value));
            } else {
                f.write(&python_string_repr(value));
            }
        }
        // Infinite floats have no literal of their own.
        Constant::Number(text) if text == "inf" => f.write("1e309"),
        Constant::Number(text) if text == "infj" => f.write("1e309j"),
        Constant::Bytes(text) | Constant::Number(text) | Constant::Named(text) => f.write(text),
        Constant::Ellipsis => f.write("..."),
    }
}

fn is_integer_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Constant(Constant::Number(text)) => text.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn print_expression<'a>(f: &mut Formatter<'a>, expr: &'a Expr) -> Result<(), PepperError> {
    match expr {
        Expr::BoolOp { op, values } => {
            if values.len() < 2 {
                return Err(malformed("BoolOp", "fewer than two values"));
            }
            print_separated(f, values, &format!(" {} ", bool_operator_symbol(*op)))
        }
        Expr::NamedExpr { target, value } => {
            f.expr(target)?;
            f.write(" := ");
            f.expr(value)
        }
        Expr::BinOp { left, op, right } => {
            f.expr(left)?;
            f.write(&format!(" {} ", binary_operator_symbol(*op)));
            f.expr(right)
        }
        Expr::UnaryOp { op, operand } => {
            f.write(unary_operator_symbol(*op));
            if *op == UnaryOperator::Not {
                f.write(" ");
            }
            f.expr(operand)
        }
        Expr::Lambda { args, body } => {
            f.write("lambda");
            if !args.is_empty() {
                f.write(" ");
            }
            f.render(&**args)?;
            f.write(": ");
            f.expr(body)
        }
        Expr::IfExp { test, body, orelse } => {
            f.expr(body)?;
            f.write(" if ");
            f.expr(test)?;
            f.write(" else ");
            f.expr(orelse)
        }
        Expr::Dict { items } => f.enclosed("{", "}", |f| {
            print_list_with_layout(f, items, ListLayout::Aligned, print_dict_item)
        }),
        Expr::Set { elts } => {
            require_non_empty(elts, "Set", "elts")?;
            f.enclosed("{", "}", |f| print_comma_separated(f, elts))
        }
        Expr::ListComp { elt, generators } => print_comprehension(f, "[", "]", elt, generators),
        Expr::SetComp { elt, generators } => print_comprehension(f, "{", "}", elt, generators),
        Expr::GeneratorExp { elt, generators } => {
            print_comprehension(f, "(", ")", elt, generators)
        }
        Expr::DictComp {
            key,
            value,
            generators,
        } => {
            require_non_empty(generators, "DictComp", "generators")?;
            f.enclosed("{", "}", |f| {
                f.expr(key)?;
                f.write(": ");
                f.expr(value)?;
                for generator in generators {
                    f.render(generator)?;
                }
                Ok(())
            })
        }
        Expr::Await { value } => {
            f.write("await ");
            f.expr(value)
        }
        Expr::Yield { value } => {
            f.write("yield");
            if let Some(value) = value {
                f.write(" ");
                f.expr(value)?;
            }
            Ok(())
        }
        Expr::YieldFrom { value } => {
            f.write("yield from ");
            f.expr(value)
        }
        Expr::Compare {
            left,
            ops,
            comparators,
        } => {
            if ops.is_empty() || ops.len() != comparators.len() {
                return Err(malformed(
                    "Compare",
                    "operators and comparators differ in length",
                ));
            }
            f.expr(left)?;
            for (op, comparator) in ops.iter().zip(comparators) {
                f.write(&format!(" {} ", comparison_operator_symbol(*op)));
                f.expr(comparator)?;
            }
            Ok(())
        }
        Expr::Call {
            func,
            args,
            keywords,
        } => print_call(f, func, args, keywords),
        Expr::Constant(constant) => {
            print_constant(f, constant);
            Ok(())
        }
        Expr::Attribute { value, attr } => {
            f.enclosed_if(is_integer_literal(value), "(", ")", |f| f.expr(value))?;
            f.write(".");
            f.write(attr);
            Ok(())
        }
        Expr::Subscript { value, slice } => {
            f.expr(value)?;
            f.enclosed("[", "]", |f| f.expr(slice))
        }
        Expr::Starred { value } => {
            f.write("*");
            f.expr(value)
        }
        Expr::Name { id } => {
            f.write(id);
            Ok(())
        }
        Expr::List { elts } => f.enclosed("[", "]", |f| print_comma_separated(f, elts)),
        Expr::Tuple { elts } => print_tuple(f, expr, elts),
        Expr::Slice { lower, upper, step } => {
            if let Some(lower) = lower {
                f.expr(lower)?;
            }
            f.write(":");
            if let Some(upper) = upper {
                f.expr(upper)?;
            }
            if let Some(step) = step {
                f.write(":");
                f.expr(step)?;
            }
            Ok(())
        }
        Expr::Repr { value } => f.enclosed("`", "`", |f| f.expr(value)),
    }
}

impl NodePrinter for Expr {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Expr(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        let parenthesized = f.needs_parens(self);
        f.enclosed_if(parenthesized, "(", ")", |f| print_expression(f, self))
    }
}

fn parameters(arguments: &Arguments) -> Result<Vec<Parameter<'_>>, PepperError> {
    let positional: Vec<&Arg> = arguments
        .posonlyargs
        .iter()
        .chain(arguments.args.iter())
        .collect();
    if arguments.defaults.len() > positional.len() {
        return Err(malformed(
            "arguments",
            "more defaults than positional parameters",
        ));
    }
    if !arguments.kw_defaults.is_empty() && arguments.kw_defaults.len() != arguments.kwonlyargs.len()
    {
        return Err(malformed(
            "arguments",
            "keyword defaults differ in length from keyword-only parameters",
        ));
    }

    let first_default = positional.len() - arguments.defaults.len();
    let mut parameters = Vec::new();
    for (i, arg) in positional.into_iter().enumerate() {
        let default = match i.checked_sub(first_default) {
            Some(index) => arguments.defaults.get(index),
            None => None,
        };
        parameters.push(Parameter::Plain(arg, default));
        if i + 1 == arguments.posonlyargs.len() {
            parameters.push(Parameter::PositionalOnlyMarker);
        }
    }

    match &arguments.vararg {
        Some(vararg) => parameters.push(Parameter::VarArg(vararg)),
        None if !arguments.kwonlyargs.is_empty() => {
            parameters.push(Parameter::KeywordOnlyMarker)
        }
        None => {}
    }

    for (i, arg) in arguments.kwonlyargs.iter().enumerate() {
        let default = arguments.kw_defaults.get(i).and_then(|d| d.as_ref());
        parameters.push(Parameter::Plain(arg, default));
    }

    if let Some(kwarg) = &arguments.kwarg {
        parameters.push(Parameter::KwArg(kwarg));
    }

    Ok(parameters)
}

fn print_parameter<'a>(f: &mut Formatter<'a>, parameter: Parameter<'a>) -> Result<(), PepperError> {
    match parameter {
        Parameter::Plain(arg, default) => {
            f.render(arg)?;
            if let Some(default) = default {
                f.write(if arg.annotation.is_some() { " = " } else { "=" });
                f.expr(default)?;
            }
            Ok(())
        }
        Parameter::PositionalOnlyMarker => {
            f.write("/");
            Ok(())
        }
        Parameter::KeywordOnlyMarker => {
            f.write("*");
            Ok(())
        }
        Parameter::VarArg(arg) => {
            f.write("*");
            f.render(arg)
        }
        Parameter::KwArg(arg) => {
            f.write("**");
            f.render(arg)
        }
    }
}

impl NodePrinter for Arguments {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Arguments(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        let parameters = parameters(self)?;
        print_list_with_layout(f, parameters, ListLayout::Inline, print_parameter)
    }
}

impl NodePrinter for Arg {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Arg(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        f.write(&self.arg);
        if let Some(annotation) = &self.annotation {
            f.write(": ");
            f.expr(annotation)?;
        }
        Ok(())
    }
}

impl NodePrinter for Keyword {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Keyword(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        match &self.arg {
            Some(name) => {
                f.write(name);
                f.write("=");
            }
            None => f.write("**"),
        }
        f.expr(&self.value)
    }
}

impl NodePrinter for Alias {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Alias(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        f.write(&self.name);
        if let Some(asname) = &self.asname {
            f.write(" as ");
            f.write(asname);
        }
        Ok(())
    }
}

impl NodePrinter for Comprehension {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::Comprehension(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        f.write(if self.is_async { " async for " } else { " for " });
        f.expr(&self.target)?;
        f.write(" in ");
        f.expr(&self.iter)?;
        for condition in &self.ifs {
            f.write(" if ");
            f.expr(condition)?;
        }
        Ok(())
    }
}

impl NodePrinter for ExceptHandler {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::ExceptHandler(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        f.write("except");
        match (&self.exception_type, &self.name) {
            (Some(exception_type), name) => {
                f.write(" ");
                f.expr(exception_type)?;
                if let Some(name) = name {
                    f.write(" as ");
                    f.write(name);
                }
            }
            (None, Some(_)) => return Err(malformed("ExceptHandler", "name without type")),
            (None, None) => {}
        }
        f.write(":");
        print_indented_block(f, &self.body, "ExceptHandler")
    }
}

impl NodePrinter for WithItem {
    fn node_ref(&self) -> NodeRef<'_> {
        NodeRef::WithItem(self)
    }

    fn print_node<'a>(&'a self, f: &mut Formatter<'a>) -> Result<(), PepperError> {
        f.expr(&self.context_expr)?;
        if let Some(optional_vars) = &self.optional_vars {
            f.write(" as ");
            f.expr(optional_vars)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FormatOptions, ParenthesizeMode};
    use crate::unparser::Pepper;
    use pretty_assertions::assert_eq;

    fn name(id: &str) -> Expr {
        Expr::Name {
            id: String::from(id),
        }
    }

    fn num(n: &str) -> Expr {
        Expr::Constant(Constant::Number(String::from(n)))
    }

    fn string(s: &str) -> Expr {
        Expr::Constant(Constant::Str(String::from(s)))
    }

    fn binop(left: Expr, op: Operator, right: Expr) -> Expr {
        Expr::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    fn bool_op(op: BoolOperator, values: Vec<Expr>) -> Expr {
        Expr::BoolOp { op, values }
    }

    fn call(func: &str, args: Vec<Expr>, keywords: Vec<Keyword>) -> Expr {
        Expr::Call {
            func: Box::new(name(func)),
            args,
            keywords,
        }
    }

    fn keyword(arg: &str, value: Expr) -> Keyword {
        Keyword {
            arg: Some(String::from(arg)),
            value,
        }
    }

    fn arg(id: &str) -> Arg {
        Arg {
            arg: String::from(id),
            annotation: None,
        }
    }

    fn expr_stmt(value: Expr) -> Stmt {
        Stmt::Expr { value }
    }

    fn assign(target: &str, value: Expr) -> Stmt {
        Stmt::Assign {
            targets: vec![name(target)],
            value,
        }
    }

    fn function(name: &str, args: Arguments, body: Vec<Stmt>) -> Stmt {
        Stmt::FunctionDef(FunctionDef {
            is_async: false,
            name: String::from(name),
            args,
            body,
            decorator_list: vec![],
            returns: None,
        })
    }

    fn render_with(options: FormatOptions, body: Vec<Stmt>) -> String {
        Pepper::new(options).render(&Module { body }).unwrap()
    }

    fn render(body: Vec<Stmt>) -> String {
        render_with(FormatOptions::default(), body)
    }

    fn render_precedence(body: Vec<Stmt>) -> String {
        let options = FormatOptions {
            parenthesize: ParenthesizeMode::Precedence,
            ..FormatOptions::default()
        };
        render_with(options, body)
    }

    fn render_error(body: Vec<Stmt>) -> PepperError {
        match Pepper::default().render(&Module { body }) {
            Err(e) => e,
            Ok(text) => panic!("expected an error, rendered {text:?}"),
        }
    }

    #[test]
    fn test_call_below_threshold_is_inline() {
        let args = ["1", "2", "3", "4"].iter().map(|n| num(n)).collect();
        assert_eq!(render(vec![expr_stmt(call("f", args, vec![]))]), "f(1, 2, 3, 4)");
    }

    #[test]
    fn test_call_at_threshold_is_aligned() {
        let args = ["1", "2", "3", "4", "5"].iter().map(|n| num(n)).collect();
        assert_eq!(
            render(vec![expr_stmt(call("f", args, vec![]))]),
            "f(1,\n  2,\n  3,\n  4,\n  5)"
        );
    }

    #[test]
    fn test_call_counts_keywords_and_spreads() {
        let args = vec![
            name("a"),
            Expr::Starred {
                value: Box::new(name("rest")),
            },
        ];
        let keywords = vec![
            keyword("key", num("1")),
            Keyword {
                arg: None,
                value: name("options"),
            },
        ];
        assert_eq!(
            render(vec![assign("x", call("run", args.clone(), keywords.clone()))]),
            "x = run(a, *rest, key=1, **options)"
        );

        let mut more = args;
        more.push(name("b"));
        assert_eq!(
            render(vec![assign("x", call("run", more, keywords))]),
            "x = run(a,\n        *rest,\n        b,\n        key=1,\n        **options)"
        );
    }

    #[test]
    fn test_call_threshold_from_options() {
        let options = FormatOptions {
            call_wrap_threshold: 2,
            ..FormatOptions::default()
        };
        let body = vec![expr_stmt(call("f", vec![name("a"), name("b")], vec![]))];
        assert_eq!(render_with(options, body), "f(a,\n  b)");
    }

    #[test]
    fn test_dict_is_always_aligned() {
        let dict = Expr::Dict {
            items: vec![
                DictItem {
                    key: Some(num("1")),
                    value: num("2"),
                },
                DictItem {
                    key: Some(num("3")),
                    value: num("4"),
                },
            ],
        };
        assert_eq!(render(vec![expr_stmt(dict)]), "{1: 2,\n 3: 4}");

        let spread = Expr::Dict {
            items: vec![
                DictItem {
                    key: Some(string("a")),
                    value: num("1"),
                },
                DictItem {
                    key: None,
                    value: name("rest"),
                },
            ],
        };
        assert_eq!(
            render(vec![assign("d", spread)]),
            "d = {'a': 1,\n     **rest}"
        );
        assert_eq!(render(vec![expr_stmt(Expr::Dict { items: vec![] })]), "{}");
    }

    #[test]
    fn test_tuples() {
        let single = Expr::Tuple {
            elts: vec![num("1")],
        };
        assert_eq!(render(vec![expr_stmt(single)]), "(1,)");
        assert_eq!(render(vec![expr_stmt(Expr::Tuple { elts: vec![] })]), "()");
        let pair = Expr::Tuple {
            elts: vec![name("a"), name("b")],
        };
        assert_eq!(render(vec![assign("t", pair)]), "t = (a, b)");
    }

    #[test]
    fn test_subscript_tuple_is_bare() {
        let subscript = Expr::Subscript {
            value: Box::new(name("a")),
            slice: Box::new(Expr::Tuple {
                elts: vec![
                    Expr::Slice {
                        lower: Some(Box::new(num("1"))),
                        upper: Some(Box::new(num("2"))),
                        step: None,
                    },
                    num("3"),
                ],
            }),
        };
        assert_eq!(render(vec![expr_stmt(subscript)]), "a[1:2, 3]");
    }

    #[test]
    fn test_slices() {
        let step_only = Expr::Subscript {
            value: Box::new(name("a")),
            slice: Box::new(Expr::Slice {
                lower: None,
                upper: None,
                step: Some(Box::new(num("2"))),
            }),
        };
        let lower_only = Expr::Subscript {
            value: Box::new(name("a")),
            slice: Box::new(Expr::Slice {
                lower: Some(Box::new(num("1"))),
                upper: None,
                step: None,
            }),
        };
        assert_eq!(
            render(vec![expr_stmt(step_only), expr_stmt(lower_only)]),
            "a[::2]\na[1:]"
        );
    }

    #[test]
    fn test_elif_chain() {
        let chain = Stmt::If {
            test: name("a"),
            body: vec![Stmt::Pass],
            orelse: vec![Stmt::If {
                test: name("b"),
                body: vec![Stmt::Break],
                orelse: vec![Stmt::Continue],
            }],
        };
        assert_eq!(
            render(vec![chain]),
            "if a:\n    pass\nelif b:\n    break\nelse:\n    continue"
        );
    }

    #[test]
    fn test_else_with_several_statements_is_not_elif() {
        let nested = Stmt::If {
            test: name("a"),
            body: vec![Stmt::Pass],
            orelse: vec![
                Stmt::If {
                    test: name("b"),
                    body: vec![Stmt::Pass],
                    orelse: vec![],
                },
                Stmt::Break,
            ],
        };
        assert_eq!(
            render(vec![nested]),
            "if a:\n    pass\nelse:\n    if b:\n        pass\n    break"
        );
    }

    #[test]
    fn test_one_blank_line_between_functions() {
        let short = function("f", Arguments::default(), vec![Stmt::Pass]);
        let long = function(
            "g",
            Arguments::default(),
            vec![assign("x", num("1")), Stmt::Return { value: Some(name("x")) }],
        );
        assert_eq!(
            render(vec![short, long]),
            "def f():\n    pass\n\ndef g():\n    x = 1\n    return x\n"
        );
    }

    #[test]
    fn test_blank_line_after_statement_before_function() {
        let body = vec![
            assign("x", num("1")),
            function("f", Arguments::default(), vec![Stmt::Pass]),
            expr_stmt(call("f", vec![], vec![])),
        ];
        assert_eq!(render(body), "x = 1\n\ndef f():\n    pass\n\nf()");
    }

    #[test]
    fn test_decorators_and_return_annotation() {
        let def = Stmt::FunctionDef(FunctionDef {
            is_async: true,
            name: String::from("fetch"),
            args: Arguments {
                args: vec![Arg {
                    arg: String::from("x"),
                    annotation: Some(name("int")),
                }],
                defaults: vec![num("1")],
                ..Arguments::default()
            },
            body: vec![Stmt::Return {
                value: Some(Expr::Await {
                    value: Box::new(name("x")),
                }),
            }],
            decorator_list: vec![name("cached")],
            returns: Some(name("str")),
        });
        assert_eq!(
            render(vec![def]),
            "@cached\nasync def fetch(x: int = 1) -> str:\n    return await x\n"
        );
    }

    #[test]
    fn test_parameter_kinds() {
        let args = Arguments {
            posonlyargs: vec![arg("a")],
            args: vec![arg("b"), arg("c")],
            vararg: Some(arg("args")),
            kwonlyargs: vec![arg("d"), arg("e")],
            kw_defaults: vec![None, Some(num("2"))],
            kwarg: Some(arg("kw")),
            defaults: vec![num("1")],
        };
        assert_eq!(
            render(vec![function("f", args, vec![Stmt::Pass])]),
            "def f(a, /, b, c=1, *args, d, e=2, **kw):\n    pass\n"
        );

        let keyword_only = Arguments {
            kwonlyargs: vec![arg("k")],
            kw_defaults: vec![None],
            ..Arguments::default()
        };
        assert_eq!(
            render(vec![function("h", keyword_only, vec![Stmt::Pass])]),
            "def h(*, k):\n    pass\n"
        );
    }

    #[test]
    fn test_too_many_defaults_is_malformed() {
        let args = Arguments {
            args: vec![arg("a")],
            defaults: vec![num("1"), num("2")],
            ..Arguments::default()
        };
        assert!(matches!(
            render_error(vec![function("f", args, vec![Stmt::Pass])]),
            PepperError::MalformedTree(_)
        ));
    }

    #[test]
    fn test_class_definition() {
        let class = Stmt::ClassDef(ClassDef {
            name: String::from("A"),
            bases: vec![name("B")],
            keywords: vec![keyword("metaclass", name("M"))],
            body: vec![Stmt::Pass],
            decorator_list: vec![],
        });
        assert_eq!(render(vec![class]), "class A(B, metaclass=M):\n    pass\n");
    }

    #[test]
    fn test_same_kind_parenthesization() {
        let grouped = binop(
            binop(name("a"), Operator::Add, name("b")),
            Operator::Mult,
            name("c"),
        );
        let mixed = binop(
            num("1"),
            Operator::Add,
            binop(num("2"), Operator::Mult, num("3")),
        );
        let unary = binop(
            Expr::UnaryOp {
                op: UnaryOperator::USub,
                operand: Box::new(name("x")),
            },
            Operator::Add,
            num("1"),
        );
        let logic = bool_op(
            BoolOperator::Or,
            vec![
                bool_op(BoolOperator::And, vec![name("a"), name("b")]),
                name("c"),
            ],
        );
        assert_eq!(
            render(vec![
                expr_stmt(grouped),
                expr_stmt(mixed),
                expr_stmt(unary),
                expr_stmt(logic)
            ]),
            "(a + b) * c\n1 + (2 * 3)\n-x + 1\n(a and b) or c"
        );
    }

    #[test]
    fn test_precedence_parenthesization() {
        let body = vec![
            assign(
                "x",
                binop(
                    num("1"),
                    Operator::Add,
                    binop(num("2"), Operator::Mult, num("3")),
                ),
            ),
            expr_stmt(binop(
                binop(name("a"), Operator::Add, name("b")),
                Operator::Mult,
                name("c"),
            )),
            expr_stmt(binop(
                name("a"),
                Operator::Sub,
                binop(name("b"), Operator::Sub, name("c")),
            )),
            expr_stmt(binop(
                Expr::UnaryOp {
                    op: UnaryOperator::USub,
                    operand: Box::new(name("x")),
                },
                Operator::Pow,
                num("2"),
            )),
        ];
        assert_eq!(
            render_precedence(body),
            "x = 1 + 2 * 3\n(a + b) * c\na - (b - c)\n(-x) ** 2"
        );
    }

    #[test]
    fn test_named_expression_is_always_parenthesized() {
        let walrus = Expr::NamedExpr {
            target: Box::new(name("y")),
            value: Box::new(num("1")),
        };
        assert_eq!(render(vec![expr_stmt(walrus.clone())]), "(y := 1)");
        assert_eq!(render_precedence(vec![expr_stmt(walrus)]), "(y := 1)");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(python_string_repr("plain"), "'plain'");
        assert_eq!(python_string_repr("it's"), "\"it's\"");
        assert_eq!(python_string_repr("a\"b'c"), "'a\"b\\'c'");
        assert_eq!(python_string_repr("tab\there"), "'tab\\there'");
        assert_eq!(python_string_repr("back\\slash"), "'back\\\\slash'");
        assert_eq!(python_string_repr("\u{7}"), "'\\x07'");
        assert_eq!(python_string_repr("naïve"), "'naïve'");
    }

    #[test]
    fn test_non_printable_characters_are_escaped() {
        assert_eq!(python_string_repr("a\u{a0}b"), "'a\\xa0b'");
        assert_eq!(python_string_repr("\u{200b}"), "'\\u200b'");
        assert_eq!(python_string_repr("\u{2028}\u{2029}"), "'\\u2028\\u2029'");
        assert_eq!(python_string_repr("\u{3000}"), "'\\u3000'");
        assert_eq!(python_string_repr("\u{feff}"), "'\\ufeff'");
        assert_eq!(python_string_repr("\u{ad}"), "'\\xad'");
        assert_eq!(python_string_repr("\u{e000}"), "'\\ue000'");
        assert_eq!(python_string_repr("\u{e0001}"), "'\\U000e0001'");
        assert_eq!(python_string_repr("\u{85}"), "'\\x85'");
        assert_eq!(python_string_repr("a b\u{e9}\u{4e2d}"), "'a b\u{e9}\u{4e2d}'");
        assert_eq!(python_string_repr("\u{1f600}"), "'\u{1f600}'");
    }

    #[test]
    fn test_multiline_strings() {
        assert_eq!(
            render(vec![expr_stmt(string("first\nsecond"))]),
            "\"\"\"first\nsecond\"\"\""
        );
        assert_eq!(render(vec![expr_stmt(string("\n"))]), "'\\n'");
    }

    #[test]
    fn test_multiline_string_quotes_and_backslashes() {
        assert_eq!(python_triple_quoted("line\nend\""), "\"\"\"line\nend\\\"\"\"\"");
        assert_eq!(python_triple_quoted("a\\n\nb"), "\"\"\"a\\\\n\nb\"\"\"");
        assert_eq!(
            python_triple_quoted("x\"\"\"y\nz"),
            "\"\"\"x\\\"\\\"\"y\nz\"\"\""
        );
        assert_eq!(python_triple_quoted("\"a\"\nb"), "\"\"\"\"a\"\nb\"\"\"");
        assert_eq!(
            python_triple_quoted("cr\r\nnbsp\u{a0}\ttab"),
            "\"\"\"cr\\r\nnbsp\\xa0\ttab\"\"\""
        );
        assert_eq!(
            render(vec![expr_stmt(string("say \"hi\"\nend\""))]),
            "\"\"\"say \"hi\"\nend\\\"\"\"\""
        );
    }

    #[test]
    fn test_constants() {
        let body = vec![
            expr_stmt(num("inf")),
            expr_stmt(Expr::Constant(Constant::Ellipsis)),
            expr_stmt(Expr::Constant(Constant::Named(String::from("None")))),
            expr_stmt(Expr::Constant(Constant::Bytes(String::from("b'\\x00'")))),
            expr_stmt(Expr::Attribute {
                value: Box::new(num("1")),
                attr: String::from("real"),
            }),
        ];
        assert_eq!(render(body), "1e309\n...\nNone\nb'\\x00'\n(1).real");
    }

    #[test]
    fn test_try_except_finally_is_combined() {
        let inner = Stmt::Try {
            body: vec![Stmt::Pass],
            handlers: vec![ExceptHandler {
                exception_type: Some(name("E")),
                name: Some(String::from("e")),
                body: vec![Stmt::Pass],
            }],
            orelse: vec![],
            finalbody: vec![],
        };
        let outer = Stmt::Try {
            body: vec![inner],
            handlers: vec![],
            orelse: vec![],
            finalbody: vec![Stmt::Break],
        };
        assert_eq!(
            render(vec![outer]),
            "try:\n    pass\nexcept E as e:\n    pass\nfinally:\n    break"
        );
    }

    #[test]
    fn test_try_with_all_clauses() {
        let stmt = Stmt::Try {
            body: vec![Stmt::Pass],
            handlers: vec![
                ExceptHandler {
                    exception_type: Some(name("E")),
                    name: None,
                    body: vec![Stmt::Pass],
                },
                ExceptHandler {
                    exception_type: None,
                    name: None,
                    body: vec![Stmt::Break],
                },
            ],
            orelse: vec![Stmt::Continue],
            finalbody: vec![Stmt::Pass],
        };
        assert_eq!(
            render(vec![stmt]),
            "try:\n    pass\nexcept E:\n    pass\nexcept:\n    break\nelse:\n    continue\nfinally:\n    pass"
        );
    }

    #[test]
    fn test_simple_statements() {
        let body = vec![
            Stmt::ImportFrom {
                module: Some(String::from("pkg")),
                names: vec![Alias {
                    name: String::from("a"),
                    asname: Some(String::from("b")),
                }],
                level: 2,
            },
            Stmt::Import {
                names: vec![
                    Alias {
                        name: String::from("os"),
                        asname: None,
                    },
                    Alias {
                        name: String::from("sys"),
                        asname: None,
                    },
                ],
            },
            Stmt::Raise {
                exc: Some(name("E")),
                cause: Some(name("err")),
            },
            Stmt::Assert {
                test: name("ok"),
                msg: Some(string("failed")),
            },
            Stmt::Delete {
                targets: vec![name("a"), name("b")],
            },
            Stmt::Global {
                names: vec![String::from("g"), String::from("h")],
            },
            Stmt::AugAssign {
                target: name("n"),
                op: Operator::FloorDiv,
                value: num("2"),
            },
            Stmt::Return { value: None },
        ];
        assert_eq!(
            render(body),
            "from ..pkg import a as b\nimport os, sys\nraise E from err\nassert ok, 'failed'\ndel a, b\nglobal g, h\nn //= 2\nreturn"
        );
    }

    #[test]
    fn test_print_statement() {
        let stmt = Stmt::Print {
            dest: Some(Expr::Attribute {
                value: Box::new(name("sys")),
                attr: String::from("stderr"),
            }),
            values: vec![name("a"), name("b")],
            nl: false,
        };
        assert_eq!(render(vec![stmt]), "print >> sys.stderr, a, b,");
    }

    #[test]
    fn test_loops_and_with() {
        let body = vec![
            Stmt::While {
                test: name("running"),
                body: vec![Stmt::Pass],
                orelse: vec![Stmt::Break],
            },
            Stmt::For {
                is_async: false,
                target: name("x"),
                iter: name("xs"),
                body: vec![Stmt::Continue],
                orelse: vec![],
            },
            Stmt::With {
                is_async: false,
                items: vec![
                    WithItem {
                        context_expr: call("open", vec![name("p")], vec![]),
                        optional_vars: Some(name("f")),
                    },
                    WithItem {
                        context_expr: name("lock"),
                        optional_vars: None,
                    },
                ],
                body: vec![Stmt::Pass],
            },
        ];
        assert_eq!(
            render(body),
            "while running:\n    pass\nelse:\n    break\nfor x in xs:\n    continue\nwith open(p) as f, lock:\n    pass"
        );
    }

    #[test]
    fn test_comprehensions_and_lambda() {
        let list = Expr::ListComp {
            elt: Box::new(name("x")),
            generators: vec![Comprehension {
                target: name("x"),
                iter: name("xs"),
                ifs: vec![name("x")],
                is_async: false,
            }],
        };
        let lambda = Expr::Lambda {
            args: Box::new(Arguments {
                args: vec![arg("a"), arg("b")],
                defaults: vec![num("1")],
                ..Arguments::default()
            }),
            body: Box::new(name("a")),
        };
        let thunk = Expr::Lambda {
            args: Box::new(Arguments::default()),
            body: Box::new(num("0")),
        };
        assert_eq!(
            render(vec![expr_stmt(list), expr_stmt(lambda), expr_stmt(thunk)]),
            "[x for x in xs if x]\nlambda a, b=1: a\nlambda: 0"
        );
    }

    #[test]
    fn test_comparisons() {
        let compare = Expr::Compare {
            left: Box::new(name("a")),
            ops: vec![CmpOperator::Lt, CmpOperator::IsNot],
            comparators: vec![name("b"), Expr::Constant(Constant::Named(String::from("None")))],
        };
        let negated = Expr::UnaryOp {
            op: UnaryOperator::Not,
            operand: Box::new(name("done")),
        };
        assert_eq!(
            render(vec![expr_stmt(compare), expr_stmt(negated)]),
            "a < b is not None\nnot done"
        );
    }

    #[test]
    fn test_malformed_trees() {
        let mismatched = Expr::Compare {
            left: Box::new(name("a")),
            ops: vec![CmpOperator::Eq],
            comparators: vec![],
        };
        assert!(matches!(
            render_error(vec![expr_stmt(mismatched)]),
            PepperError::MalformedTree(_)
        ));

        let empty_body = function("f", Arguments::default(), vec![]);
        match render_error(vec![empty_body]) {
            PepperError::MalformedTree(message) => assert!(message.contains("FunctionDef")),
            other => panic!("unexpected error {other:?}"),
        }

        let bare_try = Stmt::Try {
            body: vec![Stmt::Pass],
            handlers: vec![],
            orelse: vec![],
            finalbody: vec![],
        };
        assert!(matches!(
            render_error(vec![bare_try]),
            PepperError::MalformedTree(_)
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let body = vec![
            function("f", Arguments::default(), vec![Stmt::Pass]),
            assign("x", call("f", vec![num("1"), num("2"), num("3"), num("4"), num("5")], vec![])),
        ];
        let module = Module { body };
        let mut pepper = Pepper::default();
        let first = pepper.render(&module).unwrap();
        let second = pepper.render(&module).unwrap();
        assert_eq!(first, second);
    }
}
