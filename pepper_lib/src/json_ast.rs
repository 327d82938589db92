//! The `json_ast` module builds the typed [`Module`] tree from the JSON encoding produced by the
//! Python parser bridge.
//!
//! Every node is a JSON object with an `ast_type` key naming the node kind plus one key per field.
//! The loader also accepts the node kinds older Python versions produce (`Str`, `Num`,
//! `TryExcept`, `Print`, ...) and folds them into the current tree shape.

use crate::ast::*;
use crate::error::PepperError;
use crate::json::JSONAccess;
use log::debug;
use serde_json::Value;
use std::str::FromStr;

/// The key holding the node kind of every JSON encoded node.
pub static AST_TYPE_KEY: &str = "ast_type";

/// Build a [`Module`] from a JSON encoded syntax tree.
///
/// # Arguments
///
/// * `value` - The root node.  It must be a `Module`.
/// * `max_depth` - The deepest statement or expression nesting to accept.
///
/// # Errors
///
/// Returns [`PepperError::UnsupportedConstruct`] for node kinds the formatter does not represent,
/// [`PepperError::MalformedTree`] for missing or mistyped fields and
/// [`PepperError::TreeTooDeep`] when the nesting exceeds `max_depth`.
pub fn module_from_json(value: &Value, max_depth: usize) -> Result<Module, PepperError> {
    TreeLoader { max_depth }.module(value)
}

struct TreeLoader {
    max_depth: usize,
}

/// Return the node kind of `node`.
fn node_type(node: &Value) -> Result<&str, PepperError> {
    match node.get_str_for_key(AST_TYPE_KEY) {
        Some(kind) => Ok(kind),
        None => Err(PepperError::MalformedTree(format!(
            "node without {AST_TYPE_KEY}: {}",
            abbreviated(node)
        ))),
    }
}

/// Return a short rendition of `node` for error messages.
fn abbreviated(node: &Value) -> String {
    let text = node.to_string();
    match text.char_indices().nth(80) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text,
    }
}

fn missing(kind: &str, key: &str) -> PepperError {
    PepperError::MalformedTree(format!("{kind} is missing field {key}"))
}

fn invalid(kind: &str, key: &str) -> PepperError {
    PepperError::MalformedTree(format!("{kind} has an invalid value for field {key}"))
}

fn required<'v>(node: &'v Value, kind: &str, key: &str) -> Result<&'v Value, PepperError> {
    node.borrow_value_for_key(key)
        .ok_or_else(|| missing(kind, key))
}

fn array<'v>(node: &'v Value, kind: &str, key: &str) -> Result<&'v [Value], PepperError> {
    match node.borrow_value_for_key(key) {
        None => Ok(&[]),
        Some(value) => match value.as_array() {
            Some(a) => Ok(a.as_slice()),
            None => Err(invalid(kind, key)),
        },
    }
}

fn string(node: &Value, kind: &str, key: &str) -> Result<String, PepperError> {
    match required(node, kind, key)?.as_str() {
        Some(s) => Ok(String::from(s)),
        None => Err(invalid(kind, key)),
    }
}

fn optional_string(node: &Value, kind: &str, key: &str) -> Result<Option<String>, PepperError> {
    match node.borrow_value_for_key(key) {
        None => Ok(None),
        Some(value) => match value.as_str() {
            Some(s) => Ok(Some(String::from(s))),
            None => Err(invalid(kind, key)),
        },
    }
}

fn strings(node: &Value, kind: &str, key: &str) -> Result<Vec<String>, PepperError> {
    array(node, kind, key)?
        .iter()
        .map(|v| match v.as_str() {
            Some(s) => Ok(String::from(s)),
            None => Err(invalid(kind, key)),
        })
        .collect()
}

/// Read a flag that Python encodes either as a boolean or as the integer 0 or 1.
fn flag(node: &Value, key: &str) -> bool {
    match node.borrow_value_for_key(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    }
}

fn operator<T: FromStr<Err = PepperError>>(
    node: &Value,
    kind: &str,
    key: &str,
) -> Result<T, PepperError> {
    T::from_str(node_type(required(node, kind, key)?)?)
}

/// Return the text Python's `repr` gives a JSON scalar that a legacy literal node stored.
fn legacy_literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => String::from("True"),
        Value::Bool(false) => String::from("False"),
        Value::Null => String::from("None"),
        other => other.to_string(),
    }
}

impl TreeLoader {
    fn check_depth(&self, depth: usize) -> Result<(), PepperError> {
        if depth > self.max_depth {
            return Err(PepperError::TreeTooDeep(self.max_depth));
        }
        Ok(())
    }

    fn module(&self, node: &Value) -> Result<Module, PepperError> {
        let kind = node_type(node)?;
        if kind != "Module" {
            return Err(PepperError::UnsupportedConstruct(format!(
                "{kind} as the root node"
            )));
        }
        let body = self.stmts(node, kind, "body", 1)?;
        debug!("Loaded module with {} top-level statements", body.len());
        Ok(Module { body })
    }

    fn stmts(
        &self,
        node: &Value,
        kind: &str,
        key: &str,
        depth: usize,
    ) -> Result<Vec<Stmt>, PepperError> {
        array(node, kind, key)?
            .iter()
            .map(|s| self.stmt(s, depth))
            .collect()
    }

    fn exprs(
        &self,
        node: &Value,
        kind: &str,
        key: &str,
        depth: usize,
    ) -> Result<Vec<Expr>, PepperError> {
        array(node, kind, key)?
            .iter()
            .map(|e| self.expr(e, depth))
            .collect()
    }

    fn expr_field(
        &self,
        node: &Value,
        kind: &str,
        key: &str,
        depth: usize,
    ) -> Result<Expr, PepperError> {
        self.expr(required(node, kind, key)?, depth)
    }

    fn boxed_field(
        &self,
        node: &Value,
        kind: &str,
        key: &str,
        depth: usize,
    ) -> Result<Box<Expr>, PepperError> {
        Ok(Box::new(self.expr_field(node, kind, key, depth)?))
    }

    fn optional_expr_field(
        &self,
        node: &Value,
        key: &str,
        depth: usize,
    ) -> Result<Option<Expr>, PepperError> {
        match node.borrow_value_for_key(key) {
            Some(value) => Ok(Some(self.expr(value, depth)?)),
            None => Ok(None),
        }
    }

    fn optional_boxed_field(
        &self,
        node: &Value,
        key: &str,
        depth: usize,
    ) -> Result<Option<Box<Expr>>, PepperError> {
        Ok(self.optional_expr_field(node, key, depth)?.map(Box::new))
    }

    fn stmt(&self, node: &Value, depth: usize) -> Result<Stmt, PepperError> {
        self.check_depth(depth)?;
        let kind = node_type(node)?;
        let next = depth + 1;

        let stmt = match kind {
            "FunctionDef" | "AsyncFunctionDef" => {
                self.reject_type_params(node, kind)?;
                Stmt::FunctionDef(FunctionDef {
                    is_async: kind == "AsyncFunctionDef",
                    name: string(node, kind, "name")?,
                    args: self.arguments(required(node, kind, "args")?, next)?,
                    body: self.stmts(node, kind, "body", next)?,
                    decorator_list: self.exprs(node, kind, "decorator_list", next)?,
                    returns: self.optional_expr_field(node, "returns", next)?,
                })
            }
            "ClassDef" => {
                self.reject_type_params(node, kind)?;
                let mut keywords = self.keywords(node, kind, next)?;
                // Python 2 style metaclass spreads.
                if let Some(kwargs) = self.optional_expr_field(node, "kwargs", next)? {
                    keywords.push(Keyword {
                        arg: None,
                        value: kwargs,
                    });
                }
                let mut bases = self.exprs(node, kind, "bases", next)?;
                if let Some(starargs) = self.optional_boxed_field(node, "starargs", next)? {
                    bases.push(Expr::Starred { value: starargs });
                }
                Stmt::ClassDef(ClassDef {
                    name: string(node, kind, "name")?,
                    bases,
                    keywords,
                    body: self.stmts(node, kind, "body", next)?,
                    decorator_list: self.exprs(node, kind, "decorator_list", next)?,
                })
            }
            "Return" => Stmt::Return {
                value: self.optional_expr_field(node, "value", next)?,
            },
            "Delete" => Stmt::Delete {
                targets: self.exprs(node, kind, "targets", next)?,
            },
            "Assign" => Stmt::Assign {
                targets: self.exprs(node, kind, "targets", next)?,
                value: self.expr_field(node, kind, "value", next)?,
            },
            "AugAssign" => Stmt::AugAssign {
                target: self.expr_field(node, kind, "target", next)?,
                op: operator(node, kind, "op")?,
                value: self.expr_field(node, kind, "value", next)?,
            },
            "AnnAssign" => Stmt::AnnAssign {
                target: self.expr_field(node, kind, "target", next)?,
                annotation: self.expr_field(node, kind, "annotation", next)?,
                value: self.optional_expr_field(node, "value", next)?,
                simple: flag(node, "simple"),
            },
            "For" | "AsyncFor" => Stmt::For {
                is_async: kind == "AsyncFor",
                target: self.expr_field(node, kind, "target", next)?,
                iter: self.expr_field(node, kind, "iter", next)?,
                body: self.stmts(node, kind, "body", next)?,
                orelse: self.stmts(node, kind, "orelse", next)?,
            },
            "While" => Stmt::While {
                test: self.expr_field(node, kind, "test", next)?,
                body: self.stmts(node, kind, "body", next)?,
                orelse: self.stmts(node, kind, "orelse", next)?,
            },
            "If" => Stmt::If {
                test: self.expr_field(node, kind, "test", next)?,
                body: self.stmts(node, kind, "body", next)?,
                orelse: self.stmts(node, kind, "orelse", next)?,
            },
            "With" | "AsyncWith" => {
                let items = if node.contains_key("items") {
                    array(node, kind, "items")?
                        .iter()
                        .map(|item| self.with_item(item, next))
                        .collect::<Result<Vec<WithItem>, PepperError>>()?
                } else {
                    // Python 2 trees hold a single context manager on the statement itself.
                    vec![self.with_item(node, next)?]
                };
                Stmt::With {
                    is_async: kind == "AsyncWith",
                    items,
                    body: self.stmts(node, kind, "body", next)?,
                }
            }
            "Raise" => {
                if node.contains_key("inst") || node.contains_key("tback") {
                    return Err(PepperError::UnsupportedConstruct(String::from(
                        "Raise with instance or traceback",
                    )));
                }
                let exc = match node.borrow_value_for_key("exc") {
                    Some(exc) => Some(self.expr(exc, next)?),
                    None => self.optional_expr_field(node, "type", next)?,
                };
                Stmt::Raise {
                    exc,
                    cause: self.optional_expr_field(node, "cause", next)?,
                }
            }
            "Try" | "TryExcept" | "TryFinally" => Stmt::Try {
                body: self.stmts(node, kind, "body", next)?,
                handlers: array(node, kind, "handlers")?
                    .iter()
                    .map(|h| self.except_handler(h, next))
                    .collect::<Result<Vec<ExceptHandler>, PepperError>>()?,
                orelse: self.stmts(node, kind, "orelse", next)?,
                finalbody: self.stmts(node, kind, "finalbody", next)?,
            },
            "Assert" => Stmt::Assert {
                test: self.expr_field(node, kind, "test", next)?,
                msg: self.optional_expr_field(node, "msg", next)?,
            },
            "Import" => Stmt::Import {
                names: self.aliases(node, kind)?,
            },
            "ImportFrom" => Stmt::ImportFrom {
                module: optional_string(node, kind, "module")?,
                names: self.aliases(node, kind)?,
                level: match node.get_int_for_key("level") {
                    Some(level) if level >= 0 => level as usize,
                    Some(_) => return Err(invalid(kind, "level")),
                    None => 0,
                },
            },
            "Global" => Stmt::Global {
                names: strings(node, kind, "names")?,
            },
            "Nonlocal" => Stmt::Nonlocal {
                names: strings(node, kind, "names")?,
            },
            "Expr" => Stmt::Expr {
                value: self.expr_field(node, kind, "value", next)?,
            },
            "Pass" => Stmt::Pass,
            "Break" => Stmt::Break,
            "Continue" => Stmt::Continue,
            "Print" => Stmt::Print {
                dest: self.optional_expr_field(node, "dest", next)?,
                values: self.exprs(node, kind, "values", next)?,
                nl: flag(node, "nl"),
            },
            _ => return Err(PepperError::UnsupportedConstruct(String::from(kind))),
        };

        Ok(stmt)
    }

    fn reject_type_params(&self, node: &Value, kind: &str) -> Result<(), PepperError> {
        if !array(node, kind, "type_params")?.is_empty() {
            return Err(PepperError::UnsupportedConstruct(format!(
                "type parameters on {kind}"
            )));
        }
        Ok(())
    }

    fn aliases(&self, node: &Value, kind: &str) -> Result<Vec<Alias>, PepperError> {
        array(node, kind, "names")?
            .iter()
            .map(|alias| {
                Ok(Alias {
                    name: string(alias, "alias", "name")?,
                    asname: optional_string(alias, "alias", "asname")?,
                })
            })
            .collect()
    }

    fn with_item(&self, node: &Value, depth: usize) -> Result<WithItem, PepperError> {
        Ok(WithItem {
            context_expr: self.expr_field(node, "withitem", "context_expr", depth)?,
            optional_vars: self.optional_expr_field(node, "optional_vars", depth)?,
        })
    }

    fn except_handler(&self, node: &Value, depth: usize) -> Result<ExceptHandler, PepperError> {
        self.check_depth(depth)?;
        let kind = "ExceptHandler";
        // Python 2 stores the bound name as a Name expression.
        let name = match node.borrow_value_for_key("name") {
            None => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(name) => Some(string(name, kind, "id")?),
        };
        Ok(ExceptHandler {
            exception_type: self.optional_expr_field(node, "type", depth + 1)?,
            name,
            body: self.stmts(node, kind, "body", depth + 1)?,
        })
    }

    fn keywords(&self, node: &Value, kind: &str, depth: usize) -> Result<Vec<Keyword>, PepperError> {
        array(node, kind, "keywords")?
            .iter()
            .map(|keyword| {
                Ok(Keyword {
                    arg: optional_string(keyword, "keyword", "arg")?,
                    value: self.expr_field(keyword, "keyword", "value", depth)?,
                })
            })
            .collect()
    }

    /// Parameters are `arg` nodes in Python 3 trees and `Name` nodes or bare strings in Python 2
    /// trees.
    fn arg(&self, node: &Value, depth: usize) -> Result<Arg, PepperError> {
        if let Some(name) = node.as_str() {
            return Ok(Arg {
                arg: String::from(name),
                annotation: None,
            });
        }
        match node_type(node)? {
            "Name" => Ok(Arg {
                arg: string(node, "Name", "id")?,
                annotation: None,
            }),
            "arg" => Ok(Arg {
                arg: string(node, "arg", "arg")?,
                annotation: self.optional_expr_field(node, "annotation", depth)?,
            }),
            other => Err(PepperError::UnsupportedConstruct(format!(
                "{other} as a parameter"
            ))),
        }
    }

    fn args(&self, node: &Value, key: &str, depth: usize) -> Result<Vec<Arg>, PepperError> {
        array(node, "arguments", key)?
            .iter()
            .map(|a| self.arg(a, depth))
            .collect()
    }

    fn optional_arg(&self, node: &Value, key: &str, depth: usize) -> Result<Option<Arg>, PepperError> {
        match node.borrow_value_for_key(key) {
            Some(value) => Ok(Some(self.arg(value, depth)?)),
            None => Ok(None),
        }
    }

    fn arguments(&self, node: &Value, depth: usize) -> Result<Arguments, PepperError> {
        self.check_depth(depth)?;
        let kind = "arguments";
        let next = depth + 1;
        let kw_defaults = array(node, kind, "kw_defaults")?
            .iter()
            .map(|d| match d {
                Value::Null => Ok(None),
                d => Ok(Some(self.expr(d, next)?)),
            })
            .collect::<Result<Vec<Option<Expr>>, PepperError>>()?;
        Ok(Arguments {
            posonlyargs: self.args(node, "posonlyargs", next)?,
            args: self.args(node, "args", next)?,
            vararg: self.optional_arg(node, "vararg", next)?,
            kwonlyargs: self.args(node, "kwonlyargs", next)?,
            kw_defaults,
            kwarg: self.optional_arg(node, "kwarg", next)?,
            defaults: self.exprs(node, kind, "defaults", next)?,
        })
    }

    fn comprehensions(
        &self,
        node: &Value,
        kind: &str,
        depth: usize,
    ) -> Result<Vec<Comprehension>, PepperError> {
        array(node, kind, "generators")?
            .iter()
            .map(|generator| {
                Ok(Comprehension {
                    target: self.expr_field(generator, "comprehension", "target", depth)?,
                    iter: self.expr_field(generator, "comprehension", "iter", depth)?,
                    ifs: self.exprs(generator, "comprehension", "ifs", depth)?,
                    is_async: flag(generator, "is_async"),
                })
            })
            .collect()
    }

    fn constant(&self, node: &Value) -> Result<Constant, PepperError> {
        let value = node.borrow_value_for_key("value");
        let constant = match (node.get_str_for_key("type"), value) {
            (Some("str"), Some(Value::String(s))) => Constant::Str(s.clone()),
            (Some("bytes"), Some(Value::String(s))) => Constant::Bytes(s.clone()),
            (Some("bool"), Some(Value::String(s))) | (Some("NoneType"), Some(Value::String(s))) => {
                Constant::Named(s.clone())
            }
            (Some("NoneType"), None) => Constant::Named(String::from("None")),
            (Some("ellipsis"), _) => Constant::Ellipsis,
            (Some(_), Some(Value::String(s))) => Constant::Number(s.clone()),
            // Trees written by other tools carry plain JSON scalars.
            (None, Some(Value::String(s))) => Constant::Str(s.clone()),
            (None, Some(Value::Number(n))) => Constant::Number(n.to_string()),
            (None, Some(Value::Bool(b))) => {
                Constant::Named(String::from(if *b { "True" } else { "False" }))
            }
            (None, None) => Constant::Named(String::from("None")),
            _ => return Err(invalid("Constant", "value")),
        };
        Ok(constant)
    }

    fn expr(&self, node: &Value, depth: usize) -> Result<Expr, PepperError> {
        self.check_depth(depth)?;
        let kind = node_type(node)?;
        let next = depth + 1;

        let expr = match kind {
            "BoolOp" => Expr::BoolOp {
                op: operator(node, kind, "op")?,
                values: self.exprs(node, kind, "values", next)?,
            },
            "NamedExpr" => Expr::NamedExpr {
                target: self.boxed_field(node, kind, "target", next)?,
                value: self.boxed_field(node, kind, "value", next)?,
            },
            "BinOp" => Expr::BinOp {
                left: self.boxed_field(node, kind, "left", next)?,
                op: operator(node, kind, "op")?,
                right: self.boxed_field(node, kind, "right", next)?,
            },
            "UnaryOp" => Expr::UnaryOp {
                op: operator(node, kind, "op")?,
                operand: self.boxed_field(node, kind, "operand", next)?,
            },
            "Lambda" => Expr::Lambda {
                args: Box::new(self.arguments(required(node, kind, "args")?, next)?),
                body: self.boxed_field(node, kind, "body", next)?,
            },
            "IfExp" => Expr::IfExp {
                test: self.boxed_field(node, kind, "test", next)?,
                body: self.boxed_field(node, kind, "body", next)?,
                orelse: self.boxed_field(node, kind, "orelse", next)?,
            },
            "Dict" => {
                let keys = array(node, kind, "keys")?;
                let values = array(node, kind, "values")?;
                if keys.len() != values.len() {
                    return Err(PepperError::MalformedTree(String::from(
                        "Dict keys and values differ in length",
                    )));
                }
                let items = keys
                    .iter()
                    .zip(values)
                    .map(|(key, value)| {
                        Ok(DictItem {
                            key: match key {
                                Value::Null => None,
                                key => Some(self.expr(key, next)?),
                            },
                            value: self.expr(value, next)?,
                        })
                    })
                    .collect::<Result<Vec<DictItem>, PepperError>>()?;
                Expr::Dict { items }
            }
            "Set" => Expr::Set {
                elts: self.exprs(node, kind, "elts", next)?,
            },
            "ListComp" => Expr::ListComp {
                elt: self.boxed_field(node, kind, "elt", next)?,
                generators: self.comprehensions(node, kind, next)?,
            },
            "SetComp" => Expr::SetComp {
                elt: self.boxed_field(node, kind, "elt", next)?,
                generators: self.comprehensions(node, kind, next)?,
            },
            "GeneratorExp" => Expr::GeneratorExp {
                elt: self.boxed_field(node, kind, "elt", next)?,
                generators: self.comprehensions(node, kind, next)?,
            },
            "DictComp" => Expr::DictComp {
                key: self.boxed_field(node, kind, "key", next)?,
                value: self.boxed_field(node, kind, "value", next)?,
                generators: self.comprehensions(node, kind, next)?,
            },
            "Await" => Expr::Await {
                value: self.boxed_field(node, kind, "value", next)?,
            },
            "Yield" => Expr::Yield {
                value: self.optional_boxed_field(node, "value", next)?,
            },
            "YieldFrom" => Expr::YieldFrom {
                value: self.boxed_field(node, kind, "value", next)?,
            },
            "Compare" => Expr::Compare {
                left: self.boxed_field(node, kind, "left", next)?,
                ops: array(node, kind, "ops")?
                    .iter()
                    .map(|op| CmpOperator::from_str(node_type(op)?))
                    .collect::<Result<Vec<CmpOperator>, PepperError>>()?,
                comparators: self.exprs(node, kind, "comparators", next)?,
            },
            "Call" => {
                let mut args = self.exprs(node, kind, "args", next)?;
                let mut keywords = self.keywords(node, kind, next)?;
                if let Some(starargs) = self.optional_boxed_field(node, "starargs", next)? {
                    args.push(Expr::Starred { value: starargs });
                }
                if let Some(kwargs) = self.optional_expr_field(node, "kwargs", next)? {
                    keywords.push(Keyword {
                        arg: None,
                        value: kwargs,
                    });
                }
                Expr::Call {
                    func: self.boxed_field(node, kind, "func", next)?,
                    args,
                    keywords,
                }
            }
            "Constant" => Expr::Constant(self.constant(node)?),
            "Str" => Expr::Constant(Constant::Str(string(node, kind, "s")?)),
            "Bytes" => Expr::Constant(Constant::Bytes(legacy_literal_text(required(
                node, kind, "s",
            )?))),
            "Num" => Expr::Constant(Constant::Number(legacy_literal_text(required(
                node, kind, "n",
            )?))),
            "NameConstant" => Expr::Constant(Constant::Named(legacy_literal_text(
                node.borrow_value_for_key("value").unwrap_or(&Value::Null),
            ))),
            "Ellipsis" => Expr::Constant(Constant::Ellipsis),
            "Attribute" => Expr::Attribute {
                value: self.boxed_field(node, kind, "value", next)?,
                attr: string(node, kind, "attr")?,
            },
            "Subscript" => Expr::Subscript {
                value: self.boxed_field(node, kind, "value", next)?,
                slice: self.boxed_field(node, kind, "slice", next)?,
            },
            "Index" => self.expr_field(node, kind, "value", next)?,
            "ExtSlice" => Expr::Tuple {
                elts: self.exprs(node, kind, "dims", next)?,
            },
            "Starred" => Expr::Starred {
                value: self.boxed_field(node, kind, "value", next)?,
            },
            "Name" => Expr::Name {
                id: string(node, kind, "id")?,
            },
            "List" => Expr::List {
                elts: self.exprs(node, kind, "elts", next)?,
            },
            "Tuple" => Expr::Tuple {
                elts: self.exprs(node, kind, "elts", next)?,
            },
            "Slice" => Expr::Slice {
                lower: self.optional_boxed_field(node, "lower", next)?,
                upper: self.optional_boxed_field(node, "upper", next)?,
                step: self.optional_boxed_field(node, "step", next)?,
            },
            "Repr" => Expr::Repr {
                value: self.boxed_field(node, kind, "value", next)?,
            },
            _ => return Err(PepperError::UnsupportedConstruct(String::from(kind))),
        };

        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MAX_TREE_DEPTH;
    use serde_json::json;

    fn load(value: Value) -> Result<Module, PepperError> {
        module_from_json(&value, MAX_TREE_DEPTH)
    }

    fn name(id: &str) -> Value {
        json!({"ast_type": "Name", "id": id, "ctx": {"ast_type": "Load"}})
    }

    fn expression_statement(value: Value) -> Value {
        json!({"ast_type": "Module", "body": [{"ast_type": "Expr", "value": value}], "type_ignores": []})
    }

    #[test]
    fn test_load_assignment() {
        let tree = json!({
            "ast_type": "Module",
            "body": [{
                "ast_type": "Assign",
                "targets": [name("x")],
                "value": {"ast_type": "Constant", "type": "int", "value": "1", "kind": null},
                "type_comment": null
            }],
            "type_ignores": []
        });
        let module = load(tree).unwrap();
        assert_eq!(
            module.body,
            vec![Stmt::Assign {
                targets: vec![Expr::Name {
                    id: String::from("x")
                }],
                value: Expr::Constant(Constant::Number(String::from("1"))),
            }]
        );
    }

    #[test]
    fn test_constant_kinds() {
        let cases = [
            (json!({"ast_type": "Constant", "type": "str", "value": "a'b"}), Constant::Str(String::from("a'b"))),
            (json!({"ast_type": "Constant", "type": "bytes", "value": "b'x'"}), Constant::Bytes(String::from("b'x'"))),
            (json!({"ast_type": "Constant", "type": "bool", "value": "True"}), Constant::Named(String::from("True"))),
            (json!({"ast_type": "Constant", "type": "NoneType", "value": "None"}), Constant::Named(String::from("None"))),
            (json!({"ast_type": "Constant", "type": "ellipsis", "value": "Ellipsis"}), Constant::Ellipsis),
            (json!({"ast_type": "Constant", "type": "float", "value": "1.5"}), Constant::Number(String::from("1.5"))),
            (json!({"ast_type": "Constant", "value": 7}), Constant::Number(String::from("7"))),
        ];
        for (node, expected) in cases {
            let module = load(expression_statement(node)).unwrap();
            assert_eq!(
                module.body,
                vec![Stmt::Expr {
                    value: Expr::Constant(expected)
                }]
            );
        }
    }

    #[test]
    fn test_legacy_nodes() {
        let tree = json!({
            "ast_type": "Module",
            "body": [{
                "ast_type": "Print",
                "dest": null,
                "values": [
                    {"ast_type": "Str", "s": "hi"},
                    {"ast_type": "Num", "n": 3},
                    {"ast_type": "Subscript", "value": name("a"), "slice": {"ast_type": "Index", "value": name("i")}}
                ],
                "nl": true
            }]
        });
        let module = load(tree).unwrap();
        assert_eq!(
            module.body,
            vec![Stmt::Print {
                dest: None,
                values: vec![
                    Expr::Constant(Constant::Str(String::from("hi"))),
                    Expr::Constant(Constant::Number(String::from("3"))),
                    Expr::Subscript {
                        value: Box::new(Expr::Name { id: String::from("a") }),
                        slice: Box::new(Expr::Name { id: String::from("i") }),
                    },
                ],
                nl: true,
            }]
        );
    }

    #[test]
    fn test_legacy_call_star_arguments() {
        let call = json!({
            "ast_type": "Call",
            "func": name("f"),
            "args": [],
            "keywords": [],
            "starargs": name("a"),
            "kwargs": name("k")
        });
        let module = load(expression_statement(call)).unwrap();
        match &module.body[0] {
            Stmt::Expr {
                value: Expr::Call { args, keywords, .. },
            } => {
                assert!(matches!(args.as_slice(), [Expr::Starred { .. }]));
                assert_eq!(keywords.len(), 1);
                assert_eq!(keywords[0].arg, None);
            }
            other => panic!("unexpected statement {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_nodes() {
        let fstring = json!({"ast_type": "JoinedStr", "values": []});
        match load(expression_statement(fstring)) {
            Err(PepperError::UnsupportedConstruct(kind)) => assert_eq!(kind, "JoinedStr"),
            other => panic!("unexpected result {other:?}"),
        }

        let tree = json!({"ast_type": "Module", "body": [{"ast_type": "Match", "subject": name("x"), "cases": []}]});
        assert!(matches!(load(tree), Err(PepperError::UnsupportedConstruct(_))));

        let tree = json!({"ast_type": "Expression", "body": name("x")});
        assert!(matches!(load(tree), Err(PepperError::UnsupportedConstruct(_))));
    }

    #[test]
    fn test_type_params_are_unsupported() {
        let tree = json!({
            "ast_type": "Module",
            "body": [{
                "ast_type": "ClassDef",
                "name": "A",
                "bases": [],
                "keywords": [],
                "body": [{"ast_type": "Pass"}],
                "decorator_list": [],
                "type_params": [{"ast_type": "TypeVar", "name": "T"}]
            }]
        });
        assert!(matches!(load(tree), Err(PepperError::UnsupportedConstruct(_))));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let tree = json!({"ast_type": "Module", "body": [{"ast_type": "Assign", "targets": [name("x")]}]});
        match load(tree) {
            Err(PepperError::MalformedTree(message)) => {
                assert!(message.contains("Assign"));
                assert!(message.contains("value"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_node_without_type_is_malformed() {
        let tree = json!({"ast_type": "Module", "body": [{"value": 1}]});
        assert!(matches!(load(tree), Err(PepperError::MalformedTree(_))));
    }

    #[test]
    fn test_depth_limit() {
        let mut expr = name("x");
        for _ in 0..20 {
            expr = json!({"ast_type": "UnaryOp", "op": {"ast_type": "USub"}, "operand": expr});
        }
        let tree = expression_statement(expr);
        assert!(module_from_json(&tree, 64).is_ok());
        match module_from_json(&tree, 10) {
            Err(PepperError::TreeTooDeep(limit)) => assert_eq!(limit, 10),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_python2_except_handler_and_arguments() {
        let tree = json!({
            "ast_type": "Module",
            "body": [{
                "ast_type": "FunctionDef",
                "name": "f",
                "args": {"ast_type": "arguments", "args": [name("a")], "vararg": "rest", "kwarg": null, "defaults": []},
                "body": [{
                    "ast_type": "TryExcept",
                    "body": [{"ast_type": "Pass"}],
                    "handlers": [{"ast_type": "ExceptHandler", "type": name("E"), "name": name("e"), "body": [{"ast_type": "Pass"}]}],
                    "orelse": []
                }],
                "decorator_list": []
            }]
        });
        let module = load(tree).unwrap();
        match &module.body[0] {
            Stmt::FunctionDef(def) => {
                assert_eq!(def.args.args[0].arg, "a");
                assert_eq!(def.args.vararg.as_ref().map(|a| a.arg.as_str()), Some("rest"));
                match &def.body[0] {
                    Stmt::Try { handlers, .. } => {
                        assert_eq!(handlers[0].name.as_deref(), Some("e"))
                    }
                    other => panic!("unexpected statement {other:?}"),
                }
            }
            other => panic!("unexpected statement {other:?}"),
        }
    }
}
