//! Test-specific tree types and dump handlers exercising dispatch.

use super::{Dispatcher, DumpVisitor};
use crate::error::DumpError;
use crate::node::DumpNode;
use crate::value::DumpValue;
use crate::{Box, String, ToString, Vec, vec};
use pretty_assertions::assert_eq;

// === Test-specific tree types ===

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Num(i32),
    Add(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Block(Vec<Expr>),
    Nop,
}

impl DumpNode for Expr {
    fn kind(&self) -> &'static str {
        match self {
            Expr::Num(_) => "Num",
            Expr::Add(..) => "Add",
            Expr::Mul(..) => "Mul",
            Expr::Neg(_) => "Neg",
            Expr::Block(_) => "Block",
            Expr::Nop => "Nop",
        }
    }

    fn ancestors(&self) -> &'static [&'static str] {
        match self {
            Expr::Add(..) | Expr::Mul(..) => &["BinaryOp", "Expr"],
            Expr::Nop => &[],
            _ => &["Expr"],
        }
    }

    fn is_no_op(&self) -> bool {
        matches!(self, Expr::Nop)
    }
}

fn num(n: i32) -> Expr {
    Expr::Num(n)
}

fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(Box::new(a), Box::new(b))
}

fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(Box::new(a), Box::new(b))
}

fn neg(a: Expr) -> Expr {
    Expr::Neg(Box::new(a))
}

fn unexpected(node: &Expr) -> DumpError {
    DumpError::handler(node.kind(), "unexpected node")
}

fn dump_num(_: &Dispatcher<Expr>, node: &Expr) -> Result<DumpValue, DumpError> {
    match node {
        Expr::Num(n) => Ok(DumpValue::text(n)),
        _ => Err(unexpected(node)),
    }
}

fn dump_binary(d: &Dispatcher<Expr>, node: &Expr) -> Result<DumpValue, DumpError> {
    match node {
        Expr::Add(a, b) => Ok(DumpValue::group([
            "binop".into(),
            "+".into(),
            d.visit(a)?,
            d.visit(b)?,
        ])),
        Expr::Mul(a, b) => Ok(DumpValue::group([
            "binop".into(),
            "*".into(),
            d.visit(a)?,
            d.visit(b)?,
        ])),
        _ => Err(unexpected(node)),
    }
}

fn dump_mul(d: &Dispatcher<Expr>, node: &Expr) -> Result<DumpValue, DumpError> {
    match node {
        Expr::Mul(a, b) => Ok(DumpValue::group(["*".into(), d.visit(a)?, d.visit(b)?])),
        _ => Err(unexpected(node)),
    }
}

fn dump_block(d: &Dispatcher<Expr>, node: &Expr) -> Result<DumpValue, DumpError> {
    let Expr::Block(body) = node else {
        return Err(unexpected(node));
    };
    let mut items = vec![DumpValue::literal("block")];
    for stmt in body.iter().filter(|stmt| !d.is_no_op(Some(*stmt))) {
        items.push(d.visit(stmt)?);
    }
    Ok(DumpValue::Group(items))
}

fn arithmetic() -> Dispatcher<Expr> {
    Dispatcher::<Expr>::new()
        .with_handler("Num", dump_num)
        .with_handler("BinaryOp", dump_binary)
        .with_handler("Mul", dump_mul)
        .with_handler("Block", dump_block)
        .with_handler("Nop", |_, _| Ok(DumpValue::empty()))
}

fn render(d: &Dispatcher<Expr>, node: &Expr) -> Result<String, DumpError> {
    Ok(d.visit(node)?.to_string())
}

// === Tests ===

#[test]
fn test_most_specific_handler_wins() {
    let d = arithmetic();
    let tree = add(num(1), mul(num(2), num(3)));
    assert_eq!(render(&d, &tree).unwrap(), "(binop + 1 (* 2 3))");
}

#[test]
fn test_registration_order_does_not_matter() {
    let d = Dispatcher::<Expr>::new()
        .with_handler("Mul", dump_mul)
        .with_handler("Num", dump_num)
        .with_handler("BinaryOp", dump_binary);
    let tree = add(num(1), mul(num(2), num(3)));
    assert_eq!(render(&d, &tree).unwrap(), render(&arithmetic(), &tree).unwrap());
}

#[test]
fn test_missing_handler_fails() {
    let d = arithmetic();
    assert_eq!(d.visit(&neg(num(1))), Err(DumpError::NoHandler { kind: "Neg" }));
}

#[test]
fn test_nested_failure_is_not_swallowed() {
    let d = arithmetic();
    let tree = add(num(1), mul(num(2), neg(num(3))));
    assert_eq!(render(&d, &tree), Err(DumpError::NoHandler { kind: "Neg" }));
}

#[test]
fn test_ancestor_handler_before_fallback() {
    let d = arithmetic()
        .with_handler("Expr", |_, node| Ok(DumpValue::literal(node.kind())))
        .with_fallback(|_, _| Ok(DumpValue::literal("?")));
    assert_eq!(render(&d, &neg(num(1))).unwrap(), "Neg");
}

#[test]
fn test_fallback() {
    let d = arithmetic().with_fallback(|d, node| match node {
        Expr::Neg(inner) => Ok(DumpValue::group(["-".into(), d.visit(inner)?])),
        _ => Err(unexpected(node)),
    });
    assert!(d.has_fallback());
    assert_eq!(render(&d, &neg(num(4))).unwrap(), "(- 4)");
    // Registered kinds still go to their own handlers.
    assert_eq!(render(&d, &num(4)).unwrap(), "4");
}

#[test]
fn test_handler_error_propagates() {
    let mut d = arithmetic();
    d.register("Num", |_, node| Err(DumpError::handler(node.kind(), "refused")));
    assert_eq!(
        render(&d, &add(num(1), num(2))),
        Err(DumpError::handler("Num", "refused"))
    );
}

#[test]
fn test_no_op_children() {
    let d = arithmetic();
    let tree = Expr::Block(vec![num(1), Expr::Nop, num(2)]);
    assert_eq!(render(&d, &tree).unwrap(), "(block 1 2)");
    assert_eq!(render(&d, &Expr::Nop).unwrap(), "()");
    assert!(d.is_no_op(Some(&Expr::Nop)));
    assert!(!d.is_no_op(Some(&num(0))));
    assert!(d.is_no_op(None));
}

#[test]
fn test_handler_lookup() {
    let d = arithmetic();
    assert!(d.has_handler("BinaryOp"));
    assert!(!d.has_handler("Add"));
    assert!(d.handler_for(&add(num(1), num(2))).is_some());
    assert!(d.handler_for(&neg(num(1))).is_none());
    assert!(!d.has_fallback());
}

#[test]
fn test_visit_all() {
    let d = arithmetic();
    let nodes = [num(1), mul(num(2), num(3))];
    let values = DumpVisitor::visit_all(&d, &nodes).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0], DumpValue::literal("1"));

    let nodes = [num(1), neg(num(2))];
    assert!(DumpVisitor::visit_all(&d, &nodes).is_err());
}

#[test]
fn test_debug_lists_kinds() {
    let d = Dispatcher::<Expr>::new()
        .with_handler("Num", dump_num)
        .with_handler("Mul", dump_mul);
    assert_eq!(
        crate::format!("{:?}", d),
        "Dispatcher { kinds: [\"Mul\", \"Num\"], fallback: false }"
    );
}

// === Closed set of node types ===

/// Visitor matching every node type exhaustively, without a registry.
struct ExprDumper;

impl DumpVisitor<Expr> for ExprDumper {
    fn visit(&self, node: &Expr) -> Result<DumpValue, DumpError> {
        Ok(match node {
            Expr::Num(n) => DumpValue::text(n),
            Expr::Add(a, b) => {
                DumpValue::group(["+".into(), self.visit(&**a)?, self.visit(&**b)?])
            }
            Expr::Mul(a, b) => {
                DumpValue::group(["*".into(), self.visit(&**a)?, self.visit(&**b)?])
            }
            Expr::Neg(a) => DumpValue::group(["-".into(), self.visit(&**a)?]),
            Expr::Block(body) => {
                let mut items = vec![DumpValue::literal("block"), DumpValue::Indent];
                for stmt in body {
                    items.push(DumpValue::Break);
                    items.push(self.visit(stmt)?);
                }
                items.push(DumpValue::Dedent);
                DumpValue::Group(items)
            }
            Expr::Nop => DumpValue::empty(),
        })
    }
}

#[test]
fn test_closed_visitor() {
    let tree = Expr::Block(vec![add(num(1), num(2)), neg(num(3)), Expr::Nop]);
    let value = ExprDumper.visit(&tree).unwrap();
    assert_eq!(value.to_string(), "(block\n  (+ 1 2)\n  (- 3)\n  ())");
}
