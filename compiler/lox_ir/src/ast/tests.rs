use pretty_assertions::assert_eq;

use super::*;
use crate::{Span, TokenKind};

#[test]
fn binary_constructor_synthesizes_matching_token() {
    let expr = Expr::binary(Expr::literal(1.0), BinaryOp::Add, 4, Expr::literal(2.0));
    let Expr::Binary { op, operator, .. } = expr else {
        panic!("expected binary node");
    };
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(operator.kind, TokenKind::Plus);
    assert_eq!(operator.lexeme, "+");
    assert_eq!(operator.line, 4);
}

#[test]
fn unary_constructor_synthesizes_matching_token() {
    let expr = Expr::unary(UnaryOp::Not, 1, Expr::literal(true));
    let Expr::Unary { op, operator, .. } = expr else {
        panic!("expected unary node");
    };
    assert_eq!(op, UnaryOp::Not);
    assert_eq!(operator.kind, TokenKind::Bang);
}

#[test]
fn binary_from_token_keeps_source_location() {
    let token = Token::new(TokenKind::Star, "*", 9, Span::new(20, 21));
    let expr = Expr::binary_from_token(Expr::literal(2.0), token.clone(), Expr::literal(3.0));
    let Some(Expr::Binary { op, operator, .. }) = expr else {
        panic!("expected binary node");
    };
    assert_eq!(op, BinaryOp::Mul);
    assert_eq!(operator, token);
}

#[test]
fn from_token_rejects_wrong_arity() {
    let bang = Token::synthetic(TokenKind::Bang, 1);
    assert!(Expr::binary_from_token(Expr::nil(), bang, Expr::nil()).is_none());

    let star = Token::synthetic(TokenKind::Star, 1);
    assert!(Expr::unary_from_token(star, Expr::nil()).is_none());
}

#[test]
fn minus_is_both_unary_and_binary() {
    assert_eq!(UnaryOp::from_token_kind(TokenKind::Minus), Some(UnaryOp::Neg));
    assert_eq!(BinaryOp::from_token_kind(TokenKind::Minus), Some(BinaryOp::Sub));
}

#[test]
fn operator_token_kinds_round_trip() {
    let ops = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
    ];
    for op in ops {
        assert_eq!(BinaryOp::from_token_kind(op.token_kind()), Some(op));
    }
    for op in [UnaryOp::Neg, UnaryOp::Not] {
        assert_eq!(UnaryOp::from_token_kind(op.token_kind()), Some(op));
    }
}

#[test]
fn statement_constructors_and_kind_names() {
    let stmt = Stmt::print(Expr::literal("hi"));
    assert_eq!(stmt.kind_name(), "print");
    assert_eq!(stmt, Stmt::Print(Expr::Literal(Value::string("hi"))));
    assert_eq!(Stmt::expression(Expr::nil()).kind_name(), "expression");
}
