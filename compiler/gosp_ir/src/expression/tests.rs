use super::*;
use crate::Builtin;
use pretty_assertions::assert_eq;

#[test]
fn test_display_values() {
    assert_eq!(Expression::None.to_string(), "undefined");
    assert_eq!(Expression::Int(-3).to_string(), "-3");
    assert_eq!(Expression::Double(1.0).to_string(), "1.000000");
    assert_eq!(Expression::Str("hi there".into()).to_string(), "hi there");
    assert_eq!(Expression::Id("sq".into()).to_string(), "sq");
    assert_eq!(
        Expression::List(vec![Expression::Double(1.0), Expression::Double(2.5)]).to_string(),
        "[1.000000 2.500000]"
    );
    assert_eq!(Expression::List(vec![]).to_string(), "[]");
}

#[test]
fn test_display_unevaluated_forms() {
    let call = Expression::Func {
        function: Arc::new(Function::builtin(Builtin::Add)),
        args: vec![Expression::Int(1), Expression::Id("x".into())],
    };
    assert_eq!(call.to_string(), "(+ 1 x)");

    let let_form = Expression::Let {
        name: "x".into(),
        value: Box::new(Expression::Int(5)),
        body: Box::new(call),
    };
    assert_eq!(let_form.to_string(), "(let x 5 (+ 1 x))");
}

#[test]
fn test_zero_values_have_their_type_shape() {
    assert_eq!(Expression::zero_value(&ExprType::Double), Expression::Double(0.0));
    assert_eq!(Expression::zero_value(&ExprType::Int), Expression::Int(0));
    assert_eq!(Expression::zero_value(&ExprType::Str), Expression::Str(String::new()));
    assert_eq!(Expression::zero_value(&ExprType::Id), Expression::Id(String::new()));
    assert_eq!(
        Expression::zero_value(&ExprType::list_of(ExprType::Int)),
        Expression::List(vec![])
    );
    assert_eq!(Expression::zero_value(&ExprType::None), Expression::None);
}

#[test]
fn test_numeric_coercion() {
    assert_eq!(Expression::Int(4).as_f64(), 4.0);
    assert_eq!(Expression::Str("4".into()).as_f64(), 0.0);
    assert_eq!(
        Expression::Int(4).coerce_to(&ExprType::Double),
        Expression::Double(4.0)
    );
    assert_eq!(Expression::Int(4).coerce_to(&ExprType::Int), Expression::Int(4));
    assert_eq!(
        Expression::Str("a".into()).coerce_to(&ExprType::Double),
        Expression::Str("a".into())
    );
}
