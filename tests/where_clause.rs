use pretty_assertions::assert_eq;
use sieve::prelude::*;

// ========================================================================
// Literals
// ========================================================================

#[test]
fn test_quote_in_value_is_doubled() {
    for value in ["it's", "'", "a'b'c", "' OR '1'='1"] {
        let sql = eq("Name", value).to_where_clause().unwrap();
        let inner = sql
            .strip_prefix("(Name = '")
            .and_then(|s| s.strip_suffix("')"))
            .expect("literal is wrapped in quotes");
        // Every quote inside the literal is part of a doubled pair.
        assert_eq!(inner.matches('\'').count() % 2, 0, "{}", sql);
        assert!(!inner.replace("''", "").contains('\''), "{}", sql);
    }
}

#[test]
fn test_greater_than_int() {
    let e = Expression::new("Age", Operator::GreaterThan, Term::value(21));
    assert_eq!(sieve::compile(&e).unwrap(), "(Age > '21')");
}

#[test]
fn test_non_text_scalars_are_quoted() {
    assert_eq!(eq("Flag", true).to_where_clause().unwrap(), "(Flag = 'true')");
    assert_eq!(eq("Ratio", 1.5).to_where_clause().unwrap(), "(Ratio = '1.5')");

    let id = uuid::Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(
        eq("Key", id).to_where_clause().unwrap(),
        "(Key = '67e55044-10b1-426f-9247-bb680e5fe0c8')"
    );
    assert_eq!(
        is_in("Key", [id]).to_where_clause().unwrap(),
        "(Key  IN ('67e55044-10b1-426f-9247-bb680e5fe0c8'))"
    );
}

#[test]
fn test_comment_injection_stripped() {
    let sql = eq("Name", "x'; DROP TABLE users; --").to_where_clause().unwrap();
    assert_eq!(sql, "(Name = 'x''; DROP TABLE users; ')");
}

#[test]
fn test_sanitize_examples() {
    assert_eq!(sanitize("a--b--c"), "abc");
    assert_eq!(sanitize("it's"), "it''s");
}

// ========================================================================
// Operators
// ========================================================================

#[test]
fn test_binary_operators_need_right() {
    let binary = [
        Operator::And,
        Operator::Or,
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqualTo,
        Operator::LessThan,
        Operator::LessThanOrEqualTo,
        Operator::In,
        Operator::NotIn,
        Operator::Contains,
        Operator::ContainsNot,
    ];
    for op in binary {
        let e = Expression::unary("Col", op);
        assert_eq!(e.to_where_clause(), Err(ClauseError::MissingRight { op }), "{}", op);
    }
}

#[test]
fn test_contains_union() {
    let e = Expression::new("Name", Operator::Contains, Term::value("Jo"));
    assert_eq!(
        e.to_where_clause().unwrap(),
        "((Name LIKE 'Jo%'OR Name LIKE '%Jo%'OR Name LIKE '%Jo'))"
    );
}

#[test]
fn test_contains_sanitizes_both_sides() {
    let e = contains("Na--me", "O'Neil");
    assert_eq!(
        e.to_where_clause().unwrap(),
        "((Name LIKE 'O''Neil%'OR Name LIKE '%O''Neil%'OR Name LIKE '%O''Neil'))"
    );
}

#[test]
fn test_in_list() {
    let e = Expression::new("Id", Operator::In, Term::list([1, 2, 3]));
    assert_eq!(e.to_where_clause().unwrap(), "(Id  IN ('1','2','3'))");
}

#[test]
fn test_nested_both_sides() {
    let e1 = gt("Age", 21);
    let e2 = is_null("Email");
    let e = Expression::new(e1, Operator::And, e2);
    assert_eq!(e.to_where_clause().unwrap(), "((Age > '21') AND (Email  IS NULL))");
}

// ========================================================================
// Combinators
// ========================================================================

#[test]
fn test_fold_singleton_is_identity() {
    let e = contains("Name", "Jo");
    assert_eq!(fold_and(vec![e.clone()]), Some(e));
}

#[test]
fn test_fold_matches_manual_nesting() {
    let (e1, e2, e3) = (gt("Age", 21), eq("Status", "open"), is_not_null("Email"));
    let folded = fold_and(vec![e1.clone(), e2.clone(), e3.clone()]).unwrap();
    let manual = Expression::new(
        e1,
        Operator::And,
        Expression::new(e2, Operator::And, e3),
    );
    assert_eq!(folded.to_where_clause().unwrap(), manual.to_where_clause().unwrap());
    assert_eq!(
        folded.to_where_clause().unwrap(),
        "((Age > '21') AND ((Status = 'open') AND (Email  IS NOT NULL)))"
    );
}

#[test]
fn test_fold_or_four() {
    let folded = fold_or((1..=4).map(|i| eq("n", i))).unwrap();
    assert_eq!(
        folded.to_where_clause().unwrap(),
        "((n = '1') OR ((n = '2') OR ((n = '3') OR (n = '4'))))"
    );
}

#[test]
fn test_prepend_round_trip() {
    let original = or(eq("a", 1), eq("b", 2));
    let prepend = lt("Score", 10);

    let combined = prepend_and(prepend.clone(), original.clone());
    let manual = Expression::new(prepend.clone(), Operator::And, Term::nested(original.clone()));
    assert_eq!(combined.to_where_clause().unwrap(), manual.to_where_clause().unwrap());

    let mut in_place = original.clone();
    in_place.prepend_and(prepend);
    assert_eq!(in_place.to_where_clause(), combined.to_where_clause());
}

#[test]
fn test_prepended_tree_is_independent_of_source() {
    let mut original = eq("a", 1);
    let combined = prepend_or(eq("b", 2), original.clone());
    original.prepend_and(eq("c", 3));
    assert_eq!(
        combined.to_where_clause().unwrap(),
        "((b = '2') OR (a = '1'))"
    );
}

// ========================================================================
// Documents and statements
// ========================================================================

#[test]
fn test_document_to_select() {
    let doc = r#"{ "any": [
        { "left": { "Column": "Name" }, "op": "Contains", "right": { "Scalar": { "Text": "Jo" } } },
        { "left": { "Column": "Id" }, "op": "In", "right": { "List": [ { "Int": 7 }, { "Int": 9 } ] } }
    ] }"#;
    let expr = sieve::document::from_str(doc).unwrap().unwrap();
    let sql = SelectStatement::new("people")
        .columns(["Id", "Name"])
        .filter(expr)
        .limit(5)
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT Id, Name FROM people WHERE (((Name LIKE 'Jo%'OR Name LIKE '%Jo%'OR Name LIKE '%Jo')) OR (Id  IN ('7','9'))) LIMIT 5"
    );
}

#[test]
fn test_expression_serde_round_trip() {
    let e = and(gt("Age", 21), not_in("Code", ["x", "y"]));
    let json = serde_json::to_string(&e).unwrap();
    let back: Expression = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
}
