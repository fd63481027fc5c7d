// tests/parser_tests.rs

use lx_lang::ast::{BinOp, Expr, Primary, Separator, UnaryOp};
use lx_lang::lexer::{Lexer, Position};
use lx_lang::parser::{DEFAULT_MAX_DEPTH, ParseError, Parser};
use lx_lang::{parse_expr, parse_file};

fn parse_err(input: &str) -> String {
    parse_expr(input).unwrap_err().to_string()
}

fn file_err(input: &str) -> String {
    parse_file(input).unwrap_err().to_string()
}

fn literal(expr: &Expr) -> bool {
    match &expr.unary.primary {
        Primary::Literal(lit) => lit.value,
        Primary::Grouped(_) => panic!("Expected literal, got group"),
    }
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_literal() {
    let expr = parse_expr("false").unwrap();
    assert!(!literal(&expr));
    assert!(expr.unary.ops.is_empty());
    assert!(expr.rest.is_none());
    assert_eq!(expr.position, Position::new(0, 1, 1));
}

#[test]
fn test_misspelled_literals() {
    let test_cases = vec![
        "t rue", "tr ue", "tru e", "ture", "f alse", "fa lse", "fal se", "fals e", "flase",
        "True", "False",
    ];

    for input in test_cases {
        let first = input.split_whitespace().next().unwrap();
        let expected = format!(
            "1:1: unexpected token \"{}\" (expected primary expression)",
            first
        );
        assert_eq!(parse_err(input), expected, "Failed for input: {}", input);
        assert_eq!(file_err(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_trailing_token_after_literal() {
    assert_eq!(
        parse_err("true ture"),
        "1:6: unexpected token \"ture\" (expected end of input)"
    );
    assert_eq!(
        parse_err("false t rue"),
        "1:7: unexpected token \"t\" (expected end of input)"
    );
}

#[test]
fn test_empty_input() {
    let expected = "1:1: unexpected token \"<EOF>\" (expected primary expression)";
    assert_eq!(parse_err(""), expected);
    assert_eq!(file_err(""), expected);
    assert_eq!(
        parse_err("   "),
        "1:4: unexpected token \"<EOF>\" (expected primary expression)"
    );
}

// ============================================================================
// Parentheses
// ============================================================================

#[test]
fn test_paren_spacing_permutations() {
    let test_cases = vec![
        "(true)", " (true)", "( true)", "(true )", "(true) ", "  (true)", " ( true)",
        " (true )", " (true) ", "(  true)", "( true )", "( true) ", "(true  )", "(true ) ",
        "(true)  ",
    ];

    for input in test_cases {
        let expr = parse_expr(input).unwrap();
        match &expr.unary.primary {
            Primary::Grouped(paren) => assert!(literal(&paren.expr), "Failed for input: {}", input),
            Primary::Literal(_) => panic!("Expected group for input: {}", input),
        }
    }
}

#[test]
fn test_nested_parens() {
    let expr = parse_expr("((true))").unwrap();
    let Primary::Grouped(outer) = &expr.unary.primary else {
        panic!("Expected outer group");
    };
    let Primary::Grouped(inner) = &outer.expr.unary.primary else {
        panic!("Expected inner group");
    };
    assert!(literal(&inner.expr));
    assert_eq!(outer.position, Position::new(0, 1, 1));
    assert_eq!(inner.position, Position::new(1, 1, 2));
}

#[test]
fn test_unclosed_paren() {
    for input in ["(true ", " (true", "( true"] {
        let mut parser = Parser::new(Lexer::new(input)).unwrap();
        assert_eq!(
            parser.parse().unwrap_err().to_string(),
            "1:7: unexpected token \"<EOF>\" (expected \")\")",
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unmatched_close_paren() {
    assert_eq!(
        parse_err("true)"),
        "1:5: unexpected token \")\" (expected end of input)"
    );
    assert_eq!(
        parse_err("()"),
        "1:2: unexpected token \")\" (expected primary expression)"
    );
}

// ============================================================================
// Unary Operators
// ============================================================================

#[test]
fn test_unary_ops() {
    let test_cases = vec![
        ("not true", UnaryOp::Not),
        ("~true", UnaryOp::Not),
        (" ~  true", UnaryOp::Not),
        ("nullify true", UnaryOp::Nullify),
        ("truify true", UnaryOp::Truify),
        ("id true", UnaryOp::Id),
    ];

    for (input, expected) in test_cases {
        let expr = parse_expr(input).unwrap();
        assert_eq!(expr.unary.ops.len(), 1, "Failed for input: {}", input);
        assert_eq!(expr.unary.ops[0].op, expected, "Failed for input: {}", input);
        assert!(literal(&expr));
    }
}

#[test]
fn test_unary_ops_keep_source_order() {
    let expr = parse_expr("not nullify ~ id true").unwrap();
    let ops: Vec<UnaryOp> = expr.unary.ops.iter().map(|op| op.op).collect();
    assert_eq!(ops, vec![UnaryOp::Not, UnaryOp::Nullify, UnaryOp::Not, UnaryOp::Id]);
    assert_eq!(expr.unary.ops[1].position, Position::new(4, 1, 5));
    assert_eq!(*expr.unary.primary.position(), Position::new(17, 1, 18));
}

#[test]
fn test_unary_op_without_operand() {
    for input in ["not", "nullify", "truify", "id", "~"] {
        let expected = format!(
            "1:{}: unexpected token \"<EOF>\" (expected primary expression)",
            input.len() + 1
        );
        assert_eq!(parse_err(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_glued_unary_words() {
    assert_eq!(
        parse_err("notnot true"),
        "1:1: unexpected token \"notnot\" (expected primary expression)"
    );
    assert_eq!(
        parse_err("nullifyx true"),
        "1:1: unexpected token \"nullifyx\" (expected primary expression)"
    );
}

// ============================================================================
// Binary Chains
// ============================================================================

#[test]
fn test_every_binary_spelling_parses() {
    for op in BinOp::ALL {
        for spelling in op.spellings() {
            for (left, right) in [("false", "false"), ("false", "true"), ("not true", "true")] {
                let input = format!("{} {} {}", left, spelling.as_str(), right);
                let expr = parse_expr(&input).unwrap();
                let rest = expr.rest.as_ref().expect("binary rest");
                assert_eq!(rest.op.op, op, "Failed for input: {}", input);
            }
        }
    }
}

#[test]
fn test_binary_op_without_right_operand() {
    for op in BinOp::ALL {
        for spelling in op.spellings() {
            let input = format!("true {}", spelling.as_str());
            let expected = format!(
                "1:{}: unexpected token \"<EOF>\" (expected primary expression)",
                input.chars().count() + 1
            );
            assert_eq!(parse_err(&input), expected, "Failed for input: {}", input);

            let expected = format!(
                "1:1: unexpected token \"{}\" (expected primary expression)",
                spelling.as_str()
            );
            assert_eq!(parse_err(spelling.as_str()), expected);
        }
    }
}

#[test]
fn test_chain_is_right_associative() {
    // Should be: true and (false or true)
    let expr = parse_expr("true and false or true").unwrap();
    assert!(literal(&expr));

    let rest = expr.rest.as_ref().unwrap();
    assert_eq!(rest.op.op, BinOp::And);
    assert_eq!(rest.position, Position::new(5, 1, 6));
    assert!(!literal(&rest.expr));
    assert_eq!(rest.expr.position, Position::new(9, 1, 10));

    let inner = rest.expr.rest.as_ref().unwrap();
    assert_eq!(inner.op.op, BinOp::Or);
    assert!(literal(&inner.expr));
    assert!(inner.expr.rest.is_none());
}

#[test]
fn test_parens_group_left() {
    // Should be: (true and false) or true
    let expr = parse_expr("(true and false) or true").unwrap();
    let Primary::Grouped(group) = &expr.unary.primary else {
        panic!("Expected group");
    };
    assert_eq!(group.expr.rest.as_ref().unwrap().op.op, BinOp::And);
    assert_eq!(expr.rest.as_ref().unwrap().op.op, BinOp::Or);
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_file_terminators() {
    for input in ["false;;true", "false\ntrue", "false\r\n\r\ntrue", "false ;; \n ;;true\n"] {
        let file = parse_file(input).unwrap();
        assert_eq!(file.statements.len(), 2, "Failed for input: {:?}", input);
        assert!(!literal(&file.statements[0].expr));
        assert!(literal(&file.statements[1].expr));
        assert!(file.statements[0].terminator.is_some());
    }
}

#[test]
fn test_terminator_run_collapses() {
    let file = parse_file("false\r\n\r\ntrue").unwrap();
    let terminator = file.statements[0].terminator.as_ref().unwrap();
    assert_eq!(terminator.separators, vec![Separator::Newline, Separator::Newline]);
    assert_eq!(terminator.position, Position::new(5, 1, 6));
    assert!(file.statements[1].terminator.is_none());

    let file = parse_file("true;;\n").unwrap();
    assert_eq!(file.statements.len(), 1);
    assert_eq!(
        file.statements[0].terminator.as_ref().unwrap().separators,
        vec![Separator::DoubleSemicolon, Separator::Newline]
    );
}

#[test]
fn test_statement_positions() {
    let file = parse_file("true;;\n  not false").unwrap();
    assert_eq!(file.position, Position::new(0, 1, 1));
    assert_eq!(file.statements[1].position, Position::new(9, 2, 3));
    assert_eq!(file.statements[1].expr.unary.position, Position::new(9, 2, 3));
}

#[test]
fn test_file_needs_terminator_between_statements() {
    assert_eq!(
        file_err("true false"),
        "1:6: unexpected token \"false\" (expected terminator or end of input)"
    );
    assert_eq!(
        file_err("true ture"),
        "1:6: unexpected token \"ture\" (expected terminator or end of input)"
    );
}

#[test]
fn test_bad_statement_after_newline() {
    for input in ["true\nt rue", "true\nture", "false\nflase"] {
        let first = input.lines().nth(1).unwrap().split_whitespace().next().unwrap();
        let expected = format!(
            "2:1: unexpected token \"{}\" (expected primary expression)",
            first
        );
        assert_eq!(file_err(input), expected, "Failed for input: {:?}", input);
    }
}

#[test]
fn test_leading_terminator_is_rejected() {
    assert_eq!(
        file_err("\ntrue"),
        "1:1: unexpected token \"\\n\" (expected primary expression)"
    );
}

#[test]
fn test_terminator_text_is_escaped() {
    let test_cases = vec![
        ("true\r\nfalse", "1:5: unexpected token \"\\r\\n\" (expected end of input)"),
        ("true\nfalse", "1:5: unexpected token \"\\n\" (expected end of input)"),
        ("true;;false", "1:5: unexpected token \";;\" (expected end of input)"),
    ];

    for (input, expected) in test_cases {
        let message = parse_err(input);
        assert_eq!(message, expected, "Failed for input: {:?}", input);
        assert!(!message.contains(['\n', '\r']), "Failed for input: {:?}", input);
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_lex_error_through_parser() {
    let err = parse_expr("true && false").unwrap_err();
    assert!(matches!(err, ParseError::Lex(_)));
    assert_eq!(err.to_string(), "1:6: invalid input text \"&&\"");
    assert_eq!(*err.position(), Position::new(5, 1, 6));
}

#[test]
fn test_error_names_file() {
    let mut parser = Parser::new(Lexer::with_filename("true\n(", "rules.lx")).unwrap();
    let err = parser.parse_file().unwrap_err();
    assert_eq!(
        err.to_string(),
        "rules.lx:2:2: unexpected token \"<EOF>\" (expected primary expression)"
    );
}

#[test]
fn test_nesting_limit() {
    let nested = |depth: usize| format!("{}true{}", "(".repeat(depth), ")".repeat(depth));

    let shallow = nested(4);
    let mut parser = Parser::new(Lexer::new(&shallow)).unwrap().with_max_depth(5);
    assert!(parser.parse().is_ok());

    let deep = nested(5);
    let mut parser = Parser::new(Lexer::new(&deep)).unwrap().with_max_depth(5);
    let err = parser.parse().unwrap_err();
    assert_eq!(
        err,
        ParseError::TooDeep {
            position: Position::new(5, 1, 6),
            limit: 5,
        }
    );
    assert_eq!(err.to_string(), "1:6: expression nested deeper than 5 levels");
}

#[test]
fn test_chain_links_and_groups_share_the_limit() {
    // three links, the last one grouped: four levels
    let source = "true and true or (true)";
    let mut parser = Parser::new(Lexer::new(source)).unwrap().with_max_depth(4);
    assert_eq!(parser.parse().unwrap().depth(), 4);

    let mut parser = Parser::new(Lexer::new(source)).unwrap().with_max_depth(3);
    assert_eq!(
        parser.parse().unwrap_err().to_string(),
        "1:19: expression nested deeper than 3 levels"
    );
}

#[test]
fn test_long_chains_count_towards_the_limit() {
    let chain = vec!["true"; DEFAULT_MAX_DEPTH].join(" and ");
    assert!(parse_expr(&chain).is_ok());

    let chain = vec!["true"; DEFAULT_MAX_DEPTH + 1].join(" and ");
    assert!(matches!(parse_expr(&chain), Err(ParseError::TooDeep { .. })));
}

#[test]
fn test_parse_is_deterministic() {
    for input in ["true => (false <~> not true)", "true ture", "(true", "a & b"] {
        assert_eq!(parse_expr(input), parse_expr(input));
    }
}
