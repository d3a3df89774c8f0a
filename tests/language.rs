use std::fs;

use mu::{
    ast::{Expression, PrimaryExpression},
    error::RuntimeError,
    interpreter::{
        evaluator::eval,
        lexer::{Token, tokenize},
        parser::parse,
    },
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_mu_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(code.trim()) {
                panic!("mu example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No mu examples found in book/src");
}

fn extract_mu_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```mu") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, expected: i64) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong result for {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script {src:?} succeeded but was expected to fail")
    }
}

#[test]
fn single_digit_sums() {
    for a in 0..=9_i64 {
        for b in 0..=9_i64 {
            assert_result(&format!("(s {a} {b})"), a + b);
        }
    }
}

#[test]
fn nested_sums() {
    assert_result("(s (s 4 5) 4)", 13);
    assert_result("(s 4 (s 5 4))", 13);
    assert_result("(s (s 4 5) (s 3 2))", 14);
    assert_result("(s (s 6 6) 6)", 18);
}

#[test]
fn deep_nesting_works() {
    let mut src = "(s 1 1)".to_string();
    for _ in 0..200 {
        src = format!("(s 1 {src})");
    }
    assert_result(&src, 202);
}

#[test]
fn whitespace_is_filler() {
    assert_result("( s 2 4 )", 6);
    assert_result("  (s\t2\n4)  ", 6);
    assert_eq!(tokenize("(s 2 4)"), tokenize("( s 2 4 )"));
}

#[test]
fn tokenize_is_pure() {
    let input = "(s (s 4 5) 4)";
    assert_eq!(tokenize(input), tokenize(input));
}

#[test]
fn lexer_vocabulary() {
    assert_eq!(tokenize("(s 2 4)"),
               vec![Token::ParenOpen,
                    Token::Operator("s".to_string()),
                    Token::Number(2),
                    Token::Number(4),
                    Token::ParenClose]);
}

#[test]
fn unrecognized_characters_are_dropped() {
    // 'x' is not part of the grammar alphabet, so the lexer drops it and the
    // parser then finds a number where an operator token should be.
    assert_eq!(tokenize("(x 1 2)"),
               vec![Token::ParenOpen, Token::Number(1), Token::Number(2), Token::ParenClose]);
    assert_failure("(x 1 2)");
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_result("(s 1 2)(s 3 4)", 3);

    let tokens = tokenize("(s 1 2)(s 3 4)");
    let mut iter = tokens.iter().enumerate().peekable();
    let expression = parse(&mut iter).expect("first expression should parse");
    assert_eq!(expression,
               Expression { operator: "s".to_string(),
                            first:    1.into(),
                            second:   2.into(), });
}

#[test]
fn truncated_input_is_error() {
    assert_failure("");
    assert_failure("(");
    assert_failure("(s");
    assert_failure("(s 4");
    assert_failure("(s 1 2");
    assert_failure("(s 4 (s 5 4)");
}

#[test]
fn malformed_input_is_error() {
    assert_failure("4");
    assert_failure("(1 2)");
    assert_failure("(s 1)");
    assert_failure(")s 1 2(");
    assert_failure("(s s 1)");
}

#[test]
fn unknown_operator_is_error() {
    // Only "s" ever lexes as an operator, so an unknown code can only reach
    // the evaluator through a hand-built tree.
    let expression = Expression { operator: "d".to_string(),
                                  first:    PrimaryExpression::NumberLiteral(1),
                                  second:   PrimaryExpression::NumberLiteral(2), };

    let err = eval(&expression).expect_err("operator 'd' has no meaning");
    assert!(matches!(err, RuntimeError::UnknownOperator { ref operator } if operator == "d"));
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.mu").expect("missing file");
    assert_result(script.trim(), 14);
}
