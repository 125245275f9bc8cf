mod common;

use common::{program, run, run_with_input, tokens};
use crepe::interpreter::RuntimeError;
use crepe::intermediate_ir::OpCode;
use crepe::lexer_tokenizer::TokenKind;

const COUNTDOWN: &str = "main { nombre x = 10; tour_eiffel (x > 0) { afficher(x); x = x - 1; } }";

#[test]
fn scenario_a_tokens_and_output() {
    let source = "main { nombre x = 5; afficher(x); }";
    let kinds: Vec<TokenKind> = tokens(source).into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Main,
            TokenKind::LBrace,
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::IntegerConst,
            TokenKind::EndStr,
            TokenKind::Print,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::RParen,
            TokenKind::EndStr,
            TokenKind::RBrace,
        ]
    );
    assert_eq!(run(source).unwrap(), "5.0");
}

#[test]
fn scenario_b_countdown_terminates() {
    let expected: Vec<String> = (1..=10).rev().map(|n| format!("{n}.0")).collect();
    assert_eq!(run(COUNTDOWN).unwrap(), expected.join("\n"));
}

#[test]
fn scenario_c_division_by_zero() {
    let err = run("main { afficher(1 / 0); }").unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero));
    assert!(err.to_string().to_lowercase().contains("division by zero"));
}

#[test]
fn scenario_d_only_consequent_runs() {
    let source = "main { macaron (1 == 1) { afficher(1); } autre { afficher(2); } }";
    assert_eq!(run(source).unwrap(), "1.0");
}

#[test]
fn parsing_is_deterministic() {
    let sources = [
        COUNTDOWN,
        "main { crêpe r; lire(r); macaron (r >= 2.5) { afficher(\"grand\"); } autre { afficher(r * 2); } }",
        "",
    ];
    for source in sources {
        assert_eq!(program(source), program(source));
    }
}

#[test]
fn two_char_operators_never_split() {
    for (source, kind) in [
        ("a == b", TokenKind::Equal),
        ("a != b", TokenKind::NotEqual),
        ("a <= b", TokenKind::LessEqual),
        ("a >= b", TokenKind::GreaterEqual),
        ("a||b", TokenKind::Or),
        ("a&&b", TokenKind::And),
    ] {
        let lexed = tokens(source);
        assert_eq!(lexed.len(), 3, "{source}");
        assert_eq!(lexed[1].kind, kind);
        assert_eq!(lexed[1].lexeme.len(), 2);
    }
}

#[test]
fn division_by_zero_from_variables() {
    let err = run("main { nombre y = 3; nombre x = 6; y = y - 3; afficher(x / y); }").unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero));
}

#[test]
fn undeclared_names_fail_every_way() {
    assert!(matches!(run("main { z = 1; }"), Err(RuntimeError::AssignToUndefined { .. })));
    assert!(matches!(run_with_input("main { lire(z); }", &["1"]), Err(RuntimeError::ReadIntoUndefined { .. })));
    assert!(matches!(run("main { afficher(z + 1); }"), Err(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn output_order_matches_execution_order() {
    let source = "main {
        nombre i = 1;
        tour_eiffel (i <= 3) {
            macaron (i == 2) { afficher(\"deux\"); } autre {
                nombre j = 0;
                tour_eiffel (j < i) { afficher(j); j = j + 1; }
            }
            i = i + 1;
        }
        afficher(\"fin\");
    }";
    assert_eq!(run(source).unwrap(), "0.0\ndeux\n0.0\n1.0\n2.0\nfin");
}

#[test]
fn read_drives_the_loop() {
    let source = "main { nombre n; lire(n); tour_eiffel (n > 0) { afficher(n); n = n - 1; } }";
    assert_eq!(run_with_input(source, &["3"]).unwrap(), "3.0\n2.0\n1.0");
}

#[test]
fn translation_of_countdown() {
    let code = crepe::translate(&program(COUNTDOWN));
    let ops: Vec<OpCode> = code.iter().map(|i| i.op).collect();
    assert_eq!(
        ops,
        vec![
            OpCode::Assign,
            OpCode::Declare,
            OpCode::Label,
            OpCode::Assign,
            OpCode::Gt,
            OpCode::IfFalse,
            OpCode::Print,
            OpCode::Assign,
            OpCode::Minus,
            OpCode::Assign,
            OpCode::Goto,
            OpCode::Label,
        ]
    );
    let listing = crepe::generate_target_code(&code);
    assert!(listing.starts_with("t1 = 10.0\nx = t1\nlabel L1:"));
    assert!(listing.ends_with("goto L1\nlabel L2:"));
}

#[test]
fn lex_error_reports_character_and_line() {
    let err = crepe::tokenize("main {\n\n  afficher($);\n}").unwrap_err();
    assert_eq!(err.character, '$');
    assert_eq!(err.line, 3);
}

#[test]
fn syntax_error_aborts_without_partial_ast() {
    let err = crepe::parse_source("main { afficher(1); nombre = 2; afficher(3); }").unwrap_err();
    assert!(matches!(err, crepe::CompileError::Syntax(_)));
    assert!(err.to_string().contains("ID"));
}

#[test]
fn accented_names_run_end_to_end() {
    let source = "main { nombre année = 2024; crêpe prénom = 1.5; afficher(année + prénom); }";
    assert_eq!(run(source).unwrap(), "2025.5");
}

#[test]
fn keyword_prefixed_word_splits_like_the_pattern_table() {
    let split: Vec<(TokenKind, String)> = tokens("nombres")
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect();
    assert_eq!(
        split,
        vec![(TokenKind::Int, "nombre".to_string()), (TokenKind::Identifier, "s".to_string())]
    );
    // `nombres;` reads as a declaration of `s`
    assert_eq!(run("main { nombres; s = 3; afficher(s); }").unwrap(), "3.0");
}

#[test]
fn tiny_and_huge_numbers_use_exponent_form() {
    assert_eq!(
        run("main { afficher(1 / 100000); afficher(10000000000000000); }").unwrap(),
        "1e-05\n1e+16"
    );
}
