//! Integration tests for end-to-end tokenization.
//!
//! These tests run whole Pascal programs through the public API and check
//! the token stream a parser would receive.

use std::time::{Duration, Instant};

use pascal_lexer::{
    dump_tokens, tokenize, tokenize_with, LexerOptions, LineMode, Token, TokenFamily, TokenKind,
};

const FACTORIAL: &str = "program factorial; //\
function fact(n integer) integer; //\
begin //\
  if n <= 1 then fact := 1 { base case } //\
  else fact := n * fact(n - 1) //\
end; //\
begin //\
  writeln(fact(10)) //\
end.";

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_factorial_program() {
    let tokens = tokenize(FACTORIAL);

    assert_eq!(
        kinds(&tokens[..4]),
        vec![
            TokenKind::Program,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Function,
        ]
    );

    let base_case: Vec<&Token> = tokens.iter().filter(|t| t.line == 4).collect();
    let lexemes: Vec<&str> = base_case.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["if", "n", "<=", "1", "then", "fact", ":=", "1"]);

    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Period);
    assert_eq!(last.line, 9);
}

#[test]
fn test_line_numbers_never_decrease() {
    let tokens = tokenize(FACTORIAL);

    assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
}

#[test]
fn test_newline_mode_on_real_source() {
    let source = "program loops;\n\
var i, total;\n\
begin\n\
  total := 0;\n\
  for i := 1 to 10 do\n\
    total := total + i;\n\
  (* report\n     the result *)\n\
  writeln(total)\n\
end.\n";
    let tokens = tokenize_with(source, &LexerOptions::strict()).unwrap();

    let writeln = tokens.iter().find(|t| t.kind == TokenKind::Writeln).unwrap();
    assert_eq!(writeln.line, 9);

    let for_token = tokens.iter().find(|t| t.kind == TokenKind::For).unwrap();
    assert_eq!(for_token.line, 5);

    assert_eq!(tokens.last().map(|t| t.line), Some(10));
}

#[test]
fn test_marker_and_newline_modes_differ_only_in_lines() {
    let source = "a := 1;\nb := a + 2;\nc := b div 3";
    let marker = tokenize(source);
    let newline = tokenize_with(
        source,
        &LexerOptions::default().with_line_mode(LineMode::Newline),
    )
    .unwrap();

    assert_eq!(kinds(&marker), kinds(&newline));
    assert!(marker.iter().all(|t| t.line == 1));
    assert_eq!(newline.last().map(|t| t.line), Some(3));
}

#[test]
fn test_families_cover_program() {
    let tokens = tokenize("var a: array [1..3] of integer; // begin read(a); a[1] := nil end.");
    let families: Vec<TokenFamily> = tokens.iter().map(|t| t.kind.family()).collect();

    for family in [
        TokenFamily::Directive,
        TokenFamily::Identifier,
        TokenFamily::Type,
        TokenFamily::Operator,
        TokenFamily::Punctuation,
        TokenFamily::Literal,
        TokenFamily::Builtin,
    ] {
        assert!(families.contains(&family), "missing {:?}", family);
    }
}

#[test]
fn test_dump_with_reference_codes() {
    let tokens = tokenize("x := 'hi' // y := 2.0");
    let dump = dump_tokens(&tokens, true);

    assert_eq!(
        dump,
        "1\tID\tx\n1\tOP_ATRIB\t:=\n1\tLIT_STRING\t'hi'\n2\tID\ty\n2\tOP_ATRIB\t:=\n2\tLIT_REAL\t2.0\n"
    );
}

#[test]
fn test_unclosed_comment_openers_scale_linearly() {
    let braces = "{".repeat(60_000);
    let stars = "(*".repeat(30_000);

    let start = Instant::now();
    let brace_tokens = tokenize(&braces);
    let star_tokens = tokenize(&stars);
    let elapsed = start.elapsed();

    assert!(brace_tokens.is_empty());
    assert_eq!(star_tokens.len(), 60_000);
    assert_eq!(star_tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(star_tokens[1].kind, TokenKind::MulOp);
    assert!(elapsed < Duration::from_secs(10), "took {:?}", elapsed);
}
