use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use pascal_lexer::{display_error, dump_tokens, tokenize_with, LexerOptions, LineMode, UnmatchedPolicy};

fn usage() -> ExitCode {
    eprintln!("Usage: pascal-lex [--strict] [--newlines] [--codes] <file>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict    Fail on text no pattern recognises");
    eprintln!("  --newlines  Count physical newlines instead of `//` markers");
    eprintln!("  --codes     Print reference token codes (DIR_BEGIN, OP_SUM, ...)");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut options = LexerOptions::default();
    let mut use_codes = false;
    let mut file_path = None;

    for arg in &args {
        match arg.as_str() {
            "--strict" => options = options.with_unmatched(UnmatchedPolicy::Error),
            "--newlines" => options = options.with_line_mode(LineMode::Newline),
            "--codes" => use_codes = true,
            "-h" | "--help" => return usage(),
            flag if flag.starts_with("--") => {
                eprintln!("Error: unknown option {}", flag);
                return usage();
            }
            path if file_path.is_none() => file_path = Some(path),
            _ => return usage(),
        }
    }

    let Some(file_path) = file_path else {
        return usage();
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {}", file_path, e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let tokens = match tokenize_with(&source, &options) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, file_path);
            return ExitCode::FAILURE;
        }
    };
    eprintln!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    print!("{}", dump_tokens(&tokens, use_codes));
    ExitCode::SUCCESS
}
