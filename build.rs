//! Build script to embed the default puzzle
//!
//! Reads the clue file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_clue_table(
        "data/puzzle.txt",
        &Path::new(&out_dir).join("puzzle.rs"),
        "Default lock puzzle",
    );

    println!("cargo:rerun-if-changed=data/puzzle.txt");
}

fn generate_clue_table(input_path: &str, output_path: &Path, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut rows = Vec::new();
    let mut code_length = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (guess, rest) = next_field(line);
        let (digit_matches, rest) = next_field(rest);
        let (position_matches, label) = next_field(rest);
        let digit_matches = parse_count(digit_matches, input_path, index);
        let position_matches = parse_count(position_matches, input_path, index);
        let label = label.trim();

        assert!(
            guess.chars().all(|c| c.is_ascii_digit()),
            "{input_path}:{}: guess must be digits",
            index + 1
        );
        match code_length {
            None => code_length = Some(guess.len()),
            Some(len) => assert_eq!(
                len,
                guess.len(),
                "{input_path}:{}: all guesses must share one length",
                index + 1
            ),
        }

        rows.push((guess.to_string(), digit_matches, position_matches, label.to_string()));
    }

    let code_length = code_length.unwrap_or_else(|| panic!("{input_path} holds no clues"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated clue table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}: (guess, digit matches, position matches, label)").unwrap();
    writeln!(output, "pub const CLUES: &[(&str, u8, u8, &str)] = &[").unwrap();
    for (guess, digit_matches, position_matches, label) in rows {
        writeln!(
            output,
            "    ({guess:?}, {digit_matches}, {position_matches}, {label:?}),"
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Code length of the default puzzle").unwrap();
    writeln!(output, "pub const CODE_LENGTH: usize = {code_length};").unwrap();
}

/// Split off the first whitespace-separated field, as the runtime parser does
fn next_field(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    text.split_once(char::is_whitespace).unwrap_or((text, ""))
}

fn parse_count(field: &str, input_path: &str, index: usize) -> u8 {
    field
        .parse()
        .ok()
        .unwrap_or_else(|| panic!("{input_path}:{}: expected a match count", index + 1))
}
