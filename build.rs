//! Build script to embed the word lists
//!
//! Reads `data/*.txt` (one word per line) and writes `OUT_DIR` sources with
//! `&[&str]` constants and their lengths.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Common words the secret word is drawn from",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Dictionary of words accepted as guesses",
    ),
];

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    for (input, output, const_name, doc) in LISTS {
        generate_word_list(input, &Path::new(&out_dir).join(output), const_name, doc)?;
        println!("cargo:rerun-if-changed={input}");
    }

    Ok(())
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = io::BufWriter::new(fs::File::create(output_path)?);

    writeln!(output, "// Generated from {input_path}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(output, "    {word:?},")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len())?;

    output.flush()
}
