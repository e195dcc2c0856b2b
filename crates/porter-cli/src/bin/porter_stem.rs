// porter-stem: Stem text from stdin.
//
// By default every input line is tokenized (punctuation removed, lowercased,
// stop words dropped) and the stems are printed on one output line,
// separated by spaces. With --words every line is taken as a single word and
// printed as "word<TAB>stem"; lines that are not valid words are reported on
// stderr and the tool exits with status 1 at the end.
//
// Usage:
//   porter-stem [OPTIONS] [--words]

use std::io::{self, BufRead, Write};

fn main() {
    porter_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        porter_cli::parse_common_args(&args).unwrap_or_else(|e| porter_cli::fatal(&e));

    if porter_cli::wants_help(&args) {
        println!("porter-stem: Stem English text.");
        println!();
        println!("Usage: porter-stem [OPTIONS] [--words]");
        println!();
        println!("Reads text from stdin and prints one line of stems per input line.");
        println!();
        println!("Options:");
        println!("  --words                   Treat each line as one word, print word<TAB>stem");
        println!("{}", porter_cli::COMMON_OPTIONS_HELP);
        return;
    }

    let words_mode = args.iter().any(|a| a == "--words");
    if let Some(unknown) = args.iter().find(|a| *a != "--words") {
        porter_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let handle = porter_cli::load_handle(&common).unwrap_or_else(|e| porter_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failures = 0usize;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        if words_mode {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            match handle.stem(word) {
                Ok(stem) => {
                    let _ = writeln!(out, "{word}\t{stem}");
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    failures += 1;
                }
            }
        } else {
            let _ = writeln!(out, "{}", handle.preprocess(&line).join(" "));
        }
    }

    let _ = out.flush();
    if failures > 0 {
        tracing::warn!(failures, "some words could not be stemmed");
        std::process::exit(1);
    }
}
