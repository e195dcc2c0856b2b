// porter-freq: Stem frequency list.
//
// Reads running text from stdin, tokenizes and stems it, and prints every
// stem with the number of tokens that reduced to it, most frequent first.
// Tokens that cannot be stemmed (digits, non-ASCII letters) are counted
// separately.
//
// Usage:
//   porter-freq [OPTIONS]

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

fn main() {
    porter_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        porter_cli::parse_common_args(&args).unwrap_or_else(|e| porter_cli::fatal(&e));

    if porter_cli::wants_help(&args) {
        println!("porter-freq: Convert text to a stem frequency list.");
        println!();
        println!("Usage: porter-freq [OPTIONS]");
        println!();
        println!("Reads text from stdin, stems every word and prints stem<TAB>count,");
        println!("sorted by count (descending), then alphabetically.");
        println!();
        println!("Options:");
        println!("{}", porter_cli::COMMON_OPTIONS_HELP);
        return;
    }
    if let Some(unknown) = args.first() {
        porter_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let handle = porter_cli::load_handle(&common).unwrap_or_else(|e| porter_cli::fatal(&e));

    let stdin = io::stdin();
    let mut stem_freqs: HashMap<String, u64> = HashMap::new();
    let mut other_freqs: HashMap<String, u64> = HashMap::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        for token in handle.analyze(&line) {
            let freqs = if token.stemmed {
                &mut stem_freqs
            } else {
                &mut other_freqs
            };
            *freqs.entry(token.stem).or_insert(0) += 1;
        }
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let _ = writeln!(out, "=== Stems ===");
    for (stem, freq) in sorted_by_frequency(stem_freqs) {
        let _ = writeln!(out, "{stem}\t{freq}");
    }

    let _ = writeln!(out, "=== Unstemmed tokens ===");
    for (token, freq) in sorted_by_frequency(other_freqs) {
        let _ = writeln!(out, "{token}\t{freq}");
    }
}

/// Sort by frequency (descending), then alphabetically.
fn sorted_by_frequency(freqs: HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut list: Vec<(String, u64)> = freqs.into_iter().collect();
    list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    list
}
