//! datefmt command-line front-end

use datefmt::{DateInput, FormatterContext};
use std::env;
use std::process;

fn run(pattern: &str, date: Option<&str>, lang: Option<&str>) -> Result<(), String> {
    let mut context = FormatterContext::new();

    if let Some(name) = lang {
        context.set_lang(name);
    }

    let input = match date {
        Some(text) => DateInput::from(text),
        None => DateInput::Now,
    };

    println!("{}", context.format(pattern, input));
    Ok(())
}

fn print_formatters() {
    let context = FormatterContext::new();
    let mut names = context.formatters();
    names.sort();
    for name in names {
        println!("{}", name);
    }
}

fn print_usage(program: &str) {
    eprintln!("datefmt v{}", env!("CARGO_PKG_VERSION"));
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} <pattern> [date]     Format a date (defaults to now)", program);
    eprintln!("  {} --formatters         List registered named formats", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --lang <name>       Locale for month/weekday names");
    eprintln!("  -h, --help              Show this help");
    eprintln!();
    eprintln!("Dates are accepted as RFC 3339, `YYYY-MM-DDTHH:MM:SS`,");
    eprintln!("`YYYY-MM-DD` or a Unix timestamp in seconds; anything else");
    eprintln!("formats the current instant.");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut lang: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage(&args[0]);
                return;
            }
            "--formatters" => {
                print_formatters();
                return;
            }
            "-l" | "--lang" => {
                i += 1;
                match args.get(i) {
                    Some(name) => lang = Some(name.clone()),
                    None => {
                        eprintln!("Error: --lang requires a locale name");
                        process::exit(1);
                    }
                }
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    if positional.is_empty() || positional.len() > 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let result = run(
        &positional[0],
        positional.get(1).map(|s| s.as_str()),
        lang.as_deref(),
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
