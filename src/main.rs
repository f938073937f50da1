use std::fs;

use clap::Parser;
use incra::run;

/// incra is a deliberately tiny interpreted language with integer variables,
/// a print statement, and a single built-in increment function.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells incra to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run(&script) {
        Ok(outputs) => {
            for value in outputs {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
