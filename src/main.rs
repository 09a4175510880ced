use std::{fs, path::PathBuf, process};

use clap::Parser;
use nixi::{compile, get_result};

/// nixi runs scripts written in a small language with a declarative GUI
/// sub-language, or compiles them into Python programs built on PyQt5.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells nixi to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the last value of
    /// a nixi script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Compile the script to Python instead of running it.
    #[arg(short, long)]
    compile: bool,

    /// Where to write the compiled program. Prints to standard output if
    /// omitted.
    #[arg(short, long, requires = "compile")]
    output: Option<PathBuf>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    if args.compile {
        let python = compile(&script).unwrap_or_else(|e| {
                                         eprintln!("{e}");
                                         process::exit(1);
                                     });

        match &args.output {
            Some(path) => {
                if let Err(e) = fs::write(path, python) {
                    eprintln!("Failed to write '{}': {e}", path.display());
                    process::exit(1);
                }
            },
            None => print!("{python}"),
        }
        return;
    }

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        process::exit(1);
    }
}
