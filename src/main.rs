//! CLI entry point for lsr

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use lsr::{JsonFormatter, ListOptions, ListWalker, TextFormatter};

#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(about = "List information about files and directories")]
#[command(version)]
struct Args {
    /// Paths to list
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Use a long listing format
    #[arg(short, long)]
    long: bool,

    /// Do not ignore entries starting with .
    #[arg(short, long)]
    all: bool,

    /// Sort by file size, largest first
    #[arg(short = 'S', long = "sort")]
    sort: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long)]
    recursive: bool,

    /// Output listings as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let options = ListOptions {
        long: args.long,
        all: args.all,
        sort_by_size: args.sort,
        recursive: args.recursive,
    };
    let walker = ListWalker::new(options);

    let result = if args.json {
        let mut formatter = JsonFormatter::new(io::stdout().lock(), io::stderr());
        walker.run(&args.paths, &mut formatter)
    } else {
        let mut formatter = TextFormatter::new(args.long, io::stdout().lock(), io::stderr());
        walker.run(&args.paths, &mut formatter)
    };

    match result {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("lsr: error writing output: {}", e);
            process::exit(1);
        }
    }
}
