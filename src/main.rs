//! CLI entry point for dirlist

use std::io::{self, BufWriter};
use std::process;

use clap::Parser;
use dirlist::{ListingWriter, Walk};

/// The directory walked on every run, resolved against the current working
/// directory.
const ROOT: &str = "typiq";

#[derive(Parser, Debug)]
#[command(name = "dirlist")]
#[command(about = "Recursively lists every directory with its subfolders and files")]
#[command(version)]
struct Args {}

fn main() {
    let _args = Args::parse();

    let walk = match Walk::new(ROOT) {
        Ok(walk) => walk,
        Err(e) => {
            eprintln!("dirlist: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_listing(walk) {
        eprintln!("dirlist: error writing output: {}", e);
        process::exit(1);
    }
}

/// Stream every traversal step to stdout.
fn print_listing(walk: Walk) -> io::Result<()> {
    let stdout = io::stdout().lock();
    let mut writer = ListingWriter::new(BufWriter::new(stdout));

    for step in walk {
        writer.write_step(&step)?;
    }
    writer.flush()
}
