use std::io;
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use ordered_tree::console::{self, Keys};
use ordered_tree::{arena, boxed};

/// Reads integers from stdin into a binary search tree, then prints them in order.
#[derive(Debug, Parser)]
#[command(version, author)]
struct Opts {
    /// How the tree lays out its nodes in memory
    #[arg(short, long, value_enum, default_value_t = Layout::Boxed)]
    layout: Layout,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// Each node owns its children through a `Box`
    Boxed,
    /// All nodes live in one `Vec` and link by index
    Arena,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let opts = Opts::parse();

    if let Err(e) = SimpleLogger::new().with_level(level(opts.verbose)).init() {
        eprintln!("could not install logger: {}", e);
    }
    log::debug!("{:?}", opts);

    let mut tree: Box<dyn Keys> = match opts.layout {
        Layout::Boxed => Box::new(boxed::Tree::<i32>::new()),
        Layout::Arena => Box::new(arena::Tree::<i32>::new()),
    };

    let stdin = io::stdin();
    if let Err(e) = console::run(stdin.lock(), io::stdout().lock(), tree.as_mut()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
