use seqkit::{dedup_sorted, majority};

use clap::Parser;
use std::io::{self, BufRead};

/// Reads one line of whitespace-separated integers from stdin and
/// applies the selected operations to it.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the majority element of the input, if one exists.
    #[arg(short, long)]
    majority: bool,
    /// Compact the input (which must be sorted) and print the number of
    /// distinct values followed by the distinct prefix.
    #[arg(short, long)]
    dedup: bool,
}

fn main() {
    let args = Args::parse();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .expect("failed to read from stdin");
    let mut nums: Vec<i64> = line
        .split_whitespace()
        .map(|tok| {
            tok.parse()
                .expect("input must be whitespace-separated integers")
        })
        .collect();

    if args.majority {
        match majority(&nums) {
            Some(v) => println!("majority: {v}"),
            None => println!("majority: none"),
        }
    }
    if args.dedup {
        let count = dedup_sorted(&mut nums);
        let prefix: Vec<String> = nums[..count].iter().map(|x| x.to_string()).collect();
        println!("distinct: {} [{}]", count, prefix.join(", "));
    }
}
