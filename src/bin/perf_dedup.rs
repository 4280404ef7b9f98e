use seqkit::dedup_sorted;
use seqkit::gen_sequences::{gen_non_decreasing_sequence, gen_strictly_increasing_sequence};
use seqkit::utils::{type_of, TimingQueries};

const N_RUNS: usize = 5;
const DEFAULT_RANGE: usize = 1000;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    n: usize,
    /// Value range for the duplicate-heavy input; smaller means longer runs.
    #[arg(default_value_t = DEFAULT_RANGE)]
    range: usize,
}

fn test_dedup(label: &str, input: &[usize]) {
    let n = input.len();

    let mut t = TimingQueries::new(N_RUNS, n);
    let mut count = 0;
    for _ in 0..N_RUNS {
        let mut a = input.to_vec();
        t.start();
        count = dedup_sorted(&mut a);
        t.stop();
    }

    let (t_min, t_max, t_avg) = t.get();
    println!("{}: [input: {}, n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]", label, type_of(&input), n, t_min, t_max, t_avg, N_RUNS);

    println!("IGNORE: {count}");
}

fn main() {
    let args = Args::parse();
    println!("n = {}, range = {}", args.n, args.range);

    let duplicate_heavy = gen_non_decreasing_sequence(args.n, args.range);
    test_dedup("DEDUP_DUPLICATE_HEAVY", &duplicate_heavy);

    let distinct = gen_strictly_increasing_sequence(args.n, args.n * 2);
    test_dedup("DEDUP_ALREADY_DISTINCT", &distinct);
}
