use seqkit::gen_sequences::gen_majority_sequence;
use seqkit::utils::{type_of, TimingQueries};
use seqkit::{majority, majority_by_run_scan, majority_by_sorting};

const N_RUNS: usize = 5;
const DEFAULT_RANGE: usize = 1000;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    n: usize,
    #[arg(default_value_t = DEFAULT_RANGE)]
    range: usize,
    #[arg(short, long)]
    vote: bool,
    #[arg(short, long)]
    sorting: bool,
    #[arg(long)]
    run_scan: bool,
}

fn test_vote(input: &[i64], expected: i64) {
    let n = input.len();

    let mut t = TimingQueries::new(N_RUNS, n);
    for _ in 0..N_RUNS {
        t.start();
        let res = majority(input);
        t.stop();
        assert_eq!(res, Some(&expected));
    }

    let (t_min, t_max, t_avg) = t.get();
    println!("VOTE: [input: {}, n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]", type_of(&input), n, t_min, t_max, t_avg, N_RUNS);
}

fn test_sorting(input: &[i64], expected: i64) {
    let n = input.len();

    let mut t = TimingQueries::new(N_RUNS, n);
    for _ in 0..N_RUNS {
        let mut a = input.to_vec();
        t.start();
        let res = majority_by_sorting(&mut a);
        t.stop();
        assert_eq!(res, Some(&expected));
    }

    let (t_min, t_max, t_avg) = t.get();
    println!("SORTING: [input: {}, n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]", type_of(&input), n, t_min, t_max, t_avg, N_RUNS);
}

fn test_run_scan(input: &[i64], expected: i64) {
    let n = input.len();

    let mut t = TimingQueries::new(N_RUNS, n);
    for _ in 0..N_RUNS {
        let mut a = input.to_vec();
        t.start();
        let res = majority_by_run_scan(&mut a);
        t.stop();
        assert_eq!(res, Some(&expected));
    }

    let (t_min, t_max, t_avg) = t.get();
    println!("RUN_SCAN: [input: {}, n: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]", type_of(&input), n, t_min, t_max, t_avg, N_RUNS);
}

fn main() {
    let args = Args::parse();

    let (input, expected) = gen_majority_sequence(args.n, args.range);
    println!("n = {}, range = {}", args.n, args.range);

    if args.vote {
        test_vote(&input, expected);
    }
    if args.sorting {
        test_sorting(&input, expected);
    }
    if args.run_scan {
        test_run_scan(&input, expected);
    }
}
