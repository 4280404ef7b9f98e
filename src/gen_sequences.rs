use rand::seq::SliceRandom;
use rand::Rng;

/// Generates a random non-decreasing vector of `n` values in [0, `u`).
/// Duplicates are expected whenever `n` is large relative to `u`.
///
/// ## Examples
/// ```
/// use seqkit::gen_sequences::gen_non_decreasing_sequence;
///
/// let sequence = gen_non_decreasing_sequence(100, 10);
/// assert!(sequence.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn gen_non_decreasing_sequence(n: usize, u: usize) -> Vec<usize> {
    let mut rng = rand::rng();
    let mut v: Vec<usize> = (0..n).map(|_x| rng.random_range(0..u)).collect();
    v.sort_unstable();

    v
}

/// Generates a random strictly increasing sequence of `n` values up to `u`.
///
/// ## Examples
/// ```
/// use seqkit::gen_sequences::gen_strictly_increasing_sequence;
///
/// let sequence = gen_strictly_increasing_sequence(5, 10);
/// assert!(sequence.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn gen_strictly_increasing_sequence(n: usize, u: usize) -> Vec<usize> {
    if u == n {
        return (0..n).collect();
    }

    let mut rng = rand::rng();
    let mut v: Vec<usize> = (0..n).map(|_x| rng.random_range(0..(u - n))).collect();
    v.sort_unstable();
    for (i, value) in v.iter_mut().enumerate() {
        // remove duplicates to make a strictly increasing sequence
        *value += i;
    }
    v
}

/// Generates a length-`n` sequence of values in [0, `u`) in which one
/// value occupies ⌊n/2⌋ + 1 positions, and returns it together with
/// that majority value. Positions are shuffled uniformly.
///
/// ## Examples
/// ```
/// use seqkit::gen_sequences::gen_majority_sequence;
///
/// let (sequence, value) = gen_majority_sequence(101, 50);
/// let occurrences = sequence.iter().filter(|&&x| x == value).count();
/// assert!(occurrences > sequence.len() / 2);
/// ```
pub fn gen_majority_sequence(n: usize, u: usize) -> (Vec<i64>, i64) {
    assert!(n > 0, "a majority sequence cannot be empty");

    let mut rng = rand::rng();
    let value = rng.random_range(0..u) as i64;
    let mut v: Vec<i64> = (0..n / 2 + 1).map(|_x| value).collect();
    v.extend((n / 2 + 1..n).map(|_x| rng.random_range(0..u) as i64));
    v.shuffle(&mut rng);

    (v, value)
}
