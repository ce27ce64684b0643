use std::io::Write;

use log::{debug, error, info};
use nodelist::NodeList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AccessConfig;
use crate::error::Result;
use crate::harness::{
    prepare, report, run_trials, time_operation, Comparison, Sample, Side, Trials,
};

pub const TITLE: &str = "Performance comparison: vector vs linked list for traversal and access";

/// Read access by position, however the container has to get there.
pub trait Positional {
    fn len(&self) -> usize;

    fn read(&self, index: usize) -> Option<i32>;
}

impl Positional for Vec<i32> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn read(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }
}

impl Positional for NodeList<i32> {
    fn len(&self) -> usize {
        NodeList::len(self)
    }

    fn read(&self, index: usize) -> Option<i32> {
        self.get(index).copied()
    }
}

/// Sum of `0..n`.
pub fn closed_form_sum(n: usize) -> i64 {
    let n = n as i64;
    n * (n - 1) / 2
}

/// Sums every element in iteration order. Returns the elapsed milliseconds
/// and the sum.
pub fn traverse<C>(container: &mut C) -> (f64, i64)
where
    for<'a> &'a C: IntoIterator<Item = &'a i32>,
{
    let mut sum = 0i64;
    let millis = time_operation(
        container,
        |c, _| {
            let c: &C = c;
            sum = IntoIterator::into_iter(c).map(|&v| i64::from(v)).sum();
            sum
        },
        1,
    );
    (millis, sum)
}

/// Reads `trials.actual` positions drawn from a generator seeded with `seed`
/// and rescales the duration to `trials.intended`. Index draws happen inside
/// the timed region.
pub fn random_access<C: Positional>(
    label: &str,
    container: &mut C,
    trials: Trials,
    seed: u64,
) -> (Sample, i64) {
    let len = container.len();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sum = 0i64;
    let sample = run_trials(label, container, trials, |c, _| {
        if len > 0 {
            let index = rng.gen_range(0..len);
            sum += c.read(index).map_or(0, i64::from);
        }
        sum
    });
    (sample, sum)
}

pub struct AccessOutcome {
    pub traversal: Comparison,
    pub random_access: Comparison,
    pub traversal_sums: (i64, i64),
}

/// Times traversal and random access on both containers and writes both
/// reports to `out`.
pub fn run<W: Write>(config: &AccessConfig, out: &mut W) -> Result<AccessOutcome> {
    writeln!(out, "Testing traversal and access performance...")?;

    let mut containers = prepare(config.elements)?;

    let (vec_traversal, vec_sum) = traverse(&mut containers.contiguous);
    let (list_traversal, list_sum) = traverse(&mut containers.linked);

    let expected = closed_form_sum(config.elements);
    if vec_sum != expected || list_sum != expected {
        error!(
            "traversal sums disagree, vector: {}, list: {}, expected: {}",
            vec_sum, list_sum, expected
        );
    } else {
        debug!("traversal sum {} matches for both containers", expected);
    }

    let (vec_access, vec_access_sum) = random_access(
        "Vector random access",
        &mut containers.contiguous,
        Trials::full(config.accesses),
        config.seed,
    );
    let (list_access, list_access_sum) = random_access(
        "List random access (scaled)",
        &mut containers.linked,
        Trials::reduced(config.reduced_accesses, config.accesses),
        config.seed,
    );
    debug!(
        "random access sums, vector: {}, list: {}",
        vec_access_sum, list_access_sum
    );
    info!(
        "access phases done over {} elements, list scaled from {} to {} trials",
        config.elements, config.reduced_accesses, config.accesses
    );

    let traversal = Comparison::new(
        "traversal",
        Sample::new("Vector traversal", vec_traversal),
        Sample::new("List traversal", list_traversal),
        Side::Contiguous,
    );
    let access = Comparison::new("random access", vec_access, list_access, Side::Contiguous);

    report(out, &traversal)?;
    writeln!(out)?;
    report(out, &access)?;

    Ok(AccessOutcome {
        traversal,
        random_access: access,
        traversal_sums: (vec_sum, list_sum),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_form_sum() {
        assert_eq!(closed_form_sum(0), 0);
        assert_eq!(closed_form_sum(1), 0);
        assert_eq!(closed_form_sum(4), 6);
        assert_eq!(closed_form_sum(10_000_000), 49_999_995_000_000);
    }

    #[test]
    fn test_traverse_sums_ten_million() {
        let mut containers = prepare(10_000_000).unwrap();
        let (vec_millis, vec_sum) = traverse(&mut containers.contiguous);
        let (list_millis, list_sum) = traverse(&mut containers.linked);

        assert_eq!(vec_sum, 49_999_995_000_000);
        assert_eq!(list_sum, 49_999_995_000_000);
        assert!(vec_millis >= 0.0);
        assert!(list_millis >= 0.0);
    }

    #[test]
    fn test_random_access_same_indices_for_both() {
        let mut containers = prepare(1_000).unwrap();
        let trials = Trials::full(200);
        let (_, vec_sum) = random_access("v", &mut containers.contiguous, trials, 9);
        let (_, list_sum) = random_access("l", &mut containers.linked, trials, 9);
        assert_eq!(vec_sum, list_sum);
    }

    #[test]
    fn test_reduced_trials_are_a_prefix() {
        let mut containers = prepare(1_000).unwrap();
        let (_, full) = random_access("v", &mut containers.contiguous, Trials::full(50), 3);
        let (_, reduced) = random_access(
            "l",
            &mut containers.linked,
            Trials::reduced(50, 5_000),
            3,
        );
        assert_eq!(full, reduced);
    }

    #[test]
    fn test_random_access_on_empty_container() {
        let mut empty: Vec<i32> = Vec::new();
        let (sample, sum) = random_access("empty", &mut empty, Trials::full(10), 1);
        assert_eq!(sum, 0);
        assert!(sample.millis() >= 0.0);
    }

    #[test]
    fn test_run_reports_traversal_and_access() {
        let config = AccessConfig::new(Some(10_000), Some(1_000), Some(100), None);
        let mut out = Vec::new();
        let outcome = run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(outcome.traversal_sums, (49_995_000, 49_995_000));
        assert_eq!(outcome.traversal.operation(), "traversal");
        assert_eq!(outcome.random_access.operation(), "random access");
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Testing traversal and access performance...");
        assert!(lines[1].starts_with("Vector traversal: "));
        assert!(lines[2].starts_with("List traversal: "));
        assert!(lines[3].ends_with("times faster for traversal"));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("Vector random access: "));
        assert!(lines[6].starts_with("List random access (scaled): "));
        assert!(lines[7].ends_with("times faster for random access"));
    }
}
