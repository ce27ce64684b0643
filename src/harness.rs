use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use log::debug;
use nodelist::NodeList;

use crate::error::{HarnessError, Result};

/// The two containers under comparison, filled with the same values.
pub struct Containers {
    pub contiguous: Vec<i32>,
    pub linked: NodeList<i32>,
}

impl Containers {
    pub fn is_consistent(&self) -> bool {
        self.contiguous.len() == self.linked.len()
            && self.contiguous.iter().eq(self.linked.iter())
    }
}

/// Builds both containers holding `0..size` in ascending order.
pub fn prepare(size: usize) -> Result<Containers> {
    let mut contiguous = Vec::new();
    contiguous
        .try_reserve_exact(size)
        .map_err(|source| HarnessError::Capacity {
            requested: size,
            source,
        })?;
    contiguous.extend((0..size).map(|i| i as i32));

    let linked: NodeList<i32> = contiguous.iter().copied().collect();
    debug!("prepared {} elements in each container", size);

    Ok(Containers { contiguous, linked })
}

/// Runs `op` against `container` `repetitions` times and returns the elapsed
/// milliseconds. The clock is read right before the first repetition and
/// right after the last one.
pub fn time_operation<C, R, F>(container: &mut C, mut op: F, repetitions: usize) -> f64
where
    C: ?Sized,
    F: FnMut(&mut C, usize) -> R,
{
    let start = Instant::now();
    for rep in 0..repetitions {
        black_box(op(black_box(&mut *container), rep));
    }
    let elapsed = start.elapsed();

    elapsed.as_secs_f64() * 1_000.0
}

/// How many times faster `b` is than `a`.
///
/// A zero `b` gives infinity, or NaN when `a` is zero as well.
pub fn compare(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        if a == 0.0 {
            return f64::NAN;
        }
        return f64::INFINITY;
    }
    a / b
}

/// Extrapolates a duration measured over `actual` trials to `intended` trials.
pub fn rescale(measured: f64, actual: usize, intended: usize) -> f64 {
    measured * (intended as f64 / actual as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trials {
    pub actual: usize,
    pub intended: usize,
}

impl Trials {
    pub fn full(count: usize) -> Self {
        Self {
            actual: count,
            intended: count,
        }
    }

    pub fn reduced(actual: usize, intended: usize) -> Self {
        Self { actual, intended }
    }
}

/// Times `trials.actual` repetitions of `op` and reports the duration
/// rescaled to `trials.intended`.
pub fn run_trials<C, R, F>(label: &str, container: &mut C, trials: Trials, op: F) -> Sample
where
    C: ?Sized,
    F: FnMut(&mut C, usize) -> R,
{
    let measured = time_operation(container, op, trials.actual);
    let millis = rescale(measured, trials.actual, trials.intended);
    if trials.actual != trials.intended {
        debug!(
            "{}: {} trials took {:.3} ms, rescaled to {} trials",
            label, trials.actual, measured, trials.intended
        );
    }
    Sample::new(label, millis)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    label: String,
    millis: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, millis: f64) -> Self {
        Self {
            label: label.into(),
            millis,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Contiguous,
    Linked,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Contiguous => "Vector",
            Side::Linked => "List",
        }
    }

    fn other(self) -> Side {
        match self {
            Side::Contiguous => Side::Linked,
            Side::Linked => Side::Contiguous,
        }
    }
}

pub struct Comparison {
    operation: String,
    contiguous: Sample,
    linked: Sample,
    expected: Side,
}

impl Comparison {
    /// `expected` is the side the operation is supposed to favour. It is
    /// named in the verdict unless the measurements say otherwise.
    pub fn new(
        operation: impl Into<String>,
        contiguous: Sample,
        linked: Sample,
        expected: Side,
    ) -> Self {
        Self {
            operation: operation.into(),
            contiguous,
            linked,
            expected,
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn sample(&self, side: Side) -> &Sample {
        match side {
            Side::Contiguous => &self.contiguous,
            Side::Linked => &self.linked,
        }
    }

    /// The faster side and by how much.
    pub fn verdict(&self) -> (Side, f64) {
        let fast = self.sample(self.expected).millis();
        let slow = self.sample(self.expected.other()).millis();
        let ratio = compare(slow, fast);
        // non-finite ratios keep the expected side
        if ratio < 1.0 {
            return (self.expected.other(), compare(fast, slow));
        }
        (self.expected, ratio)
    }
}

pub fn banner<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    Ok(())
}

/// Writes one line per phase followed by the verdict.
pub fn report<W: Write>(out: &mut W, comparison: &Comparison) -> Result<()> {
    for side in [Side::Contiguous, Side::Linked] {
        let sample = comparison.sample(side);
        writeln!(out, "{}: {:.3} ms", sample.label(), sample.millis())?;
    }
    let (winner, ratio) = comparison.verdict();
    writeln!(
        out,
        "{} is {:.2} times faster for {}",
        winner.name(),
        ratio,
        comparison.operation()
    )?;
    Ok(())
}
