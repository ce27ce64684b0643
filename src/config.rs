const INSERTION_ELEMENTS: usize = 100_000;
const INSERTIONS: usize = 10_000;

const ACCESS_ELEMENTS: usize = 10_000_000;
const ACCESSES: usize = 1_000_000;
// the list walks on every access, so it only runs a slice of the trials
const REDUCED_ACCESSES: usize = 10_000;
const ACCESS_SEED: u64 = 42;

/// Sizing for the middle-insertion comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionConfig {
    pub elements: usize,
    pub insertions: usize,
}

impl InsertionConfig {
    pub fn new(elements: Option<usize>, insertions: Option<usize>) -> Self {
        Self {
            elements: elements.unwrap_or(INSERTION_ELEMENTS),
            insertions: insertions.unwrap_or(INSERTIONS),
        }
    }
}

impl Default for InsertionConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Sizing for the traversal and random-access comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessConfig {
    pub elements: usize,
    pub accesses: usize,
    pub reduced_accesses: usize,
    pub seed: u64,
}

impl AccessConfig {
    pub fn new(
        elements: Option<usize>,
        accesses: Option<usize>,
        reduced_accesses: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        let accesses = accesses.unwrap_or(ACCESSES);
        let reduced_accesses = reduced_accesses.unwrap_or(REDUCED_ACCESSES).min(accesses);
        Self {
            elements: elements.unwrap_or(ACCESS_ELEMENTS),
            accesses,
            reduced_accesses,
            seed: seed.unwrap_or(ACCESS_SEED),
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}
