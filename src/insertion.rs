use std::io::Write;

use log::{debug, info};
use nodelist::NodeList;

use crate::config::InsertionConfig;
use crate::error::Result;
use crate::harness::{prepare, report, time_operation, Comparison, Containers, Sample, Side};

pub const TITLE: &str = "Performance comparison: linked list vs vector for middle insertions";
pub const OPERATION: &str = "middle insertions";

/// Inserts `-i` at `len / 2` for each repetition `i`. The midpoint is taken
/// from the current length every time, so each insertion shifts the upper
/// half of the vector.
pub fn insert_middle_contiguous(vec: &mut Vec<i32>, insertions: usize) -> f64 {
    time_operation(
        vec,
        |vec, i| {
            let middle = vec.len() / 2;
            vec.insert(middle, -(i as i32));
        },
        insertions,
    )
}

/// Walks to the midpoint once, then inserts `-i` in front of that same node
/// for each repetition `i`. Only the insertions are timed.
pub fn insert_middle_linked(list: &mut NodeList<i32>, insertions: usize) -> f64 {
    let middle = list.len() / 2;
    let mut cursor = list.cursor_front();
    let walk = time_operation(&mut cursor, |cursor, _| cursor.move_next(), middle);
    debug!("walked to list position {} in {:.3} ms", cursor.index(), walk);

    time_operation(
        &mut cursor,
        |cursor, i| cursor.insert_before(-(i as i32)),
        insertions,
    )
}

/// Times middle insertions on both containers and writes the report to `out`.
pub fn run<W: Write>(config: &InsertionConfig, out: &mut W) -> Result<Comparison> {
    writeln!(out, "Testing middle insertions performance...")?;

    let Containers {
        mut contiguous,
        mut linked,
    } = prepare(config.elements)?;
    debug!(
        "vector inserts at a midpoint recomputed per insertion; list inserts at a fixed node"
    );

    let vec_millis = insert_middle_contiguous(&mut contiguous, config.insertions);
    let list_millis = insert_middle_linked(&mut linked, config.insertions);
    info!(
        "{} middle insertions done, vector: {:.3} ms, list: {:.3} ms",
        config.insertions, vec_millis, list_millis
    );

    let comparison = Comparison::new(
        OPERATION,
        Sample::new("Vector middle insertions", vec_millis),
        Sample::new("List middle insertions", list_millis),
        Side::Linked,
    );
    report(out, &comparison)?;

    Ok(comparison)
}
