//! Detection of sequential blocks.
//!
//! A sequential block is a run of matches that move forward through both
//! documents together: sorted by reference position, each member sits within
//! a small gap of its predecessor in both documents and strictly after it in
//! the suspect document. Such runs point at copied passages rather than
//! isolated paraphrases.

use super::models::{MatchRecord, SequentialBlock};

/// Default minimum number of matches in a block.
pub const DEFAULT_MIN_RUN_LENGTH: usize = 3;

/// Default largest index step tolerated between consecutive block members.
pub const DEFAULT_MAX_INDEX_GAP: usize = 3;

/// True when `current` may follow `previous` in the same run.
///
/// Reference positions may repeat (the sort only guarantees they do not
/// decrease); suspect positions must strictly increase.
pub fn continues_run(previous: &MatchRecord, current: &MatchRecord, max_index_gap: usize) -> bool {
    let gap = max_index_gap as i64;
    let reference_step = current.reference_index as i64 - previous.reference_index as i64;
    let suspect_step = current.suspect_index as i64 - previous.suspect_index as i64;

    reference_step <= gap && suspect_step <= gap && suspect_step > 0
}

/// Partition matches into maximal sequential runs and keep the long ones.
///
/// Matches are stably sorted by reference position first, so the input may be
/// in any order. Each match is compared with its immediate predecessor in that
/// sorted order, not with the first member of the current run.
///
/// # Arguments
/// * `matches` - Accepted matches, in any order
/// * `min_run_length` - Runs shorter than this are dropped
/// * `max_index_gap` - Largest allowed step in either document
///
/// # Returns
/// Disjoint blocks in the order their runs were closed
pub fn detect_sequential_blocks(
    matches: &[MatchRecord],
    min_run_length: usize,
    max_index_gap: usize,
) -> Vec<SequentialBlock> {
    let mut blocks = Vec::new();

    if matches.is_empty() || matches.len() < min_run_length {
        return blocks;
    }

    let mut sorted: Vec<&MatchRecord> = matches.iter().collect();
    sorted.sort_by_key(|m| m.reference_index);

    let mut current_run: Vec<MatchRecord> = vec![sorted[0].clone()];

    for pair in sorted.windows(2) {
        let (previous, current) = (pair[0], pair[1]);

        if continues_run(previous, current, max_index_gap) {
            current_run.push(current.clone());
        } else {
            let finished = std::mem::replace(&mut current_run, vec![current.clone()]);
            close_run(finished, min_run_length, &mut blocks);
        }
    }

    close_run(current_run, min_run_length, &mut blocks);

    log::debug!(
        "Found {} sequential blocks among {} matches (min run {}, max gap {})",
        blocks.len(),
        matches.len(),
        min_run_length,
        max_index_gap
    );

    blocks
}

fn close_run(run: Vec<MatchRecord>, min_run_length: usize, blocks: &mut Vec<SequentialBlock>) {
    if !run.is_empty() && run.len() >= min_run_length {
        blocks.push(SequentialBlock::new(run));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(reference_index: usize, suspect_index: usize) -> MatchRecord {
        MatchRecord::new(
            0.9,
            format!("ref {}", reference_index),
            format!("sus {}", suspect_index),
            reference_index,
            suspect_index,
        )
    }

    fn records(pairs: &[(usize, usize)]) -> Vec<MatchRecord> {
        pairs.iter().map(|&(i, j)| record(i, j)).collect()
    }

    fn block_pairs(blocks: &[SequentialBlock]) -> Vec<Vec<(usize, usize)>> {
        blocks
            .iter()
            .map(|b| {
                b.matches()
                    .iter()
                    .map(|m| (m.reference_index, m.suspect_index))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_detect_single_diagonal_block() {
        let matches = records(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 5);
    }

    #[test]
    fn test_detect_bridges_gap_within_limit() {
        let matches = records(&[(0, 0), (1, 1), (3, 3), (4, 4)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(
            block_pairs(&blocks),
            vec![vec![(0, 0), (1, 1), (3, 3), (4, 4)]]
        );
    }

    #[test]
    fn test_detect_zero_gap_splits_and_drops_short_runs() {
        let matches = records(&[(0, 0), (1, 1), (3, 3), (4, 4)]);

        let blocks = detect_sequential_blocks(&matches, 3, 0);

        assert!(blocks.is_empty());
    }

    #[test]
    fn test_detect_zero_gap_never_continues() {
        // a step of 1 already exceeds a gap of 0
        let matches = records(&[(0, 0), (1, 1), (2, 2)]);

        assert!(detect_sequential_blocks(&matches, 3, 0).is_empty());
        assert_eq!(detect_sequential_blocks(&matches, 1, 0).len(), 3);
    }

    #[test]
    fn test_detect_sorts_by_reference_index() {
        let matches = records(&[(4, 4), (0, 0), (2, 2), (1, 1), (3, 3)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(
            block_pairs(&blocks),
            vec![vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]]
        );
    }

    #[test]
    fn test_detect_too_few_matches() {
        let matches = records(&[(0, 0), (1, 1)]);

        assert!(detect_sequential_blocks(&matches, 3, 3).is_empty());
        assert!(detect_sequential_blocks(&[], 3, 3).is_empty());
    }

    #[test]
    fn test_detect_min_length_minus_one_is_dropped() {
        let matches = records(&[(0, 0), (1, 1), (10, 10), (11, 11), (12, 12)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(block_pairs(&blocks), vec![vec![(10, 10), (11, 11), (12, 12)]]);
    }

    #[test]
    fn test_detect_suspect_regression_breaks_run() {
        let matches = records(&[(0, 5), (1, 6), (2, 7), (3, 2), (4, 3), (5, 4)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(
            block_pairs(&blocks),
            vec![
                vec![(0, 5), (1, 6), (2, 7)],
                vec![(3, 2), (4, 3), (5, 4)],
            ]
        );
    }

    #[test]
    fn test_detect_repeated_suspect_index_breaks_run() {
        let matches = records(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 3)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(block_pairs(&blocks), vec![vec![(2, 1), (3, 2), (4, 3)]]);
    }

    #[test]
    fn test_detect_compares_with_predecessor_not_run_head() {
        // every step is 2, but the run spans 8 positions
        let matches = records(&[(0, 0), (2, 2), (4, 4), (6, 6), (8, 8)]);

        let blocks = detect_sequential_blocks(&matches, 3, 2);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 5);
    }

    #[test]
    fn test_detect_reference_gap_too_large() {
        let matches = records(&[(0, 0), (1, 1), (2, 2), (7, 3), (8, 4), (9, 5)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].matches()[0].reference_index, 7);
    }

    #[test]
    fn test_detect_stable_for_equal_reference_index() {
        let matches = records(&[(0, 0), (1, 1), (1, 2), (2, 3)]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        assert_eq!(
            block_pairs(&blocks),
            vec![vec![(0, 0), (1, 1), (1, 2), (2, 3)]]
        );
    }

    #[test]
    fn test_detect_blocks_are_disjoint_and_valid() {
        let matches = records(&[
            (0, 3),
            (1, 4),
            (2, 9),
            (3, 10),
            (4, 11),
            (5, 1),
            (6, 2),
            (8, 4),
            (9, 4),
            (10, 6),
            (12, 8),
            (20, 0),
        ]);

        let blocks = detect_sequential_blocks(&matches, 3, 3);

        let mut seen = HashSet::new();
        for block in &blocks {
            assert!(block.len() >= 3);
            for pair in block.matches().windows(2) {
                assert!(continues_run(&pair[0], &pair[1], 3));
            }
            for m in block.matches() {
                assert!(seen.insert(m.reference_index));
            }
        }
        assert_eq!(
            block_pairs(&blocks),
            vec![
                vec![(2, 9), (3, 10), (4, 11)],
                vec![(5, 1), (6, 2), (8, 4)],
                vec![(9, 4), (10, 6), (12, 8)],
            ]
        );
    }

    #[test]
    fn test_continues_run_boundaries() {
        assert!(continues_run(&record(0, 0), &record(3, 3), 3));
        assert!(!continues_run(&record(0, 0), &record(4, 1), 3));
        assert!(!continues_run(&record(0, 0), &record(1, 4), 3));
        assert!(!continues_run(&record(0, 5), &record(1, 5), 3));
        assert!(continues_run(&record(2, 0), &record(2, 1), 3));
    }
}
