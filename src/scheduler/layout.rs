//! Parallel lane layout.
//!
//! Assigns each task a lane (`parallel_index`) and a lane count
//! (`max_parallel`) so concurrent tasks of one worker render side by side.
//!
//! # Algorithm
//!
//! 1. Reset every task to lane 0 of 1.
//! 2. For each task `i` in start order, its cluster is `i` plus every later
//!    task starting before `tasks[i].end`.
//! 3. Each member at cluster position `k` takes `max(parallel_index, k)`
//!    and `max(max_parallel, cluster_len)`.
//!
//! Clusters only look forward; a task reached from several anchors keeps
//! the largest values seen. This is not a minimum-lane packing for
//! transitive chains (A overlaps B, B overlaps C, A and C disjoint).
//!
//! # Complexity
//! O(n²) worst case when every task overlaps every other.

use std::collections::BTreeMap;

use crate::models::Task;

/// Computes lanes for one worker's tasks.
///
/// The input is stably sorted by start before the pass, and the output is
/// returned in that order. Timing fields are never modified.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crew_schedule::models::Task;
/// use crew_schedule::scheduler::compute_parallel_layout;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
///
/// let laid_out = compute_parallel_layout(&[
///     Task::new("A", "E1", at(9), at(12)),
///     Task::new("B", "E1", at(10), at(11)),
/// ]);
/// assert_eq!(laid_out[1].parallel_index, 1);
/// assert_eq!(laid_out[1].max_parallel, 2);
/// ```
pub fn compute_parallel_layout(tasks: &[Task]) -> Vec<Task> {
    let mut laid_out = tasks.to_vec();
    laid_out.sort_by_key(|t| t.start);
    for task in &mut laid_out {
        task.clear_lane();
    }

    for i in 0..laid_out.len() {
        let anchor_end = laid_out[i].end;
        // Sorted by start, so the cluster is a contiguous run from i.
        let cluster_len = 1 + laid_out[i + 1..]
            .iter()
            .take_while(|t| t.start < anchor_end)
            .count();

        for (position, member) in laid_out[i..i + cluster_len].iter_mut().enumerate() {
            member.parallel_index = member.parallel_index.max(position);
            member.max_parallel = member.max_parallel.max(cluster_len);
        }
    }

    laid_out
}

/// Partitions tasks by worker and lays out each worker's tasks.
pub fn layout_by_worker(tasks: &[Task]) -> BTreeMap<String, Vec<Task>> {
    let mut by_worker: BTreeMap<String, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        by_worker
            .entry(task.employee_id.clone())
            .or_default()
            .push(task.clone());
    }

    by_worker
        .into_iter()
        .map(|(worker, run)| {
            let laid_out = compute_parallel_layout(&run);
            (worker, laid_out)
        })
        .collect()
}
