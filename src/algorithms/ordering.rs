//! In-place request ordering.
//!
//! A single recursive quicksort parameterized by a key-extraction function,
//! used twice by the sweep policies: once keyed on sector, then keyed on
//! track. The second pass groups requests by track; the partitioning is not
//! stable, so ties break arbitrarily.

use crate::engine::request::Request;

pub type SortKey = fn(&Request) -> u32;

/// Sorts `requests` so that `key` is non-decreasing. Lomuto partition with
/// the last element as pivot: O(n log n) expected, O(n^2) on adversarial
/// input.
pub fn sort_by_key(requests: &mut [Request], key: SortKey) {
    if requests.len() > 1 {
        quicksort(requests, 0, requests.len() - 1, key);
    }
}

/// The two-key ordering the sweep policies share: sector first, then track.
pub fn sort_for_sweep(requests: &mut [Request]) {
    sort_by_key(requests, Request::sector_key);
    sort_by_key(requests, Request::track_key);
}

fn quicksort(items: &mut [Request], low: usize, high: usize, key: SortKey) {
    if low >= high {
        return;
    }
    let pivot = partition(items, low, high, key);
    if pivot > low {
        quicksort(items, low, pivot - 1, key);
    }
    if pivot < high {
        quicksort(items, pivot + 1, high, key);
    }
}

fn partition(items: &mut [Request], low: usize, high: usize, key: SortKey) -> usize {
    let pivot = key(&items[high]);
    let mut boundary = low;
    for cursor in low..high {
        if key(&items[cursor]) <= pivot {
            items.swap(boundary, cursor);
            boundary += 1;
        }
    }
    items.swap(boundary, high);
    boundary
}
