// Sorted index of initialized ticks
//
// A launch pool carries a handful of initialized ticks, so a sorted
// vector replaces the word bitmap and keeps lookups to one storage entry.

use soroban_sdk::Vec;

/// Position of `tick` in the index, or where it would be inserted
fn search(index: &Vec<i32>, tick: i32) -> Result<u32, u32> {
    let mut lo = 0u32;
    let mut hi = index.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match index.get_unchecked(mid) {
            t if t == tick => return Ok(mid),
            t if t < tick => lo = mid + 1,
            _ => hi = mid,
        }
    }
    Err(lo)
}

pub fn insert_tick(index: &mut Vec<i32>, tick: i32) {
    if let Err(pos) = search(index, tick) {
        index.insert(pos, tick);
    }
}

pub fn remove_tick(index: &mut Vec<i32>, tick: i32) {
    if let Ok(pos) = search(index, tick) {
        index.remove(pos);
    }
}

/// Next initialized tick in the swap direction.
///
/// With `lte` the search includes `tick` itself and walks down; otherwise
/// it returns the first tick strictly above.
pub fn next_initialized_tick(index: &Vec<i32>, tick: i32, lte: bool) -> Option<i32> {
    if lte {
        match search(index, tick) {
            Ok(pos) => Some(index.get_unchecked(pos)),
            Err(0) => None,
            Err(pos) => Some(index.get_unchecked(pos - 1)),
        }
    } else {
        let pos = match search(index, tick) {
            Ok(pos) => pos + 1,
            Err(pos) => pos,
        };
        if pos < index.len() {
            Some(index.get_unchecked(pos))
        } else {
            None
        }
    }
}
