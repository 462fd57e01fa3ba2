//! Search and combinatorial kernels: nqueens, fannkuch, BFS, substring scan

use crate::lcg::Lcg;
use std::collections::VecDeque;

fn queens_rec(cols: u64, left: u64, right: u64, full: u64) -> u64 {
    if cols == full {
        return 1;
    }
    let mut count = 0;
    let mut available = full & !(cols | left | right);
    while available != 0 {
        let bit = available & available.wrapping_neg();
        available -= bit;
        count += queens_rec(
            cols | bit,
            ((left | bit) << 1) & full,
            (right | bit) >> 1,
            full,
        );
    }
    count
}

/// Solution count for the n x n board via column/diagonal bitmasks.
/// The empty board has exactly one solution.
pub fn nqueens(n: usize) -> String {
    let full = (1u64 << n) - 1;
    format!("{}", queens_rec(0, 0, 0, full))
}

/// Classic permutation flip counting over all permutations of `[0, n)`.
///
/// Permutations come from the counting-based generator with single-rotation
/// updates; the terminal condition is `r == n`. Flip counts enter the
/// checksum with alternating sign by permutation index. Prints
/// `"{checksum} {max_flips}"`.
pub fn fannkuch(n: usize) -> String {
    if n == 0 {
        return "0 0".to_string();
    }
    let mut perm1: Vec<usize> = (0..n).collect();
    let mut count = vec![0usize; n];
    let mut max_flips = 0i64;
    let mut checksum = 0i64;
    let mut perm_index = 0u64;
    let mut r = n;
    loop {
        while r != 1 {
            count[r - 1] = r;
            r -= 1;
        }
        if perm1[0] != 0 {
            let mut perm = perm1.clone();
            let mut flips = 0i64;
            let mut k = perm[0];
            while k != 0 {
                perm[..=k].reverse();
                flips += 1;
                k = perm[0];
            }
            if flips > max_flips {
                max_flips = flips;
            }
            checksum += if perm_index % 2 == 0 { flips } else { -flips };
        }
        // Rotate the first r+1 elements left by one.
        loop {
            if r == n {
                return format!("{} {}", checksum, max_flips);
            }
            let head = perm1[0];
            for i in 0..r {
                perm1[i] = perm1[i + 1];
            }
            perm1[r] = head;
            count[r] -= 1;
            if count[r] > 0 {
                break;
            }
            r += 1;
        }
        perm_index += 1;
    }
}

/// BFS over `n` nodes with out-degree 5 and neighbor formula
/// `(i*31 + k*7 + 1) mod n`. Prints `"{visited} {distance_sum}"`.
pub fn graph_bfs(n: usize) -> String {
    if n == 0 {
        return "0 0".to_string();
    }
    let mut dist = vec![usize::MAX; n];
    dist[0] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(0usize);
    let mut visited = 1u64;
    let mut dist_sum = 0u64;
    while let Some(node) = queue.pop_front() {
        dist_sum += dist[node] as u64;
        for k in 0..5 {
            let neighbor = (node * 31 + k * 7 + 1) % n;
            if dist[neighbor] == usize::MAX {
                dist[neighbor] = dist[node] + 1;
                visited += 1;
                queue.push_back(neighbor);
            }
        }
    }
    format!("{} {}", visited, dist_sum)
}

/// Overlapping occurrences of `"aba"` in an n-byte generated haystack over
/// the alphabet `a..=d`. Brute-force scan; the window-comparison strategy
/// is the alternative reference and must agree (verified in tests).
pub fn string_search(n: usize) -> String {
    let haystack = generated_haystack(n);
    const NEEDLE: &[u8] = b"aba";
    let mut count = 0u64;
    if haystack.len() >= NEEDLE.len() {
        for start in 0..=haystack.len() - NEEDLE.len() {
            let mut matched = true;
            for (offset, &needle_byte) in NEEDLE.iter().enumerate() {
                if haystack[start + offset] != needle_byte {
                    matched = false;
                    break;
                }
            }
            if matched {
                count += 1;
            }
        }
    }
    format!("{}", count)
}

pub(crate) fn generated_haystack(n: usize) -> Vec<u8> {
    let mut rng = Lcg::variant_a();
    (0..n).map(|_| b'a' + (rng.next_value() % 4) as u8).collect()
}
