//! Sorting kernels
//!
//! Each sorts a generator-produced sequence and reports, over the FINAL
//! sorted order: `"{first} {last} {checksum}"` with the checksum being the
//! element sum mod [`CHECKSUM_MOD`]. The four comparison sorts consume the
//! same variant-A sequence (bubble_sort uses variant B, which emits the
//! same values), so their reports must be identical for equal `n`.

use crate::kernels::CHECKSUM_MOD;
use crate::lcg::Lcg;

/// Report line over a fully sorted slice. Empty input degenerates to "0 0 0".
fn report(sorted: &[u32]) -> String {
    match (sorted.first(), sorted.last()) {
        (Some(&first), Some(&last)) => {
            let checksum = sorted
                .iter()
                .fold(0u64, |acc, &v| (acc + u64::from(v)) % CHECKSUM_MOD);
            format!("{} {} {}", first, last, checksum)
        }
        _ => "0 0 0".to_string(),
    }
}

pub fn bubble_sort(n: usize) -> String {
    let mut v = Lcg::variant_b().take_values(n);
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }
    report(&v)
}

fn sift_down(v: &mut [u32], mut root: usize, end: usize) {
    loop {
        let child = 2 * root + 1;
        if child >= end {
            return;
        }
        let mut largest = root;
        if v[largest] < v[child] {
            largest = child;
        }
        if child + 1 < end && v[largest] < v[child + 1] {
            largest = child + 1;
        }
        if largest == root {
            return;
        }
        v.swap(root, largest);
        root = largest;
    }
}

pub fn heap_sort(n: usize) -> String {
    let mut v = Lcg::variant_a().take_values(n);
    if n > 1 {
        for start in (0..n / 2).rev() {
            sift_down(&mut v, start, n);
        }
        for end in (1..n).rev() {
            v.swap(0, end);
            sift_down(&mut v, 0, end);
        }
    }
    report(&v)
}

fn merge_halves(v: &mut [u32], buf: &mut [u32]) {
    let n = v.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    merge_halves(&mut v[..mid], &mut buf[..mid]);
    merge_halves(&mut v[mid..], &mut buf[mid..]);
    buf[..n].copy_from_slice(v);
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < n {
        if buf[i] <= buf[j] {
            v[k] = buf[i];
            i += 1;
        } else {
            v[k] = buf[j];
            j += 1;
        }
        k += 1;
    }
    while i < mid {
        v[k] = buf[i];
        i += 1;
        k += 1;
    }
    while j < n {
        v[k] = buf[j];
        j += 1;
        k += 1;
    }
}

pub fn mergesort(n: usize) -> String {
    let mut v = Lcg::variant_a().take_values(n);
    let mut buf = vec![0u32; n];
    merge_halves(&mut v, &mut buf);
    report(&v)
}

fn quicksort_rec(v: &mut [u32]) {
    if v.len() <= 1 {
        return;
    }
    let last = v.len() - 1;
    let pivot = v[last];
    let mut store = 0;
    for i in 0..last {
        if v[i] <= pivot {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, last);
    let (left, right) = v.split_at_mut(store);
    quicksort_rec(left);
    quicksort_rec(&mut right[1..]);
}

pub fn quicksort(n: usize) -> String {
    let mut v = Lcg::variant_a().take_values(n);
    quicksort_rec(&mut v);
    report(&v)
}

/// Counting sort over values reduced mod 1000. The reduction is part of the
/// contract, so this kernel's report differs from the comparison sorts.
pub fn counting_sort(n: usize) -> String {
    let mut counts = vec![0usize; 1000];
    let mut rng = Lcg::variant_a();
    for _ in 0..n {
        counts[(rng.next_value() % 1000) as usize] += 1;
    }
    let mut v = Vec::with_capacity(n);
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            v.push(value as u32);
        }
    }
    report(&v)
}
