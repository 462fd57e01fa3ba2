//! Hash-map and lookup kernels

use crate::lcg::Lcg;
use rustc_hash::FxHashMap;

/// Insert `i -> 2i` for `1..=n`, then sum every looked-up value
/// (wrapping 64-bit).
pub fn collect(n: usize) -> String {
    let n = n as u64;
    let mut map: FxHashMap<u64, u64> = FxHashMap::default();
    for i in 1..=n {
        map.insert(i, i.wrapping_mul(2));
    }
    let mut total = 0u64;
    for i in 1..=n {
        total = total.wrapping_add(map.get(&i).copied().unwrap_or(0));
    }
    format!("{}", total)
}

/// Count scan-order pairs `i < j` with `v[i] + v[j] == n` over values
/// bounded by `n` (`v = raw % n`). The membership map carries value
/// multiplicities so duplicate values contribute every pairing.
pub fn two_sum(n: usize) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let bound = n as u64;
    let target = n as u64;
    let mut rng = Lcg::variant_a();
    let mut seen: FxHashMap<u64, u64> = FxHashMap::default();
    let mut count = 0u64;
    for _ in 0..n {
        let v = u64::from(rng.next_value()) % bound;
        // v < n, so target - v never underflows
        count += seen.get(&(target - v)).copied().unwrap_or(0);
        *seen.entry(v).or_insert(0) += 1;
    }
    format!("{}", count)
}

/// 1000-bucket histogram of the generated values; reports the first bucket
/// attaining the maximum count as `"{index} {count}"`.
pub fn histogram(n: usize) -> String {
    let mut buckets = vec![0u64; 1000];
    let mut rng = Lcg::variant_a();
    for _ in 0..n {
        buckets[(rng.next_value() % 1000) as usize] += 1;
    }
    let mut max_index = 0usize;
    let mut max_count = 0u64;
    for (index, &count) in buckets.iter().enumerate() {
        if count > max_count {
            max_index = index;
            max_count = count;
        }
    }
    format!("{} {}", max_index, max_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_golden() {
        assert_eq!(collect(0), "0");
        assert_eq!(collect(10), "110");
        assert_eq!(collect(1000), "1001000");
    }

    #[test]
    fn test_two_sum_golden() {
        assert_eq!(two_sum(0), "0");
        assert_eq!(two_sum(1), "0");
        assert_eq!(two_sum(10), "5");
        assert_eq!(two_sum(1000), "486");
    }

    /// The scan-order map count must equal the quadratic pair count.
    #[test]
    fn test_two_sum_matches_quadratic_count() {
        let n = 200usize;
        let values: Vec<u64> = Lcg::variant_a()
            .take_values(n)
            .into_iter()
            .map(|v| u64::from(v) % n as u64)
            .collect();
        let mut expected = 0u64;
        for i in 0..n {
            for j in i + 1..n {
                if values[i] + values[j] == n as u64 {
                    expected += 1;
                }
            }
        }
        assert_eq!(two_sum(n), format!("{}", expected));
    }

    #[test]
    fn test_histogram_golden() {
        assert_eq!(histogram(0), "0 0");
        assert_eq!(histogram(10), "33 1");
        assert_eq!(histogram(10000), "850 20");
    }
}
