//! Array-pattern kernels: sieve, prefix sums, fills, reversal

use crate::kernels::CHECKSUM_MOD;
use crate::lcg::Lcg;

/// Sieve of Eratosthenes prime count up to `n`. `sieve(0)` and `sieve(1)`
/// report 0.
pub fn sieve(n: usize) -> String {
    if n < 2 {
        return "0".to_string();
    }
    let mut composite = vec![false; n + 1];
    let mut count = 0u64;
    for i in 2..=n {
        if !composite[i] {
            count += 1;
            let mut multiple = i * i;
            while multiple <= n {
                composite[multiple] = true;
                multiple += i;
            }
        }
    }
    format!("{}", count)
}

/// Checksum over all running prefix totals of the generated sequence.
pub fn prefix_sum(n: usize) -> String {
    let mut rng = Lcg::variant_a();
    let mut running = 0u64;
    let mut checksum = 0u64;
    for _ in 0..n {
        running += u64::from(rng.next_value());
        checksum = (checksum + running) % CHECKSUM_MOD;
    }
    format!("{}", checksum)
}

/// Reverse the generated sequence in place and report first, midpoint
/// (index n/2, floor division) and last elements.
pub fn array_reverse(n: usize) -> String {
    let mut v = Lcg::variant_a().take_values(n);
    v.reverse();
    if v.is_empty() {
        return "0 0 0".to_string();
    }
    format!("{} {} {}", v[0], v[n / 2], v[n - 1])
}

/// Fill an array with `(i*7 + 3) % 1000` and report its checksum.
pub fn array_fill(n: usize) -> String {
    let mut v = vec![0u32; n];
    for (i, slot) in v.iter_mut().enumerate() {
        *slot = ((i * 7 + 3) % 1000) as u32;
    }
    let mut checksum = 0u64;
    for &value in &v {
        checksum = (checksum + u64::from(value)) % CHECKSUM_MOD;
    }
    format!("{}", checksum)
}
