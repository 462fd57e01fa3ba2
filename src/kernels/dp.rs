//! Dynamic-programming kernels: 0/1 knapsack and coin change

use crate::kernels::CHECKSUM_MOD;
use crate::lcg::Lcg;

/// Coin denominations for the `coins` kernel.
const DENOMINATIONS: [usize; 6] = [1, 5, 10, 25, 50, 100];

/// 0/1 knapsack over `n` generated items, capacity `10n`.
///
/// Items come from ONE variant-A stream, per item weight first
/// (`v % 100 + 1`) then value (`v % 1000`). Rolling-array DP descending in
/// capacity; the two-array formulation is an equivalent reference strategy
/// and must print the same result (verified in tests).
pub fn knapsack(n: usize) -> String {
    let mut rng = Lcg::variant_a();
    let capacity = 10 * n;
    let mut best = vec![0u64; capacity + 1];
    for _ in 0..n {
        let weight = (rng.next_value() % 100 + 1) as usize;
        let value = u64::from(rng.next_value() % 1000);
        for c in (weight..=capacity).rev() {
            let candidate = best[c - weight] + value;
            if candidate > best[c] {
                best[c] = candidate;
            }
        }
    }
    format!("{}", best[capacity])
}

/// Ways to make amount `n` from the fixed denominations, coin-outer
/// amount-inner, mod [`CHECKSUM_MOD`]. `coins(0)` is 1 (the empty
/// selection).
pub fn coins(n: usize) -> String {
    let mut ways = vec![0u64; n + 1];
    ways[0] = 1;
    for &coin in &DENOMINATIONS {
        for amount in coin..=n {
            ways[amount] = (ways[amount] + ways[amount - coin]) % CHECKSUM_MOD;
        }
    }
    format!("{}", ways[n])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knapsack_golden() {
        assert_eq!(knapsack(0), "0");
        assert_eq!(knapsack(1), "0"); // first item weighs 82, capacity 10
        assert_eq!(knapsack(10), "1135");
        assert_eq!(knapsack(100), "24904");
    }

    /// Two-array DP is the alternative reference strategy; it must agree
    /// with the rolling-array kernel.
    #[test]
    fn test_knapsack_two_array_strategy_agrees() {
        for n in [0, 1, 10, 50, 100] {
            let mut rng = Lcg::variant_a();
            let capacity = 10 * n;
            let mut prev = vec![0u64; capacity + 1];
            let mut next = vec![0u64; capacity + 1];
            for _ in 0..n {
                let weight = (rng.next_value() % 100 + 1) as usize;
                let value = u64::from(rng.next_value() % 1000);
                for c in 0..=capacity {
                    next[c] = prev[c];
                    if c >= weight {
                        let candidate = prev[c - weight] + value;
                        if candidate > next[c] {
                            next[c] = candidate;
                        }
                    }
                }
                std::mem::swap(&mut prev, &mut next);
            }
            assert_eq!(knapsack(n), format!("{}", prev[capacity]), "n={}", n);
        }
    }

    #[test]
    fn test_coins_golden() {
        assert_eq!(coins(0), "1");
        assert_eq!(coins(10), "4");
        assert_eq!(coins(100), "293");
        assert_eq!(coins(10000), "946139478");
    }
}
