//! Integer-mathematics and control-flow kernels

/// Euclid's algorithm.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Sum of `gcd(i, j)` over `1 <= i <= j <= n`. `gcd(3)` yields 9.
pub fn gcd_sum(n: usize) -> String {
    let n = n as u64;
    let mut total = 0u64;
    for i in 1..=n {
        for j in i..=n {
            total += gcd(i, j);
        }
    }
    format!("{}", total)
}

/// Total collatz step count over all starts `1..=n`.
pub fn collatz(n: usize) -> String {
    let mut total = 0u64;
    for start in 1..=n as u64 {
        let mut c = start;
        while c != 1 {
            c = if c % 2 == 0 { c / 2 } else { 3 * c + 1 };
            total += 1;
        }
    }
    format!("{}", total)
}

/// Trial-division prime count up to `n`.
pub fn primes(n: usize) -> String {
    let mut count = 0u64;
    for candidate in 2..=n as u64 {
        let mut divisor = 2;
        let mut is_prime = true;
        while divisor * divisor <= candidate {
            if candidate % divisor == 0 {
                is_prime = false;
                break;
            }
            divisor += 1;
        }
        if is_prime {
            count += 1;
        }
    }
    format!("{}", count)
}

fn fib_rec(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib_rec(n - 1).wrapping_add(fib_rec(n - 2))
    }
}

/// Naive recursive fibonacci, wrapping 64-bit.
pub fn fib(n: usize) -> String {
    format!("{}", fib_rec(n as u64))
}

/// Iterative fibonacci. Must print the same value as `fib` for equal `n`:
/// wrapping addition is a congruence mod 2^64, so the two agree even past
/// the overflow point.
pub fn fib_iterative(n: usize) -> String {
    let mut a = 0u64;
    let mut b = 1u64;
    for _ in 0..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    format!("{}", a)
}

fn ack(m: u64, n: u64) -> u64 {
    if m == 0 {
        n + 1
    } else if n == 0 {
        ack(m - 1, 1)
    } else {
        ack(m - 1, ack(m, n - 1))
    }
}

/// Ackermann `A(3, n)`.
pub fn ackermann(n: usize) -> String {
    format!("{}", ack(3, n as u64))
}

/// Wrapping sum of `0..n`. Pure loop overhead probe.
pub fn loop_sum(n: usize) -> String {
    let mut total = 0u64;
    for i in 0..n as u64 {
        total = total.wrapping_add(i);
    }
    format!("{}", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_sum_golden() {
        assert_eq!(gcd_sum(0), "0");
        assert_eq!(gcd_sum(3), "9");
        assert_eq!(gcd_sum(100), "18065");
    }

    #[test]
    fn test_collatz_golden() {
        assert_eq!(collatz(0), "0");
        assert_eq!(collatz(1), "0");
        assert_eq!(collatz(6), "23");
        assert_eq!(collatz(1000), "59542");
    }

    #[test]
    fn test_primes_golden() {
        assert_eq!(primes(0), "0");
        assert_eq!(primes(1), "0");
        assert_eq!(primes(2), "1");
        assert_eq!(primes(100), "25");
        assert_eq!(primes(10000), "1229");
    }

    #[test]
    fn test_fib_golden() {
        assert_eq!(fib(0), "0");
        assert_eq!(fib(1), "1");
        assert_eq!(fib(10), "55");
        assert_eq!(fib(30), "832040");
    }

    #[test]
    fn test_fib_variants_agree() {
        for n in 0..=25 {
            assert_eq!(fib(n), fib_iterative(n), "n={}", n);
        }
    }

    #[test]
    fn test_ackermann_golden() {
        assert_eq!(ackermann(0), "5");
        assert_eq!(ackermann(3), "61");
        assert_eq!(ackermann(6), "509");
    }

    #[test]
    fn test_loop_sum_golden() {
        assert_eq!(loop_sum(0), "0");
        assert_eq!(loop_sum(10), "45");
        assert_eq!(loop_sum(1000000), "499999500000");
    }
}
