//! Benchmark Kernel Catalog
//!
//! 32 self-contained, CPU-bound workloads. Each kernel is a pure function
//! of its size parameter `n`: it derives any input it needs from the
//! deterministic generator ([`crate::lcg`]), runs a fixed algorithm with
//! fully specified numeric semantics, and returns the exact text block a
//! conforming implementation must print.
//!
//! # Modules
//!
//! - [`sorting`] - comparison and placement sorts over generated sequences
//! - [`numeric`] - matrix product, mandelbrot, pi series
//! - [`nbody`] - 5-body gravitational simulation
//! - [`spectral`] - spectral norm power iteration
//! - [`arrays`] - sieve, prefix sums, fills and reversals
//! - [`integers`] - gcd, collatz, primes, fibonacci, ackermann
//! - [`lookup`] - hash-map workloads (collect, two_sum, histogram)
//! - [`dp`] - dynamic programming (knapsack, coin change)
//! - [`search`] - nqueens, fannkuch, BFS, substring search
//! - [`memory`] - allocation-heavy workloads (strings, binary trees)

pub mod arrays;
pub mod dp;
pub mod integers;
pub mod lookup;
pub mod memory;
pub mod nbody;
pub mod numeric;
pub mod search;
pub mod sorting;
pub mod spectral;

/// Modulus for running checksums, chosen to bound printed output width.
pub const CHECKSUM_MOD: u64 = 1_000_000_007;

/// Algorithmic family, used for catalog listings only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sorting,
    Numeric,
    Search,
    Combinatorial,
}

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::Sorting => "sorting",
            Family::Numeric => "numeric",
            Family::Search => "search",
            Family::Combinatorial => "combinatorial",
        }
    }
}

/// One catalog entry: `run(n)` returns the exact stdout payload.
pub struct Kernel {
    pub id: &'static str,
    pub family: Family,
    pub description: &'static str,
    entry: fn(usize) -> String,
}

impl Kernel {
    pub fn run(&self, n: usize) -> String {
        (self.entry)(n)
    }
}

macro_rules! kernel {
    ($id:literal, $family:ident, $entry:path, $desc:literal) => {
        Kernel {
            id: $id,
            family: Family::$family,
            description: $desc,
            entry: $entry,
        }
    };
}

/// The full catalog, in the reference presentation order.
pub static KERNELS: &[Kernel] = &[
    // Recursion & function calls
    kernel!("fib", Combinatorial, integers::fib, "naive recursive fibonacci"),
    kernel!("ackermann", Combinatorial, integers::ackermann, "ackermann A(3, n)"),
    kernel!("nqueens", Combinatorial, search::nqueens, "bitmask n-queens solution count"),
    // Sorting
    kernel!("bubble_sort", Sorting, sorting::bubble_sort, "adjacent-swap sort (generator variant B)"),
    kernel!("mergesort", Sorting, sorting::mergesort, "top-down recursive merge sort"),
    kernel!("quicksort", Sorting, sorting::quicksort, "recursive partition sort"),
    kernel!("counting_sort", Sorting, sorting::counting_sort, "1000-bucket counting sort"),
    kernel!("heap_sort", Sorting, sorting::heap_sort, "in-place binary heap sort"),
    // Floating point
    kernel!("nbody", Numeric, nbody::run, "5-body solar system energy after n steps"),
    kernel!("mandelbrot", Numeric, numeric::mandelbrot, "mandelbrot membership count on an n x n grid"),
    kernel!("spectral_norm", Numeric, spectral::run, "spectral norm via power iteration"),
    kernel!("pi_leibniz", Numeric, numeric::pi_leibniz, "leibniz series for pi, n terms"),
    // Integer mathematics
    kernel!("gcd", Combinatorial, integers::gcd_sum, "sum of gcd(i, j) over 1 <= i <= j <= n"),
    kernel!("collatz", Combinatorial, integers::collatz, "total collatz steps for starts 1..=n"),
    kernel!("primes", Combinatorial, integers::primes, "trial-division prime count up to n"),
    // Array patterns
    kernel!("sieve", Combinatorial, arrays::sieve, "sieve of eratosthenes prime count up to n"),
    kernel!("matrix_mult", Numeric, numeric::matrix_mult, "n x n integer matrix product checksum"),
    kernel!("prefix_sum", Numeric, arrays::prefix_sum, "running-sum checksum over generated values"),
    kernel!("array_reverse", Combinatorial, arrays::array_reverse, "in-place reversal of a generated sequence"),
    kernel!("array_fill", Combinatorial, arrays::array_fill, "formulaic array fill checksum"),
    // Hash maps & lookup
    kernel!("collect", Search, lookup::collect, "map insert then lookup sum"),
    kernel!("two_sum", Search, lookup::two_sum, "pair count summing to n over bounded values"),
    kernel!("histogram", Numeric, lookup::histogram, "1000-bucket histogram mode"),
    // Dynamic programming
    kernel!("knapsack", Numeric, dp::knapsack, "0/1 knapsack over generated items, capacity 10n"),
    kernel!("coins", Numeric, dp::coins, "coin-change way count for amount n"),
    // Combinatorial
    kernel!("fannkuch", Combinatorial, search::fannkuch, "permutation flip counts with signed checksum"),
    // Memory & allocation
    kernel!("strings", Combinatorial, memory::strings, "string growth and polynomial hash"),
    kernel!("binary_trees", Combinatorial, memory::binary_trees, "complete boxed tree recursive checksum"),
    // Loop overhead & control flow
    kernel!("loop_sum", Combinatorial, integers::loop_sum, "wrapping sum of 0..n"),
    kernel!("fib_iterative", Combinatorial, integers::fib_iterative, "iterative fibonacci"),
    kernel!("graph_bfs", Search, search::graph_bfs, "BFS over a formulaic degree-5 digraph"),
    kernel!("string_search", Search, search::string_search, "overlapping substring occurrence count"),
];

/// Look up a kernel by its catalog id.
pub fn find(id: &str) -> Option<&'static Kernel> {
    KERNELS.iter().find(|k| k.id == id)
}
