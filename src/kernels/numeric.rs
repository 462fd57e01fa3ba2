//! Numeric kernels: matrix product, mandelbrot grid, pi series
//!
//! Floating-point kernels specify the exact operation order; reordering a
//! summation changes the printed digits and breaks conformance.

use crate::kernels::CHECKSUM_MOD;

/// n x n integer matrix product with loop order `i,k,j`.
///
/// `a[i][j] = (i*n+j) % 100`, `b[i][j] = (j*n+i) % 100`; prints the
/// row-major checksum of the product mod [`CHECKSUM_MOD`].
pub fn matrix_mult(n: usize) -> String {
    let a: Vec<i64> = (0..n * n).map(|idx| (idx % 100) as i64).collect();
    let mut b = vec![0i64; n * n];
    for i in 0..n {
        for j in 0..n {
            b[i * n + j] = ((j * n + i) % 100) as i64;
        }
    }

    let mut c = vec![0i64; n * n];
    for i in 0..n {
        for k in 0..n {
            let aik = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += aik * b[k * n + j];
            }
        }
    }

    let mut checksum = 0u64;
    for &value in &c {
        checksum = (checksum + value as u64) % CHECKSUM_MOD;
    }
    format!("{}", checksum)
}

/// Count of grid points that survive 50 iterations without escaping.
///
/// Grid: `x0 = px*3/n - 2`, `y0 = py*2/n - 1`; escape test `x^2+y^2 > 4`
/// runs BEFORE each update.
pub fn mandelbrot(n: usize) -> String {
    let side = n as f64;
    let mut count = 0u64;
    for py in 0..n {
        let y0 = py as f64 * 2.0 / side - 1.0;
        for px in 0..n {
            let x0 = px as f64 * 3.0 / side - 2.0;
            let mut x = 0.0f64;
            let mut y = 0.0f64;
            let mut inside = true;
            for _ in 0..50 {
                if x * x + y * y > 4.0 {
                    inside = false;
                    break;
                }
                let next_x = x * x - y * y + x0;
                y = 2.0 * x * y + y0;
                x = next_x;
            }
            if inside {
                count += 1;
            }
        }
    }
    format!("{}", count)
}

/// Leibniz series for pi: `4 * sum((-1)^k / (2k+1))` over `k < n`,
/// accumulated in index order.
pub fn pi_leibniz(n: usize) -> String {
    let mut sum = 0.0f64;
    let mut sign = 1.0f64;
    for k in 0..n {
        sum += sign / (2.0 * k as f64 + 1.0);
        sign = -sign;
    }
    format!("{:.9}", sum * 4.0)
}
