//! Spectral norm kernel
//!
//! Spectral norm of the infinite matrix `A[i][j] = 1/((i+j)(i+j+1)/2 + i+1)`
//! truncated to n x n, estimated with 10 power iterations of `A^T A`.
//! Inner products accumulate in index order; the `A` entry is evaluated in
//! floating point as `ij*(ij+1)/2 + i + 1` with `ij = i+j`.

fn a(i: usize, j: usize) -> f64 {
    let ij = (i + j) as f64;
    1.0 / (ij * (ij + 1.0) / 2.0 + i as f64 + 1.0)
}

fn mult_av(v: &[f64], out: &mut [f64]) {
    for (i, slot) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, &vj) in v.iter().enumerate() {
            sum += a(i, j) * vj;
        }
        *slot = sum;
    }
}

fn mult_atv(v: &[f64], out: &mut [f64]) {
    for (i, slot) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, &vj) in v.iter().enumerate() {
            sum += a(j, i) * vj;
        }
        *slot = sum;
    }
}

fn mult_ata(v: &[f64], out: &mut [f64], tmp: &mut [f64]) {
    mult_av(v, tmp);
    mult_atv(tmp, out);
}

pub fn run(n: usize) -> String {
    if n == 0 {
        return "0.000000000".to_string();
    }
    let mut u = vec![1.0f64; n];
    let mut v = vec![0.0f64; n];
    let mut tmp = vec![0.0f64; n];
    for _ in 0..10 {
        mult_ata(&u, &mut v, &mut tmp);
        mult_ata(&v, &mut u, &mut tmp);
    }
    let mut vbv = 0.0;
    let mut vv = 0.0;
    for i in 0..n {
        vbv += u[i] * v[i];
        vv += v[i] * v[i];
    }
    format!("{:.9}", (vbv / vv).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(run(0), "0.000000000");
        assert_eq!(run(1), "1.000000000");
    }

    #[test]
    fn test_golden() {
        assert_eq!(run(100), "1.274219991");
        assert_eq!(run(1000), "1.274224148");
    }
}
