//! Allocation-heavy kernels: string growth and boxed binary trees

use crate::kernels::CHECKSUM_MOD;

/// Build the n-byte string `'a' + i % 26` by repeated push and report
/// `"{len} {hash}"` with the base-31 polynomial hash mod [`CHECKSUM_MOD`].
pub fn strings(n: usize) -> String {
    let mut s = String::with_capacity(n);
    for i in 0..n {
        s.push((b'a' + (i % 26) as u8) as char);
    }
    let mut hash = 0u64;
    for &byte in s.as_bytes() {
        hash = (hash * 31 + u64::from(byte)) % CHECKSUM_MOD;
    }
    format!("{} {}", s.len(), hash)
}

struct TreeNode {
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

fn build(depth: usize) -> TreeNode {
    if depth == 0 {
        TreeNode {
            left: None,
            right: None,
        }
    } else {
        TreeNode {
            left: Some(Box::new(build(depth - 1))),
            right: Some(Box::new(build(depth - 1))),
        }
    }
}

fn check(node: &TreeNode) -> u64 {
    1 + node.left.as_deref().map_or(0, check) + node.right.as_deref().map_or(0, check)
}

/// Complete boxed binary tree of depth `n`; prints the recursive node
/// checksum `2^(n+1) - 1`.
pub fn binary_trees(n: usize) -> String {
    let tree = build(n);
    format!("{}", check(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_golden() {
        assert_eq!(strings(0), "0 0");
        assert_eq!(strings(10), "10 140777271");
        assert_eq!(strings(10000), "10000 527448880");
    }

    #[test]
    fn test_binary_trees_golden() {
        assert_eq!(binary_trees(0), "1");
        assert_eq!(binary_trees(10), "2047");
        assert_eq!(binary_trees(20), format!("{}", (1u64 << 21) - 1));
    }
}
