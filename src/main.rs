//! lockstep_bench - entry point
//!
//! Invocation: `lockstep_bench <kernel-id> <n>`
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌──────────┐
//! │  <n>     │───▶│  Kernel   │───▶│  stdout  │
//! │ (arg)    │    │ (LCG+alg) │    │ (result) │
//! └──────────┘    └───────────┘    └──────────┘
//! ```
//!
//! Stdout carries nothing but the kernel's result block; diagnostics go to
//! the log file and stderr. An external harness times the process and
//! captures stdout for byte-for-byte comparison across languages.

use std::time::Instant;

use anyhow::Result;
use lockstep_bench::config::AppConfig;
use lockstep_bench::error::CatalogError;
use lockstep_bench::kernels;

const CONFIG_PATH: &str = "config/lockstep.yaml";

fn print_catalog() {
    for kernel in kernels::KERNELS {
        println!(
            "{:<14} {:<14} {}",
            kernel.id,
            kernel.family.label(),
            kernel.description
        );
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--list") {
        print_catalog();
        return Ok(());
    }

    let config = AppConfig::load_or_default(CONFIG_PATH);
    let _log_guard = lockstep_bench::logging::init_logging(&config);

    let id = args.get(1).ok_or(CatalogError::MissingArgument("kernel id"))?;
    let raw_n = args.get(2).ok_or(CatalogError::MissingArgument("size n"))?;
    let n: usize = raw_n
        .parse()
        .map_err(|_| CatalogError::InvalidSize(raw_n.clone()))?;

    let kernel =
        kernels::find(id).ok_or_else(|| CatalogError::UnknownKernel(id.clone()))?;

    tracing::info!(kernel = kernel.id, n, "starting kernel");
    let started = Instant::now();
    let output = kernel.run(n);
    let elapsed = started.elapsed();
    tracing::info!(
        kernel = kernel.id,
        n,
        elapsed_ms = elapsed.as_millis() as u64,
        "kernel complete"
    );

    println!("{}", output);
    Ok(())
}
