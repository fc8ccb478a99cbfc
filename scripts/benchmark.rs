// scripts/benchmark.rs
use gbm_mc_pricer::analytics::bs_analytic;
use gbm_mc_pricer::math_utils::Timer;
use gbm_mc_pricer::mc::mc_engine::{simulate_and_price, McConfig};
use gbm_mc_pricer::models::SimulationParameters;
use std::env;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

struct BenchmarkResult {
    name: String,
    paths: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    value: f64,
    relative_error: f64,
}

fn run_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let (s0, k, r, sigma, t) = (100.0, 100.0, 0.05, 0.2, 1.0);
    let steps = 252;
    let analytic = bs_analytic::bs_call_price(s0, k, r, sigma, t);

    for &paths in &[10_000usize, 100_000, 500_000] {
        for parallel in [false, true] {
            let mode = if parallel { "parallel" } else { "sequential" };
            println!("Benchmarking {} paths ({})...", paths, mode);

            let params = match SimulationParameters::new(s0, k, t, r, sigma, r, steps, paths) {
                Ok(p) => p,
                Err(e) => {
                    tracing::error!("invalid benchmark parameters: {e}");
                    continue;
                }
            };
            let cfg = McConfig {
                seed: Some(42),
                retain_paths: 0,
                parallel,
                ..McConfig::new(params)
            };

            let mut timer = Timer::new();
            timer.start();
            let outcome = match simulate_and_price(&cfg) {
                Ok(o) => o,
                Err(e) => {
                    tracing::error!("benchmark run failed: {e}");
                    continue;
                }
            };
            let time_ms = timer.elapsed_ms();
            let price = outcome.result.option_price;

            results.push(BenchmarkResult {
                name: format!("Call {}k x {} steps ({})", paths / 1000, steps, mode),
                paths,
                time_ms,
                throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
                value: price,
                relative_error: (price - analytic).abs() / analytic,
            });
        }
    }

    results
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("gbm-mc-pricer Benchmark Suite");
    println!("=============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!(
        "  Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    let results = run_benchmarks();

    println!("\n{:=<92}", "");
    println!(
        "{:<38} {:>8} {:>12} {:>15} {:>8} {:>8}",
        "Benchmark", "Paths", "Time (ms)", "Throughput", "Value", "Rel Err"
    );
    println!("{:-<92}", "");
    for result in &results {
        println!(
            "{:<38} {:>8} {:>12.2} {:>15.0} {:>8.4} {:>7.2}%",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.value,
            result.relative_error * 100.0
        );
    }
    println!("{:=<92}", "");
}
