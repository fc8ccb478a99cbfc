// scripts/simulate.rs
use gbm_mc_pricer::analytics::bs_analytic;
use gbm_mc_pricer::config;
use gbm_mc_pricer::mc::mc_engine::simulate_and_price;
use gbm_mc_pricer::mc::statistics::DEFAULT_HISTOGRAM_BINS;

const HISTOGRAM_WIDTH: usize = 50;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    let outcome = match simulate_and_price(&cfg) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("simulation failed: {e}");
            std::process::exit(1);
        }
    };

    let p = &cfg.params;
    println!("Monte Carlo European Call (GBM)");
    println!("===============================");
    println!(
        "S0={} K={} T={} mu={} sigma={} r={} N={} M={} seed={}",
        p.s0, p.k, p.t, p.mu, p.sigma, p.r, p.steps, p.paths, outcome.seed
    );
    println!();

    let result = &outcome.result;
    println!("Expected payoff:          {:.4}", result.expected_payoff);
    match result.standard_error {
        Some(se) => println!(
            "Estimated option price:   {:.4} ± {:.4} (95%)",
            result.option_price,
            1.96 * se
        ),
        None => println!("Estimated option price:   {:.4}", result.option_price),
    }
    println!(
        "Analytic (mu drift):      {:.4}",
        bs_analytic::drifted_call_value(p.s0, p.k, p.mu, p.r, p.sigma, p.t)
    );
    println!(
        "Black-Scholes (r drift):  {:.4}",
        bs_analytic::bs_call_price(p.s0, p.k, p.r, p.sigma, p.t)
    );
    println!("Paths retained:           {}", outcome.paths.len());

    let summary = match outcome.terminal_summary() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("summary failed: {e}");
            std::process::exit(1);
        }
    };
    println!();
    println!("Final Stock Price Distribution");
    println!(
        "mean {:.4}  std {:.4}  min {:.4}  max {:.4}",
        summary.mean, summary.std_dev, summary.min, summary.max
    );

    let hist = match outcome.terminal_histogram(DEFAULT_HISTOGRAM_BINS) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("histogram failed: {e}");
            std::process::exit(1);
        }
    };
    let peak = hist.counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in hist.counts.iter().enumerate() {
        let (left, right) = hist.bin_edges(i);
        let bar = "#".repeat(count * HISTOGRAM_WIDTH / peak);
        println!("{:>10.2} - {:<10.2} {:>7} {}", left, right, count, bar);
    }
}
