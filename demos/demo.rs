// demos/demo.rs
use gbm_mc_pricer::analytics::bs_analytic;
use gbm_mc_pricer::math_utils::Timer;
use gbm_mc_pricer::mc::mc_engine::{simulate_and_price, McConfig};
use gbm_mc_pricer::models::SimulationParameters;

fn main() {
    println!("Running gbm-mc-pricer Monte Carlo Demo\n");

    let s0 = 100.0;
    let k = 105.0;
    let t = 1.0;
    let sigma = 0.2;
    let r = 0.05;
    let steps = 1000;
    let paths = 5000;

    // Same contract twice: simulated with the real-world drift, then risk-neutrally
    for mu in [0.1, r] {
        let params = SimulationParameters::new(s0, k, t, mu, sigma, r, steps, paths)
            .expect("Valid parameters");
        let cfg = McConfig {
            seed: Some(42),
            ..McConfig::new(params)
        };

        let mut timer = Timer::new();
        timer.start();
        let outcome = simulate_and_price(&cfg).expect("Valid configuration");
        let elapsed = timer.elapsed_ms();

        let analytic = bs_analytic::drifted_call_value(s0, k, mu, r, sigma, t);
        let se = outcome.result.standard_error.unwrap_or(0.0);

        println!("--- Drift mu = {} (r = {}) ---", mu, r);
        println!("MC Price:          {:.4} ± {:.4}", outcome.result.option_price, se);
        println!("Analytic value:    {:.4}", analytic);
        println!(
            "Black-Scholes:     {:.4}",
            bs_analytic::bs_call_price(s0, k, r, sigma, t)
        );
        println!("Time:              {:.2} ms", elapsed);

        println!("First retained paths (S_0 -> S_T):");
        for (i, path) in outcome.paths.iter().take(5).enumerate() {
            println!("  path {}: {:.2} -> {:.2}", i, path.initial(), path.terminal());
        }
        println!();
    }
}
