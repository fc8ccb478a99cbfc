// demos/error_handling_demo.rs
use gbm_mc_pricer::mc::mc_engine::{simulate_and_price, McConfig};
use gbm_mc_pricer::mc::pricer::price_european_call;
use gbm_mc_pricer::models::SimulationParameters;
use gbm_mc_pricer::McError;

fn main() {
    println!("Error Handling Demo for gbm-mc-pricer");
    println!("=====================================\n");

    // Test 1: Negative spot
    println!("1. Testing negative initial price...");
    match SimulationParameters::new(-100.0, 105.0, 1.0, 0.1, 0.2, 0.05, 100, 100) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Negative volatility
    println!("\n2. Testing negative volatility...");
    match SimulationParameters::new(100.0, 105.0, 1.0, 0.1, -0.2, 0.05, 100, 100) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: No paths
    println!("\n3. Testing zero simulations...");
    match SimulationParameters::new(100.0, 105.0, 1.0, 0.1, 0.2, 0.05, 100, 0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Too many retained paths
    println!("\n4. Testing retention cap...");
    let cfg = McConfig {
        retain_paths: 1_000,
        ..Default::default()
    };
    match simulate_and_price(&cfg) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Zero maturity is accepted and pays intrinsic value
    println!("\n5. Testing zero maturity...");
    let params = SimulationParameters::new(110.0, 105.0, 0.0, 0.1, 0.2, 0.05, 100, 100)
        .expect("Zero maturity is a valid degenerate case");
    match simulate_and_price(&McConfig::new(params)) {
        Ok(outcome) => println!(
            "   ✓ Price = {:.4} (intrinsic value 5.0)",
            outcome.result.option_price
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 6: Pricing an empty sample
    println!("\n6. Testing pricing of an empty terminal price set...");
    match price_european_call(&[], 105.0, 0.05, 1.0) {
        Err(McError::EmptySample { reason }) => println!("   ✓ Caught error: {}", reason),
        Err(e) => println!("   Unexpected error kind: {}", e),
        Ok(_) => println!("   Unexpected: Should have failed!"),
    }

    println!("\nDemo complete.");
}
