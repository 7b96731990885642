// demos/pricing_demo.rs

//! Demonstration of European option pricing and quoting
//!
//! This example shows how to:
//! 1. Evaluate price and Greeks directly with the engine
//! 2. Check put-call parity on the results
//! 3. Quote a client JSON payload with display rounding
//! 4. See how validation errors are reported
//!
//! Run with `RUST_LOG=debug` to see the quote pipeline's tracing output.

use anyhow::Result;
use eurocalc_lib::{
    default_configs, evaluate, quote_json, OptionVariant, PricingRequest,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("European Option Pricing Demo");
    println!("============================");

    let call = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionVariant::Call);
    let put = call.with_variant(OptionVariant::Put);

    println!("\nStep 1: Engine output (full precision)");
    println!(
        "{:<6} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Type", "Price", "Delta", "Gamma", "Theta", "Vega", "Rho"
    );
    println!("{}", "-".repeat(74));
    for req in [call, put] {
        let r = evaluate(&req);
        println!(
            "{:<6} {:>12.6} {:>10.6} {:>10.6} {:>10.4} {:>10.4} {:>10.4}",
            req.variant, r.price, r.delta, r.gamma, r.theta, r.vega, r.rho
        );
    }

    println!("\nStep 2: Put-call parity");
    let lhs = evaluate(&call).price - evaluate(&put).price;
    let rhs = call.spot - call.strike * (-call.risk_free_rate * call.time_to_expiry).exp();
    println!("  C - P           = {:.10}", lhs);
    println!("  S - K*exp(-rT)  = {:.10}", rhs);

    println!("\nStep 3: Quoting a client payload");
    let payload = r#"{
        "symbol": "AAPL",
        "spotPrice": "187.5",
        "strikePrice": "190",
        "asOf": "2025-01-02",
        "expiry": "2025-06-20",
        "riskFreeRate": "0.043",
        "dividendYield": "0.005",
        "volatility": "0.27",
        "optionType": "put"
    }"#;
    let quote = quote_json(payload, &default_configs::standard())?;
    println!("  {}", quote.to_json()?);

    println!("\nStep 4: Validation");
    let bad = r#"{"spotPrice": 100, "strikePrice": 100, "timeToExpiry": 0.5,
                  "volatility": "1.8", "optionType": "call"}"#;
    match quote_json(bad, &default_configs::standard()) {
        Ok(q) => println!("  unexpectedly priced: {:?}", q),
        Err(e) => println!("  rejected: {}", e),
    }
    let permissive = quote_json(bad, &default_configs::permissive())?;
    println!("  permissive config prices it at {:.2}", permissive.price);

    Ok(())
}
