use eurocalc_lib::{default_configs, quote, OptionVariant, PricingRequest, QuoteRequest};

fn main() {
    let request = QuoteRequest::from_pricing_request(&PricingRequest::new(
        100.0,
        105.0,
        0.5,
        0.04,
        0.25,
        OptionVariant::Call,
    ))
    .with_symbol("DEMO");

    println!("Eurocalc-lib Default Configuration Examples\n");

    let presets = [
        ("standard", default_configs::standard(), "Reference CDF, stored-run input ranges"),
        ("exact", default_configs::exact(), "Double-precision error function"),
        ("permissive", default_configs::permissive(), "Positivity checks only"),
        ("strict", default_configs::strict(), "Non-finite outputs are errors"),
    ];

    for (i, (name, config, use_case)) in presets.iter().enumerate() {
        println!("{}. {} configuration:", i + 1, name);
        println!("   CDF method: {:?}", config.cdf_method);
        println!("   Default risk-free rate: {}", config.risk_free_rate);
        println!("   Non-finite policy: {:?}", config.non_finite);
        println!(
            "   Rounding: price {} dp, Greeks {} dp",
            config.rounding.price_decimals, config.rounding.greek_decimals
        );
        println!(
            "   Max T: {}, max sigma: {}",
            config.bounds.max_time_to_expiry, config.bounds.max_volatility
        );
        match quote(&request, config) {
            Ok(q) => println!(
                "   Quote: price {} delta {} vega {}",
                q.price, q.delta, q.vega
            ),
            Err(e) => println!("   Quote failed: {}", e),
        }
        println!("   Use case: {}\n", use_case);
    }
}
