// Example: plot_greeks.rs
// Evaluates a call and a put across a spot ladder and writes one SVG panel per
// output (price, delta, gamma, theta, vega, rho). Calls are drawn in red,
// puts in blue.
//
// Usage:
//     cargo run --example plot_greeks -- [strike] [years] [rate] [vol]
//
// Defaults to K=100, T=0.5, r=0.03, sigma=0.25. The chart is written to
// greeks.svg in the working directory.

use std::env;
use std::error::Error;

use eurocalc_lib::{greeks_ladder, LadderPoint, OptionVariant, PricingRequest};
use plotters::prelude::*;

fn arg_or(args: &[String], idx: usize, default: f64) -> Result<f64, Box<dyn Error>> {
    match args.get(idx) {
        Some(raw) => Ok(raw.parse::<f64>()?),
        None => Ok(default),
    }
}

fn series(ladder: &[LadderPoint], pick: fn(&LadderPoint) -> f64) -> Vec<(f64, f64)> {
    ladder.iter().map(|p| (p.spot, pick(p))).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let strike = arg_or(&args, 1, 100.0)?;
    let years = arg_or(&args, 2, 0.5)?;
    let rate = arg_or(&args, 3, 0.03)?;
    let vol = arg_or(&args, 4, 0.25)?;

    let call = PricingRequest::new(strike, strike, years, rate, vol, OptionVariant::Call);
    let put = call.with_variant(OptionVariant::Put);
    let (lo, hi) = (strike * 0.5, strike * 1.5);

    let call_ladder = greeks_ladder(&call, lo, hi, 200);
    let put_ladder = greeks_ladder(&put, lo, hi, 200);

    let panels: [(&str, fn(&LadderPoint) -> f64); 6] = [
        ("Price", |p| p.result.price),
        ("Delta", |p| p.result.delta),
        ("Gamma", |p| p.result.gamma),
        ("Theta (per year)", |p| p.result.theta),
        ("Vega", |p| p.result.vega),
        ("Rho", |p| p.result.rho),
    ];

    let root = SVGBackend::new("greeks.svg", (1500, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        &format!(
            "Black-Scholes Greeks | K={} T={:.2}y r={:.2}% sigma={:.1}%",
            strike,
            years,
            rate * 100.0,
            vol * 100.0
        ),
        ("sans-serif", 28),
    )?;

    for (area, (title, pick)) in root.split_evenly((2, 3)).iter().zip(panels.iter()) {
        let call_line = series(&call_ladder, *pick);
        let put_line = series(&put_ladder, *pick);

        let (y_min, y_max) = call_line
            .iter()
            .chain(put_line.iter())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        let pad = ((y_max - y_min) * 0.05).max(1e-6);

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .caption(*title, ("sans-serif", 20))
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(lo..hi, (y_min - pad)..(y_max + pad))?;

        chart.configure_mesh().x_desc("Spot").draw()?;

        // Call in red, put in blue
        chart.draw_series(vec![PathElement::new(call_line, RED)])?;
        chart.draw_series(vec![PathElement::new(put_line, BLUE)])?;
    }

    root.present()?;
    println!("Chart saved to greeks.svg");
    Ok(())
}
