//! Basic seasonal anomaly detection example

use anomaly_esd::{Direction, EsdDetector, EsdParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Seasonal Anomaly Detection Examples ===\n");

    // Example 1: weekly-seasonal series with three injected anomalies
    println!("1. Weekly seasonality, both directions");
    let series = vec![
        5.0, 9.0, 2.0, 9.0, 0.0, 6.0, 3.0, 8.0, 5.0, 18.0, 7.0, 8.0, 8.0, 0.0, 2.0, -5.0, 0.0,
        5.0, 6.0, 7.0, 3.0, 6.0, 1.0, 4.0, 4.0, 4.0, 30.0, 7.0, 5.0, 8.0,
    ];

    let detector = EsdDetector::new(EsdParameters {
        max_anoms: 0.2,
        ..EsdParameters::default()
    });
    let result = detector.detect(&series, 7)?;

    println!("  Found {} anomalies", result.count());
    for anomaly in result.anomalies() {
        println!(
            "    position {:2}, value {:5.1}, score {:.3}, sign {:+}",
            anomaly.position, series[anomaly.position], anomaly.score, anomaly.sign
        );
    }

    // Example 2: only dips below the seasonal baseline
    println!("\n2. Negative direction only");
    let dips = EsdDetector::new(EsdParameters {
        max_anoms: 0.2,
        direction: Direction::Negative,
        ..EsdParameters::default()
    });
    let result = dips.detect(&series, 7)?;
    println!("  Found {} dips at positions {:?}", result.count(), result.positions());

    // Example 3: a clean series produces nothing
    println!("\n3. Clean repeating series");
    let clean: Vec<f64> = (0..42).map(|i| (i % 7) as f64).collect();
    let result = detector.detect(&clean, 7)?;
    println!("  Found {} anomalies", result.count());

    Ok(())
}
