//! Example: Epidemic Wave Detection
//!
//! Demonstrates peak detection on a synthetic weekly incidence series
//! with two waves, the effect of the window width, the legacy versus
//! symmetric flank rules, the missing-value policies, and batch
//! detection over several forecast-model sequences.

use crestline::{
    detect, detect_many, find_peaks, FlankRule, MissingValues, PeakConfig, PeakDetectionResult,
};

fn print_result(label: &str, result: &PeakDetectionResult) {
    println!("  {label}:");
    for peak in &result.peaks {
        println!(
            "    week {:>2}  value={:>6.1}  prominence={:>6.1}",
            peak.index, peak.value, peak.prominence
        );
    }
    if result.peaks.len() > 1 {
        println!("    mean spacing: {:.1} weeks", result.mean_spacing);
    }
}

fn main() {
    println!("=== Example: Epidemic Wave Detection ===\n");

    // Weekly incident cases: a spring wave, a reporting blip in the
    // trough (week 7), a larger winter wave
    let weekly: Vec<f64> = vec![
        12.0, 30.0, 80.0, 140.0, 110.0, 60.0, 35.0, 48.0, 28.0, 55.0, 95.0, 150.0, 190.0, 160.0,
        120.0, 70.0, 40.0,
    ];

    // --- Section 1: window width ---
    // m=1 still reports the blip; m=3 requires dominance over a wider
    // neighborhood and keeps only the two waves.
    println!("--- Window width ---");
    for m in [1usize, 3, 6] {
        let peaks = find_peaks(&weekly, m).unwrap();
        println!("  m={m}: peaks at weeks {:?}", peaks);
    }

    // --- Section 2: prominence and spacing ---
    println!("\n--- Prominence and spacing ---");
    let result = detect(&weekly, &PeakConfig::default().window(3)).unwrap();
    print_result("two-wave series, m=3", &result);

    // --- Section 3: flank rules ---
    // The legacy rule never compares a candidate against the final
    // element of the series; the symmetric rule does.
    println!("\n--- Flank rules ---");
    let truncated = [0.0, 5.0, 1.0, 6.0];
    for (name, flank) in [
        ("legacy", FlankRule::Legacy),
        ("symmetric", FlankRule::Symmetric),
    ] {
        let config = PeakConfig::default().window(3).flank(flank);
        let result = detect(&truncated, &config).unwrap();
        println!(
            "  {:?} under {name}: peaks at {:?}",
            truncated,
            result.indices()
        );
    }

    // --- Section 4: missing values ---
    println!("\n--- Missing values ---");
    let gappy: Vec<f64> = vec![
        f64::NAN, 12.0, 30.0, 80.0, 140.0, 110.0, 60.0, 35.0, f64::NAN, 40.0,
    ];
    let reject = PeakConfig::default().window(2);
    match detect(&gappy, &reject) {
        Ok(_) => println!("  Reject: unexpected success"),
        Err(e) => println!("  Reject: {e}"),
    }
    let skip = PeakConfig::default()
        .window(2)
        .missing_values(MissingValues::Skip);
    let result = detect(&gappy, &skip).unwrap();
    println!("  Skip:   peaks at original weeks {:?}", result.indices());

    // --- Section 5: one series per forecast model ---
    println!("\n--- Batch detection ---");
    let models: Vec<Vec<f64>> = vec![
        weekly.clone(),
        weekly.iter().map(|v| v * 0.8 + 5.0).collect(),
        vec![10.0, f64::NAN, 12.0],
    ];
    let results = detect_many(&models, &PeakConfig::default().window(3));
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(r) => println!("  model {i}: peaks at weeks {:?}", r.indices()),
            Err(e) => println!("  model {i}: skipped ({e})"),
        }
    }
}
