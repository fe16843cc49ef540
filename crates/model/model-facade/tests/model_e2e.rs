//! End-to-end tests for the sortfit modeling pipeline
//!
//! Runs complete dataset → report workflows using only the facade's API.

use model_facade::prelude::*;

fn bubble_sort() -> Dataset {
    vec![
        TimingRecord::new("Bubble Sort", 10, 5.0),
        TimingRecord::new("Bubble Sort", 20, 20.0),
        TimingRecord::new("Bubble Sort", 30, 45.0),
    ]
    .into_iter()
    .collect()
}

fn benchmark() -> Dataset {
    let mut dataset = Dataset::default();
    for n in 1..=10u64 {
        let size = n * 500;
        let x = size as f64;
        dataset.push(TimingRecord::new("Quick Sort", size, 3e-4 * x * x.ln()));
        dataset.push(TimingRecord::new("Selection Sort", size, 4e-6 * x * x));
        dataset.push(TimingRecord::new("Heap Sort", size, 5e-4 * x * x.ln()));
    }
    dataset
}

fn fast_sgd() -> PipelineConfig {
    PipelineConfig::new(2, RegressorKind::Sgd).with_sgd(SgdConfig::new(0.5, 5000))
}

#[test]
fn e2e_bubble_sort_closed_form() {
    let pipeline = FitPipeline::new(PipelineConfig::new(2, RegressorKind::Linear)).unwrap();
    let predictions = pipeline.fit_predict(&bubble_sort()).unwrap();

    assert_eq!(predictions.len(), 3);
    for (prediction, expected) in predictions.iter().zip([5.0, 20.0, 45.0]) {
        assert_eq!(prediction.method, "Bubble Sort");
        assert!((prediction.predicted_execution_time - expected).abs() < 1e-6);
    }
}

#[test]
fn e2e_bubble_sort_gradient_descent() {
    let report = FitPipeline::new(fast_sgd()).unwrap().fit(&bubble_sort()).unwrap();
    let curve = report.curve("Bubble Sort").unwrap();

    assert!(curve.status().is_converged());

    let fitted = curve.fitted_values();
    for (value, expected) in fitted.iter().zip([5.0, 20.0, 45.0]) {
        assert!(
            (value - expected).abs() / expected < 0.05,
            "{} too far from {}",
            value,
            expected
        );
    }

    // Increasing and convex like the timings it smooths
    assert!(fitted[0] < fitted[1] && fitted[1] < fitted[2]);
    assert!(fitted[2] - fitted[1] > fitted[1] - fitted[0]);
}

#[test]
fn e2e_multi_method_grouping() {
    let report = FitPipeline::new(PipelineConfig::new(2, RegressorKind::Linear))
        .unwrap()
        .fit(&benchmark())
        .unwrap();

    let methods: Vec<&str> = report.curves().iter().map(|c| c.method()).collect();
    assert_eq!(methods, vec!["Quick Sort", "Selection Sort", "Heap Sort"]);

    let predictions = report.predictions();
    assert_eq!(predictions.len(), 30);
    for (block, method) in predictions.chunks(10).zip(&methods) {
        assert!(block.iter().all(|p| p.method == *method));
        let sizes: Vec<u64> = block.iter().map(|p| p.input_size).collect();
        assert_eq!(sizes, (1..=10u64).map(|n| n * 500).collect::<Vec<_>>());
    }

    for curve in report.curves() {
        assert!(curve.r_squared() > 0.99, "{}: {}", curve.method(), curve.r_squared());
    }
}

#[test]
fn e2e_method_filter_selects_subset() {
    let config = PipelineConfig::new(2, RegressorKind::Linear)
        .with_methods(["Heap Sort", "Selection Sort"]);
    let report = FitPipeline::new(config).unwrap().fit(&benchmark()).unwrap();

    let methods: Vec<&str> = report.curves().iter().map(|c| c.method()).collect();
    assert_eq!(methods, vec!["Selection Sort", "Heap Sort"]);
}

#[test]
fn e2e_single_point_method_does_not_fail() {
    let mut dataset = bubble_sort();
    dataset.push(TimingRecord::new("Radix Sort", 1000, 7.5));

    let report = FitPipeline::new(fast_sgd()).unwrap().fit(&dataset).unwrap();

    assert!(report.failures().is_empty());
    let curve = report.curve("Radix Sort").unwrap();
    assert_eq!(curve.len(), 1);
    assert!((curve.fitted_values()[0] - 7.5).abs() < 0.1);
}

#[test]
fn e2e_empty_dataset_yields_empty_report() {
    let report = FitPipeline::new(PipelineConfig::default())
        .unwrap()
        .fit(&Dataset::default())
        .unwrap();

    assert!(report.curves().is_empty());
    assert!(report.predictions().is_empty());
}

#[test]
fn e2e_curve_sampling_for_display() {
    let report = FitPipeline::new(PipelineConfig::new(2, RegressorKind::Linear))
        .unwrap()
        .fit(&benchmark())
        .unwrap();
    let curve = report.curve("Selection Sort").unwrap();

    let points = curve.sample(50).unwrap();
    assert_eq!(points.len(), 50);
    assert_eq!(points[0].0, 500.0);
    assert!((points[49].0 - 5000.0).abs() < 1e-9);
    assert!(points.windows(2).all(|w| w[0].1 < w[1].1));
}

#[test]
fn e2e_cancellation_stops_fit() {
    let token = CancellationToken::new();
    let pipeline = FitPipeline::new(fast_sgd())
        .unwrap()
        .with_cancellation(token.clone());

    assert!(pipeline.fit(&bubble_sort()).is_ok());

    token.cancel();
    assert!(matches!(
        pipeline.fit(&bubble_sort()),
        Err(ModelError::Cancelled)
    ));
}
