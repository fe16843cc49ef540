//! Integration tests for the model stack
//!
//! Exercises the stages together through the facade's re-exports.

use model_facade::metrics::r_squared;
use model_facade::{
    FeatureMatrix, FitStatus, LinearRegression, ModelError, PolynomialFeatures, Regressor,
    SgdConfig, SgdRegressor, StandardScaler, Transformer,
};

fn quadratic_sizes() -> (Vec<f64>, Vec<f64>) {
    let sizes: Vec<f64> = (1..=8).map(|i| (i * 100) as f64).collect();
    let times = sizes.iter().map(|n| 2e-4 * n * n + 0.01 * n + 1.0).collect();
    (sizes, times)
}

fn prepare(sizes: &[f64], degree: usize) -> (FeatureMatrix, StandardScaler) {
    let raw = FeatureMatrix::from_column(sizes).unwrap();
    let expanded = PolynomialFeatures::new(degree).unwrap().expand(&raw).unwrap();
    let mut scaler = StandardScaler::new();
    let scaled = scaler.fit_transform(&expanded).unwrap();
    (scaled, scaler)
}

// ============================================================================
// Stage Composition Tests
// ============================================================================

#[test]
fn test_expand_then_scale_shapes() {
    let (sizes, _) = quadratic_sizes();
    let (scaled, scaler) = prepare(&sizes, 3);

    assert_eq!(scaled.nrows(), 8);
    assert_eq!(scaled.ncols(), 3);
    assert_eq!(scaler.feature_means().map(<[f64]>::len), Some(3));

    for c in 0..scaled.ncols() {
        let mean: f64 = scaled.column(c).iter().sum::<f64>() / 8.0;
        assert!(mean.abs() < 1e-9);
    }
}

#[test]
fn test_scaler_inverse_recovers_expansion() {
    let (sizes, _) = quadratic_sizes();
    let raw = FeatureMatrix::from_column(&sizes).unwrap();
    let expanded = PolynomialFeatures::new(2).unwrap().expand(&raw).unwrap();

    let mut scaler = StandardScaler::new();
    let scaled = scaler.fit_transform(&expanded).unwrap();
    let recovered = scaler.inverse_transform(&scaled).unwrap();

    for r in 0..expanded.nrows() {
        for c in 0..expanded.ncols() {
            let original = expanded.get(r, c).unwrap();
            let back = recovered.get(r, c).unwrap();
            assert!((original - back).abs() < 1e-6 * original.abs().max(1.0));
        }
    }
}

#[test]
fn test_linear_recovers_quadratic_exactly() {
    let (sizes, times) = quadratic_sizes();
    let (features, _) = prepare(&sizes, 2);

    let mut model = LinearRegression::new();
    assert_eq!(model.fit(&features, &times).unwrap(), FitStatus::Solved);

    let predicted = model.predict(&features).unwrap();
    for (p, t) in predicted.iter().zip(times.iter()) {
        assert!((p - t).abs() < 1e-6);
    }
}

#[test]
fn test_sgd_approaches_closed_form() {
    let (sizes, times) = quadratic_sizes();
    let (features, _) = prepare(&sizes, 2);

    let mut exact = LinearRegression::new();
    exact.fit(&features, &times).unwrap();

    let config = SgdConfig::new(0.5, 20_000).with_tolerance(1e-12);
    let mut sgd = SgdRegressor::new(config).unwrap();
    sgd.fit(&features, &times).unwrap();

    let expected = exact.predict(&features).unwrap();
    let approx = sgd.predict(&features).unwrap();
    assert!(r_squared(&expected, &approx) > 0.99);
}

#[test]
fn test_regressors_share_contract() {
    let (sizes, times) = quadratic_sizes();
    let (features, _) = prepare(&sizes, 2);

    let mut models: Vec<Box<dyn Regressor>> = vec![
        Box::new(LinearRegression::new()),
        Box::new(SgdRegressor::default()),
    ];

    for model in models.iter_mut() {
        assert!(!model.is_fitted());
        assert_eq!(model.predict(&features), Err(ModelError::NotFitted));
        model.fit(&features, &times).unwrap();
        assert!(model.is_fitted());
        assert_eq!(model.weights().map(<[f64]>::len), Some(2));
        assert!(model.bias().is_some());
    }
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

#[test]
fn test_scaler_rejects_wrong_width_after_fit() {
    let (sizes, _) = quadratic_sizes();
    let (_, scaler) = prepare(&sizes, 2);

    let narrow = FeatureMatrix::from_column(&sizes).unwrap();
    assert!(matches!(
        scaler.transform(&narrow),
        Err(ModelError::DimensionMismatch { expected: 2, actual: 1 })
    ));
}

#[test]
fn test_target_length_mismatch() {
    let (sizes, times) = quadratic_sizes();
    let (features, _) = prepare(&sizes, 2);

    let mut model = LinearRegression::new();
    let result = model.fit(&features, &times[..3]);
    assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));
}

#[test]
fn test_transformer_trait_objects() {
    let (sizes, _) = quadratic_sizes();
    let raw = FeatureMatrix::from_column(&sizes).unwrap();

    let mut stages: Vec<Box<dyn Transformer>> = vec![
        Box::new(PolynomialFeatures::new(2).unwrap()),
        Box::new(StandardScaler::new()),
    ];

    let mut current = raw;
    for stage in stages.iter_mut() {
        current = stage.fit_transform(&current).unwrap();
        assert!(stage.is_fitted());
    }
    assert_eq!(current.ncols(), 2);
}
