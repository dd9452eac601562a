use price_forecast::{ForecastError, ForecastRequest, Forecaster, GaussianNoise, NoNoise, NoiseSource};

fn volatile_request() -> ForecastRequest {
    let closes = vec![
        100.0, 101.0, 100.5, 102.0, 100.0, 103.0, 99.0, 105.0, 98.0, 106.0,
    ];
    ForecastRequest::new("NOISE", 20, closes)
}

#[test]
fn test_no_noise_matches_default_forecast() {
    let forecaster = Forecaster::default();
    let request = volatile_request();

    let default = forecaster.forecast(&request);
    let explicit = forecaster.forecast_with_noise(&request, &mut NoNoise);

    assert_eq!(default, explicit);
}

#[test]
fn test_closure_noise_is_injected_per_step() {
    let forecaster = Forecaster::default();
    let request = volatile_request();
    let mut steps = Vec::new();
    let mut record = |step: usize, sigma: f64| {
        steps.push((step, sigma));
        0.0
    };

    let result = forecaster.forecast_with_noise(&request, &mut record);

    assert_eq!(result.predictions, forecaster.forecast(&request).predictions);
    assert_eq!(steps.len(), 20);
    assert!(steps.iter().enumerate().all(|(i, &(step, _))| step == i));
    assert!(steps.iter().all(|&(_, sigma)| sigma > 0.0));
}

#[test]
fn test_constant_noise_shifts_path() {
    let forecaster = Forecaster::default();
    let request = ForecastRequest::new("SHIFT", 5, vec![100.0, 100.0]);
    let mut bump = |_step: usize, _sigma: f64| 0.01;

    let result = forecaster.forecast_with_noise(&request, &mut bump);

    let mut expected = 100.0;
    for value in result.predictions {
        expected *= 1.01;
        assert!((value - expected).abs() < 1e-9);
    }
}

#[test]
fn test_baseline_ignores_noise() {
    let forecaster = Forecaster::default();
    let request = ForecastRequest::new("BASE", 4, vec![12.0]);
    let mut loud = |_step: usize, _sigma: f64| 0.5;

    let result = forecaster.forecast_with_noise(&request, &mut loud);
    assert_eq!(result.predictions, vec![12.0; 4]);
}

#[test]
fn test_gaussian_noise_is_reproducible_for_a_seed() {
    let forecaster = Forecaster::default();
    let request = volatile_request();

    let mut first = GaussianNoise::new(42, 1.0).unwrap();
    let mut second = GaussianNoise::new(42, 1.0).unwrap();

    let a = forecaster.forecast_with_noise(&request, &mut first);
    let b = forecaster.forecast_with_noise(&request, &mut second);

    assert_eq!(a, b);
    assert_ne!(a.predictions, forecaster.forecast(&request).predictions);
    assert!(a.predictions.iter().all(|&p| p >= 0.01));
}

#[test]
fn test_gaussian_noise_without_volatility_is_silent() {
    let forecaster = Forecaster::default();
    // A single return has zero variance
    let request = ForecastRequest::new("CALM", 10, vec![100.0, 101.0]);
    let mut noise = GaussianNoise::new(7, 3.0).unwrap();

    let noisy = forecaster.forecast_with_noise(&request, &mut noise);
    assert_eq!(noisy.predictions, forecaster.forecast(&request).predictions);
}

#[test]
fn test_gaussian_noise_zero_scale() {
    let mut noise = GaussianNoise::new(1, 0.0).unwrap();
    assert_eq!(noise.scale(), 0.0);
    assert_eq!(noise.sample(0, 0.2).abs(), 0.0);
}

#[test]
fn test_gaussian_noise_rejects_bad_scale() {
    for scale in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            GaussianNoise::new(0, scale),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}
