use pretty_assertions::assert_eq;
use price_forecast::{forecast, ForecastError, ForecastRequest, ForecastResult, ModelKind};
use serde_json::json;

#[test]
fn test_request_defaults() {
    let request: ForecastRequest =
        serde_json::from_value(json!({ "symbol": "MSFT", "closes": [1.0, 2.0] })).unwrap();

    assert_eq!(request.days, 30);
    assert_eq!(request.horizon(), 30);
    assert_eq!(request.volumes, None);
    assert_eq!(request.features, None);
}

#[test]
fn test_request_with_side_channels() {
    let request: ForecastRequest = serde_json::from_value(json!({
        "symbol": "MSFT",
        "days": 3,
        "closes": [1, 2, 3],
        "volumes": [10, 20, 30],
        "features": { "earnings": true, "nested": { "k": [1, 2] } }
    }))
    .unwrap();

    assert_eq!(request.closes, vec![1.0, 2.0, 3.0]);
    assert_eq!(request.volumes, Some(vec![10.0, 20.0, 30.0]));
    let features = request.features.unwrap();
    assert_eq!(features["earnings"], json!(true));
    assert_eq!(features["nested"]["k"], json!([1, 2]));
}

#[test]
fn test_request_requires_closes() {
    let result = serde_json::from_value::<ForecastRequest>(json!({ "symbol": "X" }));
    assert!(result.is_err());
}

#[test]
fn test_negative_horizon_is_zero() {
    let request = ForecastRequest::new("X", -10, vec![1.0]);
    assert_eq!(request.horizon(), 0);
}

#[test]
fn test_validate_rejects_non_finite() {
    let request = ForecastRequest::new("X", 1, vec![1.0, f64::NAN]);
    match request.validate() {
        Err(ForecastError::ValidationError(msg)) => assert!(msg.contains("closes[1]")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }

    let mut request = ForecastRequest::new("X", 1, vec![1.0, 2.0]);
    request.volumes = Some(vec![f64::INFINITY]);
    assert!(matches!(
        request.validate(),
        Err(ForecastError::ValidationError(_))
    ));

    request.volumes = Some(vec![5.0]);
    assert!(request.validate().is_ok());
}

#[test]
fn test_result_serialization() {
    let result = forecast(&ForecastRequest::new("AAPL", 2, vec![42.0]));
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({
            "symbol": "AAPL",
            "model": "baseline",
            "predictions": [42.0, 42.0],
            "accuracy": null,
            "r2_score": null,
            "mse": null
        })
    );
}

#[test]
fn test_model_tags() {
    assert_eq!(json!(ModelKind::Baseline), json!("baseline"));
    assert_eq!(json!(ModelKind::Ar1Drift), json!("AR1_drift"));
    assert_eq!(ModelKind::Ar1Drift.to_string(), "AR1_drift");

    let parsed: ForecastResult = serde_json::from_value(json!({
        "symbol": "AAPL",
        "model": "AR1_drift",
        "predictions": [1.5],
        "accuracy": null,
        "r2_score": null,
        "mse": null
    }))
    .unwrap();
    assert_eq!(parsed.model, ModelKind::Ar1Drift);
    assert_eq!(parsed.horizons(), 1);
    assert_eq!(parsed.values(), &[1.5]);
}
