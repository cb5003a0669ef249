use serde_json::json;

use super::*;

#[test]
fn null_params_yield_defaults() {
    let v = Value::Null;
    let p = Params::new("demo", &v).unwrap();
    assert_eq!(p.f32_or("x", 1.5).unwrap(), 1.5);
    assert_eq!(p.u32_or("n", 7).unwrap(), 7);
    assert!(p.bool_or("b", true).unwrap());
    assert_eq!(p.choice("mode", &["a", "b"]).unwrap(), "a");
    assert_eq!(p.rgb_or("c", [1, 2, 3]).unwrap(), [1, 2, 3]);
}

#[test]
fn present_values_are_read() {
    let v = json!({"x": 0.25, "n": 12, "mode": "B", "c": [10, 20, 30], "seed": 99});
    let p = Params::new("demo", &v).unwrap();
    assert_eq!(p.f32_or("x", 1.0).unwrap(), 0.25);
    assert_eq!(p.u32_in("n", 1, 2, 64).unwrap(), 12);
    assert_eq!(p.choice("mode", &["a", "b"]).unwrap(), "b");
    assert_eq!(p.opt_rgb("c").unwrap(), Some([10, 20, 30]));
    assert_eq!(p.u64_or("seed", 0).unwrap(), 99);
}

#[test]
fn malformed_values_are_invalid_config() {
    let v = json!({"x": "loud", "n": -1, "mode": "c", "c": [1, 2], "b": 1});
    let p = Params::new("demo", &v).unwrap();
    for err in [
        p.f32_or("x", 0.0).unwrap_err(),
        p.u32_or("n", 0).unwrap_err(),
        p.choice("mode", &["a", "b"]).unwrap_err(),
        p.opt_rgb("c").unwrap_err(),
        p.bool_or("b", false).unwrap_err(),
    ] {
        assert!(matches!(err, FramefxError::InvalidConfig(_)), "{err}");
    }
}

#[test]
fn ranges_and_unknown_keys_are_enforced() {
    let v = json!({"depth": 1, "typo": true});
    let p = Params::new("slit_scan", &v).unwrap();
    assert!(p.u32_in("depth", 60, 2, 600).is_err());
    let err = p.only(&["depth"]).unwrap_err();
    assert!(err.to_string().contains("typo"));
}

#[test]
fn non_object_params_are_rejected() {
    let v = json!([1, 2, 3]);
    assert!(matches!(
        Params::new("demo", &v),
        Err(FramefxError::InvalidConfig(_))
    ));
}
