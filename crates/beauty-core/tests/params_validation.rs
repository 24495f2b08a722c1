use beauty_core::{Base, NumberLength, SchemaVersion};
use proptest::prelude::*;

#[test]
fn base_rejects_zero_and_one() {
    for raw in [0u32, 1] {
        let err = Base::new(raw).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(err.info().code, "base-too-small");
        assert_eq!(err.info().context["base"], raw.to_string());
    }
}

#[test]
fn length_rejects_zero_and_one() {
    for raw in [0u32, 1] {
        let err = NumberLength::new(raw).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(err.info().code, "length-too-small");
    }
}

#[test]
fn decimal_base_digits() {
    let base = Base::new(10).unwrap();
    assert_eq!(base.get(), 10);
    assert_eq!(base.max_digit(), 9);
    assert_eq!(base.to_string(), "10");
}

#[test]
fn halves_and_middle_digit() {
    let even = NumberLength::new(6).unwrap();
    assert_eq!(even.half_length(), 3);
    assert!(!even.has_middle_digit());

    let odd = NumberLength::new(7).unwrap();
    assert_eq!(odd.half_length(), 3);
    assert!(odd.has_middle_digit());

    let shortest = NumberLength::new(2).unwrap();
    assert_eq!(shortest.half_length(), 1);
}

#[test]
fn deserialization_validates() {
    let base: Base = serde_json::from_str("16").expect("valid base");
    assert_eq!(base.get(), 16);
    assert!(serde_json::from_str::<Base>("1").is_err());
    assert!(serde_json::from_str::<NumberLength>("0").is_err());
    assert_eq!(serde_json::to_string(&base).unwrap(), "16");
}

#[test]
fn schema_defaults_to_first_release() {
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}

proptest! {
    #[test]
    fn half_length_reconstructs_length(raw in 2u32..10_000) {
        let length = NumberLength::new(raw).unwrap();
        let middle = u32::from(length.has_middle_digit());
        prop_assert_eq!(2 * length.half_length() + middle, raw);
    }
}
