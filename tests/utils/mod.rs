use insta::assert_snapshot;
use rstest::rstest;
use synapse_backend::utils::{humanize_size, round_to};

#[rstest]
#[case::zero(0.0, "0B")]
#[case::negative(-5.0, "0B")]
#[case::bytes(512.0, "512B")]
#[case::just_below_kilobyte(1023.0, "1023B")]
#[case::kilobyte(1024.0, "1.0KB")]
#[case::three_megabytes(3.0 * 1024.0 * 1024.0, "3.0MB")]
#[case::model_weights(3_825_819_519.0, "3.6GB")]
#[case::terabyte(1024_f64.powi(4), "1.0TB")]
#[case::beyond_terabyte(2048.0 * 1024_f64.powi(4), "2048.0TB")]
#[case::nan(f64::NAN, "0B")]
fn test_humanize_size(#[case] bytes: f64, #[case] expected: &str) {
    assert_eq!(humanize_size(bytes), expected);
}

#[test]
fn test_humanize_size_rounds_to_one_decimal() {
    assert_snapshot!(humanize_size(1536.0), @"1.5KB");
    assert_snapshot!(humanize_size(3.44 * 1024.0 * 1024.0 * 1024.0), @"3.4GB");
}

#[rstest]
#[case(12.346, 2, 12.35)]
#[case(359.6, 0, 360.0)]
#[case(68.54, 1, 68.5)]
fn test_round_to(#[case] value: f64, #[case] digits: u32, #[case] expected: f64) {
    assert!((round_to(value, digits) - expected).abs() < 1e-9);
}
