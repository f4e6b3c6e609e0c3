use assertables::*;

use super::*;

#[rstest]
fn test_to_full_name() {
    assert_eq!(to_full_name(TEST_EXP_NAME), TEST_EXP_FULL_NAME);
}

#[rstest]
fn test_from_full_name() {
    assert_eq!(from_full_name(TEST_EXP_FULL_NAME).unwrap(), TEST_EXP_NAME);
}

#[rstest]
fn test_full_name_round_trip() {
    assert_eq!(from_full_name(&to_full_name("green-17")).unwrap(), "green-17");
}

#[rstest]
#[case::unrelated("some-other-object")]
#[case::prefix_not_leading("foo-peerlab-exp-blue")]
fn test_from_full_name_not_prefixed(#[case] full_name: &str) {
    let err = from_full_name(full_name).unwrap_err();
    assert_contains!(format!("{}", err.root_cause()), "not an experiment object name");
}
