/*!
 * Tests for manifest model construction and the validation gate
 */

use adaptive_manifest::errors::ValidationError;
use adaptive_manifest::manifest_model::ManifestModel;

use crate::common;

/// Test that groups and intervals keep model insertion order
#[test]
fn test_model_withInterleavedAppends_shouldPreserveInsertionOrder() {
    let mut model = ManifestModel::new();

    let g1 = model.add_media_group();
    model.media_group_mut(g1).set_id("g1");
    let i1 = model.add_media_interval();
    model.media_interval_mut(i1).set_id("i1");
    let g2 = model.add_media_group();
    model.media_group_mut(g2).set_id("g2");
    let i2 = model.add_media_interval();
    model.media_interval_mut(i2).set_id("i2");

    let group_ids: Vec<&str> = model.media_groups().iter().map(|g| g.id.as_str()).collect();
    let interval_ids: Vec<&str> = model
        .media_intervals()
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(group_ids, ["g1", "g2"]);
    assert_eq!(interval_ids, ["i1", "i2"]);
}

/// Test that a complete model passes validation
#[test]
fn test_validate_withCompleteModel_shouldSucceed() {
    let model = common::minimal_valid_model("out.manifest");
    assert!(model.validate().is_ok());
}

/// Test that validation without an output filename fails
#[test]
fn test_validate_withoutOutputFilename_shouldFail() {
    let mut model = ManifestModel::new();
    let g = model.add_media_group();
    model.media_group_mut(g).set_id("g1");
    let i = model.add_media_interval();
    model.media_interval_mut(i).set_id("i1");

    assert_eq!(
        model.validate().err(),
        Some(ValidationError::MissingOutputFilename)
    );
}

/// Test that an empty output filename counts as missing
#[test]
fn test_validate_withEmptyOutputFilename_shouldFail() {
    let mut model = common::minimal_valid_model("out.manifest");
    model.set_output_filename("");

    assert_eq!(
        model.validate().err(),
        Some(ValidationError::MissingOutputFilename)
    );
}

/// Test that a model without groups or without intervals fails
#[test]
fn test_validate_withMissingEntities_shouldFail() {
    let mut model = ManifestModel::new();
    model.set_output_filename("out.manifest");
    assert_eq!(model.validate().err(), Some(ValidationError::NoMediaGroups));

    let g = model.add_media_group();
    model.media_group_mut(g).set_id("g1");
    assert_eq!(
        model.validate().err(),
        Some(ValidationError::NoMediaIntervals)
    );
}

/// Test that two groups sharing one id fail validation
#[test]
fn test_validate_withDuplicateGroupIds_shouldFail() {
    let mut model = common::minimal_valid_model("out.manifest");
    let dup = model.add_media_group();
    model.media_group_mut(dup).set_id("g1");

    assert_eq!(
        model.validate().err(),
        Some(ValidationError::DuplicateGroupId {
            id: "g1".to_string()
        })
    );
}

/// Test that duplicate media ids within one group fail validation
#[test]
fn test_validate_withDuplicateMediaIdsInGroup_shouldFail() {
    let mut model = common::minimal_valid_model("out.manifest");
    let g = model.add_media_group();
    model.media_group_mut(g).set_id("g2");
    model.media_group_mut(g).add_media().set_id("m1");
    model.media_group_mut(g).add_media().set_id("m1");

    assert_eq!(
        model.validate().err(),
        Some(ValidationError::DuplicateMediaId {
            group_id: "g2".to_string(),
            media_id: "m1".to_string()
        })
    );
}

/// Test that the same media id in two different groups is allowed
#[test]
fn test_validate_withSameMediaIdAcrossGroups_shouldSucceed() {
    let mut model = common::minimal_valid_model("out.manifest");
    let g = model.add_media_group();
    model.media_group_mut(g).set_id("g2");
    model.media_group_mut(g).add_media().set_id("m1");

    assert!(model.validate().is_ok());
}

/// Test that an unresolvable group reference fails validation
#[test]
fn test_validate_withUnresolvedGroupReference_shouldFail() {
    let mut model = common::minimal_valid_model("out.manifest");
    let i = model.add_media_interval();
    model.media_interval_mut(i).set_id("i2");
    model.media_interval_mut(i).add_group_reference("ghost");

    assert_eq!(
        model.validate().err(),
        Some(ValidationError::UnresolvedGroupReference {
            interval_id: "i2".to_string(),
            group_id: "ghost".to_string()
        })
    );
}

/// Test that a reference resolves whether the group was declared before or
/// after the interval
#[test]
fn test_validate_withForwardReference_shouldSucceed() {
    let mut model = ManifestModel::new();
    model.set_output_filename("out.manifest");

    // Interval first, referencing a group declared later
    let i = model.add_media_interval();
    model.media_interval_mut(i).set_id("i1");
    model.media_interval_mut(i).add_group_reference("g1");
    let g = model.add_media_group();
    model.media_group_mut(g).set_id("g1");

    assert!(model.validate().is_ok());
}

/// Test that negative times are rejected
#[test]
fn test_validate_withNegativeTimes_shouldFail() {
    let mut model = common::minimal_valid_model("out.manifest");
    let i = model.add_media_interval();
    model.media_interval_mut(i).set_id("i2");
    model.media_interval_mut(i).set_start(-1.0);
    model.media_interval_mut(i).add_group_reference("g1");

    assert_eq!(
        model.validate().err(),
        Some(ValidationError::NegativeTime {
            interval_id: "i2".to_string(),
            field: "start",
            value: -1.0
        })
    );

    model.media_interval_mut(i).set_start(0.0);
    model.media_interval_mut(i).set_duration(-5.0);
    assert_eq!(
        model.validate().err(),
        Some(ValidationError::NegativeTime {
            interval_id: "i2".to_string(),
            field: "duration",
            value: -5.0
        })
    );
}

/// Test that validation is idempotent given no intervening mutation
#[test]
fn test_validate_calledTwice_shouldGiveSameResult() {
    let valid = common::minimal_valid_model("out.manifest");
    assert!(valid.validate().is_ok());
    assert!(valid.validate().is_ok());

    let mut invalid = common::minimal_valid_model("out.manifest");
    let dup = invalid.add_media_group();
    invalid.media_group_mut(dup).set_id("g1");
    let first = invalid.validate().err();
    let second = invalid.validate().err();
    assert_eq!(first, second);
    assert!(first.is_some());
}

/// Test that an empty media group is tolerated by validation
#[test]
fn test_validate_withEmptyGroup_shouldStillSucceed() {
    let mut model = common::minimal_valid_model("out.manifest");
    let g = model.add_media_group();
    model.media_group_mut(g).set_id("g2");

    assert!(model.validate().is_ok());
}
