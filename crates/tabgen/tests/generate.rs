//! End-to-end finger-joint runs: measure, generate, place.

use glam::DVec3;
use tabgen::{Axis, FingerPlacement, NotchPlan, TabGenError, TabGenerator, UserOptions};
use tabgen_core::{approx_eq, FingerType, LayoutError, LengthUnit, PlacementError};
use tabgen_face::{measure, BodyInfo, BodySet, FaceMeasurement, FaceSelection, GeometryProvider};
use tabgen_mirror::{InMemoryParameterStore, MaterializeOutcome};

fn bodies() -> BodySet {
    BodySet::new(vec![BodyInfo::cuboid(
        "Side",
        DVec3::ZERO,
        DVec3::new(300.0, 200.0, 3.2),
        1,
    )])
}

fn front_face() -> FaceMeasurement {
    measure(&bodies(), &FaceSelection::dual(3, 4, 1)).unwrap()
}

#[test]
fn test_preview_user_defined_face() {
    let layout = TabGenerator::new().preview(&UserOptions::default(), &front_face()).unwrap();

    assert_eq!(layout.fingers(), 37);
    assert_eq!(layout.finger_width(), 8.0);
    assert_eq!(layout.notches(), 18);
    assert!(approx_eq(layout.offset(), 2.0));
    assert!(approx_eq(layout.start(), 10.0));
    assert!(approx_eq(layout.notch_spacing(), 16.0));
    assert!(approx_eq(layout.distance_two(), 196.8));
}

#[test]
fn test_non_parametric_run_writes_nothing() {
    let mut store = InMemoryParameterStore::new();
    let joint = TabGenerator::new()
        .generate(&UserOptions::default(), &front_face(), &mut store)
        .unwrap();

    assert_eq!(joint.alias.as_str(), "side_xz1");
    assert!(joint.report.is_none());
    assert!(store.is_empty());

    let options = UserOptions { parametric: true, preview: true, ..UserOptions::default() };
    let joint = TabGenerator::new().generate(&options, &front_face(), &mut store).unwrap();
    assert!(joint.report.is_none());
    assert!(store.is_empty());
}

#[test]
fn test_parametric_run_is_idempotent() {
    let options = UserOptions { parametric: true, ..UserOptions::default() };
    let generator = TabGenerator::new();
    let mut store = InMemoryParameterStore::new();

    let first = generator.generate(&options, &front_face(), &mut store).unwrap();
    let report = first.report.unwrap();
    assert_eq!(report.count(MaterializeOutcome::Created), first.layout.len());
    assert_eq!(store.len(), first.layout.len());
    assert_eq!(
        store.get("side_xz1_face_length").unwrap().expression,
        "abs(300 mm)"
    );

    let second = generator.generate(&options, &front_face(), &mut store).unwrap();
    let report = second.report.unwrap();
    assert_eq!(report.count(MaterializeOutcome::Reused), second.layout.len());
    assert!(!report.has_collisions());
    assert_eq!(store.len(), first.layout.len());
}

#[test]
fn test_linked_parameter_replaces_literal() {
    let mut options = UserOptions { parametric: true, ..UserOptions::default() };
    options.linked_parameters.insert("depth".into(), "box_thickness".into());

    let mut store = InMemoryParameterStore::new().with_parameter("box_thickness", "3.2 mm", LengthUnit::Mm);
    TabGenerator::new().generate(&options, &front_face(), &mut store).unwrap();

    assert_eq!(store.get("side_xz1_depth").unwrap().expression, "abs(box_thickness)");
    assert_eq!(
        store.get("side_xz1_adjusted_depth").unwrap().expression,
        "side_xz1_depth - side_xz1_kerf / 2"
    );
}

#[test]
fn test_options_are_checked_against_face() {
    let generator = TabGenerator::new();
    let single = measure(&bodies(), &FaceSelection::single(5, 2)).unwrap();

    assert!(matches!(
        generator.preview(&UserOptions::default(), &single),
        Err(TabGenError::InvalidOptions { .. })
    ));

    let options = UserOptions { placement: FingerPlacement::SingleEdge, ..UserOptions::default() };
    let layout = generator.preview(&options, &single).unwrap();
    assert_eq!(layout.distance_two(), 0.0);

    let options = UserOptions { finger_type: FingerType::ConstantCount, ..UserOptions::default() };
    assert!(matches!(
        generator.preview(&options, &front_face()),
        Err(TabGenError::InvalidOptions { .. })
    ));

    let options = UserOptions { fixed_count: Some(4), ..options };
    assert!(matches!(
        generator.preview(&options, &front_face()),
        Err(TabGenError::Layout(LayoutError::InvalidFingerCount { count: 4 }))
    ));
}

#[test]
fn test_options_from_json() {
    let options = UserOptions::from_json(
        r#"{ "finger_type": "constant_count", "fixed_count": 5, "placement": "single_edge", "margin": 10 }"#,
    )
    .unwrap();

    let layout = TabGenerator::new().preview(&options, &front_face()).unwrap();
    assert_eq!(layout.fingers(), 5);
    assert!(approx_eq(layout.finger_width(), 56.0));
    assert!(approx_eq(layout.offset(), 10.0));

    assert!(matches!(
        UserOptions::from_json(r#"{ "finger_type": "diagonal" }"#),
        Err(TabGenError::Config(_))
    ));
}

#[test]
fn test_place_along_face() {
    let bodies = bodies();
    let generator = TabGenerator::new();
    let joint = generator
        .generate(&UserOptions::default(), &front_face(), &mut InMemoryParameterStore::new())
        .unwrap();

    let axis = Axis::along_face(bodies.face(3).unwrap());
    let mut plans: Vec<NotchPlan> = Vec::new();
    let plan = generator.place(&joint, Some(axis), &mut plans).unwrap();

    assert_eq!(plans, vec![plan.clone()]);
    assert_eq!(plan.count, 18);
    assert_eq!(plan.origins.len(), 18);
    assert!(plan.origins[0].abs_diff_eq(axis.point_at(10.0), 1e-9));
    assert!(plan.origins[17].abs_diff_eq(axis.point_at(282.0), 1e-9));
}

#[test]
fn test_place_without_axis() {
    let generator = TabGenerator::new();
    let joint = generator
        .generate(&UserOptions::default(), &front_face(), &mut InMemoryParameterStore::new())
        .unwrap();

    let mut plans: Vec<NotchPlan> = Vec::new();
    assert!(matches!(
        generator.place(&joint, None, &mut plans),
        Err(TabGenError::Placement(PlacementError::PrimaryAxisMissing))
    ));
    assert!(plans.is_empty());
}
