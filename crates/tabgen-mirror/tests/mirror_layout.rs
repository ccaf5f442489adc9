//! Mirroring computed layouts into a parameter store.

use indexmap::IndexMap;
use tabgen_core::{approx_eq, Alias, Expression, LayoutInputs, ParamMap};
use tabgen_layout::LayoutEngine;
use tabgen_mirror::{ExpressionMirror, InMemoryParameterStore, MaterializeOutcome};
use tabgen_parser::parse_expression;
use tabgen_resolver::resolve_all;

fn sample_inputs() -> LayoutInputs {
    LayoutInputs {
        default_width: 10.0,
        ..LayoutInputs::for_face(100.0)
    }
}

#[test]
fn test_generated_names_and_formulas() {
    let layout = LayoutEngine::new().compute(&sample_inputs()).unwrap();
    let mirror = ExpressionMirror::new(Alias::clean("Lid X1"));
    let rendered = mirror
        .mirror(&layout)
        .unwrap()
        .iter()
        .map(|p| format!("{} = {}", p.name, p.expression))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r###"
lid_x1_default_width = abs(10 mm)
lid_x1_margin = abs(0 mm)
lid_x1_face_length = abs(100 mm)
lid_x1_edge_margin = abs(0 mm)
lid_x1_depth = abs(3.2 mm)
lid_x1_kerf = abs(0 mm)
lid_x1_distance = abs(0 mm)
lid_x1_interior_walls = abs(0)
lid_x1_adjusted_length = lid_x1_face_length - lid_x1_margin * 2
lid_x1_adjusted_depth = lid_x1_depth - lid_x1_kerf / 2
lid_x1_fingers = max(3; ceil(floor(lid_x1_adjusted_length / lid_x1_default_width) / 2) * 2 - 1)
lid_x1_finger_width = lid_x1_adjusted_length / lid_x1_fingers
lid_x1_notch_width = lid_x1_finger_width - lid_x1_kerf
lid_x1_finger_distance = lid_x1_finger_width * lid_x1_fingers
lid_x1_notches = floor(lid_x1_fingers / 2)
lid_x1_pattern_distance = lid_x1_finger_distance - lid_x1_finger_width * 3
lid_x1_offset = lid_x1_margin
lid_x1_corner_width = lid_x1_offset
lid_x1_start = lid_x1_offset + lid_x1_finger_width + lid_x1_kerf / 2
lid_x1_distance_two = max(0; lid_x1_distance - lid_x1_depth - lid_x1_edge_margin * 2)
"###);
}

#[test]
fn test_mirrored_parameters_reproduce_values() {
    let inputs = LayoutInputs {
        margin: 4.0,
        kerf: 0.2,
        secondary_distance: 60.0,
        interior_wall_count: 1,
        ..LayoutInputs::for_face(243.0)
    };
    let layout = LayoutEngine::new().compute(&inputs).unwrap();
    let mirror = ExpressionMirror::new(Alias::clean("Box Side XY2"));

    let definitions: IndexMap<String, Expression> = mirror
        .mirror(&layout)
        .unwrap()
        .into_iter()
        .map(|p| (p.name, parse_expression(&p.expression).unwrap()))
        .collect();
    let bindings = resolve_all(&definitions, &ParamMap::new()).unwrap();

    for property in &layout {
        let value = bindings.get(&mirror.parameter_name(&property.name)).unwrap();
        assert!(approx_eq(value, property.value), "{}: {} vs {}", property.name, value, property.value);
    }
}

#[test]
fn test_rerun_on_same_face_is_idempotent() {
    let engine = LayoutEngine::new();
    let mirror = ExpressionMirror::new(Alias::clean("lid x1"));
    let mut store = InMemoryParameterStore::new();

    let first = mirror
        .materialize(&engine.compute(&sample_inputs()).unwrap(), &mut store)
        .unwrap();
    let created = store.len();
    assert_eq!(first.count(MaterializeOutcome::Created), created);

    let second = mirror
        .materialize(&engine.compute(&sample_inputs()).unwrap(), &mut store)
        .unwrap();
    assert_eq!(store.len(), created);
    assert_eq!(second.count(MaterializeOutcome::Reused), created);
    assert!(!second.has_collisions());
}

#[test]
fn test_changed_face_reports_collisions() {
    let engine = LayoutEngine::new();
    let mirror = ExpressionMirror::new(Alias::clean("lid x1"));
    let mut store = InMemoryParameterStore::new();

    mirror
        .materialize(&engine.compute(&sample_inputs()).unwrap(), &mut store)
        .unwrap();
    let longer = LayoutInputs { face_length: 140.0, ..sample_inputs() };
    let report = mirror
        .materialize(&engine.compute(&longer).unwrap(), &mut store)
        .unwrap();

    // Only the face length leaf differs; derived formulas are unchanged
    assert_eq!(report.count(MaterializeOutcome::Found), 1);
    assert_eq!(report.get("face_length").unwrap().expression, "abs(100 mm)");
    assert_eq!(report.warnings().len(), 1);
}
