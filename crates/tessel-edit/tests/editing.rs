//! Integration test: selection edits through a session.
//!
//! Covers fill connectivity on two uniform regions, the unconditional
//! start write, and the events a presentation layer receives.

use std::collections::BTreeSet;

use tessel_core::{Coord, GridShape, Rect};
use tessel_edit::{
    EditError, EditMode, EditorConfig, EditorEvent, EditorSession, FillMatch, Selection,
};
use tessel_test_utils::{grass, owned, partitioned, scenario, water, RecordingListener};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

/// 6×4 Square4 map: columns 0..2 grass, 2..6 water.
fn session(config: EditorConfig) -> EditorSession {
    EditorSession::new(scenario(partitioned(GridShape::Square4, 6, 4, 2)), config).unwrap()
}

fn region(x0: i32, x1: i32) -> BTreeSet<Coord> {
    (0..4).flat_map(|y| (x0..x1).map(move |x| c(x, y))).collect()
}

// ── Fill ─────────────────────────────────────────────────────────

#[test]
fn fill_covers_exactly_the_connected_region() {
    let mut s = session(EditorConfig::default());
    s.apply_selection(Some(c(0, 0))).unwrap();
    s.set_mode(EditMode::Fill);
    let Selection::Edited { changed } = s.apply_selection(Some(c(1, 2))).unwrap() else {
        panic!("fill did not edit");
    };
    assert_eq!(changed[0], c(1, 2));
    let changed: BTreeSet<Coord> = changed.into_iter().collect();
    assert_eq!(changed, region(0, 2));
    let world = s.world().unwrap();
    assert_eq!(world.content(c(2, 0)), Some(&water()));
}

#[test]
fn fill_always_overwrites_start() {
    let mut s = session(EditorConfig::default());
    s.apply_selection(Some(c(0, 0))).unwrap();
    s.set_mode(EditMode::Fill);
    // Deep inside the water region: no grass neighbour to expand into.
    let sel = s.apply_selection(Some(c(5, 1))).unwrap();
    assert_eq!(sel, Selection::Edited { changed: vec![c(5, 1)] });
    assert_eq!(s.world().unwrap().content(c(5, 1)), Some(&grass()));
    assert_eq!(s.world().unwrap().content(c(4, 1)), Some(&water()));
}

#[test]
fn fill_on_region_edge_pulls_in_adjacent_matches() {
    let mut s = session(EditorConfig::default());
    s.apply_selection(Some(c(0, 0))).unwrap();
    s.set_mode(EditMode::Fill);
    let Selection::Edited { changed } = s.apply_selection(Some(c(2, 0))).unwrap() else {
        panic!("fill did not edit");
    };
    let changed: BTreeSet<Coord> = changed.into_iter().collect();
    let mut expected = region(0, 2);
    expected.insert(c(2, 0));
    assert_eq!(changed, expected);
}

#[test]
fn start_content_fill_recolours_region() {
    let config = EditorConfig {
        fill_match: FillMatch::StartContent,
        ..EditorConfig::default()
    };
    let mut s = session(config);
    s.apply_selection(Some(c(4, 0))).unwrap();
    s.set_mode(EditMode::Fill);
    s.apply_selection(Some(c(0, 3))).unwrap();
    let world = s.world().unwrap();
    assert!(world.sites().iter().all(|site| site.content() == &water()));

    let section = s.section().unwrap();
    assert_eq!(section.areas.len(), 1);
    assert_eq!(section.areas[0].bounds, vec![Rect::new(0, 0, 6, 4)]);
}

#[test]
fn fill_without_template_rejected() {
    let mut s = session(EditorConfig::default());
    s.set_mode(EditMode::Fill);
    assert_eq!(
        s.apply_selection(Some(c(0, 0))),
        Err(EditError::NoTemplate {
            mode: EditMode::Fill
        })
    );
    assert!(!s.engine().dirty().content);
}

// ── Selection ────────────────────────────────────────────────────

#[test]
fn invalid_location_clears_template() {
    let mut s = session(EditorConfig::default());
    s.apply_selection(Some(c(1, 1))).unwrap();
    assert_eq!(s.available_modes().len(), 3);
    assert_eq!(s.apply_selection(Some(c(6, 0))).unwrap(), Selection::Invalidated);
    assert!(s.template().is_none());
    assert_eq!(s.current(), None);
    assert_eq!(s.available_modes().as_slice(), &[EditMode::Modify]);
    assert_eq!(s.apply_selection(None).unwrap(), Selection::Invalidated);
}

#[test]
fn replace_relocates_template() {
    let mut s = session(EditorConfig::default());
    s.set_owner(c(0, 0), "Red".into()).unwrap();
    s.apply_selection(Some(c(0, 0))).unwrap();
    s.set_mode(EditMode::Replace);
    s.apply_selection(Some(c(3, 3))).unwrap();
    let template = s.template().unwrap();
    assert_eq!(template.bounds, vec![Rect::cell(c(3, 3))]);
    assert_eq!(s.world().unwrap().content(c(3, 3)), Some(&owned("Red")));
}

// ── Events ───────────────────────────────────────────────────────

#[test]
fn listener_sees_rebuild_selection_and_edits() {
    let mut s = session(EditorConfig::default());
    let listener = RecordingListener::new();
    let log = listener.log();
    s.set_listener(Box::new(listener));

    s.apply_selection(Some(c(0, 0))).unwrap();
    s.set_mode(EditMode::Replace);
    s.apply_selection(Some(c(4, 2))).unwrap();

    assert_eq!(
        log.drain(),
        vec![
            EditorEvent::SchemaInvalidated,
            EditorEvent::SelectionChanged {
                location: Some(c(0, 0))
            },
            EditorEvent::ContentChanged {
                coords: vec![c(4, 2)]
            },
            EditorEvent::SelectionChanged {
                location: Some(c(4, 2))
            },
        ]
    );

    s.section().unwrap();
    assert!(log.events().is_empty());
}

#[test]
fn fill_reports_each_coordinate_once() {
    let mut s = session(EditorConfig::default());
    let listener = RecordingListener::new();
    let log = listener.log();
    s.set_listener(Box::new(listener));
    s.apply_selection(Some(c(0, 0))).unwrap();
    s.set_mode(EditMode::Fill);
    s.apply_selection(Some(c(0, 0))).unwrap();

    let coords = log.changed_coords();
    let unique: BTreeSet<Coord> = coords.iter().copied().collect();
    assert_eq!(coords.len(), unique.len());
    assert_eq!(unique, region(0, 2));
}
