use super::*;
use crate::catalog::entities::EntityCatalog;
use crate::context::resolver::{PlayContextResolver, SelectedEvent};
use crate::fixtures::{GAME, PLAY, play, roster, row, tagged, three_sample_rows};
use crate::foundation::core::{BALL_DISPLAY_ID, EntityId};
use crate::selection::Selection;
use crate::source::tables::TrackingRow;

fn setup(rows: Vec<TrackingRow>) -> (EventContext, Vec<TrackedSample>) {
    let (samples, _) = EntityCatalog::from_roster(&roster()).enrich(rows);
    let event =
        SelectedEvent::select(Selection::new(GAME, PLAY), &[play(None)], samples).unwrap();
    let ctx = PlayContextResolver::resolve(&event).unwrap();
    (ctx, event.samples)
}

#[test]
fn one_scene_per_sample_in_ascending_order() {
    let mut rows = three_sample_rows();
    rows.reverse();
    let (ctx, samples) = setup(rows);
    let tables = LookupTables::default();
    let synth = FrameSynthesizer::new(&ctx, &samples, &tables);

    let out: Vec<_> = synth.iter().collect();
    let ids: Vec<_> = out.iter().map(|o| o.scene.sample.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(synth.len(), 3);
}

#[test]
fn every_scene_has_field_layers_then_one_layer_per_group() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let synth = FrameSynthesizer::new(&ctx, &samples, &tables);

    for out in synth.iter() {
        let scene = out.scene;
        assert_eq!(scene.layers.len(), 4 + tables.groups.len());
        assert!(matches!(scene.layers[0], DrawLayer::YardNumbers(_)));
        assert!(matches!(scene.layers[1], DrawLayer::YardNumbers(_)));
        match (&scene.layers[2], &scene.layers[3]) {
            (DrawLayer::Marker(los), DrawLayer::Marker(fd)) => {
                assert_eq!(los.kind, MarkerKind::Scrimmage);
                assert_eq!(los.x, 45.0);
                assert_eq!(fd.kind, MarkerKind::FirstDown);
                assert_eq!(fd.x, 52.0);
                assert_eq!(fd.y_to, FIELD_WIDTH_YDS);
            }
            other => panic!("unexpected marker layers: {other:?}"),
        }
        let names: Vec<_> = scene.group_layers().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Backs & Receivers", "Offensive Line", "Defense", "Ball"]
        );
        // No offensive linemen in the fixture: the layer is present but empty.
        assert!(scene.group("Offensive Line").unwrap().points.is_empty());
        assert_eq!(scene.entity_count(), 3);
    }
}

#[test]
fn yard_numbers_mirror_around_midfield() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let scene = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize(TimeSampleId(1))
        .unwrap()
        .scene;
    let DrawLayer::YardNumbers(bottom) = &scene.layers[0] else {
        panic!("expected yard numbers");
    };
    let texts: Vec<_> = bottom.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["10", "20", "30", "40", "50", "40", "30", "20", "10"]
    );
    assert_eq!(bottom.labels[0].position, Point::new(20.0, 5.0));
    assert_eq!(bottom.labels[8].position.x, 100.0);
    let DrawLayer::YardNumbers(top) = &scene.layers[1] else {
        panic!("expected yard numbers");
    };
    assert_eq!(top.labels[0].position.y, FIELD_WIDTH_YDS - 5.0);
}

#[test]
fn ball_carries_fixed_identity_and_color() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let synth = FrameSynthesizer::new(&ctx, &samples, &tables);
    for out in synth.iter() {
        let ball = out.scene.group("Ball").unwrap();
        assert_eq!(ball.points.len(), 1);
        assert_eq!(ball.points[0].entity, EntityKind::Ball);
        assert_eq!(ball.points[0].hover.id, BALL_DISPLAY_ID);
        assert_eq!(ball.points[0].color, tables.ball_color);
    }
}

#[test]
fn hover_and_colors_come_from_each_entity() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let scene = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize(TimeSampleId(2))
        .unwrap()
        .scene;

    let backs = scene.group("Backs & Receivers").unwrap();
    assert_eq!(backs.points[0].entity, EntityKind::Player(EntityId(1)));
    assert_eq!(backs.points[0].color, "#D50A0A");
    assert_eq!(
        backs.points[0].hover.html(),
        "id: 1, pos: QB<br>name: Alpha Passer<br>spd: 1.5 yd/sec<br>"
    );

    let defense = scene.group("Defense").unwrap();
    assert_eq!(defense.points[0].color, "#003594");
    assert_eq!(defense.points[0].position, Point::new(48.0, 20.0));
}

#[test]
fn unknown_team_uses_fallback_color() {
    let (ctx, samples) = setup(vec![
        row(Some(1), "XFL", 1, 10.0, 10.0),
        row(None, "football", 1, 10.0, 10.0),
    ]);
    let tables = LookupTables::default();
    let scene = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize(TimeSampleId(1))
        .unwrap()
        .scene;
    assert_eq!(
        scene.group("Backs & Receivers").unwrap().points[0].color,
        tables.fallback_color
    );
}

#[test]
fn missing_ball_yields_empty_ball_layer() {
    let (ctx, samples) = setup(vec![row(Some(1), "TB", 1, 10.0, 10.0)]);
    let tables = LookupTables::default();
    let scene = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize(TimeSampleId(1))
        .unwrap()
        .scene;
    assert!(scene.group("Ball").unwrap().points.is_empty());
    assert_eq!(scene.entity_count(), 1);
}

#[test]
fn unmapped_roles_are_left_out() {
    let mut r = roster();
    r[1].position = "K".to_string();
    let (samples, _) = EntityCatalog::from_roster(&r).enrich(three_sample_rows());
    let (ctx, _) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let scene = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize(TimeSampleId(1))
        .unwrap()
        .scene;
    assert_eq!(scene.entity_count(), 2);
    assert!(scene.group("Defense").unwrap().points.is_empty());
}

#[test]
fn duplicate_rows_merge_with_last_state_winning() {
    let (ctx, samples) = setup(vec![
        row(Some(1), "TB", 1, 10.0, 10.0),
        row(Some(2), "DAL", 1, 20.0, 20.0),
        row(Some(1), "TB", 1, 11.0, 12.0),
    ]);
    let tables = LookupTables::default();
    let scene = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize(TimeSampleId(1))
        .unwrap()
        .scene;
    assert_eq!(scene.entity_count(), 2);
    let qb = &scene.group("Backs & Receivers").unwrap().points[0];
    assert_eq!(qb.position, Point::new(11.0, 12.0));
}

#[test]
fn line_set_candidate_uses_dominant_tag() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let flags: Vec<_> = FrameSynthesizer::new(&ctx, &samples, &tables)
        .iter()
        .map(|o| o.line_set)
        .collect();
    assert_eq!(flags, vec![false, true, false]);

    // One stray tag is outvoted by the rest of the sample.
    let (ctx, samples) = setup(vec![
        tagged(row(Some(1), "TB", 1, 0.0, 0.0), "line_set"),
        tagged(row(Some(2), "DAL", 1, 0.0, 0.0), "ball_snap"),
        tagged(row(None, "football", 1, 0.0, 0.0), "ball_snap"),
    ]);
    let out = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize(TimeSampleId(1))
        .unwrap();
    assert!(!out.line_set);
}

#[test]
fn line_set_tag_matching_is_lenient() {
    assert!(is_line_set("line_set"));
    assert!(is_line_set("Line Set"));
    assert!(is_line_set(" LINE-SET "));
    assert!(!is_line_set("ball_snap"));
}

#[test]
fn parallel_matches_sequential() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let synth = FrameSynthesizer::new(&ctx, &samples, &tables);
    let seq = synth.synthesize_all(&SynthOpts::default()).unwrap();
    let par = synth
        .synthesize_all(&SynthOpts {
            parallel: true,
            threads: Some(2),
        })
        .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let err = FrameSynthesizer::new(&ctx, &samples, &tables)
        .synthesize_all(&SynthOpts {
            parallel: true,
            threads: Some(0),
        })
        .unwrap_err();
    assert!(matches!(err, SnapreelError::Validation(_)));
}

#[test]
fn iterator_restarts() {
    let (ctx, samples) = setup(three_sample_rows());
    let tables = LookupTables::default();
    let synth = FrameSynthesizer::new(&ctx, &samples, &tables);
    assert_eq!(synth.iter().len(), 3);
    let first: Vec<_> = synth.iter().collect();
    let second: Vec<_> = synth.iter().collect();
    assert_eq!(first, second);
}
