use super::*;

#[test]
fn ball_display_id_is_fixed() {
    assert_eq!(EntityKind::Ball.display_id(), BALL_DISPLAY_ID);
    assert_eq!(EntityKind::Player(EntityId(52_415)).display_id(), 52_415);
    assert!(EntityKind::Ball.is_ball());
    assert!(!EntityKind::Player(EntityId(1)).is_ball());
}

#[test]
fn play_direction_parse_is_case_insensitive() {
    assert_eq!(PlayDirection::parse("right"), Some(PlayDirection::Right));
    assert_eq!(PlayDirection::parse(" LEFT "), Some(PlayDirection::Left));
    assert_eq!(PlayDirection::parse("up"), None);
    assert_eq!(PlayDirection::Right.sign(), 1.0);
    assert_eq!(PlayDirection::Left.sign(), -1.0);
}

#[test]
fn ids_serialize_transparently() {
    let s = serde_json::to_string(&TimeSampleId(7)).unwrap();
    assert_eq!(s, "7");
    let kind = serde_json::to_string(&EntityKind::Ball).unwrap();
    assert_eq!(kind, "\"ball\"");
}
