//! Golden tests for place-name resolution.

use grah_geo::{DEFAULT_POINT, GAZETTEER, GeoPoint, MatchKind, resolve, resolve_place};

#[test]
fn delhi_spellings_resolve_identically() {
    let expected = GeoPoint::new(28.6139, 77.209);
    assert_eq!(resolve("Delhi"), expected);
    assert_eq!(resolve("delhi"), expected);
    assert_eq!(resolve("  DELHI "), expected);
}

#[test]
fn unknown_place_uses_default() {
    assert_eq!(resolve("Nowhereistan"), GeoPoint::new(20.5937, 78.9629));
    assert_eq!(resolve("Atlantis"), DEFAULT_POINT);
}

#[test]
fn every_key_resolves_exactly_to_itself() {
    for e in GAZETTEER {
        let r = resolve_place(&e.key.to_uppercase());
        assert_eq!(r.kind, MatchKind::Exact, "{}", e.key);
        assert_eq!(r.point, e.point(), "{}", e.key);
        assert_eq!(r.timezone, Some(e.timezone));
    }
}

#[test]
fn southern_and_western_hemispheres() {
    let sydney = resolve("Sydney");
    assert!(sydney.latitude < 0.0 && sydney.longitude > 0.0);
    let lima = resolve("lima");
    assert!(lima.latitude < 0.0 && lima.longitude < 0.0);
}

#[test]
fn qualified_names_match_partially() {
    assert_eq!(
        resolve_place("Varanasi, UP").kind,
        MatchKind::Partial { key: "varanasi" }
    );
    assert_eq!(
        resolve_place("New York City").kind,
        MatchKind::Partial { key: "new york" }
    );
}

#[test]
fn resolution_is_deterministic() {
    for place in ["kolkata", "navi mumbai west", "somewhere else", "tokyo"] {
        assert_eq!(resolve_place(place), resolve_place(place));
    }
}
