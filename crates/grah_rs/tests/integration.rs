//! End-to-end tests from user strings to finished charts.

use grah_rs::*;

fn engine() -> ChartEngine<FixedClock> {
    let now = BirthMoment::from_ymd_hm(2024, 6, 1, 0, 0).unwrap().datetime();
    ChartEngine::with_clock(ChartConfig::default(), FixedClock(now))
}

#[test]
fn place_name_is_resolved() {
    let req = ChartRequest::new("2000-01-01", "12:00", "  DELHI ");
    let chart = birth_chart_with(&engine(), &req);
    assert!(chart.is_fully_computed());
    assert_eq!(chart.location, GeoPoint::new(28.6139, 77.209));
    assert_eq!(chart.place_label, "  DELHI ");
    assert_eq!(chart.yogas, vec![Yoga::Raja]);
}

#[test]
fn same_chart_from_name_and_explicit_coordinates() {
    let by_name = birth_chart_with(&engine(), &ChartRequest::new("2000-01-01", "12:00", "delhi"));
    let by_coords = birth_chart_with(
        &engine(),
        &ChartRequest::new("2000-01-01", "12:00", "delhi")
            .with_coordinates(Some(28.6139), Some(77.209)),
    );
    assert_eq!(by_name, by_coords);
}

#[test]
fn twelve_hour_time_matches_twenty_four_hour() {
    let a = birth_chart_with(&engine(), &ChartRequest::new("1990-05-15", "02:30 PM", "Mumbai"));
    let b = birth_chart_with(&engine(), &ChartRequest::new("1990-05-15", "14:30", "Mumbai"));
    assert_eq!(a.ascendant, b.ascendant);
    assert_eq!(a.planets, b.planets);
}

#[test]
fn unparseable_date_gives_fallback_chart() {
    let req = ChartRequest::new("15/05/1990", "14:30", "Mumbai");
    let chart = birth_chart_with(&engine(), &req);
    assert!(chart.is_fallback());
    assert_eq!(chart.ayanamsa, 24.0);
    assert_eq!(chart.moment.datetime(), engine().clock().now());

    assert!(matches!(
        try_birth_chart_with(&engine(), &req),
        Err(GrahError::Time(_))
    ));
}

#[test]
fn unknown_place_uses_default_point() {
    let req = ChartRequest::new("2000-01-01", "12:00", "Nowhereistan");
    let chart = birth_chart_with(&engine(), &req);
    assert_eq!(chart.location, GeoPoint::new(20.5937, 78.9629));
    assert!(chart.is_fully_computed());
}

#[test]
fn request_from_json() {
    let req: ChartRequest = serde_json::from_str(
        r#"{"date": "2000-01-01", "time": "12:00", "place": "Atlantis", "latitude": 0.0, "longitude": 0.0}"#,
    )
    .unwrap();
    assert_eq!(req.point(), GeoPoint::new(0.0, 0.0));
}

#[test]
fn hindi_summary_from_request() {
    let req = ChartRequest::new("2000-01-01", "12:00", "Delhi");
    let chart = birth_chart_with(&engine(), &req);
    let text = render_summary(&chart, Some("राम"), Language::Hindi);
    assert!(text.starts_with("राम की जन्म कुंडली:\n"));
    assert!(text.contains("जन्म: 2000-01-01, 12:00, Delhi\n"));
    assert!(text.contains("निर्देशांक: 28.6139°N, 77.2090°E\n"));
}

#[test]
fn palm_pass_through() {
    let input = PalmInput {
        width: 0.0,
        height: 0.0,
        segments: Vec::new(),
        keypoints: HandKeypoints::default(),
    };
    assert_eq!(palm_analysis(&input).source, PalmSource::Fallback);
    assert!(matches!(try_palm_analysis(&input), Err(GrahError::Palm(_))));
}
