use grah_palm::{PalmAnalysis, PalmClassifier, PalmInput};
use grah_time::{BirthMoment, Clock};
use grah_vedic_base::{BirthChart, BirthInput, ChartEngine, Language, render_summary};
use tracing::warn;

use crate::error::GrahError;
use crate::request::ChartRequest;

/// Parse and resolve a request into engine input.
pub fn birth_input(req: &ChartRequest) -> Result<BirthInput, GrahError> {
    let moment = BirthMoment::parse(&req.date, &req.time)?;
    Ok(BirthInput::new(
        moment,
        req.time.as_str(),
        req.place.as_str(),
        req.point(),
    ))
}

/// Generate a chart, failing on an unparseable date or time.
pub fn try_birth_chart_with<C: Clock>(
    engine: &ChartEngine<C>,
    req: &ChartRequest,
) -> Result<BirthChart, GrahError> {
    Ok(engine.generate(&birth_input(req)?))
}

/// Generate a chart. Never fails.
///
/// An unparseable date or time yields the fixed fallback chart, stamped
/// with the engine clock's current time.
pub fn birth_chart_with<C: Clock>(engine: &ChartEngine<C>, req: &ChartRequest) -> BirthChart {
    match birth_input(req) {
        Ok(input) => engine.generate(&input),
        Err(e) => {
            warn!(error = %e, date = %req.date, time = %req.time, "unparseable birth moment");
            let input = BirthInput::new(
                BirthMoment::new(engine.clock().now()),
                req.time.as_str(),
                req.place.as_str(),
                req.point(),
            );
            BirthChart::fallback(&input)
        }
    }
}

/// [`birth_chart_with`] using the default engine and system clock.
pub fn birth_chart(req: &ChartRequest) -> BirthChart {
    birth_chart_with(&ChartEngine::default(), req)
}

/// [`try_birth_chart_with`] using the default engine and system clock.
pub fn try_birth_chart(req: &ChartRequest) -> Result<BirthChart, GrahError> {
    try_birth_chart_with(&ChartEngine::default(), req)
}

/// Chart summary text for a request.
pub fn chart_summary(req: &ChartRequest, name: Option<&str>, language: Language) -> String {
    render_summary(&birth_chart(req), name, language)
}

/// Palm analysis with default thresholds. Never fails.
pub fn palm_analysis(input: &PalmInput) -> PalmAnalysis {
    PalmClassifier::default().analyze_input(input)
}

/// Palm analysis that reports unusable input instead of falling back.
pub fn try_palm_analysis(input: &PalmInput) -> Result<PalmAnalysis, GrahError> {
    Ok(PalmClassifier::default().try_analyze(
        &input.segments,
        &input.keypoints,
        input.width,
        input.height,
    )?)
}
