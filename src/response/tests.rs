use super::metric::METRIC_SYNONYMS;
use super::{CanonicalMetric, ResponseEnvelope, ResponseSynthesizer, SatStatus};
use crate::config::SkillConfig;
use crate::geo_lookup::GeoFeature;
use crate::orbit_state::OrbitalState;
use crate::test_fixtures::{ISS_TLE_LINE1, ISS_TLE_LINE2, tle_epoch};
use chrono::TimeDelta;
use strum::IntoEnumIterator;

fn status_at(offset_min: i64, feature: GeoFeature) -> SatStatus {
    let instant = tle_epoch() + TimeDelta::minutes(offset_min);
    let state = OrbitalState::compute(ISS_TLE_LINE1, ISS_TLE_LINE2, instant).unwrap();
    SatStatus::new(state, feature)
}

fn synthesizer() -> ResponseSynthesizer { ResponseSynthesizer::new(&SkillConfig::default()) }

#[test]
fn test_resolve_synonym_table() {
    let expected = [
        ("location", CanonicalMetric::FullStatus),
        ("status update", CanonicalMetric::FullStatus),
        ("latitude", CanonicalMetric::Latitude),
        ("longitude", CanonicalMetric::Longitude),
        ("elevation", CanonicalMetric::Altitude),
        ("altitude", CanonicalMetric::Altitude),
        ("speed", CanonicalMetric::Speed),
        ("velocity", CanonicalMetric::VelocityVector),
        ("dimensions", CanonicalMetric::Size),
        ("weight", CanonicalMetric::Weight),
        ("mass", CanonicalMetric::Mass),
        ("volume", CanonicalMetric::Volume),
        ("orbital period", CanonicalMetric::OrbitalPeriod),
        ("period", CanonicalMetric::OrbitalPeriod),
    ];
    for (raw, metric) in expected {
        assert_eq!(CanonicalMetric::resolve(Some(raw)), metric, "{raw}");
    }
    for (raw, metric) in METRIC_SYNONYMS {
        assert_eq!(CanonicalMetric::resolve(Some(raw)), metric, "{raw}");
    }
}

#[test]
fn test_resolve_falls_back_to_full_status() {
    assert_eq!(CanonicalMetric::resolve(None), CanonicalMetric::FullStatus);
    assert_eq!(CanonicalMetric::resolve(Some("")), CanonicalMetric::FullStatus);
    assert_eq!(CanonicalMetric::resolve(Some("Speed")), CanonicalMetric::FullStatus);
    assert_eq!(CanonicalMetric::resolve(Some("temperature")), CanonicalMetric::FullStatus);
    assert_eq!(CanonicalMetric::resolve(Some(" speed")), CanonicalMetric::FullStatus);
}

#[test]
fn test_every_metric_has_a_synonym() {
    for metric in CanonicalMetric::iter() {
        assert!(
            METRIC_SYNONYMS.iter().any(|(_, m)| *m == metric),
            "{metric} cannot be requested"
        );
    }
}

#[test]
fn test_static_metrics_ignore_orbital_state() {
    let synth = synthesizer();
    let early = status_at(0, GeoFeature::unknown());
    let late = status_at(70, GeoFeature::new("INDIAN OCEAN", "", "", ""));
    for metric in CanonicalMetric::iter().filter(|m| m.is_static()) {
        let a = synth.build(metric, &early);
        let b = synth.build(metric, &late);
        assert_eq!(a, b, "{metric}");
        assert!(a.should_end_session());
        assert_eq!(a.reprompt(), " ");
    }
}

#[test]
fn test_static_texts_verbatim() {
    let synth = synthesizer();
    let status = status_at(0, GeoFeature::unknown());
    let period = synth.build(CanonicalMetric::OrbitalPeriod, &status);
    assert_eq!(period.title(), "ISS Status: Orbital Period");
    assert_eq!(
        period.speech(),
        "ISS orbits the Earth every 92.69 minutes. That's approximately 15.55 orbits around the Earth per day."
    );
    assert_eq!(
        synth.build(CanonicalMetric::Size, &status).speech(),
        "ISS is roughly the size of an American football field."
    );
    assert_eq!(
        synth.build(CanonicalMetric::Mass, &status).speech(),
        "The mass of ISS is approximately 419,455 kilograms, or 924,740 pounds."
    );
    assert_eq!(
        synth.build(CanonicalMetric::Volume, &status).speech(),
        "The pressurised volume of ISS is approximately 916 meters cubed, or 32,300 cubic feet."
    );
    assert!(synth.build(CanonicalMetric::Weight, &status).speech().starts_with(
        "Without gravity at play, ISS does not have weight."
    ));
}

#[test]
fn test_full_status_over_pacific() {
    let status = status_at(0, GeoFeature::new("PACIFIC OCEAN", " ", " ", " "));
    let response = synthesizer().build(CanonicalMetric::FullStatus, &status);
    let speech = response.speech();
    assert_eq!(response.title(), "ISS Status");
    assert!(speech.starts_with("At a latitude of "));
    assert!(speech.contains("ISS is currently over the Pacific Ocean, traveling at "));
    assert!(speech.contains(" kilometers per hour at an altitude of "));
    assert!(speech.contains(" miles per hour at an altitude of "));
    assert!(speech.ends_with(" miles."));
    assert!(response.should_end_session());
}

#[test]
fn test_full_status_without_geography() {
    let status = status_at(0, GeoFeature::unknown());
    let speech = synthesizer().build(CanonicalMetric::FullStatus, &status).speech().to_string();
    assert!(speech.contains("ISS is currently traveling at "));
    assert!(!speech.contains(" over "));
}

#[test]
fn test_full_status_land_clauses() {
    let status = status_at(0, GeoFeature::new(" ", "Canada", "Ontario", "Toronto"));
    let speech = synthesizer().build(CanonicalMetric::FullStatus, &status).speech().to_string();
    assert!(speech.contains("ISS is currently over Toronto, Ontario, Canada, traveling at "));

    let status = status_at(0, GeoFeature::new(" ", "Singapore", "Singapore", " "));
    let speech = synthesizer().build(CanonicalMetric::FullStatus, &status).speech().to_string();
    assert!(speech.contains("ISS is currently over Singapore, traveling at "));
}

#[test]
fn test_scalar_builders_match_state() {
    let synth = synthesizer();
    let status = status_at(15, GeoFeature::unknown());
    let state = status.state();

    let latitude = synth.build(CanonicalMetric::Latitude, &status);
    assert_eq!(
        latitude.speech(),
        format!("ISS is currently at a latitude of {}.", crate::common::round_whole(state.latitude_deg()))
    );
    let speed = synth.build(CanonicalMetric::Speed, &status);
    assert!(speed.speech().contains(&format!(
        "{} kilometers per hour",
        crate::common::format_number(state.speed())
    )));
    assert!(speed.speech().contains(" miles per hour."));
    let altitude = synth.build(CanonicalMetric::Altitude, &status);
    assert_eq!(altitude.title(), "ISS Status: Altitude");
    assert!(altitude.speech().ends_with(" miles."));
}

#[test]
fn test_velocity_components_three_decimals() {
    let status = status_at(15, GeoFeature::unknown());
    let speech = synthesizer().build(CanonicalMetric::VelocityVector, &status).speech().to_string();
    let x = crate::common::round_half_up(status.state().velocity_eci().x(), 3);
    assert!(speech.contains(&format!("an x velocity of {x} kilometers per second")));
    let rendered = speech
        .split("x velocity of ")
        .nth(1)
        .and_then(|rest| rest.split(' ').next())
        .unwrap();
    let decimals = rendered.split('.').nth(1).map_or(0, str::len);
    assert!(decimals <= 3, "{rendered}");
}

#[test]
fn test_welcome_and_help_keep_session_open() {
    let synth = synthesizer();
    let welcome = synth.welcome();
    assert!(!welcome.should_end_session());
    assert_eq!(welcome.title(), "Tracker for International Space Station (ISS): Welcome");
    assert_eq!(welcome.reprompt(), "Ask something such as, 'Where is ISS?'");
    let help = synth.help();
    assert!(!help.should_end_session());
    assert_eq!(help.title(), "Tracker for International Space Station (ISS): Help");
}

#[test]
fn test_envelope_json_shape() {
    let envelope = ResponseEnvelope::new(synthesizer().help());
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["version"], "1.0");
    assert!(json["sessionAttributes"].as_object().unwrap().is_empty());
    let response = &json["response"];
    assert_eq!(response["outputSpeech"]["type"], "PlainText");
    assert_eq!(response["card"]["type"], "Standard");
    assert_eq!(response["card"]["text"], response["outputSpeech"]["text"]);
    assert_eq!(
        response["card"]["image"]["smallImageUrl"],
        "https://s3.amazonaws.com/alexaissinput/cardImageSmall.jpg"
    );
    assert_eq!(
        response["card"]["image"]["largeImageUrl"],
        "https://s3.amazonaws.com/alexaissinput/cardImageLarge.jpg"
    );
    assert_eq!(response["reprompt"]["outputSpeech"]["type"], "PlainText");
    assert_eq!(response["shouldEndSession"], false);
}
