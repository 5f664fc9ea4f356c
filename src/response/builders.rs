use super::metric::CanonicalMetric;
use super::speechlet::SpeechletResponse;
use crate::common::{format_number, kilometers_to_miles, round_half_up, round_whole};
use crate::config::SkillConfig;
use crate::geo_lookup::GeoFeature;
use crate::orbit_state::OrbitalState;

/// Spoken when a status response needs no reprompt.
const NO_REPROMPT: &str = " ";
const VELOCITY_DECIMALS: u32 = 3;

const STATUS_TITLE: &str = "ISS Status";

// Reference facts about the station, independent of its current state.
const SIZE_SPEECH: &str = "ISS is roughly the size of an American football field.";
const WEIGHT_SPEECH: &str = "Without gravity at play, ISS does not have weight. The mass of ISS is approximately 419,455 kilograms, or 924,740 pounds.";
const MASS_SPEECH: &str = "The mass of ISS is approximately 419,455 kilograms, or 924,740 pounds.";
const VOLUME_SPEECH: &str = "The pressurised volume of ISS is approximately 916 meters cubed, or 32,300 cubic feet.";
const PERIOD_SPEECH: &str = "ISS orbits the Earth every 92.69 minutes. That's approximately 15.55 orbits around the Earth per day.";

const HELP_SPEECH: &str = "Track the status of the International Space Station (ISS). You can ask me questions such as, 'Where is the International Space Station?', 'How long does it take ISS to orbit the Earth?', 'How fast is ISS?'";
const HELP_REPROMPT: &str = "Ask a question such as, 'What is the status of ISS?'";
const WELCOME_REPROMPT: &str = "Ask something such as, 'Where is ISS?'";

/// The merged state a status answer is built from.
#[derive(Debug, Clone)]
pub struct SatStatus {
    state: OrbitalState,
    feature: GeoFeature,
}

impl SatStatus {
    pub fn new(state: OrbitalState, feature: GeoFeature) -> Self { Self { state, feature } }
    pub fn state(&self) -> &OrbitalState { &self.state }
    pub fn feature(&self) -> &GeoFeature { &self.feature }
}

/// Builds every response the skill can give. Status builders close the
/// session, the welcome and help builders keep it open for a follow-up.
#[derive(Debug, Clone)]
pub struct ResponseSynthesizer {
    skill_title: String,
    images: (String, String),
}

impl ResponseSynthesizer {
    pub fn new(config: &SkillConfig) -> Self {
        Self {
            skill_title: config.skill_title().to_string(),
            images: config.card_image_urls(),
        }
    }

    pub fn welcome(&self) -> SpeechletResponse {
        let title = format!("{}: Welcome", self.skill_title);
        let speech = format!(
            "{}. Say something like, 'how long does it take to orbit the Earth' or, 'give me a status update'. How would you like to proceed?",
            self.skill_title
        );
        SpeechletResponse::new(&title, &speech, WELCOME_REPROMPT, &self.images, false)
    }

    pub fn help(&self) -> SpeechletResponse {
        let title = format!("{}: Help", self.skill_title);
        SpeechletResponse::new(&title, HELP_SPEECH, HELP_REPROMPT, &self.images, false)
    }

    /// Builds the status answer for exactly one canonical metric.
    pub fn build(&self, metric: CanonicalMetric, status: &SatStatus) -> SpeechletResponse {
        let state = status.state();
        match metric {
            CanonicalMetric::FullStatus => self.full_status(status),
            CanonicalMetric::Latitude => self.status(
                "Latitude",
                &format!(
                    "ISS is currently at a latitude of {}.",
                    round_whole(state.latitude_deg())
                ),
            ),
            CanonicalMetric::Longitude => self.status(
                "Longitude",
                &format!(
                    "ISS is currently at a longitude of {}.",
                    round_whole(state.longitude_deg())
                ),
            ),
            CanonicalMetric::Altitude => self.status(
                "Altitude",
                &format!(
                    "ISS is currently at an altitude of {} kilometers. That's {} miles.",
                    format_number(state.height()),
                    format_number(kilometers_to_miles(state.height()))
                ),
            ),
            CanonicalMetric::Speed => self.status(
                "Speed",
                &format!(
                    "ISS is currently traveling at {} kilometers per hour. That's {} miles per hour.",
                    format_number(state.speed()),
                    format_number(kilometers_to_miles(state.speed()))
                ),
            ),
            CanonicalMetric::VelocityVector => self.velocity(state),
            CanonicalMetric::Size => self.status("Size", SIZE_SPEECH),
            CanonicalMetric::Weight => self.status("Weight", WEIGHT_SPEECH),
            CanonicalMetric::Mass => self.status("Mass", MASS_SPEECH),
            CanonicalMetric::Volume => self.status("Volume", VOLUME_SPEECH),
            CanonicalMetric::OrbitalPeriod => self.status("Orbital Period", PERIOD_SPEECH),
        }
    }

    fn status(&self, topic: &str, speech: &str) -> SpeechletResponse {
        let title = format!("{STATUS_TITLE}: {topic}");
        SpeechletResponse::new(&title, speech, NO_REPROMPT, &self.images, true)
    }

    fn full_status(&self, status: &SatStatus) -> SpeechletResponse {
        let state = status.state();
        let feature = status.feature();
        let mut speech = format!(
            "At a latitude of {} and longitude of {}, ISS is currently ",
            round_whole(state.latitude_deg()),
            round_whole(state.longitude_deg())
        );
        speech.push_str(&geographic_clause(feature));
        speech.push_str(&format!(
            "traveling at {} kilometers per hour at an altitude of {} kilometers. ",
            format_number(state.speed()),
            format_number(state.height())
        ));
        speech.push_str(&format!(
            "That's {} miles per hour at an altitude of {} miles.",
            format_number(kilometers_to_miles(state.speed())),
            format_number(kilometers_to_miles(state.height()))
        ));
        SpeechletResponse::new(STATUS_TITLE, &speech, NO_REPROMPT, &self.images, true)
    }

    fn velocity(&self, state: &OrbitalState) -> SpeechletResponse {
        let v = state.velocity_eci();
        let speech = format!(
            "ISS is currently traveling at an x velocity of {} kilometers per second, a y velocity of {} kilometers per second and a z velocity of {} kilometers per second. That's a speed of {} kilometers per hour, or {} miles per hour.",
            round_half_up(v.x(), VELOCITY_DECIMALS),
            round_half_up(v.y(), VELOCITY_DECIMALS),
            round_half_up(v.z(), VELOCITY_DECIMALS),
            format_number(state.speed()),
            format_number(kilometers_to_miles(state.speed()))
        );
        self.status("Velocity", &speech)
    }
}

/// `over the <water>, <city>, <state>, <country>, ` with every absent part
/// left out. The state is skipped when it repeats the country.
fn geographic_clause(feature: &GeoFeature) -> String {
    if feature.is_empty() {
        return String::new();
    }
    let mut clause = String::from("over ");
    if let Some(water) = feature.water() {
        clause.push_str(&format!("the {water}, "));
    }
    if let Some(city) = feature.city() {
        clause.push_str(&format!("{city}, "));
    }
    if let Some(state) = feature.state().filter(|s| Some(*s) != feature.country()) {
        clause.push_str(&format!("{state}, "));
    }
    if let Some(country) = feature.country() {
        clause.push_str(&format!("{country}, "));
    }
    clause
}
