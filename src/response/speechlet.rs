use serde::Serialize;
use serde_json::{Map, Value};

const ENVELOPE_VERSION: &str = "1.0";
const PLAIN_TEXT: &str = "PlainText";
const STANDARD_CARD: &str = "Standard";

/// The complete reply handed back to the voice platform.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    version: &'static str,
    session_attributes: Map<String, Value>,
    response: SpeechletResponse,
}

impl ResponseEnvelope {
    pub fn new(response: SpeechletResponse) -> Self {
        Self { version: ENVELOPE_VERSION, session_attributes: Map::new(), response }
    }

    pub fn response(&self) -> &SpeechletResponse { &self.response }
}

/// Spoken text, reprompt and display card of a single answer.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    output_speech: OutputSpeech,
    card: Card,
    reprompt: Reprompt,
    should_end_session: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct OutputSpeech {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Card {
    #[serde(rename = "type")]
    kind: &'static str,
    title: String,
    text: String,
    image: CardImage,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct CardImage {
    small_image_url: String,
    large_image_url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Reprompt {
    output_speech: OutputSpeech,
}

impl SpeechletResponse {
    /// Builds a response whose card repeats the spoken text.
    ///
    /// # Arguments
    /// * `title` – The card title.
    /// * `speech` – Text spoken and shown on the card.
    /// * `reprompt` – Text spoken if the user stays silent while the session is open.
    /// * `images` – Small and large card image URLs.
    /// * `should_end_session` – Whether the platform closes the session afterwards.
    pub fn new(
        title: &str,
        speech: &str,
        reprompt: &str,
        images: &(String, String),
        should_end_session: bool,
    ) -> Self {
        Self {
            output_speech: OutputSpeech { kind: PLAIN_TEXT, text: speech.to_string() },
            card: Card {
                kind: STANDARD_CARD,
                title: title.to_string(),
                text: speech.to_string(),
                image: CardImage {
                    small_image_url: images.0.clone(),
                    large_image_url: images.1.clone(),
                },
            },
            reprompt: Reprompt {
                output_speech: OutputSpeech { kind: PLAIN_TEXT, text: reprompt.to_string() },
            },
            should_end_session,
        }
    }

    pub fn speech(&self) -> &str { &self.output_speech.text }
    pub fn title(&self) -> &str { &self.card.title }
    pub fn reprompt(&self) -> &str { &self.reprompt.output_speech.text }
    pub fn should_end_session(&self) -> bool { self.should_end_session }
}
