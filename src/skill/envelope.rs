use serde::Deserialize;

/// An inbound request as delivered by the voice platform. Fields this skill
/// does not read are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct RequestEnvelope {
    session: Session,
    request: Request,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    new: bool,
    #[serde(default)]
    session_id: String,
    #[serde(default)]
    application: Application,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    application_id: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    kind: RequestType,
    #[serde(default)]
    request_id: String,
    intent: Option<Intent>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
}

/// A named intent with its optional `Metric` slot.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    name: String,
    #[serde(default)]
    slots: Option<Slots>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    #[serde(rename = "Metric", default)]
    metric: Option<Slot>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    #[serde(default)]
    value: Option<String>,
}

impl RequestEnvelope {
    pub fn session(&self) -> &Session { &self.session }
    pub fn request(&self) -> &Request { &self.request }
}

impl Session {
    pub fn is_new(&self) -> bool { self.new }
    pub fn session_id(&self) -> &str { &self.session_id }
    pub fn application_id(&self) -> &str { &self.application.application_id }
}

impl Request {
    pub fn kind(&self) -> RequestType { self.kind }
    pub fn request_id(&self) -> &str { &self.request_id }
    pub fn intent(&self) -> Option<&Intent> { self.intent.as_ref() }
}

impl Intent {
    /// An intent carrying `metric` in its `Metric` slot.
    pub fn with_metric(name: &str, metric: &str) -> Self {
        Self {
            name: name.to_string(),
            slots: Some(Slots {
                metric: Some(Slot { value: Some(metric.to_string()) }),
            }),
        }
    }

    pub fn name(&self) -> &str { &self.name }

    /// Raw value of the `Metric` slot, if one was given.
    pub fn metric(&self) -> Option<&str> {
        self.slots.as_ref()?.metric.as_ref()?.value.as_deref()
    }
}
