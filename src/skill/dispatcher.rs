use super::envelope::{Intent, RequestEnvelope, RequestType};
use super::intent::SkillIntent;
use super::skill_error::SkillError;
use crate::geo_lookup::{GeoFeature, LonLatKey};
use crate::keychain::Keychain;
use crate::orbit_state::OrbitalState;
use crate::response::{
    CanonicalMetric, ResponseEnvelope, ResponseSynthesizer, SatStatus, SpeechletResponse,
};
use crate::{error, event, info, log};
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Handles one request envelope at a time. Holds no per-request state; the
/// stores and configuration come from the shared [`Keychain`].
pub struct SkillDispatcher {
    k: Keychain,
    synthesizer: ResponseSynthesizer,
}

impl SkillDispatcher {
    pub fn new(k: Keychain) -> Self {
        let synthesizer = ResponseSynthesizer::new(k.config());
        Self { k, synthesizer }
    }

    /// Dispatches `envelope` against the current instant.
    ///
    /// # Returns
    /// `Ok(None)` for a session end, which needs no response payload.
    ///
    /// # Errors
    /// Any `SkillError`. No envelope is produced once an error occurs.
    pub async fn handle(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<Option<ResponseEnvelope>, SkillError> {
        self.handle_at(envelope, Utc::now()).await
    }

    /// Dispatches `envelope`, propagating the orbit to `now`.
    ///
    /// # Errors
    /// See [`SkillDispatcher::handle`].
    pub async fn handle_at(
        &self,
        envelope: &RequestEnvelope,
        now: DateTime<Utc>,
    ) -> Result<Option<ResponseEnvelope>, SkillError> {
        let result = self.dispatch(envelope, now).await;
        if let Err(e) = &result {
            error!("Request {} failed: {e:?}", envelope.request().request_id());
        }
        result
    }

    async fn dispatch(
        &self,
        envelope: &RequestEnvelope,
        now: DateTime<Utc>,
    ) -> Result<Option<ResponseEnvelope>, SkillError> {
        let session = envelope.session();
        let request = envelope.request();
        let app_id = self.k.config().app_id();
        if !app_id.is_empty() && session.application_id() != app_id {
            return Err(SkillError::InvalidApplicationId);
        }

        if session.is_new() {
            info!(
                "Session started: requestId={}, sessionId={}",
                request.request_id(),
                session.session_id()
            );
        }

        match request.kind() {
            RequestType::LaunchRequest => {
                log!("Launch: requestId={}", request.request_id());
                Ok(Some(ResponseEnvelope::new(self.synthesizer.welcome())))
            }
            RequestType::IntentRequest => {
                let intent = request
                    .intent()
                    .ok_or(SkillError::MalformedRequest("IntentRequest without intent"))?;
                log!("Intent {}: requestId={}", intent.name(), request.request_id());
                self.on_intent(intent, now).await.map(|r| Some(ResponseEnvelope::new(r)))
            }
            RequestType::SessionEndedRequest => {
                log!("Session ended: sessionId={}", session.session_id());
                Ok(None)
            }
        }
    }

    async fn on_intent(
        &self,
        intent: &Intent,
        now: DateTime<Utc>,
    ) -> Result<SpeechletResponse, SkillError> {
        let skill_intent = SkillIntent::from_str(intent.name())
            .map_err(|_| SkillError::InvalidIntent(intent.name().to_string()))?;
        match skill_intent {
            SkillIntent::Help => Ok(self.synthesizer.help()),
            SkillIntent::Status => self.iss_status(intent, now).await,
            shortcut => {
                let primary: &'static str = SkillIntent::Status.into();
                let metric = shortcut.shortcut_metric().unwrap_or_default();
                let rewritten = Intent::with_metric(primary, metric);
                self.iss_status(&rewritten, now).await
            }
        }
    }

    /// Fetch elements, propagate, look up the ground point, then answer the
    /// requested metric. The first failing stage aborts the request.
    async fn iss_status(
        &self,
        intent: &Intent,
        now: DateTime<Utc>,
    ) -> Result<SpeechletResponse, SkillError> {
        let record = self.k.elements().get_elements(self.k.config().sat_cat_number()).await?;
        let state = OrbitalState::compute(record.line1(), record.line2(), now)?;
        let (lon, lat) = ground_point(&state)?;

        let key = LonLatKey::new(lon, lat);
        event!("Sub-satellite point lon={lon:.4} lat={lat:.4}, lookup key {key}");
        let feature = self.k.features().get_feature(&key).await?.unwrap_or_else(GeoFeature::unknown);

        let metric = CanonicalMetric::resolve(intent.metric());
        event!("Metric {:?} resolved to {metric} (static: {})", intent.metric(), metric.is_static());
        Ok(self.synthesizer.build(metric, &SatStatus::new(state, feature)))
    }
}

/// The sub-satellite point of `state`, or the fatal error for an unusable one.
pub(super) fn ground_point(state: &OrbitalState) -> Result<(f64, f64), SkillError> {
    state.sub_point().ok_or(SkillError::InvalidComputedPosition)
}
