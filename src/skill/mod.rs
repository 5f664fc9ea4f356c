//! Routing of inbound voice-platform requests to the welcome, help and status
//! responses.

mod dispatcher;
mod envelope;
mod intent;
mod skill_error;

pub use dispatcher::SkillDispatcher;
pub use envelope::RequestEnvelope;
pub use skill_error::SkillError;
