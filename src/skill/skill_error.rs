use crate::orbit_state::OrbitStateError;
use crate::storage::StoreError;
use strum_macros::Display;

/// Every condition that aborts a request. None of them produce a response
/// envelope and none are retried.
#[derive(Debug, Display)]
pub enum SkillError {
    /// The caller's application id does not match the configured one.
    InvalidApplicationId,
    /// The request envelope is missing a part its type requires.
    MalformedRequest(&'static str),
    /// Either store could not be accessed.
    StoreAccess(StoreError),
    /// The stored elements could not be propagated.
    OrbitState(OrbitStateError),
    /// Propagation produced no usable longitude/latitude.
    InvalidComputedPosition,
    /// The intent name is not one this skill handles.
    InvalidIntent(String),
}

impl std::error::Error for SkillError {}

impl From<StoreError> for SkillError {
    fn from(value: StoreError) -> Self { SkillError::StoreAccess(value) }
}

impl From<OrbitStateError> for SkillError {
    fn from(value: OrbitStateError) -> Self { SkillError::OrbitState(value) }
}
