//! Resolution of the requested metric and composition of the spoken answer.

mod builders;
mod metric;
mod speechlet;
#[cfg(test)]
mod tests;

pub use builders::{ResponseSynthesizer, SatStatus};
pub use metric::CanonicalMetric;
pub use speechlet::{ResponseEnvelope, SpeechletResponse};
