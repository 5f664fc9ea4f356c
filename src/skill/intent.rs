use strum_macros::{Display, EnumString, IntoStaticStr};

/// Intents the skill understands.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, EnumString, IntoStaticStr)]
pub enum SkillIntent {
    #[strum(serialize = "GetISSStatus")]
    Status,
    #[strum(serialize = "GetISSStatusSpeed")]
    StatusSpeed,
    #[strum(serialize = "GetISSStatusAltitude")]
    StatusAltitude,
    #[strum(serialize = "GetISSStatusPeriod")]
    StatusPeriod,
    #[strum(serialize = "GetISSStatusSize")]
    StatusSize,
    #[strum(serialize = "AMAZON.HelpIntent")]
    Help,
}

impl SkillIntent {
    /// The metric slot value a shortcut intent stands for. `None` for the
    /// primary status intent and for help.
    pub fn shortcut_metric(self) -> Option<&'static str> {
        match self {
            SkillIntent::StatusSpeed => Some("speed"),
            SkillIntent::StatusAltitude => Some("altitude"),
            SkillIntent::StatusPeriod => Some("period"),
            SkillIntent::StatusSize => Some("size"),
            SkillIntent::Status | SkillIntent::Help => None,
        }
    }
}
