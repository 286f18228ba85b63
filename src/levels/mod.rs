use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Level value meaning "nothing selected".
pub const UNSET_LEVEL: i32 = -1;

/// Indices of the control elements every level widget carries.
///
/// Index -1 is the "none" control. It is active whenever any level is set.
pub const CONTROL_INDICES: [i32; 4] = [-1, 0, 1, 2];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, IntoStaticStr, EnumIter,
)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn value(self) -> i32 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Expert => 2,
        }
    }

    /// Typed view of a raw level. `-1` and anything out of range map to `None`.
    pub fn from_value(value: i32) -> Option<Self> {
        Self::iter().find(|l| l.value() == value)
    }
}

impl Serialize for SkillLevel {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = i32::deserialize(d)?;
        Self::from_value(v)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown skill level {v}")))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    IntoStaticStr,
    EnumIter,
)]
pub enum RequirementImportance {
    #[default]
    #[strum(to_string = "Nice to have")]
    NiceToHave,
    Important,
    Required,
}

impl RequirementImportance {
    pub fn value(self) -> i32 {
        match self {
            RequirementImportance::NiceToHave => 0,
            RequirementImportance::Important => 1,
            RequirementImportance::Required => 2,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        Self::iter().find(|i| i.value() == value)
    }
}

impl Serialize for RequirementImportance {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for RequirementImportance {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = i32::deserialize(d)?;
        Self::from_value(v)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown importance {v}")))
    }
}

/// Caption shown on the control element with the given index.
pub fn control_label(index: i32) -> &'static str {
    SkillLevel::from_value(index)
        .map(<&'static str>::from)
        .unwrap_or("None")
}

/// Whether control `index` is shown as active when `level` is selected.
///
/// No range check on `level`: anything below -1 leaves every control
/// inactive and anything above 2 lights them all.
pub fn is_control_active(index: i32, level: i32) -> bool {
    index <= level
}
