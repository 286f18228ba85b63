//! Decoding of submitted skill and requirement forms.
//!
//! A submitted form carries one level field per skill, named by the skill id,
//! and for task requirements an importance field named `i{id}`. The importance
//! field is absent when the skill was left unset, because the importance input
//! is disabled in that state and browsers skip disabled inputs.

use crate::levels::{RequirementImportance, SkillLevel, UNSET_LEVEL};
use crate::widget::dependent_input_id;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("missing level field {0:?}")]
    MissingField(String),
    #[error("field {field:?} is not an integer: {value:?}")]
    NotAnInteger { field: String, value: String },
    #[error("field {field:?} has unknown level {value}")]
    UnknownLevel { field: String, value: i32 },
    #[error("field {field:?} has unknown importance {value}")]
    UnknownImportance { field: String, value: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillChange {
    Remove,
    Set(SkillLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementChange {
    Remove,
    Set {
        level: SkillLevel,
        importance: RequirementImportance,
    },
}

fn int_field(post: &HashMap<String, String>, name: &str) -> Result<Option<i32>, FormError> {
    let Some(raw) = post.get(name) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|_| FormError::NotAnInteger {
            field: name.to_string(),
            value: raw.clone(),
        })
}

fn level_field(
    post: &HashMap<String, String>,
    skill_id: &str,
) -> Result<Option<SkillLevel>, FormError> {
    let value = int_field(post, skill_id)?
        .ok_or_else(|| FormError::MissingField(skill_id.to_string()))?;
    if value == UNSET_LEVEL {
        return Ok(None);
    }
    SkillLevel::from_value(value)
        .map(Some)
        .ok_or_else(|| FormError::UnknownLevel {
            field: skill_id.to_string(),
            value,
        })
}

/// One change per skill id, in the order given.
pub fn decode_skill_changes<'a>(
    post: &HashMap<String, String>,
    skill_ids: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<(String, SkillChange)>, FormError> {
    skill_ids
        .into_iter()
        .map(|id| {
            let change = match level_field(post, id)? {
                None => SkillChange::Remove,
                Some(level) => SkillChange::Set(level),
            };
            Ok((id.to_string(), change))
        })
        .collect()
}

/// Like [`decode_skill_changes`], with the importance taken from `i{id}`.
/// A missing importance falls back to the default.
pub fn decode_requirement_changes<'a>(
    post: &HashMap<String, String>,
    skill_ids: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<(String, RequirementChange)>, FormError> {
    skill_ids
        .into_iter()
        .map(|id| {
            let Some(level) = level_field(post, id)? else {
                return Ok((id.to_string(), RequirementChange::Remove));
            };

            let importance_field = dependent_input_id(id);
            let importance = match int_field(post, &importance_field)? {
                None => RequirementImportance::default(),
                Some(value) => RequirementImportance::from_value(value).ok_or(
                    FormError::UnknownImportance {
                        field: importance_field,
                        value,
                    },
                )?,
            };

            Ok((id.to_string(), RequirementChange::Set { level, importance }))
        })
        .collect()
}
