use crate::levels::{RequirementImportance, UNSET_LEVEL};
use crate::widget::{ControlClasses, DEFAULT_ACTIVE_CONTROL_CLASS, DEFAULT_CONTROL_CLASS};
use leptos::logging::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Hidden form field Django's CSRF middleware checks on POST.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

fn default_level() -> i32 {
    UNSET_LEVEL
}

/// Skill ids arrive either as strings or as integer primary keys.
fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(d)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// One skill row rendered by the editors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub area: String,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub importance: RequirementImportance,
}

/// Page configuration injected by the server as `window.ENV`.
///
/// Keys are read in README style (`CONTROL_CLASS`) with the snake_case
/// spelling accepted as an alias. Every key is optional.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EnvConfig {
    #[serde(rename = "CONTROL_CLASS", alias = "control_class")]
    pub control_class: String,

    #[serde(rename = "ACTIVE_CONTROL_CLASS", alias = "active_control_class")]
    pub active_control_class: String,

    /// Where the editor forms post to. Empty posts back to the current page.
    #[serde(rename = "SUBMIT_URL", alias = "submit_url")]
    pub submit_url: String,

    /// Sent back as `csrfmiddlewaretoken`. Empty omits the field.
    #[serde(rename = "CSRF_TOKEN", alias = "csrf_token")]
    pub csrf_token: String,

    #[serde(rename = "SKILLS", alias = "skills")]
    pub skills: Vec<SkillEntry>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            control_class: DEFAULT_CONTROL_CLASS.to_string(),
            active_control_class: DEFAULT_ACTIVE_CONTROL_CLASS.to_string(),
            submit_url: String::new(),
            csrf_token: String::new(),
            skills: vec![],
        }
    }
}

impl EnvConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Read `window.ENV`, falling back to defaults when it is absent or
    /// malformed.
    pub fn new() -> Self {
        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return Self::default();
        };
        if env.is_undefined() || !env.is_object() {
            return Self::default();
        }

        let json = js_sys::JSON::stringify(&env)
            .ok()
            .and_then(|s| s.as_string());
        match json.as_deref().map(Self::from_json) {
            Some(Ok(cfg)) => cfg,
            Some(Err(e)) => {
                warn!("ignoring malformed window.ENV: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// The hidden `(name, value)` pair the editor forms must post, if any.
    pub fn csrf_field(&self) -> Option<(&'static str, &str)> {
        let token = self.csrf_token.trim();
        (!token.is_empty()).then_some((CSRF_FIELD_NAME, token))
    }

    pub fn control_classes(&self) -> ControlClasses {
        ControlClasses::new(&self.control_class, &self.active_control_class)
    }

    /// Skills grouped by area, areas in first-seen order.
    pub fn skills_by_area(&self) -> Vec<(String, Vec<SkillEntry>)> {
        let mut groups: Vec<(String, Vec<SkillEntry>)> = vec![];
        for skill in &self.skills {
            match groups.iter_mut().find(|(area, _)| area == &skill.area) {
                Some((_, items)) => items.push(skill.clone()),
                None => groups.push((skill.area.clone(), vec![skill.clone()])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_env_uses_defaults() {
        let cfg = EnvConfig::from_json("{}").expect("empty env should parse");
        assert_eq!(cfg, EnvConfig::default());
        assert_eq!(cfg.control_classes(), ControlClasses::default());
    }

    #[test]
    fn test_readme_style_keys() {
        let cfg = EnvConfig::from_json(
            r#"{"CONTROL_CLASS": "lvl", "ACTIVE_CONTROL_CLASS": "lvl-on", "SUBMIT_URL": "/skills"}"#,
        )
        .expect("env should parse");
        assert_eq!(cfg.control_classes(), ControlClasses::new("lvl", "lvl-on"));
        assert_eq!(cfg.control_classes().active, "lvl lvl-on");
        assert_eq!(cfg.submit_url, "/skills");
    }

    #[test]
    fn test_snake_case_alias_keys() {
        let cfg = EnvConfig::from_json(r#"{"control_class": "c"}"#).expect("env should parse");
        assert_eq!(cfg.control_class, "c");
        assert_eq!(cfg.active_control_class, DEFAULT_ACTIVE_CONTROL_CLASS);
    }

    #[test]
    fn test_skill_entries_default_to_unset() {
        let cfg = EnvConfig::from_json(
            r#"{"SKILLS": [
                {"id": "1", "area": "Stats", "name": "Regression"},
                {"id": "2", "area": "Eng", "name": "SQL", "level": 2, "importance": 1},
                {"id": "3", "area": "Stats", "name": "Bayes", "level": 0}
            ]}"#,
        )
        .expect("env should parse");

        assert_eq!(cfg.skills[0].level, -1);
        assert_eq!(cfg.skills[0].importance, RequirementImportance::NiceToHave);
        assert_eq!(cfg.skills[1].importance, RequirementImportance::Important);

        let groups = cfg.skills_by_area();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Stats");
        assert_eq!(
            groups[0].1.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3"]
        );
        assert_eq!(groups[1].0, "Eng");
    }

    #[test]
    fn test_numeric_skill_ids_keep_the_rest_of_the_config() {
        let cfg = EnvConfig::from_json(
            r#"{"ACTIVE_CONTROL_CLASS": "on", "SKILLS": [
                {"id": 7, "area": "Stats", "name": "Regression", "level": 1},
                {"id": "8", "area": "Stats", "name": "Bayes"}
            ]}"#,
        )
        .expect("numeric ids should parse");

        assert_eq!(cfg.active_control_class, "on");
        assert_eq!(cfg.skills.len(), 2);
        assert_eq!(cfg.skills[0].id, "7");
        assert_eq!(cfg.skills[0].level, 1);
        assert_eq!(cfg.skills[1].id, "8");
    }

    #[test]
    fn test_csrf_token_is_posted_as_middleware_field() {
        let cfg = EnvConfig::from_json(r#"{"CSRF_TOKEN": "abc123"}"#).expect("env should parse");
        assert_eq!(cfg.csrf_token, "abc123");
        assert_eq!(cfg.csrf_field(), Some(("csrfmiddlewaretoken", "abc123")));

        let cfg = EnvConfig::from_json(r#"{"csrf_token": "xyz"}"#).expect("env should parse");
        assert_eq!(cfg.csrf_field(), Some(("csrfmiddlewaretoken", "xyz")));

        assert_eq!(EnvConfig::default().csrf_field(), None);
    }

    #[test]
    fn test_malformed_env_is_an_error() {
        assert!(EnvConfig::from_json(r#"{"SKILLS": "nope"}"#).is_err());
    }
}
