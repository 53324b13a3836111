#![allow(dead_code)]

//! Resume information model: the payloads a caller hands to the resume view.
//!
//! Every field is optional: the view renders whatever is present and silently
//! omits the rest. Scalar fields accept JSON strings or numbers, `null` means absent.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

// ────────────────────────────────────────────────────────────────────────────
// Section keys
// ────────────────────────────────────────────────────────────────────────────

/// Stable identifiers for the subdivisions of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    WorkExp,
    Project,
    Achievement,
    Education,
    BasicInfo,
    PositionOfResponsibility,
    Other,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::WorkExp,
        SectionKey::Project,
        SectionKey::Achievement,
        SectionKey::Education,
        SectionKey::BasicInfo,
        SectionKey::PositionOfResponsibility,
        SectionKey::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::WorkExp => "workExp",
            SectionKey::Project => "project",
            SectionKey::Achievement => "achievement",
            SectionKey::Education => "education",
            SectionKey::BasicInfo => "basicInfo",
            SectionKey::PositionOfResponsibility => "positionOfResponsibility",
            SectionKey::Other => "other",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionKey(pub String);

impl fmt::Display for UnknownSectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section key '{}'", self.0)
    }
}

impl std::error::Error for UnknownSectionKey {}

impl FromStr for SectionKey {
    type Err = UnknownSectionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSectionKey(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section order
// ────────────────────────────────────────────────────────────────────────────

/// Caller-specified render order of the main sections.
///
/// Deserializes from either a JSON array of keys or a JSON object keyed by
/// section key (values ignored); document order is render order. Unknown keys
/// are dropped and repeated keys keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionOrder(Vec<SectionKey>);

impl SectionOrder {
    pub fn new(keys: impl IntoIterator<Item = SectionKey>) -> Self {
        let mut order = Vec::new();
        for key in keys {
            if !order.contains(&key) {
                order.push(key);
            }
        }
        SectionOrder(order)
    }

    fn from_names(names: Vec<String>) -> Self {
        let keys = names.into_iter().filter_map(|name| match name.parse::<SectionKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Ignoring section in render order: {e}");
                None
            }
        });
        SectionOrder::new(keys)
    }

    pub fn keys(&self) -> &[SectionKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for SectionOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SectionOrderVisitor)
    }
}

struct SectionOrderVisitor;

impl<'de> Visitor<'de> for SectionOrderVisitor {
    type Value = SectionOrder;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of section keys or an object keyed by section key")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut names = Vec::new();
        while let Some(name) = seq.next_element::<String>()? {
            names.push(name);
        }
        Ok(SectionOrder::from_names(names))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut names = Vec::new();
        while let Some((name, _)) = map.next_entry::<String, IgnoredAny>()? {
            names.push(name);
        }
        Ok(SectionOrder::from_names(names))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SectionOrder::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SectionOrder::default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field helpers
// ────────────────────────────────────────────────────────────────────────────

/// Accepts a string, number or bool. `null`, missing and non-scalar values
/// become `None`; a non-scalar is logged and dropped.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_text))
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            warn!("Dropping non-scalar field value {other}");
            None
        }
    }
}

/// Point lists: scalars become text, `null` and non-scalar entries are skipped.
fn lenient_points<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries.into_iter().filter_map(scalar_text).collect()),
        Some(other) => {
            warn!("Dropping point list that is not an array: {other}");
            Ok(Vec::new())
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns the field's text when it is present and non-empty.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Section payloads
// ────────────────────────────────────────────────────────────────────────────

/// A section backed by an ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Section<T> {
    #[serde(default, deserialize_with = "lenient_string")]
    pub section_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfoSection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub section_title: Option<String>,
    #[serde(default)]
    pub detail: Option<BasicInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherSection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub section_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company_name: Option<String>,
    /// Raw date value; formatted at render time.
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: Vec<String>,
}

/// One education table row. Rows keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub college: Option<String>,
    #[serde(rename = "GPA", default, deserialize_with = "lenient_string")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Information map
// ────────────────────────────────────────────────────────────────────────────

/// All section payloads of one resume, keyed by `SectionKey`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationMap {
    #[serde(default)]
    pub work_exp: Option<Section<WorkItem>>,
    #[serde(default)]
    pub project: Option<Section<ProjectItem>>,
    #[serde(default)]
    pub achievement: Option<Section<AchievementItem>>,
    #[serde(default)]
    pub education: Option<Section<EducationItem>>,
    #[serde(default)]
    pub basic_info: Option<BasicInfoSection>,
    #[serde(default)]
    pub position_of_responsibility: Option<Section<PositionItem>>,
    #[serde(default)]
    pub other: Option<OtherSection>,
}

impl InformationMap {
    /// Raw `sectionTitle` of the payload stored under `key`, if the payload exists.
    pub fn section_title(&self, key: SectionKey) -> Option<&str> {
        let title = match key {
            SectionKey::WorkExp => self.work_exp.as_ref().map(|s| &s.section_title),
            SectionKey::Project => self.project.as_ref().map(|s| &s.section_title),
            SectionKey::Achievement => self.achievement.as_ref().map(|s| &s.section_title),
            SectionKey::Education => self.education.as_ref().map(|s| &s.section_title),
            SectionKey::BasicInfo => self.basic_info.as_ref().map(|s| &s.section_title),
            SectionKey::PositionOfResponsibility => self
                .position_of_responsibility
                .as_ref()
                .map(|s| &s.section_title),
            SectionKey::Other => self.other.as_ref().map(|s| &s.section_title),
        };
        title.and_then(non_empty)
    }

    /// Visibility gate: a section shows only when its payload carries a title.
    pub fn is_visible(&self, key: SectionKey) -> bool {
        self.section_title(key).is_some()
    }

    pub fn basic_info(&self) -> Option<&BasicInfo> {
        self.basic_info.as_ref().and_then(|s| s.detail.as_ref())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
