//! Content contract: profile, projects, skills, experience and working
//! principles supplied by the headless CMS.
//!
//! Every field may be missing. Sources are injected through
//! [`ContentSource`] and [`load_portfolio`] never fails: any error degrades
//! to the built-in static content.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreResult, PortfolioError};
use crate::icon::IconKind;
use crate::section::{page_sections, SectionList};

/// Featured project markers, matched against ids and lowercase names
const FEATURED_MARKERS: [&str; 3] = ["fahr", "bayanati", "dt360"];

/// One phone number or several
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Phone {
    One(String),
    Many(Vec<String>),
}

impl Default for Phone {
    fn default() -> Self {
        Phone::One(String::new())
    }
}

impl Phone {
    /// Split a free-form string on `, ; | \n`
    pub fn parse(raw: &str) -> Self {
        let numbers: Vec<String> = raw
            .split([',', ';', '|', '\n'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if numbers.len() > 1 {
            Phone::Many(numbers)
        } else {
            Phone::One(numbers.into_iter().next().unwrap_or_default())
        }
    }

    pub fn numbers(&self) -> Vec<&str> {
        match self {
            Phone::One(n) if n.is_empty() => Vec::new(),
            Phone::One(n) => vec![n.as_str()],
            Phone::Many(ns) => ns.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Job availability
    pub status: String,
    pub email: String,
    pub phone: Phone,
    pub linkedin: String,
    pub resume_url: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub stack: Vec<String>,
    pub highlights: Vec<String>,
    pub impact: Vec<LabeledValue>,
    pub metrics: Option<Vec<LabeledValue>>,
    pub ownership: Option<Vec<String>>,
    pub proof: Option<Vec<String>>,
    pub links: Vec<Link>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        let id = self.id.to_lowercase();
        let name = self.name.to_lowercase();
        FEATURED_MARKERS
            .iter()
            .any(|m| id == *m || name.contains(m))
    }

    fn is_fahr(&self) -> bool {
        self.id.eq_ignore_ascii_case("fahr") || self.name.to_lowercase().contains("fahr")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub icon: IconKind,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Year, e.g. `"2021"`
    pub start_date: String,
    /// Year; `None` means present
    pub end_date: Option<String>,
    pub summary: String,
    pub achievements: Vec<String>,
    pub stack: Vec<String>,
    pub tags: Vec<String>,
}

impl WorkExperience {
    fn start_year(&self) -> i32 {
        self.start_date
            .get(..4)
            .and_then(|y| y.parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowIWork {
    pub title: String,
    pub body: String,
    pub icon: IconKind,
}

/// Everything the page renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioData {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub work_experiences: Vec<WorkExperience>,
    pub how_i_work: Vec<HowIWork>,
}

impl PortfolioData {
    /// Built-in content used when the CMS is unavailable
    pub fn fallback() -> Self {
        Self {
            how_i_work: default_how_i_work(),
            ..Self::default()
        }
    }

    /// Featured projects, FAHR first
    pub fn featured_projects(&self) -> Vec<&Project> {
        let mut featured: Vec<&Project> = self.projects.iter().filter(|p| p.is_featured()).collect();
        // stable: keeps CMS order otherwise
        featured.sort_by_key(|p| !p.is_fahr());
        featured
    }

    /// Projects not shown in the featured section
    pub fn regular_projects(&self) -> Vec<&Project> {
        let featured: HashSet<String> = self
            .featured_projects()
            .iter()
            .map(|p| p.id.to_lowercase())
            .collect();
        self.projects
            .iter()
            .filter(|p| !featured.contains(&p.id.to_lowercase()))
            .collect()
    }

    /// Navigation sections for this content
    pub fn sections(&self) -> SectionList {
        page_sections(!self.featured_projects().is_empty())
    }
}

fn default_how_i_work() -> Vec<HowIWork> {
    vec![
        HowIWork {
            title: "Foundations first".to_string(),
            body: "Simple architectures that scale: boundaries, reusable components, and maintainable state patterns.".to_string(),
            icon: IconKind::Layers,
        },
        HowIWork {
            title: "Security + reliability".to_string(),
            body: "Secure UI flows, careful error handling, predictable state to reduce production risk.".to_string(),
            icon: IconKind::ShieldCheck,
        },
        HowIWork {
            title: "Performance mindset".to_string(),
            body: "Optimize rendering + data fetching; measure impact; avoid premature complexity.".to_string(),
            icon: IconKind::Rocket,
        },
    ]
}

/// Reduce an ISO date (or bare year) to its year
pub fn format_year(date: &str) -> String {
    let date = date.trim();
    let year = date.get(..4).filter(|y| y.bytes().all(|b| b.is_ascii_digit()));
    match year {
        Some(y) if date.len() == 4 || date[4..].starts_with('-') => y.to_string(),
        _ => date.to_string(),
    }
}

/// Prefix a relative media URL with the CMS base URL
pub fn absolute_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http") || base_url.is_empty() {
        url.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), url)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CMS dump parsing
// ═══════════════════════════════════════════════════════════════════════════

/// Raw responses from the CMS, one per collection.
///
/// Each collection is the `{ "data": ... }` envelope the CMS returns (a bare
/// array or object is accepted too).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CmsDump {
    /// Prefix for relative media URLs
    pub base_url: String,
    pub profile: Value,
    pub projects: Value,
    /// Envelope of category records, or a map from category name to record
    #[serde(alias = "skills")]
    pub skill_categories: Value,
    pub work_experiences: Value,
    #[serde(alias = "howIWork")]
    pub how_i_works: Value,
}

/// Normalized content plus what normalization dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentReport {
    pub data: PortfolioData,
    /// Records removed as duplicates
    pub duplicates: usize,
    /// Records that were not objects
    pub malformed: usize,
    /// The working principles came from the built-in defaults
    pub how_i_work_fallback: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawProject {
    id: Value,
    document_id: Option<String>,
    name: Option<String>,
    summary: Option<String>,
    tags: Value,
    stack: Value,
    highlights: Value,
    impact: Value,
    metrics: Value,
    ownership: Value,
    proof: Value,
    links: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawExperience {
    id: Value,
    document_id: Option<String>,
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    summary: Option<String>,
    achievements: Value,
    stack: Value,
    tags: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSkillCategory {
    name: Option<String>,
    icon: Option<String>,
    items: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawHowIWork {
    title: Option<String>,
    body: Option<String>,
    icon: Option<String>,
}

impl CmsDump {
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Normalize every collection
    pub fn normalize(&self) -> ContentReport {
        let mut report = ContentReport::default();

        let profile = envelope_items(&self.profile)
            .into_iter()
            .find(|v| v.is_object())
            .map(|p| self.normalize_profile(p))
            .unwrap_or_default();

        let projects = self.normalize_projects(&mut report);
        let skills = self.normalize_skills(&mut report);
        let work_experiences = self.normalize_experiences(&mut report);
        let how_i_work = self.normalize_how_i_work(&mut report);

        report.data = PortfolioData {
            profile,
            projects,
            skills,
            work_experiences,
            how_i_work,
        };
        report
    }

    fn normalize_profile(&self, raw: &Value) -> Profile {
        let photo_url = photo_url(raw).map(|url| absolute_url(&self.base_url, &url));
        let phone = match raw.get("phone") {
            Some(Value::String(s)) => Phone::parse(s),
            Some(Value::Array(items)) => Phone::Many(items.iter().filter_map(scalar).collect()),
            Some(other) => scalar(other).map(Phone::One).unwrap_or_default(),
            None => Phone::default(),
        };
        let status = string_field(raw, "jobStatus")
            .filter(|s| !s.is_empty())
            .or_else(|| string_field(raw, "status"))
            .unwrap_or_default();

        Profile {
            name: string_field(raw, "name").unwrap_or_default(),
            title: string_field(raw, "title").unwrap_or_default(),
            location: string_field(raw, "location").unwrap_or_default(),
            status,
            email: string_field(raw, "email").unwrap_or_default(),
            phone,
            linkedin: string_field(raw, "linkedin").unwrap_or_default(),
            resume_url: string_field(raw, "resumeUrl").unwrap_or_default(),
            photo_url,
        }
    }

    fn normalize_projects(&self, report: &mut ContentReport) -> Vec<Project> {
        let mut seen = HashSet::new();
        let mut projects = Vec::new();
        for (index, item) in envelope_items(&self.projects).into_iter().enumerate() {
            let Some(raw) = parse_item::<RawProject>(item, report) else {
                continue;
            };
            let id = scalar(&raw.id)
                .or(raw.document_id)
                .unwrap_or_else(|| format!("project-{index}"));
            if !seen.insert(id.clone()) {
                report.duplicates += 1;
                continue;
            }
            projects.push(Project {
                id,
                name: raw.name.unwrap_or_default(),
                summary: raw.summary.unwrap_or_default(),
                tags: string_list(&raw.tags),
                stack: string_list(&raw.stack),
                highlights: string_list(&raw.highlights),
                impact: typed_list(&raw.impact).unwrap_or_default(),
                metrics: typed_list(&raw.metrics),
                ownership: raw.ownership.is_array().then(|| string_list(&raw.ownership)),
                proof: raw.proof.is_array().then(|| string_list(&raw.proof)),
                links: typed_list(&raw.links).unwrap_or_default(),
            });
        }
        projects
    }

    fn normalize_skills(&self, report: &mut ContentReport) -> Vec<SkillCategory> {
        let mut skills: Vec<SkillCategory> = Vec::new();
        for (key, item) in skill_records(&self.skill_categories) {
            let Some(raw) = parse_item::<RawSkillCategory>(item, report) else {
                continue;
            };
            let name = raw.name.or(key).unwrap_or_default();
            if name.is_empty() && raw.items.is_null() {
                report.malformed += 1;
                continue;
            }
            let category = SkillCategory {
                icon: IconKind::from_name(raw.icon.as_deref().unwrap_or(&name)),
                items: string_list(&raw.items),
                name,
            };
            // keyed by name: a later record replaces an earlier one
            match skills.iter_mut().find(|s| s.name == category.name) {
                Some(existing) => {
                    report.duplicates += 1;
                    *existing = category;
                }
                None => skills.push(category),
            }
        }
        skills
    }

    fn normalize_experiences(&self, report: &mut ContentReport) -> Vec<WorkExperience> {
        let mut seen = HashSet::new();
        let mut experiences = Vec::new();
        for item in envelope_items(&self.work_experiences) {
            let Some(raw) = parse_item::<RawExperience>(item, report) else {
                continue;
            };
            let experience = WorkExperience {
                id: scalar(&raw.id).or(raw.document_id),
                title: raw.title.unwrap_or_default(),
                company: raw.company.unwrap_or_default(),
                location: raw.location.unwrap_or_default(),
                start_date: raw.start_date.as_deref().map(format_year).unwrap_or_default(),
                end_date: raw
                    .end_date
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .map(format_year),
                summary: raw.summary.unwrap_or_default(),
                achievements: string_list(&raw.achievements),
                stack: string_list(&raw.stack),
                tags: string_list(&raw.tags),
            };
            let key = (
                experience.title.clone(),
                experience.company.clone(),
                experience.location.clone(),
            );
            if !seen.insert(key) {
                report.duplicates += 1;
                continue;
            }
            experiences.push(experience);
        }
        experiences.sort_by_key(|e| std::cmp::Reverse(e.start_year()));
        experiences
    }

    fn normalize_how_i_work(&self, report: &mut ContentReport) -> Vec<HowIWork> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for item in envelope_items(&self.how_i_works) {
            let Some(raw) = parse_item::<RawHowIWork>(item, report) else {
                continue;
            };
            let key = (raw.title.clone(), raw.icon.clone());
            if !seen.insert(key) {
                report.duplicates += 1;
                continue;
            }
            items.push(HowIWork {
                title: raw.title.unwrap_or_default(),
                body: raw.body.unwrap_or_default(),
                icon: IconKind::from_name(raw.icon.as_deref().unwrap_or_default()),
            });
        }
        if items.is_empty() {
            report.how_i_work_fallback = true;
            return default_how_i_work();
        }
        items.sort_by_key(|i| !i.title.to_lowercase().contains("foundation"));
        items
    }
}

/// Unwrap `{ "data": ... }` into its records
fn envelope_items(value: &Value) -> Vec<&Value> {
    let inner = match value {
        Value::Object(map) if map.contains_key("data") => &map["data"],
        other => other,
    };
    match inner {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Skill categories come either enveloped or keyed by name
fn skill_records(value: &Value) -> Vec<(Option<String>, &Value)> {
    match value {
        Value::Object(map) if !map.contains_key("data") => map
            .iter()
            .map(|(name, record)| (Some(name.clone()), record))
            .collect(),
        other => envelope_items(other).into_iter().map(|v| (None, v)).collect(),
    }
}

fn parse_item<T: serde::de::DeserializeOwned + Default>(
    item: &Value,
    report: &mut ContentReport,
) -> Option<T> {
    if !item.is_object() {
        report.malformed += 1;
        return None;
    }
    match serde_json::from_value(item.clone()) {
        Ok(raw) => Some(raw),
        Err(e) => {
            tracing::debug!(error = %e, "skipping malformed CMS record");
            report.malformed += 1;
            None
        }
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(scalar).collect())
        .unwrap_or_default()
}

fn typed_list<T: serde::de::DeserializeOwned>(value: &Value) -> Option<Vec<T>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|i| serde_json::from_value(i.clone()).ok())
            .collect(),
    )
}

/// Media URL in any of the shapes the CMS produces
fn photo_url(profile: &Value) -> Option<String> {
    let Some(photo) = profile.get("photo").filter(|p| !p.is_null()) else {
        return string_field(profile, "photoUrl").filter(|u| !u.is_empty());
    };
    if let Some(data) = photo.get("data") {
        let data = match data {
            Value::Array(items) => items.first()?,
            other => other,
        };
        return data
            .pointer("/attributes/url")
            .or_else(|| data.get("url"))
            .and_then(Value::as_str)
            .map(str::to_string);
    }
    string_field(photo, "url")
}

// ═══════════════════════════════════════════════════════════════════════════
// Sources
// ═══════════════════════════════════════════════════════════════════════════

/// Where page content comes from. Constructed once per page and injected.
pub trait ContentSource {
    fn name(&self) -> &str;
    fn fetch(&self) -> CoreResult<ContentReport>;
}

/// The built-in content
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> CoreResult<ContentReport> {
        Ok(ContentReport {
            data: PortfolioData::fallback(),
            how_i_work_fallback: true,
            ..ContentReport::default()
        })
    }
}

/// A CMS dump held in memory
#[derive(Debug, Clone)]
pub struct JsonSource {
    json: String,
}

impl JsonSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl ContentSource for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn fetch(&self) -> CoreResult<ContentReport> {
        if self.json.trim().is_empty() {
            return Err(PortfolioError::ContentUnavailable(
                "empty CMS response".to_string(),
            ));
        }
        Ok(CmsDump::from_json(&self.json)?.normalize())
    }
}

/// Fetch page content, degrading to static content on any error
pub fn load_portfolio(source: &dyn ContentSource) -> PortfolioData {
    match source.fetch() {
        Ok(report) => {
            tracing::debug!(
                source = source.name(),
                projects = report.data.projects.len(),
                duplicates = report.duplicates,
                "content loaded"
            );
            report.data
        }
        Err(e) => {
            tracing::warn!(source = source.name(), error = %e, "content unavailable, using static defaults");
            PortfolioData::fallback()
        }
    }
}
