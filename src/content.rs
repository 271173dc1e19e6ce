//! Hand-authored portfolio content.
//!
//! Each section's records live in a JSON file under `content/`, embedded into
//! both the server binary and the WASM bundle. The files are parsed into typed
//! records and validated once, on first access.

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().expect("Embedded portfolio content should be valid")
});

pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(String),
    #[error("couldn't parse content file {file}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("skill {skill} has level {level}, above 100")]
    SkillLevel { skill: String, level: u8 },
    #[error("at least one project is required")]
    NoProjects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Email,
    Phone,
    Location,
}

impl Icon {
    /// Devicon font class for brand icons.
    pub fn devicon(self) -> Option<&'static str> {
        match self {
            Self::Github => Some("devicon-github-original"),
            Self::Linkedin => Some("devicon-linkedin-plain"),
            Self::Twitter => Some("devicon-twitter-original"),
            Self::Email | Self::Phone | Self::Location => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Github => "gh",
            Self::Linkedin => "in",
            Self::Twitter => "x",
            Self::Email => "✉️",
            Self::Phone => "📞",
            Self::Location => "📍",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
    pub href: String,
    pub icon: Icon,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub href: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub school: String,
    pub grade: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct HeroStats {
    pub github_contributions: u32,
    pub problems_solved: u32,
    pub merged_prs: u32,
}

impl HeroStats {
    /// What the hero shows before the simulated fetch completes.
    pub fn pending(&self) -> Self {
        Self {
            github_contributions: 0,
            problems_solved: 0,
            merged_prs: self.merged_prs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub avatar: String,
    pub resume: Resume,
    pub location: String,
    pub availability: String,
    pub summary: String,
    pub about: Vec<String>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
    pub hero_links: Vec<SocialLink>,
    pub socials: Vec<SocialLink>,
    pub contact_methods: Vec<ContactMethod>,
    pub stats: HeroStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillSet {
    pub categories: Vec<SkillCategory>,
    pub other: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub kind: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContributionStats {
    pub prs: u32,
    pub commits: u32,
    pub lines_changed: String,
    pub stars: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contribution {
    pub project: String,
    pub description: String,
    pub role: String,
    pub contributions: Vec<String>,
    pub technologies: Vec<String>,
    pub stats: ContributionStats,
    pub link: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverallStat {
    pub label: String,
    pub value: String,
    pub glyph: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenSource {
    pub overall: Vec<OverallStat>,
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub timeline: String,
    pub highlights: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub category: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Widget {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsWidgets {
    pub profile_card: Widget,
    pub github: Vec<Widget>,
    pub activity: Vec<Widget>,
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: SkillSet,
    pub experience: Vec<ExperienceRecord>,
    pub open_source: OpenSource,
    pub projects: Vec<ProjectRecord>,
    pub widgets: StatsWidgets,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let skills: SkillSet = read_json("skills.json")?;
        validate_skills(&skills)?;
        let projects: Vec<ProjectRecord> = read_json("projects.json")?;
        validate_projects(&projects)?;
        Ok(Self {
            profile: read_json("profile.json")?,
            skills,
            experience: read_json("experience.json")?,
            open_source: read_json("open_source.json")?,
            projects,
            widgets: read_json("widgets.json")?,
        })
    }
}

fn read_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let asset = ContentAssets::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    serde_json::from_slice(&asset.data).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        source,
    })
}

fn validate_skills(skills: &SkillSet) -> Result<(), ContentError> {
    let over = skills
        .categories
        .iter()
        .flat_map(|c| c.skills.iter())
        .find(|s| s.level > 100);
    match over {
        Some(skill) => Err(ContentError::SkillLevel {
            skill: skill.name.clone(),
            level: skill.level,
        }),
        None => Ok(()),
    }
}

fn validate_projects(projects: &[ProjectRecord]) -> Result<(), ContentError> {
    if projects.is_empty() {
        return Err(ContentError::NoProjects);
    }
    Ok(())
}

/// Formats a count with thousands separators, e.g. `1,200`.
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Year the site was built, for the footer.
pub fn copyright_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let p = Portfolio::load().expect("content should load");
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.skills.categories.len(), 6);
        assert_eq!(p.experience.len(), 4);
        assert_eq!(p.open_source.contributions.len(), 3);
        assert_eq!(p.profile.achievements.len(), 4);
        assert_eq!(p.widgets.github.len(), 2);
    }

    #[test]
    fn test_project_records_are_complete() {
        for project in &portfolio().projects {
            assert!(!project.title.is_empty());
            assert!(!project.technologies.is_empty());
            assert!(!project.highlights.is_empty());
            assert!(project.color.starts_with("from-"));
        }
        assert_eq!(
            portfolio().projects[2].title,
            "LLM Integrated Excel Plotter Chatbot"
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        let skills = &portfolio().skills;
        assert!(validate_skills(skills).is_ok());
        assert!(skills
            .categories
            .iter()
            .flat_map(|c| &c.skills)
            .all(|s| s.level <= 100));
    }

    #[test]
    fn test_skill_level_over_100_rejected() {
        let skills = SkillSet {
            categories: vec![SkillCategory {
                title: "Languages".to_string(),
                skills: vec![Skill {
                    name: "Rust".to_string(),
                    level: 120,
                    color: "from-orange-400 to-orange-600".to_string(),
                }],
            }],
            other: vec![],
        };
        let err = validate_skills(&skills).unwrap_err();
        assert!(matches!(err, ContentError::SkillLevel { level: 120, .. }));
    }

    #[test]
    fn test_empty_projects_rejected() {
        assert!(matches!(
            validate_projects(&[]),
            Err(ContentError::NoProjects)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_json::<SkillSet>("nope.json").unwrap_err();
        assert!(matches!(err, ContentError::Missing(f) if f == "nope.json"));
    }

    #[test]
    fn test_hero_stats_pending() {
        let stats = portfolio().profile.stats;
        let pending = stats.pending();
        assert_eq!(pending.github_contributions, 0);
        assert_eq!(pending.problems_solved, 0);
        assert_eq!(pending.merged_prs, stats.merged_prs);
        assert_eq!(stats.problems_solved, 973);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(973), "973");
        assert_eq!(format_count(1200), "1,200");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_icons() {
        assert_eq!(Icon::Github.devicon(), Some("devicon-github-original"));
        assert_eq!(Icon::Email.devicon(), None);
        assert_eq!(Icon::Location.glyph(), "📍");
    }

    #[test]
    fn test_copyright_year() {
        let year = copyright_year().expect("build time should parse");
        assert!(year >= 2024);
    }
}
