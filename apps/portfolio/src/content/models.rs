use serde::{Deserialize, Serialize};

/// Everything the page renders. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBundle {
    pub profile: Profile,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl ContentBundle {
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub summary: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// A headline number in the hero, e.g. `~4 Years Experience` or `20% Sales Boost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: u32,
    pub label: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    #[serde(default)]
    pub category: Option<String>,
    pub date: String,
    pub location: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<SkillGroup>,
    #[serde(default)]
    pub analytical: Vec<Skill>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0 – 100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub challenge: String,
    pub solution: Narrative,
    pub impact: Narrative,
    pub technologies: Vec<String>,
    /// SVG path data drawn in a 24x24 viewBox.
    pub icon: String,
}

/// A paragraph with optional bullet points, used for a project's solution and impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Narrative {
    pub description: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub grade: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub note: String,
}
