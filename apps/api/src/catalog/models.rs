use serde::{Deserialize, Serialize};

use crate::catalog::icons::RoleIcon;

/// A curated job recommendation inside a profile template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub title: String,
    /// 0 to 100
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapYear {
    pub year: u8,
    pub goal: String,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTemplate {
    pub name: String,
    pub description: String,
    pub jobs: Vec<JobMatch>,
    pub salary_range: String,
    pub roadmap: Vec<RoadmapYear>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechRole {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: RoleIcon,
    pub skills: Vec<String>,
    pub salary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub specialties: Vec<String>,
}

impl University {
    /// Case-insensitive match against name, any specialty, or location.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self
                .specialties
                .iter()
                .any(|s| s.to_lowercase().contains(query_lower))
            || self.location.to_lowercase().contains(query_lower)
    }

    /// Phone number reduced to digits and `+`.
    pub fn dial_number(&self) -> String {
        self.phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }

    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.dial_number())
    }

    /// wa.me takes the international number without the leading `+`.
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.dial_number().replacen('+', "", 1))
    }
}
