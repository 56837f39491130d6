//! Profile resolution: final `ScoreSet` → displayable `ResolvedProfile`.
//!
//! Steps:
//! 1. dominant dimension = strict maximum, ties to the first in canonical order
//! 2. template lookup, falling back to the catalog's designated default
//! 3. display percentage for every dimension, clamped at 100
//! 4. job enrichment from the TechRole catalog (exact title, then substring)

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use serde::Serialize;
use tracing::error;

use crate::catalog::icons::RoleIcon;
use crate::catalog::{Catalog, JobMatch, ProfileCatalog, RoadmapYear, TechRole};
use crate::scoring::{ScoreSet, StrengthDimension};

/// Nominal maximum a single dimension reaches over a full quiz.
pub const DEFAULT_SCORE_CEILING: u32 = 45;

pub const DEFAULT_CEILING: NonZeroU32 = match NonZeroU32::new(DEFAULT_SCORE_CEILING) {
    Some(c) => c,
    None => panic!("score ceiling must be non-zero"),
};

/// Skills shown for a job with no matching TechRole.
pub const FALLBACK_SKILLS: [&str; 3] = ["Communication", "Analyse", "Adaptabilité"];

const MAX_SKILLS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedJob {
    pub title: String,
    pub match_percent: u8,
    pub description: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub icon: RoleIcon,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    pub dominant: StrengthDimension,
    pub display_name: String,
    pub description: String,
    pub percentages: BTreeMap<StrengthDimension, u8>,
    pub jobs: Vec<ResolvedJob>,
    pub salary_range: String,
    pub roadmap: Vec<RoadmapYear>,
    /// True when the dominant dimension had no template and the default was used.
    pub used_fallback_template: bool,
}

pub struct ProfileResolver<'a> {
    profiles: &'a ProfileCatalog,
    roles: &'a [TechRole],
    ceiling: NonZeroU32,
}

impl<'a> ProfileResolver<'a> {
    pub fn new(profiles: &'a ProfileCatalog, roles: &'a [TechRole], ceiling: NonZeroU32) -> Self {
        Self {
            profiles,
            roles,
            ceiling,
        }
    }

    pub fn from_catalog(catalog: &'a Catalog, ceiling: NonZeroU32) -> Self {
        Self::new(&catalog.profiles, &catalog.roles, ceiling)
    }

    pub fn resolve(&self, final_scores: &ScoreSet) -> ResolvedProfile {
        let dominant = dominant_dimension(final_scores);

        let lookup = self.profiles.lookup(dominant);
        if lookup.fallback {
            error!(
                "No profile template for dominant dimension {dominant}; using default {}",
                lookup.dimension
            );
        }
        let template = lookup.template;

        let percentages = final_scores
            .iter()
            .map(|(d, v)| (d, display_percentage(v, self.ceiling)))
            .collect();

        let jobs = template
            .jobs
            .iter()
            .map(|job| self.enrich_job(job, &template.salary_range))
            .collect();

        ResolvedProfile {
            dominant,
            display_name: template.name.clone(),
            description: template.description.clone(),
            percentages,
            jobs,
            salary_range: template.salary_range.clone(),
            roadmap: template.roadmap.clone(),
            used_fallback_template: lookup.fallback,
        }
    }

    fn enrich_job(&self, job: &JobMatch, profile_salary: &str) -> ResolvedJob {
        match find_role(self.roles, &job.title) {
            Some(role) => ResolvedJob {
                title: job.title.clone(),
                match_percent: job.match_percent,
                description: role.description.clone(),
                salary: role.salary.clone(),
                skills: role.skills.iter().take(MAX_SKILLS).cloned().collect(),
                icon: role.icon,
            },
            None => ResolvedJob {
                title: job.title.clone(),
                match_percent: job.match_percent,
                description: job.description.clone(),
                salary: profile_salary.to_string(),
                skills: FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
                icon: RoleIcon::default(),
            },
        }
    }
}

/// Dimension with the strictly greatest value; the earliest in canonical
/// order wins a tie.
pub fn dominant_dimension(scores: &ScoreSet) -> StrengthDimension {
    let mut best = StrengthDimension::ALL[0];
    let mut best_value = scores.get(best);
    for (dimension, value) in scores.iter() {
        if value > best_value {
            best = dimension;
            best_value = value;
        }
    }
    best
}

/// `min(round(value / ceiling * 100), 100)`, rounding half up.
pub fn display_percentage(value: u32, ceiling: NonZeroU32) -> u8 {
    let ceiling = u64::from(ceiling.get());
    let pct = (u64::from(value) * 200 + ceiling) / (2 * ceiling);
    pct.min(100) as u8
}

/// First role whose title equals `job_title` (case-insensitive), else the
/// first whose title contains it or is contained in it. Catalog order
/// breaks ties.
///
/// The title is trimmed first, and a blank title matches nothing. An
/// untrimmed substring test would let `""` match the first role in the
/// catalog.
pub fn find_role<'r>(roles: &'r [TechRole], job_title: &str) -> Option<&'r TechRole> {
    let wanted = job_title.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    roles
        .iter()
        .find(|r| r.title.to_lowercase() == wanted)
        .or_else(|| {
            roles.iter().find(|r| {
                let title = r.title.to_lowercase();
                wanted.contains(&title) || title.contains(&wanted)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::template;

    fn ceiling() -> NonZeroU32 {
        DEFAULT_CEILING
    }

    fn role(id: &str, title: &str, icon: RoleIcon) -> TechRole {
        TechRole {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} (catalog)"),
            icon,
            skills: vec![
                "Skill 1".to_string(),
                "Skill 2".to_string(),
                "Skill 3".to_string(),
                "Skill 4".to_string(),
            ],
            salary: format!("{id} salary"),
        }
    }

    fn roles() -> Vec<TechRole> {
        vec![
            role("fullstack", "Software Engineer (Fullstack)", RoleIcon::Code2),
            role("frontend", "Frontend Developer", RoleIcon::Monitor),
            role("devops", "DevOps Engineer", RoleIcon::Zap),
        ]
    }

    fn profiles_with(dims: &[StrengthDimension]) -> ProfileCatalog {
        let templates = dims
            .iter()
            .map(|d| {
                (
                    *d,
                    template(
                        &format!("Profil {d}"),
                        &[("Software Engineer (Fullstack)", 98), ("CTO", 90)],
                    ),
                )
            })
            .collect();
        ProfileCatalog::new(templates).unwrap()
    }

    fn scores(pairs: &[(StrengthDimension, u32)]) -> ScoreSet {
        let mut s = ScoreSet::default();
        for (d, v) in pairs {
            s.add(*d, *v).unwrap();
        }
        s
    }

    #[test]
    fn test_dominant_is_strict_maximum() {
        let s = scores(&[(StrengthDimension::Ana, 9), (StrengthDimension::Rel, 4)]);
        assert_eq!(dominant_dimension(&s), StrengthDimension::Ana);
    }

    #[test]
    fn test_dominant_tie_goes_to_canonical_first() {
        let s = scores(&[(StrengthDimension::Tech, 10), (StrengthDimension::Vision, 10)]);
        assert_eq!(dominant_dimension(&s), StrengthDimension::Tech);
    }

    #[test]
    fn test_dominant_all_zero_is_first_dimension() {
        assert_eq!(dominant_dimension(&ScoreSet::default()), StrengthDimension::Com);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(display_percentage(0, ceiling()), 0);
        assert_eq!(display_percentage(45, ceiling()), 100);
        assert_eq!(display_percentage(46, ceiling()), 100);
        assert_eq!(display_percentage(u32::MAX, ceiling()), 100);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        let wide = NonZeroU32::new(200).unwrap();
        // 1/200 = 0.5% → 1
        assert_eq!(display_percentage(1, wide), 1);
        // 40/45 = 88.9% → 89, 5/45 = 11.1% → 11
        assert_eq!(display_percentage(40, ceiling()), 89);
        assert_eq!(display_percentage(5, ceiling()), 11);
    }

    #[test]
    fn test_end_to_end_tech_profile() {
        let profiles = profiles_with(&StrengthDimension::ALL);
        let roles = roles();
        let resolver = ProfileResolver::new(&profiles, &roles, ceiling());

        let mut s = scores(&StrengthDimension::ALL.map(|d| (d, 5)));
        s.add(StrengthDimension::Tech, 35).unwrap();
        let profile = resolver.resolve(&s);

        assert_eq!(profile.dominant, StrengthDimension::Tech);
        assert_eq!(profile.display_name, "Profil Tech");
        assert!(!profile.used_fallback_template);
        assert_eq!(profile.percentages.len(), 8);
        assert_eq!(profile.percentages[&StrengthDimension::Tech], 89);
        for d in StrengthDimension::ALL {
            if d != StrengthDimension::Tech {
                assert_eq!(profile.percentages[&d], 11, "dimension {d}");
            }
        }
        assert_eq!(profile.roadmap.len(), 3);
    }

    #[test]
    fn test_missing_template_falls_back_to_default() {
        let profiles = profiles_with(&[StrengthDimension::Com, StrengthDimension::Ana]);
        let roles = roles();
        let resolver = ProfileResolver::new(&profiles, &roles, ceiling());

        let profile = resolver.resolve(&scores(&[(StrengthDimension::Lead, 20)]));

        assert_eq!(profile.dominant, StrengthDimension::Lead);
        assert_eq!(profile.display_name, "Profil Com");
        assert!(profile.used_fallback_template);
        assert_eq!(profile.percentages[&StrengthDimension::Lead], 44);
    }

    #[test]
    fn test_exact_title_enrichment() {
        let profiles = profiles_with(&[StrengthDimension::Com]);
        let roles = roles();
        let resolver = ProfileResolver::new(&profiles, &roles, ceiling());

        let profile = resolver.resolve(&ScoreSet::default());
        let job = &profile.jobs[0];

        assert_eq!(job.title, "Software Engineer (Fullstack)");
        assert_eq!(job.match_percent, 98);
        assert_eq!(job.description, "Software Engineer (Fullstack) (catalog)");
        assert_eq!(job.salary, "fullstack salary");
        assert_eq!(job.skills, vec!["Skill 1", "Skill 2", "Skill 3"]);
        assert_eq!(job.icon, RoleIcon::Code2);
    }

    #[test]
    fn test_unmatched_job_uses_embedded_data() {
        let profiles = profiles_with(&[StrengthDimension::Com]);
        let roles = roles();
        let resolver = ProfileResolver::new(&profiles, &roles, ceiling());

        let profile = resolver.resolve(&ScoreSet::default());
        let cto = &profile.jobs[1];

        assert_eq!(cto.title, "CTO");
        assert_eq!(cto.description, "CTO (template)");
        assert_eq!(cto.salary, profile.salary_range);
        assert_eq!(cto.skills, FALLBACK_SKILLS.to_vec());
        assert_eq!(cto.icon, RoleIcon::Briefcase);
    }

    #[test]
    fn test_jobs_keep_template_order() {
        let profiles = profiles_with(&[StrengthDimension::Com]);
        let roles = roles();
        let resolver = ProfileResolver::new(&profiles, &roles, ceiling());
        let titles: Vec<_> = resolver
            .resolve(&ScoreSet::default())
            .jobs
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["Software Engineer (Fullstack)", "CTO"]);
    }

    #[test]
    fn test_find_role_is_case_insensitive() {
        let roles = roles();
        assert_eq!(find_role(&roles, "devops engineer").unwrap().id, "devops");
    }

    #[test]
    fn test_find_role_substring_both_directions() {
        let roles = roles();
        // job title contained in role title
        assert_eq!(find_role(&roles, "Software Engineer").unwrap().id, "fullstack");
        // role title contained in job title
        assert_eq!(
            find_role(&roles, "Senior Frontend Developer").unwrap().id,
            "frontend"
        );
    }

    #[test]
    fn test_find_role_prefers_exact_over_earlier_substring() {
        let roles = vec![
            role("generic", "Engineer Lead", RoleIcon::Briefcase),
            role("exact", "Engineer", RoleIcon::Server),
        ];
        assert_eq!(find_role(&roles, "Engineer").unwrap().id, "exact");
    }

    #[test]
    fn test_find_role_first_substring_in_catalog_order() {
        let roles = vec![
            role("a", "Data Engineer", RoleIcon::Database),
            role("b", "DevOps Engineer", RoleIcon::Zap),
        ];
        assert_eq!(find_role(&roles, "Engineer").unwrap().id, "a");
    }

    #[test]
    fn test_find_role_empty_title_matches_nothing() {
        assert!(find_role(&roles(), "").is_none());
        assert!(find_role(&roles(), "  ").is_none());
    }

    #[test]
    fn test_find_role_ignores_surrounding_whitespace() {
        assert_eq!(find_role(&roles(), " DevOps Engineer ").unwrap().id, "devops");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let catalog = Catalog::embedded().unwrap();
        let resolver = ProfileResolver::from_catalog(&catalog, ceiling());
        let s = scores(&[
            (StrengthDimension::Crea, 17),
            (StrengthDimension::Ana, 12),
            (StrengthDimension::Rel, 3),
        ]);

        let first = serde_json::to_string(&resolver.resolve(&s)).unwrap();
        let second = serde_json::to_string(&resolver.resolve(&s)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_embedded_tech_profile_enrichment() {
        let catalog = Catalog::embedded().unwrap();
        let resolver = ProfileResolver::from_catalog(&catalog, ceiling());
        let profile = resolver.resolve(&scores(&[(StrengthDimension::Tech, 30)]));

        assert_eq!(profile.display_name, "L'Architecte Technophile");
        let software = &profile.jobs[0];
        assert_eq!(software.title, "Software Engineer");
        assert_eq!(software.icon, RoleIcon::Code2);
        assert_eq!(software.salary, "500k - 2.0M CFA");

        let cto = &profile.jobs[1];
        assert_eq!(cto.icon, RoleIcon::Briefcase);
        assert_eq!(cto.salary, "350.000 - 2.500.000 CFA / mois");
    }

    #[test]
    fn test_resolved_profile_json_shape() {
        let profiles = profiles_with(&[StrengthDimension::Com]);
        let roles = roles();
        let resolver = ProfileResolver::new(&profiles, &roles, ceiling());
        let value = serde_json::to_value(resolver.resolve(&ScoreSet::default())).unwrap();

        assert_eq!(value["dominant"], "Com");
        assert!(value["displayName"].is_string());
        assert!(value["salaryRange"].is_string());
        assert_eq!(value["percentages"]["Créa"], 0);
        assert_eq!(value["jobs"][0]["matchPercent"], 98);
        assert_eq!(value["jobs"][0]["icon"], "Code2");
        assert_eq!(value["roadmap"][0]["year"], 1);
        assert_eq!(value["usedFallbackTemplate"], false);
    }
}
