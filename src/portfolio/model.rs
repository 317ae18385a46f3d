use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PortfolioData {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub contact: Contact,
    pub skills: SkillCategories,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub phone: String,
    pub location: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub contribution: String,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub duration: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Skill categories in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCategories(Vec<SkillCategory>);

impl SkillCategories {
    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter()
    }

    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|category| category.skills.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|category| category.skills.is_empty())
    }
}

impl<'de> Deserialize<'de> for SkillCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = SkillCategories;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of category name to skill list")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, skills)) = access.next_entry::<String, Vec<String>>()? {
                    categories.push(SkillCategory { name, skills });
                }
                Ok(SkillCategories(categories))
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

impl PortfolioData {
    /// The labels the constellation animates: every category flattened in
    /// document order, cut at `limit`.
    pub fn constellation_skills(&self, limit: usize) -> Vec<String> {
        self.skills
            .all_skills()
            .take(limit)
            .map(str::to_owned)
            .collect()
    }

    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { "Portfolio" } else { name }
    }
}
