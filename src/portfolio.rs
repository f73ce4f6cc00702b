use std::fmt;

use serde::{
    de::{MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::fallback::Fallback;

pub type Id = u64;

/// Wire shape of `GET /portfolio`.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioEnvelope {
    pub data: PortfolioData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default, deserialize_with = "nullable")]
    pub social_links: Vec<SocialLink>,
    #[serde(default, deserialize_with = "nullable")]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: SkillGroups,
}

impl PortfolioData {
    pub fn profile_text(&self) -> ProfileText<'_> {
        ProfileText(self.profile.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Read-only view over a possibly absent profile, resolving every field to display text.
#[derive(Debug, Clone, Copy)]
pub struct ProfileText<'a>(pub Option<&'a Profile>);

impl<'a> ProfileText<'a> {
    pub fn raw_name(self) -> Option<&'a str> {
        self.0.and_then(|p| present(&p.name))
    }

    pub fn raw_title(self) -> Option<&'a str> {
        self.0.and_then(|p| present(&p.title))
    }

    pub fn raw_bio(self) -> Option<&'a str> {
        self.0.and_then(|p| present(&p.bio))
    }

    pub fn avatar_url(self) -> Option<&'a str> {
        self.0.and_then(|p| present(&p.avatar_url))
    }

    pub fn name(self) -> &'a str {
        Fallback::SiteName.or(self.raw_name())
    }

    pub fn title(self) -> &'a str {
        Fallback::ProfileTitle.or(self.raw_title())
    }

    pub fn bio(self) -> &'a str {
        Fallback::ProfileBio.or(self.raw_bio())
    }

    pub fn avatar_initial(self) -> String {
        self.raw_name()
            .and_then(|name| name.chars().next())
            .map(String::from)
            .unwrap_or_else(|| Fallback::AvatarInitial.text().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "nullable")]
    pub id: Id,
    #[serde(default, deserialize_with = "nullable")]
    pub platform: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "nullable")]
    pub id: Id,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

impl Project {
    pub fn challenges(&self) -> Option<&str> {
        present(&self.challenges)
    }

    pub fn demo_url(&self) -> Option<&str> {
        present(&self.demo_url)
    }

    pub fn github_url(&self) -> Option<&str> {
        present(&self.github_url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(default, deserialize_with = "nullable")]
    pub id: Id,
    #[serde(default, deserialize_with = "nullable")]
    pub highlight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    #[serde(default, deserialize_with = "nullable")]
    pub id: Id,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "nullable")]
    pub id: Id,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// Skills grouped by category, in the order the API listed the categories.
///
/// Decodes from a JSON object (`{"Backend": [...]}`) or from the bare `[]` the
/// API returns when there is nothing to group. Always encodes as an object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillGroups(pub Vec<SkillCategory>);

impl SkillGroups {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter()
    }
}

impl IntoIterator for SkillGroups {
    type Item = SkillCategory;
    type IntoIter = std::vec::IntoIter<SkillCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for SkillGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SkillGroupsVisitor)
    }
}

struct SkillGroupsVisitor;

impl<'de> Visitor<'de> for SkillGroupsVisitor {
    type Value = SkillGroups;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of skill categories or an empty list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut groups = Vec::new();
        while let Some((name, skills)) = access.next_entry::<String, Option<Vec<Skill>>>()? {
            groups.push(SkillCategory {
                name,
                skills: skills.unwrap_or_default(),
            });
        }
        Ok(SkillGroups(groups))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        // only the empty list shows up in practice; anything inside it is ignored
        while access.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(SkillGroups::default())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(SkillGroups::default())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(SkillGroups::default())
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "data": {
            "profile": {
                "name": "Ana Souza",
                "title": "Engenheira de Software",
                "bio": "Construo APIs.",
                "avatar_url": null
            },
            "social_links": [
                {"id": 1, "platform": "GitHub", "url": "https://github.com/ana"},
                {"id": 2, "platform": "linkedin", "url": "https://linkedin.com/in/ana"}
            ],
            "projects": [
                {
                    "id": 7,
                    "title": "Loja",
                    "description": "E-commerce",
                    "image_url": "https://cdn.example.com/loja.png",
                    "highlights": [{"id": 1, "highlight": "Checkout em 2 passos"}],
                    "challenges": "Estoque concorrente",
                    "technologies": [{"id": 3, "name": "Rust", "color": "#dea584"}],
                    "demo_url": "https://loja.example.com",
                    "github_url": null
                }
            ],
            "skills": {
                "Frontend": [{"id": 1, "name": "Leptos"}],
                "Backend": [{"id": 2, "name": "Axum"}, {"id": 3, "name": "Laravel"}],
                "Banco de Dados": [{"id": 4, "name": "PostgreSQL"}]
            }
        }
    }"##;

    #[test]
    fn test_decode_full_payload() {
        let envelope: PortfolioEnvelope = serde_json::from_str(SAMPLE).unwrap();
        let data = envelope.data;

        assert_eq!(data.profile_text().name(), "Ana Souza");
        assert_eq!(data.profile_text().avatar_url(), None);
        assert_eq!(data.social_links.len(), 2);

        let project = &data.projects[0];
        assert_eq!(project.highlights[0].highlight, "Checkout em 2 passos");
        assert_eq!(project.technologies[0].color.as_deref(), Some("#dea584"));
        assert_eq!(project.challenges(), Some("Estoque concorrente"));
        assert_eq!(project.demo_url(), Some("https://loja.example.com"));
        assert_eq!(project.github_url(), None);
    }

    #[test]
    fn test_skill_categories_keep_api_order() {
        let envelope: PortfolioEnvelope = serde_json::from_str(SAMPLE).unwrap();
        let names = envelope
            .data
            .skills
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Frontend", "Backend", "Banco de Dados"]);
    }

    #[test]
    fn test_skills_survive_reencoding() {
        let envelope: PortfolioEnvelope = serde_json::from_str(SAMPLE).unwrap();
        let encoded = serde_json::to_string(&envelope.data).unwrap();
        let decoded: PortfolioData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, envelope.data);
    }

    #[test]
    fn test_empty_list_skills_is_empty_mapping() {
        let data: PortfolioData = serde_json::from_str(r#"{"skills": []}"#).unwrap();
        assert!(data.skills.is_empty());
        let data: PortfolioData = serde_json::from_str(r#"{"skills": null}"#).unwrap();
        assert!(data.skills.is_empty());
    }

    #[test]
    fn test_missing_and_null_collections_default_to_empty() {
        let data: PortfolioData =
            serde_json::from_str(r#"{"social_links": null, "projects": null}"#).unwrap();
        assert!(data.profile.is_none());
        assert!(data.social_links.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.skills.is_empty());
    }

    #[test]
    fn test_null_scalars_in_items_decode_as_empty() {
        let envelope: PortfolioEnvelope = serde_json::from_str(
            r#"{"data": {
                "social_links": [{"id": null, "platform": null, "url": "https://example.com"}],
                "projects": [{
                    "id": 1,
                    "title": "Loja",
                    "description": null,
                    "image_url": null,
                    "highlights": [{"id": 1, "highlight": null}],
                    "technologies": [{"id": 2, "name": null, "color": null}]
                }],
                "skills": {"Backend": [{"id": 3, "name": null}]}
            }}"#,
        )
        .unwrap();
        let data = envelope.data;

        let project = &data.projects[0];
        assert_eq!(project.title, "Loja");
        assert_eq!(project.description, "");
        assert_eq!(project.image_url, "");
        assert_eq!(project.highlights[0].highlight, "");
        assert_eq!(project.technologies[0].name, "");
        assert_eq!(data.social_links[0].platform, "");
        assert_eq!(data.social_links[0].id, 0);
        assert_eq!(data.skills.iter().next().unwrap().skills[0].name, "");
    }

    #[test]
    fn test_missing_profile_fields_fall_back() {
        let text = ProfileText(None);
        assert_eq!(text.name(), "Portfolio");
        assert_eq!(text.title(), "Desenvolvedor Full Stack");
        assert_eq!(
            text.bio(),
            "Especializado em criar aplicações web modernas e escaláveis."
        );
        assert_eq!(text.avatar_initial(), "P");
    }

    #[test]
    fn test_empty_profile_strings_fall_back() {
        let profile = Profile {
            name: Some(String::new()),
            title: Some(String::new()),
            bio: None,
            avatar_url: Some(String::new()),
        };
        let text = ProfileText(Some(&profile));
        assert_eq!(text.name(), "Portfolio");
        assert_eq!(text.title(), "Desenvolvedor Full Stack");
        assert_eq!(text.avatar_url(), None);
        assert_eq!(text.avatar_initial(), "P");
    }

    #[test]
    fn test_avatar_initial_is_first_character() {
        let profile = Profile {
            name: Some("Élio Santos".to_string()),
            ..Default::default()
        };
        assert_eq!(ProfileText(Some(&profile)).avatar_initial(), "É");
    }
}
