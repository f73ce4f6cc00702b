use crate::{fallback::Fallback, portfolio::PortfolioData, portfolio::ProfileText};

/// Document title, description and Open Graph tags for the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_images: Vec<String>,
}

impl PageMetadata {
    pub fn from_portfolio(data: Option<&PortfolioData>) -> Self {
        let profile = ProfileText(data.and_then(|d| d.profile.as_ref()));
        Self {
            title: format!(
                "{} - {}",
                profile.name(),
                Fallback::MetaTitleRole.or(profile.raw_title())
            ),
            description: Fallback::MetaDescription.or(profile.raw_bio()).to_string(),
            og_title: profile.raw_name().map(str::to_string),
            og_description: profile.raw_bio().map(str::to_string),
            og_images: profile.avatar_url().map(str::to_string).into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Profile;

    #[test]
    fn test_absent_portfolio_uses_generic_literals() {
        let meta = PageMetadata::from_portfolio(None);
        assert_eq!(meta.title, "Portfolio - Desenvolvedor");
        assert_eq!(meta.description, "Portfolio profissional");
        assert_eq!(meta.og_title, None);
        assert_eq!(meta.og_description, None);
        assert!(meta.og_images.is_empty());
    }

    #[test]
    fn test_absent_profile_uses_generic_literals() {
        let data = PortfolioData::default();
        let meta = PageMetadata::from_portfolio(Some(&data));
        assert_eq!(meta.title, "Portfolio - Desenvolvedor");
    }

    #[test]
    fn test_full_profile() {
        let data = PortfolioData {
            profile: Some(Profile {
                name: Some("Ana".to_string()),
                title: Some("Engenheira".to_string()),
                bio: Some("Construo APIs.".to_string()),
                avatar_url: Some("https://cdn.example.com/ana.jpg".to_string()),
            }),
            ..Default::default()
        };
        let meta = PageMetadata::from_portfolio(Some(&data));
        assert_eq!(meta.title, "Ana - Engenheira");
        assert_eq!(meta.description, "Construo APIs.");
        assert_eq!(meta.og_title.as_deref(), Some("Ana"));
        assert_eq!(meta.og_images, vec!["https://cdn.example.com/ana.jpg".to_string()]);
    }
}
