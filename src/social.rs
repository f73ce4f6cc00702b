/// Glyph shown next to a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Email,
}

impl SocialIcon {
    /// Unknown platforms get the email glyph.
    pub fn for_platform(platform: &str) -> Self {
        match platform.to_lowercase().as_str() {
            "github" => Self::Github,
            "linkedin" => Self::Linkedin,
            _ => Self::Email,
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Email => "extra-email",
        }
    }
}
