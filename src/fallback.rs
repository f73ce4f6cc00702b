/// Literal text shown whenever the API leaves something out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    SiteName,
    ProfileTitle,
    ProfileBio,
    AvatarInitial,
    MetaTitleRole,
    MetaDescription,
    NoProjects,
    NoSkills,
    ContactSent,
    ContactRejected,
    ContactTransport,
    LoadErrorTitle,
    LoadErrorHint,
}

impl Fallback {
    pub const fn text(self) -> &'static str {
        match self {
            Self::SiteName => "Portfolio",
            Self::ProfileTitle => "Desenvolvedor Full Stack",
            Self::ProfileBio => "Especializado em criar aplicações web modernas e escaláveis.",
            Self::AvatarInitial => "P",
            Self::MetaTitleRole => "Desenvolvedor",
            Self::MetaDescription => "Portfolio profissional",
            Self::NoProjects => "Nenhum projeto disponível",
            Self::NoSkills => "Nenhuma habilidade cadastrada",
            Self::ContactSent => "Mensagem enviada com sucesso!",
            Self::ContactRejected => "Erro ao enviar mensagem",
            Self::ContactTransport => "Erro ao enviar mensagem. Tente novamente.",
            Self::LoadErrorTitle => "Erro ao carregar portfólio",
            Self::LoadErrorHint => "Por favor, tente novamente mais tarde.",
        }
    }

    /// `value` when it holds non-empty text, this fallback otherwise.
    pub fn or<'a>(self, value: Option<&'a str>) -> &'a str {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => self.text(),
        }
    }
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_prefers_present_text() {
        assert_eq!(Fallback::SiteName.or(Some("Ana")), "Ana");
        assert_eq!(Fallback::SiteName.or(Some("")), "Portfolio");
        assert_eq!(Fallback::SiteName.or(None), "Portfolio");
    }

    #[test]
    fn test_contact_literals() {
        assert_eq!(
            Fallback::ContactTransport.to_string(),
            "Erro ao enviar mensagem. Tente novamente."
        );
        assert_eq!(Fallback::ContactRejected.text(), "Erro ao enviar mensagem");
        assert_eq!(Fallback::ContactSent.text(), "Mensagem enviada com sucesso!");
    }
}
