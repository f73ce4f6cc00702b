/// In-page regions reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "sobre",
            Self::Projects => "projetos",
            Self::Skills => "habilidades",
            Self::Contact => "contato",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "Sobre",
            Self::Projects => "Projetos",
            Self::Skills => "Habilidades",
            Self::Contact => "Contato",
        }
    }
}
