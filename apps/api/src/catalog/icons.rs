use serde::{Deserialize, Serialize};

/// Icons a role card can show. Unknown names from catalog data map to
/// `Briefcase` instead of failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum RoleIcon {
    Code2,
    Monitor,
    Server,
    Smartphone,
    Cloud,
    Zap,
    Bug,
    BarChart,
    BrainCircuit,
    Brain,
    Database,
    Palette,
    Layers,
    Search,
    Play,
    Package,
    Timer,
    ShieldAlert,
    #[default]
    Briefcase,
    Share2,
    HeartHandshake,
}

const ICON_TABLE: &[(&str, RoleIcon)] = &[
    ("Code2", RoleIcon::Code2),
    ("Monitor", RoleIcon::Monitor),
    ("Server", RoleIcon::Server),
    ("Smartphone", RoleIcon::Smartphone),
    ("Cloud", RoleIcon::Cloud),
    ("Zap", RoleIcon::Zap),
    ("Bug", RoleIcon::Bug),
    ("BarChart", RoleIcon::BarChart),
    ("BrainCircuit", RoleIcon::BrainCircuit),
    ("Brain", RoleIcon::Brain),
    ("Database", RoleIcon::Database),
    ("Palette", RoleIcon::Palette),
    ("Layers", RoleIcon::Layers),
    ("Search", RoleIcon::Search),
    ("Play", RoleIcon::Play),
    ("Package", RoleIcon::Package),
    ("Timer", RoleIcon::Timer),
    ("ShieldAlert", RoleIcon::ShieldAlert),
    ("Briefcase", RoleIcon::Briefcase),
    ("Share2", RoleIcon::Share2),
    ("HeartHandshake", RoleIcon::HeartHandshake),
];

impl RoleIcon {
    pub fn from_name(name: &str) -> Self {
        ICON_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, icon)| *icon)
            .unwrap_or_default()
    }
}

impl From<String> for RoleIcon {
    fn from(name: String) -> Self {
        RoleIcon::from_name(&name)
    }
}
