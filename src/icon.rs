//! Icon Resolution
//!
//! Menu items carry icon names as plain strings. Turning a name into
//! something drawable is up to an [`IconResolver`].

/// A resolved icon from some icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    /// Glyph used by text renderers
    pub glyph: char,
}

/// Maps icon names to icons of a concrete set
pub trait IconResolver {
    fn resolve(&self, name: &str) -> Option<Icon>;

    /// Icon used when a name is unknown
    fn fallback(&self) -> Icon;

    fn resolve_or_fallback(&self, name: &str) -> Icon {
        self.resolve(name).unwrap_or_else(|| self.fallback())
    }

    /// Every name this set understands, for icon pickers
    fn names(&self) -> Vec<&'static str>;
}

/// The icon names offered by the menu editor
#[derive(Debug, Clone, Copy, Default)]
pub struct LucideIcons;

const LUCIDE: [Icon; 16] = [
    Icon { name: "BarChart3", glyph: '▥' },
    Icon { name: "Database", glyph: '⛁' },
    Icon { name: "Plus", glyph: '+' },
    Icon { name: "Upload", glyph: '↑' },
    Icon { name: "Download", glyph: '↓' },
    Icon { name: "Users", glyph: '☺' },
    Icon { name: "Settings", glyph: '⚙' },
    Icon { name: "FileText", glyph: '☰' },
    Icon { name: "Calendar", glyph: '▦' },
    Icon { name: "Mail", glyph: '✉' },
    Icon { name: "Bell", glyph: '♪' },
    Icon { name: "Home", glyph: '⌂' },
    Icon { name: "Archive", glyph: '▤' },
    Icon { name: "MessageSquare", glyph: '▭' },
    Icon { name: "Shield", glyph: '⛨' },
    Icon { name: "Palette", glyph: '◐' },
];

impl IconResolver for LucideIcons {
    fn resolve(&self, name: &str) -> Option<Icon> {
        LUCIDE.iter().find(|icon| icon.name == name).copied()
    }

    fn fallback(&self) -> Icon {
        LUCIDE[0]
    }

    fn names(&self) -> Vec<&'static str> {
        LUCIDE.iter().map(|icon| icon.name).collect()
    }
}
