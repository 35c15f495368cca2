use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of visual concept categories understood by the engine.
///
/// The taxonomy maps each category to a concept-name-keyed table; extraction,
/// candidate building and scoring all key off this enum rather than free-form
/// strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Style,
    Mood,
    Composition,
    Color,
    Lighting,
    Subject,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Style,
        Category::Mood,
        Category::Composition,
        Category::Color,
        Category::Lighting,
        Category::Subject,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Style => "style",
            Category::Mood => "mood",
            Category::Composition => "composition",
            Category::Color => "color",
            Category::Lighting => "lighting",
            Category::Subject => "subject",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
