use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ThemeMode {
    /// One asset set shared by every theme.
    All,
    /// Distinct asset sets for light and dark themes.
    Split,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Split => "SPLIT",
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::All
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "SPLIT" => Ok(Self::Split),
            _ => Err(format!("invalid theme mode: {}", s)),
        }
    }
}

/// The six media buckets of a hero section: background and sub media, each
/// split across the all/light/dark variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBuckets {
    pub background_all: Vec<i64>,
    pub background_light: Vec<i64>,
    pub background_dark: Vec<i64>,
    pub sub_all: Vec<i64>,
    pub sub_light: Vec<i64>,
    pub sub_dark: Vec<i64>,
}

impl HeroBuckets {
    /// Force the buckets of the inactive theme mode empty. The ALL set and
    /// the light/dark split are mutually exclusive per section, so whatever
    /// the client still held locally for the other mode is discarded.
    pub fn normalized(mut self, mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::All => {
                self.background_light.clear();
                self.background_dark.clear();
                self.sub_light.clear();
                self.sub_dark.clear();
            }
            ThemeMode::Split => {
                self.background_all.clear();
                self.sub_all.clear();
            }
        }
        self
    }

    /// Edit-mode merge: pre-existing ids keep their order, freshly uploaded
    /// ids are appended after them.
    pub fn merged_onto(self, existing: &HeroBuckets) -> Self {
        fn merge(existing: &[i64], new: Vec<i64>) -> Vec<i64> {
            let mut out = existing.to_vec();
            for id in new {
                if !out.contains(&id) {
                    out.push(id);
                }
            }
            out
        }

        Self {
            background_all: merge(&existing.background_all, self.background_all),
            background_light: merge(&existing.background_light, self.background_light),
            background_dark: merge(&existing.background_dark, self.background_dark),
            sub_all: merge(&existing.sub_all, self.sub_all),
            sub_light: merge(&existing.sub_light, self.sub_light),
            sub_dark: merge(&existing.sub_dark, self.sub_dark),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.background_all.is_empty()
            && self.background_light.is_empty()
            && self.background_dark.is_empty()
            && self.sub_all.is_empty()
            && self.sub_light.is_empty()
            && self.sub_dark.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HeroSection {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub theme_mode: ThemeMode,
    pub is_active: bool,
    pub show_on_homepage: bool,
    pub background_all: Json<Vec<i64>>,
    pub background_light: Json<Vec<i64>>,
    pub background_dark: Json<Vec<i64>>,
    pub sub_all: Json<Vec<i64>>,
    pub sub_light: Json<Vec<i64>>,
    pub sub_dark: Json<Vec<i64>>,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl HeroSection {
    pub fn buckets(&self) -> HeroBuckets {
        HeroBuckets {
            background_all: self.background_all.0.clone(),
            background_light: self.background_light.0.clone(),
            background_dark: self.background_dark.0.clone(),
            sub_all: self.sub_all.0.clone(),
            sub_light: self.sub_light.0.clone(),
            sub_dark: self.sub_dark.0.clone(),
        }
    }

    /// The background ids a public page should render for the given theme.
    pub fn background_for_theme(&self, dark: bool) -> &[i64] {
        match self.theme_mode {
            ThemeMode::All => &self.background_all.0,
            ThemeMode::Split if dark => &self.background_dark.0,
            ThemeMode::Split => &self.background_light.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeroSectionCreate {
    pub title: String,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub theme_mode: ThemeMode,
    pub is_active: bool,
    pub show_on_homepage: bool,
    pub buckets: HeroBuckets,
}

#[derive(Debug, Clone, Default)]
pub struct HeroSectionUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub theme_mode: Option<ThemeMode>,
    pub is_active: Option<bool>,
    pub show_on_homepage: Option<bool>,
    pub buckets: Option<HeroBuckets>,
}
