use std::str::FromStr;

use crate::foundation::error::{ScrollweaveError, ScrollweaveResult};

/// A page of the site.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// Landing page.
    #[default]
    Home,
    /// Project index.
    Work,
    /// About the agency.
    Agency,
    /// Contact form.
    Contact,
}

impl PageId {
    /// Every page in navigation order.
    pub const ALL: [PageId; 4] = [Self::Home, Self::Work, Self::Agency, Self::Contact];

    /// Lowercase identifier used in links and config keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Agency => "agency",
            Self::Contact => "contact",
        }
    }
}

impl FromStr for PageId {
    type Err = ScrollweaveError;

    fn from_str(s: &str) -> ScrollweaveResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "" | "/" => Ok(Self::Home),
            "work" => Ok(Self::Work),
            "agency" => Ok(Self::Agency),
            "contact" => Ok(Self::Contact),
            other => Err(ScrollweaveError::navigation(format!("unknown page '{other}'"))),
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
