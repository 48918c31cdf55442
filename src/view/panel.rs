// src/view/panel.rs
use serde::Serialize;

/// Independent result surfaces of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    JobAnalysis,
    CompanySearch,
    PlatformIntegration,
}

impl Panel {
    /// DOM id of the element the fragment replaces
    pub fn target_id(&self) -> &'static str {
        match self {
            Panel::JobAnalysis => "results",
            Panel::CompanySearch => "company-results",
            Panel::PlatformIntegration => "platform-results",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Panel::JobAnalysis => "job",
            Panel::CompanySearch => "company",
            Panel::PlatformIntegration => "platform",
        }
    }

    /// Unknown or missing slugs address the job analysis panel
    pub fn from_slug(slug: Option<&str>) -> Self {
        match slug {
            Some("company") => Panel::CompanySearch,
            Some("platform") => Panel::PlatformIntegration,
            _ => Panel::JobAnalysis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Error,
}

/// Rendered HTML plus how it should be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub tone: Tone,
    pub html: String,
}

impl Fragment {
    pub fn success(html: String) -> Self {
        Self {
            tone: Tone::Success,
            html,
        }
    }

    pub fn info(html: String) -> Self {
        Self {
            tone: Tone::Info,
            html,
        }
    }

    pub fn error(html: String) -> Self {
        Self {
            tone: Tone::Error,
            html,
        }
    }
}

/// Outcome of one action, addressed to the panel it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelUpdate {
    pub panel: Panel,
    pub fragment: Fragment,
}

impl PanelUpdate {
    pub fn new(panel: Panel, fragment: Fragment) -> Self {
        Self { panel, fragment }
    }

    pub fn is_error(&self) -> bool {
        self.fragment.tone == Tone::Error
    }

    pub fn html(&self) -> &str {
        &self.fragment.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip_and_fallback() {
        for panel in [Panel::JobAnalysis, Panel::CompanySearch, Panel::PlatformIntegration] {
            assert_eq!(Panel::from_slug(Some(panel.slug())), panel);
        }
        assert_eq!(Panel::from_slug(Some("sidebar")), Panel::JobAnalysis);
        assert_eq!(Panel::from_slug(None), Panel::JobAnalysis);
    }
}
