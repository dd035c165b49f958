use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    content::{Contact, FooterLink, Profile, Project, SkillGroup, SocialLink, validate_all},
    theme::{Theme, Variant},
    tracker::TrackerConfig,
};

// the portfolio document shipped with the webapp
//
// the wasm target has no filesystem, so the document is compiled in and parsed
// once at startup
pub const BUNDLED_CONFIG: &str = include_str!("../portfolio.toml");

// portfolio configuration
//
// everything the page renders, plus the handful of knobs that change how it
// renders.  content tables map one-to-one onto the page sections
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub tracker: TrackerConfig,

    pub profile: Profile,

    #[serde(default)]
    pub socials: Vec<SocialLink>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,

    pub contact: Contact,

    #[serde(default)]
    pub footer_links: Vec<FooterLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub variant: Variant,

    // used when the visitor has no stored preference
    pub default_theme: Theme,

    // text shown in the nav bar; falls back to the profile name
    pub brand: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            variant: Variant::Polished,
            default_theme: Theme::Light,
            brand: None,
        }
    }
}

impl PortfolioConfig {
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED_CONFIG).context("failed to load bundled portfolio configuration")
    }

    #[instrument(level = Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing portfolio configuration");

        let config: PortfolioConfig =
            toml::from_str(doc).context("failed to parse portfolio configuration")?;

        config.validate()?;

        debug!(
            projects = config.projects.len(),
            skill_groups = config.skill_groups.len(),
            "successfully parsed portfolio configuration"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tracker.validate().context("invalid [tracker] table")?;
        self.profile.validate().context("invalid [profile] table")?;

        validate_all("socials", &self.socials, SocialLink::validate)?;
        validate_all("projects", &self.projects, Project::validate)?;
        validate_all("skill_groups", &self.skill_groups, SkillGroup::validate)?;
        validate_all("contact.items", &self.contact.items, SocialLink::validate)?;
        validate_all("footer_links", &self.footer_links, FooterLink::validate)?;

        Ok(())
    }

    pub fn brand(&self) -> &str {
        self.site.brand.as_deref().unwrap_or(&self.profile.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{section::Section, tracker::DEFAULT_REFERENCE_LINE};

    const MINIMAL: &str = r#"
        [profile]
        name = "Jane Doe"
        role = "Developer"
        tagline = "Builds things"

        [contact]
        intro = "Say hi"
    "#;

    #[test]
    fn bundled_config_is_valid() {
        let config = PortfolioConfig::bundled().unwrap();

        assert_eq!(config.tracker.reference_line, DEFAULT_REFERENCE_LINE);
        assert_eq!(config.tracker.priority, Section::ALL.to_vec());
        assert_eq!(config.projects.len(), 3);
        assert_eq!(config.skill_groups.len(), 2);
        assert!(!config.socials.is_empty());
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let config = PortfolioConfig::from_toml(MINIMAL).unwrap();

        assert_eq!(config.site, SiteConfig::default());
        assert_eq!(config.tracker, TrackerConfig::default());
        assert!(config.projects.is_empty());
        assert_eq!(config.brand(), "Jane Doe");
    }

    #[test]
    fn tracker_table_is_configurable() {
        let doc = format!(
            "{MINIMAL}\n[tracker]\nreference_line = 64.0\npriority = [\"contact\", \"home\"]\n"
        );
        let config = PortfolioConfig::from_toml(&doc).unwrap();

        assert_eq!(config.tracker.reference_line, 64.0);
        assert_eq!(config.tracker.priority, vec![Section::Contact, Section::Home]);
    }

    #[test]
    fn site_table_is_configurable() {
        let doc = format!(
            "[site]\nvariant = \"classic\"\ndefault_theme = \"dark\"\nbrand = \"JD\"\n{MINIMAL}"
        );
        let config = PortfolioConfig::from_toml(&doc).unwrap();

        assert_eq!(config.site.variant, Variant::Classic);
        assert_eq!(config.site.default_theme, Theme::Dark);
        assert_eq!(config.brand(), "JD");
    }

    #[test]
    fn unknown_priority_section_is_rejected() {
        let doc = format!("{MINIMAL}\n[tracker]\npriority = [\"blog\"]\n");
        assert!(PortfolioConfig::from_toml(&doc).is_err());
    }

    #[test]
    fn duplicate_priority_is_rejected() {
        let doc = format!("{MINIMAL}\n[tracker]\npriority = [\"home\", \"home\"]\n");
        let err = PortfolioConfig::from_toml(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("[tracker]"));
    }

    #[test]
    fn out_of_range_skill_is_rejected() {
        let doc = format!(
            "{MINIMAL}\n[[skill_groups]]\ntitle = \"Frontend\"\nskills = [{{ name = \"CSS\", percentage = 140 }}]\n"
        );
        let err = PortfolioConfig::from_toml(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("skill_groups entry 0"));
    }

    #[test]
    fn blank_footer_link_is_rejected() {
        let doc = format!(
            "{MINIMAL}\n[[footer_links]]\nlabel = \"Home\"\nhref = \"#home\"\n\n[[footer_links]]\nlabel = \"\"\nhref = \"#contact\"\n"
        );
        let err = PortfolioConfig::from_toml(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("footer_links entry 1"));
    }

    #[test]
    fn missing_profile_is_a_parse_error() {
        let err = PortfolioConfig::from_toml("[contact]\nintro = \"hi\"\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
