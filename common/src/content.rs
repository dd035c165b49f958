use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// portfolio content
//
// these structs mirror the tables in portfolio.toml.  they are plain data; the
// only logic here is validation and a couple of small display helpers

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,

    #[serde(default)]
    pub about: Vec<String>,

    // when missing, the about section shows an initials avatar instead
    #[serde(default)]
    pub photo: Option<String>,
}

impl Profile {
    // first letter of the first two words of the name, uppercased
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        non_empty("profile.name", &self.name)?;
        non_empty("profile.role", &self.role)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Linkedin,
    Email,
    Github,
    Website,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn url(&self) -> String {
        normalize_href(&self.href)
    }

    pub fn validate(&self) -> Result<()> {
        non_empty("label", &self.label)?;
        non_empty("href", &self.href)?;

        if self.kind == SocialKind::Email && !self.href.starts_with("mailto:") {
            return Err(anyhow::Error::msg(format!(
                "email link {} must use a mailto: href",
                self.label
            )));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    pub image: String,
    pub live_url: String,
    pub repo_url: String,
}

impl Project {
    pub fn validate(&self) -> Result<()> {
        non_empty("title", &self.title)?;
        non_empty("live_url", &self.live_url)?;
        non_empty("repo_url", &self.repo_url)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    pub fn validate(&self) -> Result<()> {
        non_empty("title", &self.title)?;

        for skill in &self.skills {
            non_empty("skill name", &skill.name)?;

            if skill.percentage > 100 {
                return Err(anyhow::Error::msg(format!(
                    "skill {} has percentage {}, expected 0-100",
                    skill.name, skill.percentage
                )));
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Contact {
    pub intro: String,

    #[serde(default)]
    pub items: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl FooterLink {
    pub fn url(&self) -> String {
        normalize_href(&self.href)
    }

    pub fn validate(&self) -> Result<()> {
        non_empty("label", &self.label)?;
        non_empty("href", &self.href)?;
        Ok(())
    }
}

// links like "www.linkedin.com/in/someone" or "localhost:3000" have no scheme and
// would otherwise be resolved relative to the page (or read as a bogus scheme), so
// treat them as https.  fragments, relative paths and real schemes pass through
pub fn normalize_href(href: &str) -> String {
    let href = href.trim();

    if has_scheme(href) || href.starts_with('#') || href.starts_with('/') || href.starts_with('.') {
        href.to_owned()
    } else {
        format!("https://{href}")
    }
}

// schemes that are not followed by "//"
const OPAQUE_SCHEMES: [&str; 2] = ["mailto", "tel"];

// a scheme starts with a letter and is followed either by "//" or is one of the
// opaque schemes; anything else before a colon is a host with a port
fn has_scheme(href: &str) -> bool {
    let Some((scheme, rest)) = href.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    well_formed
        && (rest.starts_with("//")
            || OPAQUE_SCHEMES
                .iter()
                .any(|opaque| scheme.eq_ignore_ascii_case(opaque)))
}

fn non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow::Error::msg(format!("{field} must not be empty")));
    }
    Ok(())
}

pub(crate) fn validate_all<T, F>(table: &str, items: &[T], check: F) -> Result<()>
where
    F: Fn(&T) -> Result<()>,
{
    for (i, item) in items.iter().enumerate() {
        check(item).with_context(|| format!("invalid {table} entry {i}"))?;
    }
    Ok(())
}
