use std::collections::HashSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::section::Section;

pub const DEFAULT_REFERENCE_LINE: f64 = 100.0;

// vertical extent of a section's region, in pixels relative to the top of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RegionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        RegionBounds { top, bottom }
    }

    // both edges are inclusive, so a region whose top sits exactly on the line counts
    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && line <= self.bottom
    }
}

// tracker tunables
//
// reference_line is the distance from the top of the viewport that a region must
// straddle to be considered in view.  priority is the scan order; the first section
// in it that straddles the line wins, and anything left out of it is never selected
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub reference_line: f64,
    pub priority: Vec<Section>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            reference_line: DEFAULT_REFERENCE_LINE,
            priority: Section::ALL.to_vec(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.reference_line.is_finite() {
            return Err(anyhow::Error::msg(format!(
                "tracker reference_line must be finite, got {}",
                self.reference_line
            )));
        }

        if self.priority.is_empty() {
            return Err(anyhow::Error::msg("tracker priority must list at least one section"));
        }

        let mut seen = HashSet::new();
        for section in &self.priority {
            if !seen.insert(section) {
                return Err(anyhow::Error::msg(format!(
                    "tracker priority lists {section} more than once"
                )));
            }
        }

        Ok(())
    }
}

// select_section
//
// scan the sections in priority order and return the first whose region straddles
// the reference line.  lookup returns None for regions that are not in the document,
// which are skipped.  None means nothing matched and the caller should keep whatever
// it had before
pub fn select_section<F>(config: &TrackerConfig, lookup: F) -> Option<Section>
where
    F: Fn(Section) -> Option<RegionBounds>,
{
    config.priority.iter().copied().find(|section| {
        lookup(*section)
            .map(|bounds| bounds.contains(config.reference_line))
            .unwrap_or(false)
    })
}

// SectionTracker
//
// the single writer for the active section.  it starts at home and only moves when
// a scan finds a match, so a scroll position between sections leaves the last
// highlight in place
#[derive(Clone, Debug)]
pub struct SectionTracker {
    config: TrackerConfig,
    active: Section,
}

impl SectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        SectionTracker {
            config,
            active: Section::Home,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    // returns the new section only if it differs from the previous one, so callers
    // can skip publishing (and re-rendering) when nothing moved
    #[instrument(level = "trace", skip(self, lookup))]
    pub fn observe<F>(&mut self, lookup: F) -> Option<Section>
    where
        F: Fn(Section) -> Option<RegionBounds>,
    {
        let next = select_section(&self.config, lookup)?;

        if next == self.active {
            return None;
        }

        debug!("active section changed from {} to {next}", self.active);
        self.active = next;
        Some(next)
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        SectionTracker::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn layout(regions: &[(Section, f64, f64)]) -> HashMap<Section, RegionBounds> {
        regions
            .iter()
            .map(|(section, top, bottom)| (*section, RegionBounds::new(*top, *bottom)))
            .collect()
    }

    // a page where every section is 800px tall, scrolled down by offset pixels
    fn stacked(offset: f64) -> HashMap<Section, RegionBounds> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let top = i as f64 * 800.0 - offset;
                (*section, RegionBounds::new(top, top + 800.0))
            })
            .collect()
    }

    #[test]
    fn starts_at_home() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), Section::Home);
        assert_eq!(TrackerConfig::default().reference_line, 100.0);
    }

    #[test]
    fn single_straddling_region_is_selected() {
        let regions = layout(&[
            (Section::Home, -900.0, -100.0),
            (Section::About, 80.0, 820.0),
            (Section::Projects, 820.0, 1600.0),
        ]);

        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.observe(|s| regions.get(&s).copied()), Some(Section::About));
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn earlier_section_wins_on_overlap() {
        let regions = layout(&[
            (Section::Projects, 0.0, 150.0),
            (Section::Skills, 90.0, 900.0),
        ]);

        let selected = select_section(&TrackerConfig::default(), |s| regions.get(&s).copied());
        assert_eq!(selected, Some(Section::Projects));
    }

    #[test]
    fn shared_edge_goes_to_earlier_section() {
        let regions = layout(&[
            (Section::About, -600.0, 100.0),
            (Section::Projects, 100.0, 900.0),
        ]);

        let selected = select_section(&TrackerConfig::default(), |s| regions.get(&s).copied());
        assert_eq!(selected, Some(Section::About));
    }

    #[test]
    fn no_match_keeps_previous() {
        let mut tracker = SectionTracker::default();
        let about = layout(&[(Section::About, 50.0, 700.0)]);
        tracker.observe(|s| about.get(&s).copied());

        // everything below the line, as when scrolled to the very top of a page with a tall header
        let below = layout(&[
            (Section::Home, 200.0, 900.0),
            (Section::About, 900.0, 1700.0),
        ]);
        assert_eq!(tracker.observe(|s| below.get(&s).copied()), None);
        assert_eq!(tracker.active(), Section::About);

        // and repeating the no-match changes nothing
        assert_eq!(tracker.observe(|s| below.get(&s).copied()), None);
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn top_of_page_without_match_stays_home() {
        let regions = layout(&[
            (Section::Home, 150.0, 950.0),
            (Section::About, 950.0, 1750.0),
        ]);

        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.observe(|s| regions.get(&s).copied()), None);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn missing_regions_are_skipped() {
        let regions = layout(&[(Section::Contact, 0.0, 400.0)]);

        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.observe(|s| regions.get(&s).copied()), Some(Section::Contact));

        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.observe(|_| None), None);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn unchanged_selection_is_not_reported() {
        let regions = stacked(0.0);
        let mut tracker = SectionTracker::default();

        assert_eq!(tracker.observe(|s| regions.get(&s).copied()), None);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn sequential_events_follow_last_geometry() {
        let mut tracker = SectionTracker::default();

        for offset in [300.0, 900.0, 1750.0, 2500.0, 3300.0, 1000.0] {
            let regions = stacked(offset);
            tracker.observe(|s| regions.get(&s).copied());
        }

        // offset 1000: about spans [-200, 600]
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn scrolling_through_the_page_visits_each_section() {
        let mut tracker = SectionTracker::default();
        let mut visited = vec![tracker.active()];

        let mut offset = 0.0;
        while offset < 4000.0 {
            let regions = stacked(offset);
            if let Some(section) = tracker.observe(|s| regions.get(&s).copied()) {
                visited.push(section);
            }
            offset += 50.0;
        }

        assert_eq!(visited, Section::ALL.to_vec());
    }

    #[test]
    fn custom_line_and_priority_are_honored() {
        let config = TrackerConfig {
            reference_line: 400.0,
            priority: vec![Section::Skills, Section::Projects],
        };
        let regions = layout(&[
            (Section::Home, 0.0, 1000.0),
            (Section::Projects, 300.0, 500.0),
            (Section::Skills, 350.0, 900.0),
        ]);

        // home straddles the line too, but is not in the priority list
        assert_eq!(
            select_section(&config, |s| regions.get(&s).copied()),
            Some(Section::Skills)
        );
    }

    #[test]
    fn config_validation() {
        assert!(TrackerConfig::default().validate().is_ok());

        let infinite = TrackerConfig {
            reference_line: f64::INFINITY,
            ..TrackerConfig::default()
        };
        assert!(infinite.validate().is_err());

        let nan = TrackerConfig {
            reference_line: f64::NAN,
            ..TrackerConfig::default()
        };
        assert!(nan.validate().is_err());

        let empty = TrackerConfig {
            priority: Vec::new(),
            ..TrackerConfig::default()
        };
        assert!(empty.validate().is_err());

        let duplicate = TrackerConfig {
            priority: vec![Section::Home, Section::About, Section::Home],
            ..TrackerConfig::default()
        };
        let err = duplicate.validate().unwrap_err();
        assert!(err.to_string().contains("home"));
    }
}
