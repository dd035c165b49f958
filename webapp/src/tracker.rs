use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, error};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Event, Window};

use portfolio_common::{RegionBounds, Section, SectionTracker, TrackerConfig};

use crate::common::{browser_document, browser_window};

// RegionSample
//
// the bounding box of every section region that exists in the document, taken at
// the moment a scroll event fires.  missing regions are simply absent
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionSample {
    regions: Vec<(Section, RegionBounds)>,
}

impl RegionSample {
    pub fn measure(document: &Document) -> Self {
        Section::ALL
            .into_iter()
            .filter_map(|section| {
                let element = document.get_element_by_id(section.id())?;
                let rect = element.get_bounding_client_rect();

                Some((section, RegionBounds::new(rect.top(), rect.bottom())))
            })
            .collect()
    }

    pub fn bounds(&self, section: Section) -> Option<RegionBounds> {
        self.regions
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, bounds)| *bounds)
    }
}

impl FromIterator<(Section, RegionBounds)> for RegionSample {
    fn from_iter<I: IntoIterator<Item = (Section, RegionBounds)>>(iter: I) -> Self {
        RegionSample {
            regions: iter.into_iter().collect(),
        }
    }
}

// ScrollListener
//
// owns a window scroll listener and removes it when dropped.  the closure has to
// stay alive for as long as the browser may call it, so it lives in here too
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut(Event)>,
}

impl ScrollListener {
    pub fn install<F>(mut on_scroll: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = browser_window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_scroll());

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            error!("failed to install scroll listener: {err:?}");
            return None;
        }

        debug!("installed scroll listener");
        Some(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("removed scroll listener"),
            Err(err) => error!("failed to remove scroll listener: {err:?}"),
        }
    }
}

// ActiveSection
//
// read-only view of the section the tracker currently considers in view.  only the
// tracker coroutine in use_section_tracker can change it
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveSection(ReadOnlySignal<Section>);

impl ActiveSection {
    pub fn get(&self) -> Section {
        *self.0.read()
    }

    pub fn is(&self, section: Section) -> bool {
        self.get() == section
    }
}

pub fn use_active_section() -> ActiveSection {
    use_context::<ActiveSection>()
}

// SectionTracking
//
// what use_section_tracker hands back to its caller: the published section, and
// the way in for measurements.  the scroll listener is just one producer of samples
#[derive(Clone, Copy)]
pub struct SectionTracking {
    pub active: ActiveSection,
    sampler: Coroutine<RegionSample>,
}

impl SectionTracking {
    pub fn submit(&self, sample: RegionSample) {
        self.sampler.send(sample)
    }
}

// use_section_tracker
//
// tracks which section is in view and provides it to every component below the
// caller as an ActiveSection.  scroll events measure the page and hand the sample to
// a coroutine that owns the SectionTracker, so there is exactly one writer and it
// only publishes when the section changes.  the listener is held in hook storage and
// is removed when the calling component is dropped
pub fn use_section_tracker(config: TrackerConfig) -> SectionTracking {
    let mut active = use_signal(|| Section::Home);

    let sampler = use_coroutine(move |mut samples: UnboundedReceiver<RegionSample>| {
        let config = config.clone();

        async move {
            let mut tracker = SectionTracker::new(config);

            while let Some(sample) = samples.next().await {
                if let Some(section) = tracker.observe(|section| sample.bounds(section)) {
                    active.set(section);
                }
            }
        }
    });

    let tracking = SectionTracking {
        active: use_context_provider(|| ActiveSection(ReadOnlySignal::new(active))),
        sampler,
    };

    use_hook(move || {
        let Some(document) = browser_document() else {
            debug!("no document available, section tracking disabled");
            return None;
        };

        ScrollListener::install(move || tracking.submit(RegionSample::measure(&document)))
            .map(Rc::new)
    });

    // a deep link like /#skills lands mid-page, so measure once after the first
    // render instead of waiting for a scroll
    use_effect(move || {
        if let Some(document) = browser_document() {
            tracking.submit(RegionSample::measure(&document));
        }
    });

    tracking
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, time::Duration};

    use super::*;

    fn sample(regions: &[(Section, f64, f64)]) -> RegionSample {
        regions
            .iter()
            .map(|(section, top, bottom)| (*section, RegionBounds::new(*top, *bottom)))
            .collect()
    }

    #[derive(Clone)]
    struct HarnessProps {
        samples: Vec<RegionSample>,
        seen: Rc<RefCell<Vec<Section>>>,
    }

    // mounts the tracker the way the nav bar does, feeds it samples, and records
    // every section a descendant renders with
    fn harness(props: HarnessProps) -> Element {
        let tracking = use_section_tracker(TrackerConfig::default());

        use_hook(move || {
            for sample in props.samples {
                tracking.submit(sample);
            }
        });

        rsx! {
            Reader { seen: props.seen }
        }
    }

    #[component]
    fn Reader(seen: Rc<RefCell<Vec<Section>>>) -> Element {
        let active = use_active_section();
        seen.borrow_mut().push(active.get());

        rsx! {
            span { "{active.get()}" }
        }
    }

    async fn mount(samples: Vec<RegionSample>) -> (VirtualDom, Vec<Section>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(
            harness,
            HarnessProps {
                samples,
                seen: seen.clone(),
            },
        );

        dom.rebuild_in_place();

        // the coroutine never finishes, so stop once nothing new turns up
        for _ in 0..4 {
            if tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            dom.render_immediate_to_vec();
        }

        let seen = seen.borrow().clone();
        (dom, seen)
    }

    #[test]
    fn sample_lookup_skips_missing_regions() {
        let sample: RegionSample = [
            (Section::Home, RegionBounds::new(-800.0, 0.0)),
            (Section::Skills, RegionBounds::new(0.0, 600.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(sample.bounds(Section::Skills), Some(RegionBounds::new(0.0, 600.0)));
        assert_eq!(sample.bounds(Section::About), None);
    }

    #[test]
    fn tracker_consumes_samples() {
        let mut tracker = SectionTracker::default();

        let first: RegionSample = [(Section::Projects, RegionBounds::new(40.0, 900.0))]
            .into_iter()
            .collect();
        let between = RegionSample::default();

        assert_eq!(tracker.observe(|s| first.bounds(s)), Some(Section::Projects));
        assert_eq!(tracker.observe(|s| between.bounds(s)), None);
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[tokio::test]
    async fn mounts_at_home_without_a_browser() {
        let (dom, seen) = mount(Vec::new()).await;
        assert_eq!(seen, vec![Section::Home]);

        // nothing was installed, so tearing down is quiet too
        drop(dom);
    }

    #[tokio::test]
    async fn samples_reach_descendants() {
        let samples = vec![
            sample(&[(Section::About, 50.0, 700.0)]),
            sample(&[(Section::Projects, 0.0, 400.0)]),
            sample(&[(Section::Skills, -20.0, 600.0)]),
        ];

        let (_dom, seen) = mount(samples).await;
        assert_eq!(seen.first(), Some(&Section::Home));
        assert_eq!(seen.last(), Some(&Section::Skills));
    }

    #[tokio::test]
    async fn unchanged_section_does_not_rerender() {
        let samples = vec![
            sample(&[(Section::Home, -50.0, 700.0)]),
            RegionSample::default(),
            sample(&[(Section::About, 300.0, 900.0)]),
            sample(&[(Section::Home, 0.0, 800.0)]),
        ];

        let (_dom, seen) = mount(samples).await;
        assert_eq!(seen, vec![Section::Home]);
    }
}
