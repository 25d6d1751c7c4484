use std::collections::btree_set::{self, BTreeSet};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_SELECTOR};
use crate::controller::section::Section;
use crate::controller::subscription::Subscription;
use crate::error::{self, PageError};

/// One entry from the intersection watcher, detached from the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionReport {
    pub id: String,
    pub is_intersecting: bool,
}

/// Sections that have entered the viewport at least once during this page view.
///
/// Only ever grows: a revealed section stays revealed when it scrolls back out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSections {
    revealed: BTreeSet<Section>,
}

impl VisibleSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Section> {
        self.revealed.iter()
    }

    /// Returns true if the section was not revealed before.
    pub fn reveal(&mut self, section: Section) -> bool {
        self.revealed.insert(section)
    }

    pub fn reveal_all(&mut self) -> usize {
        Section::ALL
            .into_iter()
            .filter(|section| self.reveal(*section))
            .count()
    }

    /// Folds a batch of watcher entries into the set and returns how many
    /// sections were newly revealed. Entries that are not intersecting, or
    /// whose id is not a known section, leave the set untouched.
    pub fn record<'a, I>(&mut self, reports: I) -> usize
    where
        I: IntoIterator<Item = &'a IntersectionReport>,
    {
        let mut added = 0;
        for report in reports {
            if !report.is_intersecting {
                continue;
            }
            match report.id.parse::<Section>() {
                Ok(section) => {
                    if self.reveal(section) {
                        debug!("Section revealed: {}", section);
                        added += 1;
                    }
                }
                Err(err) => debug!("Ignoring intersection entry: {}", err),
            }
        }
        added
    }
}

pub enum VisibilityAction {
    Observed(Vec<IntersectionReport>),
    RevealAll,
}

impl Reducible for VisibleSections {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let added = match action {
            VisibilityAction::Observed(reports) => next.record(&reports),
            VisibilityAction::RevealAll => next.reveal_all(),
        };
        if added == 0 {
            return self;
        }
        debug!(
            "{} of {} sections revealed: {:?}",
            next.len(),
            Section::ALL.len(),
            next.iter().collect::<Vec<_>>()
        );
        Rc::new(next)
    }
}

/// Intersection watcher settings.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// Watches every `section[id]` currently in the document. Sections added
/// later are not picked up.
pub fn observe_sections<F>(
    document: &Document,
    options: &RevealOptions,
    on_reports: F,
) -> Result<Subscription, PageError>
where
    F: Fn(Vec<IntersectionReport>) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let reports = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionReport {
                    id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            on_reports(reports);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| PageError::js("creating intersection observer", err))?;

    let sections = document
        .query_selector_all(SECTION_SELECTOR)
        .map_err(|err| PageError::js("selecting sections", err))?;
    let mut observed = 0;
    for index in 0..sections.length() {
        if let Some(element) = sections
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&element);
            observed += 1;
        }
    }
    debug!("Observing {} sections", observed);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Sections revealed so far. The watcher lives as long as the calling component.
#[hook]
pub fn use_section_visibility() -> VisibleSections {
    let visible = use_reducer(VisibleSections::new);

    {
        let dispatcher = visible.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = error::document().and_then(|document| {
                    let dispatcher = dispatcher.clone();
                    observe_sections(&document, &RevealOptions::default(), move |reports| {
                        dispatcher.dispatch(VisibilityAction::Observed(reports));
                    })
                });
                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        // Without a watcher nothing would ever reveal
                        warn!("Section tracking disabled, revealing everything: {}", err);
                        dispatcher.dispatch(VisibilityAction::RevealAll);
                        None
                    }
                };
                move || {
                    if let Some(subscription) = subscription {
                        subscription.dispose();
                    }
                }
            },
            (),
        );
    }

    (*visible).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entering(id: &str) -> IntersectionReport {
        IntersectionReport {
            id: id.to_string(),
            is_intersecting: true,
        }
    }

    fn leaving(id: &str) -> IntersectionReport {
        IntersectionReport {
            id: id.to_string(),
            is_intersecting: false,
        }
    }

    #[test]
    fn starts_empty() {
        let visible = VisibleSections::new();
        assert_eq!(visible.len(), 0);
        for section in Section::ALL {
            assert!(!visible.is_visible(section));
        }
    }

    #[test]
    fn intersecting_entries_reveal() {
        let mut visible = VisibleSections::new();
        let added = visible.record(&[
            entering("origin"),
            leaving("mission"),
        ]);
        assert_eq!(added, 1);
        assert!(visible.is_visible(Section::Origin));
        assert!(!visible.is_visible(Section::Mission));
    }

    #[test]
    fn reveal_is_permanent() {
        let mut visible = VisibleSections::new();
        visible.record(&[entering("gatherings")]);

        assert_eq!(
            visible.record(&[leaving("gatherings")]),
            0
        );
        assert!(visible.is_visible(Section::Gatherings));

        assert_eq!(
            visible.record(&[entering("gatherings")]),
            0
        );
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn set_never_shrinks() {
        let batches = vec![
            vec![entering("hero")],
            vec![
                leaving("hero"),
                entering("origin"),
            ],
            vec![leaving("origin")],
            vec![
                entering("join"),
                entering("origin"),
            ],
            vec![
                leaving("join"),
                leaving("hero"),
            ],
        ];

        let mut visible = VisibleSections::new();
        let mut previous = visible.clone();
        for batch in &batches {
            visible.record(batch);
            assert!(visible.len() >= previous.len());
            assert!(previous.iter().all(|section| visible.is_visible(*section)));
            previous = visible.clone();
        }
        assert_eq!(
            visible.iter().copied().collect::<Vec<_>>(),
            vec![Section::Hero, Section::Origin, Section::Join]
        );
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut visible = VisibleSections::new();
        assert_eq!(
            visible.record(&[
                entering("footer"),
                entering(""),
            ]),
            0
        );
        assert_eq!(visible.len(), 0);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_new() {
        let state = Rc::new(VisibleSections::new());
        let next = state.clone().reduce(VisibilityAction::Observed(vec![
            leaving("mission"),
        ]));
        assert!(Rc::ptr_eq(&state, &next));

        let revealed = next.clone().reduce(VisibilityAction::Observed(vec![
            entering("mission"),
        ]));
        assert!(!Rc::ptr_eq(&next, &revealed));
        assert!(revealed.is_visible(Section::Mission));

        let again = revealed.clone().reduce(VisibilityAction::Observed(vec![
            entering("mission"),
        ]));
        assert!(Rc::ptr_eq(&revealed, &again));
    }

    #[test]
    fn reveal_all_covers_every_section() {
        let state = Rc::new(VisibleSections::new());
        let all = state.reduce(VisibilityAction::RevealAll);
        assert_eq!(all.len(), Section::ALL.len());
        for section in Section::ALL {
            assert!(all.is_visible(section));
        }
    }

    #[test]
    fn default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.15);
        assert_eq!(options.root_margin, "-50px");
    }
}
