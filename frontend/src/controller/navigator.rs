use log::{debug, warn};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::controller::section::Section;
use crate::error;

/// The two document capabilities navigation needs.
pub trait SectionDocument {
    type Element;

    fn find_section(&self, id: &str) -> Option<Self::Element>;

    fn smooth_scroll_to(&self, element: &Self::Element);
}

impl SectionDocument for Document {
    type Element = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn smooth_scroll_to(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scrolls to the element with the given id. A missing element is
/// not an error; nothing happens and false is returned.
pub fn scroll_to_section<D>(document: &D, id: &str) -> bool
where
    D: SectionDocument + ?Sized,
{
    match document.find_section(id) {
        Some(element) => {
            document.smooth_scroll_to(&element);
            true
        }
        None => {
            debug!("No element for section `{}`, skipping scroll", id);
            false
        }
    }
}

pub fn navigate_to(section: Section) {
    match error::document() {
        Ok(document) => {
            if scroll_to_section(&document, section.id()) {
                debug!("Scrolling to {}", section);
            }
        }
        Err(err) => warn!("Cannot navigate to {}: {}", section, err),
    }
}

/// Click handler for a button that jumps to `section`.
pub fn link_to<E: 'static>(on_navigate: &Callback<Section>, section: Section) -> Callback<E> {
    on_navigate.reform(move |_: E| section)
}

#[hook]
pub fn use_section_navigator() -> Callback<Section> {
    use_callback(|section: Section, _| navigate_to(section), ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDocument {
        ids: Vec<&'static str>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn with_sections(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionDocument for FakeDocument {
        type Element = String;

        fn find_section(&self, id: &str) -> Option<String> {
            self.ids
                .iter()
                .find(|known| **known == id)
                .map(|known| known.to_string())
        }

        fn smooth_scroll_to(&self, element: &String) {
            self.requests.borrow_mut().push(element.clone());
        }
    }

    #[test]
    fn known_section_scrolls_once() {
        let document = FakeDocument::with_sections(&["hero", "origin", "join"]);
        assert!(scroll_to_section(&document, "join"));
        assert_eq!(*document.requests.borrow(), vec!["join".to_string()]);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let document = FakeDocument::with_sections(&["hero"]);
        assert!(!scroll_to_section(&document, "gatherings"));
        assert!(!scroll_to_section(&document, ""));
        assert!(document.requests.borrow().is_empty());
    }

    #[test]
    fn link_emits_its_section() {
        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        let on_navigate = {
            let seen = seen.clone();
            Callback::from(move |section: Section| seen.borrow_mut().push(section))
        };

        let join = link_to::<()>(&on_navigate, Section::Join);
        let origin = link_to::<()>(&on_navigate, Section::Origin);
        join.emit(());
        origin.emit(());
        join.emit(());

        assert_eq!(
            *seen.borrow(),
            vec![Section::Join, Section::Origin, Section::Join]
        );
    }

    #[test]
    fn each_navigation_is_its_own_request() {
        let document = FakeDocument::with_sections(&["origin", "mission"]);
        scroll_to_section(&document, Section::Origin.id());
        scroll_to_section(&document, Section::Mission.id());
        scroll_to_section(&document, Section::Origin.id());
        assert_eq!(
            *document.requests.borrow(),
            vec!["origin".to_string(), "mission".to_string(), "origin".to_string()]
        );
    }
}
