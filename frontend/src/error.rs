use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page controller to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("unknown section identifier `{0}`")]
    UnknownSection(String),
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl PageError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js { context, message }
    }
}

pub fn window() -> Result<web_sys::Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            PageError::UnknownSection("footer".to_string()).to_string(),
            "unknown section identifier `footer`"
        );
        let err = PageError::Js {
            context: "adding scroll listener",
            message: "TypeError".to_string(),
        };
        assert_eq!(err.to_string(), "adding scroll listener: TypeError");
    }
}
