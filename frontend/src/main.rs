use yew::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod controller {
    pub mod navigator;
    pub mod scroll;
    pub mod section;
    pub mod subscription;
    pub mod visibility;
}
mod components {
    pub mod icon;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use config::images;
use content::NAV_LINKS;
use controller::{
    navigator::{link_to, use_section_navigator},
    scroll::use_scrolled,
    section::Section,
    visibility::use_section_visibility,
};
use pages::landing::Landing;


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, on_navigate } = props;

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src={images::LOGO} alt="Vox Pulchra" />
                </div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button class="nav-link" key={link.label} onclick={link_to(on_navigate, link.target)}>
                            {link.label}
                        </button>
                    }) }
                </div>
                <button class="button-gold nav-cta" onclick={link_to(on_navigate, Section::Join)}>
                    {"Join Vox Pulchra"}
                </button>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: hsla(260, 30%, 8%, 0.9);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img {
                    height: 2.5rem;
                    width: auto;
                    display: block;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    font-size: 0.9rem;
                    color: hsl(260, 10%, 65%);
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: hsl(43, 70%, 55%);
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    // Page-level controller state, handed down to the renderers
    let scrolled = use_scrolled();
    let visible = use_section_visibility();
    let navigate = use_section_navigator();

    html! {
        <>
            <Nav scrolled={scrolled} on_navigate={navigate.clone()} />
            <Landing visible={visible} on_navigate={navigate} />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Vox Pulchra");
    yew::Renderer::<App>::new().render();
}
