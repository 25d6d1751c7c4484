use log::Level;

/// Vertical offset (px) past which the navigation bar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Share of a section that must be inside the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "-50px";

pub const SECTION_SELECTOR: &str = "section[id]";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub mod contact {
    pub const WHATSAPP_URL: &str = "https://wa.me/07045926683";
    pub const INSTAGRAM_URL: &str = "https://instagram.com/vox_pulchra";
    pub const INSTAGRAM_HANDLE: &str = "@vox_pulchra";
    pub const PHONE_DISPLAY: &str = "07045926683";
    pub const PHONE_TEL: &str = "tel:07045926683";
}

pub mod images {
    pub const LOGO: &str = "/images/F74FF260-CC68-44BE-8293-40C936E1249C.jpg";
    pub const FOUNDER: &str = "/images/58A8FDA0-D9B8-4038-BF61-78BC388384FF.jpg";
    pub const WORSHIP: &str = "/images/DCC24672-025D-4125-8C74-43B36DF0ED89.jpg";
    pub const JOURNEY: &str = "/images/7E65C332-CFD8-4F0A-95CF-59856A3485F3.jpg";
}
