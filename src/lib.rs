//! Folio - a single-page personal portfolio
//!
//! Core modules:
//! - `data`: The static portfolio record (profile, skills, projects, contact)
//! - `loader`: Loading/loaded/failed state for the record
//! - `scroll`: Scroll progress indicator
//! - `disclosure`: Which project card is expanded
//! - `render`: Pure markup builders for each section
//! - `page`: Page-scoped state tying the above together
//! - `platform`: Browser binding (fetch, DOM, event listeners)

pub mod config;
pub mod data;
pub mod disclosure;
pub mod error;
pub mod loader;
pub mod page;
pub mod platform;
pub mod render;
pub mod scroll;

pub use config::SiteConfig;
pub use data::{Contact, Education, PortfolioData, Profile, Project, SkillCategory};
pub use disclosure::Disclosure;
pub use error::LoadError;
pub use loader::LoadState;
pub use page::Page;
pub use scroll::{ScrollMetrics, ScrollProgress};

/// Page content constants
pub mod consts {
    /// In-page navigation anchors (href, label)
    pub const NAV_LINKS: [(&str, &str); 4] = [
        ("#about", "About"),
        ("#skills", "Skills"),
        ("#projects", "Projects"),
        ("#contact", "Contact"),
    ];

    /// Default static data asset, relative to the page
    pub const DEFAULT_DATA_URL: &str = "userData.json";
    /// Default mount element id
    pub const DEFAULT_ROOT_ID: &str = "app";
    /// Brand text in the nav bar and document title prefix
    pub const DEFAULT_SITE_LABEL: &str = "Portfolio";

    pub const AVATAR_URL: &str = "https://placehold.co/400x400.png";
    /// Project image placeholder; the encoded title is appended
    pub const PROJECT_IMAGE_URL: &str = "https://placehold.co/800x400.png?text=";

    pub const MORE_DETAILS: &str = "More Details";
    pub const HIDE_DETAILS: &str = "Hide Details";

    /// Ids the browser binding looks up after a render
    pub const PROGRESS_BAR_ID: &str = "scroll-progress-bar";
    pub const PROJECT_GRID_ID: &str = "project-grid";
}
