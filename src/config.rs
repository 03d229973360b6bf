//! Site configuration
//!
//! Defaults are compiled in. In the browser the mount element may override
//! them through `data-*` attributes:
//!
//! ```html
//! <div id="app" data-source="data/me.json" data-site-label="Folio"></div>
//! ```

use crate::consts::{DEFAULT_DATA_URL, DEFAULT_ROOT_ID, DEFAULT_SITE_LABEL};

/// Where the page mounts and where it reads its data from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// URL of the static JSON record
    pub data_url: String,
    /// Id of the element the page renders into
    pub root_id: String,
    /// Brand text in the nav bar and the document title
    pub site_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            root_id: DEFAULT_ROOT_ID.to_string(),
            site_label: DEFAULT_SITE_LABEL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Config mounting into a different element
    pub fn with_root_id(mut self, root_id: &str) -> Self {
        self.root_id = root_id.to_string();
        self
    }

    /// Apply a `data-*` override. Unknown keys and empty values are ignored.
    pub fn apply_override(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match key {
            "source" => self.data_url = value.to_string(),
            "siteLabel" | "site-label" => self.site_label = value.to_string(),
            _ => log::debug!("Ignoring unknown config key: {}", key),
        }
    }

    /// Document title for a loaded page
    pub fn title_for(&self, name: &str) -> String {
        format!("{} | {}", self.site_label, name)
    }

    /// Read overrides from the mount element's dataset (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(root_id: &str) -> Self {
        use wasm_bindgen::JsCast;

        let mut config = Self::default().with_root_id(root_id);
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(root_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

        if let Some(element) = element {
            let dataset = element.dataset();
            for key in ["source", "siteLabel"] {
                if let Some(value) = dataset.get(key) {
                    config.apply_override(key, &value);
                }
            }
            log::info!("Loaded site config from #{}", root_id);
        } else {
            log::info!("Using default site config");
        }
        config
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(root_id: &str) -> Self {
        Self::default().with_root_id(root_id)
    }
}
