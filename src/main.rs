//! Folio entry point
//!
//! On the web this mounts the page into `#app`. Natively it prerenders a
//! snapshot of the loaded page from a JSON file to stdout.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    use folio::SiteConfig;
    use folio::consts::DEFAULT_ROOT_ID;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }

    log::info!("Folio starting...");

    let config = SiteConfig::load(DEFAULT_ROOT_ID);
    match folio::platform::mount(config).await {
        Ok(handle) => {
            // Lives for the lifetime of the tab
            std::mem::forget(handle);
            log::info!("Folio running!");
        }
        Err(e) => log::error!("Failed to mount page: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use chrono::Datelike;
    use folio::consts::DEFAULT_DATA_URL;
    use folio::{LoadState, Page, SiteConfig, loader, render};

    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string());
    log::info!("Folio (native) prerendering {}", path);

    let config = SiteConfig::default();
    let root_id = config.root_id.clone();
    let mut page = Page::new(config, chrono::Local::now().year());
    page.resolve(loader::load_file(std::path::Path::new(&path)));

    let title = page
        .title()
        .unwrap_or_else(|| page.config().site_label.clone());
    print!("{}", render::render_document(&title, &root_id, &page.render()));

    if let LoadState::Failed(err) = page.state() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
