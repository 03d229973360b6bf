//! Mounting the page into the DOM

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use super::fetch::fetch_portfolio;
use super::listener::EventListener;
use crate::config::SiteConfig;
use crate::consts::{DEFAULT_ROOT_ID, PROGRESS_BAR_ID, PROJECT_GRID_ID};
use crate::page::Page;
use crate::scroll::ScrollMetrics;

/// A mounted page. Dropping it or calling `unmount` detaches its listeners.
#[wasm_bindgen]
pub struct PortfolioHandle {
    page: Rc<RefCell<Page>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl PortfolioHandle {
    /// Detach scroll and click handlers; the rendered markup stays in place
    pub fn unmount(&mut self) {
        let count = self.listeners.len();
        self.listeners.clear();
        log::info!("Unmounted page ({} listeners removed)", count);
    }

    /// Current scroll progress percentage
    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.page.borrow().progress().percent()
    }

    /// Index of the expanded project, if any
    #[wasm_bindgen(getter, js_name = expandedProject)]
    pub fn expanded_project(&self) -> Option<u32> {
        self.page
            .borrow()
            .disclosure()
            .expanded()
            .map(|i| i as u32)
    }
}

/// JS entry point: mount into `rootId` (default `app`)
#[wasm_bindgen(js_name = mountPortfolio)]
pub async fn mount_portfolio(root_id: Option<String>) -> Result<PortfolioHandle, JsValue> {
    let root_id = root_id.unwrap_or_else(|| DEFAULT_ROOT_ID.to_string());
    mount(SiteConfig::load(&root_id))
        .await
        .map_err(|e| JsValue::from_str(&e))
}

/// Render the loading placeholder, fetch the record, then render the page
/// and attach its listeners
pub async fn mount(config: SiteConfig) -> Result<PortfolioHandle, String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let root = document
        .get_element_by_id(&config.root_id)
        .ok_or_else(|| format!("no #{} element", config.root_id))?;

    let year = js_sys::Date::new_0().get_full_year() as i32;
    let data_url = config.data_url.clone();
    let page = Rc::new(RefCell::new(Page::new(config, year)));
    paint(&document, &root, &page.borrow());

    let result = fetch_portfolio(&data_url).await;
    page.borrow_mut().resolve(result);
    paint(&document, &root, &page.borrow());

    let mut listeners = Vec::new();
    if page.borrow().state().data().is_some() {
        listeners.extend(setup_scroll(&window, &document, page.clone()));
        listeners.extend(setup_toggle(&root, &document, page.clone()));
        // Sync the bar in case the page was restored mid-scroll
        update_progress(&window, &document, &page);
    }

    Ok(PortfolioHandle { page, listeners })
}

fn paint(document: &Document, root: &Element, page: &Page) {
    root.set_inner_html(&page.render());
    if let Some(title) = page.title() {
        document.set_title(&title);
    }
}

fn read_metrics(window: &Window) -> Option<ScrollMetrics> {
    let body = window.document()?.body()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollMetrics::new(
        scroll_y,
        body.scroll_height() as f64,
        viewport_height,
    ))
}

fn update_progress(window: &Window, document: &Document, page: &Rc<RefCell<Page>>) {
    let Some(metrics) = read_metrics(window) else {
        return;
    };
    let Some(width) = page.borrow_mut().on_scroll(metrics) else {
        return;
    };
    let bar = document
        .get_element_by_id(PROGRESS_BAR_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match bar {
        Some(bar) => {
            let _ = bar.style().set_property("width", &width);
        }
        None => log::warn!("Progress bar #{} missing", PROGRESS_BAR_ID),
    }
}

fn setup_scroll(
    window: &Window,
    document: &Document,
    page: Rc<RefCell<Page>>,
) -> Option<EventListener> {
    let window_clone = window.clone();
    let document = document.clone();
    EventListener::new(window, "scroll", move |_event: Event| {
        update_progress(&window_clone, &document, &page);
    })
}

/// Delegated click handler for every project's details toggle
fn setup_toggle(
    root: &Element,
    document: &Document,
    page: Rc<RefCell<Page>>,
) -> Option<EventListener> {
    let document = document.clone();
    EventListener::new(root, "click", move |event: Event| {
        let Some(index) = toggle_index(&event) else {
            return;
        };

        let html = {
            let mut p = page.borrow_mut();
            if !p.toggle_project(index) {
                return;
            }
            p.render_project_grid()
        };

        // Only the cards change; the animated section node stays
        match (html, document.get_element_by_id(PROJECT_GRID_ID)) {
            (Some(html), Some(grid)) => {
                grid.set_inner_html(&html);
                refocus_toggle(&grid, index);
            }
            _ => log::warn!("Project grid #{} missing", PROJECT_GRID_ID),
        }
    })
}

/// The clicked button was replaced; move focus to its successor
fn refocus_toggle(grid: &Element, index: usize) {
    let selector = format!(r#"[data-project-toggle="{}"]"#, index);
    let button = grid
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(button) = button {
        let _ = button.focus();
    }
}

fn toggle_index(event: &Event) -> Option<usize> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let button = target.closest("[data-project-toggle]").ok()??;
    button.get_attribute("data-project-toggle")?.parse().ok()
}
