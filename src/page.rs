//! Page-scoped UI state
//!
//! Owns everything that changes while the page is open: the load state,
//! the expanded project and the scroll progress. The browser binding holds
//! one `Page` per mounted root and forwards events to it.

use crate::config::SiteConfig;
use crate::data::PortfolioData;
use crate::disclosure::Disclosure;
use crate::error::LoadError;
use crate::loader::LoadState;
use crate::render;
use crate::scroll::{ScrollMetrics, ScrollProgress};

#[derive(Debug, Clone)]
pub struct Page {
    config: SiteConfig,
    state: LoadState,
    disclosure: Disclosure,
    progress: ScrollProgress,
    /// Year shown in the footer
    year: i32,
}

impl Page {
    pub fn new(config: SiteConfig, year: i32) -> Self {
        Self {
            config,
            state: LoadState::Loading,
            disclosure: Disclosure::new(0),
            progress: ScrollProgress::new(),
            year,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    pub fn progress(&self) -> &ScrollProgress {
        &self.progress
    }

    /// Settle the data load. Disclosure is sized to the loaded project list.
    pub fn resolve(&mut self, result: Result<PortfolioData, LoadError>) {
        if !self.state.is_loading() {
            log::warn!("Data load resolved twice, keeping first result");
            return;
        }
        self.state.resolve(result);
        let count = self.state.data().map(|d| d.projects.len()).unwrap_or(0);
        self.disclosure = Disclosure::new(count);
    }

    /// Handle a click on a project's details toggle.
    /// Returns true if the project grid needs re-rendering.
    pub fn toggle_project(&mut self, index: usize) -> bool {
        if self.state.data().is_none() {
            return false;
        }
        self.disclosure.toggle(index)
    }

    /// Handle a scroll event. Returns the new bar width if it changed.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<String> {
        self.progress.update(metrics).then(|| self.progress.width())
    }

    /// Document title once the record is loaded
    pub fn title(&self) -> Option<String> {
        self.state
            .data()
            .map(|d| self.config.title_for(&d.profile.name))
    }

    /// Markup for the whole mount root
    pub fn render(&self) -> String {
        match &self.state {
            LoadState::Loading => render::render_loading(),
            LoadState::Failed(err) => render::render_failed(err),
            LoadState::Loaded(data) => render::render_page(
                data,
                &self.disclosure,
                &self.progress,
                &self.config.site_label,
                self.year,
            ),
        }
    }

    /// Cards for the project grid, swapped in after a toggle
    pub fn render_project_grid(&self) -> Option<String> {
        self.state
            .data()
            .map(|d| render::render_project_grid(&d.projects, &self.disclosure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample;
    use crate::render::project_cards;

    fn loaded() -> Page {
        let mut page = Page::new(SiteConfig::default(), 2026);
        page.resolve(Ok(sample()));
        page
    }

    #[test]
    fn test_loading_placeholder() {
        let page = Page::new(SiteConfig::default(), 2026);
        assert!(page.render().contains("Loading..."));
        assert_eq!(page.title(), None);
    }

    #[test]
    fn test_failed_notice() {
        let mut page = Page::new(SiteConfig::default(), 2026);
        page.resolve(Err(LoadError::Status(404)));
        let html = page.render();
        assert!(!html.contains("Loading..."));
        assert!(html.contains("HTTP 404"));
        assert!(page.render_project_grid().is_none());
    }

    #[test]
    fn test_toggle_before_load_ignored() {
        let mut page = Page::new(SiteConfig::default(), 2026);
        assert!(!page.toggle_project(0));
    }

    #[test]
    fn test_initial_render_all_closed() {
        let page = loaded();
        let html = page.render();
        for title in ["A", "B", "C"] {
            assert!(html.contains(&format!(r#"data-key="{}""#, title)));
        }
        assert_eq!(html.matches("More Details").count(), 3);
        assert!(!html.contains("Hide Details"));
        assert_eq!(page.title().as_deref(), Some("Portfolio | Ada Lovelace"));
    }

    #[test]
    fn test_toggle_b_shows_and_hides_details() {
        let mut page = loaded();
        let b = 1;
        assert_eq!(page.state().data().unwrap().projects[b].title, "B");

        assert!(page.toggle_project(b));
        let html = page.render_project_grid().unwrap();
        assert!(html.contains("B details"));
        assert!(html.contains("Hide Details"));
        assert_eq!(html.matches("More Details").count(), 2);
        assert!(!html.contains("A details"));

        assert!(page.toggle_project(b));
        let html = page.render_project_grid().unwrap();
        assert!(!html.contains("B details"));
        assert!(!html.contains("Hide Details"));
        assert_eq!(html.matches("More Details").count(), 3);
    }

    #[test]
    fn test_rendered_cards_track_projects() {
        let page = loaded();
        let data = page.state().data().unwrap();
        let cards = project_cards(&data.projects, page.disclosure());
        let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_toggle_rerender_is_grid_only() {
        let mut page = loaded();
        page.toggle_project(1);
        let html = page.render_project_grid().unwrap();
        assert!(!html.contains("<section"));
        assert!(!html.contains("fade-in-up"));
        assert!(html.contains(r#"data-project-toggle="1" aria-expanded="true""#));
    }

    #[test]
    fn test_second_resolve_keeps_expanded_card() {
        let mut page = loaded();
        page.toggle_project(1);
        page.resolve(Err(LoadError::Status(500)));
        assert_eq!(page.disclosure().expanded(), Some(1));
        assert!(page.state().data().is_some());
    }

    #[test]
    fn test_scroll_to_bottom() {
        let mut page = loaded();
        let width = page.on_scroll(ScrollMetrics::new(1200.0, 2000.0, 800.0));
        assert_eq!(width.as_deref(), Some("100%"));
        assert_eq!(page.progress().percent(), 100.0);
        assert_eq!(page.on_scroll(ScrollMetrics::new(1200.0, 2000.0, 800.0)), None);
        assert!(page.render().contains(r#"style="width: 100%""#));
    }
}
