use std::fmt;

use crate::render::Screen;
use crate::snapshot::Catalog;
use crate::source::Loaded;

/// Active view. Detail variants carry the selected id, so a detail view can
/// never exist without a selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Workers,
    Services,
    Contact,
    WorkerDetail(i32),
    ServiceDetail(i32),
}

impl View {
    /// Target of the detail pages' back button; other views stay put.
    pub fn back(self) -> View {
        match self {
            View::WorkerDetail(_) => View::Workers,
            View::ServiceDetail(_) => View::Services,
            other => other,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("home"),
            View::Workers => f.write_str("workers"),
            View::Services => f.write_str("services"),
            View::Contact => f.write_str("contact"),
            View::WorkerDetail(id) => write!(f, "worker-detail/{id}"),
            View::ServiceDetail(id) => write!(f, "service-detail/{id}"),
        }
    }
}

/// Loaded snapshot plus navigation state.
#[derive(Clone, Debug)]
pub struct Session {
    catalog: Catalog,
    error: Option<String>,
    view: View,
}

impl Session {
    pub fn new(loaded: Loaded) -> Self {
        Self { catalog: loaded.catalog, error: loaded.error, view: View::Home }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = %self.view, to = %view, "navigate");
        self.view = view;
    }

    pub fn select_worker(&mut self, id: i32) {
        self.navigate(View::WorkerDetail(id));
    }

    pub fn select_service(&mut self, id: i32) {
        self.navigate(View::ServiceDetail(id));
    }

    pub fn back(&mut self) {
        self.navigate(self.view.back());
    }

    pub fn screen(&self) -> Screen<'_> {
        Screen::build(&self.catalog, self.error.as_deref(), self.view)
    }
}
