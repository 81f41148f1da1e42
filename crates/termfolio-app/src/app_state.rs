use termfolio_export::{Exporter, asset_source};
use termfolio_profile::ProfileStore;
use termfolio_storage::Storage;
use termfolio_terminal::{TerminalSession, WindowState};
use termfolio_types::config::TermfolioConfig;

/// Store type used by the app; boxed so tests can swap in memory storage.
pub type AppStore = ProfileStore<Box<dyn Storage>>;

/// Everything the preview loop mutates.
pub struct AppState {
    pub config: TermfolioConfig,
    pub store: AppStore,
    pub session: TerminalSession,
    /// Exports still running, oldest first.
    pub export_jobs: Vec<termfolio_export::ExportJob>,
    /// Window title, refreshed from the profile after each event.
    pub title: String,
}

impl AppState {
    /// Build the initial state for a `viewport_w` x `viewport_h` screen.
    pub fn new(
        config: TermfolioConfig,
        mut store: AppStore,
        viewport_w: u16,
        viewport_h: u16,
    ) -> Self {
        let window = WindowState::centered(
            viewport_w,
            viewport_h,
            config.window_width,
            config.window_height,
        );
        let profile = store.get();
        let session = TerminalSession::new(profile, window);
        let title = window_title(profile.name_text());
        Self {
            config,
            store,
            session,
            export_jobs: Vec::new(),
            title,
        }
    }

    /// An exporter writing to the configured directory.
    pub fn exporter(&self) -> Exporter {
        exporter_for(&self.config)
    }
}

/// Exporter honoring the configured template override and output directory.
pub fn exporter_for(config: &TermfolioConfig) -> Exporter {
    Exporter::new(asset_source(config.assets_dir.as_deref()), &config.export_dir)
}

/// Title bar text: the profile name, or a generic label.
pub fn window_title(name: &str) -> String {
    if name.trim().is_empty() {
        "Terminal Portfolio".to_string()
    } else {
        name.to_string()
    }
}
