// crates/meteomap-core/src/session.rs

//! # Map Session
//!
//! All application state in one owned value: the loaded dataset, the
//! polygon overlay, the view and whether the controls accept input.
//!
//! Loading runs on a background thread that reports back exactly once over a
//! channel. The thread that owns the [`MapSession`] receives that
//! [`LoadEvent`] and hands it to [`MapSession::apply`]; the session itself is
//! never touched from the loader thread.
//!
//! ```no_run
//! use meteomap_core::prelude::*;
//!
//! let mut session = MapSession::new();
//! let handle = session.start_load(DatasetSource::default());
//! let note = session.apply(handle.wait());
//! println!("{note}");
//!
//! session.select_country("AD");
//! if let Some(info) = session.click(Point::new(42.55, 1.6)) {
//!     println!("{info}");
//! }
//! ```

use crate::error::{MapError, Result};
use crate::flatten::{GeometryFlattener, RingPolicy};
use crate::loader::DatasetSource;
use crate::model::{FeatureCollection, Point};
use crate::overlay::{Overlay, RebuildReport};
use crate::traits::FeatureSearch;
use crate::view::{MapView, ZoomChanged};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

/// The single message a background load sends back.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded(FeatureCollection),
    Failed(MapError),
}

impl From<Result<FeatureCollection>> for LoadEvent {
    fn from(result: Result<FeatureCollection>) -> Self {
        match result {
            Ok(fc) => LoadEvent::Loaded(fc),
            Err(e) => LoadEvent::Failed(e),
        }
    }
}

/// Something to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Loaded { features: usize, countries: usize },
    Error(String),
    Info { title: String, message: String },
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Loaded {
                features,
                countries,
            } => write!(f, "Loaded {features} features in {countries} countries"),
            Notification::Error(msg) => f.write_str(msg),
            Notification::Info { title, message } => write!(f, "{title}\n{message}"),
        }
    }
}

/// Receiving end of a background load.
pub struct LoadHandle {
    rx: Receiver<LoadEvent>,
    worker: Option<JoinHandle<()>>,
    delivered: bool,
}

impl LoadHandle {
    /// Blocks until the loader reports.
    pub fn wait(mut self) -> LoadEvent {
        let event = self.rx.recv().unwrap_or_else(|_| Self::lost());
        self.delivered = true;
        self.join();
        event
    }

    /// Non-blocking check; yields the event once, then `None` forever.
    pub fn try_poll(&mut self) -> Option<LoadEvent> {
        if self.delivered {
            return None;
        }
        let event = match self.rx.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Self::lost(),
        };
        self.delivered = true;
        self.join();
        Some(event)
    }

    fn lost() -> LoadEvent {
        LoadEvent::Failed(MapError::Download(
            "loader thread exited without a result".to_string(),
        ))
    }

    fn join(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Loader thread panicked");
            }
        }
    }
}

/// Runs `job` on a fresh thread and returns the handle for its single result.
pub fn spawn_load_with<F>(job: F) -> LoadHandle
where
    F: FnOnce() -> Result<FeatureCollection> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        // The receiver may be gone if the caller stopped waiting.
        let _ = tx.send(LoadEvent::from(job()));
    });
    LoadHandle {
        rx,
        worker: Some(worker),
        delivered: false,
    }
}

/// Downloads or reads `source` in the background.
pub fn spawn_load(source: DatasetSource) -> LoadHandle {
    spawn_load_with(move || source.load())
}

/// Owned state of one map window.
#[derive(Debug)]
pub struct MapSession {
    dataset: Option<FeatureCollection>,
    overlay: Overlay,
    view: MapView,
    selected: Option<String>,
    controls_enabled: bool,
    flattener: GeometryFlattener,
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSession {
    /// A session in the loading state: no data, controls disabled.
    pub fn new() -> Self {
        Self::with_policy(RingPolicy::default())
    }

    pub fn with_policy(policy: RingPolicy) -> Self {
        Self {
            dataset: None,
            overlay: Overlay::default(),
            view: MapView::default(),
            selected: None,
            controls_enabled: false,
            flattener: GeometryFlattener::new(policy),
        }
    }

    /// Disables the controls and starts loading `source` in the background.
    pub fn start_load(&mut self, source: DatasetSource) -> LoadHandle {
        self.controls_enabled = false;
        tracing::info!(%source, "Loading dataset");
        spawn_load(source)
    }

    /// Consumes the loader's result. Controls are enabled afterwards either way;
    /// a failure leaves the session without data.
    pub fn apply(&mut self, event: LoadEvent) -> Notification {
        self.controls_enabled = true;
        match event {
            LoadEvent::Loaded(fc) => {
                let stats = fc.stats();
                tracing::info!(
                    features = stats.features,
                    countries = stats.countries,
                    "Dataset ready"
                );
                self.dataset = Some(fc);
                self.overlay.clear();
                self.selected = None;
                Notification::Loaded {
                    features: stats.features,
                    countries: stats.countries,
                }
            }
            LoadEvent::Failed(e) => {
                tracing::error!(error = %e, "Dataset load failed");
                self.dataset = None;
                self.overlay.clear();
                self.selected = None;
                Notification::Error(format!("Error downloading or loading data: {e}"))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.controls_enabled
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn dataset(&self) -> Option<&FeatureCollection> {
        self.dataset.as_ref()
    }

    /// Entries for the country selector; empty until data is loaded.
    pub fn countries(&self) -> Vec<&str> {
        self.dataset
            .as_ref()
            .map(FeatureSearch::countries)
            .unwrap_or_default()
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Rebuilds the overlay for `country`. Without data this only clears it.
    pub fn select_country(&mut self, country: &str) -> RebuildReport {
        let Some(dataset) = self.dataset.as_ref() else {
            self.overlay.clear();
            return RebuildReport::default();
        };
        self.selected = Some(country.to_string());
        self.overlay
            .rebuild_for_country(dataset, country, &self.flattener)
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Metadata of the polygon under `at`, if any. Ignored while loading.
    pub fn click(&self, at: Point) -> Option<Notification> {
        if !self.controls_enabled {
            return None;
        }
        self.overlay
            .hit_test(at)
            .map(|poly| Notification::Info {
                title: "Polygon Info".to_string(),
                message: poly.properties.summary(),
            })
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn set_zoom(&mut self, zoom: i32) -> Option<ZoomChanged> {
        self.view.set_zoom(zoom)
    }

    /// Moves the view center onto the current overlay; `false` if it is empty.
    pub fn focus_overlay(&mut self) -> bool {
        match self.overlay.bounds() {
            Some(bounds) => {
                self.view.center_on(bounds);
                true
            }
            None => false,
        }
    }
}
