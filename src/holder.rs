//! Hot-swappable configuration holder.
//!
//! # Data Flow
//! ```text
//! source text (string, bytes or file)
//!     → fresh T::default()
//!     → Bound::from_text        (parse & bind, off the shared state)
//!     → Config::normalize       (restore invariants)
//!     → Snapshot { config, source }
//!     → atomic swap of Arc<Snapshot<T>>
//! ```
//!
//! # Design Decisions
//! - A snapshot pairs the typed config with the exact text it came from, and
//!   both are replaced by one atomic store, so readers never see a config
//!   paired with another load's source.
//! - Readers take an `Arc` and drop nothing else; a snapshot stays valid for
//!   as long as anyone holds it, even after newer loads.
//! - A failed load leaves the current snapshot in place.
//! - Concurrent successful loads are last-writer-wins: whichever store lands
//!   last becomes current, regardless of which call started first.

use crate::{Bound, Error, Result};
use arc_swap::ArcSwap;
use std::fmt;
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// A bound type that can be loaded into a [`ConfigHolder`].
pub trait Config: Bound {
    /// Restores invariants after a successful parse, e.g. clamping ranges or
    /// filling derived fields. Runs once per load, before publication.
    fn normalize(&mut self);
}

/// An immutable loaded configuration paired with its source text.
#[derive(Debug, Default)]
pub struct Snapshot<T> {
    config: T,
    source: String,
}

impl<T> Snapshot<T> {
    /// The typed configuration.
    pub fn config(&self) -> &T {
        &self.config
    }

    /// The exact text this configuration was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.config
    }
}

/// Thread-safe holder of the current configuration snapshot.
///
/// # Examples
///
/// ```rust
/// use docbind::{bind, Config, ConfigHolder};
///
/// #[derive(Default)]
/// struct Server { port: u16, workers: u32 }
/// bind!(Server { port, workers });
///
/// impl Config for Server {
///     fn normalize(&mut self) {
///         self.workers = self.workers.max(1);
///     }
/// }
///
/// let holder = ConfigHolder::<Server>::new();
/// holder.load_from_text(r#"{"port": 8080, "workers": 0}"#).unwrap();
///
/// let snapshot = holder.snapshot();
/// assert_eq!(snapshot.port, 8080);
/// assert_eq!(snapshot.workers, 1);
/// assert_eq!(holder.source(), r#"{"port": 8080, "workers": 0}"#);
/// ```
pub struct ConfigHolder<T> {
    current: ArcSwap<Snapshot<T>>,
}

impl<T: Config> ConfigHolder<T> {
    /// Creates an empty holder serving `T::default()` with an empty source.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot::default()),
        }
    }

    /// Parses `source`, normalizes it and publishes it as the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns the parse or binding error; the current snapshot is unchanged.
    pub fn load_from_text(&self, source: &str) -> Result<()> {
        let mut config = T::default();
        if let Err(e) = config.from_text(source) {
            tracing::error!(
                config = std::any::type_name::<T>(),
                error = %e,
                "rejected configuration, keeping current snapshot"
            );
            tracing::debug!(source, "rejected configuration source");
            return Err(e);
        }
        config.normalize();

        self.current.store(Arc::new(Snapshot {
            config,
            source: source.to_string(),
        }));
        tracing::info!(
            config = std::any::type_name::<T>(),
            bytes = source.len(),
            "configuration loaded"
        );
        tracing::debug!(source, "loaded configuration source");
        Ok(())
    }

    /// Loads text from a raw buffer, replacing invalid UTF-8 with U+FFFD.
    ///
    /// # Errors
    ///
    /// As [`ConfigHolder::load_from_text`].
    pub fn load_from_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.load_from_text(&String::from_utf8_lossy(bytes))
    }

    /// Reads a file fully and loads its contents, replacing invalid UTF-8
    /// with U+FFFD as [`ConfigHolder::load_from_bytes`] does.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be opened or read (the text loader is
    /// not run), otherwise as [`ConfigHolder::load_from_text`].
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to read configuration file");
            Error::io(&format!("{}: {}", path.display(), e))
        })?;
        self.load_from_bytes(&bytes)
    }

    /// Writes the current source text verbatim to `path`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let snapshot = self.current.load_full();
        fs::write(path, snapshot.source.as_bytes()).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to save configuration file");
            Error::io(&format!("{}: {}", path.display(), e))
        })
    }

    /// Returns the current snapshot. Never empty: before any load it holds
    /// `T::default()`.
    pub fn snapshot(&self) -> Arc<Snapshot<T>> {
        self.current.load_full()
    }

    /// Alias of [`ConfigHolder::snapshot`].
    pub fn config(&self) -> Arc<Snapshot<T>> {
        self.snapshot()
    }

    /// Returns the text of the last successful load, or `""` if none.
    pub fn source(&self) -> String {
        self.current.load().source.clone()
    }

    /// Returns `true` once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        !self.current.load().source.is_empty()
    }
}

impl<T: Config> Default for ConfigHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConfigHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigHolder")
            .field("current", &self.current.load_full())
            .finish()
    }
}
