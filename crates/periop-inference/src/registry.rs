//! Load-once holder for the active model.
//!
//! The first caller of [`ModelRegistry::handle`] runs the loader; concurrent
//! callers block on the cell until it finishes. A failed load leaves the cell
//! empty so a later call can retry.

use std::fmt;

use once_cell::sync::OnceCell;

use periop_core::constants::VERSION;
use periop_core::errors::ModelError;
use periop_core::models::HealthStatus;
use periop_core::tracing::events;

use crate::handle::ModelHandle;
use crate::loader::{self, ModelSource};

type Loader = Box<dyn Fn() -> Result<ModelHandle, ModelError> + Send + Sync>;

pub struct ModelRegistry {
    cell: OnceCell<ModelHandle>,
    loader: Option<Loader>,
}

impl ModelRegistry {
    /// Load from `source` on first use. With `fallback`, a failed load is
    /// replaced by the documented defaults in degraded mode.
    pub fn new(source: ModelSource, fallback: bool) -> Self {
        Self::with_loader(move || {
            if fallback {
                loader::load_model_or_defaults(&source)
            } else {
                loader::load_model(&source).map_err(|err| {
                    let reason = err.to_string();
                    events::model_load_failed(&source.origin(), &reason);
                    ModelError::not_loaded(reason)
                })
            }
        })
    }

    /// Load on first use with a caller-supplied loader.
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> Result<ModelHandle, ModelError> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            loader: Some(Box::new(loader)),
        }
    }

    /// A registry with no source; only [`install`](Self::install) can fill it.
    pub fn unloaded() -> Self {
        Self {
            cell: OnceCell::new(),
            loader: None,
        }
    }

    /// A registry already holding `handle`.
    pub fn preloaded(handle: ModelHandle) -> Self {
        Self {
            cell: OnceCell::with_value(handle),
            loader: None,
        }
    }

    /// The active model, loading it if this is the first use.
    pub fn handle(&self) -> Result<ModelHandle, ModelError> {
        self.cell
            .get_or_try_init(|| match &self.loader {
                Some(load) => load(),
                None => Err(ModelError::not_loaded("no model source configured")),
            })
            .cloned()
    }

    /// The active model if already loaded. Never triggers a load.
    pub fn get(&self) -> Option<ModelHandle> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Install a handle into an empty registry. Returns the handle back
    /// if one is already loaded.
    pub fn install(&self, handle: ModelHandle) -> Result<(), ModelHandle> {
        self.cell.set(handle)
    }

    /// Liveness snapshot. Never triggers a load.
    pub fn health(&self) -> HealthStatus {
        let (status, model_loaded, degraded) = match self.cell.get() {
            Some(handle) if handle.is_degraded() => ("degraded", true, true),
            Some(_) => ("healthy", true, false),
            None => ("unloaded", false, false),
        };
        HealthStatus {
            status,
            model_loaded,
            degraded,
            version: VERSION,
        }
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("loaded", &self.is_loaded())
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}
