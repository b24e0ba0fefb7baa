//! Recognizer cache keyed by locale and factory type.
//!
//! # Concurrency Model
//!
//! The key map sits behind a `Mutex` that is held only long enough to fetch or
//! insert the per-key cell. Engine compilation then runs inside the cell's
//! `OnceCell::get_or_try_init`, outside the map lock:
//!
//! - concurrent first use of one key compiles exactly once, other callers block
//!   on that cell until the recognizer is complete;
//! - different keys compile in parallel;
//! - a failed compilation leaves the cell empty, so a later call retries.
//!
//! Entries live as long as the cache. There is no eviction.

use super::factory::ObjectFactory;
use super::recognizer::DateTimeRecognizer;
use crate::engine::EngineProvider;
use crate::{Error, Result};
use once_cell::sync::OnceCell;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

type CacheKey = (String, TypeId);
type CacheEntry = Arc<OnceCell<Arc<dyn Any + Send + Sync>>>;

fn acquire_lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Recognizer cache mutex was poisoned, recovering");
            poisoned.into_inner()
        },
    }
}

/// Process-lifetime cache of [`DateTimeRecognizer`]s.
///
/// Create one at application start and share it (it is `Send + Sync`); each
/// distinct `(locale, factory type)` pays engine compilation once.
pub struct RecognizerCache {
    provider: Arc<dyn EngineProvider>,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    compilations: AtomicUsize,
}

impl RecognizerCache {
    /// Creates an empty cache compiling engines with `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn EngineProvider>) -> Self {
        Self {
            provider,
            entries: Mutex::new(HashMap::new()),
            compilations: AtomicUsize::new(0),
        }
    }

    /// Returns the recognizer for `locale` and factory `F`, compiling it on first use.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the engine cannot be compiled. The key stays
    /// uncached in that case.
    pub fn get_or_create<F: ObjectFactory>(
        &self,
        locale: &str,
    ) -> Result<Arc<DateTimeRecognizer<F>>> {
        let cell = {
            let mut entries = acquire_lock(&self.entries);
            let key = (locale.to_string(), TypeId::of::<F>());
            Arc::clone(entries.entry(key).or_default())
        };

        let result = if cell.get().is_some() { "hit" } else { "miss" };
        metrics::counter!("recognizer_cache_lookups_total", "result" => result).increment(1);

        let entry = cell.get_or_try_init(|| -> Result<Arc<dyn Any + Send + Sync>> {
            let engine = self.provider.compile(locale)?;
            self.compilations.fetch_add(1, Ordering::SeqCst);
            metrics::counter!("recognizer_engine_compilations_total").increment(1);
            tracing::info!(locale, factory = %F::KIND, "Compiled recognition engine");
            Ok(Arc::new(DateTimeRecognizer::new(locale, engine, F::default())))
        })?;

        Arc::clone(entry)
            .downcast::<DateTimeRecognizer<F>>()
            .map_err(|_| Error::OperationFailed {
                operation: "recognizer_cache_lookup".to_string(),
                cause: format!(
                    "entry for ({locale}, {}) holds another factory type",
                    std::any::type_name::<F>()
                ),
            })
    }

    /// Number of engine compilations performed so far.
    #[must_use]
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::SeqCst)
    }

    /// Number of keys with a compiled recognizer.
    #[must_use]
    pub fn len(&self) -> usize {
        acquire_lock(&self.entries)
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    /// Whether no recognizer has been compiled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RecognizerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecognizerCache")
            .field("entries", &self.len())
            .field("compilations", &self.compilations())
            .finish_non_exhaustive()
    }
}
