//! Local compute session.
//!
//! At most one [`Session`] is active per process. [`SessionBuilder::get_or_create`]
//! hands out the active one when it exists and only builds a new session
//! otherwise, so entry points can call it unconditionally.

use crate::config::SessionConfig;
use crate::dataframe::{DataFrame, Value};
use anyhow::{Context, Result, anyhow, bail};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static ACTIVE_SESSION: OnceLock<Mutex<Option<Arc<Session>>>> = OnceLock::new();

fn active_session_cell() -> Result<MutexGuard<'static, Option<Arc<Session>>>> {
    ACTIVE_SESSION
        .get_or_init(|| Mutex::new(None))
        .lock()
        .map_err(|_| anyhow!("active session lock is poisoned"))
}

/// Collects settings for [`SessionBuilder::get_or_create`].
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
    customized: bool,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = name.into();
        self.customized = true;
        self
    }

    pub fn master(mut self, master: impl Into<String>) -> Self {
        self.config.master = master.into();
        self.customized = true;
        self
    }

    pub fn config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.extra.insert(key.into(), value.into());
        self.customized = true;
        self
    }

    /// Replace all of the builder's settings with `config`, discarding
    /// earlier `app_name`, `master` and `config` calls.
    pub fn with_config(mut self, config: &SessionConfig) -> Self {
        self.config = config.clone();
        self.customized = true;
        self
    }

    /// Return the active session, creating and registering one if there is none.
    ///
    /// # Errors
    /// Returns an error if the builder's configuration is invalid.
    pub fn get_or_create(self) -> Result<Arc<Session>> {
        let mut active = active_session_cell()?;

        if let Some(session) = active.as_ref() {
            if self.customized && self.config != session.config {
                log::debug!("using the existing session, builder settings are ignored");
            }
            return Ok(Arc::clone(session));
        }

        self.config
            .validate()
            .context("failed to validate session config")?;
        let session = Arc::new(Session {
            config: self.config,
        });
        log::info!(
            "created session {:?} (master {:?})",
            session.app_name(),
            session.master()
        );

        *active = Some(Arc::clone(&session));
        Ok(session)
    }
}

/// In-memory compute session; shared as `Arc<Session>` and immutable once created.
#[derive(Debug, PartialEq)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The currently registered session, if any.
    pub fn active() -> Result<Option<Arc<Session>>> {
        Ok(active_session_cell()?.clone())
    }

    /// Deregister this session. Does nothing if another session is active.
    pub fn stop(self: &Arc<Self>) -> Result<()> {
        let mut active = active_session_cell()?;
        if active.as_ref().is_some_and(|cur| Arc::ptr_eq(cur, self)) {
            *active = None;
            log::info!("stopped session {:?}", self.app_name());
        }
        Ok(())
    }

    pub fn app_name(&self) -> &str {
        &self.config.app_name
    }

    pub fn master(&self) -> &str {
        &self.config.master
    }

    pub fn conf(&self, key: &str) -> Option<&str> {
        self.config.extra.get(key).map(String::as_str)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Frame with a single `id` column holding `0..end`.
    pub fn range(&self, end: i64) -> Result<DataFrame> {
        self.range_between(0, end, 1)
    }

    /// Frame with a single `id` column holding `start, start + step, ...`
    /// up to but excluding `end`.
    pub fn range_between(&self, start: i64, end: i64, step: i64) -> Result<DataFrame> {
        if step == 0 {
            bail!("step must not be zero");
        }

        let mut rows = Vec::new();
        let mut val = start;
        while (step > 0 && val < end) || (step < 0 && val > end) {
            rows.push(vec![Value::Long(val)]);
            val = match val.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        log::debug!(
            "materialized range({start}, {end}, {step}) with {} rows",
            rows.len()
        );

        DataFrame::new(vec!["id".to_string()], rows).context("failed to construct range frame")
    }
}
