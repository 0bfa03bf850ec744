//! One tip per calendar day, memoized in the key-value store.
//!
//! The record lives under two keys, [`TIP_KEY`] (JSON payload) and
//! [`TIP_DATE_KEY`] (day key). Both are written with one `set_many` call, so
//! a reader never pairs a fresh date with a stale tip. Anything unreadable
//! on the way in counts as a miss.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Tip;
use crate::error::StoreError;
use crate::selector::TipSource;
use crate::store::{KeyValueStore, TIP_DATE_KEY, TIP_KEY};

/// Persisted daily selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTipRecord {
    pub tip: Tip,
    pub date_stamp: String,
}

pub struct DailyTipCache<S> {
    store: S,
}

impl<S: KeyValueStore> DailyTipCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Stored record, or `None` if missing, partial or corrupt.
    pub fn record(&self) -> Option<DailyTipRecord> {
        let date_stamp = match self.store.get(TIP_DATE_KEY) {
            Ok(Some(date)) => date,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "failed to read daily tip date");
                return None;
            }
        };
        let payload = match self.store.get(TIP_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "failed to read daily tip payload");
                return None;
            }
        };
        match serde_json::from_str::<Tip>(&payload) {
            Ok(tip) if tip.is_valid() => Some(DailyTipRecord { tip, date_stamp }),
            Ok(_) => {
                warn!("stored daily tip has empty fields, ignoring");
                None
            }
            Err(e) => {
                warn!(error = %e, "stored daily tip is corrupt, ignoring");
                None
            }
        }
    }

    /// Today's tip: the stored one if it belongs to `today_key`, otherwise a
    /// fresh pick from `selector`, persisted before returning.
    ///
    /// Never fails. A store write failure is logged and the fresh tip is
    /// still returned.
    pub fn get_or_create_today(&mut self, today_key: &str, selector: &mut impl TipSource) -> Tip {
        if let Some(record) = self.record() {
            if record.date_stamp == today_key {
                debug!(day = today_key, "daily tip cache hit");
                return record.tip;
            }
            debug!(
                day = today_key,
                stored = %record.date_stamp,
                "daily tip is from another day"
            );
        }

        let tip = selector.next_tip();
        debug!(day = today_key, category = %tip.category, "daily tip cache miss, selected new tip");
        if let Err(e) = self.persist(today_key, &tip) {
            warn!(error = %e, "failed to persist daily tip");
        }
        tip
    }

    /// Forget the stored record so the next call selects again.
    ///
    /// # Errors
    /// Returns an error if the store rejects the removal.
    pub fn invalidate(&mut self) -> Result<(), StoreError> {
        self.store.remove_many(&[TIP_KEY, TIP_DATE_KEY])
    }

    fn persist(&mut self, today_key: &str, tip: &Tip) -> Result<(), StoreError> {
        let payload = serde_json::to_string(tip)
            .map_err(|e| StoreError::QueryFailed(format!("could not encode tip: {e}")))?;
        self.store
            .set_many(&[(TIP_KEY, payload.as_str()), (TIP_DATE_KEY, today_key)])
    }
}
