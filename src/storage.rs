// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Training Store
//!
//! Persistence for plans, weekly schedules and load histories over a flat
//! key-value namespace, the same layout earlier clients kept in browser
//! local storage. The store is an explicit repository object injected where
//! it is needed; the engine itself never touches persistence.
//!
//! Records are wrapped in a `schemaVersion` envelope. Legacy records
//! written without an envelope parse as version 0 and migrate on read;
//! records from a newer schema than this build are an error rather than a
//! field-by-field guess.
//!
//! Everything here is synchronous: the core performs no I/O inside its
//! algorithms and assumes at most one logical caller at a time.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::constants::storage::{
    ACTIVE_PLAN_KEY, LOAD_DATA_PREFIX, PLAN_HISTORY_KEY, SCHEMA_VERSION, WEEKLY_PLANS_PREFIX,
};
use crate::load::{annotate_acwr, AcwrStatus};
use crate::models::{TrainingLoad, TrainingPlan, WeeklyPlan};
use crate::progress;

/// Flat string-keyed storage of JSON records
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// SQLite-backed store: one `kv` table, one row per record collection
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at the given path and run migrations
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating data directory {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("opening store at {}", path.display()))?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// In-memory SQLite database, useful in tests
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("reading key {key}"))?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                [key, value],
            )
            .with_context(|| format!("writing key {key}"))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])
            .with_context(|| format!("removing key {key}"))?;
        Ok(())
    }
}

/// Version envelope around every persisted record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Versioned<T> {
    schema_version: u32,
    data: T,
}

fn encode<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string(&Versioned {
        schema_version: SCHEMA_VERSION,
        data,
    })?)
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(raw).context("parsing stored record")?;
    let version = value
        .as_object()
        .and_then(|obj| obj.get("schemaVersion"))
        .and_then(serde_json::Value::as_u64);

    match version {
        // Version 0: legacy record written without an envelope. The field
        // shapes are unchanged since then, so migration is a direct parse.
        None => Ok(serde_json::from_value(value)?),
        Some(v) if v as u32 == SCHEMA_VERSION => {
            let versioned: Versioned<T> = serde_json::from_value(value)?;
            Ok(versioned.data)
        }
        Some(v) => bail!("stored record has schema version {v}, this build supports {SCHEMA_VERSION}"),
    }
}

/// A plan archived to history when it was cleared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedPlan {
    #[serde(flatten)]
    pub plan: TrainingPlan,
    /// When the plan was archived
    pub completed_date: DateTime<Utc>,
}

/// Repository over plans, weekly plans and load records
///
/// Generic over the backing [`KvStore`] so tests can run against memory
/// while the CLI uses SQLite.
pub struct TrainingStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> TrainingStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn weekly_key(plan_id: &str) -> String {
        format!("{WEEKLY_PLANS_PREFIX}_{plan_id}")
    }

    fn load_key(plan_id: &str) -> String {
        format!("{LOAD_DATA_PREFIX}_{plan_id}")
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(decode(&raw)?)),
            None => Ok(None),
        }
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        Ok(self.read(key)?.unwrap_or_default())
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.store.set(key, &encode(value)?)
    }

    /// Persist the single active plan
    pub fn save_active_plan(&mut self, plan: &TrainingPlan) -> Result<()> {
        debug!(plan.id = %plan.id, "Saving active plan");
        self.write(ACTIVE_PLAN_KEY, plan)
    }

    /// The active plan, if one exists
    pub fn active_plan(&self) -> Result<Option<TrainingPlan>> {
        self.read(ACTIVE_PLAN_KEY)
    }

    /// Archive the active plan to history and clear it
    pub fn clear_active_plan(&mut self) -> Result<()> {
        if let Some(plan) = self.active_plan()? {
            let mut history = self.plan_history()?;
            info!(plan.id = %plan.id, "Archiving active plan");
            history.push(ArchivedPlan {
                plan,
                completed_date: Utc::now(),
            });
            self.write(PLAN_HISTORY_KEY, &history)?;
        }
        self.store.remove(ACTIVE_PLAN_KEY)
    }

    /// Previously archived plans, oldest first
    pub fn plan_history(&self) -> Result<Vec<ArchivedPlan>> {
        self.read_list(PLAN_HISTORY_KEY)
    }

    /// Advance the active plan to the given week
    pub fn update_plan_progress(&mut self, week_number: u32) -> Result<()> {
        if let Some(mut plan) = self.active_plan()? {
            plan.current_week = week_number;
            self.save_active_plan(&plan)?;
        }
        Ok(())
    }

    /// All recorded weekly plans for a plan
    pub fn weekly_plans(&self, plan_id: &str) -> Result<Vec<WeeklyPlan>> {
        self.read_list(&Self::weekly_key(plan_id))
    }

    /// One recorded weekly plan, if the week has been realized before
    pub fn weekly_plan(&self, plan_id: &str, week_number: u32) -> Result<Option<WeeklyPlan>> {
        Ok(self
            .weekly_plans(plan_id)?
            .into_iter()
            .find(|w| w.week_number == week_number))
    }

    /// Insert or replace one week's plan
    pub fn save_weekly_plan(&mut self, plan_id: &str, weekly: WeeklyPlan) -> Result<()> {
        let mut weeks = self.weekly_plans(plan_id)?;
        match weeks.iter_mut().find(|w| w.week_number == weekly.week_number) {
            Some(slot) => *slot = weekly,
            None => weeks.push(weekly),
        }
        self.write(&Self::weekly_key(plan_id), &weeks)
    }

    /// Record a workout completion and refresh the week's load sample
    pub fn complete_workout(
        &mut self,
        plan_id: &str,
        week_number: u32,
        workout_id: &str,
        actual_duration_min: f64,
        rpe: f64,
    ) -> Result<()> {
        let mut week = self
            .weekly_plan(plan_id, week_number)?
            .with_context(|| format!("week {week_number} has not been generated yet"))?;

        let load = progress::complete_workout(&mut week, workout_id, actual_duration_min, rpe)?;
        self.save_weekly_plan(plan_id, week)?;

        if let Some(load) = load {
            self.save_training_load(plan_id, load)?;
        }
        Ok(())
    }

    /// Upsert one week's load sample and re-annotate ACWR over the history
    pub fn save_training_load(&mut self, plan_id: &str, load: TrainingLoad) -> Result<()> {
        let mut loads = self.training_loads(plan_id)?;
        match loads.iter_mut().find(|l| l.week_number == load.week_number) {
            Some(slot) => *slot = load,
            None => loads.push(load),
        }
        annotate_acwr(&mut loads);

        if let Some(ratio) = loads.last().and_then(|l| l.acwr) {
            if AcwrStatus::from_ratio(ratio) == AcwrStatus::HighRisk {
                warn!(
                    plan.id = %plan_id,
                    acwr = ratio,
                    "Training load spike: ACWR in high injury-risk band"
                );
            }
        }

        self.write(&Self::load_key(plan_id), &loads)
    }

    /// Load history sorted by week number
    pub fn training_loads(&self, plan_id: &str) -> Result<Vec<TrainingLoad>> {
        self.read_list(&Self::load_key(plan_id))
    }

    /// Historical completion rate across all recorded weeks
    pub fn completion_rate(&self, plan_id: &str) -> Result<f64> {
        Ok(progress::completion_rate(&self.weekly_plans(plan_id)?))
    }
}
