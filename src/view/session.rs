// src/view/session.rs
//! Per-session holder for the most recently displayed analysis

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::controller::ReportDownload;
use crate::types::AnalysisResult;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Last analysis shown to one user. Every displayed analysis overwrites it;
/// nothing clears it. Also keeps the last exported report for download.
#[derive(Debug, Clone, Default)]
pub struct AnalysisHolder {
    latest: Arc<RwLock<Option<AnalysisResult>>>,
    report: Arc<RwLock<Option<ReportDownload>>>,
}

impl AnalysisHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn store(&self, analysis: AnalysisResult) {
        *self.latest.write().await = Some(analysis);
    }

    pub async fn latest(&self) -> Option<AnalysisResult> {
        self.latest.read().await.clone()
    }

    pub async fn store_report(&self, report: ReportDownload) {
        *self.report.write().await = Some(report);
    }

    pub async fn report(&self) -> Option<ReportDownload> {
        self.report.read().await.clone()
    }
}

#[derive(Debug)]
struct SessionEntry {
    holder: AnalysisHolder,
    last_seen: Instant,
}

/// Maps session ids to their holders. Sessions idle for longer than the
/// timeout are dropped, and the least recently seen one makes room once
/// the store is full.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Holder for `session_id`, created on first use or after expiry
    pub async fn holder(&self, session_id: Uuid) -> AnalysisHolder {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        if let Some(entry) = sessions.get_mut(&session_id) {
            if now.duration_since(entry.last_seen) < self.idle_timeout {
                entry.last_seen = now;
                return entry.holder.clone();
            }
        }

        self.make_room(&mut sessions, now);
        let holder = AnalysisHolder::new();
        sessions.insert(
            session_id,
            SessionEntry {
                holder: holder.clone(),
                last_seen: now,
            },
        );
        holder
    }

    /// Holder for a live session, without creating one
    pub async fn find(&self, session_id: Uuid) -> Option<AnalysisHolder> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&session_id)?;

        if now.duration_since(entry.last_seen) >= self.idle_timeout {
            sessions.remove(&session_id);
            return None;
        }
        entry.last_seen = now;
        Some(entry.holder.clone())
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn make_room(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {} sessions, {} remain", evicted, sessions.len());
        }
    }
}
