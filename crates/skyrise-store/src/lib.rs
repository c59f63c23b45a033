#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! In-memory CRM repository.
//!
//! Owns the client, pipeline, notification, and activity collections
//! and exposes explicit mutation methods instead of ambient global
//! state. Collections keep insertion order; by-id access goes through
//! position indexes. Mutations are synchronous last-writer-wins;
//! unknown ids surface [`Error::NotFound`] rather than silently doing
//! nothing.

use std::collections::HashMap;

use skyrise_core::error::{Error, Result};
use skyrise_core::types::{
    ActivityItem, ActivityKind, Channel, ClientRecord, Direction, Note, Notification,
    PipelineContact, PipelineStage, TimelineEntry,
};

/// A note without its id; the store assigns one.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

/// A timeline entry without its id.
#[derive(Debug, Clone)]
pub struct TimelineDraft {
    pub channel: Channel,
    pub direction: Direction,
    pub preview: String,
    pub subject: Option<String>,
    pub timestamp: String,
}

/// An activity feed entry without its id.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: String,
}

pub struct CrmStore {
    clients: Vec<ClientRecord>,
    client_index: HashMap<String, usize>,
    pipeline: Vec<PipelineContact>,
    pipeline_index: HashMap<String, usize>,
    notifications: Vec<Notification>,
    notification_index: HashMap<String, usize>,
    activity: Vec<ActivityItem>,
    next_seq: u64,
}

impl CrmStore {
    pub fn new(
        clients: Vec<ClientRecord>,
        pipeline: Vec<PipelineContact>,
        notifications: Vec<Notification>,
        activity: Vec<ActivityItem>,
    ) -> Self {
        let client_index = index_by_id(clients.iter().map(|c| c.id.clone()));
        let pipeline_index = index_by_id(pipeline.iter().map(|c| c.id.clone()));
        let notification_index = index_by_id(notifications.iter().map(|n| n.id.clone()));
        Self {
            clients,
            client_index,
            pipeline,
            pipeline_index,
            notifications,
            notification_index,
            activity,
            next_seq: 1,
        }
    }

    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    pub fn client(&self, id: &str) -> Option<&ClientRecord> {
        self.client_index.get(id).map(|&i| &self.clients[i])
    }

    pub fn pipeline_contacts(&self) -> &[PipelineContact] {
        &self.pipeline
    }

    pub fn pipeline_contact(&self, id: &str) -> Option<&PipelineContact> {
        self.pipeline_index.get(id).map(|&i| &self.pipeline[i])
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn activity_feed(&self) -> &[ActivityItem] {
        &self.activity
    }

    /// Move a pipeline contact to another stage.
    pub fn move_contact(&mut self, id: &str, stage: PipelineStage) -> Result<&PipelineContact> {
        let idx = *self
            .pipeline_index
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("pipeline contact {id}")))?;
        self.pipeline[idx].stage = stage;
        tracing::info!(contact = id, ?stage, "pipeline contact moved");
        Ok(&self.pipeline[idx])
    }

    /// Prepend a note to a client. The store assigns the id.
    pub fn add_note(&mut self, client_id: &str, draft: NoteDraft) -> Result<&Note> {
        let idx = *self
            .client_index
            .get(client_id)
            .ok_or_else(|| Error::NotFound(format!("client {client_id}")))?;
        let note = Note {
            id: self.next_id("n"),
            author: draft.author,
            content: draft.content,
            timestamp: draft.timestamp,
        };
        self.clients[idx].notes.insert(0, note);
        tracing::info!(client = client_id, "note added");
        Ok(&self.clients[idx].notes[0])
    }

    /// Prepend a timeline entry to a client. The store assigns the id.
    pub fn add_timeline_entry(
        &mut self,
        client_id: &str,
        draft: TimelineDraft,
    ) -> Result<&TimelineEntry> {
        let idx = *self
            .client_index
            .get(client_id)
            .ok_or_else(|| Error::NotFound(format!("client {client_id}")))?;
        let entry = TimelineEntry {
            id: self.next_id("t"),
            channel: draft.channel,
            direction: draft.direction,
            preview: draft.preview,
            subject: draft.subject,
            timestamp: draft.timestamp,
        };
        self.clients[idx].timeline.insert(0, entry);
        tracing::info!(client = client_id, "timeline entry added");
        Ok(&self.clients[idx].timeline[0])
    }

    /// Flag one notification as read. Marking an already-read
    /// notification is a no-op, not an error.
    pub fn mark_notification_read(&mut self, id: &str) -> Result<()> {
        let idx = *self
            .notification_index
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("notification {id}")))?;
        self.notifications[idx].read = true;
        Ok(())
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    /// Prepend an entry to the activity feed. The store assigns the id.
    pub fn add_activity(&mut self, draft: ActivityDraft) -> &ActivityItem {
        let item = ActivityItem {
            id: self.next_id("a"),
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            timestamp: draft.timestamp,
        };
        self.activity.insert(0, item);
        &self.activity[0]
    }

    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_seq);
        self.next_seq += 1;
        id
    }
}

fn index_by_id(ids: impl Iterator<Item = String>) -> HashMap<String, usize> {
    ids.enumerate().map(|(i, id)| (id, i)).collect()
}
