//! Domain types shared by the search engine, the store, and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub type ClientId = String;

/// Lead temperature of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Warm,
    Cold,
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Active => "Active",
            Self::Warm => "Warm",
            Self::Cold => "Cold",
        };
        f.write_str(label)
    }
}

/// Lead quality tier assigned to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(label)
    }
}

/// Outreach channel for client contact and timeline entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Whatsapp,
    Email,
    Linkedin,
    Phone,
}

/// Direction of a timeline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

/// A property already matched to a client, used as a fallback text
/// source for location keyword filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    pub name: String,
    pub address: String,
}

/// A free-form note attached to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

/// One message in a client's communication timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub channel: Channel,
    pub direction: Direction,
    pub preview: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub timestamp: String,
}

/// A CRM client record.
///
/// - `budget`: human-readable string encoding a value or a range with a
///   "K"/"M" magnitude suffix (e.g. `"$1-2M"`, `"$600K"`). Never a
///   number; every numeric comparison re-parses it on demand.
/// - `preference`: free text describing what the client is looking for.
/// - `tags`: ordered free-text labels used for profile matching.
/// - `properties`: matched property summaries, a fallback haystack for
///   location keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: String,
    pub nationality: String,
    pub budget: String,
    pub preference: String,
    pub status: ClientStatus,
    pub qualification: Qualification,
    pub tags: Vec<String>,
    #[serde(default)]
    pub properties: Vec<PropertySummary>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub engagement_score: u8,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub referred_by: Option<String>,
}

impl ClientRecord {
    /// Reject records that would break the id-keyed store or the
    /// parse-on-demand budget invariant.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidRecord("client id is empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(Error::InvalidRecord(format!("client {}: name is empty", self.id)));
        }
        if self.budget.trim().is_empty() {
            return Err(Error::InvalidRecord(format!("client {}: budget is empty", self.id)));
        }
        Ok(())
    }
}

/// Stage of a re-engagement pipeline contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Dormant,
    Sequence,
    Reengaged,
}

/// A contact moving through the re-engagement pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineContact {
    pub id: String,
    pub name: String,
    pub budget: String,
    pub stage: PipelineStage,
    #[serde(default)]
    pub days_inactive: Option<u32>,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub conversion_probability: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Signal,
    Match,
    Reengagement,
    Message,
}

/// An inbox notification with a read flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Whatsapp,
    Email,
    Signal,
    Reengagement,
    Property,
    Linkedin,
}

/// One entry in the activity feed, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: String,
}
