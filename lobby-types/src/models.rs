use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{MediaType, NotificationKind};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// A member account. `followers`/`following` hold member uids; order is
/// not meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub bio: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub is_private: bool,
    pub followers: Vec<String>,
    pub following: Vec<String>,
    /// Game name -> skill tier ("valorant" -> "Gold")
    pub game_ids: HashMap<String, String>,
    /// Platform name -> handle ("twitch" -> "twitchuser1")
    pub social_links: HashMap<String, String>,
    pub saved_posts: Vec<String>,
}

/// Identity fields copied from a user at write time. A snapshot is not
/// kept in sync with later profile changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSnapshot {
    pub id: String,
    pub username: String,
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: AuthorSnapshot,
    pub content: String,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    pub game_tag: String,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub likes: Vec<String>,
    pub saves: Vec<String>,
    /// Denormalized counter maintained by the application, not derived
    /// from the comments sub-collection.
    pub comments_count: i32,
}

/// Child record of a post; its id is unique within that post only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: AuthorSnapshot,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub likes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<String>,
    pub last_message: LastMessage,
}

/// Denormalized preview of the newest message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    pub text: String,
    pub sender_id: String,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
}

/// Child record of a conversation; its id is unique within that
/// conversation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// Target user.
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Snapshot of the actor that triggered the notification.
    pub from: AuthorSnapshot,
    pub content: String,
    /// Related resource (post id, conversation id, ...), when there is one.
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(with = "datetime_format")]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}
