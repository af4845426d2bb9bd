use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::Utc;

use lobby_store::{CollectionRef, DocumentStore};
use lobby_types::{
    AuthorSnapshot, Comment, Conversation, LastMessage, MediaType, Message, Notification,
    NotificationKind, Post, User,
};

/// Populates a development store with one representative record per
/// entity type, at the paths the application reads from:
///
/// - `users/{uid}`
/// - `posts/{postId}` and `posts/{postId}/comments/{commentId}`
/// - `conversations/{convId}` and `conversations/{convId}/messages/{msgId}`
/// - `notifications/{notifId}`
///
/// Every field is a fixed literal except timestamps, which are captured
/// at call time. A failed write propagates immediately; documents
/// already written stay in place.
pub struct Seeder<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> Seeder<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Run every seeding step in order: users, posts, conversations,
    /// notifications.
    pub fn run_all(&self) -> Result<()> {
        self.seed_users()?;
        self.seed_posts()?;
        self.seed_conversations()?;
        self.seed_notifications()?;
        Ok(())
    }

    /// Write the sample user to `users/user_1`.
    pub fn seed_users(&self) -> Result<()> {
        let user = sample_user();
        let users = CollectionRef::new("users");
        let document = serde_json::to_value(&user)?;

        self.store
            .set_document(&users, &user.uid, &document)
            .context("Failed to write user document")?;

        tracing::info!(uid = %user.uid, "user document created");
        Ok(())
    }

    /// Write the sample post to `posts/post_1`, then its comment to
    /// `posts/post_1/comments/comment_1`. The post goes first so the
    /// comment is never visible without its parent.
    pub fn seed_posts(&self) -> Result<()> {
        let post = sample_post();
        let posts = CollectionRef::new("posts");
        let document = serde_json::to_value(&post)?;

        self.store
            .set_document(&posts, &post.id, &document)
            .context("Failed to write post document")?;

        let comment = sample_comment();
        let comments = posts.doc(&post.id).collection("comments");
        let document = serde_json::to_value(&comment)?;

        self.store
            .set_document(&comments, &comment.id, &document)
            .context("Failed to write comment document")?;

        tracing::info!(post = %post.id, comment = %comment.id, "post and comment created");
        Ok(())
    }

    /// Write the sample conversation to `conversations/conv_1`, then its
    /// message to `conversations/conv_1/messages/msg_1`.
    pub fn seed_conversations(&self) -> Result<()> {
        let conversation = sample_conversation();
        let conversations = CollectionRef::new("conversations");
        let document = serde_json::to_value(&conversation)?;

        self.store
            .set_document(&conversations, &conversation.id, &document)
            .context("Failed to write conversation document")?;

        let message = sample_message();
        let messages = conversations.doc(&conversation.id).collection("messages");
        let document = serde_json::to_value(&message)?;

        self.store
            .set_document(&messages, &message.id, &document)
            .context("Failed to write message document")?;

        tracing::info!(
            conversation = %conversation.id,
            message = %message.id,
            "conversation and message created"
        );
        Ok(())
    }

    /// Write the sample notification to `notifications/notif_1`.
    pub fn seed_notifications(&self) -> Result<()> {
        let notification = sample_notification();
        let notifications = CollectionRef::new("notifications");
        let document = serde_json::to_value(&notification)?;

        self.store
            .set_document(&notifications, &notification.id, &document)
            .context("Failed to write notification document")?;

        tracing::info!(id = %notification.id, "notification created");
        Ok(())
    }
}

fn sample_user() -> User {
    User {
        uid: "user_1".to_string(),
        email: "user1@example.com".to_string(),
        username: "userone".to_string(),
        display_name: "User One".to_string(),
        photo_url: "https://example.com/photo1.jpg".to_string(),
        bio: "This is user one".to_string(),
        created_at: Utc::now(),
        is_private: false,
        followers: vec!["user_2".to_string(), "user_3".to_string()],
        following: vec!["user_2".to_string()],
        game_ids: HashMap::from([
            ("valorant".to_string(), "Gold".to_string()),
            ("csgo".to_string(), "Silver".to_string()),
            ("leagueoflegends".to_string(), "Platinum".to_string()),
        ]),
        social_links: HashMap::from([
            ("twitch".to_string(), "twitchuser1".to_string()),
            ("youtube".to_string(), "youtubeuser1".to_string()),
            ("twitter".to_string(), "twitteruser1".to_string()),
            ("instagram".to_string(), "instagramuser1".to_string()),
        ]),
        saved_posts: vec!["post_1".to_string(), "post_2".to_string()],
    }
}

fn sample_post() -> Post {
    Post {
        id: "post_1".to_string(),
        author: AuthorSnapshot {
            id: "user_1".to_string(),
            username: "userone".to_string(),
            display_name: "User One".to_string(),
            photo_url: "https://example.com/photo1.jpg".to_string(),
        },
        content: "This is a post".to_string(),
        media_url: Some("https://example.com/image.jpg".to_string()),
        media_type: Some(MediaType::Image),
        game_tag: "valorant".to_string(),
        created_at: Utc::now(),
        likes: vec!["user_2".to_string()],
        saves: vec!["user_3".to_string()],
        // Snapshot of the application-maintained counter, not a count of
        // the comment documents written here
        comments_count: 1,
    }
}

fn sample_comment() -> Comment {
    Comment {
        id: "comment_1".to_string(),
        text: "Nice post!".to_string(),
        author: AuthorSnapshot {
            id: "user_2".to_string(),
            username: "usertwo".to_string(),
            display_name: "User Two".to_string(),
            photo_url: "https://example.com/photo2.jpg".to_string(),
        },
        created_at: Utc::now(),
        likes: vec!["user_1".to_string()],
    }
}

fn sample_conversation() -> Conversation {
    Conversation {
        id: "conv_1".to_string(),
        participants: vec!["user_1".to_string(), "user_2".to_string()],
        last_message: LastMessage {
            text: "Hey, how are you?".to_string(),
            sender_id: "user_1".to_string(),
            timestamp: Utc::now(),
        },
    }
}

fn sample_message() -> Message {
    Message {
        id: "msg_1".to_string(),
        sender_id: "user_1".to_string(),
        text: "Hey, how are you?".to_string(),
        media_url: None,
        media_type: None,
        timestamp: Utc::now(),
        read: false,
    }
}

fn sample_notification() -> Notification {
    Notification {
        id: "notif_1".to_string(),
        user_id: "user_1".to_string(),
        kind: NotificationKind::Follow,
        from: AuthorSnapshot {
            id: "user_2".to_string(),
            username: "usertwo".to_string(),
            display_name: "User Two".to_string(),
            photo_url: "https://example.com/photo2.jpg".to_string(),
        },
        content: "User Two followed you".to_string(),
        resource_id: None,
        created_at: Utc::now(),
        read: false,
    }
}
