/// Reference to a named collection of documents.
///
/// A collection is either top-level (`users`) or nested under a parent
/// document (`posts/post_1/comments`). Nesting depth is unbounded; the
/// path string is the full address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionRef {
    path: String,
}

impl CollectionRef {
    /// A top-level collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self { path: name.into() }
    }

    /// Reference a document inside this collection.
    pub fn doc(&self, id: impl Into<String>) -> DocumentRef {
        DocumentRef {
            collection: self.clone(),
            id: id.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

/// Reference to a single document, addressed by its collection and id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    collection: CollectionRef,
    id: String,
}

impl DocumentRef {
    /// A sub-collection nested under this document.
    pub fn collection(&self, name: &str) -> CollectionRef {
        CollectionRef {
            path: format!("{}/{}/{}", self.collection.path(), self.id, name),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> &CollectionRef {
        &self.collection
    }

    /// Full path of the document itself, e.g. `posts/post_1`.
    pub fn path(&self) -> String {
        format!("{}/{}", self.collection.path(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_collection() {
        let users = CollectionRef::new("users");
        assert_eq!(users.path(), "users");
        assert_eq!(users.doc("user_1").path(), "users/user_1");
    }

    #[test]
    fn test_nested_sub_collection() {
        let posts = CollectionRef::new("posts");
        let comments = posts.doc("post_1").collection("comments");
        assert_eq!(comments.path(), "posts/post_1/comments");
        assert_eq!(
            comments.doc("comment_1").path(),
            "posts/post_1/comments/comment_1"
        );
    }

    #[test]
    fn test_deeper_nesting() {
        let conversations = CollectionRef::new("conversations");
        let messages = conversations.doc("conv_1").collection("messages");
        let reactions = messages.doc("msg_1").collection("reactions");
        assert_eq!(reactions.path(), "conversations/conv_1/messages/msg_1/reactions");
    }
}
