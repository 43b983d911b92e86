use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::overlay::VoteDirection;

/// Sentinel author name the server substitutes for deleted accounts.
pub const DELETED_AUTHOR: &str = "[deleted]";

const SITE_BASE_URL: &str = "https://reddit.com";

/// Label marking a comment as posted in an official capacity. The wire field
/// is a free-form nullable string; anything unrecognized normalizes to
/// `None` at the deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distinguishment {
    #[default]
    None,
    Moderator,
    Admin,
}

impl Distinguishment {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("moderator") => Distinguishment::Moderator,
            Some("admin") => Distinguishment::Admin,
            _ => Distinguishment::None,
        }
    }
}

/// The wire `edited` field: absent, a boolean, or an edit timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Edited {
    #[default]
    Absent,
    No,
    Yes,
    At(i64),
}

impl Edited {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Edited::Absent,
            Value::Bool(false) => Edited::No,
            Value::Bool(true) => Edited::Yes,
            Value::Number(n) => n.as_i64().map(Edited::At).unwrap_or(Edited::Yes),
            _ => Edited::Absent,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("comment {0} has no link id")]
    MissingLinkId(String),
    #[error("invalid context url")]
    InvalidContextUrl(#[from] url::ParseError),
}

/// Immutable snapshot of a fetched comment. Local vote and fold state live in
/// the change overlay and are never merged back into the record.
#[derive(Debug, Clone, Serialize)]
pub struct CommentRecord {
    pub id: String,
    pub name: String,
    pub parent_id: String,
    pub link_id: String,
    pub context: String,
    pub author: String,
    pub distinguished: Distinguishment,
    pub flair_text: Option<String>,
    pub subreddit: String,
    pub ups: i64,
    pub downs: i64,
    pub likes: Option<bool>,
    pub score_hidden: bool,
    pub gilded: u32,
    pub controversiality: i64,
    pub created_utc: i64,
    pub edited: Edited,
    pub archived: bool,
    pub saved: Option<bool>,
}

impl<'de> Deserialize<'de> for CommentRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RecordHelper {
            id: String,
            name: String,
            #[serde(default)]
            parent_id: String,
            #[serde(default)]
            link_id: String,
            #[serde(default)]
            context: String,
            #[serde(default)]
            author: String,
            #[serde(default)]
            distinguished: Option<String>,
            #[serde(default)]
            author_flair_text: Option<String>,
            #[serde(default)]
            subreddit: String,
            #[serde(default)]
            ups: i64,
            #[serde(default)]
            downs: i64,
            #[serde(default)]
            likes: Option<bool>,
            #[serde(default)]
            score_hidden: bool,
            #[serde(default)]
            gilded: u32,
            #[serde(default)]
            controversiality: i64,
            #[serde(default)]
            created_utc: f64,
            #[serde(default)]
            edited: Value,
            #[serde(default)]
            archived: bool,
            #[serde(default)]
            saved: Option<bool>,
        }

        let helper = RecordHelper::deserialize(deserializer)?;
        Ok(CommentRecord {
            id: helper.id,
            name: helper.name,
            parent_id: helper.parent_id,
            link_id: helper.link_id,
            context: helper.context,
            author: helper.author,
            distinguished: Distinguishment::from_raw(helper.distinguished.as_deref()),
            flair_text: helper.author_flair_text,
            subreddit: helper.subreddit,
            ups: helper.ups,
            downs: helper.downs,
            likes: helper.likes,
            score_hidden: helper.score_hidden,
            gilded: helper.gilded,
            controversiality: helper.controversiality,
            created_utc: helper.created_utc.trunc() as i64,
            edited: Edited::from_value(&helper.edited),
            archived: helper.archived,
            saved: helper.saved,
        })
    }
}

impl CommentRecord {
    pub fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("decode comment record")
    }

    pub fn was_edited(&self) -> bool {
        !matches!(self.edited, Edited::Absent | Edited::No)
    }

    pub fn is_controversial(&self) -> bool {
        self.controversiality == 1
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn is_deleted_author(&self) -> bool {
        self.author == DELETED_AUTHOR
    }

    pub fn server_vote(&self) -> VoteDirection {
        VoteDirection::from_likes(self.likes)
    }

    pub fn created_millis(&self) -> i64 {
        self.created_utc * 1000
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.created_utc, 0).single()
    }

    /// URL of the comment in its thread. Uses the server-supplied context
    /// path when present, otherwise builds a permalink from the link id.
    pub fn context_url(&self) -> Result<Url, RecordError> {
        if !self.context.is_empty() {
            let mut raw = self.context.clone();
            if raw.starts_with("r/") {
                raw.insert(0, '/');
            }
            if raw.starts_with('/') {
                raw = format!("{}{}", SITE_BASE_URL, raw);
            }
            return Ok(Url::parse(&raw)?);
        }

        let link = self.link_id.trim_start_matches("t3_");
        if link.is_empty() {
            return Err(RecordError::MissingLinkId(self.id.clone()));
        }
        Ok(Url::parse(&format!(
            "{}/comments/{}/comment/{}?context=3",
            SITE_BASE_URL, link, self.id
        ))?)
    }
}
