use std::collections::HashSet;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::comment::Distinguishment;

/// Header segment kinds, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderItem {
    Author,
    Flair,
    Score,
    Controversiality,
    Gold,
    Age,
    Subreddit,
}

impl HeaderItem {
    pub const ALL: [HeaderItem; 7] = [
        HeaderItem::Author,
        HeaderItem::Flair,
        HeaderItem::Score,
        HeaderItem::Controversiality,
        HeaderItem::Gold,
        HeaderItem::Age,
        HeaderItem::Subreddit,
    ];
}

/// How the author segment should be presented. Distinguishment outranks
/// plain post-author status; admin outranks moderator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorRole {
    Submitter,
    SubmitterModerator,
    SubmitterAdmin,
    Moderator,
    Admin,
    Plain,
}

impl AuthorRole {
    pub fn new(is_submitter: bool, distinguished: Distinguishment) -> Self {
        match (is_submitter, distinguished) {
            (true, Distinguishment::Admin) => AuthorRole::SubmitterAdmin,
            (true, Distinguishment::Moderator) => AuthorRole::SubmitterModerator,
            (true, Distinguishment::None) => AuthorRole::Submitter,
            (false, Distinguishment::Admin) => AuthorRole::Admin,
            (false, Distinguishment::Moderator) => AuthorRole::Moderator,
            (false, Distinguishment::None) => AuthorRole::Plain,
        }
    }

    pub fn is_submitter(self) -> bool {
        matches!(
            self,
            AuthorRole::Submitter | AuthorRole::SubmitterModerator | AuthorRole::SubmitterAdmin
        )
    }
}

const COLOR_AUTHOR: Color = Color::Rgb(137, 180, 250);
const COLOR_HEADER_BOLD: Color = Color::Rgb(205, 214, 244);
const COLOR_UPVOTE: Color = Color::Rgb(250, 179, 135);
const COLOR_DOWNVOTE: Color = Color::Rgb(137, 220, 235);
const COLOR_FLAIR_TEXT: Color = Color::Rgb(30, 30, 46);
const COLOR_FLAIR_BACK: Color = Color::Rgb(203, 166, 247);
const COLOR_GOLD_TEXT: Color = Color::Rgb(30, 30, 46);
const COLOR_GOLD_BACK: Color = Color::Rgb(249, 226, 175);
const COLOR_HIGHLIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
const COLOR_SUBMITTER_BACK: Color = Color::Rgb(0, 126, 168);
const COLOR_MODERATOR: Color = Color::Rgb(0, 170, 0);
const COLOR_ADMIN: Color = Color::Rgb(170, 0, 0);

/// Colors and visibility switches for header rendering. Stands in for the
/// application theme; callers supply their own to restyle the output.
#[derive(Debug, Clone)]
pub struct Theme {
    pub author: Color,
    pub header_bold: Color,
    pub upvote: Color,
    pub downvote: Color,
    pub flair_text: Color,
    pub flair_back: Color,
    pub gold_text: Color,
    pub gold_back: Color,
    pub highlight_text: Color,
    pub submitter_back: Color,
    pub moderator: Color,
    pub admin: Color,
    pub header_items: HashSet<HeaderItem>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            author: COLOR_AUTHOR,
            header_bold: COLOR_HEADER_BOLD,
            upvote: COLOR_UPVOTE,
            downvote: COLOR_DOWNVOTE,
            flair_text: COLOR_FLAIR_TEXT,
            flair_back: COLOR_FLAIR_BACK,
            gold_text: COLOR_GOLD_TEXT,
            gold_back: COLOR_GOLD_BACK,
            highlight_text: COLOR_HIGHLIGHT_TEXT,
            submitter_back: COLOR_SUBMITTER_BACK,
            moderator: COLOR_MODERATOR,
            admin: COLOR_ADMIN,
            header_items: HeaderItem::ALL.into_iter().collect(),
        }
    }
}

impl Theme {
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = HeaderItem>,
    {
        Self {
            header_items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn should_show(&self, item: HeaderItem) -> bool {
        self.header_items.contains(&item)
    }

    /// Background color for the author badge. Only the post author gets a
    /// badge; distinguished non-authors are colored in the foreground.
    pub fn author_highlight(&self, role: AuthorRole) -> Option<Color> {
        match role {
            AuthorRole::SubmitterAdmin => Some(self.admin),
            AuthorRole::SubmitterModerator => Some(self.moderator),
            AuthorRole::Submitter => Some(self.submitter_back),
            _ => None,
        }
    }

    /// Foreground color for an author rendered without a badge.
    pub fn author_foreground(&self, role: AuthorRole) -> Color {
        match role {
            AuthorRole::Admin => self.admin,
            AuthorRole::Moderator => self.moderator,
            _ => self.author,
        }
    }
}
