use chrono::{DateTime, Utc};
use ratatui::text::Line;

use crate::accessibility::compose_accessibility_header;
use crate::age::{format_age, AgeMode};
use crate::collapse;
use crate::comment::CommentRecord;
use crate::header::compose_header;
use crate::locale::Strings;
use crate::overlay::{OverlaySnapshot, VoteDirection};
use crate::score::{compute_score, effective_direction};
use crate::theme::{AuthorRole, HeaderItem, Theme};

/// Keeps right-to-left flair text from reordering the segments around it.
pub const LTR_OVERRIDE_MARK: char = '\u{202D}';

/// Caller-supplied settings for one render pass. Never mutated by the
/// renderer.
#[derive(Debug, Clone)]
pub struct PresentationContext {
    pub parent_post_author: Option<String>,
    pub minimum_comment_score: Option<i64>,
    pub current_canonical_user: String,
    pub show_score: bool,
    pub show_subreddit: bool,
    pub never_auto_collapse: bool,
    pub age_mode: AgeMode,
    /// Number of leading duration units rendered for the age.
    pub age_units: usize,
    /// Post creation time, unix seconds. `None` when unknown.
    pub post_created_utc: Option<i64>,
    /// Parent comment creation time, unix seconds. `None` when unknown.
    pub parent_created_utc: Option<i64>,
}

impl Default for PresentationContext {
    fn default() -> Self {
        Self {
            parent_post_author: None,
            minimum_comment_score: None,
            current_canonical_user: String::new(),
            show_score: true,
            show_subreddit: false,
            never_auto_collapse: false,
            age_mode: AgeMode::Absolute,
            age_units: 1,
            post_created_utc: None,
            parent_created_utc: None,
        }
    }
}

/// One included header item with its data already resolved. Built once per
/// render pass and consumed by both the styled and the accessibility
/// composer, so the two cannot disagree about what is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Author {
        name: String,
        role: AuthorRole,
    },
    Flair {
        text: String,
    },
    Score {
        value: i64,
        hidden: bool,
        direction: VoteDirection,
    },
    Controversiality {
        marked: bool,
    },
    Gold {
        count: u32,
    },
    Age {
        text: String,
        edited: bool,
    },
    Subreddit {
        name: String,
    },
}

fn is_submitter(record: &CommentRecord, ctx: &PresentationContext) -> bool {
    if record.is_deleted_author() {
        return false;
    }
    ctx.parent_post_author
        .as_deref()
        .is_some_and(|parent| record.author.eq_ignore_ascii_case(parent))
}

/// Resolves which header items appear for this comment, in emission order.
pub fn build_segments(
    record: &CommentRecord,
    ctx: &PresentationContext,
    theme: &Theme,
    overlay: &OverlaySnapshot,
    strings: &dyn Strings,
    now: DateTime<Utc>,
) -> Vec<Segment> {
    let mut segments = Vec::new();

    if theme.should_show(HeaderItem::Author) {
        segments.push(Segment::Author {
            name: record.author.clone(),
            role: AuthorRole::new(is_submitter(record, ctx), record.distinguished),
        });
    }

    if theme.should_show(HeaderItem::Flair) {
        if let Some(flair) = record.flair_text.as_deref() {
            if !flair.is_empty() {
                segments.push(Segment::Flair {
                    text: format!("{}{}", flair, LTR_OVERRIDE_MARK),
                });
            }
        }
    }

    if theme.should_show(HeaderItem::Score) && ctx.show_score {
        segments.push(Segment::Score {
            value: compute_score(record, overlay),
            hidden: record.score_hidden,
            direction: effective_direction(record, overlay),
        });
    }

    if theme.should_show(HeaderItem::Controversiality) {
        segments.push(Segment::Controversiality {
            marked: record.is_controversial(),
        });
    }

    if theme.should_show(HeaderItem::Gold) && record.gilded > 0 {
        segments.push(Segment::Gold {
            count: record.gilded,
        });
    }

    if theme.should_show(HeaderItem::Age) {
        segments.push(Segment::Age {
            text: format_age(
                strings,
                ctx.age_mode,
                ctx.age_units,
                record.created_millis(),
                ctx.post_created_utc.map(|secs| secs * 1000),
                ctx.parent_created_utc.map(|secs| secs * 1000),
                now.timestamp_millis(),
            ),
            edited: record.was_edited(),
        });
    }

    if theme.should_show(HeaderItem::Subreddit) && ctx.show_subreddit {
        segments.push(Segment::Subreddit {
            name: record.subreddit.clone(),
        });
    }

    segments
}

/// A comment plus its presentation settings, ready to render. All methods are
/// pure; repeated calls with the same overlay snapshot produce identical
/// output.
#[derive(Debug, Clone)]
pub struct RenderableComment {
    record: CommentRecord,
    ctx: PresentationContext,
}

impl RenderableComment {
    pub fn new(record: CommentRecord, ctx: PresentationContext) -> Self {
        Self { record, ctx }
    }

    pub fn record(&self) -> &CommentRecord {
        &self.record
    }

    pub fn context(&self) -> &PresentationContext {
        &self.ctx
    }

    pub fn score(&self, overlay: &OverlaySnapshot) -> i64 {
        compute_score(&self.record, overlay)
    }

    /// Styled header line: author, flair, score, controversiality, gilding,
    /// age, subreddit, in that order, filtered by the theme and context.
    pub fn header(
        &self,
        theme: &Theme,
        strings: &dyn Strings,
        overlay: &OverlaySnapshot,
        now: DateTime<Utc>,
    ) -> Line<'static> {
        let segments = build_segments(&self.record, &self.ctx, theme, overlay, strings, now);
        compose_header(&segments, theme, strings)
    }

    /// Screen-reader description of the same items as [`Self::header`].
    pub fn accessibility_header(
        &self,
        theme: &Theme,
        strings: &dyn Strings,
        overlay: &OverlaySnapshot,
        now: DateTime<Utc>,
        collapsed: bool,
    ) -> String {
        let segments = build_segments(&self.record, &self.ctx, theme, overlay, strings, now);
        compose_accessibility_header(&segments, strings, collapsed)
    }

    pub fn is_collapsed(&self, overlay: &OverlaySnapshot) -> bool {
        collapse::is_collapsed(&self.record, &self.ctx, overlay)
    }
}
