use crate::theme::AuthorRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Phrasing applied around a rendered duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePhrase {
    /// Duration from the comment to now.
    Ago,
    /// Duration from the post to the comment.
    AfterPost,
    /// Duration from the parent comment to the comment.
    AfterReply,
}

/// Every user-facing string the renderer emits. Implementations localize;
/// `EnglishStrings` is the default.
pub trait Strings: Send + Sync {
    fn points_label(&self) -> String;
    fn to_label(&self) -> String;
    fn gold_label(&self) -> String;
    fn controversial_symbol(&self) -> String;
    fn score_placeholder(&self) -> String;

    fn time_unit(&self, unit: TimeUnit, count: u64) -> String;
    fn time_phrase(&self, phrase: TimePhrase, duration: &str) -> String;

    /// Adjusts a name for screen-reader output. Identity by default.
    fn pronunciation(&self, name: &str) -> String {
        name.to_string()
    }

    fn accessibility_collapsed(&self) -> String;
    fn accessibility_author(&self, name: &str, role: AuthorRole) -> String;
    fn accessibility_flair(&self, flair: &str) -> String;
    fn accessibility_points(&self, score: i64) -> String;
    fn accessibility_points_unknown(&self) -> String;
    fn accessibility_controversial(&self) -> String;
    fn accessibility_gold(&self, count: u32) -> String;
    fn accessibility_age(&self, age: &str) -> String;
    fn accessibility_edited(&self) -> String;
    fn accessibility_subreddit(&self, name: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl Strings for EnglishStrings {
    fn points_label(&self) -> String {
        "points".to_string()
    }

    fn to_label(&self) -> String {
        "to".to_string()
    }

    fn gold_label(&self) -> String {
        "gold".to_string()
    }

    fn controversial_symbol(&self) -> String {
        "†".to_string()
    }

    fn score_placeholder(&self) -> String {
        "??".to_string()
    }

    fn time_unit(&self, unit: TimeUnit, count: u64) -> String {
        let name = match unit {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        };
        if count == 1 {
            format!("1 {}", name)
        } else {
            format!("{} {}s", count, name)
        }
    }

    fn time_phrase(&self, phrase: TimePhrase, duration: &str) -> String {
        match phrase {
            TimePhrase::Ago => format!("{} ago", duration),
            TimePhrase::AfterPost => format!("{} after the post", duration),
            TimePhrase::AfterReply => format!("{} after the parent comment", duration),
        }
    }

    /// Underscored handles read badly when spoken; split them into words.
    fn pronunciation(&self, name: &str) -> String {
        name.replace('_', " ")
    }

    fn accessibility_collapsed(&self) -> String {
        "Comment is collapsed.".to_string()
    }

    fn accessibility_author(&self, name: &str, role: AuthorRole) -> String {
        match role {
            AuthorRole::Submitter => format!("Posted by {}, the post author.", name),
            AuthorRole::SubmitterModerator => {
                format!("Posted by {}, the post author and a moderator.", name)
            }
            AuthorRole::SubmitterAdmin => {
                format!("Posted by {}, the post author and an admin.", name)
            }
            AuthorRole::Moderator => format!("Posted by {}, a moderator.", name),
            AuthorRole::Admin => format!("Posted by {}, an admin.", name),
            AuthorRole::Plain => format!("Posted by {}.", name),
        }
    }

    fn accessibility_flair(&self, flair: &str) -> String {
        format!("Flair: {}.", flair)
    }

    fn accessibility_points(&self, score: i64) -> String {
        if score == 1 || score == -1 {
            format!("{} point.", score)
        } else {
            format!("{} points.", score)
        }
    }

    fn accessibility_points_unknown(&self) -> String {
        "Score unknown.".to_string()
    }

    fn accessibility_controversial(&self) -> String {
        "Comment is controversial.".to_string()
    }

    fn accessibility_gold(&self, count: u32) -> String {
        if count == 1 {
            "Gilded once.".to_string()
        } else {
            format!("Gilded {} times.", count)
        }
    }

    fn accessibility_age(&self, age: &str) -> String {
        format!("Posted {}.", age)
    }

    fn accessibility_edited(&self) -> String {
        "Edited since being posted.".to_string()
    }

    fn accessibility_subreddit(&self, name: &str) -> String {
        format!("In subreddit {}.", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_pluralize() {
        let strings = EnglishStrings;
        assert_eq!(strings.time_unit(TimeUnit::Hour, 1), "1 hour");
        assert_eq!(strings.time_unit(TimeUnit::Hour, 3), "3 hours");
        assert_eq!(strings.time_unit(TimeUnit::Second, 0), "0 seconds");
    }

    #[test]
    fn phrases_wrap_duration() {
        let strings = EnglishStrings;
        assert_eq!(strings.time_phrase(TimePhrase::Ago, "2 days"), "2 days ago");
        assert_eq!(
            strings.time_phrase(TimePhrase::AfterReply, "5 minutes"),
            "5 minutes after the parent comment"
        );
    }

    #[test]
    fn pronunciation_splits_underscores() {
        let strings = EnglishStrings;
        assert_eq!(strings.pronunciation("some_user_name"), "some user name");
    }

    #[test]
    fn author_sentences_cover_all_roles() {
        let strings = EnglishStrings;
        assert_eq!(
            strings.accessibility_author("ada", AuthorRole::SubmitterAdmin),
            "Posted by ada, the post author and an admin."
        );
        assert_eq!(
            strings.accessibility_author("ada", AuthorRole::Plain),
            "Posted by ada."
        );
    }
}
