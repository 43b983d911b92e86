use crate::locale::Strings;
use crate::renderable::Segment;

const SEPARATOR: &str = " \n";

/// Builds the screen-reader description from the same resolved segments the
/// styled composer consumes: one full sentence per item, separated for
/// sequential reading.
pub fn compose_accessibility_header(
    segments: &[Segment],
    strings: &dyn Strings,
    collapsed: bool,
) -> String {
    let mut out = String::new();

    if collapsed {
        push_sentence(&mut out, strings.accessibility_collapsed());
    }

    for segment in segments {
        match segment {
            Segment::Author { name, role } => {
                let spoken = strings.pronunciation(name);
                push_sentence(&mut out, strings.accessibility_author(&spoken, *role));
            }
            Segment::Flair { text } => {
                push_sentence(&mut out, strings.accessibility_flair(text));
            }
            Segment::Score { value, hidden, .. } => {
                let sentence = if *hidden {
                    strings.accessibility_points_unknown()
                } else {
                    strings.accessibility_points(*value)
                };
                push_sentence(&mut out, sentence);
            }
            Segment::Controversiality { marked } => {
                if *marked {
                    push_sentence(&mut out, strings.accessibility_controversial());
                }
            }
            Segment::Gold { count } => {
                push_sentence(&mut out, strings.accessibility_gold(*count));
            }
            Segment::Age { text, edited } => {
                push_sentence(&mut out, strings.accessibility_age(text));
                if *edited {
                    push_sentence(&mut out, strings.accessibility_edited());
                }
            }
            Segment::Subreddit { name } => {
                let spoken = strings.pronunciation(name);
                push_sentence(&mut out, strings.accessibility_subreddit(&spoken));
            }
        }
    }

    out
}

fn push_sentence(out: &mut String, sentence: String) {
    out.push_str(&sentence);
    out.push_str(SEPARATOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishStrings;
    use crate::overlay::VoteDirection;
    use crate::theme::AuthorRole;

    #[test]
    fn empty_segments_yield_empty_string() {
        let out = compose_accessibility_header(&[], &EnglishStrings, false);
        assert!(out.is_empty());
    }

    #[test]
    fn collapsed_prefix_comes_first() {
        let out = compose_accessibility_header(
            &[Segment::Score {
                value: 3,
                hidden: false,
                direction: VoteDirection::None,
            }],
            &EnglishStrings,
            true,
        );
        assert!(out.starts_with("Comment is collapsed. \n"));
        assert!(out.contains("3 points."));
    }

    #[test]
    fn collapsed_prefix_alone_when_nothing_enabled() {
        let out = compose_accessibility_header(&[], &EnglishStrings, true);
        assert_eq!(out, "Comment is collapsed. \n");
    }

    #[test]
    fn author_sentence_uses_pronunciation_and_role() {
        let out = compose_accessibility_header(
            &[Segment::Author {
                name: "snake_case".into(),
                role: AuthorRole::SubmitterModerator,
            }],
            &EnglishStrings,
            false,
        );
        assert_eq!(
            out,
            "Posted by snake case, the post author and a moderator. \n"
        );
    }

    #[test]
    fn hidden_score_reads_as_unknown() {
        let out = compose_accessibility_header(
            &[Segment::Score {
                value: 99,
                hidden: true,
                direction: VoteDirection::None,
            }],
            &EnglishStrings,
            false,
        );
        assert!(out.contains("Score unknown."));
        assert!(!out.contains("99"));
    }

    #[test]
    fn unmarked_controversiality_is_silent() {
        let out = compose_accessibility_header(
            &[Segment::Controversiality { marked: false }],
            &EnglishStrings,
            false,
        );
        assert!(out.is_empty());

        let out = compose_accessibility_header(
            &[Segment::Controversiality { marked: true }],
            &EnglishStrings,
            false,
        );
        assert_eq!(out, "Comment is controversial. \n");
    }

    #[test]
    fn edited_age_is_a_separate_sentence() {
        let out = compose_accessibility_header(
            &[Segment::Age {
                text: "2 hours ago".into(),
                edited: true,
            }],
            &EnglishStrings,
            false,
        );
        assert_eq!(out, "Posted 2 hours ago. \nEdited since being posted. \n");
    }

    #[test]
    fn gold_sentence_carries_count() {
        let once = compose_accessibility_header(&[Segment::Gold { count: 1 }], &EnglishStrings, false);
        assert_eq!(once, "Gilded once. \n");
        let many = compose_accessibility_header(&[Segment::Gold { count: 4 }], &EnglishStrings, false);
        assert_eq!(many, "Gilded 4 times. \n");
    }
}
