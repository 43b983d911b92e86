use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::locale::Strings;
use crate::overlay::VoteDirection;
use crate::renderable::Segment;
use crate::theme::{HeaderItem, Theme};

const NBSP: char = '\u{00A0}';

/// Assembles the styled header line from resolved segments. Separator
/// handling is local to each segment, so omitted items never leave stray
/// spacing behind.
pub fn compose_header(segments: &[Segment], theme: &Theme, strings: &dyn Strings) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut author_shown = false;
    let mut name_block_open = false;

    for segment in segments {
        match segment {
            Segment::Author { name, role } => {
                let span = match theme.author_highlight(*role) {
                    Some(background) => Span::styled(
                        format!(" {} ", name),
                        Style::default()
                            .fg(theme.highlight_text)
                            .bg(background)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(
                        name.clone(),
                        Style::default()
                            .fg(theme.author_foreground(*role))
                            .add_modifier(Modifier::BOLD),
                    ),
                };
                spans.push(span);
                author_shown = true;
                name_block_open = true;
            }
            Segment::Flair { text } => {
                if author_shown {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(
                    format!(" {} ", text),
                    Style::default().fg(theme.flair_text).bg(theme.flair_back),
                ));
                name_block_open = true;
            }
            Segment::Score {
                value,
                hidden,
                direction,
            } => {
                close_name_block(&mut spans, &mut name_block_open);
                let color = match direction {
                    VoteDirection::Up => theme.upvote,
                    VoteDirection::Down => theme.downvote,
                    VoteDirection::None => theme.header_bold,
                };
                let number = if *hidden {
                    strings.score_placeholder()
                } else {
                    value.to_string()
                };
                spans.push(Span::styled(
                    number,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(format!(" {}", strings.points_label())));
                if !theme.should_show(HeaderItem::Controversiality) {
                    spans.push(Span::raw(" "));
                }
            }
            Segment::Controversiality { marked } => {
                close_name_block(&mut spans, &mut name_block_open);
                if *marked {
                    spans.push(Span::styled(
                        strings.controversial_symbol(),
                        Style::default()
                            .fg(theme.header_bold)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                spans.push(Span::raw(" "));
            }
            Segment::Gold { count } => {
                close_name_block(&mut spans, &mut name_block_open);
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    format!(" {}{}x{} ", strings.gold_label(), NBSP, count),
                    Style::default().fg(theme.gold_text).bg(theme.gold_back),
                ));
                spans.push(Span::raw("  "));
            }
            Segment::Age { text, edited } => {
                close_name_block(&mut spans, &mut name_block_open);
                let style = Style::default()
                    .fg(theme.header_bold)
                    .add_modifier(Modifier::BOLD);
                spans.push(Span::styled(text.clone(), style));
                if *edited {
                    spans.push(Span::styled("*", style));
                }
                spans.push(Span::raw(" "));
            }
            Segment::Subreddit { name } => {
                close_name_block(&mut spans, &mut name_block_open);
                spans.push(Span::raw(format!("{} ", strings.to_label())));
                spans.push(Span::styled(
                    name.clone(),
                    Style::default()
                        .fg(theme.header_bold)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }
    }

    Line::from(spans)
}

// Wide gap after the author/flair group, emitted once before the first
// segment that follows it.
fn close_name_block(spans: &mut Vec<Span<'static>>, open: &mut bool) {
    if *open {
        spans.push(Span::raw("   "));
        *open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishStrings;
    use crate::theme::AuthorRole;

    fn line_text(line: &Line<'_>) -> String {
        line.spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn empty_segments_yield_empty_line() {
        let line = compose_header(&[], &Theme::default(), &EnglishStrings);
        assert!(line.spans.is_empty());
    }

    #[test]
    fn plain_author_has_no_background() {
        let theme = Theme::default();
        let line = compose_header(
            &[Segment::Author {
                name: "alice".into(),
                role: AuthorRole::Plain,
            }],
            &theme,
            &EnglishStrings,
        );
        assert_eq!(line.spans[0].content.as_ref(), "alice");
        assert_eq!(line.spans[0].style.fg, Some(theme.author));
        assert_eq!(line.spans[0].style.bg, None);
    }

    #[test]
    fn submitter_author_is_badged() {
        let theme = Theme::default();
        let line = compose_header(
            &[Segment::Author {
                name: "alice".into(),
                role: AuthorRole::Submitter,
            }],
            &theme,
            &EnglishStrings,
        );
        assert_eq!(line.spans[0].content.as_ref(), " alice ");
        assert_eq!(line.spans[0].style.bg, Some(theme.submitter_back));
        assert_eq!(line.spans[0].style.fg, Some(theme.highlight_text));
    }

    #[test]
    fn distinguished_non_submitter_is_foreground_colored() {
        let theme = Theme::default();
        let line = compose_header(
            &[Segment::Author {
                name: "mod".into(),
                role: AuthorRole::Moderator,
            }],
            &theme,
            &EnglishStrings,
        );
        assert_eq!(line.spans[0].style.fg, Some(theme.moderator));
        assert_eq!(line.spans[0].style.bg, None);
    }

    #[test]
    fn flair_is_separated_only_after_author() {
        let theme = Theme::default();
        let with_author = compose_header(
            &[
                Segment::Author {
                    name: "alice".into(),
                    role: AuthorRole::Plain,
                },
                Segment::Flair {
                    text: "rustacean".into(),
                },
            ],
            &theme,
            &EnglishStrings,
        );
        assert_eq!(with_author.spans[1].content.as_ref(), "  ");
        assert_eq!(with_author.spans[2].content.as_ref(), " rustacean ");

        let alone = compose_header(
            &[Segment::Flair {
                text: "rustacean".into(),
            }],
            &theme,
            &EnglishStrings,
        );
        assert_eq!(alone.spans[0].content.as_ref(), " rustacean ");
    }

    #[test]
    fn hidden_score_renders_placeholder() {
        let theme = Theme::default();
        let line = compose_header(
            &[Segment::Score {
                value: 42,
                hidden: true,
                direction: VoteDirection::None,
            }],
            &theme,
            &EnglishStrings,
        );
        let text = line_text(&line);
        assert!(text.contains("??"));
        assert!(!text.contains("42"));
        assert!(text.contains("points"));
    }

    #[test]
    fn score_color_tracks_vote_direction() {
        let theme = Theme::default();
        for (direction, expected) in [
            (VoteDirection::Up, theme.upvote),
            (VoteDirection::Down, theme.downvote),
            (VoteDirection::None, theme.header_bold),
        ] {
            let line = compose_header(
                &[Segment::Score {
                    value: 5,
                    hidden: false,
                    direction,
                }],
                &theme,
                &EnglishStrings,
            );
            assert_eq!(line.spans[0].style.fg, Some(expected));
        }
    }

    #[test]
    fn score_trailing_space_depends_on_controversiality_item() {
        let all = Theme::default();
        let line = compose_header(
            &[
                Segment::Score {
                    value: 5,
                    hidden: false,
                    direction: VoteDirection::None,
                },
                Segment::Controversiality { marked: false },
            ],
            &all,
            &EnglishStrings,
        );
        // The controversiality segment supplies the single trailing space.
        assert_eq!(line_text(&line), "5 points ");

        let without = Theme::with_items([HeaderItem::Score]);
        let line = compose_header(
            &[Segment::Score {
                value: 5,
                hidden: false,
                direction: VoteDirection::None,
            }],
            &without,
            &EnglishStrings,
        );
        assert_eq!(line_text(&line), "5 points ");
    }

    #[test]
    fn controversial_symbol_only_when_marked() {
        let theme = Theme::default();
        let marked = compose_header(
            &[Segment::Controversiality { marked: true }],
            &theme,
            &EnglishStrings,
        );
        assert!(line_text(&marked).contains('†'));

        let unmarked = compose_header(
            &[Segment::Controversiality { marked: false }],
            &theme,
            &EnglishStrings,
        );
        assert!(!line_text(&unmarked).contains('†'));
    }

    #[test]
    fn gold_badge_shows_exact_count() {
        let theme = Theme::default();
        let line = compose_header(&[Segment::Gold { count: 3 }], &theme, &EnglishStrings);
        assert_eq!(line_text(&line), format!("  gold{}x3   ", '\u{00A0}'));
    }

    #[test]
    fn edited_age_gets_asterisk() {
        let theme = Theme::default();
        let line = compose_header(
            &[Segment::Age {
                text: "2 hours ago".into(),
                edited: true,
            }],
            &theme,
            &EnglishStrings,
        );
        assert_eq!(line_text(&line), "2 hours ago* ");
    }

    #[test]
    fn subreddit_follows_to_label() {
        let theme = Theme::default();
        let line = compose_header(
            &[Segment::Subreddit {
                name: "rust".into(),
            }],
            &theme,
            &EnglishStrings,
        );
        assert_eq!(line_text(&line), "to rust");
        assert_eq!(line.spans[1].style.add_modifier, Modifier::BOLD);
    }
}
