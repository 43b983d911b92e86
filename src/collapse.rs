use crate::comment::CommentRecord;
use crate::overlay::OverlaySnapshot;
use crate::renderable::PresentationContext;
use crate::score::compute_score;

/// Whether the comment starts collapsed in a threaded view. Rules are
/// checked in strict priority order; the first match wins:
/// manual override, never-auto-collapse, the viewer's own comments,
/// then the score threshold.
pub fn is_collapsed(
    record: &CommentRecord,
    ctx: &PresentationContext,
    overlay: &OverlaySnapshot,
) -> bool {
    if let Some(forced) = overlay.hide.as_collapsed() {
        return forced;
    }

    if ctx.never_auto_collapse {
        return false;
    }

    if record
        .author
        .trim()
        .eq_ignore_ascii_case(ctx.current_canonical_user.trim())
    {
        return false;
    }

    score_below_threshold(record, ctx, overlay)
}

fn score_below_threshold(
    record: &CommentRecord,
    ctx: &PresentationContext,
    overlay: &OverlaySnapshot,
) -> bool {
    let Some(minimum) = ctx.minimum_comment_score else {
        return false;
    };

    // A hidden score is unknown; never collapse on it.
    if record.score_hidden {
        return false;
    }

    compute_score(record, overlay) < minimum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::HideOverride;
    use serde_json::json;

    fn record(author: &str, ups: i64, downs: i64, score_hidden: bool) -> CommentRecord {
        CommentRecord::from_json(json!({
            "id": "c1",
            "name": "t1_c1",
            "author": author,
            "ups": ups,
            "downs": downs,
            "score_hidden": score_hidden,
        }))
        .unwrap()
    }

    fn ctx(minimum: Option<i64>, user: &str, never: bool) -> PresentationContext {
        PresentationContext {
            minimum_comment_score: minimum,
            current_canonical_user: user.to_string(),
            never_auto_collapse: never,
            ..PresentationContext::default()
        }
    }

    fn overlay(hide: HideOverride) -> OverlaySnapshot {
        OverlaySnapshot {
            hide,
            ..OverlaySnapshot::default()
        }
    }

    #[test]
    fn low_score_collapses() {
        let rec = record("bob", 3, 0, false);
        assert!(is_collapsed(
            &rec,
            &ctx(Some(5), "alice", false),
            &OverlaySnapshot::default()
        ));
    }

    #[test]
    fn no_threshold_never_collapses() {
        let rec = record("bob", -20, 0, false);
        assert!(!is_collapsed(
            &rec,
            &ctx(None, "alice", false),
            &OverlaySnapshot::default()
        ));
    }

    #[test]
    fn forced_shown_overrides_low_score() {
        let rec = record("bob", -50, 0, false);
        assert!(!is_collapsed(
            &rec,
            &ctx(Some(5), "alice", false),
            &overlay(HideOverride::ForcedShown)
        ));
    }

    #[test]
    fn forced_hidden_overrides_everything() {
        // High score, the viewer's own comment, never-auto-collapse set:
        // the manual override still wins.
        let rec = record("alice", 100, 0, false);
        assert!(is_collapsed(
            &rec,
            &ctx(Some(5), "alice", true),
            &overlay(HideOverride::ForcedHidden)
        ));
    }

    #[test]
    fn never_auto_collapse_keeps_expanded() {
        let rec = record("bob", 3, 0, false);
        assert!(!is_collapsed(
            &rec,
            &ctx(Some(5), "alice", true),
            &OverlaySnapshot::default()
        ));
    }

    #[test]
    fn own_comment_never_auto_collapses() {
        let rec = record("  Alice ", -50, 0, false);
        assert!(!is_collapsed(
            &rec,
            &ctx(Some(5), "alice", false),
            &OverlaySnapshot::default()
        ));
    }

    #[test]
    fn hidden_score_never_triggers_threshold() {
        let rec = record("bob", 0, 50, true);
        assert!(!is_collapsed(
            &rec,
            &ctx(Some(5), "alice", false),
            &OverlaySnapshot::default()
        ));
    }

    #[test]
    fn threshold_is_strict() {
        let rec = record("bob", 5, 0, false);
        assert!(!is_collapsed(
            &rec,
            &ctx(Some(5), "alice", false),
            &OverlaySnapshot::default()
        ));
    }
}
