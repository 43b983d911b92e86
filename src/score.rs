use crate::comment::CommentRecord;
use crate::overlay::{OverlaySnapshot, VoteDirection};

/// The viewer's vote as it should be presented: a local vote wins over the
/// server-recorded one; the two are never combined.
pub fn effective_direction(record: &CommentRecord, overlay: &OverlaySnapshot) -> VoteDirection {
    if overlay.vote != VoteDirection::None {
        overlay.vote
    } else {
        record.server_vote()
    }
}

/// Score shown next to a comment. The server's counters already include the
/// viewer's own recorded vote, so that vote is stripped out before the
/// effective direction is applied once.
pub fn compute_score(record: &CommentRecord, overlay: &OverlaySnapshot) -> i64 {
    let mut score = record.ups - record.downs;

    match record.server_vote() {
        VoteDirection::Up => score -= 1,
        VoteDirection::Down => score += 1,
        VoteDirection::None => {}
    }

    score + effective_direction(record, overlay).delta()
}
