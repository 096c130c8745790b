use clutch_api::model::MatchRecord;

/// Keep only the matches from the same act as the newest record.
///
/// The history endpoint happily crosses act boundaries, so early in an act
/// the list drags in games from the previous one. Expects matches ordered
/// most-recent-first; an empty list passes through unchanged.
pub fn filter_current_act(mut matches: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let Some(current) = matches.first().map(|m| m.metadata.season.short.clone()) else {
        return matches;
    };
    matches.retain(|m| m.metadata.season.short == current);
    matches
}
