pub type Score = i32;

// These scores are far larger than any heuristic value, so a forced win (or
// loss) always outranks positional play.
pub const MAX_WIN: Score = Score::MAX / 2;
pub const MIN_WIN: Score = -MAX_WIN;

/// Backed-up score of a node whose player to move has no candidates. Positive
/// at maximizing nodes and negated at minimizing nodes, so the parent, which
/// moves for the other side, never prefers it. It is not an evaluation.
pub const NO_MOVE_PENALTY: Score = 1000;

// The root window lies strictly outside both win sentinels.
pub(crate) const NEG_INFINITY: Score = Score::MIN;
pub(crate) const INFINITY: Score = Score::MAX;
