use crate::model::Note;

use super::diag::Diagnostic;

/// Checks a freshly paired note's duration against its kind.
///
/// Returns the rejection diagnostic, or `None` when the note is well
/// formed. Taps and flicks are instantaneous; the slide family must be
/// held for at least one tick.
pub fn check(note: &Note) -> Option<Diagnostic> {
    if note.duration < 0 {
        return Some(Diagnostic::NegativeDuration {
            lane: note.lane,
            kind: note.kind,
            tick: note.end_tick,
        });
    }
    if note.kind.is_instant() && note.duration != 0 {
        return Some(Diagnostic::InstantWithDuration {
            lane: note.lane,
            kind: note.kind,
            tick: note.end_tick,
        });
    }
    if note.kind.is_slide() && note.duration == 0 {
        return Some(Diagnostic::SlideWithoutDuration {
            lane: note.lane,
            kind: note.kind,
            tick: note.end_tick,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lane, NoteKind, Side};

    fn note(kind: NoteKind, start_tick: i64, end_tick: i64) -> Note {
        Note::new(kind, Lane::Lane4, start_tick, end_tick)
    }

    #[test]
    fn zero_duration_tap_passes() {
        assert_eq!(check(&note(NoteKind::Tap, 8, 8)), None);
        assert_eq!(check(&note(NoteKind::Flick, 8, 8)), None);
    }

    #[test]
    fn held_tap_is_rejected() {
        let rejected = check(&note(NoteKind::Tap, 8, 12));
        assert!(matches!(
            rejected,
            Some(Diagnostic::InstantWithDuration { .. })
        ));
    }

    #[test]
    fn held_slide_passes() {
        assert_eq!(check(&note(NoteKind::SlideStart(Side::A), 0, 4)), None);
        assert_eq!(check(&note(NoteKind::SlideTapEnd(Side::B), 4, 8)), None);
        assert_eq!(check(&note(NoteKind::SlideFlickEnd(Side::A), 8, 9)), None);
    }

    #[test]
    fn zero_duration_slide_is_rejected() {
        let rejected = check(&note(NoteKind::SlideStart(Side::B), 4, 4));
        assert!(matches!(
            rejected,
            Some(Diagnostic::SlideWithoutDuration { .. })
        ));
    }

    #[test]
    fn negative_duration_is_rejected_first() {
        // a backwards tap would also fail the instant rule; the sign
        // check wins
        let rejected = check(&note(NoteKind::Tap, 10, 4));
        assert!(matches!(
            rejected,
            Some(Diagnostic::NegativeDuration { .. })
        ));
    }
}
