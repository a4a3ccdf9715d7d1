use super::*;

#[test]
fn transcript_filename_hyphenates_and_lowercases() {
    assert_eq!(
        transcript_filename("Q4 Strategic Planning Session"),
        "transcript-q4-strategic-planning-session.txt"
    );
}

#[test]
fn whitespace_runs_collapse_to_one_hyphen() {
    assert_eq!(transcript_filename("Team \t Sync\n\nNotes"), "transcript-team-sync-notes.txt");
}

#[test]
fn leading_and_trailing_whitespace_become_hyphens() {
    assert_eq!(transcript_filename(" Retro "), "transcript--retro-.txt");
}

#[test]
fn empty_title_still_produces_a_name() {
    assert_eq!(transcript_filename(""), "transcript-.txt");
}

#[test]
fn object_url_outlives_the_click() {
    assert!(OBJECT_URL_LIFETIME >= std::time::Duration::from_secs(1));
}
