use prefpair::generator::generate;
use prefpair::session::{DocumentNaming, RatingSession, SessionEvent, SessionView};
use prefpair::store::PreferenceStore;
use prefpair::types::Choice;
use tempfile::TempDir;

use crate::integration::support::{make_groups, rater_config};

fn start(temp: &TempDir, total: usize) -> RatingSession {
    let groups = make_groups(
        temp.path(),
        &[("A", &["1.mp4", "2.mp4"]), ("B", &["1.mp4", "2.mp4"])],
    );
    let tasks = generate(&rater_config(groups, total, Some(42)).pair_config(temp.path())).unwrap();
    RatingSession::start(tasks, DocumentNaming::new(temp.path().join("results"), "result"))
        .unwrap()
}

#[test]
fn choices_survive_a_restart() {
    let temp = TempDir::new().unwrap();
    let mut session = start(&temp, 3);
    session.handle(SessionEvent::Choose(Choice::A)).unwrap();
    session.handle(SessionEvent::Next).unwrap();
    session.handle(SessionEvent::Choose(Choice::B)).unwrap();

    let document = session.store().location().to_path_buf();
    let tasks = session.tasks().to_vec();
    assert!(document.starts_with(temp.path().join("results")));
    drop(session);

    let store = PreferenceStore::open(&document).unwrap();
    let resumed = RatingSession::resume(
        tasks,
        store,
        DocumentNaming::new(temp.path().join("results"), "result"),
    );
    match resumed.view() {
        SessionView::Pair(pair) => {
            assert_eq!(pair.position, 0);
            assert_eq!(pair.selection, Some(Choice::A));
        }
        other => panic!("expected pair view, got {:?}", other),
    }
    assert_eq!(resumed.store().lookup(1).unwrap().choice, Choice::B);
}

#[test]
fn changing_a_choice_keeps_one_record() {
    let temp = TempDir::new().unwrap();
    let mut session = start(&temp, 2);
    session.handle(SessionEvent::Choose(Choice::A)).unwrap();
    session.handle(SessionEvent::Next).unwrap();
    session.handle(SessionEvent::Previous).unwrap();
    session.handle(SessionEvent::Choose(Choice::B)).unwrap();

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().lookup(0).unwrap().choice, Choice::B);
}

#[test]
fn rating_every_pair_completes_the_session() {
    let temp = TempDir::new().unwrap();
    let mut session = start(&temp, 3);
    for _ in 0..2 {
        session.handle(SessionEvent::Choose(Choice::A)).unwrap();
        session.handle(SessionEvent::Next).unwrap();
    }
    session.handle(SessionEvent::Choose(Choice::B)).unwrap();
    let view = session.handle(SessionEvent::Next).unwrap();

    match view {
        SessionView::Complete(done) => {
            assert_eq!(done.records.len(), 3);
            let ids: Vec<u64> = done.records.iter().map(|r| r.metadata.pair_id).collect();
            assert_eq!(ids, vec![0, 1, 2]);
        }
        other => panic!("expected completion view, got {:?}", other),
    }
}
