use chrono::NaiveDate;
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use stuttz::StuttzApp;
use stuttz::advice::{AdviceError, TextGenerator};
use stuttz::model::{AppState, PhaseStatus};
use stuttz::store::{ProgressStore, load_user_progress};

struct CountingGenerator {
    calls: Rc<Cell<usize>>,
}

impl TextGenerator for CountingGenerator {
    fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<String, AdviceError> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("resposta para {} caracteres", prompt.len()))
    }
}

fn open(dir: &Path, generator: Option<Box<dyn TextGenerator>>) -> StuttzApp {
    let store = ProgressStore::open_at(dir.join("user_data.json"), dir.join("roadmap_data.json"))
        .expect("seed roadmap");
    StuttzApp::new(store, generator)
}

fn answer_correctly(app: &mut StuttzApp, phase_id: u32) {
    assert!(app.select_phase(phase_id));
    let correct = app.phase(phase_id).unwrap().quiz.correct_answer_index;
    app.select_option(correct);
    assert_eq!(app.submit_answer(), Some(true));
}

#[test]
fn full_course_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open(dir.path(), None);

    assert!(!app.select_phase(2));
    assert_eq!(app.state, AppState::Roadmap);

    answer_correctly(&mut app, 1);
    app.go_back();
    answer_correctly(&mut app, 2);

    let user = app.user();
    assert_eq!(user.xp, 50);
    assert_eq!(user.level, 1);
    assert_eq!(
        user.completed_phase_ids.iter().copied().collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(
        app.roadmap()
            .phases
            .iter()
            .all(|p| p.status == PhaseStatus::Completed)
    );
    assert!((app.course_progress() - 40.0).abs() < f32::EPSILON);
}

#[test]
fn level_up_example_from_ninety_xp() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open(dir.path(), None);
    app.store.user.xp = 90;

    answer_correctly(&mut app, 1);

    let saved = load_user_progress(&dir.path().join("user_data.json"));
    assert_eq!((saved.xp, saved.xp_to_next, saved.level), (15, 200, 2));
}

#[test]
fn awarded_quiz_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = open(dir.path(), None);
        answer_correctly(&mut app, 1);
    }

    let mut app = open(dir.path(), None);
    assert_eq!(app.user().xp, 25);
    // La semilla vuelve a tener la fase 2 bloqueada
    assert_eq!(app.phase(2).unwrap().status, PhaseStatus::Locked);

    answer_correctly(&mut app, 1);
    assert_eq!(app.user().xp, 25);
    assert_eq!(app.phase(2).unwrap().status, PhaseStatus::Unlocked);
}

#[test]
fn streak_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();

    open(dir.path(), None).start_session_on(day(1));
    open(dir.path(), None).start_session_on(day(2));
    open(dir.path(), None).start_session_on(day(2));
    assert_eq!(load_user_progress(&dir.path().join("user_data.json")).streak, 2);

    open(dir.path(), None).start_session_on(day(5));
    assert_eq!(load_user_progress(&dir.path().join("user_data.json")).streak, 1);
}

#[test]
fn study_tip_calls_service_once() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Rc::new(Cell::new(0));
    let generator = CountingGenerator {
        calls: calls.clone(),
    };
    let mut app = open(dir.path(), Some(Box::new(generator)));
    app.select_phase(1);

    let first = app.request_study_tip().unwrap();
    app.go_back();
    app.select_phase(1);
    let second = app.request_study_tip().unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.get(), 1);
}

#[test]
fn advice_cache_memoizes_direct_lookups() {
    let calls = Rc::new(Cell::new(0));
    let generator = CountingGenerator {
        calls: calls.clone(),
    };
    let mut cache = stuttz::advice::AdviceCache::new();

    let a = cache.get_study_tip(Some(&generator), "Fundamentos", "Instalar Python");
    let b = cache.get_study_tip(Some(&generator), "Fundamentos", "Instalar Python");

    assert_eq!(a, b);
    assert_eq!(calls.get(), 1);
}
