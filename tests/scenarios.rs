use wordle_round::api::{GuessRequest, handle_guess, handle_guess_json};
use wordle_round::core::{Difficulty, EvalError, Verdict, Word, evaluate_text};
use wordle_round::game::{Round, RoundStatus};
use wordle_round::store::{JsonFileStore, RecordStore, top_scores};

use Verdict::{Absent, Exact, Present};

#[test]
fn reference_scenarios() {
    let cases: [(&str, &str, &[Verdict]); 4] = [
        ("STARE", "STARE", &[Exact, Exact, Exact, Exact, Exact]),
        ("ERATS", "STARE", &[Present, Present, Exact, Present, Present]),
        ("ROBOT", "LIBRO", &[Present, Present, Exact, Absent, Absent]),
        ("NONN", "ANNO", &[Present, Present, Exact, Absent]),
    ];

    for (guess, target, expected) in cases {
        let eval = evaluate_text(guess, target).unwrap();
        assert_eq!(eval.verdicts(), expected, "{guess} vs {target}");
        assert_eq!(eval.guess(), guess);
    }

    assert_eq!(
        evaluate_text("AB", "ABC"),
        Err(EvalError::LengthMismatch {
            guess: 2,
            target: 3
        })
    );
}

#[test]
fn boundary_agrees_with_evaluator() {
    let response = handle_guess(&GuessRequest::new("robot", "libro"));
    assert!(response.is_success());
    assert_eq!(response.body["guess"], "ROBOT");
    assert_eq!(
        response.body["result"],
        serde_json::json!(["present", "present", "exact", "absent", "absent"])
    );

    let rejected = handle_guess_json(r#"{"guess": "AB", "target": "ABC"}"#);
    assert_eq!(rejected.status, 400);
    assert!(rejected.body["error"].is_string());
}

#[test]
fn finished_round_lands_in_score_table() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("records.json"));

    let mut round = Round::new(Word::new("stare").unwrap(), 6);
    round.submit("robot").unwrap();
    round.submit("erats").unwrap();
    round.submit("stare").unwrap();
    assert_eq!(round.status(), RoundStatus::Won);

    store.append(round.record("ada").unwrap()).unwrap();

    let mut lost = Round::new(Word::new("stare").unwrap(), 1);
    lost.submit("robot").unwrap();
    store.append(lost.record("bo").unwrap()).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);

    let top = top_scores(&records, Difficulty::Easy, 10);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].player, "ada");
    assert_eq!(top[0].guesses, vec!["ROBOT", "ERATS", "STARE"]);
}
