use quiz_backend::models::question::Question;
use quiz_backend::services::grading_service::{GradingService, ScoreBand};

fn question(id: &str, correct_answer: usize, points: u32) -> Question {
    Question {
        id: id.to_string(),
        prompt: "?".to_string(),
        options: vec!["yes".into(), "no".into()],
        correct_answer,
        explanation: None,
        points,
    }
}

#[test]
fn percentage_guards_empty_quiz() {
    assert_eq!(GradingService::final_percentage(0, 0), 0);
    assert_eq!(GradingService::final_percentage(10, 20), 50);
    assert_eq!(GradingService::final_percentage(1, 8), 13);
    assert_eq!(GradingService::final_percentage(35, 35), 100);
}

#[test]
fn bands_follow_thresholds() {
    assert_eq!(ScoreBand::for_percentage(100), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_percentage(80), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_percentage(79), ScoreBand::Good);
    assert_eq!(ScoreBand::for_percentage(60), ScoreBand::Good);
    assert_eq!(ScoreBand::for_percentage(59), ScoreBand::NeedsWork);
    assert_eq!(ScoreBand::for_percentage(0), ScoreBand::NeedsWork);
}

#[test]
fn grade_counts_exact_matches_only() {
    let questions = vec![question("q1", 0, 10), question("q2", 1, 15), question("q3", 0, 5)];
    let (earned, max, answers) = GradingService::grade(&questions, &[Some(0), Some(0)]);

    assert_eq!(earned, 10);
    assert_eq!(max, 30);
    assert_eq!(answers.len(), 3);
    assert!(answers[0].is_correct);
    assert!(!answers[1].is_correct);
    assert_eq!(answers[2].selected_answer, None);
    assert!(!answers[2].is_correct);
    assert_eq!(answers[2].question_id, "q3");
}
