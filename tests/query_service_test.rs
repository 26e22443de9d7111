use std::sync::Arc;

use quiz_backend::content::loader::load_repository;
use quiz_backend::content::repository::ContentRepository;
use quiz_backend::error::Error;
use quiz_backend::services::query_service::QueryService;

fn sample() -> (Arc<dyn ContentRepository>, QueryService) {
    let repository: Arc<dyn ContentRepository> =
        Arc::new(load_repository(None).expect("sample corpus"));
    let service = QueryService::new(repository.clone());
    (repository, service)
}

#[test]
fn listed_counts_match_actual_quizzes() {
    let (repository, service) = sample();
    let categories = service.list_categories().expect("categories");
    assert_eq!(categories.len(), 4);

    for category in &categories {
        let quizzes = service
            .list_quizzes_for_category(&category.id)
            .expect("quizzes");
        assert_eq!(category.quiz_count, quizzes.len(), "{}", category.id);
        assert_eq!(
            category.quiz_count,
            repository.list_quizzes_for_category(&category.id).len()
        );
    }
}

#[test]
fn stale_stored_count_is_not_served() {
    let (repository, service) = sample();
    let stored = repository
        .get_category("programming")
        .and_then(|c| c.stored_quiz_count);
    assert_eq!(stored, Some(5));

    let programming = service
        .list_categories()
        .unwrap()
        .into_iter()
        .find(|c| c.id == "programming")
        .expect("programming");
    assert_eq!(programming.quiz_count, 2);
}

#[test]
fn world_war_quiz_has_three_questions() {
    let (_, service) = sample();
    let quiz = service.get_quiz("history-world-war-2").expect("quiz");
    assert_eq!(quiz.questions.len(), 3);
    assert_eq!(quiz.time_limit_minutes, Some(10));
    assert_eq!(quiz.total_points(), 35);
}

#[test]
fn math_has_exactly_algebra_basics() {
    let (_, service) = sample();
    let quizzes = service.list_quizzes_for_category("math").expect("math");
    let ids: Vec<&str> = quizzes.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["math-algebra-basics"]);
}

#[test]
fn unknown_category_is_not_found() {
    let (repository, service) = sample();
    assert!(repository.list_quizzes_for_category("unknown-cat").is_empty());
    assert!(matches!(
        service.list_quizzes_for_category("unknown-cat"),
        Err(Error::NotFound(ref msg)) if msg == "Category 'unknown-cat' not found"
    ));
}

#[test]
fn unknown_and_missing_quiz_ids() {
    let (repository, service) = sample();
    assert!(repository.get_quiz("nope").is_none());
    assert!(matches!(service.get_quiz("nope"), Err(Error::NotFound(_))));
    assert!(matches!(
        service.get_quiz(""),
        Err(Error::BadRequest(ref msg)) if msg == "Missing quiz ID"
    ));
}

#[test]
fn ids_are_looked_up_as_given() {
    let (_, service) = sample();
    assert!(matches!(
        service.get_quiz(" history-world-war-2 "),
        Err(Error::NotFound(ref msg)) if msg == "Quiz ' history-world-war-2 ' not found"
    ));
    assert!(matches!(
        service.list_quizzes_for_category("math "),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn repository_listing_keeps_authored_order() {
    let (repository, _) = sample();
    let first: Vec<String> = repository.list_categories().into_iter().map(|c| c.id).collect();
    let second: Vec<String> = repository.list_categories().into_iter().map(|c| c.id).collect();
    assert_eq!(first, vec!["history", "science", "math", "programming"]);
    assert_eq!(first, second);
}
