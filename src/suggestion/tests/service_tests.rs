//! Service tests with a mocked suggester.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use rstest::rstest;

use crate::suggestion::{
    domain::{PriorityLevel, PrioritySuggestion, SuggestionDomainError, SuggestionRequest},
    ports::{PrioritySuggester, SuggestionError, SuggestionResult},
    services::{PrioritySuggestionError, PrioritySuggestionService},
};
use crate::task::services::CreateTaskRequest;

mock! {
    Suggester {}

    #[async_trait]
    impl PrioritySuggester for Suggester {
        async fn suggest(&self, request: &SuggestionRequest) -> SuggestionResult<PrioritySuggestion>;
    }
}

fn service(mock: MockSuggester) -> PrioritySuggestionService<MockSuggester> {
    PrioritySuggestionService::new(Arc::new(mock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggest_passes_trimmed_fields_to_backend() {
    let mut mock = MockSuggester::new();
    mock.expect_suggest()
        .withf(|request| request.title() == "Fix outage" && request.description().is_empty())
        .times(1)
        .returning(|_| {
            Ok(PrioritySuggestion {
                priority: PriorityLevel::High,
                reason: "Users are blocked.".to_owned(),
            })
        });

    let suggestion = service(mock)
        .suggest("  Fix outage  ", "   ")
        .await
        .expect("suggestion should succeed");

    assert_eq!(suggestion.priority, PriorityLevel::High);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_title_never_reaches_backend() {
    let mut mock = MockSuggester::new();
    mock.expect_suggest().never();

    let result = service(mock).suggest(" ", "details").await;

    assert!(matches!(
        result,
        Err(PrioritySuggestionError::Domain(
            SuggestionDomainError::MissingTitle
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_to_sets_draft_priority_on_success() {
    let mut mock = MockSuggester::new();
    mock.expect_suggest().returning(|_| {
        Ok(PrioritySuggestion {
            priority: PriorityLevel::Low,
            reason: "Nice to have.".to_owned(),
        })
    });
    let mut draft = CreateTaskRequest::new("Polish icons").with_priority("high");

    service(mock)
        .apply_to(&mut draft)
        .await
        .expect("suggestion should succeed");

    assert_eq!(draft.priority(), Some("low"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_to_leaves_draft_unchanged_on_failure() {
    let mut mock = MockSuggester::new();
    mock.expect_suggest()
        .returning(|_| Err(SuggestionError::Http {
            status: 503,
            body: "overloaded".to_owned(),
        }));
    let mut draft = CreateTaskRequest::new("Polish icons").with_priority("high");
    let before = draft.clone();

    let result = service(mock).apply_to(&mut draft).await;

    assert!(matches!(
        result,
        Err(PrioritySuggestionError::Suggester(SuggestionError::Http { status: 503, .. }))
    ));
    assert_eq!(draft, before);
}
