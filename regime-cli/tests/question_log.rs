//! `ask` and `history` against a real SQLite file.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use regime_cli::commands::{ask, compare, history};
use regime_cli::report::OutputFormat;
use regime_core::db::{DbConfig, RepositoryFactory};
use regime_core::{AdvisorError, QuestionRepository, RegimeAdvisor, TaxInputs};
use regime_db_sqlite::SqliteRepositoryFactory;

struct CannedAdvisor(Result<String, AdvisorError>);

#[async_trait]
impl RegimeAdvisor for CannedAdvisor {
    async fn recommend(
        &self,
        _financial_context: &str,
    ) -> Result<String, AdvisorError> {
        self.0.clone()
    }

    async fn answer(
        &self,
        question_context: &str,
    ) -> Result<String, AdvisorError> {
        let question = question_context
            .lines()
            .find_map(|line| line.strip_prefix("Question: "))
            .unwrap_or("?");
        self.0.clone().map(|reply| format!("{reply} ({question})"))
    }
}

fn inputs() -> TaxInputs {
    TaxInputs {
        annual_salary: dec!(800000),
        section_80c_investment: dec!(150000),
        hra_exemption: dec!(50000),
        standard_deduction: dec!(50000),
        other_deductions: dec!(0),
    }
}

async fn file_repository(dir: &tempfile::TempDir) -> Box<dyn QuestionRepository> {
    let config = DbConfig {
        backend: "sqlite".to_string(),
        connection_string: dir.path().join("questions.db").display().to_string(),
    };
    SqliteRepositoryFactory
        .create(&config)
        .await
        .expect("file database should open")
}

#[tokio::test]
async fn asked_questions_show_up_in_history_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let repo = file_repository(&dir).await;
    let advisor = CannedAdvisor(Ok("Answer".to_string()));

    let first = ask::run(&advisor, repo.as_ref(), &inputs(), "Is HRA exempt?")
        .await
        .unwrap();
    ask::run(&advisor, repo.as_ref(), &inputs(), "  Can I switch?  ")
        .await
        .unwrap();

    assert_eq!(first, "Answer (Is HRA exempt?)");

    let listing = history::run(repo.as_ref(), None).await.unwrap();
    let questions: Vec<&str> = listing
        .lines()
        .filter_map(|line| line.strip_prefix("Q: "))
        .collect();
    assert_eq!(questions, vec!["Can I switch?", "Is HRA exempt?"]);

    let limited = history::run(repo.as_ref(), Some(1)).await.unwrap();
    assert_eq!(limited.matches("Q: ").count(), 1);
}

#[tokio::test]
async fn failed_answer_is_not_logged() {
    let dir = tempfile::tempdir().unwrap();
    let repo = file_repository(&dir).await;
    let advisor = CannedAdvisor(Err(AdvisorError::Status {
        status: 503,
        body: "overloaded".to_string(),
    }));

    let err = ask::run(&advisor, repo.as_ref(), &inputs(), "Is HRA exempt?")
        .await
        .unwrap_err();

    assert!(format!("{err:#}").starts_with("unable to process your question"));
    assert!(repo.list_questions(None).await.unwrap().is_empty());
    assert_eq!(
        history::run(repo.as_ref(), None).await.unwrap(),
        "No questions asked yet."
    );
}

#[tokio::test]
async fn history_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let advisor = CannedAdvisor(Ok("Yes".to_string()));

    {
        let repo = file_repository(&dir).await;
        ask::run(&advisor, repo.as_ref(), &inputs(), "Persist me?")
            .await
            .unwrap();
    }

    let reopened = file_repository(&dir).await;
    let entries = reopened.list_questions(None).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].question, "Persist me?");
    assert_eq!(entries[0].answer, "Yes (Persist me?)");
}

#[tokio::test]
async fn explain_falls_back_when_advisor_fails() {
    let advisor = CannedAdvisor(Err(AdvisorError::MissingApiKey(
        "REGIME_ADVISOR_API_KEY".to_string(),
    )));

    let output = compare::run(&inputs(), OutputFormat::Text, Some(&advisor))
        .await
        .unwrap();

    assert!(output.contains("Better regime: Old Regime"));
    assert!(output.contains("\n\nGeneral recommendation:\n"));
}

#[tokio::test]
async fn explain_includes_advisor_reply_in_json() {
    let advisor = CannedAdvisor(Ok("Stay with the Old Regime.".to_string()));

    let output = compare::run(&inputs(), OutputFormat::Json, Some(&advisor))
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["recommendation"]["generated"], true);
    assert_eq!(value["recommendation"]["details"], "Stay with the Old Regime.");
}
