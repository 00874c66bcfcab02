//! Rendering invariants checked over randomly generated provider responses

use proptest::prelude::*;
use websearch_core::{SearchRequest, SearchResponse, SearchResult, render_results};

fn result_strategy() -> impl Strategy<Value = SearchResult> {
    (
        "[a-z]{1,12}",
        "[a-z]{1,12}",
        proptest::option::of(0.0f64..1.0),
        proptest::option::of("20[0-9]{2}-0[1-9]-1[0-9]"),
    )
        .prop_map(|(title, content, score, published_date)| SearchResult {
            url: format!("https://{}.example", title),
            title,
            content,
            score,
            published_date,
        })
}

fn response_strategy() -> impl Strategy<Value = SearchResponse> {
    (
        proptest::option::of("[a-z ]{1,20}"),
        proptest::collection::vec(result_strategy(), 0..8),
        proptest::option::of(proptest::collection::vec("[a-z ]{1,20}\\?", 0..5)),
    )
        .prop_map(|(answer, results, follow_up_questions)| SearchResponse {
            query: "q".to_string(),
            answer,
            results,
            follow_up_questions,
            response_time: None,
        })
}

proptest! {
    #[test]
    fn sections_follow_response_shape(response in response_strategy(), include_answer in any::<bool>()) {
        let mut args = serde_json::json!({"query": "q"});
        args["include_answer"] = serde_json::Value::Bool(include_answer);
        let request = SearchRequest::from_arguments(&args).unwrap();
        let text = render_results(&request, &response);

        // Direct Answer iff requested and present
        prop_assert_eq!(
            text.contains("## Direct Answer"),
            include_answer && response.answer.is_some()
        );

        // Exactly N result headings, numbered 1..N in provider order
        let headings: Vec<&str> = text.lines().filter(|l| l.starts_with("### ")).collect();
        prop_assert_eq!(headings.len(), response.results.len());
        for (i, (heading, result)) in headings.iter().zip(&response.results).enumerate() {
            prop_assert_eq!(*heading, format!("### {}. {}", i + 1, result.title));
        }

        // Follow-ups iff non-empty, all listed
        let questions = response.follow_up_questions.clone().unwrap_or_default();
        prop_assert_eq!(text.contains("## Follow-up Questions"), !questions.is_empty());
        for (i, question) in questions.iter().enumerate() {
            let line = format!("{}. {}", i + 1, question);
            prop_assert!(text.lines().any(|l| l == line));
        }
    }
}
