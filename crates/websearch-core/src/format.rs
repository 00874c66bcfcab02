//! Markdown rendering of provider results

use crate::types::{SearchRequest, SearchResponse};

/// Render a provider response as the text returned to the tool caller.
///
/// Results keep provider order and provider scores. The heading echoes the
/// caller's query, and the direct answer is dropped when the request did not
/// ask for one.
pub fn render_results(request: &SearchRequest, response: &SearchResponse) -> String {
    let mut out = format!("# Search Results for: \"{}\"\n\n", request.query());

    if request.include_answer()
        && let Some(answer) = response.answer.as_deref()
    {
        out.push_str(&format!("## Direct Answer\n\n{}\n\n", answer));
    }

    out.push_str("## Search Results\n\n");

    for (index, result) in response.results.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n", index + 1, result.title));
        out.push_str(&format!("URL: {}\n", result.url));
        if let Some(date) = result.published_date.as_deref() {
            out.push_str(&format!("Published: {}\n", date));
        }
        if let Some(score) = result.score {
            out.push_str(&format!("Score: {}\n", score));
        }
        out.push_str(&format!("\n{}\n\n---\n\n", result.content));
    }

    if let Some(questions) = response
        .follow_up_questions
        .as_deref()
        .filter(|q| !q.is_empty())
    {
        out.push_str("## Follow-up Questions\n\n");
        for (index, question) in questions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, question));
        }
    }

    out
}
