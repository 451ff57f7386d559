use contracts::usecases::sales_query::QueryModel;
use leptos::prelude::*;

use crate::shared::markdown::markdown_to_html;

/// What the result area shows for a given request state. Evaluated in strict
/// precedence order: loading, then error, then nothing, then the answer.
#[derive(Debug, Clone, PartialEq)]
enum Panel {
    Loading,
    Error(String),
    Empty,
    Answer(RenderedAnswer),
}

/// Rendering policy for a completed answer, keyed by the answering model.
/// Closed set: the two backends return differently shaped payloads, and
/// Markdown parsing must not be attempted on output that is not Markdown.
#[derive(Debug, Clone, PartialEq)]
enum RenderedAnswer {
    /// In-house model output, GitHub-flavored Markdown
    RichMarkdown(String),
    /// PandasAI output, preformatted text shown verbatim
    PlainText(String),
}

impl RenderedAnswer {
    fn select(model: QueryModel, result: String) -> Self {
        match model {
            QueryModel::OwnModel => RenderedAnswer::RichMarkdown(result),
            QueryModel::PandasAi => RenderedAnswer::PlainText(result),
        }
    }
}

fn select_panel(is_loading: bool, error: &str, result: &str, model: QueryModel) -> Panel {
    if is_loading {
        Panel::Loading
    } else if !error.is_empty() {
        Panel::Error(error.to_string())
    } else if result.is_empty() {
        Panel::Empty
    } else {
        Panel::Answer(RenderedAnswer::select(model, result.to_string()))
    }
}

/// Result area: a pure function of the orchestrator's request state.
#[component]
pub fn QueryResult(
    /// Answer text of the last completed request
    #[prop(into)]
    result: Signal<String>,
    /// Whether a request is currently in flight
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Error message of the last failed request
    #[prop(into)]
    error: Signal<String>,
    /// Model that answered (or is answering) the last dispatched request
    #[prop(into)]
    model: Signal<QueryModel>,
) -> impl IntoView {
    move || match select_panel(is_loading.get(), &error.get(), &result.get(), model.get()) {
        Panel::Loading => loading_panel(),
        Panel::Error(message) => error_panel(&message),
        Panel::Empty => ().into_any(),
        Panel::Answer(RenderedAnswer::RichMarkdown(source)) => markdown_panel(&source),
        Panel::Answer(RenderedAnswer::PlainText(text)) => plain_panel(&text),
    }
}

fn loading_panel() -> AnyView {
    view! {
        <div class="result-panel result-panel--loading">
            "Loading..."
        </div>
    }
    .into_any()
}

fn error_panel(message: &str) -> AnyView {
    view! {
        <div class="result-panel result-panel--error">
            {format!("Error: {}", message)}
        </div>
    }
    .into_any()
}

fn markdown_panel(source: &str) -> AnyView {
    view! {
        <div class="result-panel result-panel--answer">
            <div class="result-panel__markdown" inner_html=markdown_to_html(source)></div>
        </div>
    }
    .into_any()
}

fn plain_panel(text: &str) -> AnyView {
    view! {
        <div class="result-panel result-panel--answer">
            <h3 class="result-panel__heading">"Result:"</h3>
            <pre class="result-panel__plain">{text.to_string()}</pre>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_wins_over_everything() {
        let panel = select_panel(true, "boom", "answer", QueryModel::OwnModel);
        assert_eq!(panel, Panel::Loading);
    }

    #[test]
    fn test_error_wins_over_result() {
        let panel = select_panel(false, "Failed to fetch response", "answer", QueryModel::OwnModel);
        assert_eq!(panel, Panel::Error("Failed to fetch response".to_string()));
    }

    #[test]
    fn test_empty_result_renders_nothing() {
        assert_eq!(select_panel(false, "", "", QueryModel::PandasAi), Panel::Empty);
    }

    #[test]
    fn test_own_model_answer_is_markdown() {
        let panel = select_panel(false, "", "**bold**", QueryModel::OwnModel);
        assert_eq!(
            panel,
            Panel::Answer(RenderedAnswer::RichMarkdown("**bold**".to_string()))
        );
    }

    #[test]
    fn test_pandasai_answer_is_plain_text() {
        let panel = select_panel(false, "", "Row1\nRow2", QueryModel::PandasAi);
        assert_eq!(
            panel,
            Panel::Answer(RenderedAnswer::PlainText("Row1\nRow2".to_string()))
        );
    }
}
