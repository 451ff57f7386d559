use contracts::usecases::sales_query::QueryModel;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Select, Textarea};

/// Consume the editable state for dispatch.
///
/// A blank question yields nothing and leaves the text alone. Otherwise the
/// question is taken (clearing the field) while the model choice is left
/// untouched, so it sticks across submissions.
fn take_submission(question: &mut String, model: QueryModel) -> Option<(String, QueryModel)> {
    if question.trim().is_empty() {
        return None;
    }
    Some((std::mem::take(question), model))
}

/// Question input form.
///
/// Owns only the editable state (question text, model selection) and hands an
/// immutable `(question, model)` pair to the caller on submission. Knows
/// nothing about the network or the result state.
#[component]
pub fn QueryForm(
    /// Invoked with the submitted question and the selected model
    on_submit: Callback<(String, QueryModel)>,
) -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (model, set_model) = signal(QueryModel::default());

    let can_submit = move || !question.get().trim().is_empty();

    let model_options = Signal::derive(|| {
        QueryModel::all()
            .iter()
            .map(|m| (m.form_value().to_string(), m.label().to_string()))
            .collect::<Vec<_>>()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut text = question.get();
        if let Some(pair) = take_submission(&mut text, model.get()) {
            on_submit.run(pair);
            set_question.set(text);
        }
    };

    view! {
        <form class="query-form" on:submit=submit>
            <Textarea
                value=question
                on_input=Callback::new(move |text| set_question.set(text))
                placeholder="Enter your query here..."
                rows=5
                required=true
                id="query-question"
            />
            <div class="query-form__controls">
                <Select
                    value=Signal::derive(move || model.get().form_value().to_string())
                    on_change=Callback::new(move |value: String| {
                        set_model.set(QueryModel::from_form_value(&value));
                    })
                    options=model_options
                    id="query-model"
                />
                <Button button_type="submit" disabled=Signal::derive(move || !can_submit())>
                    "Submit Query"
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_clears_question_and_preserves_model() {
        let mut question = "total sales in March".to_string();
        let pair = take_submission(&mut question, QueryModel::PandasAi);
        assert_eq!(
            pair,
            Some(("total sales in March".to_string(), QueryModel::PandasAi))
        );
        assert!(question.is_empty());
    }

    #[test]
    fn test_blank_question_is_not_submitted() {
        let mut question = String::new();
        assert_eq!(take_submission(&mut question, QueryModel::OwnModel), None);

        let mut whitespace = "   \n".to_string();
        assert_eq!(take_submission(&mut whitespace, QueryModel::OwnModel), None);
        assert_eq!(whitespace, "   \n");
    }
}
