use contracts::usecases::sales_query::QueryModel;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::usecases::sales_query::{api, QueryForm, QueryResult, RequestState};

/// Application root: single source of truth for the request state.
///
/// `handle_submit` is the only state-mutating path. Each dispatch is tagged
/// with a sequence number so that when submissions overlap, only the latest
/// one's outcome reaches the screen.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(RequestState::default());

    let handle_submit = Callback::new(move |(question, model): (String, QueryModel)| {
        let seq = state
            .try_update(|s| s.begin(model))
            .unwrap_or_default();
        log::debug!("query #{} -> {}", seq, model.endpoint_path());

        spawn_local(async move {
            let outcome = api::post_query(model, &question).await;
            if let Err(ref message) = outcome {
                log::warn!("query #{} failed: {}", seq, message);
            }
            let applied = state
                .try_update(|s| s.complete(seq, outcome))
                .unwrap_or_default();
            if !applied {
                log::debug!("query #{} superseded, response discarded", seq);
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__container">
                <h1 class="page__title">"Sales Data Query Interface"</h1>
                <div class="page__card">
                    <QueryForm on_submit=handle_submit />
                </div>
                <QueryResult
                    result=Signal::derive(move || state.get().result)
                    is_loading=Signal::derive(move || state.get().is_loading())
                    error=Signal::derive(move || state.get().error_message)
                    model=Signal::derive(move || state.get().model)
                />
            </div>
        </div>
    }
}
