use contracts::usecases::sales_query::QueryModel;

/// Discrete stage of the request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Session-scoped request state, owned by the orchestrator.
///
/// All mutation goes through `begin` / `complete`; the rendering layer only
/// reads. Invariant: at most one of `result` / `error_message` is non-empty,
/// and neither is while the phase is `Loading`.
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    pub phase: RequestPhase,
    pub result: String,
    pub error_message: String,
    /// Model of the most recently dispatched request; kept through to render
    /// time so the result panel picks the right rendering mode.
    pub model: QueryModel,
    seq: u64,
}

impl RequestState {
    /// Start tracking a new request: phase goes to `Loading`, prior outcome
    /// is cleared, the model is recorded immediately. Returns the dispatch
    /// sequence number the caller must hand back to `complete`.
    pub fn begin(&mut self, model: QueryModel) -> u64 {
        self.phase = RequestPhase::Loading;
        self.result.clear();
        self.error_message.clear();
        self.model = model;
        self.seq += 1;
        self.seq
    }

    /// Apply the outcome of the request tagged `seq`.
    ///
    /// Responses from superseded dispatches are discarded, so the displayed
    /// state always reflects the latest user intent rather than whichever
    /// response happened to resolve last. Returns whether the outcome was
    /// applied. The `Loading` phase is always released on apply, success or
    /// failure alike.
    pub fn complete(&mut self, seq: u64, outcome: Result<String, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        match outcome {
            Ok(result) => {
                self.phase = RequestPhase::Succeeded;
                self.result = result;
                self.error_message.clear();
            }
            Err(message) => {
                self.phase = RequestPhase::Failed;
                self.error_message = message;
                self.result.clear();
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_clears_prior_outcome() {
        let mut state = RequestState::default();
        let seq = state.begin(QueryModel::OwnModel);
        assert!(state.complete(seq, Ok("42".to_string())));
        assert_eq!(state.phase, RequestPhase::Succeeded);

        state.begin(QueryModel::PandasAi);
        assert_eq!(state.phase, RequestPhase::Loading);
        assert!(state.result.is_empty());
        assert!(state.error_message.is_empty());
        assert_eq!(state.model, QueryModel::PandasAi);
    }

    #[test]
    fn test_success_populates_result_only() {
        let mut state = RequestState::default();
        let seq = state.begin(QueryModel::OwnModel);
        assert!(state.complete(seq, Ok("**bold**".to_string())));
        assert_eq!(state.phase, RequestPhase::Succeeded);
        assert_eq!(state.result, "**bold**");
        assert!(state.error_message.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_populates_error_only() {
        let mut state = RequestState::default();
        let seq = state.begin(QueryModel::PandasAi);
        assert!(state.complete(seq, Err("Failed to fetch response".to_string())));
        assert_eq!(state.phase, RequestPhase::Failed);
        assert_eq!(state.error_message, "Failed to fetch response");
        assert!(state.result.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = RequestState::default();
        let first = state.begin(QueryModel::PandasAi);
        let second = state.begin(QueryModel::OwnModel);

        // The newer dispatch resolves first, then the older one straggles in.
        assert!(state.complete(second, Ok("fresh".to_string())));
        assert!(!state.complete(first, Ok("stale".to_string())));
        assert_eq!(state.result, "fresh");
        assert_eq!(state.model, QueryModel::OwnModel);

        // A stale failure must not clobber the fresh result either.
        assert!(!state.complete(first, Err("late failure".to_string())));
        assert_eq!(state.phase, RequestPhase::Succeeded);
        assert!(state.error_message.is_empty());
    }

    #[test]
    fn test_newer_dispatch_keeps_loading_until_it_resolves() {
        let mut state = RequestState::default();
        let first = state.begin(QueryModel::OwnModel);
        let second = state.begin(QueryModel::OwnModel);

        assert!(!state.complete(first, Ok("stale".to_string())));
        assert!(state.is_loading());

        assert!(state.complete(second, Ok("fresh".to_string())));
        assert!(!state.is_loading());
        assert_eq!(state.result, "fresh");
    }
}
