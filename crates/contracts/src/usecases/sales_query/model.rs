use serde::{Deserialize, Serialize};

/// Backend answering strategy for a sales question.
///
/// Closed set: each variant maps to exactly one backend endpoint. This is a
/// fixed two-way dispatch table, not extensible routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueryModel {
    /// PandasAI over the sales dataframe; returns raw computed text/tables
    PandasAi,

    /// In-house model; returns GitHub-flavored Markdown
    #[default]
    OwnModel,
}

impl QueryModel {
    /// Endpoint path on the query backend
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            QueryModel::PandasAi => "/query/pandasai",
            QueryModel::OwnModel => "/query/ownmodel",
        }
    }

    /// Value carried by the `<select>` option
    pub fn form_value(&self) -> &'static str {
        match self {
            QueryModel::PandasAi => "pandasai",
            QueryModel::OwnModel => "ownmodel",
        }
    }

    /// Human-readable label for the `<select>` option
    pub fn label(&self) -> &'static str {
        match self {
            QueryModel::PandasAi => "PandasAI",
            QueryModel::OwnModel => "Own Model",
        }
    }

    /// Parse a form value. Anything unrecognized falls back to the
    /// in-house model, mirroring the endpoint dispatch.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "pandasai" => QueryModel::PandasAi,
            _ => QueryModel::OwnModel,
        }
    }

    /// All selectable variants, in display order
    pub fn all() -> [QueryModel; 2] {
        [QueryModel::PandasAi, QueryModel::OwnModel]
    }
}
