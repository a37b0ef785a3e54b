//! Request and response bodies of the check runs REST endpoints.

use serde::{Deserialize, Serialize};

use crate::report::{Annotation, Conclusion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Serialize)]
pub struct CreateCheckRun<'a> {
    pub name: &'a str,
    pub head_sha: &'a str,
    pub status: CheckStatus,
}

#[derive(Debug, Serialize)]
pub struct UpdateCheckRun<'a> {
    pub name: &'a str,
    pub status: CheckStatus,
    pub conclusion: Conclusion,
    pub output: CheckRunOutput<'a>,
}

#[derive(Debug, Serialize)]
pub struct CheckRunOutput<'a> {
    pub title: &'a str,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    pub annotations: &'a [Annotation],
}

/// The part of a created check run the reporter needs.
#[derive(Debug, Deserialize)]
pub struct CreatedCheckRun {
    pub id: u64,
}
