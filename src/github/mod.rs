//! GitHub check run lifecycle.

mod client;
mod payload;

pub use client::{ApiRequest, HttpClient, Method, ReqwestClient};

use tracing::info;

use crate::error::{LintCheckError, Result};
use crate::inputs::{Credential, RepoContext};
use crate::report::{CheckReport, Conclusion};

use payload::{CheckRunOutput, CheckStatus, CreateCheckRun, CreatedCheckRun, UpdateCheckRun};

/// Display name of the check run.
pub const CHECK_NAME: &str = "Lint Check Run";

/// Handle to a check run in progress.
///
/// Neither `Clone` nor `Copy`: completing the run consumes the handle, so a
/// run can be completed at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckRun {
    id: u64,
}

impl CheckRun {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

/// Opens and completes check runs for one commit.
pub struct CheckRunReporter<C: HttpClient> {
    client: C,
    api_url: String,
    token: Credential,
    context: RepoContext,
}

impl<C: HttpClient> CheckRunReporter<C> {
    #[must_use]
    pub fn new(client: C, api_url: &str, token: Credential, context: RepoContext) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            context,
        }
    }

    /// The underlying transport.
    pub const fn client(&self) -> &C {
        &self.client
    }

    fn runs_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/check-runs",
            self.api_url, self.context.owner, self.context.repo
        )
    }

    fn send(&self, method: Method, url: String, body: String) -> Result<String> {
        let request = ApiRequest { method, url, body };
        self.client.send(&request, self.token.expose())
    }

    /// Create the check run in the `in_progress` state.
    ///
    /// # Errors
    /// Returns an error if the request fails or the response has no id.
    pub fn open(&self) -> Result<CheckRun> {
        let body = serde_json::to_string(&CreateCheckRun {
            name: CHECK_NAME,
            head_sha: &self.context.head_sha,
            status: CheckStatus::InProgress,
        })?;

        let response = self.send(Method::Post, self.runs_url(), body)?;
        let created: CreatedCheckRun = serde_json::from_str(&response)?;

        info!(
            id = created.id,
            sha = %self.context.head_sha,
            "opened check run"
        );
        Ok(CheckRun { id: created.id })
    }

    /// Complete `run` with the verdict and annotations of `report`.
    ///
    /// # Errors
    /// Returns an error if the request fails. The run is not retried.
    pub fn close(&self, run: CheckRun, report: &CheckReport) -> Result<()> {
        let conclusion = report.verdict.conclusion();
        self.complete(
            run,
            conclusion,
            CheckRunOutput {
                title: CHECK_NAME,
                summary: report.verdict.summary(),
                text: Some(&report.text),
                annotations: &report.annotations,
            },
        )?;

        info!(
            conclusion = conclusion.as_str(),
            annotations = report.annotations.len(),
            "completed check run"
        );
        Ok(())
    }

    /// Complete `run` as failed because the lint run itself failed.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub fn abandon(&self, run: CheckRun, error: &LintCheckError) -> Result<()> {
        self.complete(
            run,
            Conclusion::Failure,
            CheckRunOutput {
                title: CHECK_NAME,
                summary: format!("Lint run aborted: {error}"),
                text: None,
                annotations: &[],
            },
        )
    }

    fn complete(
        &self,
        run: CheckRun,
        conclusion: Conclusion,
        output: CheckRunOutput<'_>,
    ) -> Result<()> {
        let body = serde_json::to_string(&UpdateCheckRun {
            name: CHECK_NAME,
            status: CheckStatus::Completed,
            conclusion,
            output,
        })?;
        let url = format!("{}/{}", self.runs_url(), run.id);
        self.send(Method::Patch, url, body)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
