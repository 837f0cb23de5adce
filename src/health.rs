use axum::{http::StatusCode, response::IntoResponse, Json};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
	status: HealthStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	message: Option<String>,
}

/// Health report served from `/healthz`. The overall status is the worst
/// status of any check.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
	status: HealthStatus,
	version: &'static str,
	checks: IndexMap<&'static str, CheckResult>,
}

impl HealthReport {
	pub fn new(version: &'static str) -> Self {
		Self {
			status: HealthStatus::Healthy,
			version,
			checks: IndexMap::new(),
		}
	}

	pub fn check<T, E: Display>(mut self, name: &'static str, result: Result<T, E>) -> Self {
		let check = match result {
			Ok(_) => CheckResult {
				status: HealthStatus::Healthy,
				message: None,
			},
			Err(e) => CheckResult {
				status: HealthStatus::Unhealthy,
				message: Some(e.to_string()),
			},
		};

		self.status = self.status.max(check.status);
		self.checks.insert(name, check);
		self
	}

	pub fn status(&self) -> HealthStatus {
		self.status
	}
}

impl IntoResponse for HealthReport {
	fn into_response(self) -> axum::response::Response {
		let status = match self.status() {
			HealthStatus::Healthy => StatusCode::OK,
			HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
		};

		(status, Json(self)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn any_failed_check_makes_report_unhealthy() {
		let report = HealthReport::new("1.0.0")
			.check("store", Err::<(), _>("connection refused"))
			.check("assets", Ok::<_, &str>(()));

		assert_eq!(report.status(), HealthStatus::Unhealthy);
		assert_eq!(
			serde_json::to_value(&report).unwrap(),
			serde_json::json!({
				"status": "unhealthy",
				"version": "1.0.0",
				"checks": {
					"store": { "status": "unhealthy", "message": "connection refused" },
					"assets": { "status": "healthy" },
				},
			})
		);
	}

	#[test]
	fn report_without_failures_is_healthy() {
		let report = HealthReport::new("1.0.0").check("store", Ok::<_, &str>(()));
		assert_eq!(report.status(), HealthStatus::Healthy);
		assert_eq!(report.into_response().status(), StatusCode::OK);
	}
}
