use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One month of aggregated cashflow as the analytics service reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowMonth {
    /// Month tag in "YYYY-MM" form
    pub month: String,
    pub income: f64,
    pub expense: f64,
    /// Income minus expense for the month, precomputed server side
    pub net: f64,
}

impl CashflowMonth {
    /// First day of the month as a calendar date, for range filtering
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.month), "%Y-%m-%d").ok()
    }
}

/// One projected point of the balance forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Month tag in "YYYY-MM" form
    pub date: String,
    pub predicted_balance: f64,
    /// Pessimistic edge of the confidence band
    pub lower_bound: f64,
    /// Optimistic edge of the confidence band
    pub upper_bound: f64,
}

/// The forecast endpoint has shipped two shapes over time: a bare array of
/// points, and an envelope with the points under `data_points`. Both decode
/// here; anything else is a deserialization error the caller must surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForecastResponse {
    Enveloped { data_points: Vec<ForecastPoint> },
    Bare(Vec<ForecastPoint>),
}

impl ForecastResponse {
    /// Normalize either accepted shape to the plain point sequence
    pub fn into_points(self) -> Vec<ForecastPoint> {
        match self {
            ForecastResponse::Enveloped { data_points } => data_points,
            ForecastResponse::Bare(points) => points,
        }
    }
}

/// Confirmation payload returned by the CSV ingestion endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub status: String,
    pub rows_ingested: u32,
}

/// Kind of expense a simulation models. Serialized in the uppercase wire
/// form the simulation service expects, so no call site can forget to
/// uppercase it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
    OneTime,
    Recurring,
}

/// Request body for the decision simulation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub user_id: Uuid,
    pub decision_type: DecisionType,
    pub amount: f64,
    pub description: String,
    /// Simulation start in "YYYY-MM-DD" form
    pub start_date: String,
    /// How long a recurring expense runs; the service picks a default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
}

/// Verdict levels the simulation service emits, capitalized on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Safe,
    Caution,
    Avoid,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Safe => "Safe",
            Recommendation::Caution => "Caution",
            Recommendation::Avoid => "Avoid",
        }
    }
}

/// Projected effect of the simulated decision on the balance curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedImpact {
    pub lowest_balance: f64,
    pub months_affected: u32,
    pub total_cost: f64,
}

/// Full simulation verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub recommendation: Recommendation,
    /// Confidence in the verdict, 0 to 100
    pub confidence: u8,
    pub explanation: String,
    pub projected_impact: ProjectedImpact,
}

/// Who the session is acting as. There is no authentication in this
/// deployment; the identity is constructed once at the session boundary and
/// passed explicitly to every call that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub account_id: Uuid,
}

impl SessionIdentity {
    /// The fixed demo identity the seeded backend knows about
    pub fn demo() -> Self {
        Self {
            user_id: uuid::uuid!("550e8400-e29b-41d4-a716-446655440000"),
            account_id: uuid::uuid!("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cashflow_month_parses_start_date() {
        let month = CashflowMonth {
            month: "2024-03".to_string(),
            income: 5000.0,
            expense: 3000.0,
            net: 2000.0,
        };
        assert_eq!(month.start_date(), NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn cashflow_month_rejects_garbage_month_tag() {
        let month = CashflowMonth {
            month: "not-a-month".to_string(),
            income: 0.0,
            expense: 0.0,
            net: 0.0,
        };
        assert_eq!(month.start_date(), None);
    }

    #[test]
    fn forecast_decodes_bare_array() {
        let body = r#"[{"date":"2024-07","predicted_balance":1200.0,"lower_bound":900.0,"upper_bound":1500.0}]"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let points = response.into_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2024-07");
        assert_eq!(points[0].predicted_balance, 1200.0);
    }

    #[test]
    fn forecast_decodes_envelope_with_extra_fields() {
        let body = r#"{"scenario_name":"baseline","data_points":[{"date":"2024-07","predicted_balance":1200.0,"lower_bound":900.0,"upper_bound":1500.0}]}"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        let points = response.into_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].upper_bound, 1500.0);
    }

    #[test]
    fn forecast_shapes_with_same_contents_normalize_identically() {
        let bare = r#"[{"date":"2024-07","predicted_balance":1200.0,"lower_bound":900.0,"upper_bound":1500.0},
                       {"date":"2024-08","predicted_balance":1300.0,"lower_bound":950.0,"upper_bound":1650.0}]"#;
        let enveloped = format!(r#"{{"data_points":{}}}"#, bare);

        let from_bare: ForecastResponse = serde_json::from_str(bare).unwrap();
        let from_envelope: ForecastResponse = serde_json::from_str(&enveloped).unwrap();
        assert_eq!(from_bare.into_points(), from_envelope.into_points());
    }

    #[test]
    fn forecast_rejects_unrecognized_shape() {
        let body = r#"{"points":[]}"#;
        assert!(serde_json::from_str::<ForecastResponse>(body).is_err());
    }

    #[test]
    fn decision_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&DecisionType::OneTime).unwrap(),
            r#""ONE_TIME""#
        );
        assert_eq!(
            serde_json::to_string(&DecisionType::Recurring).unwrap(),
            r#""RECURRING""#
        );
    }

    #[test]
    fn simulation_request_omits_absent_duration() {
        let request = SimulationRequest {
            user_id: SessionIdentity::demo().user_id,
            decision_type: DecisionType::OneTime,
            amount: 450.0,
            description: "New laptop".to_string(),
            start_date: "2024-06-15".to_string(),
            duration_months: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""decision_type":"ONE_TIME""#));
        assert!(!json.contains("duration_months"));
    }

    #[test]
    fn simulation_outcome_decodes_service_response() {
        let body = r#"{
            "recommendation": "Caution",
            "confidence": 72,
            "explanation": "This purchase dips your buffer below one month of expenses.",
            "projected_impact": {"lowest_balance": 180.5, "months_affected": 3, "total_cost": 1350.0}
        }"#;
        let outcome: SimulationOutcome = serde_json::from_str(body).unwrap();
        assert_eq!(outcome.recommendation, Recommendation::Caution);
        assert_eq!(outcome.recommendation.label(), "Caution");
        assert_eq!(outcome.confidence, 72);
        assert_eq!(outcome.projected_impact.months_affected, 3);
    }

    #[test]
    fn upload_summary_decodes_ingestion_response() {
        let body = r#"{"status":"success","rows_ingested":42}"#;
        let summary: UploadSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.status, "success");
        assert_eq!(summary.rows_ingested, 42);
    }

    #[test]
    fn demo_identity_is_stable() {
        let identity = SessionIdentity::demo();
        assert_eq!(
            identity.user_id.to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(
            identity.account_id.to_string(),
            "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11"
        );
    }
}
