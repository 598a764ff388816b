use std::sync::Arc;

use chrono::NaiveDate;
use subtle::ConstantTimeEq;

use crate::config::verify::VerifyConfig;
use crate::error::api::{ApiError, ApiResult};
use crate::time::clock::Clock;
use crate::verify::model::{Submitted, VerifyRequest, VerifyResponse};

/// Message returned when `password` is absent or falsy.
pub const MISSING_PASSWORD: &str = "Password missing";

/// Message returned on the target date when the password is wrong.
pub const HINT_MESSAGE: &str = "Wrong! Hint: enter 'the password..'";

/// Checks a submitted password against the expected secret, and today's
/// date against the target date.
///
/// # Outcomes
/// | date matches | password matches | response |
/// |---|---|---|
/// | yes | yes | `{ success: true }` |
/// | yes | no | `{ success: false, message: HINT_MESSAGE }` |
/// | no | any | `{ success: false }` |
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use datelock::config::verify::VerifyConfig;
/// use datelock::time::clock::FixedClock;
/// use datelock::verify::verifier::Verifier;
///
/// let day = NaiveDate::from_ymd_opt(2025, 4, 26).unwrap();
/// let verifier = Verifier::new(&VerifyConfig::default(), Arc::new(FixedClock::new(day)));
///
/// assert!(verifier.check_password("the password..").success);
/// assert!(!verifier.check_password("The password..").success);
/// ```
pub struct Verifier {
    secret: String,
    target_date: NaiveDate,
    clock: Arc<dyn Clock>,
}

impl Verifier {
    pub fn new(cfg: &VerifyConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: cfg.secret.clone(),
            target_date: cfg.target_date,
            clock,
        }
    }

    pub fn target_date(&self) -> NaiveDate {
        self.target_date
    }

    /// Evaluates a request body.
    ///
    /// # Errors
    /// [`ApiError::BadRequest`] with [`MISSING_PASSWORD`] when the password
    /// is absent, `null`, empty or otherwise falsy.
    pub fn verify(&self, req: &VerifyRequest) -> ApiResult<VerifyResponse> {
        let submitted = req
            .submitted()
            .ok_or_else(|| ApiError::BadRequest(MISSING_PASSWORD.into()))?;

        let password_correct = match &submitted {
            Submitted::Text(s) => self.matches_secret(s),
            Submitted::Other => false,
        };

        Ok(self.decide(password_correct))
    }

    /// Evaluates a non-empty password string.
    pub fn check_password(&self, password: &str) -> VerifyResponse {
        self.decide(self.matches_secret(password))
    }

    fn decide(&self, password_correct: bool) -> VerifyResponse {
        let date_correct = self.clock.today() == self.target_date;

        tracing::debug!(password_correct, date_correct, "verification evaluated");

        if date_correct && !password_correct {
            return VerifyResponse::hint(HINT_MESSAGE);
        }

        VerifyResponse::outcome(password_correct && date_correct)
    }

    // Exact byte equality; length differences are not hidden.
    fn matches_secret(&self, password: &str) -> bool {
        password.as_bytes().ct_eq(self.secret.as_bytes()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::clock::FixedClock;
    use serde_json::json;

    const SECRET: &str = "the password..";

    fn verifier_on(y: i32, m: u32, d: u32) -> Verifier {
        let day = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Verifier::new(&VerifyConfig::default(), Arc::new(FixedClock::new(day)))
    }

    fn request(body: serde_json::Value) -> VerifyRequest {
        VerifyRequest::from_json(body)
    }

    #[test]
    fn correct_password_on_target_date_succeeds() {
        let v = verifier_on(2025, 4, 26);

        let resp = v.verify(&request(json!({ "password": SECRET }))).unwrap();

        assert_eq!(resp, VerifyResponse::outcome(true));
    }

    #[test]
    fn wrong_password_on_target_date_gets_hint() {
        let v = verifier_on(2025, 4, 26);

        let resp = v.verify(&request(json!({ "password": "wrong" }))).unwrap();

        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some(HINT_MESSAGE));
    }

    #[test]
    fn any_password_on_other_dates_fails_without_message() {
        for (y, m, d) in [(2025, 4, 25), (2025, 4, 27), (2026, 4, 26)] {
            let v = verifier_on(y, m, d);
            for pw in [SECRET, "wrong", "x"] {
                let resp = v.verify(&request(json!({ "password": pw }))).unwrap();
                assert_eq!(resp, VerifyResponse::outcome(false), "{y}-{m}-{d} {pw}");
            }
        }
    }

    #[test]
    fn missing_password_is_bad_request() {
        let v = verifier_on(2025, 4, 26);

        for body in [json!({}), json!({ "password": null }), json!({ "password": "" })] {
            let err = v.verify(&request(body)).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref m) if m == MISSING_PASSWORD));
        }
    }

    #[test]
    fn array_body_is_a_missing_password() {
        let v = verifier_on(2025, 4, 26);

        for body in [json!([SECRET]), json!([])] {
            let err = v.verify(&request(body)).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(ref m) if m == MISSING_PASSWORD));
        }
    }

    #[test]
    fn missing_password_is_rejected_on_any_date() {
        let v = verifier_on(2024, 1, 1);

        assert!(v.verify(&request(json!({}))).is_err());
    }

    #[test]
    fn comparison_is_exact_and_case_sensitive() {
        let v = verifier_on(2025, 4, 26);

        for pw in [
            "the password.. ",
            " the password..",
            "The password..",
            "THE PASSWORD..",
            "the password.",
            "the password...",
        ] {
            assert!(!v.check_password(pw).success, "{pw:?}");
        }
    }

    #[test]
    fn truthy_non_string_is_a_wrong_password() {
        let v = verifier_on(2025, 4, 26);

        let resp = v.verify(&request(json!({ "password": 42 }))).unwrap();
        assert_eq!(resp, VerifyResponse::hint(HINT_MESSAGE));

        let v = verifier_on(2025, 4, 25);
        let resp = v.verify(&request(json!({ "password": true }))).unwrap();
        assert_eq!(resp, VerifyResponse::outcome(false));
    }

    #[test]
    fn same_request_yields_same_response() {
        let v = verifier_on(2025, 4, 26);
        let req = request(json!({ "password": "wrong" }));

        assert_eq!(v.verify(&req).unwrap(), v.verify(&req).unwrap());
    }

    #[test]
    fn configured_secret_and_date_are_used() {
        let cfg = VerifyConfig {
            secret: "open sesame".into(),
            target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            ..VerifyConfig::default()
        };
        let day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let v = Verifier::new(&cfg, Arc::new(FixedClock::new(day)));

        assert_eq!(v.target_date(), day);
        assert!(v.check_password("open sesame").success);
        assert_eq!(v.check_password(SECRET), VerifyResponse::hint(HINT_MESSAGE));
    }
}
