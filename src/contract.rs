//! Documented status-code contract for each scenario, including known
//! deviations of the live service.
//!
//! The service's documented contract and its observed behavior disagree in a
//! few places: empty-input creation and update return 200 where 400 is
//! documented, and two photo-upload edge cases return 500 where 400 is
//! documented. Scenarios assert against the *documented* status; when the
//! actual status matches a recorded deviation instead, the check classifies
//! it as [`ContractCheck::KnownDeviation`] so the divergence stays visible
//! rather than being rewritten into the expectation.

use crate::logging::log_warn;

/// Result of checking an actual status code against an expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractCheck {
    /// The service returned the documented status.
    Honored,
    /// The service returned a status previously recorded as a deviation.
    ///
    /// The documented contract is still considered violated; this variant
    /// only distinguishes "the known bug" from "something new broke".
    KnownDeviation {
        /// Status the contract documents.
        documented: u16,
        /// Status the service actually returned.
        observed: u16,
    },
    /// The service returned a status that matches neither the contract nor a
    /// recorded deviation.
    Violation {
        /// Status the contract documents.
        documented: u16,
        /// Status the service actually returned.
        actual: u16,
    },
}

impl ContractCheck {
    /// Whether the documented contract was honored.
    pub fn is_honored(self) -> bool {
        matches!(self, Self::Honored)
    }

    /// Whether the outcome is either the documented status or a recorded
    /// deviation. A live scenario fails only when this is `false`.
    pub fn is_accounted_for(self) -> bool {
        !matches!(self, Self::Violation { .. })
    }
}

/// Expected status for one scenario: the documented code plus, where the live
/// service is known to misbehave, the observed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusExpectation {
    /// Status code the service's documented contract promises.
    pub documented: u16,
    /// Status code the live service has been observed returning instead.
    pub known_deviation: Option<u16>,
}

impl StatusExpectation {
    /// An expectation with no recorded deviation.
    pub const fn of(documented: u16) -> Self {
        Self {
            documented,
            known_deviation: None,
        }
    }

    /// An expectation where the live service is known to return a different
    /// status than documented.
    pub const fn with_known_deviation(documented: u16, observed: u16) -> Self {
        Self {
            documented,
            known_deviation: Some(observed),
        }
    }

    /// Classify an actual status against this expectation.
    ///
    /// A known deviation is logged at WARN so it shows up in scenario output
    /// even when the suite chooses not to fail on it.
    pub fn check(&self, actual: u16) -> ContractCheck {
        if actual == self.documented {
            return ContractCheck::Honored;
        }
        if let Some(observed) = self.known_deviation {
            if actual == observed {
                log_warn!(
                    documented = self.documented,
                    observed = observed,
                    "Service returned its known deviation instead of the documented status"
                );
                return ContractCheck::KnownDeviation {
                    documented: self.documented,
                    observed,
                };
            }
        }
        ContractCheck::Violation {
            documented: self.documented,
            actual,
        }
    }
}

/// Per-scenario expectations, one constant per scenario of the suite.
pub mod expectations {
    use super::StatusExpectation;

    /// Valid credentials yield a key.
    pub const LOGIN_VALID: StatusExpectation = StatusExpectation::of(200);
    /// Invalid credentials are rejected.
    pub const LOGIN_INVALID: StatusExpectation = StatusExpectation::of(403);

    /// Listing with a valid filter value.
    pub const LIST_VALID_FILTER: StatusExpectation = StatusExpectation::of(200);
    /// Listing with a filter value outside `my_pets`/``. Documented 400;
    /// the service's actual rejection status has been observed
    /// inconsistently, most recently as 500.
    pub const LIST_INVALID_FILTER: StatusExpectation =
        StatusExpectation::with_known_deviation(400, 500);

    /// Creating a pet with all required fields and a photo.
    pub const CREATE_WITH_PHOTO: StatusExpectation = StatusExpectation::of(200);
    /// Creating a pet with an empty name. Documented 400; the live service
    /// has been observed accepting it with 200.
    pub const CREATE_EMPTY_NAME: StatusExpectation =
        StatusExpectation::with_known_deviation(400, 200);
    /// Creating a pet without a photo.
    pub const CREATE_SIMPLE: StatusExpectation = StatusExpectation::of(200);
    /// Creating a photo-less pet with all fields empty. Documented 400;
    /// observed 200.
    pub const CREATE_SIMPLE_EMPTY: StatusExpectation =
        StatusExpectation::with_known_deviation(400, 200);

    /// Updating a pet with valid data.
    pub const UPDATE_VALID: StatusExpectation = StatusExpectation::of(200);
    /// Updating a pet with empty fields. Documented 400; observed 200.
    pub const UPDATE_EMPTY_FIELDS: StatusExpectation =
        StatusExpectation::with_known_deviation(400, 200);

    /// Deleting an owned pet.
    pub const DELETE_EXISTING: StatusExpectation = StatusExpectation::of(200);
    /// Deleting a syntactically valid but unknown id.
    pub const DELETE_MISSING: StatusExpectation = StatusExpectation::of(404);

    /// Attaching a photo to an existing pet.
    pub const SET_PHOTO: StatusExpectation = StatusExpectation::of(200);
    /// Attaching a photo to an unknown pet id. Documented 400; observed 500.
    pub const SET_PHOTO_MISSING_PET: StatusExpectation =
        StatusExpectation::with_known_deviation(400, 500);
    /// Uploading an unsupported image format. Documented 400; observed 500.
    pub const SET_PHOTO_BAD_FORMAT: StatusExpectation =
        StatusExpectation::with_known_deviation(400, 500);
}
