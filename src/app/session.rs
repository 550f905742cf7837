// SPDX-License-Identifier: MPL-2.0
//! The workflow session: a pure state machine sequencing
//! upload → validation → destination selection → transformation → result.
//!
//! The session never performs I/O. Operations that need an external call
//! return an [`Effect`] describing the call to dispatch, tagged with the
//! session generation at dispatch time; results are fed back through
//! `validation_resolved` / `transform_resolved` and anything carrying a
//! stale generation is discarded. That guard is the only concurrency
//! mechanism needed: the phase structure itself guarantees at most one call
//! in flight.
//!
//! Failure policy is deliberately asymmetric. A validation failure means the
//! photo is the problem, so the photo is discarded and the user re-uploads.
//! A transform failure is treated as a transient service hiccup, so photo
//! and destination both survive and a retry is one click away.

use crate::error::ServiceError;
use crate::media::{GeneratedImage, SourceImage};
use crate::service::Validation;

/// Workflow phase, carrying only the fields valid for it. A `Result` without
/// a generated image, or a `Transforming` without a destination, cannot be
/// expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Waiting for a photo. Holds the last failed verdict (shown inline) and
    /// the last service error, if any. A destination may already be chosen.
    Uploading {
        destination: Option<String>,
        verdict: Option<Validation>,
        last_error: Option<ServiceError>,
    },
    /// Validate call in flight.
    Validating {
        source: SourceImage,
        destination: Option<String>,
    },
    /// Portrait accepted; waiting for a destination / transform request.
    Selecting {
        source: SourceImage,
        destination: Option<String>,
        last_error: Option<ServiceError>,
    },
    /// Transform call in flight.
    Transforming {
        source: SourceImage,
        destination: String,
    },
    /// Makeover ready.
    Result {
        source: SourceImage,
        destination: String,
        generated: GeneratedImage,
    },
}

impl Phase {
    fn initial() -> Self {
        Phase::Uploading {
            destination: None,
            verdict: None,
            last_error: None,
        }
    }
}

/// External call requested by a session operation.
///
/// The caller is responsible for dispatching it and feeding the result back
/// with the same generation tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Validate {
        image: SourceImage,
        generation: u64,
    },
    Transform {
        image: SourceImage,
        destination: String,
        generation: u64,
    },
}

/// Whole mutable state of one user's workflow. Created on app start, reset
/// on "new photo", gone on exit; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    phase: Phase,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::initial(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True while an external call is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::Validating { .. } | Phase::Transforming { .. }
        )
    }

    pub fn source_image(&self) -> Option<&SourceImage> {
        match &self.phase {
            Phase::Uploading { .. } => None,
            Phase::Validating { source, .. }
            | Phase::Selecting { source, .. }
            | Phase::Transforming { source, .. }
            | Phase::Result { source, .. } => Some(source),
        }
    }

    pub fn destination(&self) -> Option<&str> {
        match &self.phase {
            Phase::Uploading { destination, .. }
            | Phase::Validating { destination, .. }
            | Phase::Selecting { destination, .. } => destination.as_deref(),
            Phase::Transforming { destination, .. } | Phase::Result { destination, .. } => {
                Some(destination)
            }
        }
    }

    /// The last resolved verdict, only retained while re-upload is pending.
    /// Past `Validating` the verdict was valid by construction.
    pub fn verdict(&self) -> Option<&Validation> {
        match &self.phase {
            Phase::Uploading { verdict, .. } => verdict.as_ref(),
            _ => None,
        }
    }

    pub fn generated(&self) -> Option<&GeneratedImage> {
        match &self.phase {
            Phase::Result { generated, .. } => Some(generated),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&ServiceError> {
        match &self.phase {
            Phase::Uploading { last_error, .. } | Phase::Selecting { last_error, .. } => {
                last_error.as_ref()
            }
            _ => None,
        }
    }

    /// Submits an uploaded photo: enters `Validating` and requests the
    /// validate call. Clears any prior error and verdict; a destination
    /// chosen earlier survives.
    pub fn submit_image(&mut self, source: SourceImage) -> Effect {
        let destination = self.destination().map(str::to_string);
        self.generation += 1;
        self.phase = Phase::Validating {
            source: source.clone(),
            destination,
        };
        Effect::Validate {
            image: source,
            generation: self.generation,
        }
    }

    /// Feeds back the validate result. Stale generations are ignored, as is
    /// any result arriving while no validate call is in flight.
    pub fn validation_resolved(
        &mut self,
        generation: u64,
        result: Result<Validation, ServiceError>,
    ) {
        if generation != self.generation || !matches!(self.phase, Phase::Validating { .. }) {
            return;
        }
        let Phase::Validating {
            source,
            destination,
        } = std::mem::replace(&mut self.phase, Phase::initial())
        else {
            return;
        };

        self.phase = match result {
            Ok(verdict) if verdict.is_valid => Phase::Selecting {
                source,
                destination,
                last_error: None,
            },
            // Invalid photo: discard it, keep the verdict for the inline
            // message. Re-upload is the only way forward.
            Ok(verdict) => Phase::Uploading {
                destination,
                verdict: Some(verdict),
                last_error: None,
            },
            Err(error) => Phase::Uploading {
                destination,
                verdict: None,
                last_error: Some(error),
            },
        };
    }

    /// Records the chosen destination. Allowed before the upload has
    /// validated; never transitions the phase by itself.
    pub fn select_destination(&mut self, country: impl Into<String>) {
        let country = country.into();
        match &mut self.phase {
            Phase::Uploading { destination, .. }
            | Phase::Validating { destination, .. }
            | Phase::Selecting { destination, .. } => *destination = Some(country),
            Phase::Transforming { .. } | Phase::Result { .. } => {}
        }
    }

    /// Starts the makeover. Silent no-op unless a validated photo and a
    /// destination are both present.
    pub fn request_transform(&mut self) -> Effect {
        let Phase::Selecting {
            source,
            destination: Some(destination),
            ..
        } = self.phase.clone()
        else {
            return Effect::None;
        };

        self.generation += 1;
        self.phase = Phase::Transforming {
            source: source.clone(),
            destination: destination.clone(),
        };
        Effect::Transform {
            image: source,
            destination,
            generation: self.generation,
        }
    }

    /// Feeds back the transform result. Stale generations are ignored, as is
    /// any result arriving while no transform call is in flight.
    pub fn transform_resolved(
        &mut self,
        generation: u64,
        result: Result<GeneratedImage, ServiceError>,
    ) {
        if generation != self.generation || !matches!(self.phase, Phase::Transforming { .. }) {
            return;
        }
        let Phase::Transforming {
            source,
            destination,
        } = std::mem::replace(&mut self.phase, Phase::initial())
        else {
            return;
        };

        self.phase = match result {
            Ok(generated) => Phase::Result {
                source,
                destination,
                generated,
            },
            // Photo and destination survive so a retry costs one click.
            Err(error) => Phase::Selecting {
                source,
                destination: Some(destination),
                last_error: Some(error),
            },
        };
    }

    /// Runs the transform again with the same photo and destination — the
    /// one explicit retry path in the workflow.
    pub fn regenerate(&mut self) -> Effect {
        let Phase::Result {
            source,
            destination,
            ..
        } = self.phase.clone()
        else {
            return Effect::None;
        };

        self.generation += 1;
        self.phase = Phase::Transforming {
            source: source.clone(),
            destination: destination.clone(),
        };
        Effect::Transform {
            image: source,
            destination,
            generation: self.generation,
        }
    }

    /// Back to the selector with the same photo; the generated image and the
    /// chosen destination are dropped.
    pub fn pick_new_destination(&mut self) {
        let Phase::Result { source, .. } = self.phase.clone() else {
            return;
        };
        self.phase = Phase::Selecting {
            source,
            destination: None,
            last_error: None,
        };
    }

    /// Full reset to a pristine session. The generation bump makes any
    /// in-flight result stale on arrival.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::initial();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portrait() -> SourceImage {
        SourceImage::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "image/jpeg")
    }

    fn valid_verdict() -> Validation {
        Validation {
            is_valid: true,
            reason: "valid portrait".to_string(),
        }
    }

    fn makeover() -> GeneratedImage {
        GeneratedImage::from_parts("image/png", "aGVsbG8=").expect("test image")
    }

    fn session_in_selecting() -> Session {
        let mut session = Session::new();
        let Effect::Validate { generation, .. } = session.submit_image(portrait()) else {
            panic!("expected validate effect");
        };
        session.validation_resolved(generation, Ok(valid_verdict()));
        session
    }

    #[test]
    fn submit_image_enters_validating_and_dispatches_once() {
        let mut session = Session::new();
        let effect = session.submit_image(portrait());
        assert!(matches!(effect, Effect::Validate { generation: 1, .. }));
        assert!(session.is_busy());
        assert_eq!(session.source_image(), Some(&portrait()));
    }

    #[test]
    fn valid_verdict_moves_to_selecting_and_keeps_source() {
        let session = session_in_selecting();
        assert!(matches!(session.phase(), Phase::Selecting { .. }));
        assert_eq!(session.source_image(), Some(&portrait()));
        assert!(session.last_error().is_none());
    }

    #[test]
    fn invalid_verdict_returns_to_uploading_and_discards_source() {
        let mut session = Session::new();
        let Effect::Validate { generation, .. } = session.submit_image(portrait()) else {
            panic!("expected validate effect");
        };
        session.validation_resolved(
            generation,
            Ok(Validation {
                is_valid: false,
                reason: "no face detected".to_string(),
            }),
        );

        assert!(matches!(session.phase(), Phase::Uploading { .. }));
        assert!(session.source_image().is_none());
        assert!(session.last_error().is_none());
        assert_eq!(session.verdict().unwrap().reason, "no face detected");
    }

    #[test]
    fn validate_service_error_rolls_back_with_error() {
        let mut session = Session::new();
        let Effect::Validate { generation, .. } = session.submit_image(portrait()) else {
            panic!("expected validate effect");
        };
        session.validation_resolved(generation, Err(ServiceError::Timeout));

        assert!(matches!(session.phase(), Phase::Uploading { .. }));
        assert!(session.source_image().is_none());
        assert_eq!(session.last_error(), Some(&ServiceError::Timeout));
        assert!(session.verdict().is_none());
    }

    #[test]
    fn destination_can_be_chosen_before_validation_completes() {
        let mut session = Session::new();
        session.select_destination("Japan");
        let Effect::Validate { generation, .. } = session.submit_image(portrait()) else {
            panic!("expected validate effect");
        };
        session.select_destination("Peru");
        session.validation_resolved(generation, Ok(valid_verdict()));

        assert_eq!(session.destination(), Some("Peru"));
        assert!(matches!(session.phase(), Phase::Selecting { .. }));
    }

    #[test]
    fn destination_survives_failed_validation() {
        let mut session = Session::new();
        session.select_destination("Morocco");
        let Effect::Validate { generation, .. } = session.submit_image(portrait()) else {
            panic!("expected validate effect");
        };
        session.validation_resolved(generation, Err(ServiceError::Http(500)));
        assert_eq!(session.destination(), Some("Morocco"));
    }

    #[test]
    fn request_transform_without_destination_is_a_noop() {
        let mut session = session_in_selecting();
        let before = session.clone();
        assert_eq!(session.request_transform(), Effect::None);
        assert_eq!(session, before);
    }

    #[test]
    fn request_transform_while_busy_is_a_noop() {
        let mut session = Session::new();
        session.select_destination("Japan");
        session.submit_image(portrait());
        assert_eq!(session.request_transform(), Effect::None);
    }

    #[test]
    fn transform_success_reaches_result() {
        let mut session = session_in_selecting();
        session.select_destination("Japan");
        let Effect::Transform {
            generation,
            destination,
            ..
        } = session.request_transform()
        else {
            panic!("expected transform effect");
        };
        assert_eq!(destination, "Japan");
        session.transform_resolved(generation, Ok(makeover()));

        assert!(matches!(session.phase(), Phase::Result { .. }));
        assert_eq!(session.generated(), Some(&makeover()));
        assert_eq!(session.destination(), Some("Japan"));
    }

    #[test]
    fn transform_failure_preserves_source_and_destination() {
        let mut session = session_in_selecting();
        session.select_destination("Japan");
        let Effect::Transform { generation, .. } = session.request_transform() else {
            panic!("expected transform effect");
        };
        session.transform_resolved(generation, Err(ServiceError::Http(503)));

        assert!(matches!(session.phase(), Phase::Selecting { .. }));
        assert_eq!(session.source_image(), Some(&portrait()));
        assert_eq!(session.destination(), Some("Japan"));
        assert_eq!(session.last_error(), Some(&ServiceError::Http(503)));

        // Retry reuses the stored pair without re-selection.
        let effect = session.request_transform();
        assert!(matches!(
            effect,
            Effect::Transform { ref destination, .. } if destination == "Japan"
        ));
    }

    #[test]
    fn regenerate_redispatches_from_result() {
        let mut session = session_in_selecting();
        session.select_destination("Japan");
        let Effect::Transform { generation, .. } = session.request_transform() else {
            panic!("expected transform effect");
        };
        session.transform_resolved(generation, Ok(makeover()));

        let effect = session.regenerate();
        assert!(matches!(
            effect,
            Effect::Transform { ref destination, .. } if destination == "Japan"
        ));
        assert!(session.is_busy());
    }

    #[test]
    fn regenerate_outside_result_is_a_noop() {
        let mut session = session_in_selecting();
        assert_eq!(session.regenerate(), Effect::None);
    }

    #[test]
    fn pick_new_destination_keeps_source_only() {
        let mut session = session_in_selecting();
        session.select_destination("Japan");
        let Effect::Transform { generation, .. } = session.request_transform() else {
            panic!("expected transform effect");
        };
        session.transform_resolved(generation, Ok(makeover()));

        session.pick_new_destination();
        assert!(matches!(session.phase(), Phase::Selecting { .. }));
        assert_eq!(session.source_image(), Some(&portrait()));
        assert!(session.destination().is_none());
        assert!(session.generated().is_none());
    }

    #[test]
    fn reset_returns_to_pristine_state() {
        let mut session = session_in_selecting();
        session.select_destination("Japan");
        session.reset();

        assert_eq!(session.phase(), Session::new().phase());
        assert!(session.source_image().is_none());
        assert!(session.destination().is_none());
        assert!(session.verdict().is_none());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn validation_result_without_a_call_in_flight_changes_nothing() {
        let mut session = Session::new();
        session.select_destination("Japan");
        let before = session.clone();

        session.validation_resolved(0, Err(ServiceError::Timeout));

        assert_eq!(session, before);
        assert_eq!(session.destination(), Some("Japan"));
        assert!(session.last_error().is_none());
    }

    #[test]
    fn transform_result_without_a_call_in_flight_changes_nothing() {
        let mut session = session_in_selecting();
        session.select_destination("Peru");
        let before = session.clone();

        // Generation matches, but nothing is in flight.
        session.transform_resolved(1, Ok(makeover()));

        assert_eq!(session, before);
        assert!(matches!(session.phase(), Phase::Selecting { .. }));
        assert_eq!(session.destination(), Some("Peru"));
    }

    #[test]
    fn stale_validation_result_is_discarded_after_reset() {
        let mut session = Session::new();
        let Effect::Validate { generation, .. } = session.submit_image(portrait()) else {
            panic!("expected validate effect");
        };
        session.reset();
        session.validation_resolved(generation, Ok(valid_verdict()));

        // The late result must not resurrect the discarded upload.
        assert!(matches!(session.phase(), Phase::Uploading { .. }));
        assert!(session.source_image().is_none());
    }

    #[test]
    fn stale_transform_result_is_discarded_after_new_submission() {
        let mut session = session_in_selecting();
        session.select_destination("Japan");
        let Effect::Transform { generation, .. } = session.request_transform() else {
            panic!("expected transform effect");
        };

        // User abandons the wait and uploads a different photo.
        let fresh = SourceImage::new(vec![9, 9, 9], "image/png");
        session.submit_image(fresh.clone());
        session.transform_resolved(generation, Ok(makeover()));

        assert!(matches!(session.phase(), Phase::Validating { .. }));
        assert_eq!(session.source_image(), Some(&fresh));
        assert!(session.generated().is_none());
    }
}
