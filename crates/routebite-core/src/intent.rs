//! Seam between the dispatcher and the NLU service.
//!
//! The core crate only knows this trait; the Wit.ai client in
//! `routebite-infra` implements it, and tests substitute canned extractors.

use routebite_types::error::IntentError;
use routebite_types::intent::RecognizedEntities;

/// Extracts start/end city slots from free-form text.
pub trait IntentExtractor: Send + Sync {
    /// Run the text through the NLU service.
    ///
    /// A slot the service did not recognize is `None` in the result; that is
    /// not an error at this level. Transport and response-shape failures are.
    fn extract(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<RecognizedEntities, IntentError>> + Send;
}
