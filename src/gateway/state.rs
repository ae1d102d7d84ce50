use std::sync::Arc;

use crate::constants::DEFAULT_MAX_UPLOAD_BYTES;
use crate::document::TextExtractor;
use crate::embedding::TextEncoder;
use crate::pipeline::ResumeMatcher;

pub struct HandlerState<X, E>
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    pub matcher: Arc<ResumeMatcher<X, E>>,

    pub max_upload_bytes: usize,
}

impl<X, E> Clone for HandlerState<X, E>
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    fn clone(&self) -> Self {
        Self {
            matcher: Arc::clone(&self.matcher),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}

impl<X, E> HandlerState<X, E>
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    pub fn new(matcher: Arc<ResumeMatcher<X, E>>) -> Self {
        Self {
            matcher,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}
