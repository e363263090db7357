//! Read-only access to the cognitive distortion library.

use crate::domain::foundation::ThoughtPatternId;
use crate::domain::records::ThoughtPattern;

pub trait ThoughtPatternReader: Send + Sync {
    fn list(&self) -> Vec<ThoughtPattern>;

    fn find_by_id(&self, id: ThoughtPatternId) -> Option<ThoughtPattern>;
}
