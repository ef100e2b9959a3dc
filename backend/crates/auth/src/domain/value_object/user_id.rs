//! User ID Value Object

use kernel::id::Id;

/// Marker type for user identifiers
pub struct UserMarker;

/// Positive 64-bit user identifier
pub type UserId = Id<UserMarker>;
