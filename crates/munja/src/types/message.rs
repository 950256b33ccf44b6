use serde::Serialize;

use super::GroupRecord;

/// One rendered message together with the group it was rendered for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    /// Group identifier, `G001` style.
    pub group_id: String,

    /// The personalized message text.
    pub message: String,

    /// The group record the message was rendered from.
    pub group_info: GroupRecord,
}
