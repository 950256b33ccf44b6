mod fixed;
mod group;
mod message;
mod value;

pub use fixed::FixedData;
pub use group::{CORE_FIELDS, GroupRecord};
pub use message::RenderedMessage;
pub use value::{Value, member_list_text};
