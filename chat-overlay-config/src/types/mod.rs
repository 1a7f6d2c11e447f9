//! Chat taxonomy and colour types shared by the config store and the
//! settings UI.

mod chat_source;
mod chat_type;
mod color;
mod input_channel;

pub use chat_source::ChatSource;
pub use chat_type::ChatType;
pub use color::{rgb_to_rgba, rgba_components, rgba_to_rgb};
pub use input_channel::InputChannel;
