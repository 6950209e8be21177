// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod data_table;
pub mod detail_list;
pub mod file_input;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod textarea;

// Primitive wrapper
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use data_table::*;
pub use detail_list::*;
pub use file_input::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
