pub mod button;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use select::Select;
pub use textarea::Textarea;
