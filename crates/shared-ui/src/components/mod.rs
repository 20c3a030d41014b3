// Standalone components with co-located styles.
pub mod autocomplete;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;

// Overlay components.
pub mod confirm_dialog;
pub mod dialog;
pub mod toast;

// Re-exports for convenience
pub use autocomplete::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use dialog::*;
pub use input::*;
pub use page_header::*;
pub use search_bar::*;
pub use skeleton::*;
pub use toast::*;
