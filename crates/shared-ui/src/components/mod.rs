// Standalone components
pub mod badge;
pub mod card;
pub mod skeleton;
pub mod stat_card;

// Primitive wrappers
pub mod avatar;
pub mod dialog;
pub mod dropdown_menu;
pub mod toast;

// Overlays
pub mod action_menu;
pub mod dismissible;

pub use action_menu::*;
pub use avatar::*;
pub use badge::*;
pub use card::*;
pub use dialog::*;
pub use dismissible::*;
pub use dropdown_menu::*;
pub use skeleton::*;
pub use stat_card::*;
pub use toast::*;
