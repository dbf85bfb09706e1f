pub mod theme_switcher;
pub mod toast_container;
pub mod toolbar;
