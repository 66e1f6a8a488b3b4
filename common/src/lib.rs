pub mod clock;
pub mod config;
pub mod content;
pub mod form;
pub mod menu;
pub mod theme;
