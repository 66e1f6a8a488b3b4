pub mod cards;
pub mod footer;
pub mod forms;
pub mod icons;
pub mod navigation;
pub mod reveal;
pub mod shell;
