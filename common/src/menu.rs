use tracing::debug;

use crate::content::{Icon, NavLink};

// open/closed flag for the collapsed navigation panel
//
// the navbar owns exactly one of these; nothing else reads or writes it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // following any link out of the panel collapses it, whichever link it was
    pub fn follow(&mut self, link: &NavLink) -> &'static str {
        debug!(path = link.path, "menu link followed");
        self.close();
        link.path
    }

    pub fn toggle_icon(self) -> Icon {
        if self.open { Icon::Close } else { Icon::Menu }
    }
}
