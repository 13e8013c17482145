//! Navigation bar items, driven only by whether a session is active

/// An entry in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Users,
    Admin,
    Logout,
}

impl NavItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Admin => "Admin",
            Self::Logout => "Logout",
        }
    }

    /// Links navigate; the logout entry triggers an action instead
    pub fn is_action(self) -> bool {
        matches!(self, Self::Logout)
    }
}

const SIGNED_IN_ITEMS: [NavItem; 3] = [NavItem::Users, NavItem::Admin, NavItem::Logout];

/// Items to render for the given session state
pub fn nav_items(is_logged_in: bool) -> &'static [NavItem] {
    if is_logged_in {
        &SIGNED_IN_ITEMS
    } else {
        &[]
    }
}

/// Activate the item at `index`.
///
/// Calls `on_logout` when the logout entry is activated. Returns the
/// activated item, or `None` if there is nothing at `index`.
pub fn activate<F: FnOnce()>(is_logged_in: bool, index: usize, on_logout: F) -> Option<NavItem> {
    let item = *nav_items(is_logged_in).get(index)?;
    if item == NavItem::Logout {
        on_logout();
    }
    Some(item)
}

/// Selection cursor over the navigation bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavSelection {
    pub index: usize,
}

impl NavSelection {
    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.index = (self.index + 1) % count;
        }
    }

    pub fn prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.index = if self.index == 0 {
            count - 1
        } else {
            self.index - 1
        };
    }
}
