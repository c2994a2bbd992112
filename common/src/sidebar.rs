/// Open/closed state of the navigation sidebar. Owned by the root view and
/// handed down to whoever renders or toggles the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.open();
        assert!(sidebar.is_open());
        sidebar.close();
        sidebar.toggle();
        sidebar.toggle();
        assert!(!sidebar.is_open());
    }
}
