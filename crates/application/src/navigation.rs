//! Role-gated section navigation.
//!
//! The sidebar and the rendered panel are driven by the same policy check,
//! so a section hidden from the sidebar can never be reached by a stale
//! selection either.

use mitto_domain::{Role, Section, can_view, visible_sections};

/// Navigation state for the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsNav {
    role: Role,
    active: Section,
}

impl SettingsNav {
    /// Creates navigation for a role, landing on the account section.
    ///
    /// Account is visible to every role, so the initial selection is
    /// always valid.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            active: Section::Account,
        }
    }

    /// Returns the viewer's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the currently selected section.
    #[must_use]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Returns the sections to render in the sidebar, in sidebar order.
    #[must_use]
    pub fn visible_sections(&self) -> Vec<Section> {
        visible_sections(self.role)
    }

    /// Selects a section. Returns `false` and leaves the selection
    /// unchanged when the role may not view it.
    pub fn activate(&mut self, section: Section) -> bool {
        if !can_view(self.role, section) {
            return false;
        }

        self.active = section;
        true
    }

    /// Returns the section whose panel should render right now.
    ///
    /// Re-checks the policy at render time: if the selection somehow
    /// outlived a role change, the panel falls back to the account section
    /// instead of leaking a restricted one.
    #[must_use]
    pub fn content(&self) -> Section {
        if can_view(self.role, self.active) {
            self.active
        } else {
            Section::Account
        }
    }

    /// Applies a role change, snapping the selection back to the account
    /// section when the current one is no longer visible.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        if !can_view(self.role, self.active) {
            self.active = Section::Account;
        }
    }
}
