use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

/// Page sections reachable through `#anchor` links. The identifier is
/// the element id on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Realisations,
    Offres,
    Comparatif,
    Process,
    Devis,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Realisations,
        Section::Offres,
        Section::Comparatif,
        Section::Process,
        Section::Devis,
        Section::Faq,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Realisations => "realisations",
            Section::Offres => "offres",
            Section::Comparatif => "comparatif",
            Section::Process => "process",
            Section::Devis => "devis",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationTab {
    pub key: Section,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const TABS: [NavigationTab; 5] = [
    NavigationTab { key: Section::Realisations, label: "Nos réalisations", icon: "photo_library" },
    NavigationTab { key: Section::Process, label: "Notre process", icon: "workflow" },
    NavigationTab { key: Section::Comparatif, label: "Comparatif", icon: "table" },
    NavigationTab { key: Section::Faq, label: "FAQ", icon: "help" },
    NavigationTab { key: Section::Offres, label: "Offres", icon: "sell" },
];

/// Sections the scroll spy watches, in page order.
pub const SPY_SECTIONS: [Section; 5] = [
    Section::Realisations,
    Section::Offres,
    Section::Comparatif,
    Section::Process,
    Section::Faq,
];

pub fn tab_index(section: Section) -> Option<usize> {
    TABS.iter().position(|tab| tab.key == section)
}

/// Which navigation entry is highlighted. Exactly one at all times.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub active: Section,
}

impl Default for NavState {
    fn default() -> Self {
        Self { active: Section::Realisations }
    }
}

pub enum NavAction {
    Activate(Section),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Activate(section) if section == self.active => self,
            NavAction::Activate(section) => Rc::new(NavState { active: section }),
        }
    }
}

pub type ActiveSection = UseReducerHandle<NavState>;
