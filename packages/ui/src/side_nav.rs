use dioxus::prelude::*;

use crate::icons::{FaFolder, FaListUl};
use crate::Icon;

/// Which side navigation entry is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Projects,
    Tasks,
}

impl NavTab {
    pub const ALL: [NavTab; 2] = [NavTab::Projects, NavTab::Tasks];

    pub fn path(&self) -> &'static str {
        match self {
            NavTab::Projects => "/",
            NavTab::Tasks => "/tasks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Projects => "Projects",
            NavTab::Tasks => "Tasks",
        }
    }
}

#[component]
pub fn SideNav(active: NavTab) -> Element {
    rsx! {
        nav {
            class: "side-nav",
            for tab in NavTab::ALL {
                Link {
                    key: "{tab.path()}",
                    to: tab.path(),
                    class: link_class(tab == active),
                    {tab_icon(tab)}
                    span { "{tab.label()}" }
                }
            }
        }
    }
}

fn link_class(active: bool) -> String {
    if active {
        "nav-link active".to_string()
    } else {
        "nav-link".to_string()
    }
}

fn tab_icon(tab: NavTab) -> Element {
    match tab {
        NavTab::Projects => rsx! { Icon { icon: FaFolder, width: 16, height: 16 } },
        NavTab::Tasks => rsx! { Icon { icon: FaListUl, width: 16, height: 16 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_map_to_routes() {
        assert_eq!(NavTab::Projects.path(), "/");
        assert_eq!(NavTab::Tasks.path(), "/tasks");
        assert_eq!(NavTab::Tasks.label(), "Tasks");
        assert_eq!(link_class(true), "nav-link active");
    }
}
