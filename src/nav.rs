//! Navigation state for the shared page header and sidebar.
//!
//! Every page renders the same menu structure; the only variable input is the
//! current-page label, which selects the single entry (if any) that gets the
//! active style.

/// Label used when a request does not say which page it is on.
pub const DEFAULT_PAGE: &str = "Home";

/// Visual variant of a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStyle {
    Active,
    Inactive,
}

impl MenuStyle {
    /// Classify one entry: exact, case-sensitive label equality.
    pub fn of(current: &str, label: &str) -> Self {
        if current == label {
            MenuStyle::Active
        } else {
            MenuStyle::Inactive
        }
    }

    pub fn header_class(self) -> &'static str {
        match self {
            MenuStyle::Active => "headerMenuItem2",
            MenuStyle::Inactive => "headerMenuItem",
        }
    }

    pub fn sidebar_class(self) -> &'static str {
        match self {
            MenuStyle::Active => "aboutMenuItem",
            MenuStyle::Inactive => "aboutMenuItem2",
        }
    }
}

/// Current-page label for a request: `None` and the empty string both mean
/// the default page.
pub fn resolve_current_page(param: Option<&str>) -> String {
    match param {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => DEFAULT_PAGE.to_string(),
    }
}

struct HeaderLink {
    label: &'static str,
    href: &'static str,
}

const HEADER_LINKS: [HeaderLink; 6] = [
    HeaderLink { label: "Home", href: "/" },
    HeaderLink { label: "About", href: "/about" },
    HeaderLink { label: "Features", href: "/features" },
    HeaderLink { label: "Download", href: "/download" },
    HeaderLink { label: "Documentation", href: "/doc/v5" },
    HeaderLink { label: "Forums", href: "/forums" },
];

struct SidebarLink {
    label: &'static str,
    href: &'static str,
    /// Label matched against the current page; `None` never highlights
    /// (the versioned doc links that share a visible label).
    page: Option<&'static str>,
    indent: bool,
}

const fn side(label: &'static str, href: &'static str) -> SidebarLink {
    SidebarLink {
        label,
        href,
        page: Some(label),
        indent: false,
    }
}

const fn side_sub(
    label: &'static str,
    href: &'static str,
    page: Option<&'static str>,
) -> SidebarLink {
    SidebarLink {
        label,
        href,
        page,
        indent: true,
    }
}

/// Sidebar entries, grouped into the sections separated by rules in the
/// rendered page.
const SIDEBAR_SECTIONS: &[&[SidebarLink]] = &[
    &[
        side("Home", "/"),
        side("About", "/about"),
        side("Download", "/download"),
        side("Features", "/features"),
        side("Patches", "/patches"),
        side("Samples", "/samples/grid-failover"),
        side("License", "/license"),
    ],
    &[
        side("Documentation", "/doc/v5"),
        side_sub("v5.x", "/doc/v5", Some("v5.x")),
        side_sub("v4.x", "/doc/v4", Some("v4.x")),
        side_sub("v3.x", "/doc/v3", Some("v3.x")),
        side("Javadoc", "/api-5"),
        side_sub("v5.x", "/api-5", None),
        side_sub("v4.x", "/api", None),
        side_sub("v3.x", "/api-3", None),
        side(".Net API", "/csdoc-5"),
        side_sub("v5.x", "/csdoc-5", None),
    ],
    &[
        side("Issue tracker", "/tracker/tbg"),
        side_sub("bugs", "/tracker/tbg/bugs", Some("bugs")),
        side_sub("features", "/tracker/tbg/features", Some("features")),
        side_sub("enhancements", "/tracker/tbg/enhancements", Some("enhancements")),
        side_sub("next version", "/tracker/tbg/next-version", Some("next version")),
        side_sub("maintenance", "/tracker/tbg/maintenance", Some("maintenance")),
    ],
    &[
        side("Press", "/press"),
        side("Release notes", "/release-notes"),
        side("Quotes", "/quotes"),
        side("Screenshots", "/screenshots"),
        side("News", "/news"),
    ],
    &[side("Contacts", "/contacts"), side("Services", "/services")],
];

/// One header menu entry with its resolved style class.
pub struct HeaderItem {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
}

/// One sidebar entry with its resolved style class.
pub struct SidebarItem {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
    pub indent: bool,
}

pub struct SidebarSection {
    pub items: Vec<SidebarItem>,
}

/// Everything the base template needs to draw the navigation chrome for one
/// request. Built from the current-page label alone.
pub struct NavContext {
    pub current: String,
    /// The decorative strip above the header is dropped on the forums page.
    pub show_frame_top: bool,
    /// Left/right cap images of the header menu bar.
    pub start_button: &'static str,
    pub end_button: &'static str,
    pub header: Vec<HeaderItem>,
    pub sidebar: Vec<SidebarSection>,
}

impl NavContext {
    pub fn for_page(current: impl Into<String>) -> Self {
        let current = current.into();

        let header = HEADER_LINKS
            .iter()
            .map(|link| HeaderItem {
                label: link.label,
                href: link.href,
                class: MenuStyle::of(&current, link.label).header_class(),
            })
            .collect();

        let sidebar = SIDEBAR_SECTIONS
            .iter()
            .map(|section| SidebarSection {
                items: section
                    .iter()
                    .map(|link| SidebarItem {
                        label: link.label,
                        href: link.href,
                        indent: link.indent,
                        class: match link.page {
                            Some(page) => MenuStyle::of(&current, page).sidebar_class(),
                            None => MenuStyle::Inactive.sidebar_class(),
                        },
                    })
                    .collect(),
            })
            .collect();

        let start_button = if current == "Home" {
            "btn_start.gif"
        } else {
            "btn_active_start.gif"
        };
        let end_button = if current == "Forums" {
            "btn_end.gif"
        } else {
            "btn_active_end.gif"
        };

        NavContext {
            show_frame_top: current != "Forums",
            start_button,
            end_button,
            header,
            sidebar,
            current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_header_labels(nav: &NavContext) -> Vec<&'static str> {
        nav.header
            .iter()
            .filter(|item| item.class == MenuStyle::Active.header_class())
            .map(|item| item.label)
            .collect()
    }

    fn active_sidebar_items(nav: &NavContext) -> Vec<&SidebarItem> {
        nav.sidebar
            .iter()
            .flat_map(|section| section.items.iter())
            .filter(|item| item.class == MenuStyle::Active.sidebar_class())
            .collect()
    }

    mod resolve_tests {
        use super::*;

        #[test]
        fn test_absent_param_defaults_to_home() {
            assert_eq!(resolve_current_page(None), "Home");
        }

        #[test]
        fn test_empty_param_defaults_to_home() {
            assert_eq!(resolve_current_page(Some("")), "Home");
        }

        #[test]
        fn test_param_taken_verbatim() {
            assert_eq!(resolve_current_page(Some("About")), "About");
            assert_eq!(resolve_current_page(Some("no such page")), "no such page");
        }
    }

    mod style_tests {
        use super::*;

        #[test]
        fn test_exact_match_is_active() {
            assert_eq!(MenuStyle::of("About", "About"), MenuStyle::Active);
        }

        #[test]
        fn test_mismatch_is_inactive() {
            assert_eq!(MenuStyle::of("About", "Home"), MenuStyle::Inactive);
        }

        #[test]
        fn test_comparison_is_case_sensitive() {
            assert_eq!(MenuStyle::of("about", "About"), MenuStyle::Inactive);
        }

        #[test]
        fn test_style_classes() {
            assert_eq!(MenuStyle::Active.header_class(), "headerMenuItem2");
            assert_eq!(MenuStyle::Inactive.header_class(), "headerMenuItem");
            assert_eq!(MenuStyle::Active.sidebar_class(), "aboutMenuItem");
            assert_eq!(MenuStyle::Inactive.sidebar_class(), "aboutMenuItem2");
        }
    }

    mod header_tests {
        use super::*;

        #[test]
        fn test_each_header_label_activates_exactly_itself() {
            for link in &HEADER_LINKS {
                let nav = NavContext::for_page(link.label);
                assert_eq!(
                    active_header_labels(&nav),
                    vec![link.label],
                    "current page {}",
                    link.label
                );
            }
        }

        #[test]
        fn test_unknown_label_activates_nothing() {
            let nav = NavContext::for_page("Quotes");
            assert!(active_header_labels(&nav).is_empty());
        }

        #[test]
        fn test_header_order_is_fixed() {
            let nav = NavContext::for_page("Home");
            let labels: Vec<_> = nav.header.iter().map(|item| item.label).collect();
            assert_eq!(
                labels,
                vec!["Home", "About", "Features", "Download", "Documentation", "Forums"]
            );
        }
    }

    mod sidebar_tests {
        use super::*;

        #[test]
        fn test_about_activates_one_sidebar_entry() {
            let nav = NavContext::for_page("About");
            let active = active_sidebar_items(&nav);
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].label, "About");
            assert_eq!(active[0].href, "/about");
        }

        #[test]
        fn test_unknown_label_activates_no_sidebar_entry() {
            let nav = NavContext::for_page("no such page");
            assert!(active_sidebar_items(&nav).is_empty());
        }

        #[test]
        fn test_every_matchable_label_activates_at_most_one_entry() {
            let labels: Vec<&str> = SIDEBAR_SECTIONS
                .iter()
                .flat_map(|section| section.iter())
                .filter_map(|link| link.page)
                .collect();
            for label in labels {
                let nav = NavContext::for_page(label);
                assert!(
                    active_sidebar_items(&nav).len() <= 1,
                    "current page {label} activated more than one entry"
                );
            }
        }

        #[test]
        fn test_versioned_doc_label_activates_documentation_entry_only() {
            // Three sidebar entries display "v5.x" but only the one under
            // Documentation carries it as a match label.
            let nav = NavContext::for_page("v5.x");
            let active = active_sidebar_items(&nav);
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].href, "/doc/v5");
            assert!(active[0].indent);
        }

        #[test]
        fn test_javadoc_version_links_never_activate() {
            let nav = NavContext::for_page("Javadoc");
            let active = active_sidebar_items(&nav);
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].label, "Javadoc");
            assert!(!active[0].indent);
        }
    }

    mod chrome_tests {
        use super::*;

        #[test]
        fn test_frame_top_omitted_only_on_forums() {
            assert!(!NavContext::for_page("Forums").show_frame_top);
            for label in ["Home", "About", "Features", "Download", "Documentation", "Quotes"] {
                assert!(NavContext::for_page(label).show_frame_top, "label {label}");
            }
        }

        #[test]
        fn test_header_cap_buttons_on_home() {
            let nav = NavContext::for_page("Home");
            assert_eq!(nav.start_button, "btn_start.gif");
            assert_eq!(nav.end_button, "btn_active_end.gif");
        }

        #[test]
        fn test_header_cap_buttons_on_forums() {
            let nav = NavContext::for_page("Forums");
            assert_eq!(nav.start_button, "btn_active_start.gif");
            assert_eq!(nav.end_button, "btn_end.gif");
        }

        #[test]
        fn test_header_cap_buttons_elsewhere() {
            let nav = NavContext::for_page("About");
            assert_eq!(nav.start_button, "btn_active_start.gif");
            assert_eq!(nav.end_button, "btn_active_end.gif");
        }
    }
}
