//! Navigation targets, in document order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// Matches the `id` attribute rendered by the section.
    pub id: &'static str,
    pub nav_label: &'static str,
    pub indicator_label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "journey", nav_label: "Journey", indicator_label: "Journey" },
    Section { id: "services", nav_label: "Services", indicator_label: "Services" },
    Section { id: "results", nav_label: "Results", indicator_label: "Results" },
    Section { id: "faq", nav_label: "FAQ", indicator_label: "FAQ" },
    Section { id: "consult", nav_label: "Pick My Brain", indicator_label: "Consult" },
    Section { id: "contact", nav_label: "Contact", indicator_label: "Contact" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn ids_are_valid_anchors() {
        for section in SECTIONS {
            assert!(!section.id.is_empty());
            assert!(section.id.chars().all(|c| c.is_ascii_lowercase()), "{}", section.id);
        }
    }
}
