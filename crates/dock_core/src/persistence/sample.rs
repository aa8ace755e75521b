//! Sample layout shown on first start or when the stored record is unusable

use crate::model::{DockItem, DockItemKind, DockLayout, DockSide, Group};

/// Deterministic starter layout: two groups with a couple of shortcuts each.
pub fn sample_layout() -> DockLayout {
    let mut development = Group::new("Development");
    development.expanded = true;
    development.items = vec![
        DockItem::new(
            "Visual Studio Code",
            r"C:\ProgramData\Microsoft\Windows\Start Menu\Programs\Visual Studio Code.lnk",
            DockItemKind::File,
        ),
        DockItem::new(
            "Notepad++",
            r"C:\Program Files\Notepad++\notepad++.exe",
            DockItemKind::Application,
        ),
    ];

    let mut utilities = Group::new("Utilities");
    utilities.expanded = false;
    utilities.items = vec![
        DockItem::new(
            "Calculator",
            r"C:\Windows\System32\calc.exe",
            DockItemKind::Application,
        ),
        DockItem::new(
            "Paint",
            r"C:\Windows\System32\mspaint.exe",
            DockItemKind::Application,
        ),
    ];

    DockLayout {
        groups: vec![development, utilities],
        dock_side: DockSide::Left,
        expanded: false,
        always_on_top: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DockLayoutRecord;

    #[test]
    fn test_sample_has_non_empty_groups() {
        let layout = sample_layout();
        assert!(!layout.groups.is_empty());
        assert!(layout.groups.iter().all(|g| !g.items.is_empty()));
    }

    #[test]
    fn test_sample_is_deterministic() {
        let a = DockLayoutRecord::from(&sample_layout());
        let b = DockLayoutRecord::from(&sample_layout());
        assert_eq!(a, b);
    }
}
