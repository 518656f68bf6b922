use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub entry_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Entry bar (3 rows, bordered)
/// - Task list (remaining space)
/// - Status bar: counter + filter tabs (1 row)
/// - Keybindings hints (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Entry bar
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        entry_area: chunks[0],
        list_area: chunks[1],
        status_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.entry_area.height, 3);
        assert!(layout.list_area.height > 0);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);

        // Areas stack without overlap
        assert_eq!(layout.list_area.y, layout.entry_area.bottom());
        assert_eq!(layout.status_area.y, layout.list_area.bottom());
        assert_eq!(layout.keybindings_area.y, layout.status_area.bottom());
    }
}
