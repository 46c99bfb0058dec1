//! Checklist modal for selection dialogs
//!
//! ```text
//! ╭──────────────── Favourite colours ────────────────╮
//! │ Pick every colour you like                        │
//! │╭ 1 selected ─────────────────────────────────────╮│
//! ││> [ ] Red                                        ││
//! ││  [x] Green                                      ││
//! ││  [ ] Blue                                       ││
//! │╰─────────────────────────────────────────────────╯│
//! │    ↑↓ Move  Space Toggle  Enter OK  Esc Cancel    │
//! ╰───────────────────────────────────────────────────╯
//! ```

use choice_app::SelectionDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget,
        Widget,
    },
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::styles;

/// Preferred modal width bounds
const MIN_MODAL_WIDTH: u16 = 40;
const MAX_MODAL_WIDTH: u16 = 64;

/// Checklist modal widget.
///
/// Renders from a [`SelectionDialogState`]; the [`ListState`] carries the
/// scroll offset between frames.
pub struct SelectionDialog<'a> {
    state: &'a SelectionDialogState,
}

impl<'a> SelectionDialog<'a> {
    pub fn new(state: &'a SelectionDialogState) -> Self {
        Self { state }
    }

    fn modal_size(&self, area: Rect) -> (u16, u16) {
        let width = ((area.width as u32 * 70 / 100) as u16).clamp(MIN_MODAL_WIDTH, MAX_MODAL_WIDTH);
        // outer border + list border + footer
        let chrome = 2 + 2 + 1 + self.prompt_height() as usize;
        let height = (self.state.size().max(1) + chrome).min(u16::MAX as usize) as u16;
        (width, height)
    }

    fn prompt_height(&self) -> u16 {
        if self.state.prompt().is_some() {
            1
        } else {
            0
        }
    }

    fn items(&self, label_width: usize) -> Vec<ListItem<'a>> {
        let state = self.state;
        let settings = state.settings();

        state
            .labels()
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let checked = state.is_checked(i);
                let checkbox = if checked {
                    settings.checked_symbol.as_str()
                } else {
                    settings.unchecked_symbol.as_str()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(checkbox, styles::checkbox(checked)),
                    Span::raw(" "),
                    Span::styled(truncate_to_width(label, label_width), styles::text_primary()),
                ]))
            })
            .collect()
    }

    fn render_footer(area: Rect, buf: &mut Buffer) {
        let footer = Line::from(vec![
            Span::styled("↑↓", styles::key_hint()),
            Span::styled(" Move  ", styles::text_secondary()),
            Span::styled("Space", styles::key_hint()),
            Span::styled(" Toggle  ", styles::text_secondary()),
            Span::styled("Enter", styles::key_hint()),
            Span::styled(" OK  ", styles::text_secondary()),
            Span::styled("Esc", styles::key_hint()),
            Span::styled(" Cancel", styles::text_secondary()),
        ]);
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl StatefulWidget for SelectionDialog<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
        let (width, height) = self.modal_size(area);
        let modal_area = centered_rect(width, height, area);

        dim_background(buf, area);
        Clear.render(modal_area, buf);
        render_shadow(buf, modal_area);

        let block = Block::default()
            .title(format!(" {} ", self.state.title()))
            .title_alignment(Alignment::Center)
            .title_style(styles::accent_bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_active())
            .style(styles::popup_body());

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(self.prompt_height()), // Prompt
            Constraint::Min(3),                       // Option list
            Constraint::Length(1),                    // Footer/help
        ])
        .split(inner);

        if let Some(prompt) = self.state.prompt() {
            let prompt = truncate_to_width(prompt, chunks[0].width as usize);
            Paragraph::new(prompt)
                .style(styles::text_secondary())
                .render(chunks[0], buf);
        }

        let list_block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_inactive())
            .title(format!(" {} selected ", self.state.selected_count()))
            .title_style(styles::text_secondary());

        if self.state.size() == 0 {
            Paragraph::new("No options")
                .alignment(Alignment::Center)
                .style(styles::text_muted())
                .block(list_block)
                .render(chunks[1], buf);
        } else {
            let settings = self.state.settings();
            let checkbox_width = settings
                .checked_symbol
                .width()
                .max(settings.unchecked_symbol.width());
            let label_width = (chunks[1].width as usize)
                .saturating_sub(2) // list borders
                .saturating_sub(settings.highlight_symbol.width())
                .saturating_sub(checkbox_width + 1);

            list_state.select(self.state.cursor());

            let list = List::new(self.items(label_width))
                .block(list_block)
                .highlight_style(styles::cursor_row())
                .highlight_symbol(settings.highlight_symbol.as_str());

            StatefulWidget::render(list, chunks[1], buf, list_state);
        }

        Self::render_footer(chunks[2], buf);
    }
}

/// Truncate `text` to at most `max_width` display columns, marking the cut
/// with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}
