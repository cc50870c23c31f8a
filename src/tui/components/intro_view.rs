//! # IntroView Component
//!
//! Draws the boot sequence from an `IntroSequencer` snapshot. Two layouts:
//!
//! - **Terminal**: the transcript, bottom-anchored so the newest line is
//!   always on screen, plus a footer with the Enter/Tab hints.
//! - **Transition**: a centred loading gauge, then the final message.
//!
//! The sequencer decides what is visible; this component only paints it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};

use crate::core::intro::{FINAL_MESSAGE, IntroSequencer, TranscriptLine};
use crate::tui::component::Component;
use crate::tui::components::prompt::prompt_spans;

const CURSOR: &str = "█";

pub struct IntroView<'a> {
    pub intro: &'a IntroSequencer,
}

impl<'a> IntroView<'a> {
    pub fn new(intro: &'a IntroSequencer) -> Self {
        Self { intro }
    }

    fn transcript_lines(&self) -> Vec<Line<'static>> {
        self.intro
            .transcript()
            .iter()
            .map(|line| match line {
                TranscriptLine::Boot(text) => {
                    Line::styled(*text, Style::default().fg(Color::DarkGray))
                }
                TranscriptLine::Banner(text) => Line::styled(
                    *text,
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ),
                TranscriptLine::Spacer => Line::default(),
                TranscriptLine::Command {
                    command,
                    typed,
                    cursor,
                } => {
                    let mut spans = prompt_spans(command.path);
                    let program_len = command.program.chars().count();
                    let typed_program: String = command.program.chars().take(*typed).collect();
                    let typed_args: String = command
                        .args
                        .chars()
                        .take(typed.saturating_sub(program_len))
                        .collect();
                    spans.push(Span::styled(
                        typed_program,
                        Style::default().fg(Color::Yellow),
                    ));
                    spans.push(Span::styled(typed_args, Style::default().fg(Color::White)));
                    if *cursor {
                        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Gray)));
                    }
                    Line::from(spans)
                }
                TranscriptLine::Output(text) => {
                    Line::styled(*text, Style::default().fg(Color::Cyan))
                }
            })
            .collect()
    }

    fn footer(&self) -> Line<'static> {
        let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = Vec::new();
        if self.intro.awaiting_confirm() {
            spans.push(Span::styled("press ", dim));
            spans.push(Span::styled("Enter ↵", key));
            spans.push(Span::styled(" to run", dim));
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled("Tab", key));
        spans.push(Span::styled(" to skip intro", dim));
        Line::from(spans)
    }

    fn render_terminal(&self, frame: &mut Frame, area: Rect) {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" zsh ");
        let inner_height = block.inner(body).height;
        let lines = self.transcript_lines();
        let overflow = (lines.len() as u16).saturating_sub(inner_height);

        frame.render_widget(Paragraph::new(lines).block(block).scroll((overflow, 0)), body);
        frame.render_widget(Paragraph::new(self.footer()).centered(), footer);
    }

    fn render_transition(&self, frame: &mut Frame, area: Rect) {
        let [column] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(area);
        let [gauge_area, _, message_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" loading portfolio "),
            )
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
            .percent(u16::from(self.intro.progress().min(100)));
        frame.render_widget(gauge, gauge_area);

        if self.intro.final_message_visible() {
            let message = Paragraph::new(Line::styled(
                FINAL_MESSAGE,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))
            .centered();
            frame.render_widget(message, message_area);
        }
    }
}

impl Component for IntroView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.intro.in_transition() {
            self.render_transition(frame, area);
        } else {
            self.render_terminal(frame, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intro::BOOT_MESSAGES;
    use crate::test_support::FixedPace;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn screen(intro: &IntroSequencer) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| IntroView::new(intro).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn sequencer() -> (IntroSequencer, Instant) {
        let start = Instant::now();
        let intro = IntroSequencer::new(start, Box::new(FixedPace(Duration::from_millis(10))));
        (intro, start)
    }

    /// Ticks in small steps until the first command waits for Enter.
    fn run_until_confirm(intro: &mut IntroSequencer, start: Instant) -> Instant {
        let mut now = start;
        while !intro.awaiting_confirm() {
            now += Duration::from_millis(10);
            intro.tick(now);
            assert!(now < start + Duration::from_secs(30), "intro never waited");
        }
        now
    }

    #[test]
    fn test_boot_lines_and_skip_hint() {
        let (mut intro, start) = sequencer();
        intro.tick(start + Duration::from_millis(500));
        let text = screen(&intro);
        assert!(text.contains(BOOT_MESSAGES[0]));
        assert!(text.contains("Tab to skip intro"));
        assert!(!text.contains("Enter"));
    }

    #[test]
    fn test_typed_command_waits_for_enter() {
        let (mut intro, start) = sequencer();
        run_until_confirm(&mut intro, start);
        let text = screen(&intro);
        assert!(text.contains("tarushgupta@tarush's_macbook_pro:~$ python who_is_tarush█"));
        assert!(text.contains("press Enter ↵ to run"));
    }

    #[test]
    fn test_skip_shows_full_gauge_and_final_message() {
        let (mut intro, start) = sequencer();
        intro.skip(start);
        let text = screen(&intro);
        assert!(text.contains("100%"));
        assert!(text.contains(FINAL_MESSAGE));
        assert!(!text.contains("Tab to skip"));
    }
}
