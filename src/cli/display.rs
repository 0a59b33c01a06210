// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling for the hintrank CLI.
//!
//! A [`Style`] is decided once per output stream: colors only on a TTY and
//! never with `NO_COLOR` set, so `hintrank rank dog -f words.json | head`
//! stays plain while the stderr summary can still be colored. Formatters take
//! the style explicitly and return strings; nothing here prints.
//!
//! The palette is OneDark on dark terminals and One Light on light ones.
//! `HINTRANK_THEME` ("dark"/"light") wins, then the background slot of
//! `COLORFGBG`, then dark.

use hintrank::MatchKind;

/// Inner width of a box, between the two `│`.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn detect() -> Self {
        if let Ok(name) = std::env::var("HINTRANK_THEME") {
            match name.to_lowercase().as_str() {
                "light" | "l" => return Theme::Light,
                "dark" | "d" => return Theme::Dark,
                _ => {}
            }
        }
        // "fg;bg": 7 and up except 8 (dark gray) are light backgrounds
        let light_bg = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg >= 7 && bg != 8);
        if light_bg {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

/// What a piece of text means, mapped to a color per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Best,
    Good,
    Fair,
    Related,
    Heading,
    Muted,
}

impl Role {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Role::Best) => (166, 226, 46),
            (Theme::Dark, Role::Good) => (152, 195, 121),
            (Theme::Dark, Role::Fair) => (229, 192, 123),
            (Theme::Dark, Role::Related) => (97, 175, 239),
            (Theme::Dark, Role::Heading) => (86, 182, 194),
            (Theme::Dark, Role::Muted) => (92, 99, 112),
            (Theme::Light, Role::Best) => (68, 140, 39),
            (Theme::Light, Role::Good) => (80, 161, 79),
            (Theme::Light, Role::Fair) => (193, 132, 1),
            (Theme::Light, Role::Related) => (64, 120, 242),
            (Theme::Light, Role::Heading) => (1, 132, 188),
            (Theme::Light, Role::Muted) => (160, 161, 167),
        }
    }

    fn for_kind(kind: MatchKind) -> Self {
        match kind {
            MatchKind::Exact => Role::Best,
            MatchKind::Substring => Role::Good,
            MatchKind::Overlap => Role::Related,
            MatchKind::None => Role::Muted,
        }
    }

    fn for_score(score: f64) -> Self {
        if score >= 1.0 {
            Role::Best
        } else if score >= 0.8 {
            Role::Good
        } else if score >= 0.3 {
            Role::Fair
        } else {
            Role::Muted
        }
    }
}

/// Color decision for one output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    colors: bool,
    theme: Theme,
}

impl Style {
    pub fn stdout() -> Self {
        Self::for_stream(atty::Stream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::for_stream(atty::Stream::Stderr)
    }

    fn for_stream(stream: atty::Stream) -> Self {
        let colors = std::env::var_os("NO_COLOR").is_none() && atty::is(stream);
        Self {
            colors,
            theme: Theme::detect(),
        }
    }

    /// No escapes at all.
    pub fn plain() -> Self {
        Self {
            colors: false,
            theme: Theme::Dark,
        }
    }

    #[cfg(test)]
    pub fn colored(theme: Theme) -> Self {
        Self {
            colors: true,
            theme,
        }
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        if !self.colors {
            return text.to_string();
        }
        let (r, g, b) = role.rgb(self.theme);
        format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET)
    }

    fn heading(&self, label: &str) -> String {
        if self.colors {
            format!("{}{}", BOLD, self.paint(Role::Heading, label))
        } else {
            label.to_string()
        }
    }

    fn border(&self, text: &str) -> String {
        self.paint(Role::Muted, text)
    }

    /// `[tier]`, colored by how strong the tier is.
    pub fn kind_badge(&self, kind: MatchKind) -> String {
        self.paint(Role::for_kind(kind), &format!("[{}]", kind))
    }

    /// Score with three decimals, right-aligned to five columns.
    pub fn score_value(&self, score: f64) -> String {
        self.paint(Role::for_score(score), &format!("{:>5.3}", score))
    }

    /// `│ content     │`
    pub fn row(&self, content: &str) -> String {
        let pad = BOX_WIDTH.saturating_sub(visible_len(content));
        format!(
            "{}{}{}{}",
            self.border("│"),
            content,
            " ".repeat(pad),
            self.border("│")
        )
    }

    /// `┌─ LABEL ───┐` for the first section, `├─ LABEL ───┤` for the rest.
    pub fn section(&self, label: &str, first: bool) -> String {
        let (left, right) = if first { ("┌", "┐") } else { ("├", "┤") };
        let title = format!("─ {} ", self.heading(label));
        let fill = BOX_WIDTH.saturating_sub(visible_len(&title));
        format!(
            "{}{}{}",
            self.border(left),
            title,
            self.border(&format!("{}{}", "─".repeat(fill), right))
        )
    }

    /// `└───────────┘`
    pub fn section_end(&self) -> String {
        self.border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
    }
}

/// Printed width of `s`, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = c != 'm';
        } else {
            len += 1;
        }
    }
    len
}

/// Right-pad to a visible width; longer strings are left alone.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}
