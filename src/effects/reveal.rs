use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Timing and alphabet for a text reveal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    /// Characters fixed per tick
    pub step: usize,
    /// Milliseconds between ticks
    pub frame_ms: u64,
    pub charset: String,
}

impl RevealConfig {
    /// Section headings, revealed as soon as the page renders.
    pub fn heading() -> Self {
        Self {
            step: 2,
            frame_ms: 14,
            charset: "01".to_string(),
        }
    }

    pub fn fast() -> Self {
        Self {
            step: 3,
            frame_ms: 12,
            charset: "01".to_string(),
        }
    }

    /// Paragraphs revealed when they first scroll into view.
    pub fn in_view() -> Self {
        Self {
            step: 2,
            frame_ms: 24,
            charset: "01".to_string(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::fast()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Whitespace is never scrambled
    Space(char),
    /// Original character, already settled
    Fixed(char),
    /// Placeholder glyph drawn from the charset
    Scrambled(char),
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Space(c) | Glyph::Fixed(c) | Glyph::Scrambled(c) => c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealFrame {
    pub glyphs: Vec<Glyph>,
    /// The effect has finished; this frame is the original text
    pub done: bool,
}

impl fmt::Display for RevealFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph.as_char())?;
        }
        Ok(())
    }
}

/// Progressive left-to-right reveal of a string.
///
/// Each tick fixes `step` more characters; the rest show random charset
/// glyphs. Once every character is fixed, the next tick reports `done` and
/// the frame equals the original text.
#[derive(Debug, Clone)]
pub struct Reveal {
    text: Vec<char>,
    charset: Vec<char>,
    step: usize,
    fixed: usize,
    done: bool,
}

impl Reveal {
    pub fn new(text: &str, config: &RevealConfig, reduced_motion: bool) -> Self {
        let mut charset: Vec<char> = config.charset.chars().collect();
        if charset.is_empty() {
            charset = vec!['0', '1'];
        }

        Self {
            text: text.chars().collect(),
            charset,
            step: config.step.max(1),
            fixed: 0,
            done: reduced_motion,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn fixed(&self) -> usize {
        self.fixed.min(self.text.len())
    }

    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> RevealFrame {
        if self.done || self.fixed >= self.text.len() {
            self.done = true;
            return self.final_frame();
        }

        self.fixed += self.step;

        let glyphs = self
            .text
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c.is_whitespace() {
                    Glyph::Space(c)
                } else if i < self.fixed {
                    Glyph::Fixed(c)
                } else {
                    Glyph::Scrambled(self.charset[rng.gen_range(0..self.charset.len())])
                }
            })
            .collect();

        RevealFrame {
            glyphs,
            done: false,
        }
    }

    /// The settled text.
    pub fn final_frame(&self) -> RevealFrame {
        RevealFrame {
            glyphs: self
                .text
                .iter()
                .map(|&c| {
                    if c.is_whitespace() {
                        Glyph::Space(c)
                    } else {
                        Glyph::Fixed(c)
                    }
                })
                .collect(),
            done: true,
        }
    }
}

/// Latch that fires the first time an element is sufficiently visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewOnce {
    threshold: f64,
    seen: bool,
}

impl InViewOnce {
    pub const DEFAULT_THRESHOLD: f64 = 0.2;

    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            seen: false,
        }
    }

    /// Feed the current visible ratio (0.0 to 1.0). Returns whether the
    /// element has been seen, which never reverts to false.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if !self.seen && visible_ratio > 0.0 && visible_ratio >= self.threshold {
            self.seen = true;
        }
        self.seen
    }

    pub fn seen(&self) -> bool {
        self.seen
    }
}

impl Default for InViewOnce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
