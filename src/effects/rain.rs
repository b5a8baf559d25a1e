use rand::Rng;
use serde::Serialize;

/// Tuning for the binary rain.
///
/// All lengths share one unit: pixels for the canvas, cells for a terminal
/// (where `font_size` is 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainConfig {
    pub font_size: f64,
    pub charset: String,
    /// Slowest column speed, in rows per frame
    pub speed_min: f64,
    /// Speeds are drawn from `[speed_min, speed_min + speed_span)`
    pub speed_span: f64,
    /// Chance per frame that an off-screen column restarts at the top
    pub reset_chance: f64,
    /// Restarted columns begin up to this many rows above the top edge
    pub reset_rows: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            charset: "01".to_string(),
            speed_min: 0.9,
            speed_span: 0.7,
            reset_chance: 0.025,
            reset_rows: 20.0,
        }
    }
}

impl RainConfig {
    pub fn with_font_size(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    /// One glyph per terminal cell.
    pub fn terminal() -> Self {
        Self::with_font_size(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Leading glyph, drawn brighter
    Head,
    /// Glyph one row behind the head
    Tail,
}

/// One glyph to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub glyph: char,
    pub kind: CellKind,
}

/// Column state for the rain. Positions are in rows, not pixels.
#[derive(Debug, Clone)]
pub struct RainField {
    config: RainConfig,
    charset: Vec<char>,
    width: f64,
    height: f64,
    drops: Vec<f64>,
    speeds: Vec<f64>,
}

impl RainField {
    pub fn new<R: Rng>(width: f64, height: f64, config: RainConfig, rng: &mut R) -> Self {
        let mut charset: Vec<char> = config.charset.chars().collect();
        if charset.is_empty() {
            charset = RainConfig::default().charset.chars().collect();
        }

        let mut field = Self {
            config,
            charset,
            width: 0.0,
            height: 0.0,
            drops: Vec::new(),
            speeds: Vec::new(),
        };
        field.resize(width, height, rng);
        field
    }

    /// Re-lay the columns for a new viewport. Every column restarts at a
    /// random row with a fresh speed.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let font = self.config.font_size.max(f64::EPSILON);
        let columns = ((self.width / font).floor() as usize).max(1);
        let rows = self.height / font;

        self.drops = (0..columns).map(|_| rng.gen::<f64>() * rows).collect();
        self.speeds = (0..columns).map(|_| self.random_speed(rng)).collect();
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Advance one frame and return the glyphs to paint.
    ///
    /// Each column paints a tail glyph one row above its head, then moves down
    /// by its speed. A column whose head was already below the bottom edge
    /// restarts above the top with probability `reset_chance`.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Vec<Cell> {
        let font = self.config.font_size;
        let mut cells = Vec::with_capacity(self.drops.len() * 2);

        for column in 0..self.drops.len() {
            let y = self.drops[column] * font;
            let x = column as f64 * font;

            cells.push(Cell {
                column,
                x,
                y: y - font,
                glyph: self.pick(rng),
                kind: CellKind::Tail,
            });
            cells.push(Cell {
                column,
                x,
                y,
                glyph: self.pick(rng),
                kind: CellKind::Head,
            });

            self.drops[column] += self.speeds[column];

            if y > self.height + font && rng.gen::<f64>() < self.config.reset_chance {
                self.drops[column] = -rng.gen::<f64>() * self.config.reset_rows;
                self.speeds[column] = self.random_speed(rng);
            }
        }

        cells
    }

    fn pick<R: Rng>(&self, rng: &mut R) -> char {
        self.charset[rng.gen_range(0..self.charset.len())]
    }

    fn random_speed<R: Rng>(&self, rng: &mut R) -> f64 {
        self.config.speed_min + rng.gen::<f64>() * self.config.speed_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    // ==================== Layout Tests ====================

    #[test]
    fn test_columns_from_width() {
        let field = RainField::new(800.0, 600.0, RainConfig::default(), &mut rng());
        assert_eq!(field.columns(), 50);
    }

    #[test]
    fn test_at_least_one_column() {
        let field = RainField::new(3.0, 600.0, RainConfig::default(), &mut rng());
        assert_eq!(field.columns(), 1);

        let field = RainField::new(0.0, 0.0, RainConfig::default(), &mut rng());
        assert_eq!(field.columns(), 1);
    }

    #[test]
    fn test_initial_drops_within_screen_and_speeds_in_range() {
        let field = RainField::new(1024.0, 768.0, RainConfig::default(), &mut rng());
        let rows = 768.0 / 16.0;

        for drop in field.drops() {
            assert!((0.0..rows).contains(drop));
        }
        for speed in field.speeds() {
            assert!((0.9..1.6).contains(speed), "speed out of range: {}", speed);
        }
    }

    #[test]
    fn test_resize_relayouts_columns() {
        let mut r = rng();
        let mut field = RainField::new(160.0, 160.0, RainConfig::default(), &mut r);
        assert_eq!(field.columns(), 10);

        field.resize(320.0, 160.0, &mut r);
        assert_eq!(field.columns(), 20);
        assert_eq!(field.speeds().len(), 20);
    }

    // ==================== Step Tests ====================

    #[test]
    fn test_step_emits_tail_and_head_per_column() {
        let mut r = rng();
        let mut field = RainField::new(80.0, 160.0, RainConfig::default(), &mut r);
        let before = field.drops().to_vec();

        let cells = field.step(&mut r);

        assert_eq!(cells.len(), field.columns() * 2);
        for (column, pair) in cells.chunks(2).enumerate() {
            assert_eq!(pair[0].kind, CellKind::Tail);
            assert_eq!(pair[1].kind, CellKind::Head);
            assert!((pair[1].y - pair[0].y - 16.0).abs() < 1e-9);
            assert_eq!(pair[1].x, column as f64 * 16.0);
            assert_eq!(pair[1].y, before[column] * 16.0);
            assert!(pair[0].glyph == '0' || pair[0].glyph == '1');
        }
    }

    #[test]
    fn test_step_advances_by_speed() {
        let mut r = rng();
        let mut field = RainField::new(80.0, 10_000.0, RainConfig::default(), &mut r);
        let before = field.drops().to_vec();
        let speeds = field.speeds().to_vec();

        field.step(&mut r);

        for i in 0..field.columns() {
            assert!((field.drops()[i] - (before[i] + speeds[i])).abs() < 1e-9);
        }
    }

    #[test]
    fn test_off_screen_columns_eventually_wrap() {
        let mut r = rng();
        let config = RainConfig {
            reset_chance: 1.0,
            ..RainConfig::default()
        };
        let mut field = RainField::new(16.0, 32.0, config, &mut r);

        let mut wrapped = false;
        for _ in 0..100 {
            field.step(&mut r);
            if field.drops()[0] < 0.0 {
                wrapped = true;
                break;
            }
        }

        assert!(wrapped);
        assert!(field.drops()[0] >= -20.0);
        assert!((0.9..1.6).contains(&field.speeds()[0]));
    }

    #[test]
    fn test_no_wrap_when_chance_is_zero() {
        let mut r = rng();
        let config = RainConfig {
            reset_chance: 0.0,
            ..RainConfig::default()
        };
        let mut field = RainField::new(16.0, 32.0, config, &mut r);

        for _ in 0..200 {
            field.step(&mut r);
        }
        assert!(field.drops()[0] > 100.0);
    }

    #[test]
    fn test_empty_charset_uses_binary() {
        let config = RainConfig {
            charset: String::new(),
            ..RainConfig::terminal()
        };
        let mut r = rng();
        let mut field = RainField::new(4.0, 4.0, config, &mut r);
        assert!(field
            .step(&mut r)
            .iter()
            .all(|cell| cell.glyph == '0' || cell.glyph == '1'));
    }
}
