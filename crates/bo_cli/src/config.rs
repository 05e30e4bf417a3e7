// Run settings resolved from command-line arguments
use bo_core::ChaChaDraw;

pub const SEED_ENV: &str = "BATTING_ORDER_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Fixed seed; fresh entropy per run when `None`
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn new(seed: Option<u64>, json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        Self { seed, format }
    }

    pub fn draw(&self) -> ChaChaDraw {
        match self.seed {
            Some(seed) => ChaChaDraw::seeded(seed),
            None => ChaChaDraw::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bo_core::shuffle_positions;

    #[test]
    fn test_format_from_flag() {
        assert_eq!(RunConfig::new(None, false).format, OutputFormat::Text);
        assert_eq!(RunConfig::new(None, true).format, OutputFormat::Json);
    }

    #[test]
    fn test_seeded_draw_repeats() {
        let config = RunConfig::new(Some(99), false);
        let a = shuffle_positions(11, &mut config.draw());
        let b = shuffle_positions(11, &mut config.draw());
        assert_eq!(a, b);
    }
}
