use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contiguous, trimmed, non-empty piece of the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Stylistic register requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    Formal,
    #[default]
    Casual,
    Professional,
    BulletPoints,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Formal,
        Tone::Casual,
        Tone::Professional,
        Tone::BulletPoints,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Casual => "Casual",
            Tone::Professional => "Professional",
            Tone::BulletPoints => "Bullet Points",
        }
    }

    #[must_use]
    pub const fn is_bullet(self) -> bool {
        matches!(self, Tone::BulletPoints)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "professional" => Ok(Tone::Professional),
            "bullet points" | "bullet-points" | "bullet_points" | "bullets" => {
                Ok(Tone::BulletPoints)
            }
            other => Err(format!(
                "unknown tone '{other}', expected one of: Formal, Casual, Professional, Bullet Points"
            )),
        }
    }
}

/// Completion state reported between pipeline steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Whole percentage in `0..=100`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let pct = self.completed.min(self.total) * 100 / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_parses_ui_labels() {
        for tone in Tone::ALL {
            assert_eq!(tone.label().parse::<Tone>().unwrap(), tone);
        }
        assert_eq!("bullets".parse::<Tone>().unwrap(), Tone::BulletPoints);
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn progress_percent_rounds_down() {
        let p = Progress {
            completed: 1,
            total: 3,
        };
        assert_eq!(p.percent(), 33);
        assert_eq!(
            Progress {
                completed: 0,
                total: 0
            }
            .percent(),
            100
        );
    }
}
