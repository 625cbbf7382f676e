/// One of the four answer choices of an Epworth Sleepiness Scale item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EssChoice {
    NoChance,
    Slight,
    Moderate,
    High,
}

impl EssChoice {
    /// All choices in score order.
    pub const ALL: [EssChoice; 4] = [Self::NoChance, Self::Slight, Self::Moderate, Self::High];

    pub fn score(self) -> i32 {
        match self {
            Self::NoChance => 0,
            Self::Slight => 1,
            Self::Moderate => 2,
            Self::High => 3,
        }
    }

    /// The label shown next to the choice.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoChance => "No chance of dozing",
            Self::Slight => "Slight chance of dozing",
            Self::Moderate => "Moderate chance of dozing",
            Self::High => "High chance of dozing",
        }
    }

    /// Map a label back to a choice. Unknown labels yield `None`, not a zero score.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }

    /// Restore the choice for a stored score.
    pub fn from_score(score: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.score() == score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_scores_line_up() {
        for choice in EssChoice::ALL {
            assert_eq!(EssChoice::from_label(choice.label()), Some(choice));
            assert_eq!(EssChoice::from_score(choice.score()), Some(choice));
        }
    }

    #[test]
    fn unknown_inputs_are_rejected() {
        assert_eq!(EssChoice::from_label("Sometimes"), None);
        assert_eq!(EssChoice::from_score(4), None);
        assert_eq!(EssChoice::from_score(-1), None);
    }
}
