use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::EffortTier;

pub const NOT_ACHIEVABLE: &str = "This target needs an average SGPA above the 5.0 maximum, \
so it cannot be reached in the remaining semesters. Consider adjusting the target.";

pub const ALREADY_ACHIEVED: &str = "Your current record already meets this target. \
Maintain your present performance and it is yours.";

/// Buckets an achievable required average into an effort tier. The anchors
/// 1.0, 2.0, 3.0, 4.0, 4.5 and 4.8 delimit six half-open intervals; values
/// below the lowest anchor share the lightest tier.
pub fn classify(required: f64) -> EffortTier {
    if required < 2.0 {
        EffortTier::Light
    } else if required < 3.0 {
        EffortTier::Moderate
    } else if required < 4.0 {
        EffortTier::Elevated
    } else if required < 4.5 {
        EffortTier::High
    } else if required < 4.8 {
        EffortTier::Intense
    } else {
        EffortTier::Maximum
    }
}

pub fn tier_label(tier: EffortTier) -> &'static str {
    match tier {
        EffortTier::Light => "light effort",
        EffortTier::Moderate => "moderate effort",
        EffortTier::Elevated => "elevated effort",
        EffortTier::High => "high effort",
        EffortTier::Intense => "intense effort",
        EffortTier::Maximum => "maximum effort",
    }
}

pub fn tier_advice(tier: EffortTier) -> &'static str {
    match tier {
        EffortTier::Light => {
            "Your current habits comfortably cover this target; keep them steady."
        }
        EffortTier::Moderate => {
            "A consistent routine of weekly review will carry you to this target."
        }
        EffortTier::Elevated => {
            "This target asks for deliberate, organized study beyond routine revision."
        }
        EffortTier::High => {
            "You will need a disciplined schedule and strong results in most courses."
        }
        EffortTier::Intense => {
            "Near-top grades are required across the board; treat every course as a priority."
        }
        EffortTier::Maximum => {
            "Only a near-perfect run will do; plan every week and leave nothing to chance."
        }
    }
}

pub fn tier_tips(tier: EffortTier) -> &'static [&'static str] {
    match tier {
        EffortTier::Light => &[
            "Maintain your current study habits as they are working well.",
            "Use short summaries for quick reviews before class.",
            "Keep your notes and materials organized.",
            "Celebrate small victories to keep momentum.",
            "Share what you know with classmates; teaching reinforces it.",
            "Explore topics of personal interest a little further.",
        ],
        EffortTier::Moderate => &[
            "Review class materials weekly to stay on track.",
            "Use flashcards for quick revisions.",
            "Set realistic goals for each course and check them off.",
            "Participate actively in class discussions.",
            "Reflect on mistakes in past work and learn from them.",
            "Prepare for assessments a week earlier than you think you need.",
        ],
        EffortTier::Elevated => &[
            "Build a written study plan and track it daily.",
            "Monitor your progress with regular self-tests.",
            "Collaborate with classmates on difficult material.",
            "Focus on understanding over memorization.",
            "Read supplementary materials for depth in weaker courses.",
            "Keep a journal of concepts you found hard and revisit it.",
        ],
        EffortTier::High => &[
            "Create a strict study schedule and stick to it.",
            "Practice past exam papers extensively to build confidence.",
            "Focus on weak areas first in your study plan.",
            "Eliminate distractions during study sessions.",
            "Use active recall techniques for better retention.",
            "Seek feedback on assignments and act on it quickly.",
        ],
        EffortTier::Intense => &[
            "Seek help from professors or tutors for challenging subjects.",
            "Form study groups with high-achieving peers.",
            "Break complex topics into small parts and master each one.",
            "Set daily goals and track your progress honestly.",
            "Review notes within a day of every lecture.",
            "Prioritize sleep and health to sustain peak performance.",
        ],
        EffortTier::Maximum => &[
            "Aim for full marks in every assessed component, not just exams.",
            "Rehearse exam timing so no paper catches you short.",
            "Get ahead of the syllabus before each topic is taught.",
            "Incorporate breaks deliberately to avoid burnout.",
            "Have a tutor or mentor audit your preparation weekly.",
            "Stay motivated by visualizing the finish line.",
        ],
    }
}

/// Source of the index used to pick a supplementary tip. Injectable so tests
/// can pin the choice; the choice is cosmetic and never feeds back into the
/// numbers.
pub trait TipSource {
    fn pick(&mut self, pool_len: usize) -> usize;
}

/// xorshift64* over a caller-supplied seed.
#[derive(Debug, Clone)]
pub struct SeededTips {
    state: u64,
}

impl SeededTips {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0x9e37_79b9_7f4a_7c15);
        Self::new(nanos)
    }
}

impl TipSource for SeededTips {
    fn pick(&mut self, pool_len: usize) -> usize {
        if pool_len == 0 {
            return 0;
        }
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        (x.wrapping_mul(0x2545_f491_4f6c_dd1d) % pool_len as u64) as usize
    }
}

pub fn pick_tip(tier: EffortTier, source: &mut dyn TipSource) -> &'static str {
    let pool = tier_tips(tier);
    pool[source.pick(pool.len()) % pool.len()]
}
