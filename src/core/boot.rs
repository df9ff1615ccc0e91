//! Boot log sequencing.
//!
//! [`BootSequencer`] is timer-free: the terminal's boot driver calls
//! [`BootSequencer::step`] and sleeps for the returned delay.

use crate::config::boot::{PROGRESS_STEPS, STATIC_STAGE_DELAY_MS};

/// One line of the boot log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootStage {
    pub text: &'static str,
    /// `Some(period)` renders a progress bar that fills one step per period.
    pub period_ms: Option<u32>,
}

impl BootStage {
    pub const fn line(text: &'static str) -> Self {
        Self {
            text,
            period_ms: None,
        }
    }

    pub const fn progress(text: &'static str, period_ms: u32) -> Self {
        Self {
            text,
            period_ms: Some(period_ms),
        }
    }
}

/// What the driver does next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootStep {
    /// Sleep, then call `step` again.
    Wait(u32),
    Done,
}

#[derive(Clone, Debug)]
pub struct BootSequencer {
    stages: &'static [BootStage],
    /// Number of stages revealed so far.
    revealed: usize,
    /// Filled steps of the last revealed stage's bar.
    filled: u8,
}

impl BootSequencer {
    pub fn new(stages: &'static [BootStage]) -> Self {
        Self {
            stages,
            revealed: 0,
            filled: 0,
        }
    }

    /// Advance by one tick.
    pub fn step(&mut self) -> BootStep {
        if let Some(stage) = self.revealed.checked_sub(1).map(|i| self.stages[i])
            && let Some(period) = stage.period_ms
            && self.filled < PROGRESS_STEPS
        {
            self.filled += 1;
            return BootStep::Wait(period);
        }

        let Some(next) = self.stages.get(self.revealed) else {
            return BootStep::Done;
        };
        self.revealed += 1;
        self.filled = 0;
        BootStep::Wait(next.period_ms.unwrap_or(STATIC_STAGE_DELAY_MS))
    }

    pub fn is_done(&self) -> bool {
        self.revealed == self.stages.len()
            && self
                .stages
                .last()
                .is_none_or(|s| s.period_ms.is_none() || self.filled == PROGRESS_STEPS)
    }

    /// Revealed stages; progress stages carry their bar.
    pub fn lines(&self) -> Vec<String> {
        self.stages[..self.revealed]
            .iter()
            .enumerate()
            .map(|(i, stage)| match stage.period_ms {
                None => stage.text.to_string(),
                Some(_) => {
                    let filled = if i + 1 == self.revealed {
                        self.filled
                    } else {
                        PROGRESS_STEPS
                    };
                    format!("{} {}", stage.text, progress_bar(filled))
                }
            })
            .collect()
    }
}

/// `[███░░░░░░░]  30%`
fn progress_bar(filled: u8) -> String {
    let filled = filled.min(PROGRESS_STEPS);
    let pct = u32::from(filled) * 100 / u32::from(PROGRESS_STEPS);
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled as usize),
        "░".repeat((PROGRESS_STEPS - filled) as usize),
        pct
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAGES: &[BootStage] = &[
        BootStage::line("one"),
        BootStage::progress("two", 250),
        BootStage::line("three"),
    ];

    fn run(seq: &mut BootSequencer) -> Vec<BootStep> {
        let mut steps = Vec::new();
        loop {
            let step = seq.step();
            steps.push(step);
            if step == BootStep::Done {
                return steps;
            }
        }
    }

    #[test]
    fn test_step_count() {
        let mut seq = BootSequencer::new(STAGES);
        let steps = run(&mut seq);
        // 3 reveals + 10 bar steps + Done
        assert_eq!(steps.len(), 3 + PROGRESS_STEPS as usize + 1);
        assert_eq!(steps[0], BootStep::Wait(STATIC_STAGE_DELAY_MS));
        assert_eq!(steps[1], BootStep::Wait(250));
        assert!(seq.is_done());
    }

    #[test]
    fn test_progress_lines() {
        let mut seq = BootSequencer::new(STAGES);
        seq.step();
        seq.step();
        assert_eq!(seq.lines(), vec!["one", "two [░░░░░░░░░░]   0%"]);
        seq.step();
        seq.step();
        seq.step();
        assert_eq!(seq.lines()[1], "two [███░░░░░░░]  30%");
        assert!(!seq.is_done());
    }

    #[test]
    fn test_completed_bar_stays_full() {
        let mut seq = BootSequencer::new(STAGES);
        run(&mut seq);
        let lines = seq.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "two [██████████] 100%");
    }

    #[test]
    fn test_empty_sequence() {
        let mut seq = BootSequencer::new(&[]);
        assert!(seq.is_done());
        assert_eq!(seq.step(), BootStep::Done);
    }

    #[test]
    fn test_configured_stages_finish() {
        let mut seq = BootSequencer::new(crate::config::boot::STAGES);
        run(&mut seq);
        assert!(seq.is_done());
        assert_eq!(seq.lines().len(), crate::config::boot::STAGES.len());
    }
}
