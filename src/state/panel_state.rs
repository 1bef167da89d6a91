//! Which top-level panel is visible, and the animation between panels

use std::time::{Duration, Instant};

/// The two mutually exclusive top-level panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    FormVisible,
    ThankYouVisible,
}

/// Animation currently running on the form panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Form fades out and slides down before the thank-you panel is swapped in
    HideForm,
    /// Form fades back in from slightly above after a reset
    ShowForm,
}

#[derive(Debug, Clone, Copy)]
pub struct PanelTransition {
    pub kind: TransitionKind,
    pub started: Instant,
}

impl PanelTransition {
    /// Time the form takes to fade out before the panels are swapped
    pub const HIDE_DURATION: Duration = Duration::from_millis(300);
    /// Time the form takes to fade back in after a reset
    pub const SHOW_DURATION: Duration = Duration::from_millis(100);

    fn duration(&self) -> Duration {
        match self.kind {
            TransitionKind::HideForm => Self::HIDE_DURATION,
            TransitionKind::ShowForm => Self::SHOW_DURATION,
        }
    }

    /// Eased progress from 0.0 to 1.0
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let linear = (elapsed.as_secs_f32() / self.duration().as_secs_f32()).min(1.0);
        simple_easing::cubic_out(linear)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration()
    }
}

/// Visual parameters of the form panel at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMotion {
    /// 0.0 = invisible, 1.0 = fully drawn
    pub opacity: f32,
    /// Vertical displacement in rows; positive is downwards
    pub offset_rows: i16,
}

impl PanelMotion {
    pub const REST: PanelMotion = PanelMotion {
        opacity: 1.0,
        offset_rows: 0,
    };
}

/// Maximum slide distance of the form panel, in rows
const SLIDE_ROWS: f32 = 2.0;

/// Panel visibility state machine
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    mode: UiMode,
    transition: Option<PanelTransition>,
}

impl PanelState {
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Start hiding the form. The swap to the thank-you panel happens in
    /// [`PanelState::tick`] once the hide animation has finished.
    ///
    /// Returns false if the form is not visible or already being hidden.
    pub fn begin_thank_you(&mut self, now: Instant) -> bool {
        if self.mode != UiMode::FormVisible
            || matches!(
                self.transition,
                Some(PanelTransition {
                    kind: TransitionKind::HideForm,
                    ..
                })
            )
        {
            return false;
        }
        self.transition = Some(PanelTransition {
            kind: TransitionKind::HideForm,
            started: now,
        });
        true
    }

    /// Bring the form back. Only valid from the thank-you panel.
    pub fn show_form(&mut self, now: Instant) -> bool {
        if self.mode != UiMode::ThankYouVisible {
            return false;
        }
        self.mode = UiMode::FormVisible;
        self.transition = Some(PanelTransition {
            kind: TransitionKind::ShowForm,
            started: now,
        });
        true
    }

    /// Advance animations. Returns true if the panels were swapped.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        if !transition.is_complete(now) {
            return false;
        }

        self.transition = None;
        if transition.kind == TransitionKind::HideForm {
            self.mode = UiMode::ThankYouVisible;
            return true;
        }
        false
    }

    /// Current opacity and offset of the form panel
    pub fn form_motion(&self, now: Instant) -> PanelMotion {
        match self.transition {
            None => PanelMotion::REST,
            Some(t) => {
                let p = t.progress(now);
                match t.kind {
                    TransitionKind::HideForm => PanelMotion {
                        opacity: 1.0 - p,
                        offset_rows: (p * SLIDE_ROWS).round() as i16,
                    },
                    TransitionKind::ShowForm => PanelMotion {
                        opacity: p,
                        offset_rows: -((1.0 - p) * SLIDE_ROWS).round() as i16,
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIDE: Duration = PanelTransition::HIDE_DURATION;
    const SHOW: Duration = PanelTransition::SHOW_DURATION;

    mod mode {
        use super::*;

        #[test]
        fn test_initial_mode_is_form_visible() {
            let panels = PanelState::default();
            assert_eq!(panels.mode(), UiMode::FormVisible);
            assert!(!panels.is_animating());
        }

        #[test]
        fn test_swap_waits_for_hide_animation() {
            let start = Instant::now();
            let mut panels = PanelState::default();
            assert!(panels.begin_thank_you(start));

            assert!(!panels.tick(start + HIDE / 2));
            assert_eq!(panels.mode(), UiMode::FormVisible);

            assert!(panels.tick(start + HIDE));
            assert_eq!(panels.mode(), UiMode::ThankYouVisible);
            assert!(!panels.is_animating());
        }

        #[test]
        fn test_swap_happens_exactly_once() {
            let start = Instant::now();
            let mut panels = PanelState::default();
            assert!(panels.begin_thank_you(start));
            assert!(!panels.begin_thank_you(start));

            assert!(panels.tick(start + HIDE));
            assert!(!panels.tick(start + HIDE * 2));
            assert!(!panels.begin_thank_you(start + HIDE * 2));
            assert_eq!(panels.mode(), UiMode::ThankYouVisible);
        }

        #[test]
        fn test_show_form_rejected_from_form_visible() {
            let mut panels = PanelState::default();
            assert!(!panels.show_form(Instant::now()));
            assert!(!panels.is_animating());
        }

        #[test]
        fn test_show_form_from_thank_you() {
            let start = Instant::now();
            let mut panels = PanelState::default();
            panels.begin_thank_you(start);
            panels.tick(start + HIDE);

            assert!(panels.show_form(start + HIDE));
            assert_eq!(panels.mode(), UiMode::FormVisible);
            assert!(panels.is_animating());

            assert!(!panels.tick(start + HIDE + SHOW));
            assert!(!panels.is_animating());
            assert_eq!(panels.mode(), UiMode::FormVisible);
        }
    }

    mod motion {
        use super::*;

        #[test]
        fn test_rest_when_idle() {
            let panels = PanelState::default();
            assert_eq!(panels.form_motion(Instant::now()), PanelMotion::REST);
        }

        #[test]
        fn test_hide_starts_opaque_and_ends_transparent() {
            let start = Instant::now();
            let mut panels = PanelState::default();
            panels.begin_thank_you(start);

            let begin = panels.form_motion(start);
            assert_eq!(begin.opacity, 1.0);
            assert_eq!(begin.offset_rows, 0);

            let end = panels.form_motion(start + HIDE);
            assert_eq!(end.opacity, 0.0);
            assert_eq!(end.offset_rows, 2);
        }

        #[test]
        fn test_show_starts_above_and_transparent() {
            let start = Instant::now();
            let mut panels = PanelState::default();
            panels.begin_thank_you(start);
            panels.tick(start + HIDE);
            panels.show_form(start + HIDE);

            let begin = panels.form_motion(start + HIDE);
            assert_eq!(begin.opacity, 0.0);
            assert_eq!(begin.offset_rows, -2);
        }

        #[test]
        fn test_progress_clamped_past_end() {
            let start = Instant::now();
            let t = PanelTransition {
                kind: TransitionKind::HideForm,
                started: start,
            };
            assert_eq!(t.progress(start + HIDE * 10), 1.0);
        }
    }
}
