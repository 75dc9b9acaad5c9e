//! Swap lifecycle state machine and button derivation.
//!
//! The machine is pure: entering `Executing` hands back an epoch token, and
//! the timed transitions (`finish`, `reset`) only apply when presented with
//! the current token. A timer left over from a superseded attempt therefore
//! lands as a no-op instead of racing the newer swap.

/// Lifecycle phase of a swap attempt. Exactly one phase is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    Idle,
    Confirming,
    Executing,
    Complete,
}

/// Phase plus the generation counter guarding timed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    phase: SwapPhase,
    epoch: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: SwapPhase::Idle,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> SwapPhase {
        self.phase
    }

    pub fn is_executing(&self) -> bool {
        self.phase == SwapPhase::Executing
    }

    /// Idle -> Confirming, gated on validation. Invalid requests no-op.
    pub fn request(&mut self, valid: bool) -> bool {
        if self.phase == SwapPhase::Idle && valid {
            self.phase = SwapPhase::Confirming;
            true
        } else {
            false
        }
    }

    /// Confirming -> Idle (user cancelled the dialog).
    pub fn cancel(&mut self) {
        if self.phase == SwapPhase::Confirming {
            self.phase = SwapPhase::Idle;
        }
    }

    /// Confirming -> Executing. Returns the epoch token for the timers.
    pub fn confirm(&mut self) -> Option<u64> {
        if self.phase == SwapPhase::Confirming {
            Some(self.enter_executing())
        } else {
            None
        }
    }

    /// Idle -> Executing directly, for flows without a confirmation step.
    pub fn begin(&mut self, valid: bool) -> Option<u64> {
        if self.phase == SwapPhase::Idle && valid {
            Some(self.enter_executing())
        } else {
            None
        }
    }

    fn enter_executing(&mut self) -> u64 {
        self.epoch += 1;
        self.phase = SwapPhase::Executing;
        self.epoch
    }

    /// Executing -> Complete, fired by the execution timer. Stale tokens no-op.
    pub fn finish(&mut self, token: u64) -> bool {
        if self.phase == SwapPhase::Executing && self.epoch == token {
            self.phase = SwapPhase::Complete;
            true
        } else {
            false
        }
    }

    /// Complete -> Idle, fired by the auto-revert timer. Stale tokens no-op.
    pub fn reset(&mut self, token: u64) -> bool {
        if self.phase == SwapPhase::Complete && self.epoch == token {
            self.phase = SwapPhase::Idle;
            true
        } else {
            false
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Render state for the swap button, derived from phase + validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub label: String,
    /// Insufficient balance renders the default label with error styling.
    pub error: bool,
}

/// Derive the swap button's state. Pure function of its inputs.
pub fn button_state(
    phase: SwapPhase,
    valid_amount: bool,
    insufficient: bool,
    source_symbol: &str,
    target_symbol: &str,
) -> ButtonState {
    let default_label = format!("Swap {} to {}", source_symbol, target_symbol);

    match phase {
        SwapPhase::Executing => ButtonState {
            enabled: false,
            label: "Swapping...".to_string(),
            error: false,
        },
        SwapPhase::Complete => ButtonState {
            enabled: true,
            label: "Swap Successful".to_string(),
            error: false,
        },
        // The dialog owns the interaction while confirming.
        SwapPhase::Confirming => ButtonState {
            enabled: false,
            label: default_label,
            error: false,
        },
        SwapPhase::Idle => {
            if !valid_amount {
                ButtonState {
                    enabled: false,
                    label: default_label,
                    error: false,
                }
            } else if insufficient {
                ButtonState {
                    enabled: false,
                    label: default_label,
                    error: true,
                }
            } else {
                ButtonState {
                    enabled: true,
                    label: default_label,
                    error: false,
                }
            }
        }
    }
}
