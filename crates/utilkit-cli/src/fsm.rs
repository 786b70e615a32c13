//! # FSM Subcommand
//!
//! Walks a door through the requested target states:
//!
//! ```text
//! Closed <-> Open
//! Closed <-> Locked
//! ```
//!
//! `Open -> Locked` and `Locked -> Open` are not edges, so asking for them
//! is rejected and the door stays where it is.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use clap::{Args, ValueEnum};
use serde::Serialize;
use utilkit::{StateMachine, TransitionRecord};

/// States of the demonstration door.
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    Closed,
    Open,
    Locked,
}

/// Arguments for the fsm subcommand.
#[derive(Args, Debug, Clone)]
pub struct FsmArgs {
    /// Target states to request, in order.
    #[arg(long, value_enum, num_args = 1..)]
    pub steps: Vec<DoorState>,
}

/// Result of one requested step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub target: DoorState,
    pub accepted: bool,
    /// Message produced by the edge action, for accepted steps.
    pub effect: Option<String>,
    /// Rejection reason, for refused steps.
    pub error: Option<String>,
}

/// Outcome of an fsm run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FsmReport {
    pub steps: Vec<Step>,
    pub final_state: DoorState,
    pub history: Vec<TransitionRecord<DoorState>>,
}

fn door(effects: &Rc<RefCell<Vec<String>>>) -> anyhow::Result<StateMachine<DoorState>> {
    use DoorState::*;

    let mut machine = StateMachine::new(Closed);
    machine.add_state(Open).add_state(Locked);
    for (from, to, effect) in [
        (Closed, Open, "door swings open"),
        (Open, Closed, "door swings shut"),
        (Closed, Locked, "bolt slides home"),
        (Locked, Closed, "bolt draws back"),
    ] {
        let effects = Rc::clone(effects);
        machine.add_transition(from, to, move || {
            effects.borrow_mut().push(effect.to_string());
        })?;
    }
    Ok(machine)
}

/// Run the fsm demonstration.
pub fn run(args: &FsmArgs) -> anyhow::Result<FsmReport> {
    let effects = Rc::new(RefCell::new(Vec::new()));
    let mut machine = door(&effects)?;

    let mut steps = Vec::with_capacity(args.steps.len());
    for &target in &args.steps {
        let step = match machine.transition_to(target) {
            Ok(()) => Step {
                target,
                accepted: true,
                effect: effects.borrow_mut().pop(),
                error: None,
            },
            Err(err) => {
                tracing::info!(?target, error = %err, "door step refused");
                Step {
                    target,
                    accepted: false,
                    effect: None,
                    error: Some(err.to_string()),
                }
            }
        };
        steps.push(step);
    }

    Ok(FsmReport {
        steps,
        final_state: *machine.current_state(),
        history: machine.history().to_vec(),
    })
}

impl fmt::Display for FsmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match (&step.effect, &step.error) {
                (_, Some(err)) => writeln!(f, "{:?}: rejected ({err})", step.target)?,
                (Some(effect), None) => writeln!(f, "{:?}: {effect}", step.target)?,
                (None, None) => writeln!(f, "{:?}: ok", step.target)?,
            }
        }
        write!(f, "final state: {:?}", self.final_state)
    }
}
