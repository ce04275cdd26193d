//! Scripted input for the annotation control
//!
//! A script is a list of steps a host or user would perform. It drives an
//! [`AnnotationAction`] and records every event the control sends back.

use std::fmt;
use std::str::FromStr;

use crate::annotation::{AnnotationAction, AnnotationActionType, AnnotationEvent, ParseActionTypeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Host picks a menu entry
    Select(AnnotationActionType),
    /// User presses the primary button
    Press,
    /// User releases the primary button
    Release,
    /// Host reports the drawing interaction ended
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStepError {
    #[error("unknown step '{0}', expected select:<type>, press, release or finish")]
    UnknownStep(String),
    #[error(transparent)]
    ActionType(#[from] ParseActionTypeError),
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(name) = s.strip_prefix("select:") {
            return Ok(Step::Select(name.parse()?));
        }
        match s {
            "press" => Ok(Step::Press),
            "release" => Ok(Step::Release),
            "finish" => Ok(Step::Finish),
            _ => Err(ParseStepError::UnknownStep(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Select(t) => write!(f, "select:{t}"),
            Step::Press => f.write_str("press"),
            Step::Release => f.write_str("release"),
            Step::Finish => f.write_str("finish"),
        }
    }
}

/// Builder for step scripts
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    steps: Vec<Step>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, annot_type: AnnotationActionType) -> Self {
        self.steps.push(Step::Select(annot_type));
        self
    }

    pub fn press(mut self) -> Self {
        self.steps.push(Step::Press);
        self
    }

    pub fn release(mut self) -> Self {
        self.steps.push(Step::Release);
        self
    }

    pub fn finish(mut self) -> Self {
        self.steps.push(Step::Finish);
        self
    }

    pub fn build(self) -> Vec<Step> {
        self.steps
    }
}

pub fn apply(action: &mut AnnotationAction, step: Step) {
    match step {
        Step::Select(annot_type) => action.select_annotation(annot_type),
        Step::Press => action.toggle_pressed(),
        Step::Release => action.toggle_released(),
        Step::Finish => action.add_annot_finished(),
    }
}

/// Run `steps` and return the events each one produced
pub fn run(action: &mut AnnotationAction, steps: &[Step]) -> Vec<(Step, Vec<AnnotationEvent>)> {
    let rx = action.subscribe();
    steps
        .iter()
        .map(|&step| {
            apply(action, step);
            (step, rx.try_iter().collect())
        })
        .collect()
}
