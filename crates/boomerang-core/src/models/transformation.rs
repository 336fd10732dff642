//! The fixed upload recipe: trim to a 2 second end offset, play it as a boomerang,
//! then loop the result three times.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const TRIM_END_OFFSET: &str = "2.0";
pub const BOOMERANG_EFFECT: &str = "boomerang";
pub const LOOP_COUNT: u32 = 3;

/// One chained transformation component.
///
/// Serializes the way the vendor documents it in JSON, e.g. `{"end_offset":"2.0"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationStage {
    EndOffset(String),
    Effect(String),
}

impl TransformationStage {
    /// URL-syntax form of this stage (`eo_2.0`, `e_boomerang`).
    pub fn to_wire(&self) -> String {
        match self {
            TransformationStage::EndOffset(offset) => format!("eo_{}", offset),
            TransformationStage::Effect(effect) => format!("e_{}", effect),
        }
    }
}

/// Ordered chain of stages, applied left to right by the vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transformation(Vec<TransformationStage>);

impl Transformation {
    pub fn new(stages: Vec<TransformationStage>) -> Self {
        Self(stages)
    }

    /// The recipe applied to every upload, regardless of clip length or content.
    pub fn boomerang() -> Self {
        Self(vec![
            TransformationStage::EndOffset(TRIM_END_OFFSET.to_string()),
            TransformationStage::Effect(BOOMERANG_EFFECT.to_string()),
            TransformationStage::Effect(format!("loop:{}", LOOP_COUNT)),
        ])
    }

    pub fn stages(&self) -> &[TransformationStage] {
        &self.0
    }

    /// Chained string sent in the `transformation` upload parameter.
    pub fn to_wire(&self) -> String {
        self.0
            .iter()
            .map(TransformationStage::to_wire)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
