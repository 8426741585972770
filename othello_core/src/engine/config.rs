use crate::engine::dispatch::Difficulty;
use crate::engine::Strategy;
use crate::logic::board::BoardCoordinate;
use crate::logic::eval_constants::{
    CORNERS, C_SQUARES, MOBILITY_WEIGHT, WEIGHT_TABLE, X_SQUARES,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation Parameters
    pub weights: [[i32; 8]; 8],
    pub mobility_weight: i32,

    // Difficulty presets
    pub easy: Strategy,
    pub normal: Strategy,
    pub hard: Strategy,
    pub expert: Strategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: WEIGHT_TABLE,
            mobility_weight: MOBILITY_WEIGHT,

            easy: Strategy::Random,
            normal: Strategy::AlphaBeta { depth: 2 },
            hard: Strategy::AlphaBeta { depth: 4 },
            expert: Strategy::MonteCarlo { trials: 200 },
        }
    }
}

#[derive(Deserialize)]
struct EngineConfigJson {
    weight_corner: Option<f32>,
    weight_x_square: Option<f32>,
    weight_c_square: Option<f32>,
    mobility_weight: Option<f32>,

    easy: Option<Strategy>,
    normal: Option<Strategy>,
    hard: Option<Strategy>,
    expert: Option<Strategy>,
}

impl EngineConfig {
    #[must_use]
    pub fn weight(&self, pos: BoardCoordinate) -> i32 {
        self.weights
            .get(pos.row())
            .and_then(|rank| rank.get(pos.col()))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub const fn strategy_for(&self, difficulty: Difficulty) -> Strategy {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
            Difficulty::Expert => self.expert,
        }
    }

    /// Loads a tuning document where numeric fields are multipliers on the
    /// defaults and strategy fields replace the presets.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let json_config: EngineConfigJson = serde_json::from_str(json_str)?;
        let default = Self::default();

        let mut weights = default.weights;
        scale_cells(&mut weights, &CORNERS, json_config.weight_corner);
        scale_cells(&mut weights, &X_SQUARES, json_config.weight_x_square);
        scale_cells(&mut weights, &C_SQUARES, json_config.weight_c_square);

        Ok(Self {
            weights,
            mobility_weight: apply_scale(default.mobility_weight, json_config.mobility_weight),

            easy: json_config.easy.unwrap_or(default.easy),
            normal: json_config.normal.unwrap_or(default.normal),
            hard: json_config.hard.unwrap_or(default.hard),
            expert: json_config.expert.unwrap_or(default.expert),
        })
    }
}

fn scale_cells(weights: &mut [[i32; 8]; 8], cells: &[(usize, usize)], scale: Option<f32>) {
    for &(r, c) in cells {
        if let Some(w) = weights.get_mut(r).and_then(|row| row.get_mut(c)) {
            *w = apply_scale(*w, scale);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn apply_scale(default_val: i32, scale: Option<f32>) -> i32 {
    scale.map_or(default_val, |s| (default_val as f32 * s) as i32)
}
