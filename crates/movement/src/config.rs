use bevy::reflect::Reflect;
use serde::{Deserialize, Serialize};
use tj_util::constants::*;

#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct MovementConfig {
    pub turn: TurnConfig,
    pub jump: JumpConfig,
    pub upright: UprightConfig,
    pub probe: GroundProbeConfig,
}

#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TurnConfig {
    pub max_turn_speed: f32,
    pub ramp_time: f32,
    pub base_sensitivity: f32,
    pub max_jump_turn: f32,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            max_turn_speed: MAX_TURN_SPEED,
            ramp_time: TURN_RAMP_TIME,
            base_sensitivity: BASE_TURN_SENSITIVITY,
            max_jump_turn: MAX_JUMP_TURN,
        }
    }
}

impl TurnConfig {
    pub fn ramp_rate(&self) -> f32 {
        self.max_turn_speed / self.ramp_time.max(f32::EPSILON)
    }
}

#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct JumpConfig {
    pub power: f32,
    pub power_scale: f32,
    pub cooldown: f32,
    pub max_vertical_velocity: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            power: MAX_JUMP_POWER,
            power_scale: JUMP_POWER_SCALE,
            cooldown: JUMP_COOLDOWN,
            max_vertical_velocity: JUMP_MAX_VERTICAL_VELOCITY,
        }
    }
}

impl JumpConfig {
    pub fn impulse_magnitude(&self) -> f32 {
        self.power / self.power_scale
    }
}

#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct UprightConfig {
    pub damp_zone: f32,
    pub damping_divisor: f32,
    // Fraction of 180 degrees.
    pub tolerance: f32,
    pub error_gain: f32,
    pub torque_limit: f32,
    pub torque_gain: f32,
    pub escalation_time: f32,
    pub max_multiplier: f32,
}

impl Default for UprightConfig {
    fn default() -> Self {
        Self {
            damp_zone: UPRIGHT_DAMP_ZONE,
            damping_divisor: ANGULAR_DAMPING_DIVISOR,
            tolerance: UPRIGHT_TOLERANCE,
            error_gain: UPRIGHT_ERROR_GAIN,
            torque_limit: UPRIGHT_TORQUE_LIMIT,
            torque_gain: UPRIGHT_TORQUE_GAIN,
            escalation_time: OFF_BALANCE_ESCALATION_TIME,
            max_multiplier: MAX_OFF_BALANCE_MULTIPLIER,
        }
    }
}

impl UprightConfig {
    pub fn force_multiplier(&self, off_balance_time: f32) -> f32 {
        (off_balance_time / self.escalation_time.max(f32::EPSILON))
            .ceil()
            .clamp(1.0, self.max_multiplier.max(1.0))
    }
}

#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GroundProbeConfig {
    pub start_offset: f32,
    pub lateral_offsets: [f32; 3],
    pub ray_length: f32,
}

impl Default for GroundProbeConfig {
    fn default() -> Self {
        Self {
            start_offset: GROUND_PROBE_START_OFFSET,
            lateral_offsets: [-GROUND_PROBE_SPREAD, 0.0, GROUND_PROBE_SPREAD],
            ray_length: GROUND_PROBE_LENGTH,
        }
    }
}

#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerTuning {
    pub turn_sensitivity_bonus: f32,
}

impl PlayerTuning {
    pub fn from_sensitivity_level(level: u8) -> PlayerTuning {
        let steps = level as f32 - DEFAULT_TURN_SENSITIVITY_LEVEL as f32;
        PlayerTuning {
            turn_sensitivity_bonus: steps * TURN_SENSITIVITY_STEP,
        }
    }
}
