pub const WINDOW_TITLE: &str = "Tilt Jump";
pub const INITIAL_WINDOW_WIDTH: f32 = 1024.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 768.0;

// Visible world area in meters, the camera scales to fit it.
pub const VIEW_WIDTH: f32 = 16.0;
pub const VIEW_HEIGHT: f32 = 12.0;

pub const PHYSICS_STEP: f32 = 1.0 / 50.0;

// Turning
pub const MAX_TURN_SPEED: f32 = 3.0;
pub const TURN_RAMP_TIME: f32 = 0.5;
pub const BASE_TURN_SENSITIVITY: f32 = 40.0;
pub const TURN_SENSITIVITY_STEP: f32 = 10.0;
pub const DEFAULT_TURN_SENSITIVITY_LEVEL: u8 = 2;
pub const MAX_TURN_SENSITIVITY_LEVEL: u8 = 4;
pub const MAX_JUMP_TURN: f32 = 0.5;

// Jumping
pub const MAX_JUMP_POWER: f32 = 350.0;
pub const JUMP_POWER_SCALE: f32 = 50.0;
pub const JUMP_COOLDOWN: f32 = 0.15;
pub const JUMP_MAX_VERTICAL_VELOCITY: f32 = 4.0;

// Staying upright
pub const UPRIGHT_DAMP_ZONE: f32 = 5.75;
pub const ANGULAR_DAMPING_DIVISOR: f32 = 100.0;
pub const UPRIGHT_TOLERANCE: f32 = 0.04;
pub const UPRIGHT_ERROR_GAIN: f32 = 40.0;
pub const UPRIGHT_TORQUE_LIMIT: f32 = 20.0;
pub const UPRIGHT_TORQUE_GAIN: f32 = 1.35;
pub const OFF_BALANCE_ESCALATION_TIME: f32 = 1.2;
pub const MAX_OFF_BALANCE_MULTIPLIER: f32 = 4.0;

// Ground probe
pub const GROUND_PROBE_START_OFFSET: f32 = 0.01;
pub const GROUND_PROBE_SPREAD: f32 = 0.275;
pub const GROUND_PROBE_LENGTH: f32 = 0.2;

// Player body
pub const PLAYER_HALF_WIDTH: f32 = 0.3;
pub const PLAYER_HALF_HEIGHT: f32 = 0.5;
pub const PLAYER_MASS: f32 = 1.0;

// Arena
pub const ARENA_HALF_WIDTH: f32 = 7.5;
pub const ARENA_FLOOR_Y: f32 = -4.0;
pub const ARENA_WALL_HEIGHT: f32 = 12.0;
pub const ARENA_THICKNESS: f32 = 0.5;

pub const SETTINGS_DIR: &str = "tiltjump";
pub const SETTINGS_FILE: &str = "settings.json";
