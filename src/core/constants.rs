// Tick and timing
pub const TICK_RATE_HZ: u32 = 60;
pub const MAX_CATCH_UP_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 4;

// Drawing surface (world units)
pub const SURFACE_WIDTH: f64 = 800.0;
pub const SURFACE_HEIGHT: f64 = 600.0;
pub const GROUND_OFFSET: f64 = 60.0;

// Player
pub const PLAYER_WIDTH: f64 = 40.0;
pub const PLAYER_HEIGHT: f64 = 40.0;
pub const PLAYER_X: f64 = 50.0;

// Jump physics (units per tick)
pub const JUMP_VELOCITY: f64 = -13.5;
pub const GRAVITY: f64 = 0.7;

// Scroll speed ramp
pub const BASE_SPEED: f64 = 6.0;
pub const SPEED_STEP: f64 = 0.8;
pub const SPEED_STEP_INTERVAL_SECONDS: u64 = 10;

// Obstacles
pub const OBSTACLE_MIN_SIZE: u32 = 45;
pub const OBSTACLE_MAX_SIZE: u32 = 65;
pub const PAIR_OVERLAP: f64 = 5.0;
pub const DOUBLE_CHANCE: f64 = 0.5;
pub const TRIPLE_CHANCE: f64 = 0.2;
pub const TRIPLE_MIN_SCORE: u32 = 10;
pub const SPAWN_GAP: f64 = 300.0;

// Collision
pub const HITBOX_MARGIN: f64 = 10.0;

// Break session pay model
pub const WORKING_DAYS_PER_MONTH: f64 = 21.0;
pub const WORKING_HOURS_PER_DAY: f64 = 8.0;
pub const DEFAULT_MONTHLY_SALARY: f64 = 3000.0;
