// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const ATTACK_WAVE_PERIOD_SECONDS: f64 = 1.0;
pub const ENEMY_TURN_DELAY_SECONDS: f64 = 1.5;
pub const VICTORY_EXIT_DELAY_SECONDS: f64 = 2.0;
pub const RUN_EXIT_DELAY_SECONDS: f64 = 1.0;
pub const NOTIFICATION_SECONDS: f64 = 3.0;

// XP and leveling
pub const LEVEL_UP_BASE: f64 = 100.0;
pub const XP_GROWTH_FACTOR: f64 = 1.2;
pub const MAX_HP_PER_LEVEL: u32 = 10;
pub const DEATH_XP_RETENTION: f64 = 0.8;

// Starting character
pub const DEFAULT_PLAYER_NAME: &str = "Ben_Usgar";
pub const STARTING_HP: u32 = 100;

// Inventory
pub const MAX_INVENTORY_SLOTS: usize = 20;

// Combat formulas
pub const BARE_HANDED_DAMAGE: u32 = 1;
pub const DAMAGE_PER_LEVEL: u32 = 2;
pub const ARMOR_MITIGATION_DIVISOR: f64 = 10.0;
pub const MIN_ENEMY_DAMAGE: f64 = 1.0;
pub const RUN_ESCAPE_CHANCE: f64 = 0.7;
pub const BOSS_ENCOUNTER_CHANCE: f64 = 0.05;
pub const COMBAT_LOG_CAPACITY: usize = 50;

// Auras
pub const AURA_ROLL_CHANCE: f64 = 0.1;
pub const AURA_POWER_VARIANCE_MIN: f64 = 0.75;
pub const AURA_POWER_VARIANCE_MAX: f64 = 1.25;

// Gamepass
pub const DEFAULT_DROP_RATE_MULTIPLIER: f64 = 1.0;
pub const LOOT_PASS_MULTIPLIER: f64 = 2.0;

// Persistence
pub const SAVE_KEY: &str = "aura_chronicles_save";
pub const LOG_FILE_NAME: &str = "aura-chronicles.log";
