/// timestep.rs
/// Fixed Simulation Tick Constants
///
/// One logic tick (event checks + FSM update + steering) and one physics
/// tick (force integration) per frame, strictly in that order. Everything
/// downstream assumes this rate; changing it changes trajectories.

/// Simulation timestep (20ms) - logic and physics update rate
pub const TICK_DT: f32 = 0.02;

/// Ticks per simulated second
pub const TICKS_PER_SECOND: u32 = 50;

// Compile-time validation
const _: () = assert!(TICK_DT * TICKS_PER_SECOND as f32 == 1.0);
