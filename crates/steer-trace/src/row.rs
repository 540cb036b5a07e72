//! Plain data row types written by trace backends.

/// One agent's transform and velocity at a sampled frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSampleRow {
    pub agent_id: u32,
    pub frame: u64,
    pub x: f32,
    pub y: f32,
    /// Velocity components; zero for agents without a motion manager.
    pub vx: f32,
    pub vy: f32,
    /// Stored orientation in radians, counter-clockwise from +X.
    pub heading_rad: f32,
}

/// Summary statistics for one simulation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame: u64,
    /// Scaled simulation time at the end of the frame.
    pub sim_time_secs: f32,
    pub steered_agents: u64,
}
