use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Hand Stack".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        // ~9.81 m/s^2 at 350 px per metre, Y-up world.
        Self { y: -3433.5 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Rapier solver iterations per substep. Tall towers need more than the
    /// engine default to stay rigid.
    pub iterations: usize,
}
impl Default for SolverConfig {
    fn default() -> Self {
        Self { iterations: 12 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FloorConfig {
    /// Distance from the bottom window edge to the floor surface.
    pub height_from_bottom: f32,
    pub thickness: f32,
    pub friction: f32,
    pub restitution: f32,
}
impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            height_from_bottom: 60.0,
            thickness: 40.0,
            friction: 1.0,
            restitution: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoxSpawnConfig {
    /// Boxes created at startup.
    pub count: usize,
    /// Full side length of a box.
    pub size: f32,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Spawn height as a fraction of window height above centre.
    pub spawn_height_frac: f32,
    /// Horizontal jitter applied to each spawned box.
    pub jitter: f32,
}
impl Default for BoxSpawnConfig {
    fn default() -> Self {
        Self {
            count: 3,
            size: 80.0,
            density: 5.0,
            friction: 1.0,
            restitution: 0.0,
            linear_damping: 1.8,
            angular_damping: 1.8,
            spawn_height_frac: 0.25,
            jitter: 160.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PinchConfig {
    /// Normalized thumb-tip to index-tip distance below which a pinch is read.
    pub threshold: f32,
    /// Margin inset from the screen edges; fingertips outside never pinch.
    pub boundary_margin: f32,
    /// A hand keeps gripping for this long after the last detected pinch.
    pub grace_secs: f32,
}
impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.06,
            boundary_margin: 20.0,
            grace_secs: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GrabConfig {
    /// Fingertip-to-box-centre distance within which a grab binds.
    pub capture_radius: f32,
    pub spring_k: f32,
    pub spring_damping: f32,
    /// Exponential smoothing factor for hand velocity estimation.
    pub accel_smooth: f32,
    /// Launch speed cap applied on release.
    pub max_launch_speed: f32,
}
impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            capture_radius: 100.0,
            spring_k: 35.0,
            spring_damping: 0.85,
            accel_smooth: 0.35,
            max_launch_speed: 2200.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StackConfig {
    /// Vertical band above the floor within which a box counts as grounded.
    pub floor_band: f32,
    /// Per-axis centre distance within which grounded status propagates.
    pub neighbor_tol_x: f32,
    pub neighbor_tol_y: f32,
    pub max_passes: usize,
    /// Rest height of a single box layer; subtracted so one box reads 0.
    pub baseline: f32,
    /// Linear scale from world px to the displayed unit (cm).
    pub units_per_px: f32,
}
impl Default for StackConfig {
    fn default() -> Self {
        Self {
            floor_band: 15.0,
            neighbor_tol_x: 90.0,
            neighbor_tol_y: 90.0,
            max_passes: 10,
            baseline: 80.0,
            units_per_px: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoundsConfig {
    /// How far outside the window a box may drift before it is recentred.
    pub padding: f32,
}
impl Default for BoundsConfig {
    fn default() -> Self {
        Self { padding: 100.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub solver: SolverConfig,
    pub floor: FloorConfig,
    pub boxes: BoxSpawnConfig,
    pub pinch: PinchConfig,
    pub grab: GrabConfig,
    pub stack: StackConfig,
    pub bounds: BoundsConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world? boxes will fall upward",
                self.gravity.y
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; boxes may float".into());
        }
        if self.solver.iterations == 0 {
            w.push("solver.iterations is 0; engine default is kept".into());
        }
        if self.floor.thickness <= 0.0 {
            w.push("floor.thickness must be > 0".into());
        }
        if self.boxes.count == 0 {
            w.push("boxes.count is 0; nothing will spawn until the add-box button is used".into());
        }
        if self.boxes.size <= 0.0 {
            w.push("boxes.size must be > 0".into());
        }
        if self.boxes.density <= 0.0 {
            w.push("boxes.density must be > 0".into());
        }
        if self.boxes.linear_damping < 0.0 || self.boxes.angular_damping < 0.0 {
            w.push("boxes damping negative -> energy gain".into());
        }
        if !(0.0..0.5).contains(&self.pinch.threshold) {
            w.push(format!(
                "pinch.threshold {} outside 0..0.5 (normalized landmark units)",
                self.pinch.threshold
            ));
        }
        if self.pinch.boundary_margin < 0.0 {
            w.push("pinch.boundary_margin negative".into());
        }
        if self.pinch.grace_secs < 0.0 {
            w.push("pinch.grace_secs negative -> pinch can never latch".into());
        }
        if self.grab.capture_radius <= 0.0 {
            w.push("grab.capture_radius must be > 0".into());
        }
        if self.grab.spring_k <= 0.0 {
            w.push("grab.spring_k must be > 0 (held boxes will not follow the hand)".into());
        }
        if !(0.0..=1.0).contains(&self.grab.spring_damping) {
            w.push(format!(
                "grab.spring_damping {} outside 0..1",
                self.grab.spring_damping
            ));
        }
        if !(0.0..=1.0).contains(&self.grab.accel_smooth) {
            w.push(format!(
                "grab.accel_smooth {} outside 0..1 -> unstable velocity estimate",
                self.grab.accel_smooth
            ));
        }
        if self.grab.max_launch_speed <= 0.0 {
            w.push("grab.max_launch_speed must be > 0".into());
        }
        if self.stack.floor_band <= 0.0 {
            w.push("stack.floor_band must be > 0; nothing will ever ground".into());
        }
        if self.stack.neighbor_tol_x <= 0.0 || self.stack.neighbor_tol_y <= 0.0 {
            w.push("stack neighbor tolerances must be > 0".into());
        }
        if self.stack.max_passes == 0 {
            w.push("stack.max_passes is 0; grounded status will not propagate".into());
        }
        if self.stack.units_per_px <= 0.0 {
            w.push("stack.units_per_px must be > 0".into());
        }
        if self.stack.baseline < 0.0 {
            w.push("stack.baseline negative -> inflated heights".into());
        }
        if self.bounds.padding < 0.0 {
            w.push("bounds.padding negative -> boxes recentred while still visible".into());
        }
        w
    }
}
