//! Declarative per-kind window layout
//!
//! Each kind maps to a [`LayoutRule`] for wide screens and one for narrow
//! screens. Rules are evaluated once, when the window opens.

use std::collections::HashMap;

use crate::math::{clamp_axis, Size, Vec2};
use super::{KindClass, Placement, WindowKind};

/// Default width below which the narrow-screen rules apply
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// One window dimension
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// Absolute size in pixels
    Fixed(f32),
    /// Fraction of the matching viewport dimension, optionally capped
    Fraction { of_viewport: f32, max: Option<f32> },
}

impl Dimension {
    fn resolve(self, viewport: f32) -> f32 {
        let value = match self {
            Dimension::Fixed(px) => px,
            Dimension::Fraction { of_viewport, max } => {
                let scaled = viewport.max(0.0) * of_viewport;
                max.map_or(scaled, |m| scaled.min(m))
            }
        };
        if value.is_finite() { value.max(0.0) } else { 0.0 }
    }
}

/// How one axis of the initial position is chosen
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisStrategy {
    /// Absolute offset in pixels
    Fixed(f32),
    /// Centered in the viewport
    Centered,
    /// `margin + jitter * spread`, a pseudo-random offset inside a safe margin
    Jitter { margin: f32, spread: f32 },
}

impl AxisStrategy {
    fn resolve(self, viewport: f32, extent: f32, jitter: f32) -> f32 {
        let proposed = match self {
            AxisStrategy::Fixed(px) => px,
            AxisStrategy::Centered => (viewport - extent) / 2.0,
            AxisStrategy::Jitter { margin, spread } => {
                let room = (viewport - extent - margin).max(0.0);
                margin + jitter.clamp(0.0, 1.0) * spread.min(room)
            }
        };
        clamp_axis(proposed, viewport - extent)
    }
}

/// Size and position rules for one kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRule {
    pub width: Dimension,
    pub height: Dimension,
    pub x: AxisStrategy,
    pub y: AxisStrategy,
}

impl LayoutRule {
    /// Fixed-size window placed with jitter inside a margin
    pub const fn floating(width: f32, height: f32) -> Self {
        Self {
            width: Dimension::Fixed(width),
            height: Dimension::Fixed(height),
            x: AxisStrategy::Jitter { margin: 40.0, spread: 240.0 },
            y: AxisStrategy::Jitter { margin: 40.0, spread: 160.0 },
        }
    }

    /// Window covering the whole viewport
    pub const fn full_screen() -> Self {
        Self {
            width: Dimension::Fraction { of_viewport: 1.0, max: None },
            height: Dimension::Fraction { of_viewport: 1.0, max: None },
            x: AxisStrategy::Fixed(0.0),
            y: AxisStrategy::Fixed(0.0),
        }
    }

    /// Narrow-screen window: nearly full width, centered, below the top bar
    pub const fn sheet(height_fraction: f32) -> Self {
        Self {
            width: Dimension::Fraction { of_viewport: 0.92, max: None },
            height: Dimension::Fraction { of_viewport: height_fraction, max: None },
            x: AxisStrategy::Centered,
            y: AxisStrategy::Fixed(56.0),
        }
    }

    /// Evaluate the rule against a viewport
    pub fn resolve(&self, placement: &Placement) -> (Vec2, Size) {
        let viewport = placement.viewport;
        let size = Size::new(
            self.width.resolve(viewport.width),
            self.height.resolve(viewport.height),
        );
        let position = Vec2::new(
            self.x.resolve(viewport.width, size.width, placement.jitter.x),
            self.y.resolve(viewport.height, size.height, placement.jitter.y),
        );
        (position, size)
    }
}

/// Wide and narrow rules for one kind
#[derive(Clone, Copy, Debug, PartialEq)]
struct LayoutEntry {
    desktop: LayoutRule,
    mobile: LayoutRule,
}

/// Lookup table from window kind to layout rules
#[derive(Clone, Debug)]
pub struct LayoutTable {
    entries: HashMap<KindClass, LayoutEntry>,
    fallback: LayoutRule,
    breakpoint: f32,
}

impl Default for LayoutTable {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(KindClass::Projects, LayoutEntry {
            desktop: LayoutRule::full_screen(),
            mobile: LayoutRule::full_screen(),
        });
        entries.insert(KindClass::About, LayoutEntry {
            desktop: LayoutRule::floating(520.0, 420.0),
            mobile: LayoutRule::sheet(0.7),
        });
        entries.insert(KindClass::Contact, LayoutEntry {
            desktop: LayoutRule::floating(440.0, 500.0),
            mobile: LayoutRule::sheet(0.75),
        });
        entries.insert(KindClass::Articles, LayoutEntry {
            desktop: LayoutRule {
                width: Dimension::Fraction { of_viewport: 0.5, max: Some(640.0) },
                height: Dimension::Fraction { of_viewport: 0.7, max: Some(560.0) },
                x: AxisStrategy::Centered,
                y: AxisStrategy::Jitter { margin: 40.0, spread: 80.0 },
            },
            mobile: LayoutRule::sheet(0.8),
        });
        entries.insert(KindClass::Sticky, LayoutEntry {
            desktop: LayoutRule {
                width: Dimension::Fixed(220.0),
                height: Dimension::Fixed(200.0),
                x: AxisStrategy::Jitter { margin: 24.0, spread: 120.0 },
                y: AxisStrategy::Jitter { margin: 24.0, spread: 120.0 },
            },
            mobile: LayoutRule {
                width: Dimension::Fixed(180.0),
                height: Dimension::Fixed(160.0),
                x: AxisStrategy::Fixed(12.0),
                y: AxisStrategy::Fixed(64.0),
            },
        });

        Self {
            entries,
            fallback: LayoutRule::floating(480.0, 400.0),
            breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

impl LayoutTable {
    /// Change the narrow-screen breakpoint
    pub fn with_breakpoint(mut self, breakpoint: f32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Replace the rules for one kind
    pub fn set_rule(&mut self, class: KindClass, desktop: LayoutRule, mobile: LayoutRule) {
        self.entries.insert(class, LayoutEntry { desktop, mobile });
    }

    /// Whether the viewport counts as a narrow (mobile) screen
    #[inline]
    pub fn is_mobile(&self, viewport: Size) -> bool {
        viewport.width < self.breakpoint
    }

    /// Rule that applies to `kind` at the given viewport
    pub fn rule_for(&self, kind: &WindowKind, viewport: Size) -> LayoutRule {
        let mobile = self.is_mobile(viewport);
        self.entries
            .get(&kind.class())
            .map(|e| if mobile { e.mobile } else { e.desktop })
            .unwrap_or(self.fallback)
    }

    /// Resolve default position and size for `kind`
    pub fn resolve(&self, kind: &WindowKind, placement: &Placement) -> (Vec2, Size) {
        self.rule_for(kind, placement.viewport).resolve(placement)
    }
}
