use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Target frames per second

pub const SLIDE_INTERVAL: f32 = 4.0;          // Auto-advance period of the carousel (seconds)
pub const SLIDE_FADE_DURATION: f32 = 0.6;     // Cross-fade between two slides (seconds)
pub const TYPE_CADENCE: f32 = 0.026;          // Delay between two revealed characters (seconds)
pub const PULSE_DURATION: f32 = 0.2;          // Button click pulse (seconds)

pub const SPARKLE_CHANCE: f64 = 0.30;         // Probability of a sparkle on click
pub const BALLOON_CHANCE: f64 = 0.08;         // Probability of a balloon on click

pub const DEFAULT_BURST: usize = 160;         // Confetti particles per burst
pub const CONFETTI_GRAVITY: f32 = 0.08;       // Added to vy every tick
pub const CONFETTI_FADE_TICKS: f32 = 80.0;    // Alpha reaches 1.0 at this remaining life
pub const CONFETTI_FLOOR_MARGIN: f32 = 40.0;  // Particles below viewport height + margin are dropped

pub const CONFETTI_PALETTE: [Color; 6] = [
    Color { r: 0xff, g: 0x6b, b: 0x9a, a: 0xff },
    Color { r: 0x8a, g: 0x7a, b: 0xff, a: 0xff },
    Color { r: 0xff, g: 0xc0, b: 0x6b, a: 0xff },
    Color { r: 0x7d, g: 0xe0, b: 0xea, a: 0xff },
    Color { r: 0xff, g: 0xd6, b: 0xea, a: 0xff },
    Color { r: 0xe2, g: 0xdc, b: 0xff, a: 0xff },
];

pub const BACKGROUND: Color = Color { r: 0xfd, g: 0xf6, b: 0xfb, a: 0xff };
pub const INK: Color = Color { r: 0x4a, g: 0x3b, b: 0x5c, a: 0xff };
pub const MUTED_INK: Color = Color { r: 0x8a, g: 0x7a, b: 0x99, a: 0xff };
pub const ACCENT: Color = Color { r: 0xff, g: 0x6b, b: 0x9a, a: 0xff };
pub const CARD: Color = Color { r: 0xff, g: 0xff, b: 0xff, a: 0xff };
