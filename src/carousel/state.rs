#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoAdvance {
    Running,   // Interval armed, advancing every SLIDE_INTERVAL
    Suspended, // Pointer is over the slides, interval cleared
    Disabled,  // No photos: placeholder only, nothing ever fires
}
