#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: u32,
    pub col: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub code: String,
    pub identifier: String,
    pub message: String,
    pub location: RenderableLocation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub violations: Vec<RenderableViolation>,
}
