// Shared defaults and markup constants used by both web and native frontends.

// Map defaults
pub const DEFAULT_FOLD_ANGLE_DEG: f64 = 40.0;
pub const DEFAULT_ROTATION_DEG: [f64; 3] = [25.0, 0.0, 0.0]; // x, y, z

// Piece defaults
pub const DEFAULT_AMOUNT: usize = 3;
pub const DEFAULT_WIDTH_PX: f64 = 100.0;
pub const DEFAULT_RATIO: f64 = 4.0;
pub const DEFAULT_HEIGHT_PX: f64 = DEFAULT_WIDTH_PX * DEFAULT_RATIO; // recomputed on every render

// Default aspect
pub const DEFAULT_BACKGROUND: &str = "#FFF";
pub const DEFAULT_SEAMS: &str = "#FFFFFA";
pub const DEFAULT_SHADOW: &str = "#000000";

// Upper bounds keeping the generated DOM and CSS lengths sane
pub const MAX_AMOUNT: usize = 256;
pub const MAX_DIMENSION_PX: f64 = 100_000.0; // applies to width and derived height

// Fold angles at or beyond this magnitude flatten a half to zero projected width
pub const MAX_FOLD_ANGLE_DEG: f64 = 90.0;

// Inset glow used to draw the seams of each half
pub const SEAM_BLUR_PX: f64 = 45.0;

// Generated markup
pub const CLASS_MAP: &str = "map";
pub const CLASS_GROUP: &str = "map-group";
pub const CLASS_GROUP_CENTER: &str = "map-group-center";
pub const CLASS_PIECE_LEFT: &str = "map-piece map-piece-left";
pub const CLASS_PIECE_RIGHT: &str = "map-piece map-piece-right";
pub const CLASS_PIECE_SHADOW: &str = "map-piece-shadow";

// Decimal places kept when printing CSS lengths and angles
pub const CSS_DECIMALS: usize = 4;
