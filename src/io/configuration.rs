//! Shape constants and runtime configuration defaults

/// Number of cells a shape can address
pub const CELL_CAPACITY: usize = 256;

// Fallback shape when nothing is configured
/// Width of the default shape
pub const DEFAULT_WIDTH: usize = 2;
/// Height of the default shape
pub const DEFAULT_HEIGHT: usize = 2;

// Row-text encoding
/// Character written for an active cell
pub const ACTIVE_CELL_CHAR: char = '1';
/// Character written for an inactive cell
pub const INACTIVE_CELL_CHAR: char = '0';

/// Halo width used when callers have no preference
pub const DEFAULT_EXTRUDE_MARGIN: usize = 1;

// Layout defaults
/// Edge length of one cell in layout units
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

// Batch processing
/// Extension of shape text files
pub const SHAPE_FILE_EXTENSION: &str = "txt";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
