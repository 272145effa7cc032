/// Character cells in the terminal progress bar at 100%.
pub const BAR_CELLS: usize = 40;
/// Minimum width of the line-number gutter.
pub const GUTTER_WIDTH: usize = 4;
/// Terminal size assumed when laying out stat counters.
pub const TERMINAL_COLUMNS: i32 = 80;
pub const TERMINAL_ROWS: i32 = 24;
