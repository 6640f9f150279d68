use crate::utils::error::Result;

/// One raw start list file as handed over by the scan collaborator.
#[derive(Debug, Clone)]
pub struct StartListFile {
    /// File name, used for error attribution and nothing else.
    pub name: String,
    pub lines: Vec<String>,
}

/// Supplies raw start list files. The order of the returned files is not
/// guaranteed; the catalog applies its own ordering after parsing.
pub trait StartListSource {
    fn start_lists(&self) -> Result<Vec<StartListFile>>;
}

/// Render surface for the current heat. Implemented by the console board in
/// this crate and by whatever scoreboard window the display layer provides.
pub trait Scoreboard {
    /// Blank the board before a new heat is pushed.
    fn clear(&mut self);
    fn set_event(&mut self, event: &str, description: &str);
    fn set_heat(&mut self, heat: u32);
    /// Update one lane. `lane` is the 1-based physical lane number.
    fn set_lane(&mut self, lane: usize, name: &str, team: &str);
}
