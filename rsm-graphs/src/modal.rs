//! Open/closed state of the station modals.
//!
//! Every modal is either closed or open, and at most one is open at a time:
//! opening a modal first closes all of them.

use rsm_stations::station::strip_whitespace;
use rsm_stations::StationRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalBoard {
    modal_ids: Vec<String>,
    open: Option<usize>,
    /// Bumped on every successful open so a rebuilt modal gets fresh state.
    generation: u64,
}

impl ModalBoard {
    pub fn new<I, S>(modal_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modal_ids: modal_ids.into_iter().map(Into::into).collect(),
            open: None,
            generation: 0,
        }
    }

    /// One modal per registry station, keyed by its modal id.
    pub fn for_registry(registry: &StationRegistry) -> Self {
        Self::new(registry.iter().map(|s| s.modal_id()))
    }

    /// Find a station's modal by whitespace-stripped id, falling back to
    /// the raw name.
    pub fn resolve(&self, station_name: &str) -> Option<usize> {
        let sanitized = strip_whitespace(station_name);
        self.position(&sanitized)
            .or_else(|| self.position(station_name))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.modal_ids.iter().position(|m| m == id)
    }

    /// Close everything, then open the station's modal.
    ///
    /// Returns the opened modal index, or `None` (with every modal closed)
    /// when the station has no modal.
    pub fn open(&mut self, station_name: &str) -> Option<usize> {
        self.close_all();
        let index = match self.resolve(station_name) {
            Some(index) => index,
            None => {
                log::warn!("Modal not found for: {}", station_name);
                return None;
            }
        };
        self.open = Some(index);
        self.generation += 1;
        Some(index)
    }

    /// Close one modal; a no-op if it is not the open one.
    pub fn close(&mut self, index: usize) {
        if self.open == Some(index) {
            self.open = None;
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Whether the modal with this DOM id is the open one.
    pub fn is_open_id(&self, modal_id: &str) -> bool {
        self.open_id() == Some(modal_id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open
            .and_then(|i| self.modal_ids.get(i))
            .map(String::as_str)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ModalBoard {
        ModalBoard::new(["Hazen", "LittleEagle", "Big Bend"])
    }

    #[test]
    fn starts_closed() {
        let board = board();
        assert_eq!(board.open_id(), None);
        assert!(!board.is_open_id("Hazen"));
    }

    #[test]
    fn resolves_sanitized_id_first() {
        let board = board();
        assert_eq!(board.resolve("Little Eagle"), Some(1));
        assert_eq!(board.resolve("Hazen"), Some(0));
    }

    #[test]
    fn falls_back_to_raw_name() {
        let board = board();
        assert_eq!(board.resolve("Big Bend"), Some(2));
        assert_eq!(board.resolve("Mott"), None);
    }

    #[test]
    fn opening_another_modal_closes_the_first() {
        let mut board = board();
        assert_eq!(board.open("Hazen"), Some(0));
        assert!(board.is_open_id("Hazen"));
        assert_eq!(board.open("Little Eagle"), Some(1));
        assert!(!board.is_open_id("Hazen"));
        assert!(board.is_open_id("LittleEagle"));
        assert_eq!(board.open_id(), Some("LittleEagle"));
        let open_count = ["Hazen", "LittleEagle", "Big Bend"]
            .iter()
            .filter(|id| board.is_open_id(id))
            .count();
        assert_eq!(open_count, 1);
    }

    #[test]
    fn missing_modal_leaves_all_closed() {
        let mut board = board();
        board.open("Hazen");
        assert_eq!(board.open("Mott"), None);
        assert_eq!(board.open_id(), None);
    }

    #[test]
    fn close_only_affects_open_modal() {
        let mut board = board();
        board.open("Hazen");
        board.close(1);
        assert!(board.is_open_id("Hazen"));
        board.close(0);
        assert_eq!(board.open_id(), None);
        board.close(0);
        assert_eq!(board.open_id(), None);
    }

    #[test]
    fn reopening_bumps_generation() {
        let mut board = board();
        board.open("Hazen");
        let first = board.generation();
        board.open("Hazen");
        assert!(board.generation() > first);
        board.open("Mott");
        assert_eq!(board.generation(), first + 1);
    }

    #[test]
    fn registry_board_uses_modal_ids() {
        let registry = StationRegistry::builtin().unwrap();
        let board = ModalBoard::for_registry(&registry);
        assert_eq!(board.resolve("Hazen"), Some(0));
        assert_eq!(board.resolve("Timber Lake"), Some(registry.len() - 1));
        assert!(!board.is_open_id("TimberLake"));
    }
}
